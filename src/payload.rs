//! Transaction payload decoding
//!
//! Payloads are UTF-8 text of the form `name,action,space`. The space field
//! is only meaningful for `take` and may be empty otherwise.

use crate::{Error, Result, game::Action};

/// A decoded payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BbciPayload {
    pub action: Action,
}

impl BbciPayload {
    /// Decode and validate raw payload bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if:
    /// - the bytes are not UTF-8 or do not split into exactly three fields
    /// - the name is empty or contains `|`
    /// - the action is empty or unknown
    /// - a `take` has a space that is not an integer from 1 to 9
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes)
            .map_err(|_| Error::invalid_input("Invalid payload serialization"))?;

        let fields: Vec<&str> = text.split(',').collect();
        let [name, action, space] = fields.as_slice() else {
            return Err(Error::invalid_input("Invalid payload serialization"));
        };

        if name.is_empty() {
            return Err(Error::invalid_input("Name is required"));
        }
        if name.contains('|') {
            return Err(Error::invalid_input("Name cannot contain '|'"));
        }
        if action.is_empty() {
            return Err(Error::invalid_input("Action is required"));
        }

        let name = (*name).to_string();
        let action = match *action {
            "create" => Action::Create { name },
            "delete" => Action::Delete { name },
            "take" => Action::Take {
                name,
                space: parse_space(space)?,
            },
            other => return Err(Error::invalid_input(format!("Invalid action: {other}"))),
        };

        Ok(BbciPayload { action })
    }

    /// Encode an action the way clients submit it.
    pub fn to_bytes(action: &Action) -> Vec<u8> {
        let space = match action {
            Action::Take { space, .. } => space.to_string(),
            _ => String::new(),
        };
        format!("{},{},{}", action.name(), action.keyword(), space).into_bytes()
    }

    pub fn name(&self) -> &str {
        self.action.name()
    }
}

fn parse_space(field: &str) -> Result<usize> {
    field
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|space| (1..=9).contains(space))
        .ok_or_else(|| Error::invalid_input("Space must be an integer from 1 to 9"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_message(bytes: &[u8]) -> String {
        match BbciPayload::from_bytes(bytes).unwrap_err() {
            Error::InvalidInput { message } => message,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_create() {
        let payload = BbciPayload::from_bytes(b"g1,create,").unwrap();
        assert_eq!(
            payload.action,
            Action::Create {
                name: "g1".to_string()
            }
        );
        assert_eq!(payload.name(), "g1");
    }

    #[test]
    fn test_take() {
        let payload = BbciPayload::from_bytes(b"g1,take,5").unwrap();
        assert_eq!(
            payload.action,
            Action::Take {
                name: "g1".to_string(),
                space: 5
            }
        );
    }

    #[test]
    fn test_delete_ignores_space() {
        let payload = BbciPayload::from_bytes(b"g1,delete,garbage").unwrap();
        assert_eq!(
            payload.action,
            Action::Delete {
                name: "g1".to_string()
            }
        );
    }

    #[test]
    fn test_wrong_field_count() {
        assert_eq!(invalid_message(b"g1,create"), "Invalid payload serialization");
        assert_eq!(invalid_message(b"g1,take,1,2"), "Invalid payload serialization");
        assert_eq!(invalid_message(&[0xff, 0xfe]), "Invalid payload serialization");
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(invalid_message(b",create,"), "Name is required");
        assert_eq!(invalid_message(b"a|b,create,"), "Name cannot contain '|'");
    }

    #[test]
    fn test_action_rules() {
        assert_eq!(invalid_message(b"g1,,"), "Action is required");
        assert_eq!(invalid_message(b"g1,move,1"), "Invalid action: move");
    }

    #[test]
    fn test_space_rules() {
        for bad in ["g1,take,0", "g1,take,10", "g1,take,x", "g1,take,", "g1,take,-1"] {
            assert_eq!(
                invalid_message(bad.as_bytes()),
                "Space must be an integer from 1 to 9",
                "payload {bad}"
            );
        }
    }

    #[test]
    fn test_to_bytes() {
        let take = Action::Take {
            name: "g1".to_string(),
            space: 7,
        };
        assert_eq!(BbciPayload::to_bytes(&take), b"g1,take,7");

        let create = Action::Create {
            name: "g1".to_string(),
        };
        assert_eq!(BbciPayload::to_bytes(&create), b"g1,create,");
    }
}
