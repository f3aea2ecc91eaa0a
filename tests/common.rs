//! Common test utilities for the bbci test suite.
//!
//! Helpers for driving games through the app container.

#![allow(dead_code)]

use bbci::{
    ApplyError,
    adapters::InMemoryContext,
    app::App,
    game::{Action, GameRecord},
    ports::NoopObserver,
};

pub const P1: &str = "02a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90";
pub const P2: &str = "03f0e1d2c3b4a5968778695a4b3c2d1e0ff0e1d2c3b4a5968778695a4b3c2d1e0f";
pub const P3: &str = "02ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

/// App over fresh in-memory state, with the state handle returned for inspection.
pub fn fresh_app() -> (App, InMemoryContext) {
    let state = InMemoryContext::new();
    let app = App::for_testing()
        .with_state(state.clone())
        .with_observer(NoopObserver)
        .build();
    (app, state)
}

pub fn create(app: &App, signer: &str, name: &str) -> Result<(), ApplyError> {
    app.execute(
        signer,
        &Action::Create {
            name: name.to_string(),
        },
    )
}

pub fn take(app: &App, signer: &str, name: &str, space: usize) -> Result<(), ApplyError> {
    app.execute(
        signer,
        &Action::Take {
            name: name.to_string(),
            space,
        },
    )
}

pub fn game(app: &App, name: &str) -> GameRecord {
    app.game(name)
        .expect("state readable")
        .unwrap_or_else(|| panic!("game {name} should exist"))
}
