//! Joke Bot - writer–critic joke generation over a terminal menu
//!
//! One model drafts jokes, a second model (or the operator) judges them, and
//! a small state machine decides whether to redraft or show the result.

pub mod config;
pub mod error;
pub mod joke;
pub mod llm;
pub mod prompt;
pub mod runtime;
pub mod state_machine;
