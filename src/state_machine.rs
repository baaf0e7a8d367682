//! Joke bot state machine
//!
//! Node logic lives in the runtime; this module only decides where control
//! goes next. `transition` is pure: the same node and event always produce
//! the same next node.

pub mod event;
pub mod graph;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use event::{Event, MenuRoute};
pub use state::{AgenticState, BotState, Node, MAX_CRITIC_REVIEWS};
pub use transition::{route_review, transition, TransitionError};
