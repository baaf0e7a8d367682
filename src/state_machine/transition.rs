//! Pure state transition function

use super::{Event, Node, MAX_CRITIC_REVIEWS};
use thiserror::Error;

/// Errors that can occur during transition
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Session already finished")]
    SessionFinished,
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Pure transition function
///
/// Given the node that just ran and the event it produced, returns the next
/// node. No I/O, no state mutation.
pub fn transition(node: Node, event: Event) -> Result<Node, TransitionError> {
    match (node, event) {
        // ============================================================
        // Menu dispatch
        // ============================================================
        (Node::ShowMenu, Event::MenuSelected(route)) => Ok(route.target()),

        // Invalid selection: show the menu again, state untouched
        (Node::ShowMenu, Event::MenuInvalid) => Ok(Node::ShowMenu),

        (
            Node::UpdateCategory
            | Node::UpdateLanguage
            | Node::UpdateCriticType
            | Node::ResetJokes,
            Event::SettingsApplied,
        ) => Ok(Node::ShowMenu),

        // ============================================================
        // Writer–critic cycle
        // ============================================================
        (Node::Writer, Event::JokeDrafted) => Ok(Node::Critic),

        (
            Node::Critic,
            Event::JokeReviewed {
                approved,
                retry_count,
            },
        ) => Ok(route_review(approved, retry_count)),

        (Node::ShowFinalJoke, Event::JokeShown) => Ok(Node::ShowMenu),

        // ============================================================
        // Exit
        // ============================================================
        (Node::ExitBot, Event::Exited) => Ok(Node::Done),

        (Node::Done, _) => Err(TransitionError::SessionFinished),

        (node, event) => Err(TransitionError::InvalidTransition(format!(
            "No transition from {node} with event {event:?}"
        ))),
    }
}

/// Writer–critic router
///
/// Approval and an exhausted review budget both finalize the current draft.
pub fn route_review(approved: bool, retry_count: u32) -> Node {
    if approved || retry_count >= MAX_CRITIC_REVIEWS {
        Node::ShowFinalJoke
    } else {
        Node::Writer
    }
}
