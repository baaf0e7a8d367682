//! Session state and graph nodes

use crate::joke::{CriticType, Joke, DEFAULT_CATEGORY, DEFAULT_LANGUAGE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Critic evaluations allowed per cycle before the current draft is finalized
pub const MAX_CRITIC_REVIEWS: u32 = 5;

// ============================================================================
// Nodes
// ============================================================================

/// A node of the joke graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Node {
    /// Print options and read a selection
    #[default]
    ShowMenu,
    UpdateCategory,
    UpdateLanguage,
    UpdateCriticType,
    ResetJokes,
    /// Draft a candidate joke
    Writer,
    /// Approve or reject the candidate
    Critic,
    /// Store and print the candidate, then reset the cycle
    ShowFinalJoke,
    ExitBot,
    /// Session over
    Done,
}

impl Node {
    pub const ALL: [Node; 10] = [
        Node::ShowMenu,
        Node::UpdateCategory,
        Node::UpdateLanguage,
        Node::UpdateCriticType,
        Node::ResetJokes,
        Node::Writer,
        Node::Critic,
        Node::ShowFinalJoke,
        Node::ExitBot,
        Node::Done,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Node::ShowMenu => "show_menu",
            Node::UpdateCategory => "update_category",
            Node::UpdateLanguage => "update_language",
            Node::UpdateCriticType => "update_critic_type",
            Node::ResetJokes => "reset_jokes",
            Node::Writer => "writer",
            Node::Critic => "critic",
            Node::ShowFinalJoke => "show_final_joke",
            Node::ExitBot => "exit_bot",
            Node::Done => "__end__",
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Node::Done
    }

    /// Nodes belonging to the writer–critic cycle
    pub fn in_cycle(self) -> bool {
        matches!(self, Node::Writer | Node::Critic | Node::ShowFinalJoke)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Session state
// ============================================================================

/// Settings and history shared by every menu handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotState {
    pub category: String,
    pub language: String,
    pub jokes: Vec<Joke>,
    pub quit: bool,
}

impl BotState {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            jokes: Vec::new(),
            quit: false,
        }
    }
}

impl Default for BotState {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY)
    }
}

/// `BotState` plus the bookkeeping of the writer–critic cycle in flight
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgenticState {
    pub bot: BotState,
    /// Candidate under review; empty between cycles
    pub latest_joke: String,
    pub approved: bool,
    /// Critic evaluations in the current cycle
    pub retry_count: u32,
    pub critic_type: CriticType,
}

impl AgenticState {
    pub fn new(category: impl Into<String>, critic_type: CriticType) -> Self {
        Self {
            bot: BotState::new(category),
            critic_type,
            ..Self::default()
        }
    }

    /// Move the candidate into the joke history and clear the cycle fields.
    pub fn finalize_joke(&mut self) -> Joke {
        let joke = Joke::new(std::mem::take(&mut self.latest_joke), self.bot.category.clone());
        self.bot.jokes.push(joke.clone());
        self.reset_cycle();
        joke
    }

    pub fn reset_cycle(&mut self) {
        self.latest_joke.clear();
        self.approved = false;
        self.retry_count = 0;
    }
}
