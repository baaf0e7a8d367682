//! Events produced by running a node

use super::state::Node;

/// Outcome of a node, fed to `transition`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The menu read a valid selection
    MenuSelected(MenuRoute),
    /// The menu read something it could not map to a route
    MenuInvalid,
    /// A settings handler finished (category, language, critic, reset)
    SettingsApplied,
    /// The writer stored a candidate in `latest_joke`
    JokeDrafted,
    /// The critic judged the candidate
    JokeReviewed { approved: bool, retry_count: u32 },
    /// The final joke was stored and printed
    JokeShown,
    /// `quit` was set
    Exited,
}

/// Symbolic menu routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuRoute {
    FetchJoke,
    UpdateCategory,
    UpdateLanguage,
    UpdateCriticType,
    ResetJokes,
    ExitBot,
}

impl MenuRoute {
    /// Routes in menu order; option `n` selects `ALL[n - 1]`
    pub const ALL: [MenuRoute; 6] = [
        MenuRoute::FetchJoke,
        MenuRoute::UpdateCategory,
        MenuRoute::UpdateLanguage,
        MenuRoute::UpdateCriticType,
        MenuRoute::ResetJokes,
        MenuRoute::ExitBot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MenuRoute::FetchJoke => "fetch_joke",
            MenuRoute::UpdateCategory => "update_category",
            MenuRoute::UpdateLanguage => "update_language",
            MenuRoute::UpdateCriticType => "update_critic_type",
            MenuRoute::ResetJokes => "reset_jokes",
            MenuRoute::ExitBot => "exit_bot",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuRoute::FetchJoke => "Tell me a joke",
            MenuRoute::UpdateCategory => "Change category",
            MenuRoute::UpdateLanguage => "Change language",
            MenuRoute::UpdateCriticType => "Change critic type",
            MenuRoute::ResetJokes => "Reset joke history",
            MenuRoute::ExitBot => "Exit",
        }
    }

    /// Node a route dispatches to
    pub fn target(self) -> Node {
        match self {
            MenuRoute::FetchJoke => Node::Writer,
            MenuRoute::UpdateCategory => Node::UpdateCategory,
            MenuRoute::UpdateLanguage => Node::UpdateLanguage,
            MenuRoute::UpdateCriticType => Node::UpdateCriticType,
            MenuRoute::ResetJokes => Node::ResetJokes,
            MenuRoute::ExitBot => Node::ExitBot,
        }
    }

    /// Map a menu selection (`"1"`..`"6"`, or a route name) to a route
    pub fn from_choice(choice: &str) -> Option<Self> {
        let choice = choice.trim().to_lowercase();
        if let Ok(n) = choice.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied();
        }
        Self::ALL.iter().copied().find(|r| r.name() == choice)
    }
}
