//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::*;
use crate::joke::CriticType;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_node() -> impl Strategy<Value = Node> {
    prop::sample::select(Node::ALL.to_vec())
}

fn arb_route() -> impl Strategy<Value = MenuRoute> {
    prop::sample::select(MenuRoute::ALL.to_vec())
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        arb_route().prop_map(Event::MenuSelected),
        Just(Event::MenuInvalid),
        Just(Event::SettingsApplied),
        Just(Event::JokeDrafted),
        (any::<bool>(), 0u32..20).prop_map(|(approved, retry_count)| Event::JokeReviewed {
            approved,
            retry_count
        }),
        Just(Event::JokeShown),
        Just(Event::Exited),
    ]
}

fn arb_state() -> impl Strategy<Value = AgenticState> {
    (
        prop::sample::select(crate::joke::CATEGORIES.to_vec()),
        proptest::collection::vec("[a-z ]{1,30}", 0..5),
        "[a-z ]{0,30}",
        any::<bool>(),
        0u32..=MAX_CRITIC_REVIEWS,
        any::<bool>(),
    )
        .prop_map(|(category, texts, latest, approved, retry_count, human)| {
            let critic = if human { CriticType::Human } else { CriticType::Llm };
            let mut state = AgenticState::new(category, critic);
            for text in texts {
                state.bot.jokes.push(crate::joke::Joke::new(text, category));
            }
            state.latest_joke = latest;
            state.approved = approved;
            state.retry_count = retry_count;
            state
        })
}

// ============================================================================
// Router invariants
// ============================================================================

proptest! {
    #[test]
    fn approved_always_finalizes(retry_count in any::<u32>()) {
        prop_assert_eq!(route_review(true, retry_count), Node::ShowFinalJoke);
    }

    #[test]
    fn exhausted_always_finalizes(approved in any::<bool>(), extra in 0u32..1000) {
        prop_assert_eq!(
            route_review(approved, MAX_CRITIC_REVIEWS + extra),
            Node::ShowFinalJoke
        );
    }

    #[test]
    fn rejected_within_budget_loops_to_writer(retry_count in 0u32..MAX_CRITIC_REVIEWS) {
        prop_assert_eq!(route_review(false, retry_count), Node::Writer);
    }

    #[test]
    fn critic_transition_agrees_with_router(approved in any::<bool>(), retry_count in 0u32..20) {
        let next = transition(Node::Critic, Event::JokeReviewed { approved, retry_count }).unwrap();
        prop_assert_eq!(next, route_review(approved, retry_count));
    }
}

// ============================================================================
// Transition function invariants
// ============================================================================

proptest! {
    /// Deterministic: same input, same output
    #[test]
    fn transition_is_deterministic(node in arb_node(), event in arb_event()) {
        prop_assert_eq!(transition(node, event), transition(node, event));
    }

    /// Nothing leaves the terminal node
    #[test]
    fn done_is_absorbing(event in arb_event()) {
        prop_assert_eq!(transition(Node::Done, event), Err(TransitionError::SessionFinished));
    }

    /// Only the exit node reaches `Done`
    #[test]
    fn only_exit_reaches_done(node in arb_node(), event in arb_event()) {
        if let Ok(Node::Done) = transition(node, event) {
            prop_assert_eq!(node, Node::ExitBot);
        }
    }

    /// The writer only ever hands over to the critic
    #[test]
    fn writer_only_feeds_critic(event in arb_event()) {
        if let Ok(next) = transition(Node::Writer, event) {
            prop_assert_eq!(next, Node::Critic);
        }
    }

    /// Leaving the cycle always passes through `show_final_joke`
    #[test]
    fn cycle_exits_through_final_joke(node in arb_node(), event in arb_event()) {
        if let Ok(next) = transition(node, event) {
            if node.in_cycle() && !next.in_cycle() {
                prop_assert_eq!(node, Node::ShowFinalJoke);
            }
        }
    }
}

// ============================================================================
// State invariants
// ============================================================================

proptest! {
    /// Finalizing appends exactly one joke and clears the cycle fields
    #[test]
    fn finalize_appends_one_and_resets(mut state in arb_state()) {
        let before = state.bot.jokes.len();
        let candidate = state.latest_joke.clone();

        let joke = state.finalize_joke();

        prop_assert_eq!(state.bot.jokes.len(), before + 1);
        prop_assert_eq!(&joke.text, &candidate);
        prop_assert_eq!(&joke.category, &state.bot.category);
        prop_assert!(state.latest_joke.is_empty());
        prop_assert!(!state.approved);
        prop_assert_eq!(state.retry_count, 0);
    }
}
