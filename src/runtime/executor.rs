//! Joke bot session executor

use super::cycle::{critic_node, show_final_joke, writer_node};
use super::menu::{exit_bot, reset_jokes, show_menu, update_category, update_critic_type, update_language};
use super::traits::Console;
use crate::config::PromptCatalog;
use crate::error::BotError;
use crate::llm::LlmService;
use crate::state_machine::{transition, AgenticState, Event, Node};
use std::sync::Arc;

/// Drives one interactive session: run the current node, feed its event to
/// `transition`, repeat until the session is done
pub struct JokeBot<C: Console> {
    writer: Arc<dyn LlmService>,
    critic: Arc<dyn LlmService>,
    prompts: PromptCatalog,
    console: C,
}

impl<C: Console> JokeBot<C> {
    pub fn new(
        writer: Arc<dyn LlmService>,
        critic: Arc<dyn LlmService>,
        prompts: PromptCatalog,
        console: C,
    ) -> Self {
        Self {
            writer,
            critic,
            prompts,
            console,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Run the logic of a single node
    pub async fn step(&mut self, node: Node, state: &mut AgenticState) -> Result<Event, BotError> {
        let console = &mut self.console;
        match node {
            Node::ShowMenu => show_menu(state, console),
            Node::UpdateCategory => update_category(state, console),
            Node::UpdateLanguage => update_language(state, console),
            Node::UpdateCriticType => update_critic_type(state, console),
            Node::ResetJokes => Ok(reset_jokes(state, console)),
            Node::Writer => {
                writer_node(
                    self.writer.as_ref(),
                    &self.prompts.joke_writer_cfg,
                    state,
                    console,
                )
                .await
            }
            Node::Critic => {
                critic_node(
                    self.critic.as_ref(),
                    &self.prompts.joke_critic_cfg,
                    state,
                    console,
                )
                .await
            }
            Node::ShowFinalJoke => Ok(show_final_joke(state, console)),
            Node::ExitBot => Ok(exit_bot(state, console)),
            Node::Done => Err(crate::state_machine::TransitionError::SessionFinished.into()),
        }
    }

    /// Run the session from the menu until the user exits
    pub async fn run(&mut self, state: &mut AgenticState) -> Result<(), BotError> {
        tracing::info!(
            writer = self.writer.model_id(),
            critic = self.critic.model_id(),
            category = %state.bot.category,
            "Starting joke bot session"
        );

        let mut node = Node::default();
        while !node.is_terminal() {
            let event = self.step(node, state).await?;
            let next = transition(node, event)?;
            tracing::debug!(from = %node, to = %next, ?event, "Transition");
            node = next;
        }

        tracing::info!(jokes = state.bot.jokes.len(), "Joke bot session finished");
        Ok(())
    }
}
