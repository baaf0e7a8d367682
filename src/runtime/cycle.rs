//! Writer–critic cycle nodes
//!
//! One cycle drafts a joke, has it judged, and loops back to the writer
//! until the critic approves or the review budget runs out. The router in
//! `state_machine::transition` decides which; these nodes only update the
//! session state and report what happened.

use super::traits::Console;
use crate::error::BotError;
use crate::joke::{language_name, CriticType, Joke, DEFAULT_LANGUAGE};
use crate::llm::LlmService;
use crate::prompt::{build_prompt, PromptError, PromptTemplate};
use crate::state_machine::{AgenticState, BotState, Event};
use similar::TextDiff;

/// Drafts requested from the writer per critic round
pub const MAX_WRITER_ATTEMPTS: u32 = 5;

/// Ratio above which a draft counts as a repeat of an accepted joke
pub const SIMILARITY_THRESHOLD: f32 = 0.7;

/// Stands in for a joke when every draft was a repeat
pub const WRITER_FAILURE_SENTINEL: &str = "Failed to generate a unique joke after several attempts.";

// ============================================================================
// Similarity
// ============================================================================

/// Normalized character-sequence similarity in `[0, 1]`
pub fn similarity(a: &str, b: &str) -> f32 {
    TextDiff::from_chars(a, b).ratio()
}

pub fn is_similar(a: &str, b: &str) -> bool {
    similarity(a, b) > SIMILARITY_THRESHOLD
}

fn repeats_history(candidate: &str, jokes: &[Joke]) -> bool {
    jokes.iter().any(|prev| is_similar(&prev.text, candidate))
}

// ============================================================================
// Writer
// ============================================================================

/// Writer prompt: the template plus the active category (and language, when
/// it is not English)
pub fn writer_prompt(template: &PromptTemplate, bot: &BotState) -> Result<String, PromptError> {
    let mut prompt = build_prompt(template, "")?;
    prompt.push_str(&format!("\n\nThe category is: {}", bot.category));
    if bot.language != DEFAULT_LANGUAGE {
        let language = language_name(&bot.language).unwrap_or(bot.language.as_str());
        prompt.push_str(&format!("\nThe language is: {language}"));
    }
    Ok(prompt)
}

/// Ask the writer for a joke that does not repeat the session history.
///
/// Returns the sentinel text after `MAX_WRITER_ATTEMPTS` repeats.
pub async fn draft_joke<C: Console + ?Sized>(
    writer: &dyn LlmService,
    template: &PromptTemplate,
    bot: &BotState,
    console: &mut C,
) -> Result<String, BotError> {
    let prompt = writer_prompt(template, bot)?;

    for attempt in 1..=MAX_WRITER_ATTEMPTS {
        let candidate = writer.invoke(&prompt).await?.content;

        if repeats_history(&candidate, &bot.jokes) {
            tracing::debug!(attempt, "Draft repeats an earlier joke");
            console.print("   ⚠️ Similar joke detected. Generating a new one...");
            continue;
        }

        tracing::info!(attempt, category = %bot.category, "Drafted new joke");
        console.print("   ✅ New joke generated.");
        return Ok(candidate);
    }

    tracing::warn!(
        attempts = MAX_WRITER_ATTEMPTS,
        "Writer could not produce a unique joke"
    );
    Ok(WRITER_FAILURE_SENTINEL.to_string())
}

/// Writer node: store a fresh draft as `latest_joke`
pub async fn writer_node<C: Console + ?Sized>(
    writer: &dyn LlmService,
    template: &PromptTemplate,
    state: &mut AgenticState,
    console: &mut C,
) -> Result<Event, BotError> {
    state.latest_joke = draft_joke(writer, template, &state.bot, console).await?;
    Ok(Event::JokeDrafted)
}

// ============================================================================
// Critic
// ============================================================================

/// LLM verdicts count as approval when they contain "yes" anywhere
pub fn is_approval(decision: &str) -> bool {
    decision.trim().to_lowercase().contains("yes")
}

async fn llm_verdict(
    critic: &dyn LlmService,
    template: &PromptTemplate,
    joke: &str,
) -> Result<bool, BotError> {
    let prompt = build_prompt(template, joke)?;
    let decision = critic.invoke(&prompt).await?.content;
    let approved = is_approval(&decision);
    tracing::info!(approved, decision = %decision.trim(), "Critic verdict");
    Ok(approved)
}

fn human_verdict<C: Console + ?Sized>(joke: &str, console: &mut C) -> Result<bool, BotError> {
    console.print(&format!("\n👉 joke for approval:\n{joke}\n"));
    let answer = console.read_line("Do you approve this joke? (y/n): ")?;
    Ok(answer.is_some_and(|a| a.trim().to_lowercase() == "y"))
}

/// Critic node: judge `latest_joke` and count the review
pub async fn critic_node<C: Console + ?Sized>(
    critic: &dyn LlmService,
    template: &PromptTemplate,
    state: &mut AgenticState,
    console: &mut C,
) -> Result<Event, BotError> {
    let approved = match state.critic_type {
        CriticType::Human => human_verdict(&state.latest_joke, console)?,
        CriticType::Llm => llm_verdict(critic, template, &state.latest_joke).await?,
    };

    state.approved = approved;
    state.retry_count += 1;

    Ok(Event::JokeReviewed {
        approved,
        retry_count: state.retry_count,
    })
}

// ============================================================================
// Finalization
// ============================================================================

pub fn print_joke<C: Console + ?Sized>(joke: &Joke, approved: bool, console: &mut C) {
    let verdict = if approved {
        "✅ approved"
    } else {
        "❌ not approved"
    };
    console.print(&format!(
        "\n😂 [{}] {}\n   Critic verdict: {verdict}\n",
        joke.category.to_uppercase(),
        joke.text
    ));
}

/// Store the current draft, print it, and reset the cycle
pub fn show_final_joke<C: Console + ?Sized>(state: &mut AgenticState, console: &mut C) -> Event {
    let approved = state.approved;
    let retries = state.retry_count;
    let joke = state.finalize_joke();
    tracing::info!(approved, retries, category = %joke.category, "Joke finalized");
    print_joke(&joke, approved, console);
    Event::JokeShown
}
