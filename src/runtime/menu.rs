//! Menu and settings nodes
//!
//! Each handler reads at most one line from the console, updates the session
//! state, and reports an `Event`. Invalid input never changes state.

use super::traits::Console;
use crate::error::BotError;
use crate::joke::{category_emoji, language_name, CriticType, CATEGORIES, LANGUAGES};
use crate::state_machine::{AgenticState, Event, MenuRoute};

const RULE: &str = "==================================================";

fn header(state: &AgenticState) -> String {
    let language = language_name(&state.bot.language).unwrap_or(state.bot.language.as_str());
    format!(
        "\n{RULE}\n🎭 Joke Bot  |  {} {}  |  🌐 {}  |  🧐 {}  |  📚 {} jokes\n{RULE}",
        category_emoji(&state.bot.category),
        state.bot.category,
        language,
        state.critic_type.display_name(),
        state.bot.jokes.len(),
    )
}

/// Parse a 1-based selection against a list of `len` options
fn pick(choice: &str, len: usize) -> Option<usize> {
    choice
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .filter(|&i| i < len)
}

pub fn show_menu<C: Console + ?Sized>(
    state: &AgenticState,
    console: &mut C,
) -> Result<Event, BotError> {
    console.print(&header(state));
    for (i, route) in MenuRoute::ALL.iter().enumerate() {
        console.print(&format!("    {}. {}", i + 1, route.label()));
    }

    let Some(choice) = console.read_line("    Enter choice (1-6): ")? else {
        tracing::debug!("End of input at menu");
        return Ok(Event::MenuSelected(MenuRoute::ExitBot));
    };

    match MenuRoute::from_choice(&choice) {
        Some(route) => {
            tracing::debug!(route = route.name(), "Menu selection");
            Ok(Event::MenuSelected(route))
        }
        None => {
            console.print("    ❌ Invalid choice. Please try again.");
            Ok(Event::MenuInvalid)
        }
    }
}

pub fn update_category<C: Console + ?Sized>(
    state: &mut AgenticState,
    console: &mut C,
) -> Result<Event, BotError> {
    console.print("\n📂 Select a category:");
    for (i, category) in CATEGORIES.iter().enumerate() {
        console.print(&format!(
            "    {}. {} {}",
            i + 1,
            category_emoji(category),
            category
        ));
    }

    let choice = console.read_line("    Enter category number: ")?;
    match choice.as_deref().and_then(|c| pick(c, CATEGORIES.len())) {
        Some(i) => {
            state.bot.category = CATEGORIES[i].to_string();
            tracing::info!(category = %state.bot.category, "Category changed");
            console.print(&format!("    ✅ Category set to: {}", state.bot.category));
        }
        None => console.print(&format!(
            "    ❌ Invalid choice. Keeping: {}",
            state.bot.category
        )),
    }
    Ok(Event::SettingsApplied)
}

pub fn update_language<C: Console + ?Sized>(
    state: &mut AgenticState,
    console: &mut C,
) -> Result<Event, BotError> {
    console.print("\n🌐 Select a language:");
    for (i, (code, name)) in LANGUAGES.iter().enumerate() {
        console.print(&format!("    {}. {name} ({code})", i + 1));
    }

    let choice = console.read_line("    Enter language number: ")?;
    match choice.as_deref().and_then(|c| pick(c, LANGUAGES.len())) {
        Some(i) => {
            let (code, name) = LANGUAGES[i];
            state.bot.language = code.to_string();
            tracing::info!(language = code, "Language changed");
            console.print(&format!("    ✅ Language set to: {name}"));
        }
        None => console.print(&format!(
            "    ❌ Invalid choice. Keeping: {}",
            state.bot.language
        )),
    }
    Ok(Event::SettingsApplied)
}

/// `1` selects the human critic; anything else the LLM critic
pub fn update_critic_type<C: Console + ?Sized>(
    state: &mut AgenticState,
    console: &mut C,
) -> Result<Event, BotError> {
    console.print("\n🧐 Select a critic:");
    console.print(&format!("    0. {}", CriticType::Llm.display_name()));
    console.print(&format!("    1. {}", CriticType::Human.display_name()));

    let choice = console.read_line("    Enter critic number: ")?;
    state.critic_type = match choice.as_deref().map(str::trim) {
        Some("1") => CriticType::Human,
        _ => CriticType::Llm,
    };
    tracing::info!(critic = %state.critic_type, "Critic changed");
    console.print(&format!(
        "    ✅ Critic set to: {}",
        state.critic_type.display_name()
    ));
    Ok(Event::SettingsApplied)
}

pub fn reset_jokes<C: Console + ?Sized>(state: &mut AgenticState, console: &mut C) -> Event {
    let cleared = state.bot.jokes.len();
    state.bot.jokes.clear();
    tracing::info!(cleared, "Joke history reset");
    console.print("    🧹 Joke history cleared.");
    Event::SettingsApplied
}

pub fn exit_bot<C: Console + ?Sized>(state: &mut AgenticState, console: &mut C) -> Event {
    state.bot.quit = true;
    console.print("\n👋 Goodbye!");
    Event::Exited
}
