//! Interactive joke bot

use joke_bot::config::{AppConfig, PromptCatalog};
use joke_bot::llm::{LlmConfig, ModelRegistry};
use joke_bot::runtime::{JokeBot, StdConsole};
use joke_bot::state_machine::AgenticState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never interleave with the menu
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "joke_bot=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(path = %config.prompt_config_path.display(), "Loading prompt catalog");
    let prompts = PromptCatalog::load(&config.prompt_config_path)?;

    let registry = ModelRegistry::new(LlmConfig::from_env());
    tracing::info!(
        available = ?registry.available_models(),
        configured = ?registry.configured_models(),
        "LLM registry initialized"
    );
    let writer = registry.resolve(&config.writer_model, config.writer_temperature)?;
    let critic = registry.resolve(&config.critic_model, config.critic_temperature)?;

    println!("\n🎭 Starting joke bot with writer–critic LLM loop...");

    let mut state = AgenticState::new(config.category, config.critic_type);
    let mut bot = JokeBot::new(writer, critic, prompts, StdConsole);
    bot.run(&mut state).await?;

    println!("\n✅ Done. Final Joke Count: {}", state.bot.jokes.len());
    Ok(())
}
