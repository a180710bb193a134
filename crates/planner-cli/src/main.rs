//! Day-Planner CLI
//!
//! One-shot entry point: wires the LLM provider and the two planning tools
//! together, runs a single planning request, and prints the recommendation.
//!
//! Without `WEATHER_API_KEY` the weather tool runs in stub mode, so the
//! binary works end-to-end with no provider credential.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agent_core::AgentBuilder;
use agent_core::LlmProvider;
use agent_core::tool::ToolRegistry;
use agent_runtime::OllamaProvider;
use day_planner::{
    PLANNER_PROMPT, PlannerDeps,
    tools::{LocationLookupTool, WeatherLookupTool},
};

const PLANNING_PROMPT: &str = "Help me plan my day based on my location";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Initialize LLM provider
    let provider = Arc::new(OllamaProvider::from_env());

    // Verify Ollama connection
    match provider.health_check().await {
        Ok(true) => {
            tracing::info!("✓ Connected to Ollama");
            if let Ok(models) = provider.list_models().await {
                for model in models {
                    tracing::info!("  Model: {}", model.id);
                }
            }
        }
        Ok(false) | Err(_) => {
            tracing::warn!("⚠ Ollama not available - agent will fail");
            tracing::warn!("  Make sure Ollama is running: ollama serve");
        }
    }

    // Build the run's dependency bundle
    let deps = PlannerDeps::from_env()?;
    if deps.stub_mode() {
        tracing::warn!("⚠ WEATHER_API_KEY not set - weather runs in stub mode");
        tracing::warn!("  Create a free key at https://www.tomorrow.io/weather-api/");
    }

    // Initialize tools
    let mut tools = ToolRegistry::new();
    tools.register(LocationLookupTool::from_deps(&deps));
    tools.register(WeatherLookupTool::from_deps(&deps));

    tracing::info!("Registered {} tools:", tools.len());
    for name in tools.names() {
        tracing::info!("  • {}", name);
    }

    // Build the agent
    let agent = AgentBuilder::new()
        .provider(provider)
        .tools(tools)
        .system_prompt(PLANNER_PROMPT)
        .model(std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2".into()))
        .tool_retries(2)
        .build()?;

    // One run, one recommendation. A terminal weather failure propagates
    // and exits non-zero.
    let recommendation = agent.ask(PLANNING_PROMPT).await?;

    println!("{recommendation}");

    Ok(())
}
