//! # day-planner
//!
//! Day-planning domain for an LLM-driven agent: resolve where the user is,
//! resolve what the weather is like there, and let the reasoning engine turn
//! both into a short activity recommendation.
//!
//! ## Data flow
//!
//! ```text
//! network origin ──► Location ──► coordinates ──► WeatherReading ──► recommendation
//!      (get_user_location_by_ip)         (get_weather)            (reasoning engine)
//! ```
//!
//! ## Failure policy
//!
//! The two tools are deliberately asymmetric:
//!
//! - **Location** is fault-tolerant: any lookup failure collapses to a fixed
//!   fallback location (Kyiv), logged as a warning. The engine never sees a
//!   location error.
//! - **Weather** is not: in live mode a failed fetch surfaces to the engine,
//!   which may retry within the run's retry budget. Without a provider
//!   credential the resolver runs in stub mode and returns a canned reading
//!   with no network call at all.

pub mod deps;
pub mod error;
pub mod geo;
pub mod model;
pub mod resolver;
pub mod svckit;
pub mod weather;
pub mod weather_code;

pub use deps::PlannerDeps;
pub use error::{PlannerError, Result};
pub use model::{Location, WeatherReading};
pub use resolver::{LocationResolver, WeatherResolver};

/// Re-export tools for easy registration
pub mod tools {
    pub use crate::svckit::{LocationLookupTool, WeatherLookupTool};
}

/// System prompt for the day-planner agent
pub const PLANNER_PROMPT: &str = r#"You are a smart day-planning assistant that recommends activities based on current weather conditions.

## Workflow

For every planning request:

1. First use `get_user_location_by_ip` to find where the user is and get their coordinates
2. Then use `get_weather` with the returned `lat` and `lng` to get current conditions
3. Based on both, recommend the best activities for the day

## Recommendations

- Good weather (clear, warm): lean toward outdoor activities
- Poor weather (rain, snow, cold, storms): lean toward indoor activities
- Factor temperature and precipitation into any physical activity you suggest

Be concise: answer in one or two sentences. Never guess the location or the
weather yourself; always use the tools first."#;
