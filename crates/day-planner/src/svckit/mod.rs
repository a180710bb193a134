//! Service Kit - Agent Tools
//!
//! Domain-specific tools that implement `agent_core::Tool` for the day planner.

mod location_lookup;
mod weather_lookup;

pub use location_lookup::LocationLookupTool;
pub use weather_lookup::WeatherLookupTool;
