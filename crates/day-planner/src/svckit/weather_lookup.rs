//! Weather Lookup Tool
//!
//! Fetches current conditions at given coordinates. Not fault-tolerant:
//! live-mode failures surface to the reasoning engine, which may retry the
//! call within the run's retry budget. Argument problems come back as
//! validation errors with a hint, so the model can correct its call.

use async_trait::async_trait;

use agent_core::{
    AgentError, Result as CoreResult, Tool, ToolCall, ToolResult,
    tool::{ParameterSchema, ToolSchema},
};

use crate::deps::PlannerDeps;
use crate::model::{LAT_RANGE, LNG_RANGE};
use crate::resolver::WeatherResolver;

/// Tool exposing `WeatherResolver` to the reasoning engine
pub struct WeatherLookupTool {
    resolver: WeatherResolver,
}

impl WeatherLookupTool {
    pub fn new(resolver: WeatherResolver) -> Self {
        Self { resolver }
    }

    /// Live or stub tool, selected by the bundle's credential
    pub fn from_deps(deps: &PlannerDeps) -> Self {
        Self::new(WeatherResolver::from_deps(deps))
    }

    fn numeric_arg(call: &ToolCall, name: &str) -> CoreResult<f64> {
        call.arguments
            .get(name)
            .and_then(serde_json::Value::as_f64)
            .ok_or_else(|| {
                AgentError::ToolValidation(format!("{name} must be a number, e.g. 50.4501"))
            })
    }
}

#[async_trait]
impl Tool for WeatherLookupTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_weather".into(),
            description: "Get the current weather (temperature and conditions) at a location given its coordinates.".into(),
            parameters: vec![
                ParameterSchema {
                    name: "lat".into(),
                    param_type: "number".into(),
                    description: "Latitude of the location in degrees, -90 to 90".into(),
                    required: true,
                    default: None,
                },
                ParameterSchema {
                    name: "lng".into(),
                    param_type: "number".into(),
                    description: "Longitude of the location in degrees, -180 to 180".into(),
                    required: true,
                    default: None,
                },
            ],
            category: Some("weather".into()),
            fault_tolerant: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let lat = Self::numeric_arg(call, "lat")?;
        let lng = Self::numeric_arg(call, "lng")?;

        if !LAT_RANGE.contains(&lat) || !LNG_RANGE.contains(&lng) {
            return Err(AgentError::ToolValidation(format!(
                "coordinates out of range: lat={lat} (want -90..=90), lng={lng} (want -180..=180)"
            )));
        }

        let reading = self
            .resolver
            .resolve(lat, lng)
            .await
            .map_err(|e| AgentError::ToolExecution(e.to_string()))?;

        let data = serde_json::json!({
            "temperature": reading.temperature,
            "description": reading.description,
        });

        Ok(ToolResult::success("get_weather", reading.to_string()).with_data(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::{MockWeatherClient, RealtimeValues};
    use std::collections::HashMap;
    use std::sync::Arc;

    fn call(lat: serde_json::Value, lng: serde_json::Value) -> ToolCall {
        ToolCall {
            name: "get_weather".into(),
            arguments: HashMap::from([("lat".into(), lat), ("lng".into(), lng)]),
            id: None,
        }
    }

    #[test]
    fn test_schema_declares_typed_parameters() {
        let tool = WeatherLookupTool::new(WeatherResolver::stub());
        let schema = tool.schema();

        assert_eq!(schema.name, "get_weather");
        assert!(!schema.fault_tolerant);
        assert_eq!(schema.parameters.len(), 2);
        assert!(schema.parameters.iter().all(|p| p.required));
        assert!(schema.parameters.iter().all(|p| p.param_type == "number"));
    }

    #[tokio::test]
    async fn test_stub_mode_execution() {
        let tool = WeatherLookupTool::new(WeatherResolver::stub());

        let result = tool
            .execute(&call(
                serde_json::json!(50.4501),
                serde_json::json!(30.5234),
            ))
            .await
            .unwrap();

        assert!(result.success);
        let data = result.data.unwrap();
        assert_eq!(data["temperature"], serde_json::json!("21 °C"));
        assert_eq!(data["description"], serde_json::json!("Sunny"));
    }

    #[tokio::test]
    async fn test_non_numeric_argument_is_a_validation_error() {
        let tool = WeatherLookupTool::new(WeatherResolver::stub());

        let err = tool
            .execute(&call(serde_json::json!("fifty"), serde_json::json!(30.0)))
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::ToolValidation(_)));
    }

    #[tokio::test]
    async fn test_out_of_range_coordinates_are_rejected() {
        let tool = WeatherLookupTool::new(WeatherResolver::stub());

        let err = tool
            .execute(&call(serde_json::json!(95.0), serde_json::json!(30.0)))
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::ToolValidation(_)));
    }

    #[tokio::test]
    async fn test_live_outage_is_an_execution_error() {
        let tool = WeatherLookupTool::new(WeatherResolver::live(Arc::new(
            MockWeatherClient::failing(),
        )));

        let err = tool
            .execute(&call(serde_json::json!(50.0), serde_json::json!(30.0)))
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::ToolExecution(_)));
    }

    #[tokio::test]
    async fn test_live_reading_flows_through() {
        let tool = WeatherLookupTool::new(WeatherResolver::live(Arc::new(
            MockWeatherClient::returning(RealtimeValues {
                temperature_apparent: 20.6,
                weather_code: 1000,
            }),
        )));

        let result = tool
            .execute(&call(serde_json::json!(50.45), serde_json::json!(30.52)))
            .await
            .unwrap();

        let data = result.data.unwrap();
        assert_eq!(data["temperature"], serde_json::json!("21°C"));
        assert_eq!(data["description"], serde_json::json!("Clear, Sunny"));
    }
}
