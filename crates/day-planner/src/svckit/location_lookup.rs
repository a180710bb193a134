//! Location Lookup Tool
//!
//! Resolves the user's approximate location from their IP address.
//! Declared fault-tolerant: the underlying resolver substitutes the fixed
//! fallback location on any failure, so this tool never fails.

use async_trait::async_trait;

use agent_core::{
    Result as CoreResult, Tool, ToolCall, ToolResult,
    tool::ToolSchema,
};

use crate::deps::PlannerDeps;
use crate::resolver::LocationResolver;

/// Tool exposing `LocationResolver` to the reasoning engine
pub struct LocationLookupTool {
    resolver: LocationResolver,
}

impl LocationLookupTool {
    pub fn new(resolver: LocationResolver) -> Self {
        Self { resolver }
    }

    /// Live tool over the run's dependency bundle
    pub fn from_deps(deps: &PlannerDeps) -> Self {
        Self::new(LocationResolver::from_deps(deps))
    }
}

#[async_trait]
impl Tool for LocationLookupTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_user_location_by_ip".into(),
            description: "Get the user's approximate location (city, region, country, coordinates) based on their IP address. Takes no arguments.".into(),
            parameters: vec![],
            category: Some("location".into()),
            fault_tolerant: true,
        }
    }

    async fn execute(&self, _call: &ToolCall) -> CoreResult<ToolResult> {
        let location = self.resolver.resolve().await;

        let data = serde_json::json!({
            "city": location.city,
            "region": location.region,
            "country": location.country,
            "lat": location.lat,
            "lng": location.lng,
        });

        Ok(ToolResult::success("get_user_location_by_ip", location.to_string()).with_data(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::MockGeoClient;
    use crate::model::Location;
    use std::collections::HashMap;
    use std::sync::Arc;

    fn no_arg_call() -> ToolCall {
        ToolCall {
            name: "get_user_location_by_ip".into(),
            arguments: HashMap::new(),
            id: None,
        }
    }

    #[test]
    fn test_schema_is_fault_tolerant() {
        let tool =
            LocationLookupTool::new(LocationResolver::new(Arc::new(MockGeoClient::failing())));
        let schema = tool.schema();

        assert_eq!(schema.name, "get_user_location_by_ip");
        assert!(schema.parameters.is_empty());
        assert!(schema.fault_tolerant);
    }

    #[tokio::test]
    async fn test_outage_still_succeeds_with_fallback() {
        let tool =
            LocationLookupTool::new(LocationResolver::new(Arc::new(MockGeoClient::failing())));

        let result = tool.execute(&no_arg_call()).await.unwrap();
        assert!(result.success);
        assert!(result.output.contains("Київ"));

        let data = result.data.unwrap();
        let fallback = Location::fallback();
        assert_eq!(data["city"], serde_json::json!(fallback.city));
        assert_eq!(data["lat"], serde_json::json!(fallback.lat));
        assert_eq!(data["lng"], serde_json::json!(fallback.lng));
    }
}
