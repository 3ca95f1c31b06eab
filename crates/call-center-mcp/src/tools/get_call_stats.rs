//! Tool `get_call_stats`: Current call-center statistics.

use serde::Serialize;
use serde_json::Value;

use call_center::{now_rfc3339, CallCenterDesk, CallStats};

use crate::registry::HandlerResult;
use crate::schema::SchemaNode;
use crate::types::{ContentBlock, ToolDefinition};

#[derive(Serialize)]
struct StatsReport<'a> {
    #[serde(flatten)]
    stats: &'a CallStats,
    timestamp: String,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "get_call_stats".to_string(),
        description: "Get current call center statistics".to_string(),
        input_schema: SchemaNode::object(),
    }
}

pub fn execute(_args: &Value, desk: &CallCenterDesk) -> HandlerResult {
    let report = StatsReport {
        stats: desk.stats(),
        timestamp: now_rfc3339(),
    };
    Ok(vec![ContentBlock::json(&report)?])
}
