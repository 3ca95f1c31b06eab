//! Tool `get_call_logs`: Recent call logs.

use serde::Deserialize;
use serde_json::{json, Number, Value};

use call_center::CallCenterDesk;

use crate::registry::HandlerResult;
use crate::schema::SchemaNode;
use crate::types::{ContentBlock, ToolDefinition};

#[derive(Debug, Deserialize)]
struct CallLogParams {
    #[serde(default = "default_limit")]
    limit: Number,
}

fn default_limit() -> Number {
    Number::from(10)
}

/// Any JSON integer is accepted. Values past `i64::MAX` saturate, the desk
/// caps them anyway.
fn saturating_limit(limit: &Number) -> i64 {
    match (limit.as_i64(), limit.as_u64()) {
        (Some(n), _) => n,
        (None, Some(_)) => i64::MAX,
        (None, None) => 0,
    }
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "get_call_logs".to_string(),
        description: "Get recent call logs from the system".to_string(),
        input_schema: SchemaNode::object().property(
            "limit",
            SchemaNode::integer()
                .describe("Number of logs to return (default: 10, max: 10)")
                .default_value(json!(10)),
        ),
    }
}

pub fn execute(args: &Value, desk: &CallCenterDesk) -> HandlerResult {
    let params = CallLogParams::deserialize(args)?;
    let logs = desk.call_logs(saturating_limit(&params.limit));

    Ok(vec![
        ContentBlock::text(format!("Recent call logs (last {})", logs.len())),
        ContentBlock::json(&logs)?,
    ])
}
