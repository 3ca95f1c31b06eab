//! Tool `get_retell_agents`: List deployed voice AI agents.

use serde_json::Value;

use call_center::CallCenterDesk;

use crate::registry::HandlerResult;
use crate::schema::SchemaNode;
use crate::types::{ContentBlock, ToolDefinition};

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "get_retell_agents".to_string(),
        description: "Get list of deployed Retell AI agents".to_string(),
        input_schema: SchemaNode::object(),
    }
}

pub fn execute(_args: &Value, desk: &CallCenterDesk) -> HandlerResult {
    let agents = desk.ai_agents();
    Ok(vec![
        ContentBlock::text(format!("Active Retell AI agents: {}", agents.len())),
        ContentBlock::json(&agents)?,
    ])
}
