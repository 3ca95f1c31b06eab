//! Tool `update_agent_status`: Change an agent's availability.

use serde::Deserialize;
use serde_json::{json, Value};

use call_center::{AgentStatus, CallCenterDesk};

use crate::registry::HandlerResult;
use crate::schema::SchemaNode;
use crate::types::{ContentBlock, ToolDefinition};

#[derive(Debug, Deserialize)]
struct StatusParams {
    agent_id: String,
    status: AgentStatus,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "update_agent_status".to_string(),
        description: "Update agent availability status".to_string(),
        input_schema: SchemaNode::object()
            .property("agent_id", SchemaNode::string().describe("Agent ID"))
            .property(
                "status",
                SchemaNode::string()
                    .describe("New agent status")
                    .one_of(&["available", "busy", "break", "offline"]),
            )
            .require(&["agent_id", "status"]),
    }
}

pub fn execute(args: &Value, desk: &CallCenterDesk) -> HandlerResult {
    let params = StatusParams::deserialize(args)?;
    let update = desk.update_agent_status(&params.agent_id, params.status);

    Ok(vec![ContentBlock::json(&json!({
        "success": true,
        "agent_id": update.agent_id,
        "new_status": update.new_status,
        "timestamp": update.timestamp,
    }))?])
}
