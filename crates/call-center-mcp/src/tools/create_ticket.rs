//! Tool `create_ticket`: Open a support ticket.
//!
//! `priority` defaults to `medium` when omitted.

use serde::Deserialize;
use serde_json::{json, Value};

use call_center::{CallCenterDesk, Priority};

use crate::registry::HandlerResult;
use crate::schema::SchemaNode;
use crate::types::{ContentBlock, ToolDefinition};

#[derive(Debug, Deserialize)]
struct CreateTicketParams {
    title: String,
    description: String,
    #[serde(default)]
    priority: Priority,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "create_ticket".to_string(),
        description: "Create a support ticket".to_string(),
        input_schema: SchemaNode::object()
            .property("title", SchemaNode::string().describe("Ticket title"))
            .property(
                "description",
                SchemaNode::string().describe("Ticket description"),
            )
            .property(
                "priority",
                SchemaNode::string()
                    .describe("Ticket priority")
                    .one_of(&["low", "medium", "high", "urgent"])
                    .default_value(json!("medium")),
            )
            .require(&["title", "description"]),
    }
}

pub fn execute(args: &Value, desk: &CallCenterDesk) -> HandlerResult {
    let params = CreateTicketParams::deserialize(args)?;
    let ticket = desk.create_ticket(&params.title, &params.description, params.priority)?;

    Ok(vec![
        ContentBlock::text(format!("Created ticket {}", ticket.ticket_id)),
        ContentBlock::json(&ticket)?,
    ])
}
