//! Tool `schedule_callback`: Book a callback for a customer.

use serde::Deserialize;
use serde_json::{json, Value};

use call_center::CallCenterDesk;

use crate::registry::HandlerResult;
use crate::schema::SchemaNode;
use crate::types::{ContentBlock, ToolDefinition};

#[derive(Debug, Deserialize)]
struct CallbackParams {
    customer_phone: String,
    preferred_time: String,
    reason: String,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "schedule_callback".to_string(),
        description: "Schedule a callback for a customer".to_string(),
        input_schema: SchemaNode::object()
            .property(
                "customer_phone",
                SchemaNode::string().describe("Customer phone number"),
            )
            .property(
                "preferred_time",
                SchemaNode::string().describe("Preferred callback time (ISO format)"),
            )
            .property("reason", SchemaNode::string().describe("Reason for callback"))
            .require(&["customer_phone", "preferred_time", "reason"]),
    }
}

pub fn execute(args: &Value, desk: &CallCenterDesk) -> HandlerResult {
    let params = CallbackParams::deserialize(args)?;
    let callback =
        desk.schedule_callback(&params.customer_phone, &params.preferred_time, &params.reason)?;

    Ok(vec![ContentBlock::json(&json!({
        "success": true,
        "callback_id": callback.callback_id,
        "message": format!(
            "Callback scheduled for {} at {}",
            callback.customer_phone, callback.preferred_time
        ),
        "reason": callback.reason,
        "scheduled_at": callback.scheduled_at,
    }))?])
}
