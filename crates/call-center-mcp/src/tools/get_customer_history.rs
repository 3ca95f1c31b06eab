//! Tool `get_customer_history`: Customer interaction history.

use serde::Deserialize;
use serde_json::Value;

use call_center::CallCenterDesk;

use crate::registry::HandlerResult;
use crate::schema::SchemaNode;
use crate::types::{ContentBlock, ToolDefinition};

#[derive(Debug, Deserialize)]
struct HistoryParams {
    customer_id: String,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "get_customer_history".to_string(),
        description: "Get customer interaction history".to_string(),
        input_schema: SchemaNode::object()
            .property(
                "customer_id",
                SchemaNode::string().describe("Customer ID or phone number"),
            )
            .require(&["customer_id"]),
    }
}

pub fn execute(args: &Value, desk: &CallCenterDesk) -> HandlerResult {
    let params = HistoryParams::deserialize(args)?;
    let history = desk.customer_history(&params.customer_id)?;
    Ok(vec![ContentBlock::json(&history)?])
}
