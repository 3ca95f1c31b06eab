//! Resource: call-center://agents

use serde_json::json;

use call_center::CallCenterDesk;

use crate::registry::HandlerResult;
use crate::types::{ContentBlock, ResourceDefinition};

pub const URI: &str = "call-center://agents";

pub fn definition() -> ResourceDefinition {
    ResourceDefinition {
        uri: URI.to_string(),
        name: "Agent Status".to_string(),
        description: "Current status of all call center agents".to_string(),
        mime_type: super::JSON_MIME.to_string(),
    }
}

pub fn read(desk: &CallCenterDesk) -> HandlerResult {
    Ok(vec![ContentBlock::json(&json!({ "agents": desk.agents() }))?])
}
