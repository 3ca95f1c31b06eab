//! Resource: call-center://stats

use call_center::CallCenterDesk;

use crate::registry::HandlerResult;
use crate::types::{ContentBlock, ResourceDefinition};

pub const URI: &str = "call-center://stats";

pub fn definition() -> ResourceDefinition {
    ResourceDefinition {
        uri: URI.to_string(),
        name: "Call Center Statistics".to_string(),
        description: "Real-time call center metrics and statistics".to_string(),
        mime_type: super::JSON_MIME.to_string(),
    }
}

pub fn read(desk: &CallCenterDesk) -> HandlerResult {
    Ok(vec![ContentBlock::json(desk.stats())?])
}
