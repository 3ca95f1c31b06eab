//! MCP resource implementations.

pub mod agents;
pub mod stats;

use std::sync::Arc;

use call_center::CallCenterDesk;

use crate::registry::{Registry, RegistryError};

pub const JSON_MIME: &str = "application/json";

/// Register the call-center resources in `resources/list` order.
pub fn register_all(
    registry: &mut Registry,
    desk: &Arc<CallCenterDesk>,
) -> Result<(), RegistryError> {
    let stats_desk = Arc::clone(desk);
    registry.register_resource(stats::definition(), move |_| stats::read(&stats_desk))?;

    let agents_desk = Arc::clone(desk);
    registry.register_resource(agents::definition(), move |_| agents::read(&agents_desk))?;

    Ok(())
}
