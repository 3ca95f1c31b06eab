//! MCP tool implementations.

pub mod create_ticket;
pub mod deploy_agent;
pub mod get_call_logs;
pub mod get_call_stats;
pub mod get_customer_history;
pub mod get_retell_agents;
pub mod schedule_callback;
pub mod update_agent_status;

use std::sync::Arc;

use serde_json::Value;

use call_center::CallCenterDesk;

use crate::registry::{HandlerResult, Registry, RegistryError};
use crate::types::ToolDefinition;

type ToolFn = fn(&Value, &CallCenterDesk) -> HandlerResult;

/// Register every call-center tool. Order here is the order `tools/list` reports.
pub fn register_all(
    registry: &mut Registry,
    desk: &Arc<CallCenterDesk>,
) -> Result<(), RegistryError> {
    let tools: [(ToolDefinition, ToolFn); 8] = [
        (get_call_stats::definition(), get_call_stats::execute),
        (create_ticket::definition(), create_ticket::execute),
        (get_retell_agents::definition(), get_retell_agents::execute),
        (deploy_agent::definition(), deploy_agent::execute),
        (get_call_logs::definition(), get_call_logs::execute),
        (schedule_callback::definition(), schedule_callback::execute),
        (
            get_customer_history::definition(),
            get_customer_history::execute,
        ),
        (
            update_agent_status::definition(),
            update_agent_status::execute,
        ),
    ];

    for (definition, execute) in tools {
        let desk = Arc::clone(desk);
        registry.register_tool(definition, move |args| execute(args, &desk))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text_json(blocks: &[crate::types::ContentBlock], index: usize) -> Value {
        serde_json::from_str(blocks[index].as_text()).unwrap()
    }

    #[test]
    fn test_registration_order() {
        let mut registry = Registry::new();
        register_all(&mut registry, &Arc::new(CallCenterDesk::default())).unwrap();
        let names: Vec<_> = registry.list_tools().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            [
                "get_call_stats",
                "create_ticket",
                "get_retell_agents",
                "deploy_agent",
                "get_call_logs",
                "schedule_callback",
                "get_customer_history",
                "update_agent_status",
            ]
        );
    }

    #[test]
    fn test_registering_twice_fails() {
        let desk = Arc::new(CallCenterDesk::default());
        let mut registry = Registry::new();
        register_all(&mut registry, &desk).unwrap();
        let err = register_all(&mut registry, &desk).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateTool("get_call_stats".to_string()));
    }

    #[test]
    fn test_stats_include_timestamp() {
        let desk = CallCenterDesk::default();
        let out = get_call_stats::execute(&json!({}), &desk).unwrap();
        let body = text_json(&out, 0);
        assert_eq!(body["total_calls_today"], 127);
        assert!(body["timestamp"].is_string());
    }

    #[test]
    fn test_create_ticket_defaults_priority() {
        let desk = CallCenterDesk::default();
        let out = create_ticket::execute(&json!({"title": "A", "description": "B"}), &desk).unwrap();

        assert_eq!(out[0].as_text(), "Created ticket TICKET-0001");
        let ticket = text_json(&out, 1);
        assert_eq!(ticket["priority"], "medium");
        assert_eq!(ticket["status"], "open");
        assert_eq!(ticket["assigned_to"], "auto-assignment-queue");
    }

    #[test]
    fn test_create_ticket_blank_title_fails() {
        let desk = CallCenterDesk::default();
        let err =
            create_ticket::execute(&json!({"title": "  ", "description": "B"}), &desk).unwrap_err();
        assert!(err.0.contains("title"));
    }

    #[test]
    fn test_deploy_agent_record() {
        let desk = CallCenterDesk::default();
        let out = deploy_agent::execute(
            &json!({"agent_name": "Front Desk", "business_type": "dental"}),
            &desk,
        )
        .unwrap();
        let deployment = text_json(&out, 1);
        assert_eq!(deployment["status"], "deploying");
        assert_eq!(deployment["phone_number"], "+1-800-DEN-001");
        assert!(deployment["deployment_id"]
            .as_str()
            .unwrap()
            .starts_with("DEPLOY-"));
    }

    #[test]
    fn test_call_logs_default_and_negative_limit() {
        let desk = CallCenterDesk::default();
        let out = get_call_logs::execute(&json!({}), &desk).unwrap();
        assert_eq!(text_json(&out, 1).as_array().unwrap().len(), 10);

        let out = get_call_logs::execute(&json!({"limit": -3}), &desk).unwrap();
        assert_eq!(out[0].as_text(), "Recent call logs (last 0)");
        assert!(text_json(&out, 1).as_array().unwrap().is_empty());
    }

    #[test]
    fn test_schedule_callback_message() {
        let desk = CallCenterDesk::default();
        let out = schedule_callback::execute(
            &json!({
                "customer_phone": "+1-555-0100",
                "preferred_time": "2026-01-05T10:00:00Z",
                "reason": "billing"
            }),
            &desk,
        )
        .unwrap();
        let body = text_json(&out, 0);
        assert_eq!(body["success"], true);
        assert_eq!(body["callback_id"], "CB-0001");
        assert_eq!(
            body["message"],
            "Callback scheduled for +1-555-0100 at 2026-01-05T10:00:00Z"
        );
    }

    #[test]
    fn test_customer_history_counts_interactions() {
        let desk = CallCenterDesk::default();
        let out = get_customer_history::execute(&json!({"customer_id": "C-42"}), &desk).unwrap();
        let body = text_json(&out, 0);
        assert_eq!(body["customer_id"], "C-42");
        assert_eq!(body["total_interactions"], 2);
    }

    #[test]
    fn test_update_agent_status_acknowledges() {
        let desk = CallCenterDesk::default();
        let out = update_agent_status::execute(
            &json!({"agent_id": "2", "status": "break"}),
            &desk,
        )
        .unwrap();
        let body = text_json(&out, 0);
        assert_eq!(body["success"], true);
        assert_eq!(body["new_status"], "break");
        assert_eq!(desk.agents()[1].status, call_center::AgentStatus::OnCall);
    }
}
