//! Tool `deploy_agent`: Deploy a voice AI agent configuration.

use serde::Deserialize;
use serde_json::Value;

use call_center::{BusinessType, CallCenterDesk};

use crate::registry::HandlerResult;
use crate::schema::SchemaNode;
use crate::types::{ContentBlock, ToolDefinition};

#[derive(Debug, Deserialize)]
struct DeployParams {
    agent_name: String,
    business_type: BusinessType,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "deploy_agent".to_string(),
        description: "Deploy a Retell AI agent configuration".to_string(),
        input_schema: SchemaNode::object()
            .property(
                "agent_name",
                SchemaNode::string().describe("Name of the agent to deploy"),
            )
            .property(
                "business_type",
                SchemaNode::string()
                    .describe("Type of business")
                    .one_of(&["dental", "medical", "restaurant", "general"]),
            )
            .require(&["agent_name", "business_type"]),
    }
}

pub fn execute(args: &Value, desk: &CallCenterDesk) -> HandlerResult {
    let params = DeployParams::deserialize(args)?;
    let deployment = desk.deploy_agent(&params.agent_name, params.business_type)?;

    Ok(vec![
        ContentBlock::text(format!("Deploying Retell AI agent {}", deployment.agent_name)),
        ContentBlock::json(&deployment)?,
    ])
}
