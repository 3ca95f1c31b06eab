//! Core data types for the call-center desk.

use serde::{Deserialize, Serialize};

/// Aggregate statistics for the current day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallStats {
    pub total_calls_today: u32,
    pub average_wait_time: String,
    pub calls_in_queue: u32,
    pub active_agents: u32,
    pub available_agents: u32,
    pub busy_agents: u32,
    pub resolved_tickets: u32,
    pub satisfaction_score: f64,
}

/// Availability of a human agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    Available,
    OnCall,
    Busy,
    Break,
    Offline,
}

/// A human agent working the phones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: u32,
    pub name: String,
    pub status: AgentStatus,
    pub calls_today: u32,
}

/// Kind of business a voice AI agent is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Dental,
    Medical,
    Restaurant,
    General,
}

impl BusinessType {
    /// Three-letter code used in generated phone numbers.
    pub fn code(self) -> &'static str {
        match self {
            BusinessType::Dental => "DEN",
            BusinessType::Medical => "MED",
            BusinessType::Restaurant => "RES",
            BusinessType::General => "GEN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiAgentStatus {
    Active,
    Deploying,
    Inactive,
}

/// A deployed voice AI agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiAgent {
    pub agent_id: String,
    pub agent_name: String,
    pub business_type: BusinessType,
    pub status: AiAgentStatus,
    pub last_call: String,
    pub total_calls: u32,
    pub phone_number: String,
}

/// A pending voice AI agent deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    pub deployment_id: String,
    pub agent_name: String,
    pub business_type: BusinessType,
    pub status: AiAgentStatus,
    pub estimated_completion: String,
    pub webhook_url: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
}

/// A support ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub ticket_id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TicketStatus,
    pub created_at: String,
    pub assigned_to: String,
}

/// A callback booked for a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledCallback {
    pub callback_id: String,
    pub customer_phone: String,
    pub preferred_time: String,
    pub reason: String,
    pub scheduled_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    PhoneCall,
    Email,
    Chat,
}

/// A single past contact with a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub agent: String,
    pub resolution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerHistory {
    pub customer_id: String,
    pub total_interactions: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contact: Option<String>,
    pub interactions: Vec<Interaction>,
}

/// Acknowledgement of an agent status change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentStatusUpdate {
    pub agent_id: String,
    pub new_status: AgentStatus,
    pub timestamp: String,
}

/// A recent call handled by the desk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallLog {
    pub call_id: String,
    pub timestamp: String,
    pub duration: String,
    pub caller_phone: String,
    pub agent_name: String,
    pub call_type: String,
    pub status: String,
    pub sentiment: String,
}

/// Errors that can occur in the call-center desk.
#[derive(thiserror::Error, Debug)]
pub enum DeskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience result type.
pub type DeskResult<T> = Result<T, DeskError>;
