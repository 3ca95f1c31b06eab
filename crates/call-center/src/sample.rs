//! Built-in placeholder data used when no desk fixture is supplied.

use crate::types::{
    Agent, AgentStatus, AiAgent, AiAgentStatus, BusinessType, CallStats, Interaction,
    InteractionKind,
};

pub const DEFAULT_WEBHOOK_URL: &str = "https://your-domain.com/api/retell/webhook";

pub fn stats() -> CallStats {
    CallStats {
        total_calls_today: 127,
        average_wait_time: "3:45".to_string(),
        calls_in_queue: 8,
        active_agents: 12,
        available_agents: 15,
        busy_agents: 7,
        resolved_tickets: 89,
        satisfaction_score: 4.2,
    }
}

pub fn agents() -> Vec<Agent> {
    vec![
        Agent {
            id: 1,
            name: "Sarah".to_string(),
            status: AgentStatus::Available,
            calls_today: 23,
        },
        Agent {
            id: 2,
            name: "Mike".to_string(),
            status: AgentStatus::OnCall,
            calls_today: 18,
        },
        Agent {
            id: 3,
            name: "Emma".to_string(),
            status: AgentStatus::Break,
            calls_today: 15,
        },
    ]
}

pub fn ai_agents() -> Vec<AiAgent> {
    vec![
        AiAgent {
            agent_id: "agent_123abc".to_string(),
            agent_name: "Dental Reception AI".to_string(),
            business_type: BusinessType::Dental,
            status: AiAgentStatus::Active,
            last_call: "2024-01-16T11:30:00Z".to_string(),
            total_calls: 45,
            phone_number: "+1-800-DENTAL".to_string(),
        },
        AiAgent {
            agent_id: "agent_456def".to_string(),
            agent_name: "Customer Support AI".to_string(),
            business_type: BusinessType::General,
            status: AiAgentStatus::Active,
            last_call: "2024-01-16T12:15:00Z".to_string(),
            total_calls: 23,
            phone_number: "+1-800-SUPPORT".to_string(),
        },
    ]
}

/// Most recent first.
pub fn interactions() -> Vec<Interaction> {
    vec![
        Interaction {
            date: "2024-01-15T10:30:00Z".to_string(),
            kind: InteractionKind::PhoneCall,
            duration: Some("15:30".to_string()),
            agent: "Sarah".to_string(),
            resolution: "billing_inquiry_resolved".to_string(),
        },
        Interaction {
            date: "2024-01-10T14:15:00Z".to_string(),
            kind: InteractionKind::Email,
            duration: None,
            agent: "Mike".to_string(),
            resolution: "product_question_answered".to_string(),
        },
    ]
}
