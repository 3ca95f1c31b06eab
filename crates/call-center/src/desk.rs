//! The call-center desk: answers queries and books work against a snapshot.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Duration, SecondsFormat, Utc};

use crate::fixture::DeskSnapshot;
use crate::types::{
    Agent, AgentStatus, AgentStatusUpdate, AiAgent, AiAgentStatus, BusinessType, CallLog,
    CallStats, CustomerHistory, DeskError, DeskResult, Deployment, Priority, ScheduledCallback,
    Ticket, TicketStatus,
};

/// Upper bound on the number of call logs returned per query.
pub const MAX_CALL_LOGS: usize = 10;

const TICKET_QUEUE: &str = "auto-assignment-queue";
const DEPLOYMENT_ETA: &str = "3-5 minutes";

/// Serves read-only desk data and hands out identifiers.
///
/// Identifier sequences are atomics so the desk can be shared behind an
/// `Arc` without locking.
pub struct CallCenterDesk {
    snapshot: DeskSnapshot,
    ticket_seq: AtomicU64,
    callback_seq: AtomicU64,
    deployment_seq: AtomicU64,
}

impl Default for CallCenterDesk {
    fn default() -> Self {
        Self::new(DeskSnapshot::default())
    }
}

impl CallCenterDesk {
    pub fn new(snapshot: DeskSnapshot) -> Self {
        Self {
            snapshot,
            ticket_seq: AtomicU64::new(1),
            callback_seq: AtomicU64::new(1),
            deployment_seq: AtomicU64::new(1),
        }
    }

    /// Open a desk from a JSON fixture.
    pub fn open(path: &Path) -> DeskResult<Self> {
        tracing::info!("Loading desk fixture: {}", path.display());
        let snapshot = DeskSnapshot::read_from_file(path)?;
        tracing::info!(
            "Desk loaded: {} agents, {} AI agents, {} interactions",
            snapshot.agents.len(),
            snapshot.ai_agents.len(),
            snapshot.interactions.len()
        );
        Ok(Self::new(snapshot))
    }

    pub fn snapshot(&self) -> &DeskSnapshot {
        &self.snapshot
    }

    pub fn stats(&self) -> &CallStats {
        &self.snapshot.stats
    }

    pub fn agents(&self) -> &[Agent] {
        &self.snapshot.agents
    }

    pub fn ai_agents(&self) -> &[AiAgent] {
        &self.snapshot.ai_agents
    }

    /// Open a new support ticket.
    pub fn create_ticket(
        &self,
        title: &str,
        description: &str,
        priority: Priority,
    ) -> DeskResult<Ticket> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DeskError::InvalidInput(
                "ticket title must not be empty".to_string(),
            ));
        }

        let seq = self.ticket_seq.fetch_add(1, Ordering::Relaxed);
        let ticket = Ticket {
            ticket_id: format!("TICKET-{seq:04}"),
            title: title.to_string(),
            description: description.to_string(),
            priority,
            status: TicketStatus::Open,
            created_at: now_rfc3339(),
            assigned_to: TICKET_QUEUE.to_string(),
        };

        tracing::debug!("Created {} ({:?})", ticket.ticket_id, ticket.priority);
        Ok(ticket)
    }

    /// Book a callback for a customer.
    pub fn schedule_callback(
        &self,
        customer_phone: &str,
        preferred_time: &str,
        reason: &str,
    ) -> DeskResult<ScheduledCallback> {
        if customer_phone.trim().is_empty() {
            return Err(DeskError::InvalidInput(
                "customer phone must not be empty".to_string(),
            ));
        }

        let seq = self.callback_seq.fetch_add(1, Ordering::Relaxed);
        Ok(ScheduledCallback {
            callback_id: format!("CB-{seq:04}"),
            customer_phone: customer_phone.to_string(),
            preferred_time: preferred_time.to_string(),
            reason: reason.to_string(),
            scheduled_at: now_rfc3339(),
        })
    }

    pub fn customer_history(&self, customer_id: &str) -> DeskResult<CustomerHistory> {
        if customer_id.trim().is_empty() {
            return Err(DeskError::InvalidInput(
                "customer id must not be empty".to_string(),
            ));
        }

        let interactions = self.snapshot.interactions.clone();
        Ok(CustomerHistory {
            customer_id: customer_id.to_string(),
            total_interactions: interactions.len(),
            last_contact: interactions.first().map(|i| i.date.clone()),
            interactions,
        })
    }

    /// Acknowledge a status change. The snapshot itself is not modified.
    pub fn update_agent_status(&self, agent_id: &str, status: AgentStatus) -> AgentStatusUpdate {
        AgentStatusUpdate {
            agent_id: agent_id.to_string(),
            new_status: status,
            timestamp: now_rfc3339(),
        }
    }

    /// Start deploying a voice AI agent.
    pub fn deploy_agent(
        &self,
        agent_name: &str,
        business_type: BusinessType,
    ) -> DeskResult<Deployment> {
        if agent_name.trim().is_empty() {
            return Err(DeskError::InvalidInput(
                "agent name must not be empty".to_string(),
            ));
        }

        let seq = self.deployment_seq.fetch_add(1, Ordering::Relaxed);
        let token = uuid::Uuid::new_v4().simple().to_string();

        Ok(Deployment {
            deployment_id: format!("DEPLOY-{}", &token[..12]),
            agent_name: agent_name.to_string(),
            business_type,
            status: AiAgentStatus::Deploying,
            estimated_completion: DEPLOYMENT_ETA.to_string(),
            webhook_url: self.snapshot.webhook_url.clone(),
            phone_number: format!("+1-800-{}-{:03}", business_type.code(), seq % 1000),
        })
    }

    /// Most recent call logs, newest first. Negative limits yield nothing.
    pub fn call_logs(&self, limit: i64) -> Vec<CallLog> {
        let count = usize::try_from(limit).unwrap_or(0).min(MAX_CALL_LOGS);
        let anchor = Utc::now();
        let agents = &self.snapshot.ai_agents;

        (0..count)
            .map(|i| {
                let agent_name = if agents.is_empty() {
                    "Unassigned".to_string()
                } else {
                    agents[i % agents.len()].agent_name.clone()
                };
                let at = anchor - Duration::hours(i as i64);
                CallLog {
                    call_id: format!("call_{}", 1000 + i),
                    timestamp: at.format("%Y-%m-%dT%H:00:00Z").to_string(),
                    duration: format!("{}:{:02}", 3 + i % 5, 15 + i % 45),
                    caller_phone: format!("+1-555-{:03}-{}", 100 + i, 1000 + i),
                    agent_name,
                    call_type: "inbound".to_string(),
                    status: "completed".to_string(),
                    sentiment: if i % 3 == 0 { "positive" } else { "neutral" }.to_string(),
                }
            })
            .collect()
    }
}

/// Current UTC time as RFC 3339 with second precision.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
