//! JSON desk fixtures: the data snapshot a desk serves from.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sample;
use crate::types::{Agent, AiAgent, CallStats, DeskError, DeskResult, Interaction};

/// Everything the desk reports. Sections missing from a fixture fall back
/// to the built-in sample data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskSnapshot {
    pub stats: CallStats,
    pub agents: Vec<Agent>,
    pub ai_agents: Vec<AiAgent>,
    pub interactions: Vec<Interaction>,
    pub webhook_url: String,
}

impl Default for DeskSnapshot {
    fn default() -> Self {
        Self {
            stats: sample::stats(),
            agents: sample::agents(),
            ai_agents: sample::ai_agents(),
            interactions: sample::interactions(),
            webhook_url: sample::DEFAULT_WEBHOOK_URL.to_string(),
        }
    }
}

impl DeskSnapshot {
    /// Read a snapshot from a JSON file.
    pub fn read_from_file(path: &Path) -> DeskResult<Self> {
        let mut file = std::fs::File::open(path)?;
        Self::read_from(&mut file)
    }

    /// Read a snapshot from any reader.
    pub fn read_from<R: Read>(reader: &mut R) -> DeskResult<Self> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;

        if raw.trim().is_empty() {
            return Err(DeskError::Fixture("fixture is empty".to_string()));
        }

        serde_json::from_str(&raw).map_err(|e| DeskError::Fixture(format!("invalid fixture: {e}")))
    }

    /// Write the snapshot as pretty JSON to a file.
    pub fn write_to_file(&self, path: &Path) -> DeskResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DeskError::Fixture(format!("serialization failed: {e}")))?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AgentStatus;

    #[test]
    fn test_partial_fixture_falls_back_to_sample() {
        let raw = r#"{"agents": [{"id": 9, "name": "Zoe", "status": "offline", "calls_today": 0}]}"#;
        let snapshot = DeskSnapshot::read_from(&mut raw.as_bytes()).unwrap();

        assert_eq!(snapshot.agents.len(), 1);
        assert_eq!(snapshot.agents[0].status, AgentStatus::Offline);
        assert_eq!(snapshot.stats, sample::stats());
        assert_eq!(snapshot.ai_agents.len(), 2);
    }

    #[test]
    fn test_empty_fixture_rejected() {
        let err = DeskSnapshot::read_from(&mut "  \n".as_bytes()).unwrap_err();
        assert!(matches!(err, DeskError::Fixture(_)));
    }

    #[test]
    fn test_garbage_fixture_rejected() {
        let err = DeskSnapshot::read_from(&mut "{not json".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("invalid fixture"));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("desk.json");

        let mut snapshot = DeskSnapshot::default();
        snapshot.stats.calls_in_queue = 42;
        snapshot.write_to_file(&path).unwrap();

        let loaded = DeskSnapshot::read_from_file(&path).unwrap();
        assert_eq!(loaded.stats.calls_in_queue, 42);
        assert_eq!(loaded.agents, snapshot.agents);
        assert_eq!(loaded.ai_agents, snapshot.ai_agents);
        assert_eq!(loaded.webhook_url, snapshot.webhook_url);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DeskSnapshot::read_from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, DeskError::Io(_)));
    }
}
