//! Call Center: the desk behind the MCP server: statistics, agents, tickets, callbacks, and call logs.

pub mod desk;
pub mod fixture;
pub mod sample;
pub mod types;

pub use desk::{now_rfc3339, CallCenterDesk, MAX_CALL_LOGS};
pub use fixture::DeskSnapshot;
pub use types::*;
