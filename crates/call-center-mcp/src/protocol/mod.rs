//! MCP protocol handling: session state and JSON-RPC dispatch.

pub mod handler;
pub mod negotiation;
pub mod state;
pub mod validator;

pub use handler::ProtocolHandler;
pub use state::SessionState;
