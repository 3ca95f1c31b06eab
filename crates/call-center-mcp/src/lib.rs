//! Call Center MCP Server: tools and resources for call-center automation over JSON-RPC.

pub mod config;
pub mod protocol;
pub mod registry;
pub mod resources;
pub mod schema;
pub mod tools;
pub mod transport;
pub mod types;

pub use config::{open_desk, resolve_data_path, resolve_max_line_bytes};
pub use protocol::ProtocolHandler;
pub use registry::{build_registry, Registry};
pub use transport::{StdioTransport, StreamTransport};
