//! Transport layer for MCP communication.

pub mod framing;
pub mod stdio;
pub mod stream;

pub use stdio::StdioTransport;
pub use stream::StreamTransport;
