//! Stdio transport: reads JSON-RPC from stdin, writes to stdout.

use tokio::io::BufReader;

use crate::protocol::ProtocolHandler;
use crate::types::McpResult;

use super::stream::StreamTransport;

/// Stdio transport for desktop MCP clients.
pub struct StdioTransport {
    inner: StreamTransport,
}

impl StdioTransport {
    pub fn new(handler: ProtocolHandler) -> Self {
        Self {
            inner: StreamTransport::new(handler),
        }
    }

    pub fn with_max_frame_bytes(self, max_frame_bytes: usize) -> Self {
        Self {
            inner: self.inner.with_max_frame_bytes(max_frame_bytes),
        }
    }

    /// Run the transport loop: reads from stdin, writes to stdout.
    pub async fn run(&mut self) -> McpResult<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();

        tracing::info!("Stdio transport started");
        self.inner.run(stdin, stdout).await
    }
}
