//! MCP capability negotiation during initialization.

use crate::types::{
    ClientCapabilities, Implementation, InitializeParams, InitializeResult, MCP_VERSION,
    SUPPORTED_PROTOCOL_VERSIONS,
};

/// What the client told us during `initialize`.
#[derive(Debug, Clone, Default)]
pub struct NegotiatedCapabilities {
    pub client: ClientCapabilities,
    pub client_info: Option<Implementation>,
    pub protocol_version: Option<String>,
    pub initialized: bool,
}

impl NegotiatedCapabilities {
    /// Record the client's parameters and pick the protocol version.
    ///
    /// A supported version is echoed back; anything else falls back to
    /// [`MCP_VERSION`].
    pub fn negotiate(&mut self, params: InitializeParams) -> InitializeResult {
        let version = if SUPPORTED_PROTOCOL_VERSIONS.contains(&params.protocol_version.as_str()) {
            params.protocol_version.clone()
        } else {
            tracing::warn!(
                "Client requested protocol version {}, server supports {}. Proceeding with {}.",
                params.protocol_version,
                SUPPORTED_PROTOCOL_VERSIONS.join(", "),
                MCP_VERSION
            );
            MCP_VERSION.to_string()
        };

        match &params.client_info {
            Some(info) => tracing::info!("Initialized with client: {} v{}", info.name, info.version),
            None => tracing::info!("Initialized with unnamed client"),
        }

        self.client = params.capabilities;
        self.client_info = params.client_info;
        self.protocol_version = Some(version.clone());

        InitializeResult::for_version(&version)
    }

    /// Handle `notifications/initialized`.
    pub fn mark_initialized(&mut self) {
        self.initialized = true;
        tracing::info!("MCP handshake complete");
    }
}
