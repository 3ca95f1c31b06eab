//! Main request dispatcher: receives JSON-RPC messages, routes to handlers.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::registry::Registry;
use crate::schema;
use crate::types::*;

use super::negotiation::NegotiatedCapabilities;
use super::state::SessionState;
use super::validator::{validate_envelope, validate_request};

/// Dispatches one session's JSON-RPC messages against a shared registry.
///
/// Each session owns its handler; the registry behind it is shared and
/// read-only. Messages are handled one at a time, so the session state needs
/// no locking.
pub struct ProtocolHandler {
    registry: Arc<Registry>,
    capabilities: NegotiatedCapabilities,
    state: SessionState,
}

impl ProtocolHandler {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            capabilities: NegotiatedCapabilities::default(),
            state: SessionState::Uninitialized,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn capabilities(&self) -> &NegotiatedCapabilities {
        &self.capabilities
    }

    /// End the session. Later messages are dropped without a reply.
    pub fn close(&mut self) {
        if !self.state.is_closed() {
            tracing::info!("Session closed (was {})", self.state);
            self.state = SessionState::Closed;
        }
    }

    /// Handle a decoded message. Requests always produce a reply while the
    /// session is open; notifications never do.
    pub fn handle_message(&mut self, msg: JsonRpcMessage) -> Option<JsonRpcReply> {
        if self.state.is_closed() {
            tracing::debug!("Dropping {} on closed session", msg.method());
            return None;
        }

        match msg {
            JsonRpcMessage::Request(req) => Some(self.handle_request(req)),
            JsonRpcMessage::Notification(notif) => {
                self.handle_notification(notif);
                None
            }
        }
    }

    fn handle_request(&mut self, request: JsonRpcRequest) -> JsonRpcReply {
        let id = request.id.clone();
        tracing::debug!("-> {} (id {id})", request.method);

        let outcome = validate_request(&request)
            .and_then(|()| self.check_sequence(&request.method))
            .and_then(|()| self.dispatch_request(&request));

        match outcome {
            Ok(value) => JsonRpcReply::Response(JsonRpcResponse::new(id, value)),
            Err(e) => {
                tracing::warn!("{} (id {id}) failed: {e}", request.method);
                JsonRpcReply::Error(e.to_json_rpc_error(id))
            }
        }
    }

    /// Only `initialize` is accepted before the handshake, and only once.
    /// Closed sessions never get here; `handle_message` drops their traffic.
    fn check_sequence(&self, method: &str) -> McpResult<()> {
        let ready = self.state.is_ready();
        match method {
            "initialize" if ready => Err(McpError::AlreadyInitialized),
            "initialize" => Ok(()),
            other if !ready => Err(McpError::NotInitialized(other.to_string())),
            _ => Ok(()),
        }
    }

    fn dispatch_request(&mut self, request: &JsonRpcRequest) -> McpResult<Value> {
        let params = request.params.as_ref();
        match request.method.as_str() {
            "initialize" => self.handle_initialize(params),
            "ping" => Ok(Value::Object(serde_json::Map::new())),

            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tools_call(params),

            "resources/list" => self.handle_resources_list(),
            "resources/read" => self.handle_resources_read(params),

            _ => Err(McpError::MethodNotFound(request.method.clone())),
        }
    }

    fn handle_notification(&mut self, notification: JsonRpcNotification) {
        if let Err(e) = validate_envelope(notification.jsonrpc.as_deref(), &notification.method) {
            tracing::warn!("Ignoring malformed notification: {e}");
            return;
        }

        match notification.method.as_str() {
            "notifications/initialized" | "initialized" => {
                if self.state.is_ready() {
                    self.capabilities.mark_initialized();
                } else {
                    tracing::warn!("initialized notification received before initialize");
                }
            }
            "notifications/cancelled" | "$/cancelRequest" => {
                tracing::info!("Received cancellation notification");
            }
            _ => {
                tracing::debug!("Unknown notification: {}", notification.method);
            }
        }
    }

    fn handle_initialize(&mut self, params: Option<&Value>) -> McpResult<Value> {
        let init_params: InitializeParams = parse_params(params, "Initialize params required")?;
        let result = self.capabilities.negotiate(init_params);
        let value = to_result_value(&result)?;

        self.state = SessionState::Ready;
        Ok(value)
    }

    fn handle_tools_list(&self) -> McpResult<Value> {
        to_result_value(&ToolListResult {
            tools: self.registry.list_tools(),
        })
    }

    fn handle_tools_call(&self, params: Option<&Value>) -> McpResult<Value> {
        let call_params: ToolCallParams = parse_params(params, "Tool call params required")?;
        let name = call_params.name;

        let tool = self
            .registry
            .resolve_tool(&name)
            .ok_or_else(|| McpError::ToolNotFound(name.clone()))?;

        let arguments = match call_params.arguments {
            None | Some(Value::Null) => Value::Object(serde_json::Map::new()),
            Some(args) => args,
        };
        schema::validate(&tool.definition.input_schema, &arguments)?;

        let content = match panic::catch_unwind(AssertUnwindSafe(|| tool.invoke(&arguments))) {
            Ok(Ok(content)) => content,
            Ok(Err(e)) => {
                return Err(McpError::ToolExecution {
                    name,
                    message: e.to_string(),
                })
            }
            Err(payload) => {
                tracing::error!("Tool {name} panicked");
                return Err(McpError::InternalError(format!(
                    "tool {name} panicked: {}",
                    panic_message(payload.as_ref())
                )));
            }
        };

        to_result_value(&ToolCallResult { content })
    }

    fn handle_resources_list(&self) -> McpResult<Value> {
        to_result_value(&ResourceListResult {
            resources: self.registry.list_resources(),
        })
    }

    fn handle_resources_read(&self, params: Option<&Value>) -> McpResult<Value> {
        let read_params: ResourceReadParams =
            parse_params(params, "Resource read params required")?;
        let uri = read_params.uri;

        let resource = self
            .registry
            .resolve_resource(&uri)
            .ok_or_else(|| McpError::ResourceNotFound(uri.clone()))?;

        let blocks = match panic::catch_unwind(AssertUnwindSafe(|| resource.read())) {
            Ok(Ok(blocks)) => blocks,
            Ok(Err(e)) => {
                return Err(McpError::ResourceExecution {
                    uri,
                    message: e.to_string(),
                })
            }
            Err(payload) => {
                tracing::error!("Resource {uri} panicked");
                return Err(McpError::InternalError(format!(
                    "resource {uri} panicked: {}",
                    panic_message(payload.as_ref())
                )));
            }
        };

        let mime_type = &resource.definition.mime_type;
        let contents = blocks
            .into_iter()
            .map(|block| ResourceContent {
                uri: uri.clone(),
                mime_type: mime_type.clone(),
                block,
            })
            .collect();

        to_result_value(&ReadResourceResult { contents })
    }
}

fn parse_params<T: DeserializeOwned>(params: Option<&Value>, missing: &str) -> McpResult<T> {
    match params {
        None | Some(Value::Null) => Err(McpError::InvalidParams(missing.to_string())),
        Some(value) => {
            serde::Deserialize::deserialize(value).map_err(|e| McpError::InvalidParams(e.to_string()))
        }
    }
}

fn to_result_value(result: &impl Serialize) -> McpResult<Value> {
    serde_json::to_value(result).map_err(|e| McpError::InternalError(e.to_string()))
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic"
    }
}
