//! JSON-RPC 2.0 message types for the MCP protocol.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{McpError, McpResult};

/// JSON-RPC 2.0 protocol version.
pub const JSONRPC_VERSION: &str = "2.0";

/// Unique request identifier: can be string, number, or null.
///
/// Integers above `i64::MAX` land in `Unsigned` so they are still echoed
/// back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    String(String),
    Number(i64),
    Unsigned(u64),
    Null,
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestId::String(s) => write!(f, "{s}"),
            RequestId::Number(n) => write!(f, "{n}"),
            RequestId::Unsigned(n) => write!(f, "{n}"),
            RequestId::Null => write!(f, "null"),
        }
    }
}

/// A JSON-RPC request message. The `jsonrpc` marker is optional on input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsonrpc: Option<String>,
    pub id: RequestId,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// A JSON-RPC notification (no id, no response expected).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcNotification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsonrpc: Option<String>,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// A JSON-RPC 2.0 success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: RequestId,
    pub result: Value,
}

/// A JSON-RPC 2.0 error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub jsonrpc: String,
    pub id: RequestId,
    pub error: JsonRpcErrorObject,
}

/// Error object within a JSON-RPC error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcErrorObject {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Any message a client may send.
#[derive(Debug, Clone)]
pub enum JsonRpcMessage {
    Request(JsonRpcRequest),
    Notification(JsonRpcNotification),
}

/// Any message the server sends back: a result or an error, never both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonRpcReply {
    Response(JsonRpcResponse),
    Error(JsonRpcError),
}

impl JsonRpcMessage {
    /// Decode an already-parsed JSON value into a client message.
    ///
    /// The presence of an `id` member decides between request and
    /// notification, so a request with a malformed id is rejected instead of
    /// being silently treated as a notification.
    pub fn from_value(value: Value) -> McpResult<Self> {
        let Some(object) = value.as_object() else {
            return Err(McpError::InvalidRequest(
                "Message must be a JSON object".to_string(),
            ));
        };

        if object.contains_key("id") {
            serde_json::from_value(value)
                .map(JsonRpcMessage::Request)
                .map_err(|e| McpError::InvalidRequest(e.to_string()))
        } else {
            serde_json::from_value(value)
                .map(JsonRpcMessage::Notification)
                .map_err(|e| McpError::InvalidRequest(e.to_string()))
        }
    }

    pub fn method(&self) -> &str {
        match self {
            JsonRpcMessage::Request(r) => &r.method,
            JsonRpcMessage::Notification(n) => &n.method,
        }
    }
}

impl JsonRpcResponse {
    pub fn new(id: RequestId, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result,
        }
    }
}

impl JsonRpcError {
    pub fn new(id: RequestId, code: i32, message: String) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            error: JsonRpcErrorObject {
                code,
                message,
                data: None,
            },
        }
    }
}

impl JsonRpcReply {
    pub fn id(&self) -> &RequestId {
        match self {
            JsonRpcReply::Response(r) => &r.id,
            JsonRpcReply::Error(e) => &e.id,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, JsonRpcReply::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_without_jsonrpc_marker() {
        let msg = JsonRpcMessage::from_value(json!({"id": 7, "method": "tools/list"})).unwrap();
        match msg {
            JsonRpcMessage::Request(req) => {
                assert_eq!(req.id, RequestId::Number(7));
                assert!(req.jsonrpc.is_none());
                assert!(req.params.is_none());
            }
            JsonRpcMessage::Notification(_) => panic!("expected request"),
        }
    }

    #[test]
    fn test_missing_id_is_notification() {
        let msg =
            JsonRpcMessage::from_value(json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))
                .unwrap();
        assert!(matches!(msg, JsonRpcMessage::Notification(_)));
        assert_eq!(msg.method(), "notifications/initialized");
    }

    #[test]
    fn test_string_id_preserved() {
        let msg = JsonRpcMessage::from_value(json!({"id": "abc", "method": "ping"})).unwrap();
        let JsonRpcMessage::Request(req) = msg else {
            panic!("expected request");
        };
        assert_eq!(req.id, RequestId::String("abc".to_string()));
    }

    #[test]
    fn test_id_beyond_i64_echoed() {
        let msg = JsonRpcMessage::from_value(json!({"id": u64::MAX, "method": "ping"})).unwrap();
        let JsonRpcMessage::Request(req) = msg else {
            panic!("expected request");
        };
        assert_eq!(req.id, RequestId::Unsigned(u64::MAX));

        let reply = JsonRpcResponse::new(req.id, json!({}));
        let wire = serde_json::to_string(&reply).unwrap();
        assert!(wire.contains("\"id\":18446744073709551615"));
    }

    #[test]
    fn test_fractional_id_rejected() {
        let err = JsonRpcMessage::from_value(json!({"id": 1.5, "method": "ping"})).unwrap_err();
        assert_eq!(err.code(), -32600);
    }

    #[test]
    fn test_non_object_rejected() {
        let err = JsonRpcMessage::from_value(json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.code(), -32600);
    }

    #[test]
    fn test_missing_method_rejected() {
        let err = JsonRpcMessage::from_value(json!({"id": 1})).unwrap_err();
        assert_eq!(err.code(), -32600);
    }

    #[test]
    fn test_reply_serializes_exactly_one_outcome() {
        let ok = JsonRpcReply::Response(JsonRpcResponse::new(RequestId::Number(1), json!({})));
        let err = JsonRpcReply::Error(JsonRpcError::new(RequestId::Null, -32700, "bad".into()));

        let ok_json = serde_json::to_value(&ok).unwrap();
        let err_json = serde_json::to_value(&err).unwrap();

        assert!(ok_json.get("result").is_some() && ok_json.get("error").is_none());
        assert!(err_json.get("error").is_some() && err_json.get("result").is_none());
        assert_eq!(err_json["id"], Value::Null);
        assert_eq!(ok_json["jsonrpc"], "2.0");
    }
}
