//! JSON-RPC envelope validation.

use serde_json::Value;

use crate::types::{JsonRpcRequest, McpError, McpResult, JSONRPC_VERSION};

/// Check the `jsonrpc` marker (optional, but `"2.0"` when present) and the
/// method name.
pub fn validate_envelope(jsonrpc: Option<&str>, method: &str) -> McpResult<()> {
    if let Some(version) = jsonrpc {
        if version != JSONRPC_VERSION {
            return Err(McpError::InvalidRequest(format!(
                "Expected jsonrpc version \"{JSONRPC_VERSION}\", got \"{version}\""
            )));
        }
    }

    if method.is_empty() {
        return Err(McpError::InvalidRequest(
            "Method name must not be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validate that a JSON-RPC request is well-formed.
///
/// `params` may be absent or null; otherwise it must be an object.
pub fn validate_request(request: &JsonRpcRequest) -> McpResult<()> {
    validate_envelope(request.jsonrpc.as_deref(), &request.method)?;

    match &request.params {
        None | Some(Value::Null) | Some(Value::Object(_)) => Ok(()),
        Some(other) => Err(McpError::InvalidParams(format!(
            "params must be an object, got {}",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RequestId;
    use serde_json::json;

    fn request(jsonrpc: Option<&str>, method: &str, params: Option<Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: jsonrpc.map(str::to_string),
            id: RequestId::Number(1),
            method: method.to_string(),
            params,
        }
    }

    #[test]
    fn test_marker_is_optional() {
        assert!(validate_request(&request(None, "ping", None)).is_ok());
        assert!(validate_request(&request(Some("2.0"), "ping", Some(Value::Null))).is_ok());
    }

    #[test]
    fn test_wrong_marker_rejected() {
        let err = validate_request(&request(Some("1.0"), "ping", None)).unwrap_err();
        assert_eq!(err.code(), -32600);
    }

    #[test]
    fn test_empty_method_rejected() {
        let err = validate_request(&request(None, "", None)).unwrap_err();
        assert_eq!(err.code(), -32600);
    }

    #[test]
    fn test_array_params_rejected() {
        let err = validate_request(&request(None, "tools/list", Some(json!([1, 2])))).unwrap_err();
        assert_eq!(err.code(), -32602);
        assert!(err.to_string().contains("array"));
    }
}
