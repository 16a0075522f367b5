use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";

/// Content type the Zabbix API expects on every request.
pub const CONTENT_TYPE_JSON_RPC: &str = "application/json-rpc";

/// Outgoing JSON-RPC 2.0 envelope. `auth` is omitted entirely for
/// anonymous methods and serialized as `null` when the method requires
/// authentication but no token has been obtained yet.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: &'static str,
    pub method: String,
    pub params: Value,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<Value>,
}

impl JsonRpcRequest {
    pub fn new(method: &str, params: Value, id: String, auth: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method: method.to_string(),
            params,
            id,
            auth,
        }
    }
}

/// `error` object of a JSON-RPC response. Zabbix puts the human-readable
/// detail in `data` and a generic phrase in `message`.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_auth_field_omitted_when_none() {
        let request = JsonRpcRequest::new("apiinfo.version", json!({}), "1".to_string(), None);
        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(
            encoded,
            json!({"jsonrpc": "2.0", "method": "apiinfo.version", "params": {}, "id": "1"})
        );
    }

    #[test]
    fn test_auth_field_null_when_unauthenticated() {
        let request =
            JsonRpcRequest::new("host.get", json!({}), "2".to_string(), Some(Value::Null));
        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(encoded["auth"], Value::Null);
        assert!(encoded.as_object().unwrap().contains_key("auth"));
    }

    #[test]
    fn test_error_object_defaults_missing_fields() {
        let error: JsonRpcError = serde_json::from_value(json!({"code": -32602})).unwrap();
        assert_eq!(error.code, -32602);
        assert!(error.message.is_empty());
        assert!(error.data.is_empty());
    }
}
