use crate::config::Config;
use crate::error::{Error, Result};
use crate::params::Params;
use crate::rpc::{JsonRpcError, JsonRpcRequest, CONTENT_TYPE_JSON_RPC};
use crate::token_cache::TokenCache;
use crate::transport::{HttpTransport, Transport, TransportOptions};
use chrono::Utc;
use serde_json::{json, Map, Value};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

const LOGIN_METHOD: &str = "user.login";
const LOGOUT_METHOD: &str = "user.logout";
// Cheap authenticated call used only to check whether a cached token is
// still accepted by the server.
const PROBE_METHOD: &str = "user.get";

/// Client for the Zabbix JSON-RPC API.
///
/// Holds the per-client session state: base URL, current auth token,
/// default parameters merged into every object-style call, and the
/// request-id counter. One in-flight request at a time; callers needing
/// parallelism should use independent client instances.
pub struct ZabbixApiClient {
    url: String,
    token: String,
    default_params: Map<String, Value>,
    last_request_id: u64,
    basic_auth: Option<(String, String)>,
    log_communication: bool,
    transport: Arc<dyn Transport>,
}

impl ZabbixApiClient {
    pub fn builder(url: impl Into<String>) -> ZabbixApiClientBuilder {
        ZabbixApiClientBuilder::new(url)
    }

    /// Create a client with the default transport. Shorthand for
    /// `builder(url).build()` when no options are needed.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::builder(url).build()
    }

    /// Build a client from a [`Config`] and, when credentials are
    /// present, log in immediately.
    pub async fn connect(config: Config) -> Result<Self> {
        let api = config.api;
        let mut builder = Self::builder(&api.url).log_communication(api.log_communication);
        if let (Some(user), Some(password)) = (&api.basic_auth_user, &api.basic_auth_password) {
            builder = builder.basic_auth(user, password);
        }
        if let Some(token) = &api.token {
            builder = builder.token(token);
        }
        let mut client = builder.build()?;

        if api.token.is_none() {
            if let (Some(username), Some(password)) = (api.username, api.password) {
                client
                    .login(
                        json!({"user": username, "password": password}),
                        "",
                        api.cache_dir.as_deref(),
                    )
                    .await?;
            }
        }
        Ok(client)
    }

    /// Current session token, or `None` when unauthenticated.
    pub fn token(&self) -> Option<&str> {
        if self.token.is_empty() {
            None
        } else {
            Some(&self.token)
        }
    }

    /// Install a token obtained elsewhere, bypassing the login flow.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// Generic JSON-RPC call. Every generated wrapper funnels into this.
    ///
    /// `params` is normalized per the session rules (see [`Params`]),
    /// and when `result_key` is non-empty a list result is re-keyed into
    /// an object keyed by each element's value at that field. The token
    /// is attached only when `requires_auth` is true; before any login
    /// it is sent as `null`.
    pub async fn call(
        &mut self,
        method: &str,
        params: impl Into<Params>,
        result_key: &str,
        requires_auth: bool,
    ) -> Result<Value> {
        let params = params.into().normalize(&self.default_params);
        let id = self.next_request_id();
        let auth = requires_auth.then(|| {
            if self.token.is_empty() {
                Value::Null
            } else {
                Value::String(self.token.clone())
            }
        });

        let request = JsonRpcRequest::new(method, params, id, auth);
        let body = serde_json::to_string(&request)
            .map_err(|err| Error::Decode(format!("failed to encode request: {err}")))?;
        if self.log_communication {
            debug!(method, request = %body, "sending API request");
        }

        let response = self
            .transport
            .send(
                &self.url,
                CONTENT_TYPE_JSON_RPC,
                body,
                self.basic_auth.as_ref(),
            )
            .await?;
        if self.log_communication {
            debug!(method, status = response.status, response = %response.body, "received API response");
        }

        let decoded: Value = serde_json::from_str(&response.body)
            .map_err(|err| Error::Decode(format!("response is not valid JSON: {err}")))?;
        let mut envelope = match decoded {
            Value::Object(map) => map,
            // An array body is well-formed JSON but can carry neither a
            // result nor an error, so it falls out below.
            Value::Array(_) => Map::new(),
            _ => {
                return Err(Error::Decode(
                    "response is neither an object nor an array".to_string(),
                ))
            }
        };

        match (envelope.remove("result"), envelope.remove("error")) {
            (Some(_), Some(_)) => Err(Error::Decode(
                "response carries both result and error".to_string(),
            )),
            (None, None) => Err(Error::Decode(
                "response carries neither result nor error".to_string(),
            )),
            (None, Some(error)) => {
                let error: JsonRpcError = serde_json::from_value(error)
                    .map_err(|err| Error::Decode(format!("malformed error object: {err}")))?;
                Err(Error::Api {
                    code: error.code,
                    message: error.message,
                    data: error.data,
                })
            }
            (Some(result), None) => Ok(rekey_result(result, result_key)),
        }
    }

    /// Authenticate against the server, reusing a cached token when one
    /// is available and still accepted.
    ///
    /// `cache_dir` of `None` uses the system temp directory; an empty
    /// string disables caching. Caching also needs the login params to
    /// carry the username (`user`, or `username` on newer servers).
    /// A cached token is validated with a cheap `user.get` probe; if the
    /// probe fails the stale file is deleted and a fresh `user.login`
    /// call is made. Cache IO never fails the login itself.
    pub async fn login(
        &mut self,
        params: impl Into<Params>,
        result_key: &str,
        cache_dir: Option<&str>,
    ) -> Result<String> {
        self.token.clear();
        let params = params.into();

        let cache = match (cache_dir, login_username(&params)) {
            (Some(""), _) | (_, None) => None,
            (Some(dir), Some(user)) => TokenCache::resolve(Path::new(dir), user),
            (None, Some(user)) => TokenCache::resolve(&std::env::temp_dir(), user),
        };

        if let Some(cache) = &cache {
            if let Some(candidate) = cache.read() {
                self.token = candidate;
                match self
                    .call(PROBE_METHOD, json!({"output": "userid", "limit": 1}), "", true)
                    .await
                {
                    Ok(_) => return Ok(self.token.clone()),
                    Err(err) => {
                        debug!(%err, "cached session token rejected, logging in afresh");
                        self.token.clear();
                        cache.invalidate();
                    }
                }
            }
        }

        let result = self.call(LOGIN_METHOD, params, result_key, false).await?;
        let token = result
            .as_str()
            .ok_or_else(|| Error::Decode("login result is not a session token".to_string()))?
            .to_string();
        self.token = token.clone();
        if let Some(cache) = &cache {
            cache.write(&token);
        }
        Ok(token)
    }

    /// End the session. The token is cleared only after the remote call
    /// succeeds; on error it is left in place so the caller can retry.
    pub async fn logout(
        &mut self,
        params: impl Into<Params>,
        result_key: &str,
    ) -> Result<Value> {
        let result = self.call(LOGOUT_METHOD, params, result_key, true).await?;
        self.token.clear();
        Ok(result)
    }

    /// Remote API version string; callable without authentication.
    pub async fn version(&mut self) -> Result<String> {
        let result = self.call("apiinfo.version", Params::Empty, "", false).await?;
        result
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| Error::Decode("version result is not a string".to_string()))
    }

    // Nanosecond timestamp, bumped when the clock has not advanced since
    // the previous call so that rapid sequential calls on a coarse clock
    // still get distinct ids. Uniqueness across processes is not needed.
    fn next_request_id(&mut self) -> String {
        let now = self.last_request_id.max(
            u64::try_from(Utc::now().timestamp_nanos_opt().unwrap_or(0)).unwrap_or(0),
        );
        self.last_request_id = if now > self.last_request_id {
            now
        } else {
            self.last_request_id + 1
        };
        self.last_request_id.to_string()
    }
}

/// Username under which a login should be cached, if the params carry one.
fn login_username(params: &Params) -> Option<&str> {
    match params {
        Params::Object(map) => map
            .get("user")
            .or_else(|| map.get("username"))
            .and_then(Value::as_str),
        _ => None,
    }
}

/// Re-key a list result into an object keyed by each element's value at
/// `key`. Applies only when the list is non-empty and its first element
/// carries the field; elements lacking the field are skipped.
fn rekey_result(result: Value, key: &str) -> Value {
    if key.is_empty() {
        return result;
    }
    let Value::Array(items) = result else {
        return result;
    };
    let first_has_key = items.first().map_or(false, |item| item.get(key).is_some());
    if !first_has_key {
        return Value::Array(items);
    }

    let mut rekeyed = Map::with_capacity(items.len());
    for item in items {
        let field = match item.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => continue,
        };
        rekeyed.insert(field, item);
    }
    Value::Object(rekeyed)
}

/// Builder for [`ZabbixApiClient`]. Supplying both a transport instance
/// and transport options is a configuration error.
pub struct ZabbixApiClientBuilder {
    url: String,
    token: Option<String>,
    basic_auth: Option<(String, String)>,
    default_params: Map<String, Value>,
    log_communication: bool,
    transport: Option<Arc<dyn Transport>>,
    transport_options: Option<TransportOptions>,
}

impl ZabbixApiClientBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: None,
            basic_auth: None,
            default_params: Map::new(),
            log_communication: false,
            transport: None,
            transport_options: None,
        }
    }

    /// Pre-existing session token; skips the login flow entirely.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// HTTP basic-auth credentials attached to every transport call.
    /// Independent of the API session token.
    pub fn basic_auth(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some((user.into(), password.into()));
        self
    }

    /// Default parameter merged underneath every object-style call.
    pub fn default_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.default_params.insert(key.into(), value.into());
        self
    }

    /// Log full request and response bodies at debug level.
    pub fn log_communication(mut self, enabled: bool) -> Self {
        self.log_communication = enabled;
        self
    }

    /// Inject a transport. Mutually exclusive with `transport_options`.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Configure the built-in reqwest transport. Mutually exclusive
    /// with `transport`.
    pub fn transport_options(mut self, options: TransportOptions) -> Self {
        self.transport_options = Some(options);
        self
    }

    pub fn build(self) -> Result<ZabbixApiClient> {
        let transport: Arc<dyn Transport> = match (self.transport, self.transport_options) {
            (Some(_), Some(_)) => {
                return Err(Error::Configuration(
                    "supply either a transport instance or transport options, not both"
                        .to_string(),
                ))
            }
            (Some(transport), None) => transport,
            (None, Some(options)) => Arc::new(HttpTransport::with_options(options)?),
            (None, None) => Arc::new(HttpTransport::new()?),
        };

        Ok(ZabbixApiClient {
            url: self.url,
            token: self.token.unwrap_or_default(),
            default_params: self.default_params,
            last_request_id: 0,
            basic_auth: self.basic_auth,
            log_communication: self.log_communication,
            transport,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rekey_list_of_objects() {
        let result = json!([
            {"hostid": "1", "name": "x"},
            {"hostid": "2", "name": "y"}
        ]);
        let rekeyed = rekey_result(result, "hostid");
        assert_eq!(
            rekeyed,
            json!({
                "1": {"hostid": "1", "name": "x"},
                "2": {"hostid": "2", "name": "y"}
            })
        );
    }

    #[test]
    fn test_rekey_empty_list_unchanged() {
        assert_eq!(rekey_result(json!([]), "hostid"), json!([]));
    }

    #[test]
    fn test_rekey_skips_elements_missing_field() {
        let result = json!([
            {"hostid": "1"},
            {"name": "no id"}
        ]);
        let rekeyed = rekey_result(result, "hostid");
        assert_eq!(rekeyed, json!({"1": {"hostid": "1"}}));
    }

    #[test]
    fn test_rekey_first_element_without_field_passes_through() {
        let result = json!([{"name": "x"}, {"hostid": "2"}]);
        let rekeyed = rekey_result(result.clone(), "hostid");
        assert_eq!(rekeyed, result);
    }

    #[test]
    fn test_rekey_without_key_is_identity() {
        let result = json!([{"hostid": "1"}]);
        assert_eq!(rekey_result(result.clone(), ""), result);
    }

    #[test]
    fn test_rekey_non_string_field_values() {
        let result = json!([{"eventid": 7}]);
        assert_eq!(rekey_result(result, "eventid"), json!({"7": {"eventid": 7}}));
    }

    #[test]
    fn test_login_username_object_forms() {
        assert_eq!(
            login_username(&Params::from(json!({"user": "Admin", "password": "x"}))),
            Some("Admin")
        );
        assert_eq!(
            login_username(&Params::from(json!({"username": "Admin", "password": "x"}))),
            Some("Admin")
        );
        assert_eq!(login_username(&Params::from(json!([1, 2]))), None);
    }

    #[test]
    fn test_request_ids_strictly_increase() {
        let mut client = ZabbixApiClient::new("http://example.test/api_jsonrpc.php").unwrap();
        let first: u64 = client.next_request_id().parse().unwrap();
        let second: u64 = client.next_request_id().parse().unwrap();
        let third: u64 = client.next_request_id().parse().unwrap();
        assert!(second > first);
        assert!(third > second);
    }
}
