// Not every test binary uses every helper.
#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use zabbix_rs::{Error, HttpResponse, Result, Transport};

/// Canned reply for one exchange.
pub enum Reply {
    Body(String),
    Fail(String),
}

impl Reply {
    /// Successful envelope wrapping `value` as the result.
    pub fn result(value: Value) -> Self {
        Reply::Body(json!({"jsonrpc": "2.0", "id": "1", "result": value}).to_string())
    }

    /// Error envelope with the given code and data.
    pub fn api_error(code: i64, data: &str) -> Self {
        Reply::Body(
            json!({
                "jsonrpc": "2.0",
                "id": "1",
                "error": {"code": code, "message": "Application error.", "data": data}
            })
            .to_string(),
        )
    }
}

/// In-memory transport that records every outgoing envelope and pops
/// scripted replies in order. Lets tests assert on the exact wire shape
/// without a socket.
#[derive(Default)]
pub struct ScriptedTransport {
    requests: Mutex<Vec<Value>>,
    content_types: Mutex<Vec<String>>,
    replies: Mutex<VecDeque<Reply>>,
}

impl ScriptedTransport {
    pub fn new(replies: Vec<Reply>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            content_types: Mutex::new(Vec::new()),
            replies: Mutex::new(replies.into()),
        })
    }

    /// Envelopes sent so far, oldest first.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }

    pub fn content_types(&self) -> Vec<String> {
        self.content_types.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(
        &self,
        _url: &str,
        content_type: &str,
        body: String,
        _basic_auth: Option<&(String, String)>,
    ) -> Result<HttpResponse> {
        self.requests
            .lock()
            .unwrap()
            .push(serde_json::from_str(&body).expect("request body must be JSON"));
        self.content_types
            .lock()
            .unwrap()
            .push(content_type.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Body(body)) => Ok(HttpResponse { status: 200, body }),
            Some(Reply::Fail(message)) => Err(Error::Transport {
                status: None,
                message,
            }),
            None => panic!("no scripted reply left for request"),
        }
    }
}
