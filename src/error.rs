use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced by the client. Nothing here is retried internally;
/// every variant propagates to the direct caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Conflicting or unusable construction arguments. Raised before any
    /// network activity takes place.
    #[error("invalid client configuration: {0}")]
    Configuration(String),

    /// The HTTP exchange could not be completed, or the server answered
    /// with a non-success status. Carries the status and body when the
    /// transport surfaced them.
    #[error("transport error: {message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },

    /// The response body was not a usable JSON-RPC envelope.
    #[error("invalid API response: {0}")]
    Decode(String),

    /// The remote system returned a well-formed `error` object. This is
    /// how server-side validation failures surface.
    #[error("API error {code}: {message} {data}")]
    Api {
        code: i64,
        message: String,
        data: String,
    },
}

impl Error {
    /// HTTP status attached to a transport failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport { status, .. } => *status,
            _ => None,
        }
    }
}
