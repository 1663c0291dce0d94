/// Failure of a single Gingr API call. The `Display` text is what the
/// dashboard reports back to callers as `details`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GingrError {
    /// The request never produced a response (DNS, connect, bad URL, IO).
    Transport(String),
    /// Gingr answered with a non-2xx status.
    Status { status: u16, body: String },
    /// The response body was not valid JSON.
    Decode(String),
}

impl std::fmt::Display for GingrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GingrError::Transport(msg) => write!(f, "{msg}"),
            GingrError::Status { status, .. } => {
                write!(f, "Request failed with status code {status}")
            }
            GingrError::Decode(msg) => write!(f, "invalid response body: {msg}"),
        }
    }
}

impl std::error::Error for GingrError {}
