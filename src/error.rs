use std::fmt;

/// Custom error type for Sentry discovery operations
#[derive(Debug)]
pub enum DiscoveryError {
    /// HTTP transport failure that is not retried
    Http(reqwest::Error),
    /// API rejected the token (401/403)
    Authentication { status: u16, body: String },
    /// API returned any other non-success status
    Api { status: u16, body: String },
    /// Every attempt timed out
    Timeout { attempts: u32 },
    /// No connection could be established on any attempt
    Connection { attempts: u32 },
    /// 429 responses exceeded the configured wait ceiling
    RateLimited { waits: u32 },
    /// Requested organization slug is not visible to the token
    OrganizationNotFound(String),
    /// Discovery found no organization at all
    EmptySnapshot,
    /// Connection test listed no organization (holds the base URL)
    ConnectionTest(String),
    /// Token not found in any source
    TokenNotFound(String),
    /// JSON parsing error or unexpected payload
    Json(String),
    /// Configuration error
    Config(String),
    /// Local I/O failure (output file, prompt)
    Io(String),
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscoveryError::Http(e) => write!(f, "HTTP request failed: {}", e),
            DiscoveryError::Authentication { status, body } => {
                write!(f, "Authentication failed: {} - {}", status, body)
            }
            DiscoveryError::Api { status, body } => {
                write!(f, "API error (status {}): {}", status, body)
            }
            DiscoveryError::Timeout { attempts } => {
                write!(f, "Request timeout after {} attempts", attempts)
            }
            DiscoveryError::Connection { attempts } => {
                write!(f, "Connection error after {} attempts", attempts)
            }
            DiscoveryError::RateLimited { waits } => write!(
                f,
                "Rate limited: still throttled after {} Retry-After waits",
                waits
            ),
            DiscoveryError::OrganizationNotFound(slug) => {
                write!(f, "Organization '{}' not found", slug)
            }
            DiscoveryError::EmptySnapshot => write!(
                f,
                "Failed to discover resources: no organizations found or invalid token"
            ),
            DiscoveryError::ConnectionTest(base_url) => write!(
                f,
                "Connection test against {} failed: no organizations visible to the token",
                base_url
            ),
            DiscoveryError::TokenNotFound(msg) => write!(f, "{}", msg),
            DiscoveryError::Json(msg) => write!(f, "JSON error: {}", msg),
            DiscoveryError::Config(msg) => write!(f, "Configuration error: {}", msg),
            DiscoveryError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for DiscoveryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DiscoveryError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DiscoveryError {
    fn from(err: reqwest::Error) -> Self {
        DiscoveryError::Http(err)
    }
}

impl From<serde_json::Error> for DiscoveryError {
    fn from(err: serde_json::Error) -> Self {
        DiscoveryError::Json(err.to_string())
    }
}

impl From<serde_yml::Error> for DiscoveryError {
    fn from(err: serde_yml::Error) -> Self {
        DiscoveryError::Config(err.to_string())
    }
}

impl From<std::io::Error> for DiscoveryError {
    fn from(err: std::io::Error) -> Self {
        DiscoveryError::Io(err.to_string())
    }
}

/// Result type alias for discovery operations
pub type Result<T> = std::result::Result<T, DiscoveryError>;
