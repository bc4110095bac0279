//! Session domain entities

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Opaque session identifier (Value Object)
///
/// Generated once at startup from the current UTC time in milliseconds
/// and reused unchanged for every exchange in the process lifetime.
/// Read-only after creation; there is no destruction logic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh identifier for this process run.
    pub fn generate() -> Self {
        Self(Utc::now().timestamp_millis().to_string())
    }

    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_millisecond_timestamp_text() {
        let id = SessionId::generate();
        assert!(!id.as_str().is_empty());
        assert!(id.as_str().chars().all(|c| c.is_ascii_digit()));
        // Milliseconds since 2001 are at least 13 digits
        assert!(id.as_str().len() >= 13);
    }

    #[test]
    fn identifier_is_stable_across_uses() {
        let id = SessionId::new("1700000000000");
        let copy = id.clone();
        assert_eq!(id, copy);
        assert_eq!(id.as_str(), "1700000000000");
        assert_eq!(id.to_string(), "1700000000000");
    }
}
