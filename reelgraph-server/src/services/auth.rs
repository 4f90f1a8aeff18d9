use async_trait::async_trait;
use thiserror::Error;

/// Identity resolved from a presented credential.
#[derive(Debug, Clone)]
pub struct Principal {
    pub subject: String,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid authorization token")]
    InvalidToken,
}

/// Credential verification capability. The transport layer resolves the
/// bearer token through this before query execution; resolvers only ever
/// see the resulting principal.
#[async_trait]
pub trait TokenVerifier: Send + Sync + std::fmt::Debug {
    async fn authorize(&self, token: &str) -> Result<Principal, AuthError>;
}

/// Verifier backed by the single service token from configuration.
#[derive(Debug)]
pub struct StaticTokenVerifier {
    expected: String,
}

impl StaticTokenVerifier {
    pub fn new(expected: String) -> Self {
        Self { expected }
    }
}

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn authorize(&self, token: &str) -> Result<Principal, AuthError> {
        if token == self.expected {
            Ok(Principal {
                subject: "service-token".to_string(),
            })
        } else {
            Err(AuthError::InvalidToken)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_matching_token_yields_principal() {
        let verifier = StaticTokenVerifier::new("s3cret".to_string());
        let principal = verifier.authorize("s3cret").await.unwrap();
        assert_eq!(principal.subject, "service-token");
    }

    #[tokio::test]
    async fn test_wrong_token_is_rejected() {
        let verifier = StaticTokenVerifier::new("s3cret".to_string());
        let err = verifier.authorize("guess").await;
        assert!(matches!(err, Err(AuthError::InvalidToken)));
    }
}
