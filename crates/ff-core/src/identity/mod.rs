//! Signed-in identity, passed explicitly to every operation that needs it.

use serde::{Deserialize, Serialize};

use crate::errors::AuthRequiredError;
use crate::ids::UserId;

/// An authenticated backend session.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user_id: UserId,
    pub email: Option<String>,
    pub access_token: String,
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Per-view context: who is looking at the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerContext {
    identity: Option<AuthSession>,
}

impl ViewerContext {
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    pub fn signed_in(session: AuthSession) -> Self {
        Self {
            identity: Some(session),
        }
    }

    pub fn identity(&self) -> Option<&AuthSession> {
        self.identity.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }

    /// Returns the identity or the error the view turns into a sign-in redirect.
    pub fn require_identity(&self, action: &'static str) -> Result<&AuthSession, AuthRequiredError> {
        self.identity.as_ref().ok_or(AuthRequiredError { action })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_viewer_requires_sign_in() {
        let ctx = ViewerContext::anonymous();
        let err = ctx.require_identity("upload item").unwrap_err();
        assert_eq!(err.action, "upload item");
    }

    #[test]
    fn test_debug_output_hides_token() {
        let session = AuthSession {
            user_id: UserId::from_str("u1"),
            email: None,
            access_token: "secret-token".to_string(),
        };
        let printed = format!("{:?}", session);
        assert!(!printed.contains("secret-token"));
        assert!(printed.contains("u1"));
    }
}
