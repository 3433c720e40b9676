//! Visitor session: who is signed in, as seen by the page chrome.
//!
//! Authentication itself happens elsewhere; the header only needs to know
//! whether someone is signed in, what to call them, and how to sign them out.

use serde::Serialize;
use std::sync::{PoisonError, RwLock};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub is_authenticated: bool,
    pub name: String,
}

/// Read access to the signed-in user plus sign-out.
pub trait AuthProvider {
    fn current_user(&self) -> Option<CurrentUser>;

    fn logout(&self);
}

/// In-memory session, e.g. for previews and tests.
#[derive(Debug, Default)]
pub struct SessionAuth {
    user: RwLock<Option<CurrentUser>>,
}

impl SessionAuth {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(name: impl Into<String>) -> Self {
        Self {
            user: RwLock::new(Some(CurrentUser {
                is_authenticated: true,
                name: name.into(),
            })),
        }
    }
}

impl AuthProvider for SessionAuth {
    fn current_user(&self) -> Option<CurrentUser> {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn logout(&self) {
        let previous = self
            .user
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(user) = previous {
            info!(user = %user.name, "Signed out");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_out_has_no_user() {
        assert!(SessionAuth::signed_out().current_user().is_none());
    }

    #[test]
    fn test_signed_in_user() {
        let auth = SessionAuth::signed_in("Ada");
        let user = auth.current_user().expect("Should be signed in");

        assert!(user.is_authenticated);
        assert_eq!(user.name, "Ada");
    }

    #[test]
    fn test_logout_clears_user() {
        let auth = SessionAuth::signed_in("Ada");
        auth.logout();
        assert!(auth.current_user().is_none());

        // Signing out twice is harmless
        auth.logout();
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn test_current_user_serialization() {
        let user = CurrentUser {
            is_authenticated: true,
            name: "Ada".to_string(),
        };
        let json = serde_json::to_value(&user).expect("Should serialize");
        assert_eq!(json["isAuthenticated"], true);
        assert_eq!(json["name"], "Ada");
    }
}
