//! Auth Models

use std::fmt::{Debug, Formatter, Result as FmtResult};

use zeroize::Zeroize;

/// An authenticated session with the hosted provider.
pub struct Session {
    pub user_id: String,
    access_token: String,
}

impl Session {
    #[must_use]
    pub fn new(user_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            access_token: access_token.into(),
        }
    }

    /// Bearer token for backend requests.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.access_token.zeroize();
    }
}

// keep tokens out of logs
impl Debug for Session {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("access_token", &"<redacted>")
            .finish()
    }
}
