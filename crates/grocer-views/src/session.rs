//! The signed-in session, if any.

use grocer_commerce::ids::UserId;
use grocer_commerce::profile::Role;
use grocer_data::AuthToken;

use crate::error::{ViewError, ViewResult};

/// Who is browsing. Anonymous sessions carry no token.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<AuthToken>,
    user: Option<(UserId, Role)>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(token: AuthToken, user: UserId, role: Role) -> Self {
        Self {
            token: Some(token),
            user: Some((user, role)),
        }
    }

    /// A session with a token but no decoded user (e.g. a token passed on
    /// the command line).
    pub fn with_token(token: AuthToken) -> Self {
        Self {
            token: Some(token),
            user: None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user.as_ref().map(|(id, _)| id)
    }

    /// Role of the signed-in user; anonymous and unknown users are customers.
    pub fn role(&self) -> Role {
        self.user.as_ref().map(|(_, role)| *role).unwrap_or_default()
    }

    pub(crate) fn require_token(&self) -> ViewResult<&AuthToken> {
        self.token.as_ref().ok_or(ViewError::LoginRequired)
    }

    pub(crate) fn require_user(&self) -> ViewResult<(&AuthToken, &UserId)> {
        match (&self.token, &self.user) {
            (Some(token), Some((id, _))) => Ok((token, id)),
            _ => Err(ViewError::LoginRequired),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_session() {
        let session = Session::anonymous();
        assert!(!session.is_signed_in());
        assert_eq!(session.role(), Role::Customer);
        assert_eq!(session.require_token(), Err(ViewError::LoginRequired));
    }

    #[test]
    fn test_token_only_session_has_no_user() {
        let session = Session::with_token(AuthToken::new("t"));
        assert!(session.require_token().is_ok());
        assert!(session.require_user().is_err());
    }
}
