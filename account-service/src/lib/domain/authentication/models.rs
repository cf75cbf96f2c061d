use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserType;

/// Identity triple proven by a login and carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: UserId,
    pub email: String,
    pub user_type: UserType,
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            user_type: user.user_type,
        }
    }
}

/// Result of a successful login: the signed session token and who it is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub token: String,
    pub identity: Identity,
}
