//! Request context carrying the authenticated caller.

use listhub_entity::user::User;

/// Who is acting on the current request.
///
/// Built by the API layer after the bearer token resolves to an active
/// user, then passed into every mutating service call.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: i64,
    /// The authenticated user's name.
    pub username: String,
}

impl RequestContext {
    pub fn new(user_id: i64, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }

    pub fn for_user(user: &User) -> Self {
        Self::new(user.id, user.username.clone())
    }
}
