use serde::{Deserialize, Serialize};

/// Authenticated user attached to a booking. Supplied by the
/// `IdentityProvider` port, never read from ambient state.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserIdentity {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub photo_url: Option<String>,
}
