use crate::domain::models::user::UserIdentity;
use crate::domain::ports::IdentityProvider;
use std::sync::RwLock;

/// In-process identity source. The original system read the signed-in user
/// from an ambient auth hook; here the same information is an explicit
/// collaborator handed to the session.
pub struct FixedIdentityProvider {
    current: RwLock<Option<UserIdentity>>,
}

impl FixedIdentityProvider {
    pub fn signed_out() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    pub fn signed_in(user: UserIdentity) -> Self {
        Self {
            current: RwLock::new(Some(user)),
        }
    }

    pub fn sign_in(&self, user: UserIdentity) {
        *self.current.write().unwrap() = Some(user);
    }

    pub fn sign_out(&self) {
        *self.current.write().unwrap() = None;
    }
}

impl IdentityProvider for FixedIdentityProvider {
    fn current(&self) -> Option<UserIdentity> {
        self.current.read().unwrap().clone()
    }
}
