//! Users domain state and AuthGate integration

use agriloop_auth::AuthGate;
use axum::extract::FromRef;

use crate::UserRepository;

/// Application state for the Users domain
#[derive(Clone)]
pub struct UsersState {
    pub users: UserRepository,
    pub auth: AuthGate,
}

impl FromRef<UsersState> for AuthGate {
    fn from_ref(state: &UsersState) -> Self {
        state.auth.clone()
    }
}
