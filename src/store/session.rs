//! Accounts and the signed-in user.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::model::{AccountRecord, UserRole};

use super::backend::StateBackend;

const AUTH_KEY: &str = "auth";
const DEFAULT_ADMIN_ID: &str = "admin-1";

/// Persisted session payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionState {
    users: Vec<AccountRecord>,
    /// Id of the signed-in account, if any.
    current_user: Option<String>,
}

/// Session container: the account list plus who is signed in.
///
/// Mutations persist the whole state under the `auth` key. The default
/// `admin`/`admin` account is restored on load if it ever went missing,
/// so a fresh install can always sign in.
#[derive(Debug)]
pub struct SessionStore<B: StateBackend> {
    backend: B,
    state: SessionState,
}

impl<B: StateBackend> SessionStore<B> {
    pub fn load(backend: B) -> Self {
        let state = backend
            .read(AUTH_KEY)
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(state) => Some(state),
                Err(e) => {
                    tracing::warn!("discarding unreadable session state: {e}");
                    None
                }
            })
            .unwrap_or_default();

        let mut store = Self { backend, state };
        store.ensure_default_admin();
        store
    }

    fn ensure_default_admin(&mut self) {
        if self.state.users.iter().any(|u| u.id == DEFAULT_ADMIN_ID) {
            return;
        }
        self.state.users.insert(
            0,
            AccountRecord {
                id: DEFAULT_ADMIN_ID.to_string(),
                username: "admin".to_string(),
                full_name: "Administrator".to_string(),
                password: "admin".to_string(),
                role: UserRole::Admin,
                created_at: Utc::now(),
                created_by: None,
            },
        );
        self.persist();
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.state) {
            Ok(raw) => self.backend.write(AUTH_KEY, &raw),
            Err(e) => tracing::warn!("failed to serialize session state: {e}"),
        }
    }

    pub fn users(&self) -> &[AccountRecord] {
        &self.state.users
    }

    pub fn current_user(&self) -> Option<&AccountRecord> {
        let id = self.state.current_user.as_deref()?;
        self.state.users.iter().find(|u| u.id == id)
    }

    /// Sign in with a username/password pair. A failed attempt leaves the
    /// current session untouched.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        let found = self
            .state
            .users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .map(|u| u.id.clone());

        match found {
            Some(id) => {
                self.state.current_user = Some(id);
                self.persist();
                true
            }
            None => false,
        }
    }

    pub fn logout(&mut self) {
        self.state.current_user = None;
        self.persist();
    }

    /// Create an account. Usernames must be unique; the record is returned
    /// by id.
    pub fn create_user(
        &mut self,
        username: &str,
        full_name: &str,
        password: &str,
        role: UserRole,
        created_by: &str,
    ) -> Option<String> {
        if self.state.users.iter().any(|u| u.username == username) {
            return None;
        }

        let mut stamp = Utc::now().timestamp_millis();
        while self.state.users.iter().any(|u| u.id == format!("user-{stamp}")) {
            stamp += 1;
        }
        let id = format!("user-{stamp}");

        self.state.users.push(AccountRecord {
            id: id.clone(),
            username: username.to_string(),
            full_name: full_name.to_string(),
            password: password.to_string(),
            role,
            created_at: Utc::now(),
            created_by: Some(created_by.to_string()),
        });
        self.persist();
        Some(id)
    }

    /// Remove an account. Removing the signed-in account signs it out.
    pub fn delete_user(&mut self, id: &str) -> bool {
        let before = self.state.users.len();
        self.state.users.retain(|u| u.id != id);
        if self.state.users.len() == before {
            return false;
        }
        if self.state.current_user.as_deref() == Some(id) {
            self.state.current_user = None;
        }
        self.persist();
        true
    }

    /// Hand the backend back, e.g. to reload a fresh container over it.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Change a password after verifying the current one.
    pub fn change_password(&mut self, id: &str, current: &str, new_password: &str) -> bool {
        let Some(user) = self.state.users.iter_mut().find(|u| u.id == id) else {
            return false;
        };
        if user.password != current {
            return false;
        }
        user.password = new_password.to_string();
        self.persist();
        true
    }
}
