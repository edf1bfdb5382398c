use super::StoreError;
use crate::model::{Role, User, UserId, UserPayload};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Credentials of the ADMIN user created with the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedUser {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// How a new store numbers its users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// First id the counter issues.
    pub first_id: UserId,
    /// When set, an ADMIN user occupies `first_id` from the start.
    pub seed_admin: Option<SeedUser>,
}

/// Map plus counter. Only ever touched through `UserStore`'s lock.
#[derive(Debug)]
struct State {
    users: HashMap<UserId, User>,
    /// `None` once `UserId::MAX` has been issued.
    next_id: Option<UserId>,
}

impl State {
    /// Caller must hold the exclusive lock.
    fn allocate(&mut self) -> Result<UserId, StoreError> {
        let id = self.next_id.ok_or(StoreError::IdsExhausted)?;
        self.next_id = id.checked_add(1);
        Ok(id)
    }
}

/// Lock-guarded in-memory user collection.
#[derive(Debug)]
pub struct UserStore {
    state: RwLock<State>,
}

impl UserStore {
    pub fn new(config: &StoreConfig) -> Self {
        let mut state = State {
            users: HashMap::new(),
            next_id: Some(config.first_id),
        };
        if let Some(seed) = &config.seed_admin {
            let id = config.first_id;
            state.next_id = id.checked_add(1);
            state.users.insert(
                id,
                User {
                    id,
                    username: seed.username.clone(),
                    password: seed.password.clone(),
                    email: seed.email.clone(),
                    role: Role::Admin,
                },
            );
            debug!(id, "seeded admin user");
        }
        Self {
            state: RwLock::new(state),
        }
    }

    /// Snapshot of every user, ordered by id.
    pub fn list_all(&self) -> Vec<User> {
        let mut users: Vec<User> = {
            let state = self.state.read();
            state.users.values().cloned().collect()
        };
        users.sort_unstable_by_key(|u| u.id);
        users
    }

    pub fn get(&self, id: UserId) -> Result<User, StoreError> {
        self.state
            .read()
            .users
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Store `payload` under a freshly allocated id.
    ///
    /// Fails with [`StoreError::IdsExhausted`] once every id up to
    /// `UserId::MAX` has been handed out; the store is left unchanged.
    pub fn create(&self, payload: UserPayload) -> Result<User, StoreError> {
        let mut state = self.state.write();
        let id = state.allocate()?;
        let user = payload.into_user(id);
        state.users.insert(id, user.clone());
        Ok(user)
    }

    /// Replace every field of user `id` except the id itself.
    pub fn update(&self, id: UserId, payload: UserPayload) -> Result<User, StoreError> {
        let mut state = self.state.write();
        let slot = state.users.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *slot = payload.into_user(id);
        Ok(slot.clone())
    }

    /// Remove user `id`, returning it as it was just before removal.
    pub fn delete(&self, id: UserId) -> Result<User, StoreError> {
        self.state
            .write()
            .users
            .remove(&id)
            .ok_or(StoreError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.state.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new(&StoreConfig::default())
    }
}
