use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;
use uuid::Uuid;

use super::model::User;

/// The collaborator owning user data.
///
/// Lookup misses are `None` and write outcomes are booleans; nothing else is
/// signaled. Implementations decide what counts as an accepted creation,
/// handlers add no rules of their own.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Option<User>;
    async fn get_all(&self) -> Vec<User>;
    async fn create(&self, user: &User) -> bool;
    async fn delete_by_id(&self, id: Uuid) -> bool;
}

/// In-memory [`UserService`] backing the runnable server.
#[derive(Debug, Default)]
pub struct InMemoryUserService {
    users: DashMap<Uuid, User>,
}

impl InMemoryUserService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserService for InMemoryUserService {
    async fn get_by_id(&self, id: Uuid) -> Option<User> {
        self.users.get(&id).map(|user| user.value().clone())
    }

    async fn get_all(&self) -> Vec<User> {
        self.users.iter().map(|user| user.value().clone()).collect()
    }

    async fn create(&self, user: &User) -> bool {
        match self.users.entry(user.id) {
            Entry::Occupied(_) => {
                debug!(id = %user.id, "rejected create for an id already in use");
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(user.clone());
                true
            }
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> bool {
        let deleted = self.users.remove(&id).is_some();
        if !deleted {
            debug!(%id, "delete target not found");
        }
        deleted
    }
}
