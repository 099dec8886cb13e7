//! The users resource: model, store, and the `/api/users` handlers.

mod filter;
mod handlers;
mod resolve;
mod schema;
mod store;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, MutexGuard};

pub use filter::FieldFilter;
pub use handlers::{create_user, delete_user, get_user, list_users, merge_user, replace_user};
pub use resolve::{Resolved, parse_id, resolve_user};
pub use store::{Position, Store};

/// User identifier. Parsed from the path as a signed integer so that any
/// well-formed number resolves to either a record or `404`.
pub type UserId = i64;

/// A stored user record.
///
/// Only creation requires a username; a full replace may leave it unset.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Fields of a user supplied on create.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Fields supplied on a replace or a partial update. On replace, absent
/// fields are cleared; on merge, they are left untouched.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserFields {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// The shared store. Every access goes through one async mutex.
#[derive(Clone, Default)]
pub struct Users {
    inner: Arc<Mutex<Store>>,
}

impl Users {
    pub fn new(store: Store) -> Self {
        Self { inner: Arc::new(Mutex::new(store)) }
    }

    /// Waits for exclusive access to the store.
    pub async fn lock(&self) -> MutexGuard<'_, Store> {
        self.inner.lock().await
    }
}
