//! Application state and route table.

use serde_json::{Value, json};

use crate::health;
use crate::products;
use crate::request::Request;
use crate::response::Json;
use crate::router::Router;
use crate::status::Status;
use crate::users::{self, Store, Users};

/// State handed to every handler.
#[derive(Clone, Default)]
pub struct AppState {
    pub users: Users,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self { users: Users::new(store) }
    }

    /// State backed by the demo users.
    pub fn seeded() -> Self {
        Self::new(Store::seeded())
    }
}

/// Every route the service answers.
pub fn router(state: AppState) -> Router<AppState> {
    Router::with_state(state)
        .get("/", hello)
        .get("/api/users", users::list_users)
        .post("/api/users", users::create_user)
        .get("/api/users/{id}", users::get_user)
        .put("/api/users/{id}", users::replace_user)
        .patch("/api/users/{id}", users::merge_user)
        .delete("/api/users/{id}", users::delete_user)
        .get("/api/product", products::list_products)
        .get("/healthz", health::liveness)
        .get("/readyz", health::readiness)
}

// GET /
async fn hello(_req: Request, _state: AppState) -> (Status, Json<Value>) {
    (Status::Created, Json(json!({ "msg": "Hello" })))
}
