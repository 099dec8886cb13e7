//! In-memory, insertion-ordered user store.

use indexmap::IndexMap;

use super::{NewUser, User, UserFields, UserId};

/// Index of a record in the store's order.
///
/// Valid only until the next mutation; hold the store lock between
/// resolving a position and using it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Position(usize);

/// Owns every user record, keyed by id, in insertion order.
#[derive(Debug, Default)]
pub struct Store {
    users: IndexMap<UserId, User>,
    /// Highest id ever issued or loaded. Never decreases, so deleted ids are
    /// not handed out again.
    last_id: UserId,
}

impl Store {
    /// An empty store. The first user created gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding `users` in the given order. A later record with a
    /// duplicate id replaces the earlier one in place.
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        let mut store = Self::new();
        for user in users {
            store.last_id = store.last_id.max(user.id);
            store.users.insert(user.id, user);
        }
        store
    }

    /// The five demo users the service starts with.
    pub fn seeded() -> Self {
        let seed = [
            (1, "San", "Du"),
            (2, "Jay", "Lu"),
            (3, "Rey", "Su"),
            (4, "May", "Ru"),
            (5, "Zed", "Tu"),
        ];
        Self::from_users(seed.into_iter().map(|(id, username, display_name)| User {
            id,
            username: Some(username.to_owned()),
            display_name: Some(display_name.to_owned()),
        }))
    }

    pub fn len(&self) -> usize { self.users.len() }
    pub fn is_empty(&self) -> bool { self.users.is_empty() }

    /// All users in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn find_by_id(&self, id: UserId) -> Option<Position> {
        self.users.get_index_of(&id).map(Position)
    }

    pub fn get(&self, position: Position) -> Option<&User> {
        self.users.get_index(position.0).map(|(_, user)| user)
    }

    /// Appends a user with the next id and returns it.
    pub fn insert(&mut self, new: NewUser) -> User {
        self.last_id += 1;
        let user = User {
            id: self.last_id,
            username: Some(new.username),
            display_name: new.display_name,
        };
        self.users.insert(user.id, user.clone());
        user
    }

    /// Overwrites every field but the id. Fields absent from `fields` end
    /// up unset.
    pub fn replace_at(&mut self, position: Position, fields: UserFields) -> Option<&User> {
        let (_, user) = self.users.get_index_mut(position.0)?;
        user.username = fields.username;
        user.display_name = fields.display_name;
        Some(user)
    }

    /// Overwrites only the fields present in `patch`.
    pub fn merge_at(&mut self, position: Position, patch: UserFields) -> Option<&User> {
        let (_, user) = self.users.get_index_mut(position.0)?;
        if let Some(username) = patch.username {
            user.username = Some(username);
        }
        if let Some(display_name) = patch.display_name {
            user.display_name = Some(display_name);
        }
        Some(user)
    }

    /// Removes the record, shifting later records down by one position.
    pub fn remove_at(&mut self, position: Position) -> Option<User> {
        self.users.shift_remove_index(position.0).map(|(_, user)| user)
    }
}
