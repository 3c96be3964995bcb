use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

/// Identifier of a user that tickets can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

/// Known users, keyed by id.
///
/// Assignee references on tickets are not validated against this directory,
/// so lookups return `Option`.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: HashMap<UserId, User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, user: User) -> Option<User> {
        self.users.insert(user.id.clone(), user)
    }

    pub fn remove(&mut self, id: &UserId) -> Option<User> {
        self.users.remove(id)
    }

    pub fn get(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    /// First character of the user's name, used as the avatar fallback
    pub fn initial(&self, id: &UserId) -> Option<char> {
        self.get(id).and_then(|user| user.name.chars().next())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl FromIterator<User> for UserDirectory {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        let mut directory = Self::new();
        for user in iter {
            directory.insert(user);
        }
        directory
    }
}

/// Supplies the identity of the signed-in user
pub trait AuthContext: Send + Sync {
    fn current_user(&self) -> Option<User>;
}

/// An `AuthContext` with a fixed (possibly absent) user
#[derive(Debug, Clone, Default)]
pub struct StaticAuthContext {
    user: Option<User>,
}

impl StaticAuthContext {
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn anonymous() -> Self {
        Self { user: None }
    }
}

impl AuthContext for StaticAuthContext {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }
}
