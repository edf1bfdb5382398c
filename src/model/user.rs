use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Identifier of a stored user. Assigned by the store, never by a client.
pub type UserId = u64;

/// Privilege tag carried by every user.
///
/// On the wire this is the integer tag (`0`, `1`, `2`), not the variant name.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub enum Role {
    Admin,
    Manager,
    #[default]
    General,
}

impl Role {
    pub fn tag(self) -> u8 {
        match self {
            Role::Admin => 0,
            Role::Manager => 1,
            Role::General => 2,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Role::Admin),
            1 => Some(Role::Manager),
            2 => Some(Role::General),
            _ => None,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::General => "GENERAL",
        };
        f.write_str(name)
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.tag())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = u8::deserialize(deserializer)?;
        Role::from_tag(tag)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid role tag {tag}")))
    }
}

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// Body of a create or update request.
///
/// `username`, `password` and `email` must be present. `role` may be missing
/// or `null`, in which case the stored user gets [`Role::General`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserPayload {
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<Role>,
}

impl UserPayload {
    /// Build the stored form of this payload under `id`.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
            email: self.email,
            role: self.role.unwrap_or_default(),
        }
    }
}
