//! The role of the actor viewing an edit form.
//!
//! Roles are resolved by the caller before a view is built and passed to the
//! assembler explicitly, one value per request.

use serde::{Deserialize, Serialize};

/// Identity or privilege level of the actor rendering a view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    /// The sentinel role that sees every field and the delete control.
    pub const ADMIN: &'static str = "admin";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn admin() -> Self {
        Self::new(Self::ADMIN)
    }

    pub fn is_admin(&self) -> bool {
        self.0 == Self::ADMIN
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_sentinel() {
        assert!(Role::admin().is_admin());
        assert!(Role::from("admin").is_admin());
        assert!(!Role::from("Admin").is_admin());
        assert!(!Role::from("editor").is_admin());
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Role::from("editor")).unwrap();
        assert_eq!(json, "\"editor\"");
    }
}
