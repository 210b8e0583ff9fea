//! Field and Document value types.
//!
//! A [`Field`] is one pre-rendered markup fragment plus the roles it is hidden
//! from. A [`Document`] is the finished edit view: built once, never mutated.

use crate::role::Role;

/// One renderable unit of an edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    /// Opaque markup fragment. Not validated by the assembler.
    pub view: Vec<u8>,

    /// Roles this field is suppressed for. Order is irrelevant.
    pub hidden_from: Vec<Role>,
}

impl Field {
    /// Create a field visible to every role.
    pub fn new(view: impl Into<Vec<u8>>) -> Self {
        Self {
            view: view.into(),
            hidden_from: Vec::new(),
        }
    }

    /// Suppress this field for the given roles.
    pub fn hidden_from<I, R>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Role>,
    {
        self.hidden_from.extend(roles.into_iter().map(Into::into));
        self
    }
}

/// The composed edit view, ready to embed as the body of an HTML form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document(Vec<u8>);

impl Document {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lossy UTF-8 view, for embedding into a larger page.
    pub fn to_string_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl AsRef<[u8]> for Document {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_builder_collects_roles() {
        let field = Field::new("<input />").hidden_from(["editor", "author"]);
        assert_eq!(field.view, b"<input />");
        assert_eq!(field.hidden_from, vec![Role::from("editor"), Role::from("author")]);
    }

    #[test]
    fn new_field_is_visible_to_all() {
        assert!(Field::new(Vec::<u8>::new()).hidden_from.is_empty());
    }
}
