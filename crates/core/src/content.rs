//! Content capabilities — what a content type must (and may) provide.
//!
//! Every content type is [`Editable`]. Types that accept externally
//! submitted posts also expose [`Mergeable`] through
//! [`Editable::as_mergeable`]; the editor only checks whether that capability
//! is present.

use crate::error::{Error, Result};
use crate::field::{Document, Field};
use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A content object that can produce its own edit view.
pub trait Editable {
    /// Render the edit view for this content, describing its fields and
    /// handing them to `editor`.
    fn marshal_editor(&self, editor: &dyn FormBuilder, role: &Role) -> Result<Document>;

    /// Serialized representation the field generators read values from.
    ///
    /// Most types implement this as `values_of(self)`.
    fn editor_values(&self) -> Result<serde_json::Value>;

    /// The approval capability, if this content supports it.
    fn as_mergeable(&self) -> Option<&dyn Mergeable> {
        None
    }
}

/// Externally submitted content that can be approved and published.
pub trait Mergeable {
    /// Copy the external post into the internal collection and trigger a
    /// re-sort of its content type.
    fn approve(&self, request: &ApprovalRequest) -> Result<()>;
}

/// The assembler seam content types call back into.
pub trait FormBuilder {
    /// Compose `fields` into a complete edit view for `content`.
    fn form(&self, role: &Role, content: &dyn Editable, fields: Vec<Field>) -> Result<Document>;
}

/// An approval submitted from the edit view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalRequest {
    /// Content type name, e.g. `"Article"`.
    pub content_type: String,

    /// Id of the pending item.
    pub id: i64,

    /// Submitted form values.
    #[serde(default)]
    pub form: BTreeMap<String, String>,
}

/// Serialize any content into the representation field generators read.
pub fn values_of<T: Serialize + ?Sized>(content: &T) -> Result<serde_json::Value> {
    serde_json::to_value(content).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    impl Editable for Plain {
        fn marshal_editor(&self, editor: &dyn FormBuilder, role: &Role) -> Result<Document> {
            editor.form(role, self, vec![Field::new("plain")])
        }

        fn editor_values(&self) -> Result<serde_json::Value> {
            Ok(serde_json::json!({}))
        }
    }

    struct Echo;

    impl FormBuilder for Echo {
        fn form(
            &self,
            role: &Role,
            _content: &dyn Editable,
            fields: Vec<Field>,
        ) -> Result<Document> {
            let mut out = role.as_str().as_bytes().to_vec();
            for field in fields {
                out.extend(field.view);
            }
            Ok(Document::from_bytes(out))
        }
    }

    #[test]
    fn content_is_not_mergeable_by_default() {
        assert!(Plain.as_mergeable().is_none());
    }

    #[test]
    fn marshal_editor_calls_back_into_builder() {
        let doc = Plain.marshal_editor(&Echo, &Role::from("editor")).unwrap();
        assert_eq!(doc.as_bytes(), b"editorplain");
    }

    #[test]
    fn values_of_serializes_structs() {
        #[derive(Serialize)]
        struct Song {
            title: String,
        }
        let value = values_of(&Song { title: "Blue".into() }).unwrap();
        assert_eq!(value["title"], "Blue");
    }
}
