//! The view assembler.
//!
//! Composes caller fields, default system fields and role-dependent controls
//! into one [`Document`].
//!
//! # Determinism
//!
//! Assembly is a single pass over its inputs: identical role, content and
//! fields always produce byte-identical documents.

use crate::assets;
use crate::buffer::{BoundedBuffer, ViewBuffer};
use crate::element::{self, Attrs};
use quire_config::{EditorConfig, EditorText};
use quire_core::{Document, EditorError, Editable, Field, FormBuilder, Result, Role};
use std::io::Write;
use tracing::{debug, error};

const EDITOR_FIELDS_OPEN: &str =
    r#"<table><tbody class="row"><tr class="col s8 editor-fields"><td class="col s12">"#;
const EDITOR_FIELDS_CLOSE: &str = "</td></tr>";
const DEFAULT_FIELDS_OPEN: &str = r#"<tr class="col s4 default-fields"><td class="col s12">"#;
const DEFAULT_FIELDS_CLOSE: &str = "</td></tr></tbody></table>";
const HIDDEN_OPEN: &str = r#"<div style="display:none;">"#;
const HIDDEN_CLOSE: &str = "</div>";

/// Whether a field suppressed for `hidden_from` is hidden from `role`.
///
/// Admins see everything.
pub fn hidden_for(role: &Role, hidden_from: &[Role]) -> bool {
    !role.is_admin() && hidden_from.contains(role)
}

/// Which workflow controls a view exposes. Decided once per assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// Delete button. Admin only.
    pub delete: bool,
    /// Approve/reject block. Present for mergeable content, whatever the role.
    pub approval: bool,
}

impl Controls {
    pub fn decide(role: &Role, content: &dyn Editable) -> Self {
        Self {
            delete: role.is_admin(),
            approval: content.as_mergeable().is_some(),
        }
    }
}

/// Builds edit views. Stateless across calls; create one and reuse it.
#[derive(Debug, Clone)]
pub struct Editor {
    text: EditorText,
    max_view_bytes: Option<usize>,
}

impl Editor {
    /// An editor with the given text and no size limit.
    pub fn new(text: EditorText) -> Self {
        Self {
            text,
            max_view_bytes: None,
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.text.clone()).with_view_limit(config.max_view_bytes)
    }

    /// Fail assembly once a view would exceed `bytes`.
    pub fn with_view_limit(mut self, bytes: usize) -> Self {
        self.max_view_bytes = Some(bytes);
        self
    }

    /// Assemble the edit view for `content` as seen by `role`.
    pub fn form(
        &self,
        role: &Role,
        content: &dyn Editable,
        fields: Vec<Field>,
    ) -> Result<Document> {
        match self.max_view_bytes {
            Some(limit) => self.form_into(BoundedBuffer::new(limit), role, content, fields),
            None => self.form_into(Vec::new(), role, content, fields),
        }
    }

    /// Assemble into a caller-supplied buffer.
    ///
    /// # Errors
    ///
    /// [`EditorError::Construction`] if `buf` rejects a write, and
    /// [`EditorError::Render`] if a default field cannot be generated. No
    /// partial document is returned.
    pub fn form_into<B: ViewBuffer>(
        &self,
        mut buf: B,
        role: &Role,
        content: &dyn Editable,
        fields: Vec<Field>,
    ) -> Result<Document> {
        let controls = Controls::decide(role, content);
        debug!(
            role = %role,
            fields = fields.len(),
            delete = controls.delete,
            approval = controls.approval,
            "Assembling editor view"
        );

        write_view(&mut buf, EDITOR_FIELDS_OPEN.as_bytes(), "editor fields header")?;
        for field in &fields {
            add_field(&mut buf, role, field)?;
        }
        write_view(&mut buf, EDITOR_FIELDS_CLOSE.as_bytes(), "editor fields footer")?;

        write_view(&mut buf, DEFAULT_FIELDS_OPEN.as_bytes(), "default fields header")?;
        write_view(
            &mut buf,
            assets::publish_time(&self.text).as_bytes(),
            "publish time",
        )?;
        for field in self.default_fields(content)? {
            add_field(&mut buf, role, &field)?;
        }

        let mut tail = assets::controls(&self.text, controls.delete);
        if controls.approval {
            tail.push_str(&assets::approval(&self.text));
        }
        tail.push_str(&assets::script(&self.text));
        tail.push_str(DEFAULT_FIELDS_CLOSE);
        write_view(&mut buf, tail.as_bytes(), "controls")?;

        Ok(Document::from_bytes(buf.into_bytes()))
    }

    /// Slug, created timestamp, updated timestamp, in that order.
    fn default_fields(&self, content: &dyn Editable) -> Result<[Field; 3]> {
        let slug = element::input(
            "slug",
            content,
            &Attrs::from([
                ("label", self.text.slug_label.as_str()),
                ("type", "text"),
                ("disabled", "true"),
                ("placeholder", self.text.slug_placeholder.as_str()),
            ]),
        )?;
        let created = element::timestamp(
            "timestamp",
            content,
            &Attrs::from([("type", "hidden"), ("class", "timestamp __ponzu")]),
        )?;
        let updated = element::timestamp(
            "updated",
            content,
            &Attrs::from([("type", "hidden"), ("class", "updated __ponzu")]),
        )?;

        Ok([Field::new(slug), Field::new(created), Field::new(updated)])
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorText::default())
    }
}

impl FormBuilder for Editor {
    fn form(&self, role: &Role, content: &dyn Editable, fields: Vec<Field>) -> Result<Document> {
        Editor::form(self, role, content, fields)
    }
}

fn add_field<B: Write>(buf: &mut B, role: &Role, field: &Field) -> Result<()> {
    if hidden_for(role, &field.hidden_from) {
        write_view(buf, HIDDEN_OPEN.as_bytes(), "hidden field wrapper")?;
        write_view(buf, &field.view, "field view")?;
        write_view(buf, HIDDEN_CLOSE.as_bytes(), "hidden field wrapper")?;
    } else {
        write_view(buf, &field.view, "field view")?;
    }
    Ok(())
}

fn write_view<B: Write>(buf: &mut B, bytes: &[u8], stage: &'static str) -> Result<()> {
    buf.write_all(bytes).map_err(|source| {
        error!(stage, error = %source, "Error writing to editor view buffer");
        EditorError::Construction { stage, source }.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_core::{ApprovalRequest, Mergeable};
    use serde_json::json;

    struct Note;

    impl Editable for Note {
        fn marshal_editor(&self, editor: &dyn FormBuilder, role: &Role) -> Result<Document> {
            editor.form(role, self, vec![Field::new("<p>note</p>")])
        }

        fn editor_values(&self) -> Result<serde_json::Value> {
            Ok(json!({ "slug": "a-note", "timestamp": 1, "updated": 2 }))
        }
    }

    struct Pending;

    impl Editable for Pending {
        fn marshal_editor(&self, editor: &dyn FormBuilder, role: &Role) -> Result<Document> {
            editor.form(role, self, Vec::new())
        }

        fn editor_values(&self) -> Result<serde_json::Value> {
            Ok(json!({}))
        }

        fn as_mergeable(&self) -> Option<&dyn Mergeable> {
            Some(self)
        }
    }

    impl Mergeable for Pending {
        fn approve(&self, _request: &ApprovalRequest) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn admin_never_hidden() {
        let roles = vec![Role::admin(), Role::from("editor")];
        assert!(!hidden_for(&Role::admin(), &roles));
        assert!(hidden_for(&Role::from("editor"), &roles));
        assert!(!hidden_for(&Role::from("author"), &roles));
        assert!(!hidden_for(&Role::from("editor"), &[]));
    }

    #[test]
    fn controls_decision() {
        let editor_role = Role::from("editor");
        assert_eq!(
            Controls::decide(&editor_role, &Note),
            Controls { delete: false, approval: false }
        );
        assert_eq!(
            Controls::decide(&Role::admin(), &Pending),
            Controls { delete: true, approval: true }
        );
        assert_eq!(
            Controls::decide(&editor_role, &Pending),
            Controls { delete: false, approval: true }
        );
    }

    #[test]
    fn hidden_field_is_wrapped_not_dropped() {
        let mut buf = Vec::new();
        let field = Field::new("<i>x</i>").hidden_from(["editor"]);
        add_field(&mut buf, &Role::from("editor"), &field).unwrap();
        assert_eq!(buf, br#"<div style="display:none;"><i>x</i></div>"#);
    }

    #[test]
    fn view_is_table_rooted() {
        let doc = Editor::default().form(&Role::admin(), &Note, Vec::new()).unwrap();
        let html = doc.to_string_lossy();
        assert!(html.starts_with(EDITOR_FIELDS_OPEN));
        assert!(html.ends_with(DEFAULT_FIELDS_CLOSE));
        assert!(html.contains(r#"value="a-note""#));
    }

    #[test]
    fn marshal_editor_goes_through_editor() {
        let doc = Note.marshal_editor(&Editor::default(), &Role::from("editor")).unwrap();
        assert!(doc.to_string_lossy().contains("<p>note</p>"));
    }

    #[test]
    fn view_limit_applies() {
        let editor = Editor::default().with_view_limit(64);
        let err = editor.form(&Role::admin(), &Note, Vec::new()).unwrap_err();
        assert!(err.is_construction());
    }
}
