//! Demo content types served by a fresh gateway.
//!
//! `Article` is plain editable content. `Submission` arrives through the
//! public side of a site and waits for approval, so it is also mergeable.

use crate::store::{Content, ContentStore};
use quire_core::{
    ApprovalRequest, Document, Editable, Error, Field, FormBuilder, Item, ItemStatus, Mergeable,
    Result, Role, values_of,
};
use quire_editor::element::{self, Attrs};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    #[serde(flatten)]
    pub item: Item,
    pub title: String,
    pub body: String,
    pub category: String,
    pub tags: Vec<String>,
    /// Internal review notes, kept away from contributors.
    pub notes: String,
}

impl Article {
    pub const TYPE: &'static str = "Article";

    pub fn sample(id: i64) -> Self {
        Self {
            item: Item::with_id(id, format!("article-{id}"), 1_700_000_000_000),
            title: "Hello, Quire".into(),
            body: "Edit me.".into(),
            category: "news".into(),
            tags: vec!["intro".into()],
            notes: String::new(),
        }
    }

    /// An unsaved article with empty fields.
    pub fn blank() -> Self {
        Self {
            item: Item::new(),
            title: String::new(),
            body: String::new(),
            category: String::new(),
            tags: Vec::new(),
            notes: String::new(),
        }
    }
}

impl Editable for Article {
    fn marshal_editor(&self, editor: &dyn FormBuilder, role: &Role) -> Result<Document> {
        let fields = vec![
            Field::new(element::input(
                "title",
                self,
                &Attrs::from([("label", "Title"), ("type", "text")]),
            )?),
            Field::new(element::textarea(
                "body",
                self,
                &Attrs::from([("label", "Body"), ("class", "materialize-textarea")]),
            )?),
            Field::new(element::select(
                "category",
                self,
                &Attrs::from([("label", "Category"), ("class", "browser-default")]),
                &[("news", "News"), ("reviews", "Reviews"), ("guides", "Guides")],
            )?),
            Field::new(element::checkbox(
                "tags",
                self,
                &Attrs::from([("label", "Tags")]),
                &[("intro", "Intro"), ("release", "Release")],
            )?),
            Field::new(element::textarea(
                "notes",
                self,
                &Attrs::from([("label", "Review Notes")]),
            )?)
            .hidden_from(["contributor"]),
        ];
        editor.form(role, self, fields)
    }

    fn editor_values(&self) -> Result<serde_json::Value> {
        values_of(self)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    #[serde(flatten)]
    pub item: Item,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    pub const TYPE: &'static str = "Submission";

    pub fn sample(id: i64) -> Self {
        Self {
            item: Item::with_id(id, "", 0),
            name: "A. Reader".into(),
            email: "reader@example.com".into(),
            message: "Loved the release notes!".into(),
        }
    }

    pub fn blank() -> Self {
        Self {
            item: Item::new(),
            name: String::new(),
            email: String::new(),
            message: String::new(),
        }
    }
}

impl Editable for Submission {
    fn marshal_editor(&self, editor: &dyn FormBuilder, role: &Role) -> Result<Document> {
        let fields = vec![
            Field::new(element::input(
                "name",
                self,
                &Attrs::from([("label", "Name"), ("type", "text")]),
            )?),
            Field::new(element::input(
                "email",
                self,
                &Attrs::from([("label", "Email"), ("type", "email")]),
            )?)
            .hidden_from(["editor"]),
            Field::new(element::textarea(
                "message",
                self,
                &Attrs::from([("label", "Message")]),
            )?),
        ];
        editor.form(role, self, fields)
    }

    fn editor_values(&self) -> Result<serde_json::Value> {
        values_of(self)
    }

    fn as_mergeable(&self) -> Option<&dyn Mergeable> {
        Some(self)
    }
}

impl Mergeable for Submission {
    fn approve(&self, request: &ApprovalRequest) -> Result<()> {
        if request.content_type != Self::TYPE || request.id != self.item.id {
            return Err(Error::Internal(format!(
                "approval for {} {} does not match submission {}",
                request.content_type, request.id, self.item.id
            )));
        }
        info!(id = self.item.id, "Submission approved");
        Ok(())
    }
}

/// A new, unsaved item of the named demo type.
pub fn blank(content_type: &str) -> Option<Arc<dyn Content>> {
    match content_type {
        Article::TYPE => Some(Arc::new(Article::blank())),
        Submission::TYPE => Some(Arc::new(Submission::blank())),
        _ => None,
    }
}

/// Register one item of each demo type.
pub async fn seed(store: &ContentStore) {
    store
        .insert(Article::TYPE, 1, Arc::new(Article::sample(1)), ItemStatus::Public)
        .await;
    store
        .insert(
            Submission::TYPE,
            1,
            Arc::new(Submission::sample(1)),
            ItemStatus::Pending,
        )
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_editor::Editor;

    fn render(content: &dyn Editable, role: &str) -> String {
        content
            .marshal_editor(&Editor::default(), &Role::from(role))
            .unwrap()
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn article_renders_all_field_kinds() {
        let html = render(&Article::sample(1), "editor");
        assert!(html.contains(r#"value="Hello, Quire""#));
        assert!(html.contains("<textarea"));
        assert!(html.contains(r#"<option value="news" selected>News</option>"#));
        assert!(html.contains(r#"name="tags.0" id="tags-0" checked"#));
        assert!(!html.contains("approve-post"));
    }

    #[test]
    fn article_notes_hidden_from_contributors() {
        let hidden = r#"<div style="display:none;">"#;
        assert!(render(&Article::sample(1), "contributor").contains(hidden));
        assert!(!render(&Article::sample(1), "editor").contains(hidden));
    }

    #[test]
    fn submission_is_mergeable() {
        let html = render(&Submission::sample(1), "editor");
        assert!(html.contains("approve-post"));
        assert!(html.contains(r#"<div style="display:none;">"#));
    }

    #[test]
    fn approve_checks_identity() {
        let submission = Submission::sample(4);
        let ok = ApprovalRequest {
            content_type: Submission::TYPE.into(),
            id: 4,
            ..ApprovalRequest::default()
        };
        assert!(submission.approve(&ok).is_ok());

        let wrong = ApprovalRequest { id: 5, ..ok };
        assert!(submission.approve(&wrong).is_err());
    }

    #[test]
    fn blank_items_are_unsaved() {
        let article = blank(Article::TYPE).unwrap();
        let values = article.editor_values().unwrap();
        assert_eq!(values["id"], Item::UNSAVED_ID);
        assert_eq!(values["title"], "");
        assert!(blank(Submission::TYPE).is_some());
        assert!(blank("Page").is_none());
    }

    #[tokio::test]
    async fn seed_registers_both_types() {
        let store = ContentStore::new();
        seed(&store).await;
        assert_eq!(store.len().await, 2);
        assert_eq!(
            store.get(Submission::TYPE, 1).await.unwrap().status,
            ItemStatus::Pending
        );
    }
}
