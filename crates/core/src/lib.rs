//! # Quire Core
//!
//! Domain types, traits, and error definitions for the Quire content editor.
//! This crate has **zero framework dependencies** — it defines the domain model
//! that the editor, gateway, and CLI implement against.
//!
//! ## Design Philosophy
//!
//! Content types only describe themselves: which fields they expose and
//! whether they take part in the approval workflow. How those pieces become
//! an edit view lives behind the [`FormBuilder`] trait, implemented in
//! `quire-editor`. This enables:
//! - Rendering the same content with different text assets or buffers
//! - Easy testing with stub builders
//! - Clean dependency graph (all crates depend inward on core)

pub mod content;
pub mod error;
pub mod field;
pub mod item;
pub mod role;

// Re-export key types at crate root for ergonomics
pub use content::{ApprovalRequest, Editable, FormBuilder, Mergeable, values_of};
pub use error::{EditorError, Error, Result};
pub use field::{Document, Field};
pub use item::{Item, ItemStatus};
pub use role::Role;
