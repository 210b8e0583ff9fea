//! Edit view assembly for Quire content types.
//!
//! Content types describe their fields with the generators in [`element`] and
//! hand them to an [`Editor`], which composes one `<table>`-rooted view:
//!
//! 1. **Editor fields** supplied by the content type, in order
//! 2. **Default fields**: publish date/time, slug, created and updated timestamps
//! 3. **Controls**: save, delete (admin only), approve/reject (mergeable content only)
//! 4. **Client script** wiring the controls to the surrounding `<form>`
//!
//! Fields hidden from the current role are wrapped in a `display:none`
//! container rather than dropped, so they are still submitted.

pub mod assets;
pub mod buffer;
pub mod element;
pub mod form;

pub use buffer::{BoundedBuffer, ViewBuffer};
pub use element::Attrs;
pub use form::{Controls, Editor, hidden_for};
