//! # Folio Templates
//!
//! Turns a project list and a template choice into a standalone HTML
//! portfolio document. Rendering is pure: identical inputs always produce
//! byte-identical output.

pub mod render;
pub mod styles;
pub mod template;

pub use render::{preview_data_url, render_final, render_preview};
pub use template::{Template, UnknownTemplate};
