//! Document model types for laid-out vertical text.
//!
//! A [`Document`] owns its [`Page`]s exclusively; pages hold their laid-out
//! [`Line`]s. Everything here is immutable once built.

mod content;
mod document;
mod page;

pub use content::TextContent;
pub use document::Document;
pub use page::{Line, LineEnd, Page};
