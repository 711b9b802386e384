//! Templated files of the mod skeleton
//!
//! Files ending in `.j2` are rendered with Tera; the render context of each
//! one comes from the [`ContextResolver`] registry.

pub mod render;
pub mod resolver;

pub use render::{render_file, render_str};
pub use resolver::{ContextProvider, ContextResolver, ContextSources, missions_context};
