//! Scaffolds Mini Program components: copies a bundled template into a
//! project's `components/` directory and registers it in `app.json`.

pub mod catalog;
pub mod component;
pub mod manifest;
pub mod naming;
pub mod prompt;
pub mod utils;

mod create;

pub use crate::create::{create, Created};
pub use crate::utils::{Error, Result};
