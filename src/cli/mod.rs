//! CLI operation mode handlers.
//!
//! - [`submit`]: Prepare, confirm and submit a review
//! - [`prompt`]: Terminal confirmation prompt
//!
//! Output formatting utilities are in [`output`].

pub mod output;
pub mod prompt;
pub mod submit;
