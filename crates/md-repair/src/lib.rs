//! Reversible text repairs applied around an external Markdown parser.
//!
//! Documentation generators often feed Markdown fragments through a parser
//! that misreads certain characters. A repair rewrites the source before the
//! parser runs and undoes its rewrite on the parser output.
//!
//! # Modules
//!
//! - [`protector`]: [`PlaceholderProtector`], which hides `@` behind an
//!   inert marker and restores it as `&#64;`
//! - [`repair`]: the [`MarkdownRepair`] hook trait and the [`MarkupParser`] seam
//! - [`chain`]: [`RepairChain`], nesting several repairs around one parser run
//! - [`config`]: TOML settings for the repairs
//! - [`logging`]: optional tracing subscriber setup
//!
//! # Lifecycle
//!
//! A protector carries state from `protect` to `restore`. Use one instance per
//! document (or [`repair_document`], which does that for you); reusing an
//! instance across documents requires [`PlaceholderProtector::reset`] in between.

pub mod chain;
pub mod config;
pub mod error;
pub mod logging;
pub mod protector;
pub mod repair;

pub use chain::{RepairChain, repair_document};
pub use config::RepairConfig;
pub use error::{Error, Result};
pub use protector::{
    AT_HTML_ENTITY, MARKER, PROTECTED_LITERAL, PlaceholderProtector, ProtectorState,
};
pub use repair::{MarkdownRepair, MarkupParser};
