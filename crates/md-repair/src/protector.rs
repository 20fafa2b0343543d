//! At-symbol protection around an external Markdown parser.
//!
//! Some documentation pipelines hand Markdown fragments to a parser that treats
//! `@` as a trigger character (block tags, annotations, comment directives)
//! no matter where it appears. The [`PlaceholderProtector`] hides every `@`
//! behind an inert marker before parsing and puts a displayable replacement
//! back afterwards:
//!
//! ```text
//! user@example.com  --protect-->  user{-at-}example.com
//!                   --parser--->  <p>user{-at-}example.com</p>
//!                   --restore-->  <p>user&#64;example.com</p>
//! ```
//!
//! Markers that were already present in the source are recorded as themselves,
//! so they survive the round trip unchanged. Restoration values are replayed in
//! FIFO order, which is what ties each marker in the parser output back to the
//! match that created it.

use std::collections::VecDeque;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::{Error, Result};
use crate::repair::MarkdownRepair;

/// Placeholder substituted for the protected literal before parsing.
pub const MARKER: &str = "{-at-}";

/// Display-safe form of `@` written back after parsing.
pub const AT_HTML_ENTITY: &str = "&#64;";

/// Character hidden from the parser.
pub const PROTECTED_LITERAL: char = '@';

/// Matches either the protected literal or an already present marker.
static SUBSTITUTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@|\{-at-\}").expect("Invalid substitute regex"));

/// Matches the marker only.
static RESTORE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{-at-\}").expect("Invalid restore regex"));

/// Whether a protector still holds restoration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtectorState {
    /// No pending values; a new document cycle may begin.
    Empty,
    /// Values recorded by [`PlaceholderProtector::protect`] are waiting to be restored.
    Pending,
}

/// Substitutes the protected literal with a marker and restores it later.
///
/// One instance belongs to one document: call [`protect`](Self::protect),
/// run the parser, then call [`restore`](Self::restore) on its output.
/// Interleaving a second document through the same instance replays the wrong
/// values at the wrong markers. Use a fresh instance, or [`reset`](Self::reset),
/// per document.
///
/// # Example
/// ```
/// use md_repair::PlaceholderProtector;
///
/// let mut protector = PlaceholderProtector::new();
/// let protected = protector.protect("a@b{-at-}c");
/// assert_eq!(protected, "a{-at-}b{-at-}c");
///
/// // identity "parser"
/// let restored = protector.restore(&protected);
/// assert_eq!(restored, "a&#64;b{-at-}c");
/// ```
#[derive(Debug, Clone)]
pub struct PlaceholderProtector {
    marker: String,
    restored_form: String,
    substitute: Regex,
    restore: Regex,
    pending: VecDeque<String>,
    underruns: usize,
}

impl Default for PlaceholderProtector {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceholderProtector {
    /// Create a protector for `@` using the `{-at-}` marker and `&#64;` as the
    /// restored form.
    pub fn new() -> Self {
        Self {
            marker: MARKER.to_string(),
            restored_form: AT_HTML_ENTITY.to_string(),
            substitute: SUBSTITUTE_REGEX.clone(),
            restore: RESTORE_REGEX.clone(),
            pending: VecDeque::new(),
            underruns: 0,
        }
    }

    /// Create a protector with custom constants.
    ///
    /// All three values are matched literally.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if the marker is empty or contains the
    /// literal, or if the restored form is empty.
    ///
    /// # Example
    /// ```
    /// use md_repair::PlaceholderProtector;
    ///
    /// let mut protector = PlaceholderProtector::with_settings('#', "[hash]", "&#35;").unwrap();
    /// assert_eq!(protector.protect("#1"), "[hash]1");
    /// assert_eq!(protector.restore("[hash]1"), "&#35;1");
    ///
    /// assert!(PlaceholderProtector::with_settings('@', "{@}", "&#64;").is_err());
    /// ```
    pub fn with_settings(literal: char, marker: &str, restored_form: &str) -> Result<Self> {
        if marker.is_empty() {
            return Err(Error::invalid_config("marker", "must not be empty"));
        }
        if marker.contains(literal) {
            return Err(Error::invalid_config(
                "marker",
                format!("must not contain the protected literal '{literal}'"),
            ));
        }
        if restored_form.is_empty() {
            return Err(Error::invalid_config("restored_form", "must not be empty"));
        }

        let mut buf = [0u8; 4];
        let literal_pattern = regex::escape(literal.encode_utf8(&mut buf));
        let marker_pattern = regex::escape(marker);

        Ok(Self {
            marker: marker.to_string(),
            restored_form: restored_form.to_string(),
            substitute: Regex::new(&format!("{literal_pattern}|{marker_pattern}"))?,
            restore: Regex::new(&marker_pattern)?,
            pending: VecDeque::new(),
            underruns: 0,
        })
    }

    /// The marker written in place of each match.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// The value restored for a protected literal.
    pub fn restored_form(&self) -> &str {
        &self.restored_form
    }

    /// Replace every protected literal and every existing marker with the marker.
    ///
    /// Each match queues one restoration value, left to right: the marker
    /// itself for a pre-existing marker, the restored form otherwise. Text
    /// without matches is returned unchanged and the queue is untouched.
    pub fn protect(&mut self, text: &str) -> String {
        let Self {
            marker,
            restored_form,
            substitute,
            pending,
            ..
        } = self;

        let before = pending.len();
        let protected = substitute.replace_all(text, |caps: &Captures<'_>| {
            if &caps[0] == marker.as_str() {
                pending.push_back(marker.clone());
            } else {
                pending.push_back(restored_form.clone());
            }
            marker.clone()
        });

        let added = pending.len() - before;
        if added > 0 {
            tracing::debug!(
                substitutions = added,
                pending = pending.len(),
                "Protected text"
            );
        }

        protected.into_owned()
    }

    /// Replace every marker with the next queued restoration value.
    ///
    /// If the queue runs dry, remaining markers are left as they are and the
    /// underrun is counted (see [`underrun_count`](Self::underrun_count)).
    pub fn restore(&mut self, text: &str) -> String {
        let Self {
            marker,
            restore,
            pending,
            underruns,
            ..
        } = self;

        let mut restored = 0usize;
        let mut missing = 0usize;
        let output = restore.replace_all(text, |_: &Captures<'_>| match pending.pop_front() {
            Some(value) => {
                restored += 1;
                value
            }
            None => {
                missing += 1;
                marker.clone()
            }
        });

        if restored > 0 {
            tracing::debug!(
                restorations = restored,
                remaining = pending.len(),
                "Restored text"
            );
        }
        if missing > 0 {
            *underruns += missing;
            tracing::warn!(
                missing,
                marker = %marker,
                "Restoration queue exhausted, leaving markers in place"
            );
        }

        output.into_owned()
    }

    /// Current state of the restoration queue.
    pub fn state(&self) -> ProtectorState {
        if self.pending.is_empty() {
            ProtectorState::Empty
        } else {
            ProtectorState::Pending
        }
    }

    /// Number of restoration values waiting in the queue.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Queued restoration values, head first.
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.pending.iter().map(String::as_str)
    }

    /// Total number of markers `restore` had no value for.
    pub fn underrun_count(&self) -> usize {
        self.underruns
    }

    /// Discard any values left over from a previous document.
    ///
    /// Returns the number of discarded values. The underrun counter is kept.
    pub fn reset(&mut self) -> usize {
        let stale = self.pending.len();
        if stale > 0 {
            tracing::debug!(stale, "Discarding unrestored values");
        }
        self.pending.clear();
        stale
    }
}

impl MarkdownRepair for PlaceholderProtector {
    fn before_markdown_parser(&mut self, markdown: &str) -> String {
        self.protect(markdown)
    }

    fn after_markdown_parser(&mut self, markup: &str) -> String {
        self.restore(markup)
    }

    fn reset(&mut self) {
        PlaceholderProtector::reset(self);
    }
}
