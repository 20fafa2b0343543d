//! Ordered repairs wrapped around a single parser run.
//!
//! Repairs nest: the first repair added is the outermost one, so it sees the
//! source first and the parser output last.
//!
//! ```text
//! markdown -> r1.before -> r2.before -> parser -> r2.after -> r1.after -> markup
//! ```

use crate::protector::PlaceholderProtector;
use crate::repair::{MarkdownRepair, MarkupParser};

/// A list of repairs applied around a Markdown parser.
#[derive(Default)]
pub struct RepairChain {
    repairs: Vec<Box<dyn MarkdownRepair>>,
}

impl std::fmt::Debug for RepairChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepairChain")
            .field("repairs", &self.repairs.len())
            .finish()
    }
}

impl RepairChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a repair, builder style.
    pub fn with(mut self, repair: impl MarkdownRepair + 'static) -> Self {
        self.push(repair);
        self
    }

    /// Append a repair as the innermost one.
    pub fn push(&mut self, repair: impl MarkdownRepair + 'static) {
        self.repairs.push(Box::new(repair));
    }

    pub fn len(&self) -> usize {
        self.repairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repairs.is_empty()
    }

    /// Clear state every repair carries between documents.
    pub fn reset(&mut self) {
        for repair in &mut self.repairs {
            repair.reset();
        }
    }

    /// Run every repair's pre-parse hook, first to last.
    pub fn before_markdown_parser(&mut self, markdown: &str) -> String {
        self.repairs
            .iter_mut()
            .fold(markdown.to_string(), |text, repair| {
                repair.before_markdown_parser(&text)
            })
    }

    /// Run every repair's post-parse hook, last to first.
    pub fn after_markdown_parser(&mut self, markup: &str) -> String {
        self.repairs
            .iter_mut()
            .rev()
            .fold(markup.to_string(), |text, repair| {
                repair.after_markdown_parser(&text)
            })
    }

    /// Repair, parse and restore one document.
    ///
    /// The chain is reset first, so values left over by a parser that dropped
    /// markers in an earlier document are never replayed into this one.
    ///
    /// # Example
    /// ```
    /// use md_repair::{PlaceholderProtector, RepairChain};
    ///
    /// let mut chain = RepairChain::new().with(PlaceholderProtector::new());
    /// let html = chain.convert("mail me@host", &|s: &str| format!("<p>{s}</p>"));
    /// assert_eq!(html, "<p>mail me&#64;host</p>");
    /// ```
    pub fn convert<P>(&mut self, markdown: &str, parser: &P) -> String
    where
        P: MarkupParser + ?Sized,
    {
        self.reset();
        let prepared = self.before_markdown_parser(markdown);
        let parsed = parser.to_markup(&prepared);
        self.after_markdown_parser(&parsed)
    }
}

/// Convert one document with a protector that lives only for this call.
///
/// No restoration values can leak into another document.
pub fn repair_document<P>(markdown: &str, parser: &P) -> String
where
    P: MarkupParser + ?Sized,
{
    let mut protector = PlaceholderProtector::new();
    let prepared = protector.protect(markdown);
    let parsed = parser.to_markup(&prepared);
    let output = protector.restore(&parsed);

    if protector.pending_len() > 0 {
        tracing::debug!(
            unrestored = protector.pending_len(),
            "Parser dropped protected markers"
        );
    }

    output
}
