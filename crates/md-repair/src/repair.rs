//! Repair hooks and the external parser seam

/// A reversible fix applied around the Markdown parser.
///
/// Both hooks default to passing the text through, so a repair only
/// overrides the phase it needs.
pub trait MarkdownRepair {
    /// Called with the Markdown source before it reaches the parser.
    fn before_markdown_parser(&mut self, markdown: &str) -> String {
        markdown.to_string()
    }

    /// Called with the parser output before it is emitted.
    fn after_markdown_parser(&mut self, markup: &str) -> String {
        markup.to_string()
    }

    /// Drop any state carried over from a previous document.
    fn reset(&mut self) {}
}

/// The external Markdown parser, treated as an opaque string transform.
///
/// Any `Fn(&str) -> String` is a parser:
///
/// ```
/// use md_repair::MarkupParser;
///
/// let upper = |s: &str| s.to_uppercase();
/// assert_eq!(upper.to_markup("abc"), "ABC");
/// ```
pub trait MarkupParser {
    fn to_markup(&self, markdown: &str) -> String;
}

impl<F> MarkupParser for F
where
    F: Fn(&str) -> String,
{
    fn to_markup(&self, markdown: &str) -> String {
        self(markdown)
    }
}
