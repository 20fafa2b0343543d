//! Fake Markdown parsers.
//!
//! Each function returns a plain `Fn(&str) -> String`, which is all the repair
//! chain asks of a parser.

/// Returns its input unchanged.
pub fn identity(markdown: &str) -> String {
    markdown.to_string()
}

/// Wraps the input in a single HTML paragraph.
pub fn paragraph(markdown: &str) -> String {
    format!("<p>{markdown}</p>")
}

/// Removes the first `count` occurrences of `marker`, as a parser that
/// swallows content would.
pub fn dropping(marker: &'static str, count: usize) -> impl Fn(&str) -> String {
    move |markdown: &str| markdown.replacen(marker, "", count)
}

/// Emits every occurrence of `marker` twice.
pub fn duplicating(marker: &'static str) -> impl Fn(&str) -> String {
    move |markdown: &str| markdown.replace(marker, &format!("{marker}{marker}"))
}

/// Appends `extra` to the output, as a parser that adds its own text would.
pub fn injecting(extra: &'static str) -> impl Fn(&str) -> String {
    move |markdown: &str| format!("{markdown}{extra}")
}

/// Mimics a comment parser that treats a line starting with `@` as the start
/// of a block tag: everything from that line on is cut off.
pub fn tag_splitting(markdown: &str) -> String {
    markdown
        .lines()
        .take_while(|line| !line.trim_start().starts_with('@'))
        .collect::<Vec<_>>()
        .join("\n")
}
