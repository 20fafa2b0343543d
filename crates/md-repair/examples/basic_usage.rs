//! Basic usage example for md-repair

use md_repair::{PlaceholderProtector, RepairConfig, logging};

fn main() -> md_repair::Result<()> {
    let config = RepairConfig::parse(
        r#"[logging]
level = "debug"
"#,
    )?;
    if let Err(e) = logging::init(&config.logging.level) {
        eprintln!("Logging disabled: {e}");
    }

    // A stand-in for the real Markdown parser
    let parse = |s: &str| format!("<p>{s}</p>");

    // One protector per document
    let mut protector = config.protector()?;
    let protected = protector.protect("Mail team@example.org, or type {-at-} literally.");
    println!("Protected: {protected}");
    println!("Pending: {:?}", protector.pending().collect::<Vec<_>>());

    let restored = protector.restore(&parse(&protected));
    println!("Restored: {restored}");

    // The same thing through a configured chain
    let mut chain = config.chain()?;
    println!("Chain: {}", chain.convert("@Override", &parse));

    // Restoring without a prior protect leaves the marker in place
    let mut fresh = PlaceholderProtector::new();
    println!("Underrun: {}", fresh.restore("{-at-}"));
    println!("Underrun count: {}", fresh.underrun_count());

    Ok(())
}
