/// Category headers the aggregator emits, in the order they are removed.
const CATEGORY_HEADERS: [&str; 5] = ["Removed", "Deprecated", "Changed", "Fixed", "Added"];

/// Drops the aggregator's first two lines (the release title and its
/// underline).
#[must_use]
pub fn strip_title(text: &str) -> String {
    text.split('\n').skip(2).collect::<Vec<_>>().join("\n")
}

/// Removes the fixed category boilerplate blocks for package changelogs,
/// leaving only the bullet content.
///
/// Each block is matched as a literal substring: a blank line, the header,
/// a dash underline of the same length, and a trailing blank line. Output
/// that deviates from that exact shape is left untouched, and a missing
/// category is a no-op.
#[must_use]
pub fn strip_category_headers(text: &str) -> String {
    let mut changes = text.to_string();
    for header in CATEGORY_HEADERS {
        let block = format!("\n{header}\n{}\n\n", "-".repeat(header.len()));
        changes = changes.replace(&block, "");
    }
    changes
}

/// Produces the package-changelog rendition of raw aggregator output:
/// title stripped, category boilerplate removed.
#[must_use]
pub fn package_changes(text: &str) -> String {
    strip_category_headers(&strip_title(text))
}
