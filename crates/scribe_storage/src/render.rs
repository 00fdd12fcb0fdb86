//! File naming and on-disk text layout.

use chrono::{DateTime, TimeZone};
use scribe_core::Script;
use std::fmt::{Display, Write};

/// Reduce a topic to a file-name-safe slug of at most `max_len` characters.
///
/// Keeps ASCII letters, digits, space, `_` and `-`, trims, and collapses
/// whitespace runs to `_`. An empty result becomes `untitled`.
///
/// ```
/// use scribe_storage::slugify;
///
/// assert_eq!(slugify("  The Roman Empire: Rise & Fall ", 50), "The_Roman_Empire_Rise_Fall");
/// assert_eq!(slugify("???", 50), "untitled");
/// ```
pub fn slugify(topic: &str, max_len: usize) -> String {
    let kept: String = topic
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect();

    let slug: String = kept
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .take(max_len)
        .collect();

    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}

/// `script_<slug>_<YYYYMMDD_HHMMSS>.txt`
pub fn script_file_name<Tz>(topic: &str, max_slug_len: usize, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "script_{}_{}.txt",
        slugify(topic, max_slug_len),
        at.format("%Y%m%d_%H%M%S")
    )
}

/// Render the full file contents for a script.
pub fn render_script<Tz>(script: &Script, generated_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "VIDEO ESSAY SCRIPT");
    let _ = writeln!(out, "Topic: {}", script.topic());
    let _ = writeln!(out, "Theme: {}", script.theme());
    let _ = writeln!(out, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out);
    let _ = writeln!(out, "OUTLINE:");
    for (i, entry) in script.outline().iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, entry);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "SCRIPT:");
    let _ = writeln!(out, "{}", script.body());
    out
}
