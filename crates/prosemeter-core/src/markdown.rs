//! Markdown outline detection.
//!
//! Uses pulldown-cmark for CommonMark parsing rather than line regexes, so
//! `#` inside code blocks or a `-` in running prose is not miscounted.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Headings and list items found in a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outline {
    /// ATX and setext headings.
    pub headings: usize,
    /// List items, ordered and unordered, at any depth.
    pub list_items: usize,
}

/// Count headings and list items.
///
/// Plain prose yields an empty outline. YAML frontmatter is skipped.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn outline(text: &str) -> Outline {
    let text = strip_frontmatter(text);
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let mut outline = Outline::default();

    for event in Parser::new_ext(text, options) {
        match event {
            Event::End(TagEnd::Heading(_)) => outline.headings += 1,
            Event::Start(Tag::Item) => outline.list_items += 1,
            _ => {}
        }
    }

    outline
}

/// Drop YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}
