use super::settings::ConvertSettings;
use super::transform::transform_block;
use crate::models::CommentBlock;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

fn legacy_comment_regex() -> &'static Regex {
    static LEGACY_COMMENT: OnceLock<Regex> = OnceLock::new();
    // Lazy so two comments in one file are never merged
    LEGACY_COMMENT.get_or_init(|| Regex::new(r"(?s)/\*\*(.*?)\*/").expect("Invalid comment regex"))
}

/// Result of converting a file's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    content: Option<String>,
    converted: usize,
    skipped: usize,
}

impl Conversion {
    /// The rewritten text, or `None` when no block was converted
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn into_content(self) -> Option<String> {
        self.content
    }

    pub fn is_changed(&self) -> bool {
        self.content.is_some()
    }

    /// Number of blocks that were rewritten
    pub fn converted(&self) -> usize {
        self.converted
    }

    /// Number of blocks left alone because their line already uses `///`
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Find every legacy comment in `content`, left to right, without overlap.
pub fn find_blocks(content: &str) -> impl Iterator<Item = CommentBlock<'_>> {
    legacy_comment_regex().captures_iter(content).filter_map(|caps| {
        let whole = caps.get(0)?;
        let inner = caps.get(1)?;
        Some(CommentBlock::new(whole.start(), whole.end(), inner.as_str()))
    })
}

/// Whether the text between the start of the line and `offset` begins with the marker.
fn is_already_converted(content: &str, offset: usize, marker: &str) -> bool {
    let line_start = content[..offset].rfind('\n').map_or(0, |i| i + 1);
    content[line_start..offset].trim_start().starts_with(marker)
}

/// Replace every legacy comment in `content` with its Markdown form.
///
/// Text outside the converted comments is copied through unchanged.
pub fn convert_source(content: &str, settings: &ConvertSettings) -> Conversion {
    let mut result = String::with_capacity(content.len());
    let mut last_end = 0;
    let mut converted = 0;
    let mut skipped = 0;

    for block in find_blocks(content) {
        if is_already_converted(content, block.start(), settings.marker()) {
            debug!(offset = block.start(), "skipping comment on a converted line");
            skipped += 1;
            continue;
        }
        result.push_str(&content[last_end..block.start()]);
        result.push_str(&transform_block(block.inner(), settings));
        last_end = block.end();
        converted += 1;
    }

    if converted == 0 {
        return Conversion {
            content: None,
            converted,
            skipped,
        };
    }

    result.push_str(&content[last_end..]);
    Conversion {
        content: Some(result),
        converted,
        skipped,
    }
}
