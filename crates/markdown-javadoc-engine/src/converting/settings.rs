/// File name suffix selecting source files for conversion
pub const DEFAULT_SUFFIX: &str = ".java";

/// Columns continuation lines are shifted by relative to the opening line
pub const DEFAULT_CONTINUATION_INDENT: usize = 4;

/// The Markdown documentation comment marker
pub const MARKER: &str = "///";

/// Read-only settings shared by every file of a run.
///
/// The opening line of a converted block replaces `/**` in place, so it already
/// sits behind the code's own indentation. Continuation lines whose legacy `*`
/// leader was indented past column 1 are prefixed with `continuation_indent`
/// spaces so they line up under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSettings {
    suffix: String,
    continuation_indent: usize,
    continuation_prefix: String,
}

impl ConvertSettings {
    pub fn new(suffix: impl Into<String>, continuation_indent: usize) -> Self {
        Self {
            suffix: suffix.into(),
            continuation_indent,
            continuation_prefix: format!("{}{MARKER}", " ".repeat(continuation_indent)),
        }
    }

    pub fn with_suffix(self, suffix: impl Into<String>) -> Self {
        Self::new(suffix, self.continuation_indent)
    }

    pub fn with_continuation_indent(self, continuation_indent: usize) -> Self {
        Self::new(self.suffix, continuation_indent)
    }

    /// File name suffix of candidate files
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn continuation_indent(&self) -> usize {
        self.continuation_indent
    }

    pub fn marker(&self) -> &str {
        MARKER
    }

    /// Indentation plus marker for an emitted line
    pub(crate) fn line_prefix(&self, continuation: bool) -> &str {
        if continuation {
            &self.continuation_prefix
        } else {
            MARKER
        }
    }
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self::new(DEFAULT_SUFFIX, DEFAULT_CONTINUATION_INDENT)
    }
}
