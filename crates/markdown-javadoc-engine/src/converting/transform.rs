use super::markup::{PARAGRAPH_BREAK, rewrite_tags};
use super::settings::ConvertSettings;

/// Where an output line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Text,
    /// A legacy line holding nothing but its `*` leader. Kept one for one.
    Blank,
    /// Emptied by tag removal or inserted for `<p>`. Dropped next to another
    /// blank line and at either end of the block.
    Separator,
}

/// One line of Markdown documentation before its prefix is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DocLine {
    text: String,
    kind: LineKind,
    /// The legacy `*` leader sat past column 1, i.e. inside an indented member.
    indented: bool,
}

impl DocLine {
    fn is_blank(&self) -> bool {
        self.kind != LineKind::Text
    }
}

/// Convert the inner text of a legacy comment into `///` lines.
///
/// Blank legacy lines are dropped, tags are rewritten line by line and the
/// `*` leader is stripped. A line holding only its leader stays as a bare
/// `///`. Separators left by `<p>` or by removed tags never double up with
/// another blank line and never open or close the block. An empty string is
/// returned when nothing is left.
pub fn transform_block(inner: &str, settings: &ConvertSettings) -> String {
    let newline = if inner.contains("\r\n") { "\r\n" } else { "\n" };

    let lines = drop_redundant_separators(doc_lines(inner));
    let mut out = String::with_capacity(inner.len());
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push_str(newline);
        }
        out.push_str(settings.line_prefix(i > 0 && line.indented));
        if !line.is_blank() {
            out.push(' ');
            out.push_str(&line.text);
        }
    }
    out
}

fn doc_lines(inner: &str) -> Vec<DocLine> {
    let mut lines = Vec::new();
    for raw in inner.split('\n') {
        if raw.trim().is_empty() {
            continue;
        }

        let (leader, rest) = split_leader(raw);
        let indented = leader.is_some_and(|column| column >= 2);
        if rest.trim().is_empty() {
            lines.push(DocLine {
                text: String::new(),
                kind: LineKind::Blank,
                indented,
            });
            continue;
        }

        let rewritten = rewrite_tags(rest);
        for (i, segment) in rewritten.split(PARAGRAPH_BREAK).enumerate() {
            if i > 0 {
                lines.push(DocLine {
                    text: String::new(),
                    kind: LineKind::Separator,
                    indented,
                });
            }
            let text = segment.trim();
            let kind = if text.is_empty() {
                LineKind::Separator
            } else {
                LineKind::Text
            };
            lines.push(DocLine {
                text: text.to_string(),
                kind,
                indented,
            });
        }
    }
    lines
}

/// Locate the `*` a legacy comment line starts with.
///
/// Only an asterisk preceded by nothing but whitespace counts as the leader.
/// Returns its byte column and the text after it, or the whole line if there
/// is no leader.
fn split_leader(raw: &str) -> (Option<usize>, &str) {
    let column = raw.len() - raw.trim_start().len();
    match raw[column..].strip_prefix('*') {
        Some(rest) => (Some(column), rest),
        None => (None, raw),
    }
}

fn drop_redundant_separators(lines: Vec<DocLine>) -> Vec<DocLine> {
    let mut kept: Vec<DocLine> = Vec::with_capacity(lines.len());
    for line in lines {
        match line.kind {
            LineKind::Text => kept.push(line),
            LineKind::Blank => {
                if kept.last().is_some_and(|last| last.kind == LineKind::Separator) {
                    kept.pop();
                }
                kept.push(line);
            }
            LineKind::Separator => {
                if kept.last().is_some_and(|last| !last.is_blank()) {
                    kept.push(line);
                }
            }
        }
    }
    while kept.last().is_some_and(|last| last.kind == LineKind::Separator) {
        kept.pop();
    }
    kept
}
