use regex::Regex;
use std::sync::OnceLock;

/// Stands in for `<p>` until the transformer splits the line on it.
pub const PARAGRAPH_BREAK: &str = "\n";

/// Tag substitutions, applied to every line in this order.
///
/// `<code>` pairs are rewritten before `<pre><code>` fences, so a code fence
/// only becomes a fence when its tags sit on lines of their own.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("<p>", PARAGRAPH_BREAK),
    ("</p>", ""),
    ("<code>(.*?)</code>", "`${1}`"),
    (r"\{@code\s+([^}]+)\}", "`${1}`"),
    ("<b>(.*?)</b>", "**${1}**"),
    ("<strong>(.*?)</strong>", "**${1}**"),
    ("<i>(.*?)</i>", "*${1}*"),
    ("<em>(.*?)</em>", "*${1}*"),
    ("<ul>", ""),
    ("</ul>", ""),
    ("<li>", "- "),
    ("</li>", ""),
    ("<pre><code>", "```"),
    ("</code></pre>", "```"),
];

struct MarkupRule {
    pattern: Regex,
    replacement: &'static str,
}

fn rules() -> &'static [MarkupRule] {
    static RULES: OnceLock<Vec<MarkupRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        SUBSTITUTIONS
            .iter()
            .map(|&(pattern, replacement)| MarkupRule {
                pattern: Regex::new(pattern).expect("Invalid markup regex"),
                replacement,
            })
            .collect()
    })
}

/// Rewrite the HTML and inline tags of a single line into Markdown.
///
/// Unknown or unbalanced tags are left as they are.
pub fn rewrite_tags(line: &str) -> String {
    rules().iter().fold(line.to_string(), |text, rule| {
        rule.pattern
            .replace_all(&text, rule.replacement)
            .into_owned()
    })
}
