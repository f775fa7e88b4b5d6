//! Splitting a unified diff into per-file units of change lines.

/// Literal that opens every per-file section of a unified diff.
const FILE_MARKER: &str = "diff";

/// Prefix given to each change line so it reads like a hunk fragment.
const HUNK_MARKER: &str = "\n@@";

/// One file's worth of a unified diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiffUnit {
    /// First line of the file section, e.g. `diff --git a/x b/x`.
    pub header: String,
    /// Change lines (`+`/`-`), last-seen first, each prefixed with `"\n@@"`.
    pub hunks: Vec<String>,
}

impl FileDiffUnit {
    /// Header and hunks joined with newlines.
    pub fn candidate_text(&self) -> String {
        let mut text = self.header.clone();
        for hunk in &self.hunks {
            text.push('\n');
            text.push_str(hunk);
        }
        text
    }

    fn from_section(section: &str) -> Self {
        let mut lines = split_lines(section).into_iter();
        let header = lines.next().unwrap_or_default().to_string();

        let mut hunks: Vec<String> = lines
            .filter(|line| line.starts_with('+') || line.starts_with('-'))
            .map(|line| format!("{HUNK_MARKER}{line}"))
            .collect();
        hunks.reverse();

        Self { header, hunks }
    }
}

/// Parse a raw unified diff into file units, in file order.
///
/// Text before the first `diff` boundary is dropped. Input without any
/// boundary becomes a single unit built from the whole string.
pub fn parse(raw: &str) -> Vec<FileDiffUnit> {
    if raw.is_empty() {
        return Vec::new();
    }

    let sections = split_sections(raw);
    if sections.is_empty() {
        return vec![FileDiffUnit::from_section(raw)];
    }

    sections
        .into_iter()
        .map(FileDiffUnit::from_section)
        .collect()
}

/// Slice `raw` at every `"\ndiff"` boundary, keeping the `diff` prefix.
///
/// A diff that begins with `diff` has a boundary at offset zero.
fn split_sections(raw: &str) -> Vec<&str> {
    let mut starts: Vec<usize> = Vec::new();
    if raw.starts_with(FILE_MARKER) {
        starts.push(0);
    }
    let boundary = format!("\n{FILE_MARKER}");
    starts.extend(raw.match_indices(&boundary).map(|(idx, _)| idx + 1));

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).map_or(raw.len(), |&next| next - 1);
            &raw[start..end]
        })
        .collect()
}

/// Line terminators, including the ASCII separators and Unicode line breaks.
/// `\r\n` counts as one terminator.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split `text` into lines without their terminators. A trailing
/// terminator does not start an extra empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
