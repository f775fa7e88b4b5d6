//! Packing parsed file units into character-bounded blocks.

use crate::diff::parser::FileDiffUnit;
use crate::error::ChunkError;

/// Build the ordered blocks sent to the summarizer, one request each.
///
/// Each unit's candidate text is cut into fixed-width slices of at most
/// `cutoff` characters. Slices ignore line and word boundaries, and blocks
/// from different units are never merged.
pub fn assemble(units: &[FileDiffUnit], cutoff: i64) -> Result<Vec<String>, ChunkError> {
    let width = usize::try_from(cutoff)
        .ok()
        .filter(|&w| w > 0)
        .ok_or(ChunkError::InvalidConfiguration { cutoff })?;

    Ok(units.iter().fold(Vec::new(), |mut blocks, unit| {
        blocks.extend(
            split_chars(&unit.candidate_text(), width)
                .into_iter()
                .map(str::to_string),
        );
        blocks
    }))
}

/// Slice `text` into consecutive pieces of at most `width` characters.
///
/// Empty text yields no pieces.
fn split_chars(text: &str, width: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let head = truncate_chars(rest, width);
        pieces.push(head);
        rest = &rest[head.len()..];
    }
    pieces
}

/// Longest prefix of `text` holding at most `max` characters.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_of_len(len: usize) -> FileDiffUnit {
        // header "h" plus hunks of "\n@@+x" joined by '\n' (6 chars each)
        assert!(len >= 1 && (len - 1) % 6 == 0);
        FileDiffUnit {
            header: "h".to_string(),
            hunks: vec!["\n@@+x".to_string(); (len - 1) / 6],
        }
    }

    #[test]
    fn test_rejects_zero_cutoff() {
        let units = vec![unit_of_len(7)];
        assert_eq!(
            assemble(&units, 0),
            Err(ChunkError::InvalidConfiguration { cutoff: 0 })
        );
    }

    #[test]
    fn test_rejects_negative_cutoff() {
        let units = vec![unit_of_len(7)];
        assert_eq!(
            assemble(&units, -5),
            Err(ChunkError::InvalidConfiguration { cutoff: -5 })
        );
    }

    #[test]
    fn test_rejects_invalid_cutoff_even_without_units() {
        assert!(assemble(&[], 0).is_err());
    }

    #[test]
    fn test_empty_units_yield_no_blocks() {
        assert_eq!(assemble(&[], 10_000).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_single_small_unit_is_one_block() {
        let unit = FileDiffUnit {
            header: "diff --git a/x b/x".to_string(),
            hunks: vec!["\n@@+hello".to_string()],
        };
        let blocks = assemble(&[unit], 10_000).unwrap();
        assert_eq!(blocks, vec!["diff --git a/x b/x\n\n@@+hello".to_string()]);
    }

    #[test]
    fn test_oversized_unit_is_sliced_in_order() {
        let unit = unit_of_len(25);
        let text = unit.candidate_text();
        let blocks = assemble(&[unit], 10).unwrap();

        let lengths: Vec<usize> = blocks.iter().map(|b| b.chars().count()).collect();
        assert_eq!(lengths, vec![10, 10, 5]);
        assert_eq!(blocks.concat(), text);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_empty_block() {
        let unit = unit_of_len(19);
        let blocks = assemble(&[unit], 19).unwrap();
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_units_are_not_merged() {
        let units = vec![unit_of_len(7), unit_of_len(13)];
        let blocks = assemble(&units, 10_000).unwrap();
        assert_eq!(
            blocks,
            vec![units[0].candidate_text(), units[1].candidate_text()]
        );
    }

    #[test]
    fn test_header_only_unit_is_one_block() {
        let unit = FileDiffUnit {
            header: "diff --git a/bin b/bin".to_string(),
            hunks: Vec::new(),
        };
        let blocks = assemble(&[unit], 5).unwrap();
        assert_eq!(blocks, vec!["diff ", "--git", " a/bi", "n b/b", "in"]);
    }

    #[test]
    fn test_empty_candidate_text_yields_no_block() {
        let unit = FileDiffUnit {
            header: String::new(),
            hunks: Vec::new(),
        };
        assert!(assemble(&[unit], 10).unwrap().is_empty());
    }

    #[test]
    fn test_slices_count_characters_not_bytes() {
        let unit = FileDiffUnit {
            header: "ééééé".to_string(),
            hunks: Vec::new(),
        };
        let blocks = assemble(&[unit], 2).unwrap();
        assert_eq!(blocks, vec!["éé", "éé", "é"]);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("", 4), "");
    }
}
