//! Typo-tolerant matching for intent patterns.
//!
//! Similarity is a normalized Levenshtein ratio in `0.0..=1.0`; a cutoff of
//! `0.8` accepts one edit in a five-letter word ("helo" -> "hello").

/// Returns the similarity ratio between two strings.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let longest = a_chars.len().max(b_chars.len());
    if longest == 0 {
        return 1.0;
    }
    let distance = levenshtein(&a_chars, &b_chars);
    1.0 - (distance as f64 / longest as f64)
}

/// Returns the candidate most similar to `query`, if any candidate reaches
/// the cutoff.
pub fn close_match<'a, I>(query: &str, candidates: I, cutoff: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&str, f64)> = None;
    for candidate in candidates {
        let score = similarity(query, candidate);
        if score >= cutoff && best.is_none_or(|(_, s)| score > s) {
            best = Some((candidate, score));
        }
    }
    best.map(|(candidate, _)| candidate)
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two-row dynamic programming over edit operations.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, &a_char) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &b_char) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(a_char != b_char);
            current[j + 1] = substitution.min(prev[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut prev, &mut current);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lev(a: &str, b: &str) -> usize {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        levenshtein(&a, &b)
    }

    #[test]
    fn test_levenshtein_basics() {
        assert_eq!(lev("", ""), 0);
        assert_eq!(lev("abc", ""), 3);
        assert_eq!(lev("", "abc"), 3);
        assert_eq!(lev("abc", "abc"), 0);
        assert_eq!(lev("helo", "hello"), 1);
        assert_eq!(lev("kitten", "sitting"), 3);
    }

    #[test]
    fn test_similarity_identical_and_disjoint() {
        assert!((similarity("hello", "hello") - 1.0).abs() < f64::EPSILON);
        assert!(similarity("abc", "xyz") < 0.01);
    }

    #[test]
    fn test_similarity_single_typo() {
        // One edit in five characters: exactly the 0.8 cutoff.
        assert!(similarity("helo", "hello") >= 0.8);
        assert!(similarity("hellp", "hello") >= 0.8);
    }

    #[test]
    fn test_close_match_picks_best() {
        let vocab = ["hello", "help", "goodbye"];
        assert_eq!(close_match("helo", vocab, 0.8), Some("hello"));
        assert_eq!(close_match("zzzzz", vocab, 0.8), None);
    }

    #[test]
    fn test_close_match_respects_cutoff() {
        let vocab = ["hello"];
        assert_eq!(close_match("hxlxo", vocab, 0.8), None);
        assert_eq!(close_match("hxlxo", vocab, 0.5), Some("hello"));
    }
}
