//! Whitespace tokenizer with edge punctuation stripping and case folding.

/// Characters trimmed from both ends of every token.
const EDGE_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']'];

/// Split `text` on whitespace, trim edge punctuation, and lowercase.
///
/// Tokens that are pure punctuation are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|t| t.trim_matches(EDGE_PUNCTUATION).to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_edge_punctuation_and_folds_case() {
        assert_eq!(
            tokenize("An Employee confronts (their) manager!"),
            vec!["an", "employee", "confronts", "their", "manager"]
        );
    }

    #[test]
    fn keeps_inner_punctuation() {
        assert_eq!(tokenize("co-worker's \"deal\"."), vec!["co-worker's", "deal"]);
    }

    #[test]
    fn drops_pure_punctuation() {
        assert_eq!(tokenize("... ?! hr"), vec!["hr"]);
        assert!(tokenize("   ").is_empty());
    }
}
