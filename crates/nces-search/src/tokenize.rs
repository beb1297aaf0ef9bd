//! Whitespace tokenization.

/// Lowercases `text` and splits it on whitespace, dropping empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Query and field tokens for one row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTokens {
    pub name: Vec<String>,
    pub city: Vec<String>,
    pub state: Vec<String>,
}

impl FieldTokens {
    /// Tokenizes a school name, city and already-resolved state name.
    pub fn new(name: &str, city: &str, state: &str) -> Self {
        Self {
            name: tokenize(name),
            city: tokenize(city),
            state: tokenize(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(
            tokenize("  Highland   PARK\tElementary "),
            vec!["highland", "park", "elementary"]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_punctuation() {
        assert_eq!(tokenize("Sequoyah Sch - Chalkville"), vec!["sequoyah", "sch", "-", "chalkville"]);
    }
}
