//! Unique word extraction

use crate::error::Result;
use crate::input::Source;
use crate::tokenizer::tokenize;
use std::collections::HashSet;

/// Distinct tokens in the source, without ordering
pub fn unique_words(source: &Source) -> Result<HashSet<String>> {
    let text = source.read_text()?;
    Ok(tokenize(&text).into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_lowercase_words() {
        let words = unique_words(&Source::from_text("The cat and THE hat\nand the bat")).unwrap();

        let expected: HashSet<String> = ["the", "cat", "and", "hat", "bat"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn test_no_words() {
        assert!(unique_words(&Source::from_text("?!\n...")).unwrap().is_empty());
    }
}
