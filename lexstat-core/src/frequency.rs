//! Word frequency counting

use crate::error::Result;
use crate::input::Source;
use crate::tokenizer::tokenize;
use std::collections::HashMap;

/// Occurrence count per token
pub type FrequencyMap = HashMap<String, usize>;

/// Count how often each word appears in the source
pub fn word_frequency(source: &Source) -> Result<FrequencyMap> {
    let text = source.read_text()?;
    Ok(count_words(&text))
}

/// Count words, keeping only tokens for which `filter` returns true
///
/// The predicate sees the token, never its count.
pub fn word_frequency_with<F>(source: &Source, filter: F) -> Result<FrequencyMap>
where
    F: Fn(&str) -> bool,
{
    let mut counts = word_frequency(source)?;
    counts.retain(|word, _| filter(word));
    Ok(counts)
}

fn count_words(text: &str) -> FrequencyMap {
    let mut counts = FrequencyMap::new();
    for token in tokenize(text) {
        *counts.entry(token).or_insert(0) += 1;
    }
    log::debug!("counted {} distinct words", counts.len());
    counts
}

/// Entries ordered by count descending, ties broken alphabetically
///
/// `limit` of `None` returns every entry.
pub fn most_common(counts: &FrequencyMap, limit: Option<usize>) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = counts
        .iter()
        .map(|(word, &count)| (word.as_str(), count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Hello world! This is a test.\nHello again, world!\nTesting word frequencies.";

    #[test]
    fn test_counts_sample() {
        let counts = word_frequency(&Source::from_text(SAMPLE)).unwrap();

        assert_eq!(counts.len(), 10);
        assert_eq!(counts["hello"], 2);
        assert_eq!(counts["world"], 2);
        assert_eq!(counts["frequencies"], 1);
        assert_eq!(counts.values().sum::<usize>(), 12);
    }

    #[test]
    fn test_filter_applies_to_token() {
        let counts = word_frequency_with(&Source::from_text(SAMPLE), |w| w.len() > 4).unwrap();

        let expected: FrequencyMap = [
            ("hello", 2),
            ("world", 2),
            ("again", 1),
            ("testing", 1),
            ("frequencies", 1),
        ]
        .into_iter()
        .map(|(w, c)| (w.to_string(), c))
        .collect();
        assert_eq!(counts, expected);
    }

    #[test]
    fn test_filter_rejecting_everything() {
        let counts = word_frequency_with(&Source::from_text(SAMPLE), |_| false).unwrap();
        assert!(counts.is_empty());
    }

    #[test]
    fn test_filter_can_capture_state() {
        let stop_words = ["is", "a", "this"];
        let counts =
            word_frequency_with(&Source::from_text(SAMPLE), |w| !stop_words.contains(&w)).unwrap();

        assert!(!counts.contains_key("is"));
        assert!(!counts.contains_key("this"));
        assert_eq!(counts["test"], 1);
    }

    #[test]
    fn test_empty_text() {
        let counts = word_frequency(&Source::from_text("")).unwrap();
        assert!(counts.is_empty());
    }

    #[test]
    fn test_most_common_ordering() {
        let counts = word_frequency(&Source::from_text(SAMPLE)).unwrap();
        let top = most_common(&counts, Some(3));

        assert_eq!(top, vec![("hello", 2), ("world", 2), ("a", 1)]);
        assert_eq!(most_common(&counts, None).len(), 10);
    }
}
