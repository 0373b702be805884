//! Theme extraction
//!
//! Normalize → tokenize → drop stopwords and short tokens → tag → keep
//! nouns and adjectives → rank by frequency.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::error::{PipelineError, Stage};
use crate::lexicon::StopwordSet;
use crate::tagger::PosTagger;

/// Maximum number of themes per message
pub const MAX_THEMES: usize = 5;

/// Tokens of this many characters or fewer are never themes
const MIN_TOKEN_CHARS: usize = 3;

#[derive(Clone)]
pub struct ThemeExtractor {
    stopwords: StopwordSet,
    tagger: Arc<dyn PosTagger>,
}

impl ThemeExtractor {
    pub fn new(stopwords: StopwordSet, tagger: Arc<dyn PosTagger>) -> Self {
        Self { stopwords, tagger }
    }

    /// Up to [`MAX_THEMES`] distinct themes, most frequent first
    ///
    /// Ties keep first-seen order. Empty or all-stopword input yields an
    /// empty list.
    ///
    /// # Errors
    /// Fails if the tagger fails or does not return one tag per token.
    pub fn extract(&self, text: &str) -> Result<Vec<String>, PipelineError> {
        let tokens = self.candidate_tokens(text);
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let tags = self.tagger.tag(&tokens)?;
        if tags.len() != tokens.len() {
            return Err(PipelineError::stage_failed(
                Stage::Themes,
                format!(
                    "{} returned {} tags for {} tokens",
                    self.tagger.name(),
                    tags.len(),
                    tokens.len()
                ),
            ));
        }

        let kept = tokens
            .into_iter()
            .zip(tags)
            .filter(|(_, tag)| tag.is_theme_candidate())
            .map(|(token, _)| token);

        let themes = most_common(kept, MAX_THEMES);
        debug!(count = themes.len(), "Extracted themes");
        Ok(themes)
    }

    /// Lowercased, punctuation-free tokens that survive stopword and length filtering
    fn candidate_tokens(&self, text: &str) -> Vec<String> {
        normalize(text)
            .split_whitespace()
            .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
            .filter(|token| !self.stopwords.contains(token))
            .map(str::to_string)
            .collect()
    }
}

/// Lowercase and strip everything except word characters and whitespace
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// Stable frequency ranking: count descending, first occurrence breaks ties
fn most_common(items: impl Iterator<Item = String>, limit: usize) -> Vec<String> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, item) in items.enumerate() {
        counts.entry(item).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(item, (count, first_seen))| (item, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked.into_iter().take(limit).map(|(item, _, _)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::{LexiconTagger, PosTag};

    fn extractor() -> ThemeExtractor {
        ThemeExtractor::new(StopwordSet::english(), Arc::new(LexiconTagger::english()))
    }

    #[test]
    fn test_nouns_and_adjectives_survive() {
        let themes = extractor()
            .extract("The user interface is intuitive and the performance is fast")
            .unwrap();
        assert!(themes.contains(&"interface".to_string()));
        assert!(themes.contains(&"performance".to_string()));
        assert!(themes.len() <= MAX_THEMES);
    }

    #[test]
    fn test_empty_and_stopword_input() {
        assert!(extractor().extract("").unwrap().is_empty());
        assert!(extractor().extract("it is what it is, and so on").unwrap().is_empty());
        assert!(extractor().extract("!!! ??? ...").unwrap().is_empty());
    }

    #[test]
    fn test_short_tokens_dropped() {
        let themes = extractor().extract("UI ux go ok app").unwrap();
        assert_eq!(themes, vec!["app".to_string()]);
    }

    #[test]
    fn test_punctuation_stripped_before_tokenizing() {
        let themes = extractor().extract("Bug! Bug? #bug, error.").unwrap();
        assert_eq!(themes, vec!["bug".to_string(), "error".to_string()]);
    }

    #[test]
    fn test_frequency_ranking_with_first_seen_ties() {
        let themes = extractor()
            .extract("screen menu screen button menu screen layout")
            .unwrap();
        assert_eq!(themes, vec!["screen", "menu", "button", "layout"]);
    }

    #[test]
    fn test_at_most_five_distinct_themes() {
        let themes = extractor()
            .extract("screen menu button layout dashboard search payment checkout")
            .unwrap();
        assert_eq!(themes.len(), MAX_THEMES);
        assert_eq!(themes[0], "screen");
    }

    #[test]
    fn test_verbs_are_not_themes() {
        let themes = extractor().extract("crashes freezes loading").unwrap();
        assert!(themes.is_empty(), "got {:?}", themes);
    }

    #[test]
    fn test_most_common_is_stable() {
        let items = ["b", "a", "b", "c", "a"].iter().map(|s| s.to_string());
        assert_eq!(most_common(items, 10), vec!["b", "a", "c"]);
    }

    struct ShortTagger;

    impl PosTagger for ShortTagger {
        fn name(&self) -> &'static str {
            "short"
        }

        fn tag(&self, _tokens: &[String]) -> Result<Vec<PosTag>, PipelineError> {
            Ok(vec![PosTag::NN])
        }
    }

    #[test]
    fn test_tag_count_mismatch_is_a_stage_failure() {
        let extractor = ThemeExtractor::new(StopwordSet::english(), Arc::new(ShortTagger));
        let err = extractor.extract("screen menu button").unwrap_err();
        assert_eq!(err.stage(), Stage::Themes);
    }
}
