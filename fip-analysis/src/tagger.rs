//! Part-of-speech tagging
//!
//! Tags follow the Penn Treebank set. [`LexiconTagger`] looks words up in an
//! embedded vocabulary and falls back to morphology: known-stem inflections
//! first, then derivational suffixes, then `NN`.

use std::collections::HashMap;
use std::fmt;

use crate::error::PipelineError;
use crate::lexicon::tags;

/// Penn Treebank part-of-speech tag
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// Coordinating conjunction
    CC,
    /// Cardinal number
    CD,
    /// Determiner
    DT,
    /// Preposition or subordinating conjunction
    IN,
    /// Adjective
    JJ,
    /// Adjective, comparative
    JJR,
    /// Adjective, superlative
    JJS,
    /// Modal
    MD,
    /// Noun, singular or mass
    NN,
    /// Noun, plural
    NNS,
    /// Proper noun, singular
    NNP,
    /// Proper noun, plural
    NNPS,
    /// Personal pronoun
    PRP,
    /// Possessive pronoun (`PRP$`)
    PRPS,
    /// Adverb
    RB,
    /// Verb, base form
    VB,
    /// Verb, past tense
    VBD,
    /// Verb, gerund or present participle
    VBG,
    /// Verb, past participle
    VBN,
    /// Verb, non-3rd person singular present
    VBP,
    /// Verb, 3rd person singular present
    VBZ,
    /// Wh-word (determiner, pronoun or adverb)
    WH,
}

impl PosTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::CC => "CC",
            PosTag::CD => "CD",
            PosTag::DT => "DT",
            PosTag::IN => "IN",
            PosTag::JJ => "JJ",
            PosTag::JJR => "JJR",
            PosTag::JJS => "JJS",
            PosTag::MD => "MD",
            PosTag::NN => "NN",
            PosTag::NNS => "NNS",
            PosTag::NNP => "NNP",
            PosTag::NNPS => "NNPS",
            PosTag::PRP => "PRP",
            PosTag::PRPS => "PRP$",
            PosTag::RB => "RB",
            PosTag::VB => "VB",
            PosTag::VBD => "VBD",
            PosTag::VBG => "VBG",
            PosTag::VBN => "VBN",
            PosTag::VBP => "VBP",
            PosTag::VBZ => "VBZ",
            PosTag::WH => "WH",
        }
    }

    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::NN | PosTag::NNS | PosTag::NNP | PosTag::NNPS)
    }

    pub fn is_adjective(&self) -> bool {
        matches!(self, PosTag::JJ | PosTag::JJR | PosTag::JJS)
    }

    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            PosTag::VB | PosTag::VBD | PosTag::VBG | PosTag::VBN | PosTag::VBP | PosTag::VBZ
        )
    }

    /// Nouns and adjectives are kept as themes
    pub fn is_theme_candidate(&self) -> bool {
        self.is_noun() || self.is_adjective()
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assigns one tag per token
///
/// Implementations must return exactly as many tags as tokens.
pub trait PosTagger: Send + Sync {
    fn name(&self) -> &'static str;

    fn tag(&self, tokens: &[String]) -> Result<Vec<PosTag>, PipelineError>;
}

/// Vocabulary + morphology tagger for English feedback text
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    vocabulary: HashMap<&'static str, PosTag>,
}

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ance", "ence", "ship", "ism", "ist", "age",
    "ery", "dom", "hood",
];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ive", "ful", "less", "able", "ible", "ical", "ic", "ish", "ary", "al",
];

impl LexiconTagger {
    pub fn english() -> Self {
        let mut vocabulary = HashMap::new();

        // Earlier groups win for words listed in more than one group
        let groups: [(&[&'static str], PosTag); 11] = [
            (tags::DETERMINERS, PosTag::DT),
            (tags::PRONOUNS, PosTag::PRP),
            (tags::POSSESSIVES, PosTag::PRPS),
            (tags::CONJUNCTIONS, PosTag::CC),
            (tags::PREPOSITIONS, PosTag::IN),
            (tags::MODALS, PosTag::MD),
            (tags::WH_WORDS, PosTag::WH),
            (tags::ADJECTIVES, PosTag::JJ),
            (tags::NOUNS, PosTag::NN),
            (tags::VERBS, PosTag::VBP),
            (tags::ADVERBS, PosTag::RB),
        ];

        for &(word, tag) in tags::BE_HAVE_DO {
            vocabulary.insert(word, verb_tag(tag));
        }
        for (words, tag) in groups {
            for &word in words {
                vocabulary.entry(word).or_insert(tag);
            }
        }

        Self { vocabulary }
    }

    /// Tag a single lowercase word without context
    pub fn tag_word(&self, word: &str) -> PosTag {
        if let Some(tag) = self.vocabulary.get(word) {
            return match tag {
                // Inflected verb forms listed in the vocabulary
                PosTag::VBP if word.ends_with('s') && !word.ends_with("ss") => PosTag::VBZ,
                other => *other,
            };
        }

        if word.chars().all(|c| c.is_ascii_digit()) {
            return PosTag::CD;
        }

        if let Some(tag) = self.inflection_of_known_word(word) {
            return tag;
        }

        if word.ends_with("ly") && word.len() > 4 {
            return PosTag::RB;
        }
        if word.ends_with("ing") && word.len() > 5 {
            return PosTag::VBG;
        }
        if word.ends_with("ed") && word.len() > 4 {
            return PosTag::VBD;
        }
        if NOUN_SUFFIXES.iter().any(|s| has_suffix(word, s)) {
            return PosTag::NN;
        }
        if ADJECTIVE_SUFFIXES.iter().any(|s| has_suffix(word, s)) {
            return PosTag::JJ;
        }
        if is_plural_form(word) {
            return PosTag::NNS;
        }

        PosTag::NN
    }

    /// Comparatives, superlatives and -s forms of vocabulary words
    fn inflection_of_known_word(&self, word: &str) -> Option<PosTag> {
        for (suffix, tag) in [("est", PosTag::JJS), ("er", PosTag::JJR)] {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem_candidates(stem).iter().any(|s| self.known(s, PosTag::is_adjective)) {
                    return Some(tag);
                }
            }
        }

        if is_plural_form(word) {
            let stems = [word.strip_suffix("es"), word.strip_suffix('s')];
            for stem in stems.into_iter().flatten() {
                if self.known(stem, PosTag::is_noun) {
                    return Some(PosTag::NNS);
                }
                if self.known(stem, PosTag::is_verb) {
                    return Some(PosTag::VBZ);
                }
            }
        }

        None
    }

    fn known(&self, word: &str, predicate: fn(&PosTag) -> bool) -> bool {
        self.vocabulary.get(word).is_some_and(predicate)
    }
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::english()
    }
}

impl PosTagger for LexiconTagger {
    fn name(&self) -> &'static str {
        "lexicon-tagger"
    }

    fn tag(&self, tokens: &[String]) -> Result<Vec<PosTag>, PipelineError> {
        let mut result: Vec<PosTag> = Vec::with_capacity(tokens.len());

        for token in tokens {
            let mut tag = self.tag_word(token);

            // A base-form verb right after a determiner, possessive or
            // adjective is being used as a noun ("the love", "great work")
            if matches!(tag, PosTag::VB | PosTag::VBP) {
                if let Some(prev) = result.last() {
                    if matches!(prev, PosTag::DT | PosTag::PRPS) || prev.is_adjective() {
                        tag = PosTag::NN;
                    }
                }
            }

            result.push(tag);
        }

        Ok(result)
    }
}

fn verb_tag(tag: &str) -> PosTag {
    match tag {
        "VB" => PosTag::VB,
        "VBD" => PosTag::VBD,
        "VBG" => PosTag::VBG,
        "VBN" => PosTag::VBN,
        "VBZ" => PosTag::VBZ,
        _ => PosTag::VBP,
    }
}

/// Suffix match that leaves a stem of at least three characters
fn has_suffix(word: &str, suffix: &str) -> bool {
    word.len() >= suffix.len() + 3 && word.ends_with(suffix)
}

fn is_plural_form(word: &str) -> bool {
    word.len() > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
}

/// Possible base forms of a comparative/superlative stem
/// ("fast" → fast, "nic" → nice, "easi" → easy, "bigg" → big)
fn stem_candidates(stem: &str) -> Vec<String> {
    let mut candidates = vec![stem.to_string(), format!("{}e", stem)];

    if let Some(base) = stem.strip_suffix('i') {
        candidates.push(format!("{}y", base));
    }

    let chars: Vec<char> = stem.chars().collect();
    if chars.len() >= 2 && chars[chars.len() - 1] == chars[chars.len() - 2] {
        candidates.push(chars[..chars.len() - 1].iter().collect());
    }

    candidates
}
