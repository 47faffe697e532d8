use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::features::FeatureKinds;

/// Universal part-of-speech tags.
/// Reference: https://universaldependencies.org/u/pos/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    // Open class words
    Adj,
    Adv,
    Intj,
    Noun,
    Propn,
    Verb,

    // Closed class words
    Adp,
    Aux,
    Cconj,
    Det,
    Num,
    Part,
    Pron,
    Sconj,

    // Other
    Punct,
    Sym,
    X,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 17] = [
        PartOfSpeech::Adj,
        PartOfSpeech::Adv,
        PartOfSpeech::Intj,
        PartOfSpeech::Noun,
        PartOfSpeech::Propn,
        PartOfSpeech::Verb,
        PartOfSpeech::Adp,
        PartOfSpeech::Aux,
        PartOfSpeech::Cconj,
        PartOfSpeech::Det,
        PartOfSpeech::Num,
        PartOfSpeech::Part,
        PartOfSpeech::Pron,
        PartOfSpeech::Sconj,
        PartOfSpeech::Punct,
        PartOfSpeech::Sym,
        PartOfSpeech::X,
    ];

    /// The tag as emitted by the annotation pipeline, e.g. `"PROPN"`.
    pub fn code(self) -> &'static str {
        match self {
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Intj => "INTJ",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Propn => "PROPN",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Aux => "AUX",
            PartOfSpeech::Cconj => "CCONJ",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Part => "PART",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Sconj => "SCONJ",
            PartOfSpeech::Punct => "PUNCT",
            PartOfSpeech::Sym => "SYM",
            PartOfSpeech::X => "X",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PartOfSpeech::Adj => "adjective",
            PartOfSpeech::Adv => "adverb",
            PartOfSpeech::Intj => "interjection",
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Propn => "proper noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adp => "adposition",
            PartOfSpeech::Aux => "auxiliary verb",
            PartOfSpeech::Cconj => "coordinating conjunction",
            PartOfSpeech::Det => "determiner",
            PartOfSpeech::Num => "numeral",
            PartOfSpeech::Part => "particle",
            PartOfSpeech::Pron => "pronoun",
            PartOfSpeech::Sconj => "subordinating conjunction",
            PartOfSpeech::Punct => "punctuation",
            PartOfSpeech::Sym => "symbol",
            PartOfSpeech::X => "other",
        }
    }

    /// Whether the word carries case, number and gender.
    pub fn is_noun_like(self) -> bool {
        matches!(
            self,
            PartOfSpeech::Noun
                | PartOfSpeech::Propn
                | PartOfSpeech::Pron
                | PartOfSpeech::Det
                | PartOfSpeech::Adj
        )
    }

    /// Whether the word carries tense, number and person.
    pub fn is_verb_like(self) -> bool {
        matches!(self, PartOfSpeech::Verb | PartOfSpeech::Aux)
    }

    /// Feature categories a token of this part of speech must carry.
    /// Empty for closed-class words without a feature set.
    pub fn required_features(self) -> FeatureKinds {
        if self.is_noun_like() {
            FeatureKinds::NOMINAL
        } else if self.is_verb_like() {
            FeatureKinds::VERBAL
        } else {
            FeatureKinds::empty()
        }
    }
}

impl FromStr for PartOfSpeech {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartOfSpeech::ALL
            .iter()
            .copied()
            .find(|pos| pos.code() == s)
            .ok_or_else(|| ParseError::UnknownPartOfSpeech(s.to_string()))
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
