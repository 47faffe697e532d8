use thiserror::Error;

use crate::features::FeatureKinds;
use crate::pos::PartOfSpeech;

/// Everything that can go wrong while turning raw annotations into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown part-of-speech code '{0}'")]
    UnknownPartOfSpeech(String),
    #[error("unknown {feature} value '{value}'")]
    UnknownFeatureValue { feature: FeatureKinds, value: String },
    #[error("malformed morphology segment '{0}', expected Key=Value")]
    MalformedSegment(String),
    #[error("{pos} is missing required features: {missing}")]
    MissingFeatures {
        pos: PartOfSpeech,
        missing: FeatureKinds,
    },
    #[error("{pos} does not take the features {found}")]
    UnexpectedFeatures {
        pos: PartOfSpeech,
        found: FeatureKinds,
    },
    #[error("token {index} refers to ancestor {ancestor}, but the sentence has {len} tokens")]
    AncestorOutOfRange {
        index: usize,
        ancestor: usize,
        len: usize,
    },
    #[error("token {index} refers to itself as its ancestor")]
    SelfAncestor { index: usize },
    #[error("word {index} ('{text}'): {source}")]
    Word {
        index: usize,
        text: String,
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Attaches the position and surface form of the word being mapped.
    pub fn in_word(self, index: usize, text: &str) -> Self {
        ParseError::Word {
            index,
            text: text.to_string(),
            source: Box::new(self),
        }
    }
}
