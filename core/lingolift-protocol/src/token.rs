use serde::{Deserialize, Serialize};

use crate::feature_set::FeatureSet;
use crate::ids::TokenId;
use crate::pos::PartOfSpeech;
use crate::render::TokenDisplay;

/// One analyzed word.
///
/// The ancestor is the position of the word's syntactic governor in the
/// owning [`Sentence`](crate::Sentence); the sentence resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    #[serde(rename = "upos")]
    pub pos: PartOfSpeech,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_set: Option<FeatureSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ancestor: Option<TokenId>,
}

impl Token {
    /// Builds a token whose ancestor is not known yet.
    pub fn new(
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: PartOfSpeech,
        feature_set: Option<FeatureSet>,
    ) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            feature_set,
            ancestor: None,
        }
    }

    /// Whether the surface form is inflected away from its lemma.
    pub fn is_inflected(&self) -> bool {
        self.lemma != self.text
    }

    /// Human-readable rendering, given the already resolved ancestor.
    pub fn display<'a>(&'a self, ancestor: Option<&'a Token>) -> TokenDisplay<'a> {
        TokenDisplay::new(self, ancestor)
    }
}
