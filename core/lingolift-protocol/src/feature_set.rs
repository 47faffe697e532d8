use serde::{Deserialize, Serialize};

use crate::features::{Case, FeatureKinds, Gender, Number, Person, Tense};

/// Features of a noun or related word (NOUN, PROPN, PRON, DET, ADJ).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NounFeatureSet {
    pub case: Case,
    pub number: Number,
    pub gender: Gender,
}

/// Features of a verb or auxiliary (VERB, AUX).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerbFeatureSet {
    pub tense: Tense,
    pub number: Number,
    pub person: Person,
}

/// The morphological features of one token. The set of shapes is closed;
/// which one applies is decided by the token's part of speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FeatureSet {
    Noun(NounFeatureSet),
    Verb(VerbFeatureSet),
}

impl FeatureSet {
    /// Feature categories carried by this shape.
    pub fn kinds(&self) -> FeatureKinds {
        match self {
            FeatureSet::Noun(_) => FeatureKinds::NOMINAL,
            FeatureSet::Verb(_) => FeatureKinds::VERBAL,
        }
    }
}

impl From<NounFeatureSet> for FeatureSet {
    fn from(features: NounFeatureSet) -> Self {
        FeatureSet::Noun(features)
    }
}

impl From<VerbFeatureSet> for FeatureSet {
    fn from(features: VerbFeatureSet) -> Self {
        FeatureSet::Verb(features)
    }
}
