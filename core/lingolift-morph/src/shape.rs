use lingolift_protocol::{
    Feature, FeatureSet, NounFeatureSet, ParseError, PartOfSpeech, VerbFeatureSet,
};

use crate::tags::MorphTags;

/// Builds the feature set a part of speech calls for from its tags.
///
/// Noun-like words need Case, Number and Gender; verb-like words need
/// Tense, Number and Person. Every other part of speech yields `None`.
/// Tags outside the selected shape are ignored.
pub fn feature_set_from_tags(
    tags: &MorphTags,
    pos: PartOfSpeech,
) -> Result<Option<FeatureSet>, ParseError> {
    let required = pos.required_features();
    if required.is_empty() {
        return Ok(None);
    }

    let missing = required.difference(tags.kinds());
    if !missing.is_empty() {
        return Err(ParseError::MissingFeatures { pos, missing });
    }

    let features = if pos.is_noun_like() {
        FeatureSet::Noun(NounFeatureSet {
            case: require(tags, pos)?,
            number: require(tags, pos)?,
            gender: require(tags, pos)?,
        })
    } else {
        FeatureSet::Verb(VerbFeatureSet {
            tense: require(tags, pos)?,
            number: require(tags, pos)?,
            person: require(tags, pos)?,
        })
    };
    Ok(Some(features))
}

fn require<F: Feature>(tags: &MorphTags, pos: PartOfSpeech) -> Result<F, ParseError> {
    tags.feature::<F>().unwrap_or_else(|| {
        Err(ParseError::MissingFeatures {
            pos,
            missing: F::KIND,
        })
    })
}
