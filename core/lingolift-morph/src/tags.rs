use std::collections::BTreeMap;
use std::str::FromStr;

use lingolift_protocol::{Feature, FeatureKinds, ParseError};
use nom::{
    bytes::complete::take_while1,
    character::complete::char,
    combinator::all_consuming,
    sequence::separated_pair,
    IResult,
};

/// Universal Features tags of one word, keyed by feature name.
///
/// Parsed from the pipe-delimited form emitted by the annotation pipeline,
/// e.g. `"Case=Nom|Gender=Masc|Number=Sing"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MorphTags {
    tags: BTreeMap<String, String>,
}

/// `Key=Value`, both sides non-empty and free of `=`.
fn tag_pair(input: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(separated_pair(
        take_while1(|c: char| c != '='),
        char('='),
        take_while1(|c: char| c != '=' && c != '|'),
    ))(input)
}

impl MorphTags {
    /// Parses a morphology string. Empty segments are skipped; a later
    /// duplicate key replaces an earlier one.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut tags = BTreeMap::new();
        for segment in input.split('|').filter(|s| !s.is_empty()) {
            let (_, (key, value)) = tag_pair(segment)
                .map_err(|_| ParseError::MalformedSegment(segment.to_string()))?;
            tags.insert(key.to_string(), value.to_string());
        }
        Ok(Self { tags })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tags.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Known feature categories present among the keys.
    pub fn kinds(&self) -> FeatureKinds {
        self.tags
            .keys()
            .filter_map(|key| FeatureKinds::from_key(key))
            .fold(FeatureKinds::empty(), |acc, kind| acc | kind)
    }

    /// Parses the value stored under `F::KEY`, if any.
    pub fn feature<F: Feature>(&self) -> Option<Result<F, ParseError>> {
        self.get(F::KEY).map(|raw| raw.parse::<F>())
    }
}

impl FromStr for MorphTags {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MorphTags::parse(s)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MorphTags {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tags = MorphTags::default();
        for (key, value) in iter {
            tags.insert(key, value);
        }
        tags
    }
}
