use core::fmt;

use crate::feature_set::{FeatureSet, NounFeatureSet, VerbFeatureSet};
use crate::features::Feature;
use crate::token::Token;

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn write_labels(f: &mut fmt::Formatter<'_>, labels: [&str; 3]) -> fmt::Result {
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        f.write_str(&capitalize(label))?;
    }
    Ok(())
}

/// "Nominative Singular Masculine"
impl fmt::Display for NounFeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_labels(
            f,
            [self.case.label(), self.number.label(), self.gender.label()],
        )
    }
}

/// "Third person Singular Present tense"
impl fmt::Display for VerbFeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_labels(
            f,
            [self.person.label(), self.number.label(), self.tense.label()],
        )
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureSet::Noun(noun) => fmt::Display::fmt(noun, f),
            FeatureSet::Verb(verb) => fmt::Display::fmt(verb, f),
        }
    }
}

/// Renders a token as `"; "`-separated parts, leaving out the ones that
/// do not apply.
pub struct TokenDisplay<'a> {
    token: &'a Token,
    ancestor: Option<&'a Token>,
}

impl<'a> TokenDisplay<'a> {
    pub fn new(token: &'a Token, ancestor: Option<&'a Token>) -> Self {
        Self { token, ancestor }
    }
}

impl fmt::Display for TokenDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(4);
        if self.token.is_inflected() {
            parts.push(format!("(from: {})", self.token.lemma));
        }
        if let Some(ancestor) = self.ancestor {
            parts.push(format!(" refers to: {}", ancestor.text));
        }
        parts.push(capitalize(self.token.pos.label()));
        if let Some(features) = &self.token.feature_set {
            parts.push(features.to_string());
        }
        f.write_str(&parts.join("; "))
    }
}
