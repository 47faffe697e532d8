use core::fmt;
use core::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

bitflags! {
    /// A set of morphological feature categories.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FeatureKinds: u8 {
        const CASE = 1;
        const GENDER = 2;
        const NUMBER = 4;
        const PERSON = 8;
        const TENSE = 16;
    }
}

// Universal Features key of every category, in display order.
const FEATURE_KEYS: [(FeatureKinds, &str); 5] = [
    (FeatureKinds::CASE, "Case"),
    (FeatureKinds::GENDER, "Gender"),
    (FeatureKinds::NUMBER, "Number"),
    (FeatureKinds::PERSON, "Person"),
    (FeatureKinds::TENSE, "Tense"),
];

impl FeatureKinds {
    /// Categories carried by a nominal feature set.
    pub const NOMINAL: Self = Self::CASE.union(Self::NUMBER).union(Self::GENDER);
    /// Categories carried by a verbal feature set.
    pub const VERBAL: Self = Self::TENSE.union(Self::NUMBER).union(Self::PERSON);

    /// Looks up the category for a Universal Features key such as `"Case"`.
    pub fn from_key(key: &str) -> Option<Self> {
        FEATURE_KEYS
            .iter()
            .find(|(_, name)| *name == key)
            .map(|(kind, _)| *kind)
    }

    /// Universal Features keys of every category in the set.
    pub fn keys(self) -> impl Iterator<Item = &'static str> {
        FEATURE_KEYS
            .iter()
            .filter(move |(kind, _)| self.contains(*kind))
            .map(|(_, name)| *name)
    }
}

impl fmt::Display for FeatureKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(key)?;
        }
        Ok(())
    }
}

/// One closed category of morphological values.
///
/// Every value pairs the code used by the annotation pipeline (`"Nom"`) with
/// a display label (`"nominative"`).
pub trait Feature: Copy + Eq + fmt::Debug + FromStr<Err = ParseError> + 'static {
    /// Universal Features key, e.g. `"Case"`.
    const KEY: &'static str;
    const KIND: FeatureKinds;
    /// Every value, in declaration order.
    const ALL: &'static [Self];

    fn code(self) -> &'static str;
    fn label(self) -> &'static str;
}

macro_rules! define_feature {
    (
        $(#[$meta:meta])*
        $name:ident: $kind:ident = $key:literal {
            $($variant:ident => $code:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl Feature for $name {
            const KEY: &'static str = $key;
            const KIND: FeatureKinds = FeatureKinds::$kind;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn code(self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

define_feature! {
    /// Grammatical case.
    Case: CASE = "Case" {
        Nominative => "Nom", "nominative";
        Accusative => "Acc", "accusative";
        Dative => "Dat", "dative";
        Genitive => "Gen", "genitive";
    }
}

define_feature! {
    Gender: GENDER = "Gender" {
        Masculine => "Masc", "masculine";
        Feminine => "Fem", "feminine";
        Neuter => "Neut", "neuter";
    }
}

define_feature! {
    Number: NUMBER = "Number" {
        Singular => "Sing", "singular";
        Plural => "Plur", "plural";
    }
}

define_feature! {
    /// Grammatical person. The pipeline encodes it as a bare digit.
    Person: PERSON = "Person" {
        First => "1", "first person";
        Second => "2", "second person";
        Third => "3", "third person";
    }
}

define_feature! {
    Tense: TENSE = "Tense" {
        Present => "Pres", "Present tense";
        Past => "Past", "Past tense";
        Imperfect => "Imp", "Imperfect";
        Future => "Fut", "Future tense";
        Pluperfect => "Pqp", "Pluperfect";
    }
}

/// Matches `raw` against the codes of `F` after uppercase normalization.
fn parse_code<F: Feature>(raw: &str) -> Result<F, ParseError> {
    let normalized = raw.to_ascii_uppercase();
    F::ALL
        .iter()
        .copied()
        .find(|value| value.code().to_ascii_uppercase() == normalized)
        .ok_or_else(|| ParseError::UnknownFeatureValue {
            feature: F::KIND,
            value: raw.to_string(),
        })
}

impl FromStr for Case {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code(s)
    }
}

impl FromStr for Gender {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code(s)
    }
}

impl FromStr for Number {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code(s)
    }
}

impl FromStr for Tense {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code(s)
    }
}

impl FromStr for Person {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Person::First),
            "2" => Ok(Person::Second),
            "3" => Ok(Person::Third),
            _ => Err(ParseError::UnknownFeatureValue {
                feature: FeatureKinds::PERSON,
                value: s.to_string(),
            }),
        }
    }
}
