use std::collections::BTreeMap;

use lingolift_protocol::{capitalize, Case, Feature, Gender, Number, Person, Tense};
use once_cell::sync::Lazy;

use crate::tags::MorphTags;

/// Display order of the features carried by nouns and related words.
pub const NOMINAL_FEATURES: [&str; 3] = ["Case", "Number", "Gender"];
/// Display order of the features carried by verbs.
pub const VERBAL_FEATURES: [&str; 3] = ["Person", "Number", "Tense"];

struct LegibleTag {
    code: &'static str,
    label: String,
}

// Feature key -> codes with their legible labels, in taxonomy order.
static LEGIBLE_TAGS: Lazy<BTreeMap<&'static str, Vec<LegibleTag>>> = Lazy::new(|| {
    BTreeMap::from([
        entry::<Case>(),
        entry::<Gender>(),
        entry::<Number>(),
        entry::<Person>(),
        entry::<Tense>(),
    ])
});

fn entry<F: Feature>() -> (&'static str, Vec<LegibleTag>) {
    let tags = F::ALL
        .iter()
        .map(|value| LegibleTag {
            code: value.code(),
            label: capitalize(value.label()),
        })
        .collect();
    (F::KEY, tags)
}

/// Every code of a feature, e.g. `"Case"` -> Nom, Acc, Dat, Gen.
pub fn feature_instances(key: &str) -> Option<Vec<&'static str>> {
    LEGIBLE_TAGS
        .get(key)
        .map(|tags| tags.iter().map(|tag| tag.code).collect())
}

/// Legible label of one code, e.g. (`"Number"`, `"Plur"`) -> `"Plural"`.
pub fn legible_label(key: &str, code: &str) -> Option<&'static str> {
    let tags: &'static Vec<LegibleTag> = Lazy::force(&LEGIBLE_TAGS).get(key)?;
    tags.iter()
        .find(|tag| tag.code == code)
        .map(|tag| tag.label.as_str())
}

/// Renders the tags named in `order` as legible labels, e.g.
/// `"Case=Nom|Number=Plur"` -> `"Nominative Plural"`. Keys or codes the
/// taxonomy does not know are left out.
pub fn legible_tags(tags: &MorphTags, order: &[&str]) -> String {
    order
        .iter()
        .filter_map(|key| legible_label(key, tags.get(key)?))
        .collect::<Vec<_>>()
        .join(" ")
}
