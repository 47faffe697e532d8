use lingolift_client::Inflections;
use lingolift_morph::{legible_tags, MorphTags, NOMINAL_FEATURES, VERBAL_FEATURES};
use lingolift_protocol::{PartOfSpeech, Sentence};

/// One `text: rendering` line per token.
pub fn sentence_lines(sentence: &Sentence) -> Vec<String> {
    sentence
        .iter()
        .filter_map(|(id, token)| {
            let rendering = sentence.display(id)?;
            Some(format!("{}: {rendering}", token.text))
        })
        .collect()
}

/// One `word: legible features` line per inflected form.
pub fn inflection_lines(inflections: &Inflections) -> Vec<String> {
    let verbal = inflections
        .pos
        .value
        .parse::<PartOfSpeech>()
        .is_ok_and(PartOfSpeech::is_verb_like);
    let order: &[&str] = if verbal {
        &VERBAL_FEATURES
    } else {
        &NOMINAL_FEATURES
    };

    let mut lines = vec![match &inflections.gender {
        Some(gender) => format!("{} ({gender})", inflections.pos.explanation),
        None => inflections.pos.explanation.clone(),
    }];
    lines.extend(inflections.inflections.iter().map(|inflection| {
        let tags: MorphTags = inflection.morphology.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        format!("{}: {}", inflection.word, legible_tags(&tags, order))
    }));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingolift_client::{Inflection, PartOfSpeechDescription};
    use lingolift_parser::{map_sentence, RawWord};
    use std::collections::BTreeMap;

    #[test]
    fn test_sentence_lines() {
        let words = vec![
            RawWord::new("Der", "der", "DET", "Case=Nom|Number=Sing|Gender=Masc").with_head(1),
            RawWord::new("Tisch", "Tisch", "NOUN", "Case=Nom|Number=Sing|Gender=Masc"),
            RawWord::new(".", ".", "PUNCT", "").with_head(1),
        ];
        let sentence = map_sentence(&words).unwrap();
        assert_eq!(
            sentence_lines(&sentence),
            vec![
                "Der: (from: der);  refers to: Tisch; Determiner; Nominative Singular Masculine",
                "Tisch: Noun; Nominative Singular Masculine",
                ".:  refers to: Tisch; Punctuation",
            ]
        );
    }

    #[test]
    fn test_sample_file_maps() {
        let raw: Vec<Vec<RawWord>> =
            serde_json::from_str(include_str!("../data/der_tisch.json")).unwrap();
        let sentences: Vec<_> = raw.iter().map(|words| map_sentence(words).unwrap()).collect();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].len(), 7);
        assert_eq!(
            sentence_lines(&sentences[1]),
            vec![
                "Ich: (from: ich);  refers to: gehe; Pronoun; Nominative Singular Masculine",
                "gehe: (from: gehen); Verb; First person Singular Present tense",
                "!: (from: --);  refers to: gehe; Punctuation",
            ]
        );
    }

    #[test]
    fn test_inflection_lines() {
        let morphology = |person: &str| {
            BTreeMap::from([
                ("Person".to_string(), person.to_string()),
                ("Number".to_string(), "Sing".to_string()),
                ("Tense".to_string(), "Pres".to_string()),
            ])
        };
        let inflections = Inflections {
            pos: PartOfSpeechDescription {
                value: "VERB".to_string(),
                explanation: "Verb".to_string(),
            },
            gender: None,
            inflections: vec![
                Inflection {
                    word: "gehe".to_string(),
                    morphology: morphology("1"),
                },
                Inflection {
                    word: "gehst".to_string(),
                    morphology: morphology("2"),
                },
            ],
        };
        assert_eq!(
            inflection_lines(&inflections),
            vec![
                "Verb",
                "gehe: First person Singular Present tense",
                "gehst: Second person Singular Present tense",
            ]
        );
    }

    #[test]
    fn test_noun_inflections_show_gender() {
        let inflections = Inflections {
            pos: PartOfSpeechDescription {
                value: "NOUN".to_string(),
                explanation: "Noun".to_string(),
            },
            gender: Some("Masc".to_string()),
            inflections: vec![Inflection {
                word: "Tische".to_string(),
                morphology: BTreeMap::from([
                    ("Case".to_string(), "Nom".to_string()),
                    ("Number".to_string(), "Plur".to_string()),
                ]),
            }],
        };
        assert_eq!(
            inflection_lines(&inflections),
            vec!["Noun (Masc)", "Tische: Nominative Plural"]
        );
    }
}
