pub mod graph;

pub use graph::{Ancestors, DependencyTree, TreeError};

#[cfg(test)]
mod tests {
    use super::*;
    use lingolift_parser::{map_sentence, RawWord};
    use lingolift_protocol::{PartOfSpeech, Sentence, Token, TokenId};

    fn der_tisch_hat_vier_eckige_beine() -> Sentence {
        let words = vec![
            RawWord::new("Der", "der", "DET", "Case=Nom|Gender=Masc|Number=Sing").with_head(1),
            RawWord::new("Tisch", "Tisch", "NOUN", "Case=Nom|Gender=Masc|Number=Sing").with_head(2),
            RawWord::new("hat", "haben", "VERB", "Number=Sing|Person=3|Tense=Pres").with_head(2),
            RawWord::new("vier", "vier", "NUM", "").with_head(5),
            RawWord::new("eckige", "eckig", "ADJ", "Case=Acc|Gender=Neut|Number=Plur").with_head(5),
            RawWord::new("Beine", "Bein", "NOUN", "Case=Acc|Gender=Neut|Number=Plur").with_head(2),
            RawWord::new(".", "--", "PUNCT", "").with_head(2),
        ];
        map_sentence(&words).expect("fixture maps")
    }

    fn interjections(heads: &[Option<usize>]) -> Sentence {
        let tokens = heads
            .iter()
            .map(|head| {
                let mut token = Token::new("oh", "oh", PartOfSpeech::Intj, None);
                token.ancestor = head.map(TokenId::new);
                token
            })
            .collect();
        Sentence::new(tokens).expect("ancestors are in range")
    }

    #[test]
    fn test_full_ancestor_chain() {
        let sentence = der_tisch_hat_vier_eckige_beine();
        let tree = DependencyTree::from_sentence(&sentence).unwrap();

        let chain: Vec<_> = tree.ancestors(TokenId(0)).unwrap().collect();
        assert_eq!(chain, vec![TokenId(1), TokenId(2)]); // Der -> Tisch -> hat
        assert_eq!(tree.depth(TokenId(4)).unwrap(), 2);
        assert_eq!(tree.depth(TokenId(2)).unwrap(), 0);
        assert_eq!(tree.ancestors(TokenId(2)).unwrap().next(), None);
    }

    #[test]
    fn test_chain_starts_with_sentence_ancestor() {
        let sentence = der_tisch_hat_vier_eckige_beine();
        let tree = DependencyTree::from_sentence(&sentence).unwrap();
        for (id, token) in sentence.iter() {
            assert_eq!(tree.ancestors(id).unwrap().next(), token.ancestor);
        }
    }

    #[test]
    fn test_roots_and_dependents() {
        let sentence = der_tisch_hat_vier_eckige_beine();
        let tree = DependencyTree::from_sentence(&sentence).unwrap();
        assert_eq!(tree.roots(), vec![TokenId(2)]);
        assert_eq!(
            tree.dependents(TokenId(2)).unwrap(),
            vec![TokenId(1), TokenId(5), TokenId(6)]
        );
        assert_eq!(tree.dependents(TokenId(5)).unwrap(), vec![TokenId(3), TokenId(4)]);
        assert!(tree.dependents(TokenId(0)).unwrap().is_empty());
    }

    #[test]
    fn test_detects_cycles() {
        let cyclic = interjections(&[Some(1), Some(0), None]);
        assert!(matches!(
            DependencyTree::from_sentence(&cyclic),
            Err(TreeError::Cycle(_))
        ));

        let triangle = interjections(&[Some(2), Some(0), Some(1)]);
        assert!(matches!(
            DependencyTree::from_sentence(&triangle),
            Err(TreeError::Cycle(_))
        ));
    }

    #[test]
    fn test_forest_and_unknown_tokens() {
        let tree = DependencyTree::from_sentence(&interjections(&[None, None, Some(0)])).unwrap();
        assert_eq!(tree.roots(), vec![TokenId(0), TokenId(1)]);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.depth(TokenId(9)), Err(TreeError::UnknownToken(TokenId(9))));
        assert!(tree.dependents(TokenId(3)).is_err());
    }

    #[test]
    fn test_empty_sentence() {
        let tree = DependencyTree::from_sentence(&Sentence::default()).unwrap();
        assert!(tree.is_empty());
        assert!(tree.roots().is_empty());
    }
}
