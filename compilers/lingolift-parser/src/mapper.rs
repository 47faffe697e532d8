use lingolift_morph::{feature_set_from_tags, MorphTags};
use lingolift_protocol::{ParseError, PartOfSpeech, Sentence, Token, TokenId};
use log::{debug, trace};

use crate::record::RawWord;

/// Maps a single annotated word to a token.
///
/// The word is taken out of context, so the ancestor is left unset; use
/// [`map_sentence`] to resolve dependencies.
pub fn map_word(word: &RawWord) -> Result<Token, ParseError> {
    let pos: PartOfSpeech = word.pos.parse()?;
    let tags = MorphTags::parse(&word.morph)?;
    let feature_set = feature_set_from_tags(&tags, pos)?;
    trace!("mapped '{}' as {:?} with {:?}", word.text, pos, feature_set);
    Ok(Token::new(&word.text, &word.lemma, pos, feature_set))
}

/// Maps a whole sentence and links every token to its immediate ancestor.
///
/// Parents are resolved by position, so repeated surface forms keep their
/// own governors. A word that is its own parent is a root. Any failing
/// word fails the whole sentence.
pub fn map_sentence(words: &[RawWord]) -> Result<Sentence, ParseError> {
    // 1. Shape of every token, independent of context
    let mut tokens = words
        .iter()
        .enumerate()
        .map(|(index, word)| map_word(word).map_err(|e| e.in_word(index, &word.text)))
        .collect::<Result<Vec<_>, _>>()?;

    // 2. Depth-1 ancestors, once the whole sentence is known
    for (index, (token, word)) in tokens.iter_mut().zip(words).enumerate() {
        token.ancestor = word
            .head
            .filter(|&head| head != index)
            .map(TokenId::new);
    }

    let sentence = Sentence::new(tokens)?;
    debug!("mapped sentence of {} tokens", sentence.len());
    Ok(sentence)
}
