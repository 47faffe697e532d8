use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::features::FeatureKinds;
use crate::ids::TokenId;
use crate::render::TokenDisplay;
use crate::token::Token;

/// The ordered tokens of one sentence. Owns every token; ancestors are
/// positions into the same sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Token>", into = "Vec<Token>")]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    /// Wraps tokens after checking that every ancestor points at another
    /// token of the sentence and every feature set matches its part of
    /// speech.
    pub fn new(tokens: Vec<Token>) -> Result<Self, ParseError> {
        for (index, token) in tokens.iter().enumerate() {
            check_shape(token)?;
            if let Some(ancestor) = token.ancestor {
                if ancestor.index() == index {
                    return Err(ParseError::SelfAncestor { index });
                }
                if ancestor.index() >= tokens.len() {
                    return Err(ParseError::AncestorOutOfRange {
                        index,
                        ancestor: ancestor.index(),
                        len: tokens.len(),
                    });
                }
            }
        }
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &Token)> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(index, token)| (TokenId(index), token))
    }

    /// The immediate syntactic governor of the token at `id`.
    pub fn ancestor(&self, id: TokenId) -> Option<&Token> {
        let ancestor = self.get(id)?.ancestor?;
        self.get(ancestor)
    }

    /// Human-readable rendering of the token at `id`, ancestor included.
    pub fn display(&self, id: TokenId) -> Option<TokenDisplay<'_>> {
        let token = self.get(id)?;
        Some(token.display(self.ancestor(id)))
    }
}

fn check_shape(token: &Token) -> Result<(), ParseError> {
    let required = token.pos.required_features();
    let present = token
        .feature_set
        .map_or(FeatureKinds::empty(), |features| features.kinds());
    if required == present {
        Ok(())
    } else if present.is_empty() {
        Err(ParseError::MissingFeatures {
            pos: token.pos,
            missing: required,
        })
    } else {
        Err(ParseError::UnexpectedFeatures {
            pos: token.pos,
            found: present,
        })
    }
}

impl TryFrom<Vec<Token>> for Sentence {
    type Error = ParseError;

    fn try_from(tokens: Vec<Token>) -> Result<Self, Self::Error> {
        Sentence::new(tokens)
    }
}

impl From<Sentence> for Vec<Token> {
    fn from(sentence: Sentence) -> Self {
        sentence.tokens
    }
}

impl<'a> IntoIterator for &'a Sentence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
