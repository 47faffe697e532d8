use core::fmt;

use serde::{Deserialize, Serialize};

/// Position of a token within its sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct TokenId(pub usize);

impl TokenId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for TokenId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<TokenId> for usize {
    fn from(id: TokenId) -> usize {
        id.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
