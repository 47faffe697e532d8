pub mod error;
pub mod feature_set;
pub mod features;
pub mod ids;
pub mod pos;
pub mod render;
pub mod sentence;
pub mod token;

// Re-export core types for convenience
pub use error::ParseError;
pub use feature_set::{FeatureSet, NounFeatureSet, VerbFeatureSet};
pub use features::{Case, Feature, FeatureKinds, Gender, Number, Person, Tense};
pub use ids::TokenId;
pub use pos::PartOfSpeech;
pub use render::{capitalize, TokenDisplay};
pub use sentence::Sentence;
pub use token::Token;
