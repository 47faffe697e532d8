pub mod mapper;
pub mod record;

pub use mapper::{map_sentence, map_word};
pub use record::RawWord;
