use serde::{Deserialize, Serialize};

/// One word as annotated by the NLP pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawWord {
    pub text: String,
    pub lemma: String,
    /// Universal part-of-speech code, e.g. `"NOUN"`.
    pub pos: String,
    /// Pipe-delimited Universal Features, e.g. `"Case=Nom|Number=Sing"`.
    #[serde(default)]
    pub morph: String,
    /// Position of the syntactic parent within the sentence. The parser
    /// marks roots either with `None` or with their own position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<usize>,
}

impl RawWord {
    pub fn new(
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: impl Into<String>,
        morph: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos: pos.into(),
            morph: morph.into(),
            head: None,
        }
    }

    pub fn with_head(mut self, head: usize) -> Self {
        self.head = Some(head);
        self
    }
}
