//! Inputs to a discovery analysis: the product idea and the follow-up answers.

use serde_json::{Map, Value};

use crate::domain::foundation::{RequestId, ValidationError};

/// A user-written product description or customer problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductIdea(String);

impl ProductIdea {
    /// Creates a product idea, rejecting empty or whitespace-only text.
    ///
    /// The text is kept as written; only the emptiness check trims.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("product_idea"));
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProductIdea {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Answers to follow-up questions, keyed by question key, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    entries: Vec<(String, String)>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the answer for `key`. Re-answering keeps the original position.
    pub fn insert(&mut self, key: impl Into<String>, answer: impl Into<String>) {
        let key = key.into();
        let answer = answer.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = answer,
            None => self.entries.push((key, answer)),
        }
    }

    /// Builder-style variant of [`Answers::insert`].
    pub fn with(mut self, key: impl Into<String>, answer: impl Into<String>) -> Self {
        self.insert(key, answer);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parses answers from a JSON object of string values.
    pub fn from_json_str(json: &str) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| ValidationError::invalid_format("answers", e.to_string()))?;
        let Value::Object(map) = value else {
            return Err(ValidationError::invalid_format(
                "answers",
                "expected a JSON object",
            ));
        };

        let mut answers = Answers::new();
        for (key, value) in map {
            match value {
                Value::String(text) => answers.insert(key, text),
                other => {
                    return Err(ValidationError::invalid_format(
                        "answers",
                        format!("answer for '{}' must be a string, got {}", key, other),
                    ))
                }
            }
        }
        Ok(answers)
    }

    /// Renders the answers as pretty-printed JSON (2-space indent) for prompts.
    ///
    /// Non-ASCII characters are written as `\uXXXX` escapes.
    pub fn to_prompt_json(&self) -> String {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        serde_json::to_string_pretty(&Value::Object(map))
            .map(|json| escape_non_ascii(&json))
            .unwrap_or_else(|_| "{}".to_string())
    }
}

/// Escapes DEL and everything above ASCII, using surrogate pairs past the BMP.
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for c in json.chars() {
        if (c as u32) < 0x7F {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}

/// One discovery request: an idea plus the answers gathered for it.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    id: RequestId,
    product_idea: ProductIdea,
    answers: Answers,
}

impl AnalysisRequest {
    pub fn new(product_idea: ProductIdea, answers: Answers) -> Self {
        Self {
            id: RequestId::new(),
            product_idea,
            answers,
        }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn product_idea(&self) -> &ProductIdea {
        &self.product_idea
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// The idea followed by the answers, as embedded in every framework prompt.
    pub fn combined_input(&self) -> String {
        format!(
            "{}\n\nAdditional Context:\n{}",
            self.product_idea.as_str(),
            self.answers.to_prompt_json()
        )
    }
}

/// Raw follow-up question output, one entry per line of model text.
///
/// Lines are kept verbatim, blank and non-question lines included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowUpQuestions {
    lines: Vec<String>,
}

impl FollowUpQuestions {
    /// Splits model output on `\n`.
    pub fn from_raw(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    /// Every line, unfiltered.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Non-blank lines paired with their answer key (`q{line index}`).
    pub fn questions(&self) -> impl Iterator<Item = (String, &str)> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| (format!("q{}", i), line.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ───────────────────────────────────────────────────────────────
    // ProductIdea
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn product_idea_rejects_blank_text() {
        assert!(matches!(
            ProductIdea::new(""),
            Err(ValidationError::EmptyField { .. })
        ));
        assert!(ProductIdea::new("   \n\t").is_err());
    }

    #[test]
    fn product_idea_keeps_text_verbatim() {
        let idea = ProductIdea::new("  A fitness app  ").unwrap();
        assert_eq!(idea.as_str(), "  A fitness app  ");
    }

    // ───────────────────────────────────────────────────────────────
    // Answers
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn answers_preserve_insertion_order() {
        let answers = Answers::new()
            .with("q10", "ten")
            .with("q2", "two")
            .with("q0", "zero");

        let keys: Vec<_> = answers.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["q10", "q2", "q0"]);
    }

    #[test]
    fn reinserting_an_answer_keeps_its_position() {
        let mut answers = Answers::new().with("q0", "first").with("q1", "second");
        answers.insert("q0", "updated");

        assert_eq!(answers.len(), 2);
        assert_eq!(answers.get("q0"), Some("updated"));
        assert_eq!(answers.iter().next(), Some(("q0", "updated")));
    }

    #[test]
    fn empty_answers_render_as_empty_object() {
        assert_eq!(Answers::new().to_prompt_json(), "{}");
    }

    #[test]
    fn answers_render_as_indented_json() {
        let answers = Answers::new().with("q1", "Gym goers").with("q0", "No time");
        assert_eq!(
            answers.to_prompt_json(),
            "{\n  \"q1\": \"Gym goers\",\n  \"q0\": \"No time\"\n}"
        );
    }

    #[test]
    fn non_ascii_answers_are_escaped() {
        let answers = Answers::new().with("q0", "caf\u{e9} \u{2014} \u{1F680}");
        assert_eq!(
            answers.to_prompt_json(),
            "{\n  \"q0\": \"caf\\u00e9 \\u2014 \\ud83d\\ude80\"\n}"
        );
    }

    #[test]
    fn answers_parse_from_json_object() {
        let answers = Answers::from_json_str(r#"{"q3": "c", "q1": "a"}"#).unwrap();
        let keys: Vec<_> = answers.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["q3", "q1"]);
    }

    #[test]
    fn answers_reject_non_object_json() {
        assert!(Answers::from_json_str("[1, 2]").is_err());
        assert!(Answers::from_json_str(r#"{"q0": 5}"#).is_err());
        assert!(Answers::from_json_str("not json").is_err());
    }

    // ───────────────────────────────────────────────────────────────
    // AnalysisRequest
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn combined_input_appends_answers_as_context() {
        let request = AnalysisRequest::new(
            ProductIdea::new("Book gym classes").unwrap(),
            Answers::new().with("q0", "Busy professionals"),
        );

        assert_eq!(
            request.combined_input(),
            "Book gym classes\n\nAdditional Context:\n{\n  \"q0\": \"Busy professionals\"\n}"
        );
    }

    // ───────────────────────────────────────────────────────────────
    // FollowUpQuestions
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn follow_up_lines_are_kept_verbatim() {
        let questions = FollowUpQuestions::from_raw("Intro:\n\n1. Who?\n2. Why?\n");
        assert_eq!(questions.lines(), &["Intro:", "", "1. Who?", "2. Why?", ""]);
    }

    #[test]
    fn follow_up_questions_skip_blanks_but_keep_line_index_keys() {
        let questions = FollowUpQuestions::from_raw("1. Who?\n\n2. Why?");
        let pairs: Vec<_> = questions.questions().collect();
        assert_eq!(
            pairs,
            vec![("q0".to_string(), "1. Who?"), ("q2".to_string(), "2. Why?")]
        );
    }
}
