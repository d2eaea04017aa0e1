//! PromptBatch - Parsed request body
//!
//! Request bodies arrive as arbitrary JSON. They are parsed into a tagged
//! union first and then checked rule by rule, stopping at the first failure:
//!
//! 1. object with a `prompts` key, or a bare array
//! 2. the extracted value is an array
//! 3. every element is an object
//! 4. every element has both `prompt_1` and `prompt_2`
//!
//! Trimming and emptiness are checked per element while the batch is
//! processed, see [`RawPromptPair::validate`].

use serde_json::{Map, Value};

use super::PromptPair;
use crate::domain::errors::PromptValidationError;

const PROMPTS_KEY: &str = "prompts";
const PROMPT_1_KEY: &str = "prompt_1";
const PROMPT_2_KEY: &str = "prompt_2";

/// Accepted top-level shapes
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// `{"prompts": ...}`
    Envelope { prompts: Value },
    /// `[...]`
    Bare(Vec<Value>),
}

impl RequestBody {
    pub fn from_value(value: Value) -> Result<Self, PromptValidationError> {
        match value {
            Value::Object(mut map) => map
                .remove(PROMPTS_KEY)
                .map(|prompts| Self::Envelope { prompts })
                .ok_or(PromptValidationError::InvalidFormat),
            Value::Array(items) => Ok(Self::Bare(items)),
            _ => Err(PromptValidationError::InvalidFormat),
        }
    }
}

/// A prompt pair whose keys are present but whose values are not yet checked
#[derive(Debug, Clone, PartialEq)]
pub struct RawPromptPair {
    pub prompt_1: Value,
    pub prompt_2: Value,
}

impl RawPromptPair {
    fn from_object(mut object: Map<String, Value>) -> Result<Self, PromptValidationError> {
        match (object.remove(PROMPT_1_KEY), object.remove(PROMPT_2_KEY)) {
            (Some(prompt_1), Some(prompt_2)) => Ok(Self { prompt_1, prompt_2 }),
            _ => Err(PromptValidationError::MissingKeys),
        }
    }

    /// Trim and check both prompts
    pub fn validate(&self) -> Result<PromptPair, PromptValidationError> {
        PromptPair::from_values(&self.prompt_1, &self.prompt_2)
    }
}

/// An ordered batch of prompt pairs that passed shape validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptBatch {
    pairs: Vec<RawPromptPair>,
}

impl PromptBatch {
    /// Parse a raw request body
    pub fn from_slice(body: &[u8]) -> Result<Self, PromptValidationError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(PromptValidationError::InvalidFormat);
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| PromptValidationError::MalformedJson(e.to_string()))?;

        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, PromptValidationError> {
        RequestBody::from_value(value)?.try_into()
    }

    pub fn pairs(&self) -> &[RawPromptPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl TryFrom<RequestBody> for PromptBatch {
    type Error = PromptValidationError;

    fn try_from(body: RequestBody) -> Result<Self, Self::Error> {
        let items = match body {
            RequestBody::Envelope {
                prompts: Value::Array(items),
            } => items,
            RequestBody::Envelope { .. } => return Err(PromptValidationError::PromptsNotList),
            RequestBody::Bare(items) => items,
        };

        // Every element must be an object before any key is inspected
        let objects = items
            .into_iter()
            .map(|item| match item {
                Value::Object(object) => Ok(object),
                _ => Err(PromptValidationError::ItemNotObject),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let pairs = objects
            .into_iter()
            .map(RawPromptPair::from_object)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { pairs })
    }
}

impl IntoIterator for PromptBatch {
    type Item = RawPromptPair;
    type IntoIter = std::vec::IntoIter<RawPromptPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Result<PromptBatch, PromptValidationError> {
        PromptBatch::from_value(value)
    }

    #[test]
    fn test_envelope_and_bare_list_are_equivalent() {
        let items = json!([
            {"prompt_1": "bread", "prompt_2": "1 loaf"},
            {"prompt_1": "salad", "prompt_2": "2 bowls"}
        ]);

        let bare = parse(items.clone()).unwrap();
        let envelope = parse(json!({ "prompts": items })).unwrap();

        assert_eq!(bare, envelope);
        assert_eq!(bare.len(), 2);
        assert_eq!(bare.pairs()[1].prompt_1, json!("salad"));
    }

    #[test]
    fn test_scalar_body_is_invalid_format() {
        assert_eq!(parse(json!("bread")), Err(PromptValidationError::InvalidFormat));
        assert_eq!(parse(json!(12)), Err(PromptValidationError::InvalidFormat));
        assert_eq!(parse(Value::Null), Err(PromptValidationError::InvalidFormat));
    }

    #[test]
    fn test_object_without_prompts_is_invalid_format() {
        assert_eq!(
            parse(json!({"prompt_1": "bread", "prompt_2": "1 loaf"})),
            Err(PromptValidationError::InvalidFormat)
        );
    }

    #[test]
    fn test_prompts_must_be_a_list() {
        assert_eq!(
            parse(json!({"prompts": "bread"})),
            Err(PromptValidationError::PromptsNotList)
        );
        assert_eq!(
            parse(json!({"prompts": 3})),
            Err(PromptValidationError::PromptsNotList)
        );
        assert_eq!(
            parse(json!({"prompts": {"prompt_1": "a", "prompt_2": "b"}})),
            Err(PromptValidationError::PromptsNotList)
        );
    }

    #[test]
    fn test_items_must_be_objects() {
        assert_eq!(
            parse(json!([{"prompt_1": "a", "prompt_2": "b"}, "c"])),
            Err(PromptValidationError::ItemNotObject)
        );
    }

    #[test]
    fn test_object_check_runs_before_key_check() {
        // first item lacks keys, second is not an object
        assert_eq!(
            parse(json!([{"prompt_1": "a"}, 7])),
            Err(PromptValidationError::ItemNotObject)
        );
    }

    #[test]
    fn test_items_need_both_keys() {
        assert_eq!(
            parse(json!({"prompts": [{"prompt_1": "a"}]})),
            Err(PromptValidationError::MissingKeys)
        );
        assert_eq!(
            parse(json!([{"prompt_2": "b"}])),
            Err(PromptValidationError::MissingKeys)
        );
    }

    #[test]
    fn test_empty_values_pass_shape_validation() {
        let batch = parse(json!([{"prompt_1": "  ", "prompt_2": "b"}])).unwrap();
        assert_eq!(
            batch.pairs()[0].validate(),
            Err(PromptValidationError::EmptyPrompt)
        );
    }

    #[test]
    fn test_empty_list_is_an_empty_batch() {
        assert!(parse(json!([])).unwrap().is_empty());
        assert!(parse(json!({"prompts": []})).unwrap().is_empty());
    }

    #[test]
    fn test_from_slice_rejects_malformed_json() {
        assert!(matches!(
            PromptBatch::from_slice(b"{\"prompts\": ["),
            Err(PromptValidationError::MalformedJson(_))
        ));
        assert_eq!(
            PromptBatch::from_slice(b"  "),
            Err(PromptValidationError::InvalidFormat)
        );
    }
}
