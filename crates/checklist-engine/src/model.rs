use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_SYSTEM_PROMPT: &str = "no prompt loaded";

/// A predefined checklist pattern. `title` and `description` are only used as
/// a matching signature.
///
/// Deserialization never fails on shape: absent or non-string text fields
/// become `""`, an absent or non-array `checklist` becomes empty and
/// non-string checklist entries are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub checklist: Vec<String>,
}

impl Template {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        checklist: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            checklist: checklist.into_iter().map(Into::into).collect(),
        }
    }
}

/// Immutable configuration snapshot handed to the engine for one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSnapshot {
    #[serde(default = "default_system", deserialize_with = "lenient_system")]
    pub system: String,
    #[serde(default, deserialize_with = "lenient_templates")]
    pub few_shots: Vec<Template>,
}

impl Default for PromptSnapshot {
    fn default() -> Self {
        Self {
            system: default_system(),
            few_shots: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMatch {
    pub template_title: String,
    pub score: usize,
    pub added: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistResult {
    pub title: String,
    pub description: String,
    pub checklist: Vec<String>,
    /// Score-descending; ties keep template order.
    pub matched_templates: Vec<TemplateMatch>,
    pub prompt_used: String,
}

fn default_system() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

fn lenient_string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_system<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::String(s) => s,
        _ => default_system(),
    })
}

fn lenient_string_list<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_templates<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<Template>, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Array(items) => items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}
