use checklist_engine::{ChecklistResult, TemplateMatch};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PrepPrParams {
    /// Pull request title (at least 5 characters).
    pub title: String,
    /// Pull request description (at least 10 characters).
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AskParams {
    /// A clear question for the assistant (at least 5 characters).
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MatchedTemplate {
    pub template_title: String,
    pub score: usize,
    pub added: Vec<String>,
}

impl From<TemplateMatch> for MatchedTemplate {
    fn from(m: TemplateMatch) -> Self {
        Self {
            template_title: m.template_title,
            score: m.score,
            added: m.added,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PrepPrResponse {
    pub title: String,
    pub description: String,
    pub checklist: Vec<String>,
    pub matched_templates: Vec<MatchedTemplate>,
    pub prompt_used: String,
    pub source: String,
}

impl PrepPrResponse {
    pub fn from_result(result: ChecklistResult, source: impl Into<String>) -> Self {
        Self {
            title: result.title,
            description: result.description,
            checklist: result.checklist,
            matched_templates: result
                .matched_templates
                .into_iter()
                .map(MatchedTemplate::from)
                .collect(),
            prompt_used: result.prompt_used,
            source: source.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AskResponse {
    pub question: String,
    pub answer: String,
    pub prompt_used: String,
    /// Model that produced the answer.
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HfAskResponse {
    pub answer: String,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}
