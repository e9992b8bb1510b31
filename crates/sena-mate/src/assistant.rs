/// Request handling shared by the HTTP and MCP front ends.
///
/// Applies boundary validation, then delegates to the checklist engine or the
/// chat model. The prompt snapshot is loaded once at startup and never
/// mutated, so concurrent requests need no coordination.
use std::sync::Arc;

use checklist_engine::{build_checklist, PromptSnapshot};
use sena_common::mcp_api::{AskResponse, HfAskResponse, PrepPrResponse};
use sena_common::openai::{ChatCompletionRequest, Message, OpenAiClient};
use tracing::{info, warn};

use crate::error::AppError;

pub const PROMPT_SOURCE: &str = "prompt.json";

const MIN_TITLE_CHARS: usize = 5;
const MIN_DESCRIPTION_CHARS: usize = 10;
const MIN_TRIMMED_TITLE_CHARS: usize = 3;
const MIN_TRIMMED_DESCRIPTION_CHARS: usize = 5;
const MIN_QUESTION_CHARS: usize = 5;

#[derive(Clone)]
pub struct Assistant {
    prompt: Arc<PromptSnapshot>,
    openai: Arc<OpenAiClient>,
    chat_model: String,
}

impl Assistant {
    pub fn new(prompt: Arc<PromptSnapshot>, openai: Arc<OpenAiClient>, chat_model: String) -> Self {
        Self {
            prompt,
            openai,
            chat_model,
        }
    }

    pub fn chat_model(&self) -> &str {
        &self.chat_model
    }

    pub fn prepare_pr(&self, title: &str, description: &str) -> Result<PrepPrResponse, AppError> {
        info!(title, description_len = description.len(), "prepare_pr request");

        if title.chars().count() < MIN_TITLE_CHARS {
            return Err(AppError::Validation(format!(
                "El título debe tener al menos {MIN_TITLE_CHARS} caracteres"
            )));
        }
        if description.chars().count() < MIN_DESCRIPTION_CHARS {
            return Err(AppError::Validation(format!(
                "La descripción debe tener al menos {MIN_DESCRIPTION_CHARS} caracteres"
            )));
        }
        if title.trim().chars().count() < MIN_TRIMMED_TITLE_CHARS
            || description.trim().chars().count() < MIN_TRIMMED_DESCRIPTION_CHARS
        {
            return Err(AppError::BadRequest(
                "Título o descripción demasiado cortos".to_string(),
            ));
        }

        let result = build_checklist(title, description, &self.prompt);
        info!(
            checklist_len = result.checklist.len(),
            matched_templates = result.matched_templates.len(),
            "checklist built"
        );
        if result.checklist.is_empty() {
            return Err(AppError::Internal(
                "No se pudo generar un checklist válido.".to_string(),
            ));
        }

        Ok(PrepPrResponse::from_result(result, PROMPT_SOURCE))
    }

    pub async fn ask(&self, question: &str) -> Result<AskResponse, AppError> {
        let question = validate_question(question)?;
        let answer = self.answer(question).await?;
        Ok(AskResponse {
            question: question.to_string(),
            answer,
            prompt_used: self.prompt.system.clone(),
            source: self.chat_model.clone(),
        })
    }

    pub async fn hf_ask(&self, question: &str) -> Result<HfAskResponse, AppError> {
        let question = validate_question(question)?;
        let answer = self.answer(question).await?;
        Ok(HfAskResponse {
            answer,
            source: self.chat_model.clone(),
        })
    }

    async fn answer(&self, question: &str) -> Result<String, AppError> {
        let request = ChatCompletionRequest {
            model: self.chat_model.clone(),
            messages: vec![
                Message::system(self.prompt.system.clone()),
                Message::user(question),
            ],
        };
        info!(
            model = %self.chat_model,
            system_prompt_len = self.prompt.system.len(),
            "asking model"
        );

        let response = self
            .openai
            .chat_completions(request)
            .await
            .inspect_err(|e| warn!(error = %e, model = %self.chat_model, "model call failed"))?;

        let answer = response.first_text().ok_or_else(|| {
            warn!(model = %self.chat_model, "model response had no answer");
            AppError::EmptyAnswer
        })?;
        info!(answer_len = answer.len(), "model answered");
        Ok(answer)
    }
}

/// Returns the trimmed question.
fn validate_question(question: &str) -> Result<&str, AppError> {
    if question.chars().count() < MIN_QUESTION_CHARS {
        return Err(AppError::Validation(format!(
            "La pregunta debe tener al menos {MIN_QUESTION_CHARS} caracteres"
        )));
    }
    let trimmed = question.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("La pregunta está vacía".to_string()));
    }
    Ok(trimmed)
}
