use sena_common::openai::OpenAiClientError;

/// Display text doubles as the `detail` shown to API clients.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    /// Input shorter than the accepted minimum length.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Error llamando al modelo: {0}")]
    Upstream(#[from] OpenAiClientError),

    #[error("El modelo no devolvió respuesta válida")]
    EmptyAnswer,

    #[error("Error interno: {0}")]
    Internal(String),
}
