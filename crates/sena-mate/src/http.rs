/// HTTP front end.
///
/// - `GET /`: liveness message
/// - `POST /ask`, `POST /hf_ask`: free-form questions to the chat model
/// - `POST /prepPR`: review checklist for a pull request title and description
///
/// Errors are returned as `{"detail": "..."}`.
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::error;

use sena_common::mcp_api::{
    AskParams, AskResponse, HfAskResponse, PrepPrParams, PrepPrResponse, RootResponse,
};

use crate::assistant::Assistant;
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

pub fn router(assistant: Assistant) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/ask", post(ask))
        .route("/hf_ask", post(hf_ask))
        .route("/prepPR", post(prepare_pr))
        .with_state(assistant)
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "SENA-Mate API funcionando (prompt.json integrado)".to_string(),
    })
}

async fn ask(
    State(assistant): State<Assistant>,
    request: Result<Json<AskParams>, JsonRejection>,
) -> Result<Json<AskResponse>, ApiError> {
    let Json(request) = request.map_err(rejection_error)?;
    let resp = assistant.ask(&request.question).await.map_err(api_error)?;
    Ok(Json(resp))
}

async fn hf_ask(
    State(assistant): State<Assistant>,
    request: Result<Json<AskParams>, JsonRejection>,
) -> Result<Json<HfAskResponse>, ApiError> {
    let Json(request) = request.map_err(rejection_error)?;
    let resp = assistant.hf_ask(&request.question).await.map_err(api_error)?;
    Ok(Json(resp))
}

async fn prepare_pr(
    State(assistant): State<Assistant>,
    request: Result<Json<PrepPrParams>, JsonRejection>,
) -> Result<Json<PrepPrResponse>, ApiError> {
    let Json(request) = request.map_err(rejection_error)?;
    let resp = assistant
        .prepare_pr(&request.title, &request.description)
        .map_err(api_error)?;
    Ok(Json(resp))
}

fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        AppError::EmptyAnswer => StatusCode::BAD_GATEWAY,
        AppError::Upstream(_) | AppError::Config(_) | AppError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn api_error(err: AppError) -> ApiError {
    let status = status_for(&err);
    if status.is_server_error() {
        error!(error = %err, status = status.as_u16(), "request failed");
    }
    (
        status,
        Json(ErrorBody {
            detail: err.to_string(),
        }),
    )
}

/// Malformed, incomplete or non-JSON bodies keep the `detail` error shape.
fn rejection_error(rejection: JsonRejection) -> ApiError {
    (
        rejection.status(),
        Json(ErrorBody {
            detail: rejection.body_text(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use tokio::net::TcpListener;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::assistant::tests::assistant;

    #[tokio::test]
    async fn prep_pr_returns_checklist() {
        let Json(resp) = prepare_pr(
            State(assistant("http://127.0.0.1:9")),
            Ok(Json(PrepPrParams {
                title: "Arreglo de bug en login".to_string(),
                description: "Se corrigió un error de autenticación".to_string(),
            })),
        )
        .await
        .unwrap();
        assert_eq!(resp.matched_templates[0].template_title, "Bug fix");
        assert_eq!(resp.source, "prompt.json");
    }

    #[tokio::test]
    async fn prep_pr_short_title_is_unprocessable() {
        let (status, Json(body)) = prepare_pr(
            State(assistant("http://127.0.0.1:9")),
            Ok(Json(PrepPrParams {
                title: "Fix".to_string(),
                description: "Se corrigió un error de autenticación".to_string(),
            })),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.detail.contains("título"));
    }

    #[tokio::test]
    async fn blank_question_is_bad_request() {
        let (status, _) = ask(
            State(assistant("http://127.0.0.1:9")),
            Ok(Json(AskParams {
                question: "        ".to_string(),
            })),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn empty_model_answer_is_bad_gateway() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let (status, _) = hf_ask(
            State(assistant(&server.uri())),
            Ok(Json(AskParams {
                question: "¿Qué es Git?".to_string(),
            })),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn internal_errors_map_to_500() {
        assert_eq!(
            status_for(&AppError::Internal("boom".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    async fn spawn_router() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(assistant("http://127.0.0.1:9")))
                .await
                .unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn missing_field_keeps_detail_shape() {
        let base = spawn_router().await;
        let resp = reqwest::Client::new()
            .post(format!("{base}/prepPR"))
            .json(&json!({"title": "Arreglo de login"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 422);

        let body: Value = resp.json().await.unwrap();
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.contains("description"), "detail: {detail}");
    }

    #[tokio::test]
    async fn non_json_body_keeps_detail_shape() {
        let base = spawn_router().await;
        let resp = reqwest::Client::new()
            .post(format!("{base}/ask"))
            .body("question=hola")
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 415);

        let body: Value = resp.json().await.unwrap();
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn root_reports_running() {
        let base = spawn_router().await;
        let body: Value = reqwest::get(format!("{base}/"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["message"], "SENA-Mate API funcionando (prompt.json integrado)");
    }
}
