/// MCP server for SENA-Mate.
///
/// Exposes two tools:
/// - `prepare_pr`: review checklist for a pull request title and description
/// - `ask`: free-form question answered by the configured chat model
use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};

use sena_common::mcp_api::{AskParams, AskResponse, PrepPrParams, PrepPrResponse};

use crate::assistant::Assistant;

#[derive(Clone)]
pub struct SenaMateServer {
    assistant: Assistant,
    tool_router: ToolRouter<SenaMateServer>,
}

impl SenaMateServer {
    pub fn new(assistant: Assistant) -> Self {
        Self {
            assistant,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl SenaMateServer {
    #[tool(description = "Build a review checklist for a pull request. Always includes the baseline checklist, followed by items from templates whose keywords overlap the title and description, best matches first.")]
    async fn prepare_pr(
        &self,
        Parameters(params): Parameters<PrepPrParams>,
    ) -> Result<Json<PrepPrResponse>, String> {
        let resp = self
            .assistant
            .prepare_pr(&params.title, &params.description)
            .map_err(|e| e.to_string())?;
        Ok(Json(resp))
    }

    #[tool(description = "Ask the SENA-Mate assistant a free-form question. The configured system prompt is sent along with the question.")]
    async fn ask(
        &self,
        Parameters(params): Parameters<AskParams>,
    ) -> Result<Json<AskResponse>, String> {
        let resp = self
            .assistant
            .ask(&params.question)
            .await
            .map_err(|e| e.to_string())?;
        Ok(Json(resp))
    }
}

#[tool_handler]
impl ServerHandler for SenaMateServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "sena-mate".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "SENA-Mate assistant. Use prepare_pr with a pull request title and description \
to get a review checklist tailored to it, and ask for general questions."
                    .to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SenaMateServer;

    #[test]
    fn tools_publish_output_schemas() {
        let tools = SenaMateServer::tool_router().list_all();
        for name in ["prepare_pr", "ask"] {
            let tool = tools
                .iter()
                .find(|t| t.name == name)
                .unwrap_or_else(|| panic!("missing tool: {name}"));
            assert!(
                tool.output_schema.is_some(),
                "tool {name} should publish output_schema"
            );
        }
    }
}
