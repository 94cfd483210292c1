use std::sync::Arc;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use tracing::{debug, info};

use crate::{config::AuditSettings, utils::current_thread_runtime};

use super::types::{AuditTranslationsParams, ConfigDto, ConfigValues};

#[derive(Clone)]
pub struct TranscheckMcpServer {
    settings: Arc<AuditSettings>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TranscheckMcpServer {
    pub fn new(settings: AuditSettings) -> Self {
        Self {
            settings: Arc::new(settings),
            tool_router: Self::tool_router(),
        }
    }

    pub fn settings(&self) -> &AuditSettings {
        &self.settings
    }

    /// Audit translation catalogs for keys missing from non-base languages
    #[tool(
        description = "Compare every language's translation catalogs against the base language and list missing keys per namespace. Optionally restrict the audit to one namespace."
    )]
    pub async fn audit_translations(
        &self,
        params: Parameters<AuditTranslationsParams>,
    ) -> Result<CallToolResult, McpError> {
        let namespace = params.0.namespace.as_deref();
        debug!(namespace, "audit_translations called");

        match self.settings.auditor().run(namespace).await {
            Ok(report) => Ok(CallToolResult::success(vec![Content::text(
                report.to_string(),
            )])),
            Err(err) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Audit could not run: {}\nLocales root checked: {}",
                err,
                self.settings.locales_root.display()
            ))])),
        }
    }

    /// Report where translations are read from
    #[tool(
        description = "Show the resolved locales root, base language and language list the audit uses."
    )]
    pub async fn check_environment(&self) -> Result<CallToolResult, McpError> {
        let settings = &self.settings;
        let config_source = settings
            .config_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "(defaults)".to_string());

        let text = format!(
            "transcheck {}\nLocales root: {}\nBase language: {}\nLanguages: {}\nConfig: {}",
            env!("CARGO_PKG_VERSION"),
            settings.locales_root.display(),
            settings.languages.base(),
            settings.languages.all().join(", "),
            config_source
        );

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Get the effective transcheck configuration
    #[tool(description = "Get the current transcheck configuration.")]
    pub async fn get_config(&self) -> Result<CallToolResult, McpError> {
        let settings = &self.settings;
        let config_dto = ConfigDto {
            from_file: settings.config_path.is_some(),
            config_path: settings
                .config_path
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            resolved_locales_root: settings.locales_root.to_string_lossy().to_string(),
            config: ConfigValues::from(settings.config.clone()),
        };

        let json_str = serde_json::to_string_pretty(&config_dto).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }
}

#[tool_handler]
impl ServerHandler for TranscheckMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Transcheck MCP reports translation keys that exist in the base language \
                 but are missing from other languages.\n\n\
                 Available tools:\n\
                 1. check_environment - Show the locales root and languages in use\n\
                 2. get_config - Get the effective configuration\n\
                 3. audit_translations - List missing keys per namespace and language \
                 (optional 'namespace' argument)\n\n\
                 A result flagged as an error means the audit could not run \
                 (for example, the locales root does not exist). Missing keys are \
                 reported as a normal result."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server(settings: AuditSettings) -> Result<()> {
    info!(locales_root = %settings.locales_root.display(), "starting MCP server");
    current_thread_runtime()?.block_on(async {
        let service = TranscheckMcpServer::new(settings);
        let server = service.serve(rmcp::transport::stdio()).await?;
        server.waiting().await?;
        Ok(())
    })
}
