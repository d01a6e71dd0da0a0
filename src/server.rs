//! MCP server implementation and shared site state.

use crate::catalog::{self, DocEntry};
use crate::config::Config;
use crate::sandbox::ProcessCompiler;
use crate::tools::{
    CompileToolRequest, LocateRequest, SearchRequest, handle_compile, handle_locate, handle_search,
};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{self, JsonSchema, generate::SchemaSettings},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// Everything a tool call needs: the entry list, configuration and the compiler.
#[derive(Debug)]
pub struct SiteState {
    entries: &'static [DocEntry],
    config: Config,
    compiler: ProcessCompiler,
}

impl SiteState {
    /// State over the builtin catalog.
    pub fn new(config: Config) -> Self {
        Self::with_entries(catalog::catalog(), config)
    }

    pub fn with_entries(entries: &'static [DocEntry], config: Config) -> Self {
        let compiler = ProcessCompiler::new(config.compiler.clone());
        Self {
            entries,
            config,
            compiler,
        }
    }

    pub fn entries(&self) -> &'static [DocEntry] {
        self.entries
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn compiler(&self) -> &ProcessCompiler {
        &self.compiler
    }
}

/// MCP server for the datapack language documentation.
#[derive(Clone)]
pub struct DocsServer {
    state: Arc<SiteState>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for DocsServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocsServer")
            .field("state", &self.state)
            .finish()
    }
}

#[tool_router]
impl DocsServer {
    pub fn new(state: Arc<SiteState>) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    pub fn state(&self) -> &Arc<SiteState> {
        &self.state
    }

    #[tool(
        description = "Search the language documentation. Matches entry titles and hidden keywords case-insensitively; any whitespace-separated term may match, and \"double quotes\" group a phrase. Returns the visible entries with their anchor ids.",
        input_schema = inline_schema_for_type::<SearchRequest>()
    )]
    fn search_docs(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        Ok(handle_search(self.state.entries(), &request))
    }

    #[tool(
        description = "Resolve a documentation deep link. Reports which section the fragment scrolls to and whether a collapsible section is expanded.",
        input_schema = inline_schema_for_type::<LocateRequest>()
    )]
    async fn locate_section(
        &self,
        Parameters(request): Parameters<LocateRequest>,
    ) -> std::result::Result<String, String> {
        Ok(handle_locate(
            self.state.entries(),
            &self.state.config().navigation,
            &request,
        )
        .await)
    }

    #[tool(
        description = "Compile a program into datapack files with the external compiler. Returns each generated file under a '# path' header, or the compiler's error category and message.",
        input_schema = inline_schema_for_type::<CompileToolRequest>()
    )]
    async fn compile(
        &self,
        Parameters(request): Parameters<CompileToolRequest>,
    ) -> std::result::Result<String, String> {
        handle_compile(self.state.compiler(), request).await
    }
}

#[tool_handler]
impl ServerHandler for DocsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "datapack-docs: documentation and try-it-out compiler for a datapack \
                 preprocessor language. Use search_docs to find pages, locate_section to \
                 resolve '#anchor' links, and compile to run the compiler.",
            )
    }
}

/// Generate an inline JSON schema for MCP tools
///
/// Unlike rmcp's default `schema_for_type()`, this function sets `inline_subschemas = true`
/// to generate inline definitions instead of $ref patterns.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();
    let object = serde_json::to_value(schema).expect("failed to serialize schema");

    let json_object = match object {
        serde_json::Value::Object(object) => object,
        _ => panic!("Schema serialization produced non-object value"),
    };

    Arc::new(json_object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_site_state_uses_builtin_catalog() {
        let state = SiteState::new(Config::default());
        check!(std::ptr::eq(state.entries(), catalog::catalog()));
        check!(state.config().compiler.command == "jmc");
    }

    #[test]
    fn test_inline_schema_lists_fields() {
        let schema = inline_schema_for_type::<CompileToolRequest>();
        let properties = schema.get("properties").and_then(|p| p.as_object());
        check!(properties.is_some_and(|p| p.contains_key("namespace")));
        check!(properties.is_some_and(|p| p.contains_key("main_source")));
    }

    #[test]
    fn test_server_info_enables_tools() {
        let server = DocsServer::new(Arc::new(SiteState::new(Config::default())));
        let info = server.get_info();
        check!(info.capabilities.tools.is_some());
        check!(info.protocol_version == ProtocolVersion::V_2024_11_05);
        check!(info.instructions.is_some_and(|text| text.contains("search_docs")));
    }

    #[test]
    fn test_search_docs_answers_without_runtime() {
        let server = DocsServer::new(Arc::new(SiteState::new(Config::default())));
        let request = SearchRequest {
            query: "Timer".to_string(),
            limit: None,
        };
        let output = server.search_docs(Parameters(request));
        check!(output.is_ok_and(|text| text.contains("(#timer-add)")));
    }
}
