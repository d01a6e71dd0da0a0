//! Try-it-out compile handler.

use crate::sandbox::{CompileRequest, Compiler, render_outcome};
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CompileToolRequest {
    /// Datapack namespace (lowercase letters, digits, '_', '-', '.')
    pub namespace: String,
    /// Main source file contents
    pub main_source: String,
    /// Header file contents (default: empty)
    #[serde(default)]
    pub header_source: Option<String>,
}

impl From<CompileToolRequest> for CompileRequest {
    fn from(request: CompileToolRequest) -> Self {
        Self::new(
            request.namespace,
            request.main_source,
            request.header_source.unwrap_or_default(),
        )
    }
}

/// Compile and render the outcome verbatim. Failures come back as `Err`.
pub async fn handle_compile<C: Compiler>(
    compiler: &C,
    request: CompileToolRequest,
) -> Result<String, String> {
    let request = CompileRequest::from(request);
    let outcome = compiler.compile(&request).await;
    let rendered = render_outcome(&outcome);
    match outcome {
        Ok(_) => Ok(rendered),
        Err(_) => Err(rendered),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sandbox::{CompileFailure, CompileOutput};
    use assert2::check;
    use std::sync::Mutex;

    /// Records requests and replies with a fixed outcome.
    struct FixedCompiler {
        outcome: Result<CompileOutput, CompileFailure>,
        seen: Mutex<Vec<CompileRequest>>,
    }

    impl Compiler for FixedCompiler {
        async fn compile(
            &self,
            request: &CompileRequest,
        ) -> Result<CompileOutput, CompileFailure> {
            self.seen.lock().unwrap().push(request.clone());
            self.outcome.clone()
        }
    }

    fn tool_request() -> CompileToolRequest {
        CompileToolRequest {
            namespace: "demo".to_string(),
            main_source: "print(1);".to_string(),
            header_source: None,
        }
    }

    #[tokio::test]
    async fn test_success_is_rendered() {
        let mut files = CompileOutput::new();
        files.insert("pack.mcmeta".to_string(), "{}".to_string());
        let compiler = FixedCompiler {
            outcome: Ok(files),
            seen: Mutex::new(Vec::new()),
        };

        let result = handle_compile(&compiler, tool_request()).await;
        check!(result == Ok("# pack.mcmeta\n{}\n\n".to_string()));

        let seen = compiler.seen.lock().unwrap();
        check!(seen[0] == CompileRequest::new("demo", "print(1);", ""));
    }

    #[tokio::test]
    async fn test_failure_is_error() {
        let compiler = FixedCompiler {
            outcome: Err(CompileFailure::new("JMCSyntaxException", "bad")),
            seen: Mutex::new(Vec::new()),
        };

        let result = handle_compile(&compiler, tool_request()).await;
        check!(result == Err("JMCSyntaxException: bad\n".to_string()));
    }
}
