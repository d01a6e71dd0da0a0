//! Boundary to the external compiler behind the try-it-out page.
//!
//! The compiler is opaque: it receives a namespace, the main source and the header source,
//! and answers with either generated files or an error category and message. Results are
//! shown verbatim and failures are never retried.

mod process;

pub use process::ProcessCompiler;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::LazyLock;

/// Minecraft namespaces are limited to this character set.
static NAMESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_.\-]+$").expect("valid namespace regex"));

/// Generated files, keyed by path inside the datapack.
pub type CompileOutput = BTreeMap<String, String>;

/// Inputs forwarded to the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileRequest {
    pub namespace: String,
    pub main_source: String,
    #[serde(default)]
    pub header_source: String,
}

impl CompileRequest {
    pub fn new(
        namespace: impl Into<String>,
        main_source: impl Into<String>,
        header_source: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            main_source: main_source.into(),
            header_source: header_source.into(),
        }
    }

    /// Reject namespaces the compiler could never accept.
    pub fn validate(&self) -> Result<(), CompileFailure> {
        if NAMESPACE_RE.is_match(&self.namespace) {
            Ok(())
        } else {
            Err(CompileFailure::new(
                "InvalidNamespace",
                format!(
                    "'{}' is not a valid namespace; use lowercase letters, digits, '_', '-' or '.'",
                    self.namespace
                ),
            ))
        }
    }
}

/// A failed compilation, as reported by the compiler or by the boundary itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{category}: {message}")]
pub struct CompileFailure {
    /// Error class name, e.g. `JMCSyntaxException`.
    pub category: String,
    pub message: String,
}

impl CompileFailure {
    pub fn new(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            message: message.into(),
        }
    }
}

/// Something that turns sources into datapack files.
pub trait Compiler {
    fn compile(
        &self,
        request: &CompileRequest,
    ) -> impl Future<Output = Result<CompileOutput, CompileFailure>> + Send;
}

/// Render a compile outcome for display without interpreting it.
///
/// Files are listed in path order, each under a `# path` line. A failure renders as
/// `category: message`.
pub fn render_outcome(outcome: &Result<CompileOutput, CompileFailure>) -> String {
    match outcome {
        Ok(files) if files.is_empty() => "(no files generated)\n".to_string(),
        Ok(files) => {
            let mut out = String::new();
            for (path, content) in files {
                let _ = writeln!(out, "# {}", path);
                out.push_str(content);
                if !content.ends_with('\n') {
                    out.push('\n');
                }
                out.push('\n');
            }
            out
        }
        Err(failure) => format!("{}\n", failure),
    }
}
