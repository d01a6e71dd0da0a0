//! Compiler backed by an external executable speaking JSON over stdio.

use super::{CompileFailure, CompileOutput, CompileRequest, Compiler};
use crate::config::CompilerConfig;
use serde::Deserialize;
use std::io;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Reply written by the compiler on stdout.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Reply {
    Files(CompileOutput),
    Error(CompileFailure),
}

/// Runs the configured command once per request.
///
/// The request is written to stdin as JSON. The command answers on stdout with
/// `{"files": {path: content}}` or `{"error": {"category": .., "message": ..}}`.
#[derive(Debug, Clone)]
pub struct ProcessCompiler {
    config: CompilerConfig,
}

impl ProcessCompiler {
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    async fn run(&self, request: &CompileRequest) -> Result<CompileOutput, CompileFailure> {
        let payload = serde_json::to_vec(request)
            .map_err(|e| CompileFailure::new("ProtocolError", e.to_string()))?;

        let mut child = Command::new(&self.config.command)
            .args(&self.config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                CompileFailure::new(
                    "SpawnError",
                    format!("Failed to start '{}': {}", self.config.command, e),
                )
            })?;

        // Feed stdin while stdout and stderr drain, so neither side blocks on a full pipe.
        let stdin = child.stdin.take();
        let feed = async move {
            if let Some(mut stdin) = stdin {
                stdin.write_all(&payload).await?;
                // Closing stdin signals end of request.
                drop(stdin);
            }
            Ok::<_, io::Error>(())
        };
        let (fed, output) = tokio::join!(feed, child.wait_with_output());

        let output = output.map_err(|e| CompileFailure::new("ProcessError", e.to_string()))?;

        // A compiler may answer without reading the whole request.
        let write_error = match fed {
            Ok(()) => None,
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                tracing::debug!("Compiler closed stdin before reading the full request");
                None
            }
            Err(e) => Some(e),
        };

        let reply = serde_json::from_slice::<Reply>(&output.stdout);
        if reply.is_err()
            && let Some(e) = write_error
        {
            return Err(CompileFailure::new(
                "ProcessError",
                format!("Failed to send request to compiler: {}", e),
            ));
        }

        match reply {
            Ok(Reply::Files(files)) => Ok(files),
            Ok(Reply::Error(failure)) => Err(failure),
            Err(_) if !output.status.success() => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(CompileFailure::new(
                    "ProcessError",
                    format!("Compiler exited with {}: {}", output.status, stderr.trim()),
                ))
            }
            Err(e) => Err(CompileFailure::new(
                "ProtocolError",
                format!("Unreadable compiler reply: {}", e),
            )),
        }
    }
}

impl Compiler for ProcessCompiler {
    async fn compile(&self, request: &CompileRequest) -> Result<CompileOutput, CompileFailure> {
        request.validate()?;

        tracing::info!(
            namespace = %request.namespace,
            command = %self.config.command,
            "Compiling sources"
        );

        let outcome = match tokio::time::timeout(self.config.timeout(), self.run(request)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(CompileFailure::new(
                "Timeout",
                format!(
                    "Compiler did not finish within {}s",
                    self.config.timeout_secs
                ),
            )),
        };

        match &outcome {
            Ok(files) => tracing::info!(files = files.len(), "Compilation succeeded"),
            Err(failure) => tracing::warn!(
                category = %failure.category,
                message = %failure.message,
                "Compilation failed"
            ),
        }

        outcome
    }
}
