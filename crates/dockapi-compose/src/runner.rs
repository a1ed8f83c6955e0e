//! Compose subprocess execution.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use dockapi_common::constants::COMPOSE_PROGRAM;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

use crate::command::ComposeInvocation;
use crate::error::{ComposeError, Result};

/// Output of a successful compose run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeOutput {
    /// Standard output and standard error, interleaved in arrival order.
    pub output: String,
}

/// Runs compose subcommands against one project.
#[async_trait]
pub trait ComposeRunner: Send + Sync {
    /// Runs the invocation to completion.
    ///
    /// Dropping the returned future kills the child process.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be started or exits
    /// unsuccessfully.
    async fn run(&self, invocation: &ComposeInvocation) -> Result<ComposeOutput>;
}

/// Runs `<program> compose ...` as a child process in the project directory.
#[derive(Debug, Clone)]
pub struct DockerCompose {
    program: PathBuf,
    project_dir: PathBuf,
}

impl DockerCompose {
    /// Creates a runner for an explicit program.
    pub fn new(program: impl Into<PathBuf>, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            project_dir: project_dir.into(),
        }
    }

    /// Creates a runner for the `docker` binary found on `PATH`.
    ///
    /// When the binary is missing a warning is logged and the bare program
    /// name is kept, so each compose request fails with a spawn error
    /// instead of the server refusing to start.
    pub fn locate(project_dir: impl Into<PathBuf>) -> Self {
        let program = which::which(COMPOSE_PROGRAM).unwrap_or_else(|e| {
            tracing::warn!(
                program = COMPOSE_PROGRAM,
                error = %e,
                "compose program not found on PATH"
            );
            PathBuf::from(COMPOSE_PROGRAM)
        });
        Self::new(program, project_dir)
    }

    /// Program invoked for each run.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Working directory of each run.
    #[must_use]
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    fn spawn_error(&self, source: std::io::Error) -> ComposeError {
        ComposeError::Spawn {
            program: self.program.clone(),
            source,
        }
    }
}

#[async_trait]
impl ComposeRunner for DockerCompose {
    async fn run(&self, invocation: &ComposeInvocation) -> Result<ComposeOutput> {
        if !self.project_dir.is_dir() {
            return Err(ComposeError::ProjectDir {
                path: self.project_dir.clone(),
            });
        }

        let args = invocation.args();
        tracing::debug!(
            program = %self.program.display(),
            dir = %self.project_dir.display(),
            args = ?args,
            "running compose"
        );

        let mut child = Command::new(&self.program)
            .args(&args)
            .current_dir(&self.project_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
            return Err(self.spawn_error(std::io::Error::other("child pipes unavailable")));
        };

        let combined = read_interleaved(stdout, stderr)
            .await
            .map_err(|e| self.spawn_error(e))?;
        let status = child.wait().await.map_err(|e| self.spawn_error(e))?;
        let output = String::from_utf8_lossy(&combined).into_owned();

        if !status.success() {
            return Err(ComposeError::Failed {
                operation: invocation.operation,
                status,
                output,
            });
        }

        tracing::debug!(operation = %invocation.operation, output = %output, "compose output");
        Ok(ComposeOutput { output })
    }
}

/// Reads two pipes to EOF, appending chunks to one buffer as they arrive.
async fn read_interleaved<A, B>(mut first: A, mut second: B) -> std::io::Result<Vec<u8>>
where
    A: AsyncRead + Unpin,
    B: AsyncRead + Unpin,
{
    let mut combined = Vec::new();
    let mut first_buf = [0u8; 4096];
    let mut second_buf = [0u8; 4096];
    let mut first_open = true;
    let mut second_open = true;

    while first_open || second_open {
        tokio::select! {
            n = first.read(&mut first_buf), if first_open => {
                match n? {
                    0 => first_open = false,
                    n => combined.extend_from_slice(&first_buf[..n]),
                }
            }
            n = second.read(&mut second_buf), if second_open => {
                match n? {
                    0 => second_open = false,
                    n => combined.extend_from_slice(&second_buf[..n]),
                }
            }
        }
    }

    Ok(combined)
}
