#![allow(async_fn_in_trait)]

use std::io::Read as _;
use std::path::PathBuf;
use std::process::Stdio;

#[cfg(test)]
use mockall::automock;
use tokio::process::Command;
use tracing::debug;

use crate::error::Result;
use crate::error::SelectError;

// -----------------------------------------------------------------------------
// GitOps trait

/// Operations for interacting with Git
#[cfg_attr(test, automock)]
pub trait GitOps {
    /// Resolve the git executable on the search path.
    fn locate(&self) -> Result<PathBuf>;

    /// Run git with `args` and return everything it printed.
    /// Stdout and stderr are interleaved in the order git wrote them.
    async fn run(&self, args: Vec<String>) -> Result<String>;
}

/// Render a command line the way it is reported in diagnostics.
pub fn command_line(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

// -----------------------------------------------------------------------------
// RealGit

/// Real implementation that calls the git CLI
pub struct RealGit {
    program: String,
    path: PathBuf,
}

impl RealGit {
    pub fn new(program: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            path: path.into(),
        }
    }
}

impl GitOps for RealGit {
    fn locate(&self) -> Result<PathBuf> {
        which::which(&self.program).map_err(|err| SelectError::ExecutableNotFound {
            program: self.program.clone(),
            reason: err.to_string(),
        })
    }

    async fn run(&self, args: Vec<String>) -> Result<String> {
        let command = command_line(&self.program, &args);
        debug!(%command, path = %self.path.display(), "running");

        // stdout and stderr share one pipe so output keeps the order git wrote it in
        let (mut reader, writer) = std::io::pipe()?;
        let mut child = {
            let mut cmd = Command::new(&self.program);
            cmd.current_dir(&self.path)
                .args(&args)
                .stdin(Stdio::null())
                .stdout(Stdio::from(writer.try_clone()?))
                .stderr(Stdio::from(writer));
            // `cmd` holds the parent's write ends; it must drop before reading to EOF
            cmd.spawn().map_err(|source| SelectError::Launch {
                command: command.clone(),
                source,
            })?
        };

        let captured = tokio::task::spawn_blocking(move || {
            let mut buf = Vec::new();
            reader.read_to_end(&mut buf).map(|_| buf)
        })
        .await
        .map_err(std::io::Error::other)??;
        let status = child.wait().await?;

        let captured = String::from_utf8_lossy(&captured).into_owned();

        if !status.success() {
            return Err(SelectError::CommandFailed {
                command,
                status: status.to_string(),
                output: captured,
            });
        }

        Ok(captured)
    }
}
