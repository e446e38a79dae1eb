use crate::core::PackageLister;
use crate::utils::error::ProcessError;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

pub const DEFAULT_PROGRAM: &str = "npx";
pub const DEFAULT_ARGS: [&str; 4] = ["lerna", "list", "--all", "--json"];

/// Runs the lerna listing command as a child process in the repository root.
#[derive(Debug, Clone)]
pub struct LernaLister {
    program: String,
    args: Vec<String>,
}

impl LernaLister {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for LernaLister {
    fn default() -> Self {
        Self::new(
            DEFAULT_PROGRAM,
            DEFAULT_ARGS.iter().map(|arg| arg.to_string()).collect(),
        )
    }
}

#[async_trait]
impl PackageLister for LernaLister {
    async fn list(&self, root: &Path) -> Result<String, ProcessError> {
        tracing::debug!(target: "pin", "Running `{}` in {}", self.command_line(), root.display());

        // The child is killed if this future is dropped before it exits.
        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| ProcessError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ProcessError::NonZeroExit {
                program: self.command_line(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| ProcessError::InvalidUtf8 {
            program: self.command_line(),
        })
    }
}
