use std::io;
use std::process::{Output, Stdio};
use std::time::Duration;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error while running {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} timed out after {} seconds", .timeout.as_secs())]
    TimedOut { program: String, timeout: Duration },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Runs an external program to completion under a timeout.
#[derive(Debug, Clone)]
pub struct CommandExecutor {
    timeout: Duration,
}

impl CommandExecutor {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Run `program`, feeding `input` to its stdin, and collect its output.
    ///
    /// The child is killed if the timeout elapses or the returned future is
    /// dropped. A non-zero exit status is an error carrying stderr.
    pub async fn execute(
        &self,
        program: &str,
        args: &[String],
        input: Option<&[u8]>,
    ) -> Result<Output, ExecutorError> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        tracing::debug!(
            program = %program,
            args = ?args,
            input_size = input.map_or(0, <[u8]>::len),
            timeout_secs = %self.timeout.as_secs(),
            "Executing command"
        );

        let mut child = cmd.spawn().map_err(|source| ExecutorError::Spawn {
            program: program.to_string(),
            source,
        })?;

        let stdin = child.stdin.take();
        let feed = async move {
            let (Some(mut pipe), Some(bytes)) = (stdin, input) else {
                return Ok(());
            };
            let written = pipe.write_all(bytes).await;
            // Closing stdin signals end of input
            drop(pipe);
            match written {
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
                other => other,
            }
        };

        let run = async move {
            let (fed, output) = tokio::join!(feed, child.wait_with_output());
            let output = output?;
            // A failed exit explains a broken pipe better than the write error does
            if output.status.success() {
                fed?;
            }
            Ok::<_, io::Error>(output)
        };

        let output = tokio::time::timeout(self.timeout, run)
            .await
            .map_err(|_| ExecutorError::TimedOut {
                program: program.to_string(),
                timeout: self.timeout,
            })?
            .map_err(|source| ExecutorError::Io {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::error!(
                program = %program,
                args = ?args,
                stderr = %stderr,
                "Command failed"
            );
            return Err(ExecutorError::Failed {
                program: program.to_string(),
                status: output.status,
                stderr,
            });
        }

        tracing::debug!(
            program = %program,
            output_size = output.stdout.len(),
            "Command succeeded"
        );

        Ok(output)
    }
}
