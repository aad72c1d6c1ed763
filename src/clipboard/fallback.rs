use super::{CopyError, CopyMechanism};
use std::io::Write;
use std::process::{Child, Command, Stdio};
use tracing::debug;

/// Copy by piping the payload to an external clipboard command.
///
/// Used only when the native capability is absent. The spawned child and
/// its stdin pipe exist for a single attempt: the pipe is closed as soon
/// as the payload is written so the command sees EOF, and `ReapOnDrop`
/// reaps the child on every exit path, including write errors.
#[derive(Debug, Clone)]
pub struct CommandFallback {
    program: String,
    args: Vec<String>,
}

impl CommandFallback {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The conventional copy command for the current platform.
    #[cfg(target_os = "macos")]
    pub fn platform_default() -> Self {
        Self::new("pbcopy")
    }

    /// The conventional copy command for the current platform.
    #[cfg(target_os = "windows")]
    pub fn platform_default() -> Self {
        Self::new("clip")
    }

    /// The conventional copy command for the current platform.
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    pub fn platform_default() -> Self {
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Self::new("wl-copy")
        } else {
            Self::with_args("xclip", ["-selection", "clipboard"])
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

/// Reaps the child when the attempt scope ends, whatever the exit path.
struct ReapOnDrop(Child);

impl Drop for ReapOnDrop {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

impl CopyMechanism for CommandFallback {
    fn attempt(&mut self, payload: &str) -> Result<(), CopyError> {
        debug!("spawning fallback copy command: {}", self.program);

        let child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| CopyError::Unavailable(format!("{}: {e}", self.program)))?;
        let mut child = ReapOnDrop(child);

        // Write then drop the pipe so the command sees EOF. The guard
        // reaps the child even when the write fails.
        let mut stdin = child
            .0
            .stdin
            .take()
            .ok_or_else(|| CopyError::CommandFailed("no stdin pipe".to_string()))?;
        stdin
            .write_all(payload.as_bytes())
            .map_err(|e| CopyError::CommandFailed(format!("write to {}: {e}", self.program)))?;
        drop(stdin);

        let status = child
            .0
            .wait()
            .map_err(|e| CopyError::CommandFailed(format!("wait for {}: {e}", self.program)))?;

        if status.success() {
            Ok(())
        } else {
            Err(CopyError::CommandFailed(format!(
                "{} exited with {status}",
                self.program
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_successful_command() {
        let mut fallback = CommandFallback::new("cat");
        assert!(fallback.attempt("hello").is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn test_payload_reaches_command_stdin() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("payload.txt");
        let mut fallback = CommandFallback::with_args(
            "sh",
            ["-c", &format!("cat > {}", out.display())],
        );

        fallback.attempt("hello clipboard").unwrap();

        assert_eq!(std::fs::read_to_string(&out).unwrap(), "hello clipboard");
    }

    #[test]
    fn test_missing_command_is_unavailable() {
        let mut fallback = CommandFallback::new("definitely-not-a-real-copy-command");
        match fallback.attempt("hello") {
            Err(CopyError::Unavailable(_)) => {}
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_failing_command_is_command_failed() {
        let mut fallback = CommandFallback::with_args("sh", ["-c", "exit 1"]);
        match fallback.attempt("hello") {
            Err(CopyError::CommandFailed(_)) => {}
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_empty_payload() {
        let mut fallback = CommandFallback::new("cat");
        assert!(fallback.attempt("").is_ok());
    }
}
