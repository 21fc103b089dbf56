//! System clipboard access
//!
//! Writes go through whichever platform tool is on `PATH` (or the command
//! configured under `[clipboard]`), with the text piped into its stdin.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::config::ClipboardSettings;
use scancmd_core::prelude::*;

/// Anything that can receive copied text
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// A known clipboard tool and the arguments that make it read stdin
#[derive(Debug, Clone, Copy)]
pub struct ClipboardTool {
    pub command: &'static str,
    pub args: &'static [&'static str],
}

/// Candidates in detection order
pub const KNOWN_TOOLS: &[ClipboardTool] = &[
    ClipboardTool {
        command: "pbcopy",
        args: &[],
    },
    ClipboardTool {
        command: "wl-copy",
        args: &[],
    },
    ClipboardTool {
        command: "xclip",
        args: &["-selection", "clipboard"],
    },
    ClipboardTool {
        command: "xsel",
        args: &["--clipboard", "--input"],
    },
    ClipboardTool {
        command: "clip.exe",
        args: &[],
    },
];

/// Clipboard backed by an external program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemClipboard {
    program: Option<PathBuf>,
    args: Vec<String>,
}

impl SystemClipboard {
    /// Resolve the program to use. A configured command wins over
    /// auto-detection; nothing found leaves the clipboard unavailable.
    pub fn detect(settings: &ClipboardSettings) -> Self {
        if let Some(command) = settings.command.as_deref().filter(|c| !c.is_empty()) {
            match which::which(command) {
                Ok(program) => {
                    debug!("Using configured clipboard command {:?}", program);
                    return Self {
                        program: Some(program),
                        args: settings.args.clone(),
                    };
                }
                Err(e) => warn!("Configured clipboard command '{}' not found: {}", command, e),
            }
        }

        for tool in KNOWN_TOOLS {
            if let Ok(program) = which::which(tool.command) {
                debug!("Detected clipboard tool {:?}", program);
                return Self {
                    program: Some(program),
                    args: tool.args.iter().map(|a| a.to_string()).collect(),
                };
            }
        }

        warn!("No clipboard tool found; copy will be a no-op");
        Self::unavailable()
    }

    pub fn unavailable() -> Self {
        Self {
            program: None,
            args: Vec::new(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.program.is_some()
    }

    fn spawn_and_write(&self, program: &PathBuf, text: &str) -> Result<()> {
        let mut child = Command::new(program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::clipboard(format!("failed to spawn {:?}: {}", program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .with_context(|| format!("Failed to write to {:?}", program))?;
        }

        let status = child
            .wait()
            .with_context(|| format!("Failed to wait for {:?}", program))?;
        if !status.success() {
            return Err(Error::clipboard(format!(
                "{:?} exited with {}",
                program, status
            )));
        }
        Ok(())
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        match &self.program {
            Some(program) => self.spawn_and_write(program, text),
            None => {
                let tried: Vec<&str> = KNOWN_TOOLS.iter().map(|t| t.command).collect();
                Err(Error::clipboard_unavailable(&tried))
            }
        }
    }
}

/// In-memory clipboard that records every write
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub writes: Vec<String>,
}

impl MemoryClipboard {
    pub fn last(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.writes.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_clipboard_reports_tools() {
        let mut clipboard = SystemClipboard::unavailable();
        assert!(!clipboard.is_available());

        let err = clipboard.write_text("rustscan <IP>").unwrap_err();
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("xclip"));
    }

    #[test]
    fn test_missing_configured_command_is_not_used() {
        let settings = ClipboardSettings {
            command: Some("scancmd-definitely-not-a-real-program".to_string()),
            args: vec![],
        };
        let clipboard = SystemClipboard::detect(&settings);
        assert_ne!(
            clipboard.program.as_deref(),
            Some(std::path::Path::new("scancmd-definitely-not-a-real-program"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_configured_command_receives_text() {
        let settings = ClipboardSettings {
            command: Some("cat".to_string()),
            args: vec![],
        };
        let mut clipboard = SystemClipboard::detect(&settings);
        if clipboard.is_available() {
            clipboard.write_text("rustscan 10.0.0.5 -g").unwrap();
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command_is_an_error() {
        let settings = ClipboardSettings {
            command: Some("false".to_string()),
            args: vec![],
        };
        let mut clipboard = SystemClipboard::detect(&settings);
        if clipboard.program.as_ref().is_some_and(|p| p.ends_with("false")) {
            let err = clipboard.write_text("x").unwrap_err();
            assert!(matches!(err, Error::Clipboard { .. } | Error::Io(_)));
        }
    }

    #[test]
    fn test_memory_clipboard_records_writes() {
        let mut clipboard = MemoryClipboard::default();
        clipboard.write_text("a").unwrap();
        clipboard.write_text("b").unwrap();
        assert_eq!(clipboard.writes, vec!["a", "b"]);
        assert_eq!(clipboard.last(), Some("b"));
    }
}
