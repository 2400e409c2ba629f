use crate::domain::ports::Output;
use crate::utils::error::{MenuError, Result};
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Writes rendered lines to standard output.
#[derive(Debug, Clone, Default)]
pub struct StdoutOutput;

impl Output for StdoutOutput {
    async fn write_lines(&self, lines: &[String]) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        for line in lines {
            writeln!(handle, "{}", line)?;
        }
        handle.flush()?;
        Ok(())
    }
}

/// Collects rendered lines in memory; clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct BufferOutput {
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}

impl Output for BufferOutput {
    async fn write_lines(&self, lines: &[String]) -> Result<()> {
        let mut buffer = self.lines.lock().map_err(|_| {
            MenuError::IoError(std::io::Error::other("output buffer lock poisoned"))
        })?;
        buffer.extend_from_slice(lines);
        Ok(())
    }
}
