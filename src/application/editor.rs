//! Editor launch for solution files.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::application::error_ext::IoResultExt;
use crate::application::{ApplicationError, ApplicationResult};

/// Opens `file` with the configured editor command, blocking until the
/// editor exits. The command may carry arguments (`"code -w"`).
pub fn open_in_editor(editor: &str, file: &Path) -> ApplicationResult<()> {
    let mut parts = editor.split_whitespace();
    let program = parts.next().ok_or_else(|| ApplicationError::Config {
        message: "editor command is empty".to_string(),
    })?;
    debug!("editor: {} {}", editor, file.display());

    let status = Command::new(program)
        .args(parts)
        .arg(file)
        .status()
        .with_path_context("launch editor", file)?;

    if !status.success() {
        return Err(ApplicationError::Editor {
            editor: editor.to_string(),
        });
    }
    Ok(())
}
