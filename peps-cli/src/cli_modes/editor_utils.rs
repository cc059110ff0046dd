use anyhow::{Context, Result};
use std::{fs, path::Path, process::Command};

pub fn resolve_editor(editor: &Option<String>) -> Result<String> {
    let editor = editor
        .as_deref()
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| "vim".into());
    Ok(editor)
}

pub fn open_file_in_editor(editor_cmd: &str, path: &Path) -> Result<()> {
    let status = Command::new(editor_cmd).arg(path).status()?;
    if !status.success() {
        anyhow::bail!("Editor exited with status {}", status);
    }
    Ok(())
}

/// Edits a JSON document through a scratch copy.
///
/// The file at `path` (or `{}` when it does not exist yet) is copied into a temp
/// buffer and opened in the editor. The edited text goes through `check` and is
/// only written back to `path` if it passes, so a typo never clobbers the file.
pub fn edit_json_file<F>(editor_cmd: &str, path: &Path, check: F) -> Result<()>
where
    F: Fn(&str) -> Result<()>,
{
    let current = if path.exists() {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    } else {
        "{}\n".to_string()
    };

    let buffer = tempfile::Builder::new()
        .prefix("peps")
        .suffix(".json")
        .tempfile()?;
    fs::write(buffer.path(), &current)?;
    open_file_in_editor(editor_cmd, buffer.path())?;

    let edited = fs::read_to_string(buffer.path())?;
    check(&edited).with_context(|| format!("{} was not saved", path.display()))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating parent directory {}", parent.display()))?;
    }
    fs::write(path, edited).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Accepts any well-formed JSON document.
pub fn check_json(content: &str) -> Result<()> {
    serde_json::from_str::<serde_json::Value>(content).context("JSON invalide")?;
    Ok(())
}
