use shaderpack::PackError;

/// One-line diagnostic for a failed run
pub fn format_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<PackError>() {
        Some(PackError::SymbolCollision { .. }) => format!(
            "[ERROR] {}\n  Rename one of the files; symbols come from basenames with non-identifier characters replaced by '_'.\n",
            err
        ),
        Some(PackError::OutputWrite { .. }) => format!(
            "[ERROR] {}\n  The output directory must already exist and be writable.\n",
            err
        ),
        _ => format!("[ERROR] {}\n", err),
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let path = err
            .downcast_ref::<PackError>()
            .and_then(PackError::path)
            .map(|p| p.display().to_string());
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
            "path": path,
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err));
}
