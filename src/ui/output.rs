use shaderpack::{ConfigWarning, PackReport, PackStatus};

/// NDJSON event describing a pack, dry run or check
///
/// Paths go through `display()` so non-UTF-8 names cannot fail serialization.
pub fn report_event(event: &str, report: &PackReport) -> serde_json::Value {
    let assets: Vec<serde_json::Value> = report
        .assets
        .iter()
        .map(|asset| {
            serde_json::json!({
                "path": asset.path.display().to_string(),
                "symbol": asset.symbol,
                "size": asset.size,
            })
        })
        .collect();

    serde_json::json!({
        "event": event,
        "status": report.status,
        "output": report.output.display().to_string(),
        "assets": assets,
        "bytes": report.bytes,
        "hash": report.hash,
    })
}

/// Human-readable summary; one line per asset
pub fn render_report(report: &PackReport) -> String {
    let verb = match report.status {
        PackStatus::Written => "Wrote",
        PackStatus::DryRun => "Would write",
        PackStatus::UpToDate => "Up to date:",
        PackStatus::Stale => "Out of date:",
        PackStatus::Missing => "Missing:",
    };

    let mut out = format!(
        "{} {} ({} assets, {} bytes)\n",
        verb,
        report.output.display(),
        report.assets.len(),
        report.bytes
    );
    for asset in &report.assets {
        out.push_str(&format!(
            "  {} <- {} ({} bytes)\n",
            asset.symbol,
            asset.path.display(),
            asset.size
        ));
    }
    out
}

/// One line per symbol whose bytes differ from the file on disk
pub fn render_changed(changed: &[String]) -> String {
    changed
        .iter()
        .map(|symbol| format!("  changed: {}\n", symbol))
        .collect()
}

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        match (w.line, &w.suggestion) {
            (Some(line), Some(suggestion)) => tracing::warn!(
                "unknown manifest key '{}' in {}:{}, did you mean '{}'?",
                w.key,
                w.file.display(),
                line,
                suggestion
            ),
            (Some(line), None) => tracing::warn!(
                "unknown manifest key '{}' in {}:{}",
                w.key,
                w.file.display(),
                line
            ),
            (None, _) => tracing::warn!("unknown manifest key '{}' in {}", w.key, w.file.display()),
        }
    }
}
