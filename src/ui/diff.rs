use crossterm::style::{Color, Stylize};
use similar::{ChangeTag, TextDiff};

/// Line-numbered unified diff of the on-disk artifact against the rendered one.
///
/// Unchanged lines are skipped; artifacts are one long line per asset, so
/// context would only repeat bytes that already match.
pub fn render_artifact_diff(path: &str, old: &str, new: &str, supports_color: bool) -> String {
    let diff = TextDiff::from_lines(old, new);
    let old_lines = old.lines().count().max(1);
    let new_lines = new.lines().count().max(1);
    let width = old_lines.max(new_lines).to_string().len();

    let mut out = String::new();

    for header in [format!("--- a/{}", path), format!("+++ b/{}", path)] {
        out.push_str(&color_line(&header, None, supports_color));
        out.push('\n');
    }

    for change in diff.iter_all_changes() {
        let (line_no, sign) = match change.tag() {
            ChangeTag::Delete => (change.old_index(), "-"),
            ChangeTag::Insert => (change.new_index(), "+"),
            ChangeTag::Equal => continue,
        };

        let col = line_no
            .map(|i| format!("{:>width$}", i + 1, width = width))
            .unwrap_or_else(|| " ".repeat(width));
        let value = change.value().trim_end_matches('\n');
        let line = format!("{col} {sign} {value}");
        out.push_str(&color_line(&line, Some(change.tag()), supports_color));
        out.push('\n');
    }

    out
}

fn color_line(s: &str, tag: Option<ChangeTag>, supports_color: bool) -> String {
    if !supports_color {
        return s.to_string();
    }

    match tag {
        None => format!("{}", s.with(Color::Cyan)),
        Some(ChangeTag::Delete) => format!("{}", s.with(Color::Red)),
        Some(ChangeTag::Insert) => format!("{}", s.with(Color::Green)),
        Some(ChangeTag::Equal) => format!("{}", s.with(Color::DarkGrey)),
    }
}
