use similar::{ChangeTag, TextDiff};
use std::path::Path;

/// Render a unified diff between the current and patched content of `path`.
pub fn render_diff(path: &Path, old: &str, new: &str) -> String {
    let display = path.display().to_string();
    let display = display.trim_start_matches('/');
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{display}"), &format!("b/{display}"))
        .to_string()
}

/// Count changed lines as (removed, added).
pub fn change_counts(old: &str, new: &str) -> (usize, usize) {
    let diff = TextDiff::from_lines(old, new);
    let mut removed = 0;
    let mut added = 0;
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => removed += 1,
            ChangeTag::Insert => added += 1,
            ChangeTag::Equal => {}
        }
    }
    (removed, added)
}
