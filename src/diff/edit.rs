// Offset-based placeholder substitution.
// Pure string manipulation; all file I/O lives in the applier.

use crate::error::{PatchError, PatchResult};

/// The literal expected at every edit offset before substitution
pub const PLACEHOLDER: &str = "var ";

/// Replace the `"var "` span starting at character `offset` with `type_name` followed by a space.
///
/// Offsets count characters of the decoded text, not bytes. Fails with a
/// placeholder mismatch if the four characters at `offset` are not exactly
/// `"var "`, including when `offset` is past the end of `content`.
pub fn apply_edit(content: &str, offset: usize, type_name: &str) -> PatchResult<String> {
    let start = char_to_byte(content, offset)
        .ok_or_else(|| PatchError::placeholder_mismatch(offset, ""))?;
    let rest = &content[start..];
    if !rest.starts_with(PLACEHOLDER) {
        let found: String = rest.chars().take(PLACEHOLDER.chars().count()).collect();
        return Err(PatchError::placeholder_mismatch(offset, found));
    }

    let mut patched =
        String::with_capacity(content.len() + type_name.len() + 1 - PLACEHOLDER.len());
    patched.push_str(&content[..start]);
    patched.push_str(type_name);
    patched.push(' ');
    patched.push_str(&rest[PLACEHOLDER.len()..]);
    Ok(patched)
}

// Byte index of the `offset`-th character; the character count maps to `content.len()`.
fn char_to_byte(content: &str, offset: usize) -> Option<usize> {
    content
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(content.len()))
        .nth(offset)
}
