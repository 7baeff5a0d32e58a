//! Path validation utilities
//!
//! Normalizes logical paths and checks entry names.

/// Normalize a logical path into folder form: no leading `/`, trailing `/`.
///
/// The empty path (or `/`) denotes the root and stays empty.
pub fn folder_path(path: &str) -> Result<String, String> {
    if path.contains('\0') || path.contains('\\') {
        return Err(format!("illegal character in {path:?}"));
    }

    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    if trimmed.split('/').any(|segment| segment == "..") {
        return Err(format!("parent segment in {path:?}"));
    }

    if trimmed.ends_with('/') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{trimmed}/"))
    }
}

/// An entry name is a single non-empty segment
pub fn is_entry_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/')
}
