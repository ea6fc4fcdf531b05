use crate::utils::error::{Result, TryOnError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(TryOnError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list(field_name: &str, values: &[String]) -> Result<()> {
    if values.iter().all(|v| v.trim().is_empty()) {
        return Err(TryOnError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{:?}", values),
            reason: "List must contain at least one non-empty entry".to_string(),
        });
    }
    Ok(())
}

/// Extension of the last path segment of a URI, lowercased. Query strings and
/// fragments are ignored.
pub fn file_extension(uri: &str) -> Option<String> {
    let path = uri.split(['?', '#']).next().unwrap_or(uri);
    let file_name = path.rsplit('/').next()?;
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Rejects a known extension outside the allow-list. Handles without an
/// extension (`content://` media URIs and the like) pass through.
pub fn validate_image_extension(uri: &str, allowed_extensions: &[String]) -> Result<()> {
    let allowed: HashSet<String> = allowed_extensions
        .iter()
        .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
        .collect();

    match file_extension(uri) {
        Some(ext) if allowed.contains(&ext) => Ok(()),
        Some(ext) => Err(TryOnError::PickRejected {
            reason: format!(
                "unsupported file type '{}'; allowed: {}",
                ext,
                allowed_extensions.join(", ")
            ),
        }),
        None => Ok(()),
    }
}

pub fn validate_file_size(size_bytes: u64, max_bytes: u64) -> Result<()> {
    if size_bytes > max_bytes {
        return Err(TryOnError::PickRejected {
            reason: format!(
                "file is {} bytes; the limit is {} bytes",
                size_bytes, max_bytes
            ),
        });
    }
    Ok(())
}
