// src/utils.rs
use std::path::{Component, Path};

pub const DEFAULT_TEMPLATE_ID: &str = "modern";

/// Extensions rendered through the template engine; everything else is copied as-is.
pub const TEMPLATE_EXTENSIONS: &[&str] = &["html", "css", "js"];

/// Normalize a requested template id. Blank ids and anything that is not a
/// single plain directory name resolve to the default template.
pub fn normalize_template_id(template_id: Option<&str>) -> String {
    let trimmed = template_id.map(str::trim).unwrap_or_default();
    if is_plain_dir_name(trimmed) {
        trimmed.to_string()
    } else {
        DEFAULT_TEMPLATE_ID.to_string()
    }
}

fn is_plain_dir_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Whether a bundle path is a text template that goes through substitution
pub fn is_template_file(filename: &str) -> bool {
    get_file_extension(filename)
        .map(|ext| TEMPLATE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Treat whitespace-only request fields as missing
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Archive-style entry name: relative path joined with `/` on every platform
pub fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
