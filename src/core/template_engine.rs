// src/core/template_engine.rs
//! Template repository - maps a template id to the files of its directory

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::core::FsOps;
use crate::types::{TemplateBundle, TemplateFile};
use crate::utils::{is_template_file, normalize_template_id, DEFAULT_TEMPLATE_ID};

// ===== Template Models =====

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub preview: String,
}

impl TemplateInfo {
    fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            preview: format!("/templates/{}/preview.jpg", id),
        }
    }
}

// ===== Template Engine =====

pub struct TemplateEngine {
    templates_dir: PathBuf,
}

impl TemplateEngine {
    pub fn new(templates_dir: PathBuf) -> Self {
        Self { templates_dir }
    }

    /// Templates offered to clients
    pub fn catalog() -> Vec<TemplateInfo> {
        vec![
            TemplateInfo::new(
                "modern",
                "Modern Portfolio",
                "Clean and modern design with dark theme",
            ),
            TemplateInfo::new(
                "classic",
                "Classic Portfolio",
                "Traditional layout with professional styling",
            ),
            TemplateInfo::new(
                "creative",
                "Creative Portfolio",
                "Colorful and creative design for artists",
            ),
        ]
    }

    /// Directory backing a template id, falling back to the default template
    /// when the id is unusable or has no directory.
    pub fn template_path(&self, template_id: &str) -> (String, PathBuf) {
        let normalized = normalize_template_id(Some(template_id));
        let candidate = self.templates_dir.join(&normalized);
        if candidate.is_dir() {
            return (normalized, candidate);
        }

        warn!(
            "Template '{}' not found in {}, falling back to '{}'",
            template_id,
            self.templates_dir.display(),
            DEFAULT_TEMPLATE_ID
        );
        (
            DEFAULT_TEMPLATE_ID.to_string(),
            self.templates_dir.join(DEFAULT_TEMPLATE_ID),
        )
    }

    /// Load every file of a template. Text templates are decoded as UTF-8,
    /// anything else is kept as raw bytes.
    pub async fn resolve(&self, template_id: &str) -> Result<TemplateBundle> {
        let (resolved_id, template_path) = self.template_path(template_id);

        if !template_path.is_dir() {
            anyhow::bail!(
                "Template '{}' not found. Templates directory: {}",
                resolved_id,
                self.templates_dir.display()
            );
        }

        let files = FsOps::list_files_recursive(&template_path)
            .await
            .with_context(|| format!("Failed to read template '{}'", resolved_id))?;

        let mut bundle = TemplateBundle::new();
        for (name, path) in files {
            let bytes = FsOps::read_file_bytes(&path).await?;
            let file = if is_template_file(&name) {
                let text = String::from_utf8(bytes)
                    .with_context(|| format!("Template file '{}' is not valid UTF-8", name))?;
                TemplateFile::Text(text)
            } else {
                TemplateFile::Binary(bytes)
            };
            debug!("Loaded template file: {}", name);
            bundle.insert(name, file);
        }

        info!(
            "Resolved template '{}' ({} files) from {}",
            resolved_id,
            bundle.len(),
            template_path.display()
        );
        Ok(bundle)
    }
}
