// src/types/portfolio.rs
//! Portfolio context fed to the renderer, plus the file sets flowing through
//! the pipeline

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::{GithubData, LinkedinData};

pub const GENERATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Form fields exactly as submitted. Any JSON value is accepted under any
/// key so templates can use numbers, lists or nested objects. Top-level
/// nulls are dropped and render like missing keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct PersonalInfo(Map<String, Value>);

impl From<Map<String, Value>> for PersonalInfo {
    fn from(fields: Map<String, Value>) -> Self {
        Self(
            fields
                .into_iter()
                .filter(|(_, value)| !value.is_null())
                .collect(),
        )
    }
}

impl From<PersonalInfo> for Map<String, Value> {
    fn from(personal: PersonalInfo) -> Self {
        personal.0
    }
}

impl PersonalInfo {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Scalar field as display text; strings are returned unquoted.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<String> {
        self.text("name").filter(|name| !name.trim().is_empty())
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        if value.is_null() {
            self.0.remove(key);
        } else {
            self.0.insert(key.to_string(), value);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioContext {
    pub personal: PersonalInfo,
    pub github: GithubData,
    pub linkedin: LinkedinData,
    pub generated_at: String,
}

impl PortfolioContext {
    pub fn new(personal: PersonalInfo, github: GithubData, linkedin: LinkedinData) -> Self {
        Self {
            personal,
            github,
            linkedin,
            generated_at: chrono::Local::now().format(GENERATED_AT_FORMAT).to_string(),
        }
    }

    /// Look up a dotted path such as `github.profile.bio` or
    /// `github.repositories.0.name`.
    pub fn field(&self, path: &str) -> Option<Value> {
        let root = serde_json::to_value(self).ok()?;
        path.split('.')
            .filter(|segment| !segment.is_empty())
            .try_fold(root, |current, segment| match current {
                Value::Object(mut map) => map.remove(segment),
                Value::Array(mut items) => {
                    let index = segment.parse::<usize>().ok()?;
                    (index < items.len()).then(|| items.swap_remove(index))
                }
                _ => None,
            })
    }

    pub fn to_template_value(&self) -> minijinja::Value {
        minijinja::Value::from_serialize(self)
    }
}

/// One file of a template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateFile {
    Text(String),
    Binary(Vec<u8>),
}

impl TemplateFile {
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            TemplateFile::Text(text) => text.into_bytes(),
            TemplateFile::Binary(bytes) => bytes,
        }
    }
}

/// Template files keyed by `/`-separated path relative to the template root.
pub type TemplateBundle = BTreeMap<String, TemplateFile>;

/// Final archive contents keyed by entry name.
pub type GeneratedFiles = BTreeMap<String, Vec<u8>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RepositorySummary;

    fn context() -> PortfolioContext {
        let personal: PersonalInfo =
            serde_json::from_value(serde_json::json!({"name": "Ada", "favourite_color": "green"}))
                .unwrap();
        let mut github = GithubData::default();
        github.profile.bio = "Analyst".to_string();
        github.repositories.push(RepositorySummary {
            name: "engine".to_string(),
            ..Default::default()
        });
        PortfolioContext::new(personal, github, LinkedinData::default())
    }

    #[test]
    fn test_field_nested_lookup() {
        let ctx = context();
        assert_eq!(ctx.field("personal.name"), Some(Value::from("Ada")));
        assert_eq!(ctx.field("github.profile.bio"), Some(Value::from("Analyst")));
        assert_eq!(
            ctx.field("github.repositories.0.name"),
            Some(Value::from("engine"))
        );
    }

    #[test]
    fn test_field_keeps_unknown_form_keys() {
        assert_eq!(
            context().field("personal.favourite_color"),
            Some(Value::from("green"))
        );
    }

    #[test]
    fn test_personal_info_accepts_any_value_type() {
        let personal: PersonalInfo = serde_json::from_value(serde_json::json!({
            "name": "Ada",
            "phone": 5551234,
            "skills": "Rust, Go",
            "about": {"short": "x"},
            "website": null
        }))
        .unwrap();

        assert_eq!(personal.text("phone").as_deref(), Some("5551234"));
        assert_eq!(personal.get("skills"), Some(&Value::from("Rust, Go")));
        assert_eq!(personal.text("about"), None);
        assert_eq!(personal.get("website"), None);
        assert_eq!(personal.len(), 4);
        assert_eq!(personal.name().as_deref(), Some("Ada"));
    }

    #[test]
    fn test_personal_name_ignores_blank() {
        let personal = PersonalInfo::default().with("name", "  ");
        assert_eq!(personal.name(), None);
        assert!(PersonalInfo::default().with("title", Value::Null).is_empty());
    }

    #[test]
    fn test_field_missing_paths() {
        let ctx = context();
        assert_eq!(ctx.field("personal.nickname"), None);
        assert_eq!(ctx.field("github.repositories.3.name"), None);
        assert_eq!(ctx.field("generated_at.year"), None);
    }

    #[test]
    fn test_linkedin_keys_always_present() {
        let ctx = context();
        assert_eq!(ctx.field("linkedin.experience"), Some(Value::Array(vec![])));
        assert_eq!(ctx.field("linkedin.profile.headline"), Some(Value::from("")));
    }
}
