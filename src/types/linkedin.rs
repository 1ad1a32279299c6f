// src/types/linkedin.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::null_as_default;

/// LinkedIn profile skeleton. Only `username` and `profile_url` are ever
/// populated; the remaining keys exist so templates can reference them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkedinData {
    #[serde(deserialize_with = "null_as_default")]
    pub profile: LinkedinProfile,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkedinProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub headline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
}

impl LinkedinData {
    pub fn stub(profile_url: &str, username: &str) -> Self {
        Self {
            profile: LinkedinProfile {
                profile_url: profile_url.to_string(),
                username: username.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
