// src/types/response.rs
//! Raw GitHub REST payloads, before normalization

use serde::Deserialize;

// ===== GitHub Response Types =====

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GithubUserResponse {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubRepoResponse {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: String,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub updated_at: Option<String>,
    #[serde(default)]
    pub fork: bool,
}
