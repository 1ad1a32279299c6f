// src/types/github.rs
//! Normalized GitHub profile and repository data

use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::response::{GithubRepoResponse, GithubUserResponse};

pub const NO_DESCRIPTION: &str = "No description available";
pub const MAX_REPOSITORIES: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubData {
    #[serde(deserialize_with = "null_as_default")]
    pub profile: GithubProfile,
    #[serde(deserialize_with = "null_as_default")]
    pub repositories: Vec<RepositorySummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bio: String,
    #[serde(deserialize_with = "null_as_default")]
    pub avatar_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub html_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub blog: String,
    #[serde(deserialize_with = "null_as_default")]
    pub public_repos: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub followers: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub following: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositorySummary {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub html_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub stars: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub forks: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

impl GithubProfile {
    /// Normalize a `/users/{username}` payload. A missing display name falls
    /// back to the username that was looked up.
    pub fn from_response(user: GithubUserResponse, username: &str) -> Self {
        Self {
            name: user
                .name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| username.to_string()),
            bio: user.bio.unwrap_or_default(),
            avatar_url: user.avatar_url.unwrap_or_default(),
            html_url: user.html_url.unwrap_or_default(),
            location: user.location.unwrap_or_default(),
            company: user.company.unwrap_or_default(),
            blog: user.blog.unwrap_or_default(),
            public_repos: user.public_repos,
            followers: user.followers,
            following: user.following,
        }
    }
}

impl From<GithubRepoResponse> for RepositorySummary {
    fn from(repo: GithubRepoResponse) -> Self {
        Self {
            name: repo.name,
            description: repo
                .description
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            html_url: repo.html_url,
            language: repo.language.unwrap_or_default(),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            updated_at: repo.updated_at.unwrap_or_default(),
        }
    }
}

/// Drop forks and keep the first `MAX_REPOSITORIES`, preserving provider order
/// (most recently updated first).
pub fn summarize_repositories(repos: Vec<GithubRepoResponse>) -> Vec<RepositorySummary> {
    repos
        .into_iter()
        .filter(|repo| !repo.fork)
        .take(MAX_REPOSITORIES)
        .map(RepositorySummary::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, fork: bool) -> GithubRepoResponse {
        GithubRepoResponse {
            name: name.to_string(),
            description: Some(format!("{} description", name)),
            html_url: format!("https://github.com/octocat/{}", name),
            language: Some("Rust".to_string()),
            stargazers_count: 3,
            forks_count: 1,
            updated_at: Some("2024-01-01T00:00:00Z".to_string()),
            fork,
        }
    }

    #[test]
    fn test_summarize_repositories_drops_forks() {
        let repos = vec![repo("a", false), repo("b", true), repo("c", false)];
        let names: Vec<_> = summarize_repositories(repos)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_summarize_repositories_caps_at_ten() {
        let repos = (0..15).map(|i| repo(&format!("r{}", i), false)).collect();
        let summaries = summarize_repositories(repos);
        assert_eq!(summaries.len(), MAX_REPOSITORIES);
        assert_eq!(summaries[0].name, "r0");
    }

    #[test]
    fn test_null_description_uses_placeholder() {
        let mut raw = repo("a", false);
        raw.description = None;
        raw.language = None;
        let summary = RepositorySummary::from(raw);
        assert_eq!(summary.description, NO_DESCRIPTION);
        assert_eq!(summary.language, "");
    }

    #[test]
    fn test_profile_name_falls_back_to_username() {
        let profile = GithubProfile::from_response(GithubUserResponse::default(), "octocat");
        assert_eq!(profile.name, "octocat");
        assert_eq!(profile.bio, "");
        assert_eq!(profile.followers, 0);
    }

    #[test]
    fn test_github_data_accepts_nulls() {
        let data: GithubData = serde_json::from_str(
            r#"{"profile": {"name": "Mona", "bio": null}, "repositories": null}"#,
        )
        .unwrap();
        assert_eq!(data.profile.name, "Mona");
        assert_eq!(data.profile.bio, "");
        assert!(data.repositories.is_empty());
    }
}
