// src/core/github_client.rs
//! GitHub REST client - profile plus recently updated repositories

use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::core::config_manager::ServiceConfig;
use crate::types::github::{summarize_repositories, MAX_REPOSITORIES};
use crate::types::response::{GithubRepoResponse, GithubUserResponse};
use crate::types::{GithubData, GithubProfile};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

pub struct GithubClient {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl GithubClient {
    /// Create the client once at startup; it is shared by every request
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = Url::parse(&config.github_api_url)
            .with_context(|| format!("Invalid GitHub API URL: {}", config.github_api_url))?;

        Ok(Self {
            client,
            base_url,
            token: config.github_token.clone(),
        })
    }

    /// Fetch and normalize a user's profile and repositories.
    ///
    /// Returns `None` when the profile cannot be read; the cause is logged
    /// here and never handed back to the caller.
    pub async fn fetch_github(&self, username: &str) -> Option<GithubData> {
        match self.try_fetch_github(username).await {
            Ok(data) => {
                info!(
                    "Fetched GitHub data for {}: {} repositories",
                    username,
                    data.repositories.len()
                );
                Some(data)
            }
            Err(e) => {
                error!("Error fetching GitHub data for {}: {:#}", username, e);
                None
            }
        }
    }

    async fn try_fetch_github(&self, username: &str) -> Result<GithubData> {
        let profile_url = self.users_url(username, &[])?;
        debug!("Calling GitHub profile endpoint: {}", profile_url);

        let response = self
            .request(profile_url)
            .send()
            .await
            .context("GitHub profile request failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("GitHub profile request returned status {}", status);
        }

        let user: GithubUserResponse = response
            .json()
            .await
            .context("Failed to parse GitHub profile response")?;

        let repositories = match self.fetch_repositories(username).await {
            Ok(repos) => summarize_repositories(repos),
            Err(e) => {
                warn!(
                    "Repository listing failed for {}, continuing without repositories: {:#}",
                    username, e
                );
                Vec::new()
            }
        };

        Ok(GithubData {
            profile: GithubProfile::from_response(user, username),
            repositories,
        })
    }

    async fn fetch_repositories(&self, username: &str) -> Result<Vec<GithubRepoResponse>> {
        let mut repos_url = self.users_url(username, &["repos"])?;
        repos_url
            .query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &MAX_REPOSITORIES.to_string());
        debug!("Calling GitHub repositories endpoint: {}", repos_url);

        let response = self
            .request(repos_url)
            .send()
            .await
            .context("GitHub repositories request failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("GitHub repositories request returned status {}", status);
        }

        response
            .json()
            .await
            .context("Failed to parse GitHub repositories response")
    }

    fn request(&self, url: Url) -> reqwest::RequestBuilder {
        let builder = self.client.get(url).header(ACCEPT, GITHUB_ACCEPT);
        match &self.token {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// `{base}/users/{username}/{extra...}` with every segment percent-encoded
    fn users_url(&self, username: &str, extra: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("GitHub API URL cannot be a base: {}", self.base_url))?
            .pop_if_empty()
            .push("users")
            .push(username)
            .extend(extra);
        Ok(url)
    }
}
