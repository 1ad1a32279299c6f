// src/web/handlers/github_handlers.rs
use crate::core::GithubClient;
use crate::types::GithubData;
use crate::utils::non_blank;
use crate::web::types::{ApiError, FetchGithubRequest, StandardErrorResponse};

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{info, warn};

pub async fn fetch_github_handler(
    request: Json<FetchGithubRequest>,
    client: &State<GithubClient>,
) -> Result<Json<GithubData>, ApiError> {
    let username = match non_blank(request.username.as_deref()) {
        Some(username) => username,
        None => return Err(StandardErrorResponse::validation("GitHub username is required")),
    };

    info!("Fetching GitHub data for: {}", username);

    match client.fetch_github(username).await {
        Some(data) => Ok(Json(data)),
        None => {
            warn!("GitHub fetch failed for: {}", username);
            Err(StandardErrorResponse::new(
                "Failed to fetch GitHub data".to_string(),
                "GITHUB_FETCH_FAILED".to_string(),
                vec![
                    "Check the GitHub username spelling".to_string(),
                    "Try again in a few moments".to_string(),
                ],
            )
            .with_status(Status::NotFound))
        }
    }
}
