// src/web/handlers/linkedin_handlers.rs
use crate::core::parse_linkedin_profile;
use crate::types::LinkedinData;
use crate::utils::non_blank;
use crate::web::types::{ApiError, FetchLinkedinRequest, StandardErrorResponse};

use rocket::http::Status;
use rocket::serde::json::Json;

pub async fn fetch_linkedin_handler(
    request: Json<FetchLinkedinRequest>,
) -> Result<Json<LinkedinData>, ApiError> {
    let profile_url = match non_blank(request.profile_url.as_deref()) {
        Some(url) => url,
        None => {
            return Err(StandardErrorResponse::validation(
                "LinkedIn profile URL is required",
            ))
        }
    };

    parse_linkedin_profile(profile_url).map(Json).ok_or_else(|| {
        StandardErrorResponse::new(
            "Invalid LinkedIn profile URL".to_string(),
            "INVALID_LINKEDIN_URL".to_string(),
            vec!["Use a URL like https://linkedin.com/in/your-profile".to_string()],
        )
        .with_status(Status::BadRequest)
    })
}
