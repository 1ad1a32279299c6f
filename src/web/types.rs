// src/web/types.rs - Request/response types for the portfolio API

use rocket::http::{ContentType, Status};
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::{Request, Response};
use std::path::PathBuf;

use crate::types::{null_as_default, GithubData, LinkedinData, PersonalInfo};

/// Zip archive sent as a file download
pub struct ZipResponse {
    pub data: Vec<u8>,
    pub filename: String,
}

impl ZipResponse {
    pub fn attachment(data: Vec<u8>, filename: &str) -> Self {
        Self {
            data,
            filename: filename.to_string(),
        }
    }
}

impl<'r> Responder<'r, 'static> for ZipResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        Response::build()
            .header(ContentType::ZIP)
            .raw_header(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", self.filename),
            )
            .sized_body(self.data.len(), std::io::Cursor::new(self.data))
            .ok()
    }
}

pub struct ServerConfig {
    pub templates_dir: PathBuf,
    pub output_dir: PathBuf,
}

// ===== Requests =====

#[derive(Debug, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct FetchGithubRequest {
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct FetchLinkedinRequest {
    #[serde(default)]
    pub profile_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(crate = "rocket::serde", default)]
pub struct GeneratePortfolioRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub form_data: PersonalInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub github_data: GithubData,
    #[serde(deserialize_with = "null_as_default")]
    pub linkedin_data: LinkedinData,
    pub template_id: Option<String>,
}

// ===== Errors =====

pub type ApiError = (Status, Json<StandardErrorResponse>);

#[derive(Debug, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

impl StandardErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            success: false,
            error,
            error_code,
            suggestions,
        }
    }

    pub fn with_status(self, status: Status) -> ApiError {
        (status, Json(self))
    }

    pub fn validation(error: &str) -> ApiError {
        Self::new(
            error.to_string(),
            "VALIDATION_ERROR".to_string(),
            vec!["Verify all required fields are present".to_string()],
        )
        .with_status(Status::BadRequest)
    }
}
