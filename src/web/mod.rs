// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use handlers::*;
pub use types::*;

use crate::core::{ConfigManager, GithubClient, TemplateInfo};
use crate::types::{GithubData, LinkedinData};
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use tracing::{error, info};

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new(
            "Access-Control-Expose-Headers",
            "Content-Disposition",
        ));
    }
}

// API Routes

#[post("/fetch-github", data = "<request>")]
pub async fn fetch_github(
    request: Json<FetchGithubRequest>,
    client: &State<GithubClient>,
) -> Result<Json<GithubData>, ApiError> {
    handlers::fetch_github_handler(request, client).await
}

#[post("/fetch-linkedin", data = "<request>")]
pub async fn fetch_linkedin(
    request: Json<FetchLinkedinRequest>,
) -> Result<Json<LinkedinData>, ApiError> {
    handlers::fetch_linkedin_handler(request).await
}

#[post("/generate-portfolio", data = "<request>")]
pub async fn generate_portfolio(
    request: Json<GeneratePortfolioRequest>,
    config: &State<ServerConfig>,
) -> Result<ZipResponse, ApiError> {
    handlers::generate_portfolio_handler(request, config).await
}

#[get("/templates")]
pub async fn get_templates() -> Json<Vec<TemplateInfo>> {
    handlers::get_templates_handler().await
}

#[get("/health")]
pub async fn health() -> Json<&'static str> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
    ))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Resource not found".to_string(),
        "NOT_FOUND".to_string(),
        vec!["Check the endpoint path".to_string()],
    ))
}

#[rocket::catch(422)]
pub fn unprocessable_entity() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Request body has unexpected field types".to_string(),
        "UNPROCESSABLE_ENTITY".to_string(),
        vec!["Check the types of the submitted fields".to_string()],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    ))
}

/// Assemble the Rocket instance with managed state, routes and catchers
pub fn build_rocket(config: &ConfigManager) -> Result<Rocket<Build>> {
    let github_client = GithubClient::new(&config.service)?;

    let server_config = ServerConfig {
        templates_dir: config.environment.templates_path.clone(),
        output_dir: config.environment.output_path.clone(),
    };

    let figment = rocket::Config::figment()
        .merge(("address", config.server.address.clone()))
        .merge(("port", config.server.port));

    Ok(rocket::custom(figment)
        .attach(Cors)
        .manage(server_config)
        .manage(github_client)
        .register(
            "/",
            catchers![bad_request, not_found, unprocessable_entity, internal_error],
        )
        .mount(
            "/api",
            routes![
                fetch_github,
                fetch_linkedin,
                generate_portfolio,
                get_templates,
                health,
                options,
            ],
        ))
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    config.ensure_directories().await?;

    info!("Starting portfolio generator API server");
    info!("Templates: {}", config.environment.templates_path.display());
    info!("Output: {}", config.environment.output_path.display());
    info!("GitHub API: {}", config.service.github_api_url);
    info!(
        "GitHub token: {}",
        if config.service.github_token.is_some() {
            "configured"
        } else {
            "not configured"
        }
    );
    info!(
        "Server: http://{}:{}",
        config.server.address, config.server.port
    );

    if let Err(e) = build_rocket(&config)?.launch().await {
        error!("Server stopped with error: {}", e);
        anyhow::bail!("Server failed: {}", e);
    }

    Ok(())
}
