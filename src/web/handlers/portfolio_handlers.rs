// src/web/handlers/portfolio_handlers.rs
//! Portfolio generation: render the chosen template and return it as a zip
use crate::core::archiver::DOWNLOAD_NAME;
use crate::core::{Archiver, Renderer, TemplateEngine};
use crate::utils::normalize_template_id;
use crate::web::types::{
    ApiError, GeneratePortfolioRequest, ServerConfig, StandardErrorResponse, ZipResponse,
};

use anyhow::Context;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

pub async fn generate_portfolio_handler(
    request: Json<GeneratePortfolioRequest>,
    config: &State<ServerConfig>,
) -> Result<ZipResponse, ApiError> {
    let GeneratePortfolioRequest {
        form_data,
        github_data,
        linkedin_data,
        template_id,
    } = request.into_inner();

    let template_id = normalize_template_id(template_id.as_deref());
    let span = info_span!(
        "portfolio_generation",
        request_id = %Uuid::new_v4(),
        template = %template_id
    );

    let renderer = Renderer::new(TemplateEngine::new(config.templates_dir.clone()));
    let archiver = Archiver::new(config.output_dir.clone());

    let result: anyhow::Result<Vec<u8>> = async {
        info!(
            "Generating portfolio for '{}' ({} form fields)",
            form_data.name().unwrap_or_else(|| "anonymous".to_string()),
            form_data.len()
        );
        let files = renderer
            .render(&template_id, form_data, github_data, linkedin_data)
            .await?;

        let archive = tokio::task::spawn_blocking(move || archiver.package(&files))
            .await
            .context("Archive task failed")??;
        Ok(archive)
    }
    .instrument(span)
    .await;

    match result {
        Ok(archive) => {
            info!(
                "Portfolio generated with template '{}' ({} bytes)",
                template_id,
                archive.len()
            );
            Ok(ZipResponse::attachment(archive, DOWNLOAD_NAME))
        }
        Err(e) => {
            error!("Portfolio generation failed: {:#}", e);
            Err(StandardErrorResponse::new(
                format!("Failed to generate portfolio: {:#}", e),
                "GENERATION_FAILED".to_string(),
                vec![
                    "Try a different template".to_string(),
                    "Contact support if the problem persists".to_string(),
                ],
            )
            .with_status(Status::InternalServerError))
        }
    }
}
