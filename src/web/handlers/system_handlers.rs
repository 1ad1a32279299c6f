// src/web/handlers/system_handlers.rs
use crate::core::{TemplateEngine, TemplateInfo};

use rocket::serde::json::Json;
use tracing::debug;

pub async fn get_templates_handler() -> Json<Vec<TemplateInfo>> {
    Json(TemplateEngine::catalog())
}

pub async fn health_handler() -> Json<&'static str> {
    debug!("Health check");
    Json("OK")
}
