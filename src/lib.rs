//! Static portfolio generator: pulls GitHub (and LinkedIn) profile data,
//! renders it into an HTML/CSS/JS template and serves the result as a zip.

pub mod core;
pub mod types;
pub mod utils;
pub mod web;

pub use crate::core::{ConfigManager, GithubClient, Renderer, TemplateEngine};
pub use web::{build_rocket, start_web_server};
