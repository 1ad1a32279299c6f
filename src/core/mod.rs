// src/core/mod.rs
//! Portfolio pipeline: fetch profile data, resolve templates, render, archive

pub mod archiver;
pub mod config_manager;
pub mod fs_ops;
pub mod github_client;
pub mod linkedin;
pub mod renderer;
pub mod template_engine;

pub use archiver::Archiver;
pub use config_manager::ConfigManager;
pub use fs_ops::FsOps;
pub use github_client::GithubClient;
pub use linkedin::parse_linkedin_profile;
pub use renderer::Renderer;
pub use template_engine::{TemplateEngine, TemplateInfo};
