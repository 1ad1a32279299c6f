// src/types/mod.rs
//! Data shapes shared by the fetchers, the renderer and the web layer

pub mod github;
pub mod linkedin;
pub mod portfolio;
pub mod response;

pub use github::{GithubData, GithubProfile, RepositorySummary};
pub use linkedin::{LinkedinData, LinkedinProfile};
pub use portfolio::{GeneratedFiles, PersonalInfo, PortfolioContext, TemplateBundle, TemplateFile};

use serde::{Deserialize, Deserializer};

/// Deserialize `null` the same way as an absent field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
