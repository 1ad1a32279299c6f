pub mod github_handlers;
pub mod linkedin_handlers;
pub mod portfolio_handlers;
pub mod system_handlers;

pub use github_handlers::*;
pub use linkedin_handlers::*;
pub use portfolio_handlers::*;
pub use system_handlers::*;
