mod error;
mod handlers;
mod router;
mod types;
pub mod views;

pub use error::{AppError, AppResult};
pub use handlers::login::INVALID_CREDENTIALS;
pub use router::build_router;
pub use types::AppState;
