pub mod handlers;
pub mod render;

use crate::core::directory::ContactDirectory;
use axum::routing::{delete, get, post, put};
use axum::Router;

#[derive(Debug, Clone)]
pub struct AppState {
    pub directory: ContactDirectory,
}

pub fn router(directory: ContactDirectory) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/contacts", get(handlers::list_contacts))
        .route("/activate", put(handlers::activate))
        .route("/deactivate", put(handlers::deactivate))
        .route("/search_contact", get(handlers::search_contact))
        .route("/add_contact", post(handlers::add_contact))
        .route("/contact/:contact_id", delete(handlers::delete_contact))
        .route("/count-contacts", get(handlers::count_contacts))
        .route("/count-active-contacts", get(handlers::count_active_contacts))
        .route("/count-inactive-contacts", get(handlers::count_inactive_contacts))
        .route("/validate_email", post(handlers::validate_email))
        .route("/modal", get(handlers::modal))
        .route("/health", get(handlers::health))
        .with_state(AppState { directory })
}
