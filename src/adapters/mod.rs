// Adapters layer: concrete implementations for external systems (users API, http).

pub mod users_api;
pub mod web;
