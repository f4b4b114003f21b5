//! HTTP request handlers for API endpoints.

mod endpoints;
pub mod health;
pub mod reports;
pub mod resource;
