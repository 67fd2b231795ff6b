// src/portal/mod.rs
//! Role-based portal pages over the bundled fixture data

pub mod fixtures;
pub mod handlers;
pub mod live_views;
pub mod metrics;
pub mod models;
pub mod navigation;
pub mod routes;

#[cfg(test)]
mod tests;

pub use fixtures::Fixtures;
pub use live_views::LiveViews;
pub use routes::portal_routes;
