//! PetDash - a dashboard over Petfinder animal listings.
//!
//! Each page load exchanges client credentials for a token, fetches up to 50
//! animals, aggregates them and renders the result. Nothing is cached between
//! requests.
//!
//! # Modules
//!
//! - [`petfinder`]: Petfinder API client
//! - [`stats`]: Summary statistics over a fetch
//! - [`filter`]: Name and type filtering for the list
//! - [`charts`]: Chart series for the dashboard
//! - [`handlers`]: HTTP handlers for pages and JSON endpoints

pub mod app;
pub mod charts;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod petfinder;
pub mod state;
pub mod stats;

pub use app::router;
pub use state::{AppState, Config};
