// Application and presentation layers of the service message web app

pub mod application;
pub mod client;
pub mod presentation;
pub mod server;

pub use presentation::{build_router, AppState};
