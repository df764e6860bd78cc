pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod orchestrator;
pub mod synth;
pub mod transport;
pub mod ui;
pub mod state;

pub use app::router;
pub use config::{Config, Mode};
pub use orchestrator::{History, Orchestrator, Origin, Outcome};
pub use state::AppState;
