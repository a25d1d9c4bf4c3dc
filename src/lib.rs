pub mod app;
pub mod config;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod models;
pub mod state;
pub mod storage;
pub mod table;
pub mod ui;
pub mod weather;
pub mod week;

pub use app::router;
pub use config::Config;
pub use state::AppState;
