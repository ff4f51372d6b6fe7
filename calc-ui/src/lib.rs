pub mod app;
pub mod config;
pub mod logging;
pub mod screens;
pub mod session;
pub mod toast;

pub use app::{App, Outcome};
pub use config::AppConfig;
pub use screens::Screen;
