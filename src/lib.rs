pub mod app;
pub mod config;
pub mod dom;
pub mod domain;
pub mod http;
pub mod telemetry;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use app::{Completion, NotificationPanelController, PanelEvent};
pub use config::PanelConfig;
