mod app;
mod config;
mod scatter;

pub use app::run_native;
