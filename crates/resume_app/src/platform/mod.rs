mod app;
mod cli;
mod config;
mod effects;
mod files;
mod input;
mod ui;

pub use app::run_app;
