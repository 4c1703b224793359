mod app;
mod presentation;
mod session;
mod theme;

pub use session::run_tui;
