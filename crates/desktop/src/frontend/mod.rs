//! Presentation layer: display models, form state and the terminal front end.

pub mod app;
pub mod form;
pub mod format;
pub mod terminal;
pub mod views;

pub use app::{Dashboard, DashboardView, Prompter};
pub use format::format_currency;
