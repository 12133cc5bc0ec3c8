#![warn(clippy::all, rust_2018_idioms)]

//! egui client for chatdesk: the login form, toasts, and routing around it.

pub mod app;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::ChatdeskApp;
