//! Pages module for the application.
//!
//! This module contains the different pages that can be displayed based on the route:
//! - `login_page`: Login form for unauthenticated users
//! - `chat_page`: Landing page for authenticated users

mod chat_page;
mod login_page;

pub use chat_page::chat_page;
pub use login_page::login_page;
