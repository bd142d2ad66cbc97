//! Application state module

mod app_state;
mod review_form;

pub use app_state::*;
pub use review_form::*;
