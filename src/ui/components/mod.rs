//! Reusable UI components

mod button;
mod text_area;

pub use button::{render_button, BUTTON_HEIGHT};
pub use text_area::{render_text_area, TextAreaConfig};
