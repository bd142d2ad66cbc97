//! UI module for rendering the TUI

mod components;
mod form;
mod layout;
mod success;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area);

    match app.state.current_view() {
        View::Form => form::draw(frame, main_area, app),
        View::Success => success::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}
