//! Review form rendering

use crate::app::App;
use crate::state::{Focus, MAX_RATING, MAX_REVIEW_CHARS};
use crate::ui::components::{render_button, render_text_area, TextAreaConfig, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const STAR: &str = "★";

/// Draw the review form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let has_error = form.state().error_message.is_some();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),                             // Rating
            Constraint::Min(5),                                // Review text
            Constraint::Length(1),                             // Char count
            Constraint::Length(if has_error { 2 } else { 0 }), // Error
            Constraint::Length(BUTTON_HEIGHT),                 // Submit
        ])
        .split(area);

    draw_rating(frame, chunks[0], app);

    render_text_area(
        frame,
        chunks[1],
        TextAreaConfig {
            label: "Write your review",
            value: &form.state().review_text,
            placeholder: "Tell us about your experience...",
            is_active: app.state.focus == Focus::ReviewText,
            is_enabled: !form.state().submitting,
        },
    );

    let count = Paragraph::new(format!(
        "{} / {} characters",
        form.char_count(),
        MAX_REVIEW_CHARS
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Right);
    frame.render_widget(count, chunks[2]);

    if let Some(error) = &form.state().error_message {
        let error = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true });
        frame.render_widget(error, chunks[3]);
    }

    let label = if form.state().submitting {
        "Submitting..."
    } else {
        "Submit Review"
    };
    render_button(
        frame,
        chunks[4],
        label,
        app.state.focus == Focus::Submit,
        form.can_submit(),
    );
}

fn draw_rating(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let is_active = app.state.focus == Focus::Rating && !form.state().submitting;
    let rating = form.state().rating;

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut stars: Vec<Span> = (1..=MAX_RATING)
        .flat_map(|value| {
            let style = if value <= rating {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            [Span::styled(STAR, style), Span::raw(" ")]
        })
        .collect();

    if let Some(label) = form.rating_label() {
        stars.push(Span::raw(" "));
        stars.push(Span::styled(label, Style::default().fg(Color::Yellow)));
    }

    let hint = Line::from(Span::styled(
        "←/→ or 1-5 to choose",
        Style::default().fg(Color::DarkGray),
    ));

    let block = Block::default()
        .title(" Rate your experience ")
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(vec![Line::from(stars), hint]).block(block),
        area,
    );
}
