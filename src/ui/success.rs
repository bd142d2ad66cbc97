//! Success view rendering

use crate::app::App;
use crate::state::SubmissionResult;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the acknowledgement view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.state.form.state().result.as_ref() else {
        return;
    };

    let has_response = result.ai_response.is_some();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Thank-you message
            if has_response {
                Constraint::Min(4)
            } else {
                Constraint::Length(0)
            },
            Constraint::Length(BUTTON_HEIGHT), // Submit another
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(thank_you(result), chunks[0]);

    if let Some(response) = &result.ai_response {
        let block = Block::default()
            .title(" Our Response: ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let paragraph = Paragraph::new(response.as_str())
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(paragraph, chunks[1]);
    }

    render_button(frame, chunks[2], "Submit Another Review", true, true);
}

fn thank_you(result: &SubmissionResult) -> Paragraph<'_> {
    let received = result.received_at.format("%H:%M:%S");
    let receipt = match &result.review_id {
        Some(id) => format!("Review {id} · received {received}"),
        None => format!("Received {received}"),
    };

    let lines = vec![
        Line::from(Span::styled(
            "✓",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Thank You!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Your review has been submitted successfully."),
        Line::from(""),
        Line::from(Span::styled(receipt, Style::default().fg(Color::DarkGray))),
    ];

    Paragraph::new(lines).alignment(Alignment::Center)
}
