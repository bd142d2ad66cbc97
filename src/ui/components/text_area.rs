//! Multiline text input rendering

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Configuration for rendering a text area
pub struct TextAreaConfig<'a> {
    pub label: &'a str,
    pub value: &'a str,
    /// Shown dimmed when the value is empty
    pub placeholder: &'a str,
    pub is_active: bool,
    pub is_enabled: bool,
}

/// Draw a bordered multiline input with a cursor when active
pub fn render_text_area(frame: &mut Frame, area: Rect, config: TextAreaConfig) {
    let border_style = if config.is_active && config.is_enabled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if config.is_enabled {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let show_cursor = config.is_active && config.is_enabled;
    let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));
    let placeholder = Span::styled(config.placeholder, Style::default().fg(Color::DarkGray));

    let lines: Vec<Line> = if config.value.is_empty() {
        if show_cursor {
            vec![Line::from(vec![cursor, placeholder])]
        } else {
            vec![Line::from(placeholder)]
        }
    } else {
        // split('\n') keeps a trailing empty line so the cursor follows Enter
        let mut lines: Vec<Line> = config
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l, text_style)))
            .collect();
        if show_cursor {
            if let Some(last) = lines.last_mut() {
                last.spans.push(cursor);
            }
        }
        lines
    };

    let block = Block::default()
        .title(format!(" {} ", config.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
