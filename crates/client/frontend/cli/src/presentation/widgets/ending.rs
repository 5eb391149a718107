//! Ending screen: nickname entry and mint outcome.

use client_frontend_core::EndingView;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view: &EndingView, name: &str, theme: &RatatuiTheme) {
    let mut lines = Vec::new();

    if let Some(title) = view.title {
        lines.push(Line::from(Span::styled(title, theme.title())));
        lines.push(Line::default());
    }

    if view.accepts_name {
        lines.push(Line::from(vec![
            Span::raw("Nickname: "),
            Span::styled(format!("{name}_"), theme.accent()),
        ]));
        lines.push(Line::from(Span::styled("enter to mint", theme.hint())));
    }

    if let Some(progress) = view.progress {
        lines.push(Line::from(Span::styled(progress, theme.accent())));
    }

    if let Some(message) = &view.message {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(message.as_str(), theme.title())));
    }

    if view.can_rearm {
        lines.push(Line::from(Span::styled(
            "enter to try again, esc to quit",
            theme.hint(),
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(view.note, theme.hint())));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Mint "));

    frame.render_widget(paragraph, area);
}
