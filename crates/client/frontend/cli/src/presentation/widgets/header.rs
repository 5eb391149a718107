//! Header widget displaying score and time.

use client_frontend_core::HudView;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the header panel with the HUD labels.
///
/// The labels freeze once the scene has ended.
pub fn render(frame: &mut Frame, area: Rect, hud: &HudView, ended: bool, theme: &RatatuiTheme) {
    let mut spans = vec![
        Span::styled(hud.score.as_str(), theme.title()),
        Span::raw("  |  "),
        Span::styled(hud.time.as_str(), theme.accent()),
    ];
    if ended {
        spans.push(Span::styled("  [GAME OVER]", theme.hint()));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Stars "));

    frame.render_widget(paragraph, area);
}
