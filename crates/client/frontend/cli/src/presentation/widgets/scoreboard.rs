//! Minted collectibles, newest last.

use client_frontend_core::{MINT_LIMIT_NOTE, ScoreboardView};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view: &ScoreboardView, theme: &RatatuiTheme) {
    let mut items: Vec<ListItem> = view
        .rows
        .iter()
        .map(|row| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<26}", row.handle), theme.title()),
                Span::raw(format!("{:<34}", row.description)),
                Span::styled(row.owner.as_str(), theme.accent()),
            ]))
        })
        .collect();

    if items.is_empty() {
        items.push(ListItem::new(Span::styled(
            "No collectibles minted yet",
            theme.hint(),
        )));
    }

    let title = format!(" Scoreboard ({}) - {} ", view.rows.len(), MINT_LIMIT_NOTE);
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(list, area);
}
