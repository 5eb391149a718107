//! Level view: platforms and live bodies scaled to the panel.

use ratatui::{
    Frame,
    layout::Rect as Area,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::physics::{ArcadePhysics, Rect};
use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Area, physics: &ArcadePhysics, theme: &RatatuiTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" arrows move, up jumps, tab scoreboard, esc quits ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let lines = rasterize(physics, inner.width as usize, inner.height as usize, theme);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Maps world pixels onto a `cols` by `rows` character grid.
fn rasterize(
    physics: &ArcadePhysics,
    cols: usize,
    rows: usize,
    theme: &RatatuiTheme,
) -> Vec<Line<'static>> {
    let world = physics.world();
    let scale_x = cols as f32 / world.width;
    let scale_y = rows as f32 / world.height;

    let mut grid = vec![vec![(' ', theme.sky()); cols]; rows];

    let mut fill = |rect: &Rect, cell: (char, Style)| {
        let col0 = ((rect.x - world.x) * scale_x).floor().max(0.0) as usize;
        let col1 = (((rect.right() - world.x) * scale_x).ceil() as usize).min(cols);
        let row0 = ((rect.y - world.y) * scale_y).floor().max(0.0) as usize;
        let row1 = (((rect.bottom() - world.y) * scale_y).ceil() as usize)
            .clamp(row0 + 1, rows.max(row0 + 1))
            .min(rows);
        for row in grid.iter_mut().take(row1).skip(row0) {
            for slot in row.iter_mut().take(col1).skip(col0) {
                *slot = cell;
            }
        }
    };

    for platform in physics.platforms() {
        fill(platform, theme.platform());
    }
    for (_, body) in physics.bodies() {
        let center = body.position;
        fill(&Rect::new(center.x, center.y, 1.0, 1.0), theme.body(body.kind));
    }

    grid.into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(ch, style)| Span::styled(ch.to_string(), style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use game_core::{BodyKind, EntityId, PhysicsSource, Position};

    use super::*;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn draws_ground_and_bodies() {
        let mut physics = ArcadePhysics::new();
        physics.spawn(EntityId::PLAYER, BodyKind::Player, Position::new(100.0, 450.0));
        physics.spawn(EntityId(1), BodyKind::Collectible, Position::new(12.0, 10.0));

        let rows = text(&rasterize(&physics, 80, 30, &RatatuiTheme));

        assert_eq!(rows.len(), 30);
        assert!(rows[29].chars().all(|ch| ch == '='));
        assert_eq!(rows[22].chars().nth(10), Some('@'));
        assert_eq!(rows[0].chars().nth(1), Some('*'));
    }
}
