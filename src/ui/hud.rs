use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::events::FrameSnapshot;

/// Values shown on the HUD row.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct HudInfo {
    pub score: u32,
    pub length: usize,
    pub frame_limit: u32,
    pub bonus_apples: u32,
}

impl HudInfo {
    #[must_use]
    pub fn from_frame(frame: &FrameSnapshot, score: u32, bonus_apples: u32) -> Self {
        Self {
            score,
            length: frame.target_length,
            frame_limit: frame.frame_limit,
            bonus_apples,
        }
    }
}

/// Renders the one-line HUD below the board and returns the area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, info: HudInfo) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(hud_line(info))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        hud_area,
    );

    play_area
}

fn hud_line(info: HudInfo) -> Line<'static> {
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::raw("Score: "),
        Span::styled(info.score.to_string(), value),
        Span::raw("  Length: "),
        Span::styled(info.length.to_string(), value),
        Span::raw("  Speed: "),
        Span::styled(format!("1/{}", info.frame_limit), value),
        Span::raw("  Golden: "),
        Span::styled(info.bonus_apples.to_string(), value.fg(Color::Yellow)),
    ])
}
