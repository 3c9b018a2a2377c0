use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;

use crate::events::FrameSnapshot;
use crate::game::SessionStatus;
use crate::grid::{Cell, Grid};
use crate::presenter::TerminalPresenter;
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::{render_game_over_menu, render_pause_menu};

/// Terminal columns per grid cell, so cells come out roughly square.
const COLUMNS_PER_CELL: u16 = 2;

const GLYPH_CELL: &str = "██";
const GLYPH_APPLE: &str = "▐▌";

/// Renders the full game frame from the presenter's latest state.
pub fn render(frame: &mut Frame<'_>, grid: Grid, presenter: &TerminalPresenter) {
    let area = frame.area();
    let Some(snapshot) = presenter.last_frame() else {
        return;
    };

    let hud = HudInfo::from_frame(snapshot, presenter.score(), presenter.bonus_apples());
    let play_area = render_hud(frame, area, hud);
    let board_area = board_rect(play_area, grid);

    let block = Block::bordered().border_style(Style::new().fg(Color::DarkGray));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_apple(frame, inner, grid, snapshot);
    render_snake(frame, inner, grid, snapshot);

    match snapshot.status {
        SessionStatus::Paused => render_pause_menu(frame, board_area),
        SessionStatus::Over => {
            if let Some(notice) = presenter.game_over() {
                render_game_over_menu(frame, board_area, notice);
            }
        }
        SessionStatus::Running => {}
    }
}

/// Board rectangle including its border, centered horizontally in `area`.
fn board_rect(area: Rect, grid: Grid) -> Rect {
    let width = grid
        .width()
        .saturating_mul(COLUMNS_PER_CELL)
        .saturating_add(2)
        .min(area.width);
    let height = grid.height().saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height,
    }
}

fn render_apple(frame: &mut Frame<'_>, inner: Rect, grid: Grid, snapshot: &FrameSnapshot) {
    let Some((x, y)) = cell_to_terminal(inner, grid, snapshot.apple.position) else {
        return;
    };

    let color = if snapshot.apple.is_bonus() {
        Color::Yellow
    } else {
        Color::Red
    };
    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_APPLE, Style::new().fg(color));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, grid: Grid, snapshot: &FrameSnapshot) {
    let buffer = frame.buffer_mut();
    for (index, cell) in snapshot.body.iter().enumerate() {
        let Some((x, y)) = cell_to_terminal(inner, grid, *cell) else {
            continue;
        };

        let style = if index == 0 {
            Style::new().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(Color::Green)
        };
        buffer.set_string(x, y, GLYPH_CELL, style);
    }
}

fn cell_to_terminal(inner: Rect, grid: Grid, cell: Cell) -> Option<(u16, u16)> {
    let (column, row) = grid.column_row(cell)?;

    let x = inner.x.saturating_add(column.saturating_mul(COLUMNS_PER_CELL));
    let y = inner.y.saturating_add(row);
    if x.saturating_add(COLUMNS_PER_CELL) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
