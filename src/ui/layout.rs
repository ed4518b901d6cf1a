use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Borders},
};

use crate::ui::particles::Surface;

pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

/// Panel areas for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub header: Rect,
    pub current: Rect,
    pub air_quality: Rect,
    pub daily: Rect,
    pub hourly: Rect,
    pub precipitation: Rect,
    pub wind: Rect,
    pub status: Rect,
}

/// `None` when the terminal is below the minimum size.
#[must_use]
pub fn dashboard_layout(area: Rect) -> Option<DashboardLayout> {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        return None;
    }

    let [header, top, hourly, canvases, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(8),
        Constraint::Length(6),
        Constraint::Min(6),
        Constraint::Length(1),
    ])
    .areas(area);

    let [current, air_quality, daily] = Layout::horizontal([
        Constraint::Percentage(38),
        Constraint::Percentage(27),
        Constraint::Percentage(35),
    ])
    .areas(top);

    let [precipitation, wind] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(canvases);

    Some(DashboardLayout {
        header,
        current,
        air_quality,
        daily,
        hourly,
        precipitation,
        wind,
        status,
    })
}

/// Bordered block used by every canvas panel.
pub fn canvas_block<'a>() -> Block<'a> {
    Block::default().borders(Borders::ALL)
}

/// Drawing surfaces of the precipitation and wind canvases. Both are empty
/// when the dashboard does not fit.
#[must_use]
pub fn canvas_surfaces(area: Rect) -> (Surface, Surface) {
    let Some(layout) = dashboard_layout(area) else {
        return (Surface::default(), Surface::default());
    };
    (
        panel_surface(layout.precipitation),
        panel_surface(layout.wind),
    )
}

fn panel_surface(panel: Rect) -> Surface {
    let inner = canvas_block().inner(panel);
    Surface::from_cells(inner.width, inner.height)
}

#[must_use]
pub fn visible_hour_count(width: u16) -> usize {
    match width {
        130..=u16::MAX => 12,
        100..=129 => 10,
        _ => 8,
    }
}
