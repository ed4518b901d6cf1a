use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::shared::panel_block;
use crate::{app::state::AppState, ui::theme::Theme};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = panel_block(" skycast ", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let place = state.bundle.as_ref().map_or_else(
        || "No location yet".to_string(),
        |bundle| bundle.location.display_name(),
    );
    let units = format!(
        "{} · {}",
        state.preferences.temperature_unit.symbol(),
        state.preferences.speed_unit.label()
    );
    let clock = state.now.format("%a %d %b  %H:%M:%S").to_string();

    let left = Line::from(vec![
        Span::styled(
            place,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("   {units}"), Style::default().fg(theme.muted_text)),
    ]);
    frame.render_widget(Paragraph::new(left), inner);
    frame.render_widget(
        Paragraph::new(Line::styled(clock, Style::default().fg(theme.accent)))
            .alignment(Alignment::Right),
        inner,
    );
}
