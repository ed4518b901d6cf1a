use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Cell, Paragraph, Row, Table},
};

use super::shared::{panel_block, placeholder};
use crate::{
    app::state::AppState,
    domain::weather::{format_temp, weather_icon},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = panel_block(" 7-Day ", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(bundle) = state.bundle.as_ref().filter(|b| !b.daily.is_empty()) else {
        frame.render_widget(Paragraph::new(placeholder("No daily forecast", theme)), inner);
        return;
    };
    let unit = state.preferences.temperature_unit;

    let rows = bundle
        .daily
        .iter()
        .take(usize::from(inner.height))
        .enumerate()
        .map(|(idx, day)| {
            let name = if idx == 0 {
                "Today".to_string()
            } else {
                day.date.format("%a").to_string()
            };
            let icon = day
                .weather_code
                .map_or("", |code| weather_icon(code, state.icon_mode));
            let high = day.temperature_max_c.map_or_else(
                || Cell::from("--"),
                |t| Cell::from(format_temp(t, unit)).style(Style::default().fg(theme.temp_color(t))),
            );
            let low = day.temperature_min_c.map_or_else(
                || Cell::from("--"),
                |t| Cell::from(format_temp(t, unit)).style(Style::default().fg(theme.temp_color(t))),
            );
            let rain = day
                .precipitation_probability_max
                .map_or_else(String::new, |p| format!("{p:.0}%"));
            let amount = day
                .precipitation_sum_mm
                .filter(|mm| *mm > 0.0)
                .map_or_else(String::new, |mm| format!("{mm:.1}mm"));

            Row::new(vec![
                Cell::from(name).style(Style::default().fg(theme.text)),
                Cell::from(icon).style(Style::default().fg(theme.accent)),
                high,
                low,
                Cell::from(rain).style(Style::default().fg(theme.rain)),
                Cell::from(amount).style(Style::default().fg(theme.muted_text)),
            ])
        });

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(6),
        ],
    )
    .column_spacing(1);
    frame.render_widget(table, inner);
}
