use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
};

use super::shared::{panel_block, placeholder, sparkline_blocks};
use crate::{
    app::state::AppState,
    domain::weather::{HourlyForecast, convert_speed, format_temp, weather_icon},
    ui::{layout::visible_hour_count, theme::Theme},
};

const TREND_HOURS: usize = 24;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let Some(bundle) = state.bundle.as_ref().filter(|b| !b.hourly.is_empty()) else {
        let block = panel_block(" Hourly ", theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(placeholder("No hourly forecast", theme)), inner);
        return;
    };

    let cursor = state.cursor.index();
    let trend: Vec<f32> = bundle
        .hourly
        .window(cursor, TREND_HOURS)
        .iter()
        .filter_map(|hour| hour.temperature_c)
        .collect();
    let title = Line::from(vec![
        Span::raw(" Hourly "),
        Span::styled(
            format!("{}/{} ", cursor + 1, bundle.hourly.len()),
            Style::default().fg(theme.muted_text),
        ),
        Span::styled(
            sparkline_blocks(&trend, trend.len().min(TREND_HOURS)),
            Style::default().fg(theme.temp_warm),
        ),
        Span::raw(" "),
    ]);
    let block = panel_block(title, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hours = bundle
        .hourly
        .window(cursor, visible_hour_count(inner.width));
    let window = state.cursor.lookahead();
    let column_style = |offset: usize| {
        if offset == 0 {
            Style::default()
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else if offset < window {
            Style::default().bg(theme.highlight)
        } else {
            Style::default()
        }
    };

    let cells = |f: &dyn Fn(&HourlyForecast) -> (String, Style)| {
        hours
            .iter()
            .enumerate()
            .map(|(offset, hour)| {
                let (text, style) = f(hour);
                Cell::from(text).style(style.patch(column_style(offset)))
            })
            .collect::<Vec<_>>()
    };

    let unit = state.preferences.temperature_unit;
    let speed = state.preferences.speed_unit;
    let rows = vec![
        Row::new(cells(&|hour| {
            (
                hour.time.format("%H:%M").to_string(),
                Style::default().fg(theme.muted_text),
            )
        })),
        Row::new(cells(&|hour| {
            let icon = hour
                .weather_code
                .map_or("", |code| weather_icon(code, state.icon_mode));
            let temp = hour
                .temperature_c
                .map_or_else(|| "--".to_string(), |t| format_temp(t, unit));
            let color = hour.temperature_c.map_or(theme.text, |t| theme.temp_color(t));
            (format!("{icon} {temp}"), Style::default().fg(color))
        })),
        Row::new(cells(&|hour| {
            let text = hour
                .precipitation_probability
                .map_or_else(|| "--".to_string(), |p| format!("☂{p:.0}%"));
            (text, Style::default().fg(theme.rain))
        })),
        Row::new(cells(&|hour| {
            let text = hour.wind_speed_kmh.map_or_else(
                || "--".to_string(),
                |w| format!("{:.0}{}", convert_speed(w, speed), speed.label()),
            );
            (text, Style::default().fg(theme.wind))
        })),
    ];

    let widths = vec![Constraint::Ratio(1, hours.len().max(1) as u32); hours.len()];
    frame.render_widget(Table::new(rows, widths).column_spacing(0), inner);
}
