pub mod layout;
pub mod particles;
pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    app::state::AppState,
    domain::weather::{WeatherCategory, weather_code_to_category},
    ui::{
        layout::{MIN_HEIGHT, MIN_WIDTH, dashboard_layout},
        theme::{Theme, theme_for},
    },
};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let theme = current_theme(state);
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.surface).fg(theme.text)),
        area,
    );

    let Some(layout) = dashboard_layout(area) else {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
        ))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("skycast"));
        frame.render_widget(warning, area);
        return;
    };

    widgets::header::render(frame, layout.header, state, &theme);
    widgets::current::render(frame, layout.current, state, &theme);
    widgets::air_quality::render(frame, layout.air_quality, state, &theme);
    widgets::daily::render(frame, layout.daily, state, &theme);
    widgets::hourly::render(frame, layout.hourly, state, &theme);
    widgets::canvas::render_precipitation(frame, layout.precipitation, state, &theme);
    widgets::canvas::render_wind(frame, layout.wind, state, &theme);
    widgets::status::render(frame, layout.status, state, &theme);

    if state.search.active {
        widgets::search::render(frame, centered_rect(60, 50, area), state, &theme);
    }
}

pub fn current_theme(state: &AppState) -> Theme {
    let (category, is_day) = state.bundle.as_ref().map_or((WeatherCategory::Unknown, true), |b| {
        (
            weather_code_to_category(b.current.weather_code),
            b.current.is_day,
        )
    });
    theme_for(state.preferences.theme, category, is_day)
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(r);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}
