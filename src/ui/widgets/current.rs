use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::shared::{label_value, panel_block, placeholder};
use crate::{
    app::state::AppState,
    domain::weather::{
        PrecipitationIntensity, UvBand, VisibilityBand, compass_direction, format_speed,
        weather_icon, weather_label,
    },
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = panel_block(" Now ", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(bundle) = &state.bundle else {
        let message = if state.loading {
            "Loading weather..."
        } else {
            "No weather data"
        };
        frame.render_widget(Paragraph::new(placeholder(message, theme)), inner);
        return;
    };

    let now = &bundle.current;
    let prefs = state.preferences;
    let unit = prefs.temperature_unit;

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", weather_icon(now.weather_code, state.icon_mode)),
                Style::default().fg(theme.accent),
            ),
            Span::styled(
                format!("{}{}", bundle.current_temp(unit), unit.symbol()),
                Style::default()
                    .fg(theme.temp_color(now.temperature_c))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", weather_label(now.weather_code)),
                Style::default().fg(theme.text),
            ),
        ]),
        label_value(
            "Feels like",
            match bundle.high_low(unit) {
                Some((high, low)) => format!("{}°  H {high}° L {low}°", bundle.feels_like(unit)),
                None => format!("{}°", bundle.feels_like(unit)),
            },
            theme,
        ),
        label_value(
            "Wind",
            format!(
                "{} {}{}",
                format_speed(now.wind_speed_kmh, prefs.speed_unit),
                compass_direction(now.wind_direction_deg),
                now.wind_gusts_kmh
                    .map(|g| format!(", gusts {}", format_speed(g, prefs.speed_unit)))
                    .unwrap_or_default()
            ),
            theme,
        ),
        label_value("Humidity", format!("{:.0}%", now.relative_humidity), theme),
        label_value(
            "Precip",
            format!(
                "{:.1} mm ({})",
                now.precipitation_mm,
                PrecipitationIntensity::from_mm(now.precipitation_mm).label()
            ),
            theme,
        ),
    ];

    if let Some(uv) = now.uv_index {
        let band = UvBand::from_index(uv);
        lines.push(Line::from(vec![
            Span::styled(format!("{:<11}", "UV"), Style::default().fg(theme.muted_text)),
            Span::styled(
                format!("{uv:.0} {}", band.label()),
                Style::default().fg(theme.uv_color(band)),
            ),
            Span::styled(format!("  {}", band.advice()), Style::default().fg(theme.muted_text)),
        ]));
    }
    if let Some(meters) = now.visibility_m {
        let band = VisibilityBand::from_meters(meters);
        lines.push(label_value(
            "Visibility",
            format!("{:.1} km {}", meters / 1000.0, band.label()),
            theme,
        ));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
