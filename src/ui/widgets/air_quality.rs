use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::shared::{label_value, panel_block, placeholder};
use crate::{app::state::AppState, domain::air_quality::EuropeanAqiBand, ui::theme::Theme};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = panel_block(" Air quality ", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(reading) = state.bundle.as_ref().map(|b| &b.air_quality) else {
        frame.render_widget(Paragraph::new(placeholder("—", theme)), inner);
        return;
    };
    if reading.is_empty() {
        frame.render_widget(
            Paragraph::new(placeholder("No air-quality data", theme)),
            inner,
        );
        return;
    }

    let mut lines = Vec::new();
    if let Some(band) = reading.band() {
        let index = reading
            .us_aqi
            .map(|aqi| format!("AQI {aqi}"))
            .or_else(|| reading.us_epa_index.map(|idx| format!("EPA {idx}")))
            .unwrap_or_default();
        lines.push(Line::from(vec![
            Span::styled(
                format!("{index} "),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                band.label(),
                Style::default()
                    .fg(theme.aqi_color(band))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::styled(
            band.implication(),
            Style::default().fg(theme.muted_text),
        ));
    }
    if let Some(eaqi) = reading.european_aqi {
        lines.push(label_value(
            "EU AQI",
            format!("{eaqi} {}", EuropeanAqiBand::from_index(eaqi).label()),
            theme,
        ));
    }
    for (label, value) in reading.pollutants() {
        lines.push(label_value(label, format!("{value:.1} µg/m³"), theme));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
