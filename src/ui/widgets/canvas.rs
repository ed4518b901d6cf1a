//! Braille-canvas painters for the rain and wind visualizations.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Paragraph,
        canvas::{Canvas, Context, Line as Stroke},
    },
};

use super::shared::placeholder;
use crate::{
    app::{
        animation::{VisualState, Visualization},
        state::AppState,
    },
    domain::weather::{compass_direction, format_speed},
    ui::{
        layout::canvas_block,
        particles::{ParticleField, Surface, visible_drops},
        theme::Theme,
    },
};

pub fn render_precipitation(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let vis = &state.precipitation;
    let intensity = state.precipitation_intensity();
    let detail = state.bundle.as_ref().and_then(|bundle| {
        bundle
            .hourly
            .precipitation_sample(state.cursor.index(), vis.mode())
            .map(|sample| {
                format!(
                    "{:.0}% · {:.1} mm",
                    sample.probability_pct, sample.amount_mm
                )
            })
    });
    let block = canvas_block()
        .title(title("Precipitation", vis, detail, theme))
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(field) = vis.field() else {
        render_idle(frame, inner, state, theme);
        return;
    };
    let shown = visible_drops(intensity, field.len());
    let drops = &field.drops()[..shown];
    let surface = field.surface();
    let color = theme.rain;

    frame.render_widget(
        canvas(surface, theme).paint(|ctx| {
            let height = f64::from(surface.height);
            for drop in drops {
                let x = f64::from(drop.x);
                let head = height - f64::from(drop.y);
                ctx.draw(&Stroke::new(x, head, x, head + f64::from(drop.length), color));
            }
        }),
        inner,
    );
}

pub fn render_wind(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let vis = &state.wind;
    let speed = state.preferences.speed_unit;
    let detail = state.wind_direction().map(|bearing| {
        format!(
            "{} {}",
            format_speed(state.wind_drive(), speed),
            compass_direction(bearing)
        )
    });
    let block = canvas_block()
        .title(title("Wind", vis, detail, theme))
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(field) = vis.field() else {
        render_idle(frame, inner, state, theme);
        return;
    };
    let streaks = field.streaks();
    let surface = field.surface();
    let color = theme.wind;

    frame.render_widget(
        canvas(surface, theme).paint(|ctx| {
            let height = f64::from(surface.height);
            for streak in streaks {
                let y = height - f64::from(streak.y);
                let head = f64::from(streak.x);
                let tail = head - 3.0 * f64::from(streak.radius);
                ctx.draw(&Stroke::new(tail, y, head, y, color));
            }
        }),
        inner,
    );
}

fn canvas<'a, F>(surface: Surface, theme: &Theme) -> Canvas<'a, F>
where
    F: Fn(&mut Context),
{
    Canvas::default()
        .marker(Marker::Braille)
        .background_color(theme.surface)
        .x_bounds([0.0, f64::from(surface.width)])
        .y_bounds([0.0, f64::from(surface.height)])
}

fn title<'a, F: ParticleField>(
    name: &'a str,
    vis: &Visualization<F>,
    detail: Option<String>,
    theme: &Theme,
) -> Line<'a> {
    let state_color = match vis.state() {
        VisualState::Active => theme.accent,
        VisualState::Idle => theme.muted_text,
    };
    let mut spans = vec![
        Span::styled(format!(" {name} "), Style::default().fg(state_color)),
        Span::styled(
            format!("[{}] ", vis.mode().label()),
            Style::default().fg(theme.muted_text),
        ),
    ];
    if let Some(detail) = detail {
        spans.push(Span::styled(format!("{detail} "), Style::default().fg(theme.text)));
    }
    Line::from(spans)
}

fn render_idle(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let message = if state.bundle.is_none() {
        "Waiting for weather data"
    } else {
        "No hourly data"
    };
    frame.render_widget(Paragraph::new(placeholder(message, theme)), area);
}
