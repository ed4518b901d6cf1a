use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::{
    app::state::{AppState, StatusKind},
    ui::theme::Theme,
};

const KEY_HINTS: &str = "/ search  l locate  ←/→ hour  p/w window  u/s units  t theme  r refresh  q quit";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let color = match state.status.kind {
        StatusKind::Info => theme.muted_text,
        StatusKind::Loading => theme.info,
        StatusKind::Error => theme.danger,
    };
    frame.render_widget(
        Paragraph::new(Line::styled(
            format!(" {}", state.status.message),
            Style::default().fg(color),
        )),
        area,
    );

    let message_width = state.status.message.chars().count() + 2;
    if usize::from(area.width) >= message_width + KEY_HINTS.chars().count() {
        frame.render_widget(
            Paragraph::new(Line::styled(KEY_HINTS, Style::default().fg(theme.muted_text)))
                .alignment(Alignment::Right),
            area,
        );
    }
}
