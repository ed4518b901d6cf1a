use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use super::{AppState, Status};
use crate::{
    app::{
        animation::VisualKind,
        events::{AppEvent, FetchTarget, spawn_suggestions, wants_suggestions},
    },
    cli::ThemeArg,
};

fn command_char(key: KeyEvent) -> Option<char> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }
    if let KeyCode::Char(ch) = key.code {
        Some(ch.to_ascii_lowercase())
    } else {
        None
    }
}

fn is_interrupt(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c'))
}

impl AppState {
    pub(super) fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind == KeyEventKind::Release {
            return Ok(());
        }
        if is_interrupt(key) {
            self.quit();
            return Ok(());
        }

        if self.search.active {
            self.handle_search_key(key, tx);
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Left => self.cursor.retreat(),
            KeyCode::Right => self.cursor.advance(),
            _ => match command_char(key) {
                Some('q') => self.quit(),
                Some('/') => {
                    self.search.close();
                    self.search.active = true;
                }
                Some('l') => self.start_fetch(FetchTarget::Device, tx),
                Some('r') => self.refetch(tx),
                Some('p') => self.toggle_mode(VisualKind::Precipitation, tx),
                Some('w') => self.toggle_mode(VisualKind::Wind, tx),
                Some('u') => {
                    self.preferences.temperature_unit = self.preferences.temperature_unit.toggled();
                    self.persist_preferences();
                }
                Some('s') => {
                    self.preferences.speed_unit = self.preferences.speed_unit.toggled();
                    self.persist_preferences();
                }
                Some('t') => {
                    self.preferences.theme = match self.preferences.theme {
                        ThemeArg::Dark => ThemeArg::Light,
                        ThemeArg::Light => ThemeArg::Dark,
                    };
                    self.persist_preferences();
                }
                _ => {}
            },
        }
        Ok(())
    }

    fn handle_search_key(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) {
        match key.code {
            KeyCode::Esc => self.search.close(),
            KeyCode::Enter => self.submit_search(tx),
            KeyCode::Up => {
                self.search.selected = match self.search.selected {
                    None | Some(0) => None,
                    Some(idx) => Some(idx - 1),
                };
            }
            KeyCode::Down => {
                let count = self.search.suggestions.len();
                if count > 0 {
                    self.search.selected = Some(match self.search.selected {
                        None => 0,
                        Some(idx) => (idx + 1).min(count - 1),
                    });
                }
            }
            KeyCode::Backspace => {
                if self.search.query.pop().is_some() {
                    self.query_changed(tx);
                }
            }
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.search.query.push(ch);
                self.query_changed(tx);
            }
            _ => {}
        }
    }

    /// Every keystroke cancels the pending lookup and restarts the debounce.
    fn query_changed(&mut self, tx: &mpsc::Sender<AppEvent>) {
        self.search.cancel_pending();
        self.search.selected = None;
        if wants_suggestions(&self.search.query) {
            self.search.pending = Some(spawn_suggestions(
                self.service.clone(),
                self.search.query.trim().to_string(),
                tx.clone(),
            ));
        } else {
            self.search.suggestions.clear();
        }
    }

    fn submit_search(&mut self, tx: &mpsc::Sender<AppEvent>) {
        let picked = self
            .search
            .selected
            .and_then(|idx| self.search.suggestions.get(idx))
            .cloned();
        let query = self.search.query.trim().to_string();
        self.search.close();

        match picked {
            Some(location) => self.start_fetch(FetchTarget::Place(location), tx),
            None if !query.is_empty() => self.start_fetch(FetchTarget::Query(query), tx),
            None => self.status = Status::info("Type a city name to search"),
        }
    }
}
