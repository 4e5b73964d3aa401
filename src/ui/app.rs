//! Main TUI application state and logic

use crate::catalog::flavor::capitalize;
use crate::catalog::{Concept, Interest};
use crate::session::Session;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// How long a freshly appended item stays highlighted
pub const FLASH_DURATION: Duration = Duration::from_millis(400);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Interests,
    Concepts,
    Explanation,
}

impl FocusedPane {
    /// Move focus to the next pane (interests -> concepts -> explanation)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Interests => FocusedPane::Concepts,
            FocusedPane::Concepts => FocusedPane::Explanation,
            FocusedPane::Explanation => FocusedPane::Interests,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Interests => FocusedPane::Explanation,
            FocusedPane::Concepts => FocusedPane::Interests,
            FocusedPane::Explanation => FocusedPane::Concepts,
        }
    }
}

/// Highlight on the most recently appended demo item
#[derive(Debug, Clone, Copy)]
pub struct Flash {
    pub index: usize,
    pub started: Instant,
}

/// The main application state
pub struct App {
    /// Selection and demo state
    pub session: Session,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Picker cursors
    pub interest_cursor: Interest,
    pub concept_cursor: Concept,

    pub explanation_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    pub flash: Option<Flash>,
}

impl App {
    /// Create a new app around an existing session
    pub fn new(session: Session) -> Self {
        let focused_pane = if session.interest().is_some() {
            FocusedPane::Concepts
        } else {
            FocusedPane::Interests
        };
        App {
            interest_cursor: session.interest().unwrap_or(Interest::ALL[0]),
            concept_cursor: session.concept().unwrap_or(Concept::ALL[0]),
            session,
            focused_pane,
            explanation_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            flash: None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.expire_flash(Instant::now());
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Poll with a timeout so an expired flash gets redrawn
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Drop the flash once it has been shown long enough
    pub fn expire_flash(&mut self, now: Instant) {
        if self
            .flash
            .is_some_and(|flash| now.duration_since(flash.started) >= FLASH_DURATION)
        {
            self.flash = None;
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Main area plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(28), Constraint::Percentage(72)])
            .split(pane_area);

        // Left column: Interests (top) | Concepts (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[0]);

        let interest_labels = Interest::ALL.map(Interest::label);
        let concept_labels = Concept::ALL.map(Concept::label);
        let interest_chosen = self.session.interest().is_some();

        super::panes::render_picker_pane(
            frame,
            left_rows[0],
            super::panes::PickerRenderData {
                title: " Interests ",
                options: &interest_labels,
                selected: self.session.interest().map(Interest::index),
                cursor: self.interest_cursor.index(),
                enabled: true,
                disabled_hint: "",
            },
            self.focused_pane == FocusedPane::Interests,
        );

        super::panes::render_picker_pane(
            frame,
            left_rows[1],
            super::panes::PickerRenderData {
                title: " Concepts ",
                options: &concept_labels,
                selected: self.session.concept().map(Concept::index),
                cursor: self.concept_cursor.index(),
                enabled: interest_chosen,
                disabled_hint: "Choose an interest first",
            },
            self.focused_pane == FocusedPane::Concepts,
        );

        // Right column: Explanation, with the demo underneath for stack/queue
        let explanation = self.session.explanation();
        let explanation_area = match self.session.active_sequence() {
            Some(sequence) => {
                let right_rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(5)])
                    .split(columns[1]);

                super::panes::render_demo_pane(
                    frame,
                    right_rows[1],
                    super::panes::DemoRenderData {
                        sequence,
                        can_remove: self.session.can_remove(),
                        flash_index: self.flash.map(|flash| flash.index),
                    },
                );
                right_rows[0]
            }
            None => columns[1],
        };

        super::panes::render_explanation_pane(
            frame,
            explanation_area,
            explanation.as_ref(),
            self.focused_pane == FocusedPane::Explanation,
            &mut self.explanation_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            super::panes::StatusRenderData {
                message: &self.status_message,
                interest: self.session.interest(),
                concept: self.session.concept(),
                controls: self.session.controls(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Interests => self.interest_cursor = self.interest_cursor.prev(),
                FocusedPane::Concepts => self.concept_cursor = self.concept_cursor.prev(),
                FocusedPane::Explanation => {
                    self.explanation_scroll = self.explanation_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Interests => self.interest_cursor = self.interest_cursor.next(),
                FocusedPane::Concepts => self.concept_cursor = self.concept_cursor.next(),
                FocusedPane::Explanation => {
                    self.explanation_scroll = self.explanation_scroll.saturating_add(1);
                }
            },
            KeyCode::Enter | KeyCode::Char(' ') => match self.focused_pane {
                FocusedPane::Interests => self.choose_interest(self.interest_cursor),
                FocusedPane::Concepts => self.choose_concept(self.concept_cursor),
                FocusedPane::Explanation => {}
            },
            // Number keys pick directly in the focused picker
            KeyCode::Char(c @ '1'..='6') => {
                let idx = (c as usize) - ('1' as usize);
                match self.focused_pane {
                    FocusedPane::Interests => self.choose_interest(Interest::ALL[idx]),
                    FocusedPane::Concepts => self.choose_concept(Concept::ALL[idx]),
                    FocusedPane::Explanation => {}
                }
            }
            KeyCode::Char('a') | KeyCode::Char('A') => self.append(),
            KeyCode::Char('x') | KeyCode::Char('X') => self.remove(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.reset(),
            _ => {}
        }
    }

    fn choose_interest(&mut self, interest: Interest) {
        self.session.select_interest(interest);
        self.interest_cursor = interest;
        self.concept_cursor = Concept::ALL[0];
        self.explanation_scroll = 0;
        self.flash = None;
        self.focused_pane = FocusedPane::Concepts;
        self.status_message = format!("Interest: {}. Now pick a concept", interest);
    }

    fn choose_concept(&mut self, concept: Concept) {
        if !self.session.select_concept(concept) {
            self.status_message = "Choose an interest first".to_string();
            return;
        }
        self.concept_cursor = concept;
        self.explanation_scroll = 0;
        self.flash = None;
        self.status_message = match self.session.controls() {
            Some(kind) => format!(
                "{}: press a to {}, x to {}",
                concept,
                kind.append_verb(),
                kind.remove_verb()
            ),
            None => format!("{} explained", concept),
        };
    }

    fn append(&mut self) {
        let Some(kind) = self.session.controls() else {
            self.status_message = "No live demo for this concept".to_string();
            return;
        };
        if let Some(label) = self.session.append() {
            let index = self
                .session
                .active_sequence()
                .map_or(0, |seq| seq.len().saturating_sub(1));
            self.flash = Some(Flash {
                index,
                started: Instant::now(),
            });
            self.status_message = format!("{} {}", capitalize(kind.append_verb()), label);
        }
    }

    fn remove(&mut self) {
        let Some(kind) = self.session.controls() else {
            self.status_message = "No live demo for this concept".to_string();
            return;
        };
        self.flash = None;
        self.status_message = match self.session.remove() {
            Some(label) => format!("{} {}", capitalize(kind.remove_verb()), label),
            None => format!("Nothing to {}", kind.remove_verb()),
        };
    }

    fn reset(&mut self) {
        if self.session.controls().is_none() {
            return;
        }
        self.session.reset();
        self.flash = None;
        self.status_message = "Reset".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_focus_cycle() {
        assert_eq!(FocusedPane::Interests.next(), FocusedPane::Concepts);
        assert_eq!(FocusedPane::Explanation.next(), FocusedPane::Interests);
        for pane in [
            FocusedPane::Interests,
            FocusedPane::Concepts,
            FocusedPane::Explanation,
        ] {
            assert_eq!(pane.next().prev(), pane);
        }
    }

    #[test]
    fn test_enter_selects_under_cursor() {
        let mut app = App::new(Session::new());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.interest(), Some(Interest::Poetry));
        assert_eq!(app.focused_pane, FocusedPane::Concepts);
    }

    #[test]
    fn test_concept_rejected_before_interest() {
        let mut app = App::new(Session::new());
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.session.concept(), None);
        assert_eq!(app.status_message, "Choose an interest first");
    }

    #[test]
    fn test_append_flashes_and_remove_clears() {
        let mut app = App::new(Session::new());
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.flash.map(|f| f.index), Some(1));
        assert_eq!(app.status_message, "Push Bar B");

        press(&mut app, KeyCode::Char('x'));
        assert!(app.flash.is_none());
        assert_eq!(app.status_message, "Pop Bar B");
    }

    #[test]
    fn test_remove_on_empty_reports_guard() {
        let mut app = App::new(Session::new());
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.status_message, "Nothing to dequeue");
    }

    #[test]
    fn test_flash_expires() {
        let mut app = App::new(Session::new());
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('a'));
        let started = app.flash.map(|f| f.started).unwrap();
        app.expire_flash(started + FLASH_DURATION / 2);
        assert!(app.flash.is_some());
        app.expire_flash(started + FLASH_DURATION);
        assert!(app.flash.is_none());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(Session::new());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
