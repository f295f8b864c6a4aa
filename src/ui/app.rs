//! Main TUI application state and logic

use crate::command::StructureKind;
use crate::engine::Session;
use crate::ui::panes::status::PlaybackStatus;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// The main application state
pub struct App {
    /// The session owning every structure and the in-flight trace
    pub session: Session,

    /// Structure shown and targeted by typed commands
    pub structure: StructureKind,

    /// Command being typed
    pub input: String,

    /// Scroll offset of the trace pane (`usize::MAX` follows the newest step)
    pub trace_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app showing `structure`
    pub fn new(session: Session, structure: StructureKind) -> Self {
        App {
            session,
            structure,
            input: String::new(),
            trace_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= self.session.config().step_delay
            {
                self.step_forward();
                if self.session.playback().map_or(true, |p| p.is_done()) {
                    self.is_playing = false;
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
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

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes, command prompt, status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        // Structure (left) | Trace (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        let playback = self.session.playback_for(self.structure);
        let snapshot = self.session.visible_snapshot(self.structure);

        super::panes::render_structure_pane(
            frame,
            columns[0],
            self.structure,
            &snapshot,
            playback.and_then(|p| p.highlight()),
        );

        super::panes::render_trace_pane(frame, columns[1], playback, &mut self.trace_scroll);

        super::panes::render_input_pane(frame, main_chunks[1], self.structure, &self.input);

        let status = playback.map(|p| PlaybackStatus {
            position: p.position(),
            total: p.total_steps(),
            is_playing: self.is_playing,
            failed: p.is_done() && !p.trace().outcome().success,
        });
        super::panes::render_status_bar(frame, main_chunks[2], &self.status_message, status);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') if self.input.is_empty() => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') if self.input.is_empty() => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Char(c) => {
                self.input.push(c);
            }
            KeyCode::Tab => self.switch_structure(self.structure.next()),
            KeyCode::BackTab => self.switch_structure(self.structure.prev()),
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => {
                self.trace_scroll = self.trace_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.trace_scroll = self.trace_scroll.saturating_add(1);
            }
            KeyCode::Enter if !self.input.is_empty() => self.submit(),
            KeyCode::Enter => {
                // Jump to end of the trace
                self.is_playing = false;
                if let Some(playback) = self.session.playback_mut() {
                    playback.run_to_end();
                    self.status_message = outcome_message(playback);
                    self.trace_scroll = usize::MAX;
                }
            }
            KeyCode::Backspace if !self.input.is_empty() => {
                self.input.pop();
            }
            KeyCode::Backspace => {
                // Jump to start of the trace
                self.is_playing = false;
                if let Some(playback) = self.session.playback_mut() {
                    playback.rewind();
                    self.status_message = "Jumped to start".to_string();
                    self.trace_scroll = 0;
                }
            }
            KeyCode::Esc => {
                self.is_playing = false;
                self.input.clear();
                if self.session.cancel() {
                    self.status_message = "Trace discarded".to_string();
                }
            }
            _ => {}
        }
    }

    /// Run the typed command and start playing its trace
    fn submit(&mut self) {
        let line = std::mem::take(&mut self.input);
        match self.session.execute_line(self.structure, &line) {
            Ok(playback) => {
                self.status_message = format!("{}...", playback.trace().title());
                self.trace_scroll = usize::MAX;
                self.is_playing = true;
                // First step appears immediately
                self.last_play_time = Instant::now()
                    .checked_sub(self.session.config().step_delay)
                    .unwrap_or(Instant::now());
            }
            Err(e) => {
                debug!(command = line.as_str(), error = %e, "command rejected");
                self.status_message = format!("Error: {}", e);
                self.input = line;
            }
        }
    }

    fn toggle_play(&mut self) {
        let Some(playback) = self.session.playback_mut() else {
            self.status_message = "Nothing to play".to_string();
            return;
        };
        if playback.is_done() {
            // Playing a finished trace starts it over
            playback.rewind();
        }
        self.is_playing = !self.is_playing;
        if self.is_playing {
            self.last_play_time = Instant::now()
                .checked_sub(self.session.config().step_delay)
                .unwrap_or(Instant::now());
            self.status_message = "Playing...".to_string();
        } else {
            self.status_message = "Paused".to_string();
        }
    }

    fn switch_structure(&mut self, structure: StructureKind) {
        self.is_playing = false;
        self.session.cancel();
        self.input.clear();
        self.trace_scroll = 0;
        self.structure = structure;
        self.status_message = format!("Switched to the {}", structure);
    }

    /// Reveal the next step of the trace
    fn step_forward(&mut self) {
        let Some(playback) = self.session.playback_mut() else {
            self.status_message = "Cannot step forward: no trace".to_string();
            return;
        };
        match playback.advance() {
            Some(step) => {
                self.status_message = step.note.clone();
                if playback.is_done() {
                    self.status_message = outcome_message(playback);
                }
                // Auto-scroll trace to bottom
                self.trace_scroll = usize::MAX;
            }
            None => {
                self.status_message = outcome_message(playback);
            }
        }
    }

    /// Hide the most recent step of the trace
    fn step_backward(&mut self) {
        let Some(playback) = self.session.playback_mut() else {
            self.status_message = "Cannot step backward: no trace".to_string();
            return;
        };
        if playback.back() {
            self.status_message = match playback.current() {
                Some(step) => step.note.clone(),
                None => "At start".to_string(),
            };
            self.trace_scroll = usize::MAX;
        } else {
            self.status_message = "Cannot step backward: at start".to_string();
        }
    }
}

/// Final status line for a finished trace
fn outcome_message(playback: &crate::trace::Playback) -> String {
    let outcome = playback.trace().outcome();
    match (&outcome.message, outcome.success) {
        (Some(message), false) => format!("Failed: {}", message),
        _ => format!("{}: done", playback.trace().title()),
    }
}
