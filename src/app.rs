use crate::config::AppConfig;
use crate::data::DatasetStore;
use crate::engine::ChatEngine;
use crate::event::{AppEvent, Event, EventHandler};
use crate::history::{ConversationStore, Role, Turn};
use color_eyre::Result;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    DefaultTerminal,
};
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub enum AppMode {
    Login,
    Chat,
}

/// Per-session context: whose conversation is on screen. Replaces the
/// original's global mutable session state.
#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
    pub turns: Vec<Turn>,
}

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current app mode/screen
    pub mode: AppMode,

    pub config: AppConfig,
    /// Seven risk datasets, read-only after startup
    pub datasets: Arc<DatasetStore>,
    /// Query -> assistant turn
    pub engine: ChatEngine,
    /// All users' conversations, persisted after every assistant turn
    pub store: ConversationStore,
    /// Active session, if a user has logged in
    pub session: Option<Session>,

    /// Login name buffer
    pub name_input: String,
    /// Chat input buffer
    pub chat_input: String,
    /// Lines scrolled up from the bottom of the transcript
    pub chat_scroll: u16,
    /// Index into the session's turns of the assistant turn whose visuals
    /// (table, chart, precautions) are shown
    pub visual_index: Option<usize>,

    /// Event handler.
    pub events: EventHandler,
}

impl App {
    /// Constructs a new instance of [`App`].
    pub fn new() -> Result<Self> {
        let config = AppConfig::load()?;
        let datasets = Arc::new(DatasetStore::load(&config.data_dir)?);
        let engine = ChatEngine::new(datasets.clone());
        let store = ConversationStore::load(&config.history_file);

        Ok(Self {
            running: true,
            mode: AppMode::Login,
            config,
            datasets,
            engine,
            store,
            session: None,
            name_input: String::new(),
            chat_input: String::new(),
            chat_scroll: 0,
            visual_index: None,
            events: EventHandler::new(),
        })
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
                needs_redraw = false;
            }

            match self.events.next().await? {
                Event::Tick => {} // Don't redraw on tick
                Event::Crossterm(event) => {
                    if let crossterm::event::Event::Key(key_event) = event {
                        self.handle_key_events(key_event)?;
                        needs_redraw = true;
                    }
                }
                Event::App(app_event) => {
                    match app_event {
                        AppEvent::Quit => self.quit(),
                        AppEvent::Back => self.back_to_login(),
                        AppEvent::Input(ch) => self.handle_input(ch),
                        AppEvent::Backspace => self.backspace(),
                        AppEvent::Submit => self.submit(),
                        AppEvent::ScrollUp => self.chat_scroll = self.chat_scroll.saturating_add(1),
                        AppEvent::ScrollDown => {
                            self.chat_scroll = self.chat_scroll.saturating_sub(1)
                        }
                        AppEvent::NextVisual => self.cycle_visual(1),
                        AppEvent::PrevVisual => self.cycle_visual(-1),
                    }
                    needs_redraw = true;
                }
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Result<()> {
        match self.mode {
            AppMode::Login => match key_event.code {
                KeyCode::Esc => self.events.send(AppEvent::Quit),
                KeyCode::Char('c' | 'C') if key_event.modifiers == KeyModifiers::CONTROL => {
                    self.events.send(AppEvent::Quit)
                }
                KeyCode::Enter => self.events.send(AppEvent::Submit),
                KeyCode::Backspace => self.events.send(AppEvent::Backspace),
                KeyCode::Char(ch) => self.events.send(AppEvent::Input(ch)),
                _ => {}
            },
            AppMode::Chat => match key_event.code {
                KeyCode::Esc => self.events.send(AppEvent::Back),
                KeyCode::Char('c' | 'C') if key_event.modifiers == KeyModifiers::CONTROL => {
                    self.events.send(AppEvent::Quit)
                }
                KeyCode::Enter => self.events.send(AppEvent::Submit),
                KeyCode::Backspace => self.events.send(AppEvent::Backspace),
                KeyCode::Up | KeyCode::PageUp => self.events.send(AppEvent::ScrollUp),
                KeyCode::Down | KeyCode::PageDown => self.events.send(AppEvent::ScrollDown),
                KeyCode::Tab => self.events.send(AppEvent::NextVisual),
                KeyCode::BackTab => self.events.send(AppEvent::PrevVisual),
                KeyCode::Char(ch) => self.events.send(AppEvent::Input(ch)),
                _ => {}
            },
        }
        Ok(())
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn back_to_login(&mut self) {
        self.mode = AppMode::Login;
        self.session = None;
        self.chat_input.clear();
        self.chat_scroll = 0;
        self.visual_index = None;
    }

    pub fn handle_input(&mut self, ch: char) {
        match self.mode {
            AppMode::Login => self.name_input.push(ch),
            AppMode::Chat => self.chat_input.push(ch),
        }
    }

    pub fn backspace(&mut self) {
        match self.mode {
            AppMode::Login => {
                self.name_input.pop();
            }
            AppMode::Chat => {
                self.chat_input.pop();
            }
        }
    }

    pub fn submit(&mut self) {
        match self.mode {
            AppMode::Login => self.login(),
            AppMode::Chat => self.submit_query(),
        }
    }

    /// Start (or resume) the session for the entered name. A returning user
    /// gets their stored turns back; a new user gets a greeting turn.
    fn login(&mut self) {
        let username = self.name_input.trim().to_string();
        if username.is_empty() {
            return;
        }
        self.name_input.clear();

        let existing = self.store.turns(&username).map(|turns| turns.to_vec());
        let turns = match existing {
            Some(turns) => turns,
            None => {
                let greeting = Turn::new_assistant(
                    format!("Hi {username}, welcome to Chennai AI Assistant Chatbot! 😊"),
                    Turn::clock_now(),
                    None,
                    None,
                );
                self.store.append_turn(&username, greeting.clone());
                self.persist_store();
                vec![greeting]
            }
        };

        self.visual_index = Self::last_visual_index(&turns);
        self.session = Some(Session { username, turns });
        self.mode = AppMode::Chat;
        self.chat_scroll = 0;
    }

    /// One conversational turn: record the user message, answer it, persist.
    fn submit_query(&mut self) {
        let query = self.chat_input.trim().to_string();
        if query.is_empty() {
            return;
        }
        self.chat_input.clear();

        let Some(session) = self.session.as_mut() else {
            return;
        };

        let time = Turn::clock_now();
        let user_turn = Turn::new_user(query.clone(), time.clone());
        let assistant_turn = self.engine.respond(&query, time);

        session.turns.push(user_turn.clone());
        session.turns.push(assistant_turn.clone());
        if assistant_turn.category.is_some() {
            self.visual_index = Some(session.turns.len() - 1);
        }
        self.chat_scroll = 0;

        let username = session.username.clone();
        self.store.append_turn(&username, user_turn);
        self.store.append_turn(&username, assistant_turn);
        self.persist_store();
    }

    fn persist_store(&self) {
        if let Err(e) = self.store.persist() {
            tracing::error!(path = %self.store.path().display(), error = %e, "failed to persist conversation store");
        }
    }

    /// Move the visual panel selection to the next/previous assistant turn
    /// that carries a category tag, wrapping around.
    fn cycle_visual(&mut self, direction: i64) {
        let Some(session) = &self.session else {
            return;
        };
        let tagged: Vec<usize> = session
            .turns
            .iter()
            .enumerate()
            .filter(|(_, t)| t.role == Role::Assistant && t.category.is_some())
            .map(|(i, _)| i)
            .collect();
        if tagged.is_empty() {
            self.visual_index = None;
            return;
        }

        let position = self
            .visual_index
            .and_then(|current| tagged.iter().position(|&i| i == current));
        let next = match position {
            Some(p) => {
                let len = tagged.len() as i64;
                ((p as i64 + direction).rem_euclid(len)) as usize
            }
            None => 0,
        };
        self.visual_index = Some(tagged[next]);
    }

    fn last_visual_index(turns: &[Turn]) -> Option<usize> {
        turns
            .iter()
            .rposition(|t| t.role == Role::Assistant && t.category.is_some())
    }

    /// The assistant turn whose visuals the panel should re-derive.
    pub fn visual_turn(&self) -> Option<&Turn> {
        let session = self.session.as_ref()?;
        session.turns.get(self.visual_index?)
    }
}
