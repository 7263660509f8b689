mod logging;
mod selector;
mod surface;

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use moodboard_config::Config;
use moodboard_core::{Bounds, Mood, Surface};
use moodboard_scene::Animator;
use moodboard_store::{FileStore, KeyValueStore, MemoryStore, MoodStore, default_data_dir};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::Line,
};
use tracing::{debug, error, info, warn};

use crate::selector::{MoodSelector, mood_color};
use crate::surface::{CanvasLayout, CanvasSurface};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    let data_dir = config.data_dir.clone().map_or_else(default_data_dir, Ok);
    if let Ok(dir) = &data_dir {
        if let Err(err) = logging::init(dir, &config.log_level) {
            eprintln!("moodboard: logging disabled: {err}");
        }
    }
    if let Some(err) = config_error {
        warn!(%err, "using default configuration");
    }
    if let Err(err) = &data_dir {
        warn!(%err, "no data directory, mood changes will not be saved");
    }

    let store = open_mood_store(data_dir.as_deref().ok());
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let layout = CanvasLayout::from_config(&config);
    let (cols, rows) = crossterm::terminal::size()?;
    let app = App::new(&config, store, rng, layout.canvas_bounds(cols, rows));
    info!(mood = %app.store.mood(), "starting moodboard");

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}

/// Load mood state from `data_dir`, falling back to an in-memory store when
/// there is no directory or it cannot be used.
fn open_mood_store(data_dir: Option<&Path>) -> MoodStore<Box<dyn KeyValueStore>> {
    let store: Box<dyn KeyValueStore> = match data_dir.map(FileStore::open) {
        Some(Ok(store)) => Box::new(store),
        Some(Err(err)) => {
            warn!(%err, "data directory unusable, mood changes will not be saved");
            Box::new(MemoryStore::new())
        }
        None => Box::new(MemoryStore::new()),
    };
    MoodStore::load(store)
}

/// The main application: the mood store, the animator and the mood picker.
#[derive(Debug)]
pub struct App<S> {
    /// Is the application running?
    running: bool,
    /// Persisted mood state.
    store: MoodStore<S>,
    /// Scenes and the active mood.
    animator: Animator,
    /// Mood picker in the control strip.
    selector: MoodSelector,
    /// Randomness for every entity.
    rng: StdRng,
    /// Cell to canvas mapping.
    layout: CanvasLayout,
    /// Delay between frames.
    frame_interval: Duration,
}

impl<S: KeyValueStore> App<S> {
    /// Construct a new instance of [`App`] showing the saved mood.
    pub fn new(config: &Config, store: MoodStore<S>, mut rng: StdRng, bounds: Bounds) -> Self {
        let mood = store.mood();
        Self {
            running: false,
            animator: Animator::new(mood, bounds, &mut rng),
            selector: MoodSelector::new(mood),
            store,
            rng,
            layout: CanvasLayout::from_config(config),
            frame_interval: config.frame_interval(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        info!(frames = self.animator.frames(), "quitting");
        Ok(())
    }

    /// Advance the animation by one frame onto `surface`.
    fn tick(&mut self, surface: &mut dyn Surface) {
        self.animator.frame(surface, &mut self.rng);
    }

    /// Renders the canvas and the control strip.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [canvas_area, strip_area] = self.layout.split(area);

        let mut surface = CanvasSurface::new(self.layout.canvas_bounds(area.width, area.height));
        self.tick(&mut surface);
        surface.render(frame, canvas_area);

        self.render_strip(frame, strip_area);
    }

    /// Renders the mood picker, the history summary and the key help.
    fn render_strip(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Picker
            Constraint::Length(1), // History summary
            Constraint::Fill(1),   // Padding
            Constraint::Length(1), // Help text
        ])
        .split(area);

        frame.render_widget(self.selector.line(self.store.mood()).centered(), chunks[1]);
        frame.render_widget(self.history_line().centered(), chunks[2]);

        let accent = mood_color(self.selector.highlighted());
        let help = Line::from(vec![
            "←/→".bold().fg(accent),
            " choose  ".dark_gray(),
            "1-4".bold().fg(accent),
            " jump  ".dark_gray(),
            "enter".bold().fg(accent),
            " set mood  ".dark_gray(),
            "q".bold().fg(accent),
            " quit".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[4]);
    }

    /// One-line summary of the mood history.
    fn history_line(&self) -> Line<'static> {
        let history = self.store.history();
        match history.last() {
            Some(last) => {
                let when = DateTime::parse_from_rfc3339(&last.timestamp)
                    .map(|t| t.with_timezone(&Local).format("%b %d %H:%M:%S").to_string())
                    .unwrap_or_else(|_| last.timestamp.clone());
                Line::from(vec![
                    format!("{} entries", history.len()).dark_gray(),
                    "  last: ".dark_gray(),
                    last.mood.to_string().fg(mood_color(last.mood)),
                    format!(" at {when}").dark_gray(),
                ])
            }
            None => Line::from("no moods logged yet".dark_gray()),
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// The poll timeout paces the frame loop.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.frame_interval)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => {
                    // Entities keep their positions; only the canvas bounds change.
                    let bounds = self.layout.canvas_bounds(cols, rows);
                    debug!(cols, rows, width = bounds.width, height = bounds.height, "resized");
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Left | KeyCode::Up) => self.selector.previous(),
            (_, KeyCode::Right | KeyCode::Down) => self.selector.next(),
            (_, KeyCode::Char(digit @ '1'..='4')) => {
                self.selector.pick(digit as usize - '0' as usize)
            }
            (_, KeyCode::Enter | KeyCode::Char(' ')) => self.set_mood(self.selector.highlighted()),
            _ => {}
        }
    }

    /// Persist the selection and switch the visible scene.
    fn set_mood(&mut self, mood: Mood) {
        if let Err(err) = self.store.select(mood) {
            error!(%err, %mood, "failed to save mood");
        }
        self.animator.set_mood(self.store.mood());
        info!(%mood, events = self.store.history().len(), "mood set");
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
