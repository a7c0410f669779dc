use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

use crate::config::Config;
use crate::race::{RaceDriver, RaceSummary};
use crate::recorder::{Playback, Snapshot};
use crate::sort::SortAlgorithm;
use crate::ui::components::{SizeInput, SizeInputState, SortChart, StatusBar};
use crate::ui::events::{AppEvent, PlaybackMode};
use crate::ui::terminal_guard::TerminalGuard;

/// How often terminal input is read and the screen redrawn
pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Most chart panels placed side by side
const MAX_COLUMNS: usize = 3;

/// What a lane's panel currently shows
#[derive(Debug, Clone)]
struct LaneView {
    algorithm: SortAlgorithm,
    values: Snapshot,
}

/// Main application state
pub struct App {
    /// Application configuration
    config: Config,
    /// Whether the app should quit
    should_quit: bool,
    /// Owns every lane and its in-flight playback
    driver: RaceDriver,
    /// Latest frame per lane, in panel order
    lanes: Vec<LaneView>,
    size_input: SizeInputState,
    mode: PlaybackMode,
    /// Result of the most recent race
    summary: Option<RaceSummary>,
    /// Frames rendered by lane recorders
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let driver = RaceDriver::new(
            &config.algorithms,
            |algorithm| {
                let tx = event_tx.clone();
                Box::new(move |snapshot: Snapshot| {
                    // The receiver only goes away when the app shuts down
                    let _ = tx.send(AppEvent::Frame {
                        algorithm,
                        snapshot,
                    });
                })
            },
            config.seed,
        )?;

        let lanes = config
            .algorithms
            .iter()
            .map(|&algorithm| LaneView {
                algorithm,
                values: Vec::new(),
            })
            .collect();

        Ok(Self {
            size_input: SizeInputState::new(config.default_size),
            config,
            should_quit: false,
            driver,
            lanes,
            mode: PlaybackMode::default(),
            summary: None,
            event_rx,
        })
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal, poll_terminal).await;

        guard.cleanup()?;
        terminal.show_cursor()?;
        result
    }

    /// Draw, read input and advance playback until the user quits.
    ///
    /// Input is read every [`INPUT_POLL_INTERVAL`] no matter how slow the
    /// playback cadence is configured. `next_event` must not block.
    pub async fn event_loop<B, E>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut next_event: E,
    ) -> anyhow::Result<()>
    where
        B: Backend,
        B::Error: Send + Sync + 'static,
        E: FnMut() -> io::Result<Option<Event>>,
    {
        // Both timers outlive loop iterations so a fast playback cadence
        // cannot keep restarting the input timer
        let mut input = time::interval(INPUT_POLL_INTERVAL);
        input.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut playback = time::interval(self.config.frame_interval);
        playback.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                _ = input.tick() => {
                    while let Some(event) = next_event()? {
                        self.handle_terminal_event(event);
                    }
                }

                // One playback frame per lane per tick
                _ = playback.tick() => {
                    self.on_tick();
                }

                Some(event) = self.event_rx.recv() => {
                    self.handle_app_event(event);
                }
            }

            if self.should_quit {
                break;
            }
        }

        self.driver.cancel();
        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(width, height) => {
                // The next draw picks up the new size
                tracing::trace!(width, height, "terminal resized");
            }
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.start_race(),
            KeyCode::Backspace => self.size_input.backspace(),
            KeyCode::Delete => self.size_input.clear(),
            KeyCode::Char('p') | KeyCode::Char(' ') => {
                self.mode = self.mode.toggle();
                tracing::debug!(mode = ?self.mode, "playback mode changed");
            }
            KeyCode::Char('.') => self.step(),
            KeyCode::Char('x') => self.driver.cancel(),
            KeyCode::Char(c) if c.is_ascii_digit() => self.size_input.insert_char(c),
            _ => {}
        }
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Frame {
                algorithm,
                snapshot,
            } => {
                if let Some(lane) = self.lanes.iter_mut().find(|l| l.algorithm == algorithm) {
                    lane.values = snapshot;
                }
            }
        }
    }

    /// Validate the size box and start a new race.
    ///
    /// Invalid sizes leave the previous race untouched.
    pub fn start_race(&mut self) {
        let size = match self.size_input.submit(self.config.max_size) {
            Ok(size) => size,
            Err(e) => {
                tracing::debug!(error = %e, "rejected array size");
                return;
            }
        };

        let summary = self.driver.run_race(size);
        self.summary = Some(summary);
        self.mode = PlaybackMode::Running;
        self.drain_events();
    }

    /// Advance playback by one frame unless paused.
    pub fn on_tick(&mut self) {
        if self.mode == PlaybackMode::Running {
            self.driver.tick();
        }
        self.drain_events();
    }

    /// Advance one frame while paused.
    pub fn step(&mut self) {
        if self.mode == PlaybackMode::Paused {
            self.driver.step();
            self.drain_events();
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_app_event(event);
        }
    }

    pub fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(f.area());

        f.render_widget(SizeInput::new(&self.size_input), chunks[0]);
        self.draw_lanes(f, chunks[1]);
        f.render_widget(
            StatusBar::new(self.summary.as_ref(), self.mode, self.driver.remaining()),
            chunks[2],
        );
    }

    fn draw_lanes(&self, f: &mut Frame, area: Rect) {
        if self.lanes.is_empty() {
            return;
        }
        let columns = self.lanes.len().min(MAX_COLUMNS);
        let rows = self.lanes.len().div_ceil(columns);

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
            .split(area);

        for (row, row_area) in row_areas.iter().enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row_area);

            for (col, cell) in cells.iter().enumerate() {
                let index = row * columns + col;
                let (Some(view), Some(lane)) =
                    (self.lanes.get(index), self.driver.lanes().get(index))
                else {
                    continue;
                };
                let chart = SortChart::new(view.algorithm, &view.values)
                    .swaps(lane.swaps())
                    .remaining(lane.remaining());
                f.render_widget(chart, *cell);
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn summary(&self) -> Option<&RaceSummary> {
        self.summary.as_ref()
    }

    pub fn size_input(&self) -> &SizeInputState {
        &self.size_input
    }

    /// Frames still queued across all lanes
    pub fn remaining(&self) -> usize {
        self.driver.remaining()
    }

    /// The frame currently shown for `algorithm`
    pub fn lane_values(&self, algorithm: SortAlgorithm) -> Option<&[f64]> {
        self.lanes
            .iter()
            .find(|l| l.algorithm == algorithm)
            .map(|l| l.values.as_slice())
    }
}

/// Read one pending terminal event without blocking
fn poll_terminal() -> io::Result<Option<Event>> {
    if event::poll(Duration::ZERO)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}
