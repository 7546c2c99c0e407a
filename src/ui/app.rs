//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::api::StatsApi;
use crate::consts::cli_consts;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::stats::Series;
use crate::store::LoadUpdate;
use crate::ui::dashboard::{CrosshairSelection, DashboardState, render_dashboard, renderer};
use crate::ui::splash::render_splash;
use crate::workers::core::EventSender;
use crate::workers::fetcher::StatsFetcher;
use crossterm::event::{self, Event, KeyCode, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the block statistics charts.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The environment in which the application is running.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives events from worker tasks.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Sender handed to spawned fetch workers.
    event_sender: EventSender,

    /// Broadcasts shutdown signal to background tasks.
    shutdown_sender: broadcast::Sender<()>,

    /// Statistics API shared by fetch dispatches.
    api: Arc<dyn StatsApi>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        event_sender: EventSender,
        shutdown_sender: broadcast::Sender<()>,
        api: Arc<dyn StatsApi>,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            current_screen: Screen::Splash,
            event_receiver,
            event_sender,
            shutdown_sender,
            api,
        }
    }

    /// Transitions to the dashboard screen, dispatching the initial load.
    fn enter_dashboard(&mut self) {
        let mut state = DashboardState::new(self.environment.clone(), self.start_time);
        let _ = ensure_loaded(&mut state, &self.api, &self.event_sender);
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Load-if-absent: dispatches one fetch unless the dataset is already loaded
/// or a load is in flight. The Loading transition is applied synchronously,
/// so repeated calls on the same session state cannot produce duplicate
/// requests.
pub fn ensure_loaded(
    state: &mut DashboardState,
    api: &Arc<dyn StatsApi>,
    event_sender: &EventSender,
) -> Option<JoinHandle<()>> {
    if !state.load.should_load() {
        return None;
    }
    Some(dispatch_load(state, api, event_sender))
}

/// Manual reload: re-enters Loading from either terminal state, but never
/// while a load is in flight.
pub fn dispatch_reload(
    state: &mut DashboardState,
    api: &Arc<dyn StatsApi>,
    event_sender: &EventSender,
) -> Option<JoinHandle<()>> {
    if state.load.loading {
        return None;
    }
    Some(dispatch_load(state, api, event_sender))
}

fn dispatch_load(
    state: &mut DashboardState,
    api: &Arc<dyn StatsApi>,
    event_sender: &EventSender,
) -> JoinHandle<()> {
    state.load.apply(LoadUpdate::Started);
    let fetcher = StatsFetcher::new(api.clone(), event_sender.clone());
    tokio::spawn(async move { fetcher.fetch().await })
}

/// Moves the crosshair through the shared x-domain by whole data points.
fn step_crosshair(state: &mut DashboardState, step: isize) {
    let Some(data) = &state.load.data else {
        return;
    };
    let points = &data.blocks_per_day.data;
    if points.is_empty() {
        return;
    }

    let next = match state
        .crosshair
        .selected_x()
        .and_then(|x| points.iter().position(|pt| pt.x == x))
    {
        Some(idx) => idx.saturating_add_signed(step).min(points.len() - 1),
        // No highlight yet: start on the most recent date.
        None => points.len() - 1,
    };
    state.crosshair = CrosshairSelection::select_at(data, points[next].x);
}

/// Applies a mouse event to the crosshair.
///
/// Hovering either line chart snaps to the nearest point of that chart and
/// highlights the same date on both; leaving both charts clears both
/// selections together.
fn handle_mouse(state: &mut DashboardState, mouse: MouseEvent, area: Rect) {
    if !matches!(mouse.kind, MouseEventKind::Moved) {
        return;
    }
    let Some(data) = &state.load.data else {
        return;
    };

    let chunks = renderer::layout(area);
    let position = Position::new(mouse.column, mouse.row);

    let hovered = if chunks.charts.0.contains(position) {
        Some((chunks.charts.0, &data.blocks_per_day))
    } else if chunks.charts.1.contains(position) {
        Some((chunks.charts.1, &data.transactions_per_block_per_day))
    } else {
        None
    };

    match hovered {
        Some((chart_area, series)) => {
            if let Some(x) = nearest_x(series, chart_area, mouse.column) {
                state.crosshair = CrosshairSelection::select_at(data, x);
            }
        }
        None => state.crosshair.clear(),
    }
}

/// Maps a hovered terminal column to the `x` of the nearest data point.
fn nearest_x(series: &Series, area: Rect, column: u16) -> Option<f64> {
    let (x_min, x_max) = series.x_range()?;
    // Account for the chart block borders.
    let inner_width = area.width.saturating_sub(2);
    if inner_width == 0 {
        return None;
    }

    let offset = column
        .saturating_sub(area.x.saturating_add(1))
        .min(inner_width - 1);
    let ratio = offset as f64 / (inner_width - 1).max(1) as f64;
    let x_hit = x_min + ratio * (x_max - x_min);
    series.nearest_point(x_hit).map(|pt| pt.x)
}

/// Runs the application UI in a loop, handling events and rendering the
/// appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        // Update the state based on the current screen
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }

        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= cli_consts::splash_duration() {
                app.enter_dashboard();
                continue;
            }
        }

        // Poll for key and mouse events
        if event::poll(cli_consts::ui_poll_interval())? {
            match event::read()? {
                Event::Key(key) => {
                    // Skip events that are not KeyEventKind::Press
                    if key.kind == event::KeyEventKind::Release {
                        continue;
                    }

                    // Handle exit events
                    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                        let _ = app.shutdown_sender.send(());
                        return Ok(());
                    }

                    match &mut app.current_screen {
                        // Any other key press skips the splash screen
                        Screen::Splash => app.enter_dashboard(),
                        Screen::Dashboard(state) => match key.code {
                            KeyCode::Char('r') => {
                                let _ = dispatch_reload(state, &app.api, &app.event_sender);
                            }
                            KeyCode::Left => step_crosshair(state, -1),
                            KeyCode::Right => step_crosshair(state, 1),
                            KeyCode::Char('c') => {
                                if !state.crosshair.is_empty() {
                                    state.crosshair.clear();
                                }
                            }
                            _ => {}
                        },
                    }
                }
                Event::Mouse(mouse) => {
                    if let Screen::Dashboard(state) = &mut app.current_screen {
                        let size = terminal.size()?;
                        handle_mouse(state, mouse, Rect::new(0, 0, size.width, size.height));
                    }
                }
                _ => {}
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockStatsApi;
    use crate::stats::{BlockStats, SeriesPoint};
    use crate::store::LoadState;
    use tokio::sync::mpsc;

    fn stats() -> BlockStats {
        let series = |name: &str, y0: f64| Series {
            name: name.to_string(),
            data: vec![
                SeriesPoint { x: 1_000_000.0, y: y0 },
                SeriesPoint { x: 2_000_000.0, y: y0 + 2.0 },
            ],
        };
        BlockStats {
            blocks_per_day: series("Blocks per day", 5.0),
            transactions_per_block_per_day: series("Transactions per block per day", 1200.0),
            op_return_blocks_vs_blocks: series("OP_RETURN blocks vs blocks", 0.0),
        }
    }

    fn loaded_state() -> DashboardState {
        let mut state = DashboardState::new(Environment::Local, Instant::now());
        state.load.apply(LoadUpdate::Succeeded(stats()));
        state
    }

    fn wiring(api: MockStatsApi) -> (Arc<dyn StatsApi>, EventSender, mpsc::Receiver<WorkerEvent>) {
        let (sender, receiver) = mpsc::channel(16);
        (Arc::new(api), EventSender::new(sender), receiver)
    }

    #[tokio::test]
    async fn ensure_loaded_dispatches_exactly_once() {
        let mut api = MockStatsApi::new();
        api.expect_block_stats().times(1).returning(|| Ok(stats()));
        let (api, sender, _receiver) = wiring(api);

        let mut state = DashboardState::new(Environment::Local, Instant::now());
        let handle = ensure_loaded(&mut state, &api, &sender).expect("first call dispatches");
        // Loading is set synchronously, so a second tick cannot re-dispatch.
        assert!(state.load.loading);
        assert!(ensure_loaded(&mut state, &api, &sender).is_none());

        handle.await.expect("fetch task completes");
    }

    #[tokio::test]
    async fn ensure_loaded_skips_a_loaded_store() {
        let mut api = MockStatsApi::new();
        api.expect_block_stats().times(0);
        let (api, sender, _receiver) = wiring(api);

        let mut state = loaded_state();
        assert!(ensure_loaded(&mut state, &api, &sender).is_none());
    }

    #[tokio::test]
    async fn reload_is_refused_while_in_flight() {
        let mut api = MockStatsApi::new();
        api.expect_block_stats().times(0);
        let (api, sender, _receiver) = wiring(api);

        let mut state = DashboardState::new(Environment::Local, Instant::now());
        state.load = LoadState {
            loading: true,
            ..LoadState::default()
        };
        assert!(dispatch_reload(&mut state, &api, &sender).is_none());
    }

    #[test]
    fn step_crosshair_starts_at_the_most_recent_date() {
        let mut state = loaded_state();
        step_crosshair(&mut state, -1);
        assert_eq!(state.crosshair.selected_x(), Some(2_000_000.0));

        step_crosshair(&mut state, -1);
        assert_eq!(state.crosshair.selected_x(), Some(1_000_000.0));

        // Clamped at the first point.
        step_crosshair(&mut state, -1);
        assert_eq!(state.crosshair.selected_x(), Some(1_000_000.0));
    }

    #[test]
    fn step_crosshair_highlights_both_series() {
        let mut state = loaded_state();
        step_crosshair(&mut state, 1);
        assert_eq!(
            state.crosshair.blocks_per_day.map(|pt| pt.y),
            Some(7.0)
        );
        assert_eq!(
            state.crosshair.transactions_per_block_per_day.map(|pt| pt.y),
            Some(1202.0)
        );
    }

    #[test]
    fn mouse_hover_selects_and_leave_clears() {
        let mut state = loaded_state();
        let area = Rect::new(0, 0, 120, 48);
        let chunks = renderer::layout(area);
        let (left, _) = chunks.charts;

        // Hover near the left edge of the blocks chart: earliest date.
        let hover = MouseEvent {
            kind: MouseEventKind::Moved,
            column: left.x + 1,
            row: left.y + 1,
            modifiers: crossterm::event::KeyModifiers::empty(),
        };
        handle_mouse(&mut state, hover, area);
        assert_eq!(state.crosshair.selected_x(), Some(1_000_000.0));
        assert!(state.crosshair.transactions_per_block_per_day.is_some());

        // Pointer leaves both charts: both selections reset together.
        let leave = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: area.height - 1,
            modifiers: crossterm::event::KeyModifiers::empty(),
        };
        handle_mouse(&mut state, leave, area);
        assert!(state.crosshair.is_empty());
    }

    #[test]
    fn nearest_x_snaps_to_the_closest_point() {
        let series = Series {
            name: String::new(),
            data: vec![
                SeriesPoint { x: 1_000_000.0, y: 1.0 },
                SeriesPoint { x: 2_000_000.0, y: 2.0 },
            ],
        };
        let area = Rect::new(0, 0, 42, 10);
        // Far left column maps to the first point.
        assert_eq!(nearest_x(&series, area, 1), Some(1_000_000.0));
        // Far right column maps to the last point.
        assert_eq!(nearest_x(&series, area, 40), Some(2_000_000.0));
    }
}
