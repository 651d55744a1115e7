//! Interactive terminal UI.
//!
//! The app owns both parameter records. Every control change replaces the
//! active record and calls `params_changed`, which resets the animator: a
//! still scene gets exactly one frame at time 0, an animated one gets a new
//! loop. Frames are rendered on a background thread and come back over a
//! channel; a frame from a loop that has since been replaced is dropped.

use std::io::{self, stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use image::{DynamicImage, RgbaImage};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
};
use ratatui_image::{StatefulImage, picker::{Picker, ProtocolType}, protocol::StatefulProtocol};
use tiny_skia::Pixmap;

use polar_loom::{Animator, CppnParams, Formula, Frame, HybridPattern, PolarParams, Scene};

use crate::config::{CanvasConfig, StartView, StudioConfig};
use crate::controls::{self, ControlRange};

/// Event poll interval while a scene is animating (about 60 fps).
const ANIMATION_POLL: Duration = Duration::from_millis(16);

/// Event poll interval while idle.
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Coarse adjustment multiplier for `[` and `]`.
const COARSE_STEPS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Polar,
    Hybrid,
}

impl View {
    /// One line on how this view maps coordinates to the picture.
    fn coordinate_hint(&self) -> &'static str {
        match self {
            View::Polar => "Polar: r(θ) traced from the center, 1° per step",
            View::Hybrid => "Hybrid: each pixel mixes x,y with its r,θ",
        }
    }
}

/// Title of the canvas block: what is drawn and at which frequency.
fn canvas_caption(description: &str, frequency: &str) -> String {
    format!(" {} | k = {} ", description, frequency)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Setting {
    PolarFrequency,
    Rotation,
    LineWidth,
    HybridFrequency,
    Speed,
}

impl Setting {
    fn range(&self) -> ControlRange {
        match self {
            Setting::PolarFrequency => controls::POLAR_FREQUENCY,
            Setting::Rotation => controls::POLAR_ROTATION_DEGREES,
            Setting::LineWidth => controls::POLAR_LINE_WIDTH,
            Setting::HybridFrequency => controls::HYBRID_FREQUENCY,
            Setting::Speed => controls::ANIMATION_SPEED,
        }
    }
}

const POLAR_SETTINGS: &[Setting] = &[
    Setting::PolarFrequency,
    Setting::Rotation,
    Setting::LineWidth,
    Setting::Speed,
];

const HYBRID_SETTINGS: &[Setting] = &[Setting::HybridFrequency, Setting::Speed];

/// Tracks the one frame being rendered and the one waiting behind it.
///
/// A frame is shown only if it still belongs to the animator's current
/// generation when its render completes. Newer requests replace the waiting
/// one, and a waiting frame that went stale is dropped instead of started.
#[derive(Debug, Default)]
struct FrameScheduler {
    in_flight: Option<Frame>,
    queued: Option<Frame>,
    shown: u64,
    dropped: u64,
}

/// What to do once a render completes.
#[derive(Debug, PartialEq)]
struct Completion {
    /// Put the finished frame on screen.
    show: bool,
    /// Start rendering this frame next.
    next: Option<Frame>,
}

impl FrameScheduler {
    fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Ask for `frame` to be rendered. Returns it when it can start now;
    /// otherwise it waits in the queue slot.
    fn request(&mut self, frame: Frame) -> Option<Frame> {
        if self.in_flight.is_some() {
            if self.queued.replace(frame).is_some() {
                self.dropped += 1;
            }
            return None;
        }
        self.in_flight = Some(frame);
        Some(frame)
    }

    /// The render of `frame` finished.
    fn complete(&mut self, frame: Frame, animator: &Animator) -> Completion {
        self.in_flight = None;

        let show = animator.is_current(&frame);
        if show {
            self.shown += 1;
        } else {
            log::debug!("dropping stale frame from generation {}", frame.generation);
            self.dropped += 1;
        }

        let next = match self.queued.take() {
            Some(queued) if animator.is_current(&queued) => {
                self.in_flight = Some(queued);
                Some(queued)
            }
            Some(_) => {
                self.dropped += 1;
                None
            }
            None => None,
        };

        Completion { show, next }
    }
}

/// Result from background frame rendering
struct RenderResult {
    frame: Frame,
    image: Option<RgbaImage>,
    render_ms: f64,
}

/// Render one frame of `scene` into a fresh image.
fn render_frame(scene: &Scene, (width, height): (u32, u32), time: f64) -> Option<RgbaImage> {
    let mut pixmap = Pixmap::new(width, height)?;
    scene.render(&mut pixmap, time);
    // Every pixel is opaque, so tiny-skia's premultiplied bytes are plain RGBA.
    RgbaImage::from_raw(width, height, pixmap.take())
}

/// Application state for TUI
struct App {
    view: View,
    polar: PolarParams,
    hybrid: CppnParams,
    /// Parameters the app started with, restored by the reset key
    initial: StudioConfig,
    canvas: CanvasConfig,
    /// Selected formula / pattern in the sidebar
    variant_state: ListState,
    /// Which setting is focused
    setting_focus: usize,
    animator: Animator,
    scheduler: FrameScheduler,
    result_rx: Receiver<RenderResult>,
    result_tx: Sender<RenderResult>,
    /// Last render duration
    render_ms: f64,
    /// Time of the frame on screen
    shown_time: f64,
    spinner_frame: usize,
    picker: Picker,
    image_state: Option<Box<dyn StatefulProtocol>>,
    should_quit: bool,
}

impl App {
    fn new(config: StudioConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();

        // Initialize image picker - force Sixel protocol
        let mut picker = Picker::from_termios()
            .unwrap_or_else(|_| Picker::new((8, 16)));
        picker.protocol_type = ProtocolType::Sixel;

        let view = match config.start {
            StartView::Polar => View::Polar,
            StartView::Hybrid => View::Hybrid,
        };

        let mut app = App {
            view,
            polar: config.polar.clone(),
            hybrid: config.hybrid.clone(),
            canvas: config.canvas.clone(),
            initial: config,
            variant_state: ListState::default(),
            setting_focus: 0,
            animator: Animator::new(),
            scheduler: FrameScheduler::default(),
            result_rx,
            result_tx,
            render_ms: 0.0,
            shown_time: 0.0,
            spinner_frame: 0,
            picker,
            image_state: None,
            should_quit: false,
        };

        app.sync_variant_selection();
        app.params_changed();
        app
    }

    fn scene(&self) -> Scene {
        match self.view {
            View::Polar => Scene::Polar(self.polar.clone()),
            View::Hybrid => Scene::Hybrid(self.hybrid.clone()),
        }
    }

    fn canvas_size(&self) -> (u32, u32) {
        let size = match self.view {
            View::Polar => self.canvas.polar,
            View::Hybrid => self.canvas.hybrid,
        };
        (size.width, size.height)
    }

    fn settings(&self) -> &'static [Setting] {
        match self.view {
            View::Polar => POLAR_SETTINGS,
            View::Hybrid => HYBRID_SETTINGS,
        }
    }

    fn focused_setting(&self) -> Setting {
        let settings = self.settings();
        settings[self.setting_focus % settings.len()]
    }

    fn variant_names(&self) -> Vec<&'static str> {
        match self.view {
            View::Polar => Formula::all().iter().map(|f| f.name()).collect(),
            View::Hybrid => HybridPattern::all().iter().map(|p| p.name()).collect(),
        }
    }

    fn variant_description(&self) -> &'static str {
        match self.view {
            View::Polar => self.polar.formula.description(),
            View::Hybrid => self.hybrid.pattern.description(),
        }
    }

    /// Point the sidebar selection at the active formula / pattern.
    fn sync_variant_selection(&mut self) {
        let idx = match self.view {
            View::Polar => Formula::all().iter().position(|f| *f == self.polar.formula),
            View::Hybrid => HybridPattern::all().iter().position(|p| *p == self.hybrid.pattern),
        };
        self.variant_state.select(Some(idx.unwrap_or(0)));
    }

    /// The active parameter record was replaced: restart the animation
    /// driver and request a still frame if the scene is not animating.
    fn params_changed(&mut self) {
        let scene = self.scene();
        log::debug!("parameters changed: {:?}", scene);
        if let Some(frame) = self.animator.reset(scene.animate(), scene.animation_speed()) {
            self.request_render(frame);
        }
    }

    /// Replace the polar record with an edited copy.
    fn update_polar(&mut self, edit: impl FnOnce(&mut PolarParams)) {
        let mut next = self.polar.clone();
        edit(&mut next);
        if next != self.polar {
            self.polar = next;
            self.params_changed();
        }
    }

    /// Replace the hybrid record with an edited copy.
    fn update_hybrid(&mut self, edit: impl FnOnce(&mut CppnParams)) {
        let mut next = self.hybrid.clone();
        edit(&mut next);
        if next != self.hybrid {
            self.hybrid = next;
            self.params_changed();
        }
    }

    fn request_render(&mut self, frame: Frame) {
        if let Some(frame) = self.scheduler.request(frame) {
            self.spawn_render(frame);
        }
    }

    fn spawn_render(&self, frame: Frame) {
        let scene = self.scene();
        let size = self.canvas_size();
        let tx = self.result_tx.clone();

        thread::spawn(move || {
            let start = Instant::now();
            let image = render_frame(&scene, size, frame.time);
            let render_ms = start.elapsed().as_secs_f64() * 1000.0;
            let _ = tx.send(RenderResult { frame, image, render_ms });
        });
    }

    /// Poll the animation loop for its next frame.
    fn tick(&mut self) {
        if self.scheduler.is_busy() || !self.animator.is_running() {
            return;
        }
        if let Some(frame) = self.animator.next_frame(Instant::now()) {
            self.request_render(frame);
        }
    }

    fn check_render_result(&mut self) {
        let Ok(result) = self.result_rx.try_recv() else {
            return;
        };

        self.render_ms = result.render_ms;
        log::debug!("frame t={:.3} rendered in {:.1}ms", result.frame.time, result.render_ms);

        let completion = self.scheduler.complete(result.frame, &self.animator);
        if completion.show {
            match result.image {
                Some(img) => {
                    self.image_state = Some(self.picker.new_resize_protocol(DynamicImage::ImageRgba8(img)));
                    self.shown_time = result.frame.time;
                }
                None => log::error!("could not allocate a {:?} canvas", self.canvas_size()),
            }
        }

        if let Some(frame) = completion.next {
            self.spawn_render(frame);
        }
    }

    fn switch_view(&mut self) {
        // Stop the old view's loop before the new view starts its own
        self.animator.cancel();
        self.view = match self.view {
            View::Polar => View::Hybrid,
            View::Hybrid => View::Polar,
        };
        self.setting_focus = 0;
        self.image_state = None;
        self.sync_variant_selection();
        self.params_changed();
    }

    fn quit(&mut self) {
        self.animator.cancel();
        self.should_quit = true;
    }

    fn select_variant(&mut self, delta: isize) {
        let names = self.variant_names();
        let len = names.len() as isize;
        let current = self.variant_state.selected().unwrap_or(0) as isize;
        let idx = (current + delta).rem_euclid(len) as usize;
        self.variant_state.select(Some(idx));

        match self.view {
            View::Polar => {
                let formula = Formula::all()[idx];
                self.update_polar(|p| p.formula = formula);
            }
            View::Hybrid => {
                let pattern = HybridPattern::all()[idx];
                self.update_hybrid(|p| p.pattern = pattern);
            }
        }
    }

    fn adjust_setting(&mut self, steps: f64) {
        let setting = self.focused_setting();
        let range = setting.range();
        match setting {
            Setting::PolarFrequency => {
                self.update_polar(|p| p.frequency = range.step_by(p.frequency, steps));
            }
            Setting::Rotation => {
                self.update_polar(|p| {
                    let degrees = range.step_by(p.rotation.to_degrees(), steps);
                    p.rotation = degrees.to_radians();
                });
            }
            Setting::LineWidth => {
                self.update_polar(|p| p.line_width = range.step_by(p.line_width, steps));
            }
            Setting::HybridFrequency => {
                self.update_hybrid(|p| p.frequency = range.step_by(p.frequency, steps));
            }
            Setting::Speed => match self.view {
                View::Polar => {
                    self.update_polar(|p| p.animation_speed = range.step_by(p.animation_speed, steps));
                }
                View::Hybrid => {
                    self.update_hybrid(|p| p.animation_speed = range.step_by(p.animation_speed, steps));
                }
            },
        }
    }

    fn toggle_animate(&mut self) {
        match self.view {
            View::Polar => self.update_polar(|p| p.animate = !p.animate),
            View::Hybrid => self.update_hybrid(|p| p.animate = !p.animate),
        }
    }

    /// Polar: next stroke color. Hybrid: next color mode.
    fn cycle_color(&mut self) {
        match self.view {
            View::Polar => {
                let color = controls::next_stroke_color(&self.polar.color);
                self.update_polar(|p| p.color = color.to_string());
            }
            View::Hybrid => self.update_hybrid(|p| p.color_mode = p.color_mode.next()),
        }
    }

    fn reset_params(&mut self) {
        match self.view {
            View::Polar => {
                let initial = self.initial.polar.clone();
                self.update_polar(|p| *p = initial);
            }
            View::Hybrid => {
                let initial = self.initial.hybrid.clone();
                self.update_hybrid(|p| *p = initial);
            }
        }
        self.sync_variant_selection();
    }

    fn frequency_text(&self) -> String {
        match self.view {
            View::Polar => self.setting_text(Setting::PolarFrequency),
            View::Hybrid => self.setting_text(Setting::HybridFrequency),
        }
    }

    fn setting_text(&self, setting: Setting) -> String {
        match setting {
            Setting::PolarFrequency => format!("{:.0}", self.polar.frequency),
            Setting::Rotation => format!("{:.0}°", self.polar.rotation.to_degrees()),
            Setting::LineWidth => format!("{:.0}", self.polar.line_width),
            Setting::HybridFrequency => format!("{:.1}", self.hybrid.frequency),
            Setting::Speed => {
                let speed = match self.view {
                    View::Polar => self.polar.animation_speed,
                    View::Hybrid => self.hybrid.animation_speed,
                };
                format!("{:.1}", speed)
            }
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.quit();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_variant(-1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_variant(1);
            }
            KeyCode::Tab => {
                self.setting_focus = (self.setting_focus + 1) % self.settings().len();
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.adjust_setting(-1.0);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.adjust_setting(1.0);
            }
            KeyCode::Char('[') => {
                self.adjust_setting(-COARSE_STEPS);
            }
            KeyCode::Char(']') => {
                self.adjust_setting(COARSE_STEPS);
            }
            KeyCode::Char(' ') | KeyCode::Char('a') => {
                self.toggle_animate();
            }
            KeyCode::Char('c') => {
                self.cycle_color();
            }
            KeyCode::Char('v') | KeyCode::BackTab => {
                self.switch_view();
            }
            KeyCode::Char('0') | KeyCode::Char('r') => {
                self.reset_params();
            }
            _ => {}
        }
    }
}

/// Run the TUI until the user quits.
pub fn run_tui(config: StudioConfig) -> Result<(), String> {
    // Initialize terminal
    enable_raw_mode().map_err(|e| e.to_string())?;
    stdout().execute(EnterAlternateScreen).map_err(|e| e.to_string())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(|e| e.to_string())?;

    let mut app = App::new(config);

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().map_err(|e| e.to_string())?;
    stdout().execute(LeaveAlternateScreen).map_err(|e| e.to_string())?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<(), String> {
    loop {
        // Collect a finished frame (non-blocking), then ask for the next one
        app.check_render_result();
        app.tick();

        if app.scheduler.is_busy() {
            app.spinner_frame = (app.spinner_frame + 1) % 8;
        }

        terminal.draw(|frame| ui(frame, app)).map_err(|_| "Draw error".to_string())?;

        let poll = if app.animator.is_running() { ANIMATION_POLL } else { IDLE_POLL };
        if event::poll(poll).map_err(|e| e.to_string())? {
            if let Event::Key(key) = event::read().map_err(|e| e.to_string())? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut ratatui::Frame, app: &mut App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(6),
        ])
        .split(frame.area());

    // View tabs
    let tabs = Tabs::new(vec![" Polar Graphics ", " CPPN Hybrid "])
        .select(match app.view {
            View::Polar => 0,
            View::Hybrid => 1,
        })
        .block(Block::default().borders(Borders::ALL).title(" polar-loom "))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, main_layout[0]);

    let top_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),
            Constraint::Min(40),
        ])
        .split(main_layout[1]);

    let sidebar_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(11),
        ])
        .split(top_layout[0]);

    // Formula / pattern list
    let list_title = match app.view {
        View::Polar => " Formulas ",
        View::Hybrid => " Patterns ",
    };
    let items: Vec<ListItem> = app.variant_names()
        .into_iter()
        .map(ListItem::new)
        .collect();

    let list = List::new(items)
        .block(Block::default()
            .title(list_title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)))
        .highlight_style(Style::default()
            .bg(Color::DarkGray)
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD))
        .highlight_symbol("► ");

    frame.render_stateful_widget(list, sidebar_layout[0], &mut app.variant_state.clone());

    // Stats panel
    let (width, height) = app.canvas_size();
    let look = match app.view {
        View::Polar => format!("Color: {}", app.polar.color),
        View::Hybrid => format!("Mode: {}", app.hybrid.color_mode.name()),
    };
    let stats_text = format!(
        "Canvas: {}x{}\n{}\nAnimate: {}\nLoop: #{}\nTime: {:.2}s\nRender: {:.1}ms\nShown: {}\nDropped: {}",
        width,
        height,
        look,
        if app.animator.is_running() { "on" } else { "off" },
        app.animator.generation(),
        app.shown_time,
        app.render_ms,
        app.scheduler.shown,
        app.scheduler.dropped,
    );
    let stats = Paragraph::new(stats_text)
        .block(Block::default()
            .title(" Stats ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)))
        .style(Style::default().fg(Color::White));

    frame.render_widget(stats, sidebar_layout[1]);

    // Spinner animation frames
    let spinner_chars = ['|', '/', '-', '\\', '|', '/', '-', '\\'];
    let spinner = spinner_chars[app.spinner_frame % spinner_chars.len()];

    let image_title = if app.scheduler.is_busy() && !app.animator.is_running() {
        format!(" [{}] Rendering... ", spinner)
    } else {
        canvas_caption(app.variant_description(), &app.frequency_text())
    };

    let border_color = if app.animator.is_running() { Color::Yellow } else { Color::Green };

    let image_block = Block::default()
        .title(image_title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = image_block.inner(top_layout[1]);
    frame.render_widget(image_block, top_layout[1]);

    if let Some(ref mut image_state) = app.image_state {
        let image_widget = StatefulImage::new(None);
        frame.render_stateful_widget(image_widget, inner_area, image_state);
    }

    // Settings panel: one box per setting, help on the right
    let settings = app.settings();
    let mut constraints: Vec<Constraint> = settings
        .iter()
        .map(|_| Constraint::Percentage((70 / settings.len()) as u16))
        .collect();
    constraints.push(Constraint::Percentage(30));

    let settings_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(main_layout[2]);

    let focused = app.focused_setting();
    for (idx, setting) in settings.iter().enumerate() {
        let style = if *setting == focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default()
            .title(format!(" {} ", setting.range().label))
            .borders(Borders::ALL)
            .border_style(style);

        let text = Paragraph::new(app.setting_text(*setting))
            .style(style)
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(text, settings_layout[idx]);
    }

    // Help
    let help_text = format!(
        "{}\n↑↓ formula  ←→ adjust  Tab next\nspace animate  c color  v view\n0 reset  q quit",
        app.view.coordinate_hint()
    );
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, settings_layout[settings.len()]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn each_view_explains_its_coordinates() {
        assert!(View::Polar.coordinate_hint().contains("r(θ)"));
        assert!(View::Hybrid.coordinate_hint().contains("x,y"));
        assert!(View::Hybrid.coordinate_hint().contains("r,θ"));
    }

    #[test]
    fn caption_names_formula_and_frequency() {
        let caption = canvas_caption(Formula::Rose.description(), "3");
        assert!(caption.contains(Formula::Rose.description()));
        assert!(caption.ends_with("| k = 3 "));
    }

    #[test]
    fn idle_scheduler_starts_request_immediately() {
        let mut animator = Animator::new();
        let mut scheduler = FrameScheduler::default();
        let still = animator.reset(false, 1.0).unwrap();

        assert_eq!(scheduler.request(still), Some(still));
        assert!(scheduler.is_busy());

        let done = scheduler.complete(still, &animator);
        assert_eq!(done, Completion { show: true, next: None });
        assert!(!scheduler.is_busy());
        assert_eq!((scheduler.shown, scheduler.dropped), (1, 0));
    }

    #[test]
    fn stale_result_is_not_shown() {
        let mut animator = Animator::new();
        let mut scheduler = FrameScheduler::default();
        animator.reset(true, 1.0);
        let frame = animator.next_frame(Instant::now()).unwrap();
        scheduler.request(frame);

        // user quits or switches view while the frame renders
        animator.cancel();

        let done = scheduler.complete(frame, &animator);
        assert_eq!(done, Completion { show: false, next: None });
        assert_eq!((scheduler.shown, scheduler.dropped), (0, 1));
    }

    #[test]
    fn queued_stale_frame_is_dropped_not_started() {
        let mut animator = Animator::new();
        let mut scheduler = FrameScheduler::default();
        animator.reset(true, 1.0);
        let t0 = Instant::now();
        let first = animator.next_frame(t0).unwrap();
        let second = animator.next_frame(t0 + Duration::from_millis(16)).unwrap();

        assert_eq!(scheduler.request(first), Some(first));
        assert_eq!(scheduler.request(second), None);

        // parameters replaced with another animated scene
        animator.reset(true, 2.0);

        let done = scheduler.complete(first, &animator);
        assert_eq!(done, Completion { show: false, next: None });
        assert!(!scheduler.is_busy());
        assert_eq!(scheduler.dropped, 2);
    }

    #[test]
    fn still_frame_renders_after_in_flight_animated_frame() {
        let mut animator = Animator::new();
        let mut scheduler = FrameScheduler::default();
        animator.reset(true, 1.0);
        let animated = animator.next_frame(Instant::now()).unwrap();
        scheduler.request(animated);

        // animate switched off mid-render
        let still = animator.reset(false, 1.0).unwrap();
        assert_eq!(scheduler.request(still), None);

        let done = scheduler.complete(animated, &animator);
        assert_eq!(done, Completion { show: false, next: Some(still) });
        assert!(scheduler.is_busy());

        let done = scheduler.complete(still, &animator);
        assert_eq!(done, Completion { show: true, next: None });
        assert_eq!(still.time, 0.0);
        assert_eq!((scheduler.shown, scheduler.dropped), (1, 1));

        // and the loop produces nothing further
        assert_eq!(animator.next_frame(Instant::now()), None);
    }

    #[test]
    fn queue_slot_keeps_newest_request() {
        let mut animator = Animator::new();
        let mut scheduler = FrameScheduler::default();
        animator.reset(true, 1.0);
        let t0 = Instant::now();
        let frames: Vec<Frame> = [0, 16, 32]
            .iter()
            .map(|ms| animator.next_frame(t0 + Duration::from_millis(*ms)).unwrap())
            .collect();

        scheduler.request(frames[0]);
        scheduler.request(frames[1]);
        scheduler.request(frames[2]);
        assert_eq!(scheduler.dropped, 1);

        let done = scheduler.complete(frames[0], &animator);
        assert_eq!(done, Completion { show: true, next: Some(frames[2]) });
    }
}
