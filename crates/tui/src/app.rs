//! Main application struct and run loop.
//!
//! This module provides the `App` struct which hosts the tag screen: it
//! routes input to the gesture recognizer and the new tag modal, reports
//! every layout pass back to the controller and drives the re-enable timer
//! and the layout animation.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use dragtags_config::Config;
use dragtags_protocol::Message;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tracing::{debug, info};

use crate::{
    animation::LayoutAnimation,
    controller::TagListController,
    event::{MAX_POLL_TIMEOUT, event_to_message, poll_event},
    gesture::{Cell, GestureOutcome, GestureRecognizer},
    layout::{HEADER_HEIGHT, MIN_HEIGHT, MIN_WIDTH},
    modal::NewTagModal,
    terminal::AppTerminal,
    widgets::{
        AreaTarget, ModalLayout, TagsAreaLayout, layout_tags_area, render_help_overlay,
        render_new_tag_modal, render_tags_area,
    },
};

/// Title shown in the header.
pub const HEADER_TITLE: &str = "Let's drag and drop some tags!";

/// Instructions shown below the title.
pub const INSTRUCTIONS: &str =
    "Drag a tag onto another to swap them. Click a tag to remove it, or Add new to create one.";

/// Redraw interval while chips are sliding.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// The main application struct.
///
/// Manages the tag screen state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    controller: TagListController,
    recognizer: GestureRecognizer,
    /// The new tag modal, if open.
    modal: Option<NewTagModal>,
    help_visible: bool,
    should_quit: bool,
    /// Tags area layout of the last render, used for tap hit-testing.
    tags_layout: TagsAreaLayout,
    /// Modal layout of the last render, used for click hit-testing.
    modal_layout: Option<ModalLayout>,
    animation: Option<LayoutAnimation>,
    /// Where each chip was drawn in the last frame.
    drawn: HashMap<String, Rect>,
    /// Tag order of the last frame.
    drawn_order: Vec<String>,
}

impl App {
    /// Creates a new application showing the given tags.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragtags_tui::App;
    ///
    /// let app = App::new(["#rust", "#tui"]);
    /// assert_eq!(app.controller().tags().len(), 2);
    /// ```
    #[must_use]
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_controller(TagListController::with_titles(titles))
    }

    /// Creates a new application from a loaded configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use dragtags_config::Config;
    /// use dragtags_tui::App;
    ///
    /// let config = Config {
    ///     tags: vec!["#a".to_string()],
    ///     animation_duration_ms: 100,
    /// };
    /// let app = App::with_config(&config);
    /// assert_eq!(app.controller().animation_duration(), Duration::from_millis(100));
    /// ```
    #[must_use]
    pub fn with_config(config: &Config) -> Self {
        Self::with_controller(TagListController::new(
            &config.tags,
            config.animation_duration(),
        ))
    }

    fn with_controller(controller: TagListController) -> Self {
        Self {
            controller,
            recognizer: GestureRecognizer::new(),
            modal: None,
            help_visible: false,
            should_quit: false,
            tags_layout: TagsAreaLayout::default(),
            modal_layout: None,
            animation: None,
            drawn: HashMap::new(),
            drawn_order: Vec::new(),
        }
    }

    /// Returns the tag list controller.
    #[must_use]
    pub fn controller(&self) -> &TagListController {
        &self.controller
    }

    /// Returns the open new tag modal, if any.
    #[must_use]
    pub fn modal(&self) -> Option<&NewTagModal> {
        self.modal.as_ref()
    }

    #[must_use]
    pub fn is_help_visible(&self) -> bool {
        self.help_visible
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the tags area layout of the last render.
    #[must_use]
    pub fn tags_layout(&self) -> &TagsAreaLayout {
        &self.tags_layout
    }

    /// Updates the application state based on a message.
    ///
    /// This is [`Self::update_at`] with the current time.
    pub fn update(&mut self, msg: Message) {
        self.update_at(msg, Instant::now());
    }

    /// Updates the application state based on a message received at `now`.
    ///
    /// While the modal is open it receives all input. While help is visible,
    /// any key or click dismisses it instead of its normal action. Only
    /// `Quit` works everywhere.
    pub fn update_at(&mut self, msg: Message, now: Instant) {
        if msg.is_terminating() {
            self.should_quit = true;
            return;
        }

        if self.modal.is_some() {
            self.update_modal(msg);
            return;
        }

        // When help is visible, keys and clicks dismiss it
        if self.help_visible {
            if msg.dismisses_overlay() {
                self.help_visible = false;
            }
            return;
        }

        match msg {
            Message::Escape | Message::Resized => {
                self.recognizer.terminate(&mut self.controller);
            }
            Message::ToggleHelp => {
                self.recognizer.terminate(&mut self.controller);
                self.help_visible = true;
            }
            Message::OpenNewTag => self.open_modal(),
            Message::PointerDown { column, row } => {
                self.recognizer.pointer_down(column, row);
            }
            Message::PointerDrag { column, row } => {
                self.recognizer
                    .pointer_drag(&mut self.controller, column, row, now);
            }
            Message::PointerUp { column, row } => {
                if let GestureOutcome::Tap { down, up } =
                    self.recognizer.pointer_up(&mut self.controller, column, row)
                {
                    self.handle_tap(down, up);
                }
            }
            Message::ExtraTouchDown => self.recognizer.extra_touch_down(),
            Message::ExtraTouchUp => self.recognizer.extra_touch_up(),
            _ => {}
        }
    }

    fn update_modal(&mut self, msg: Message) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };

        // Any key or click dismisses the alert
        if modal.alert().is_some() {
            if msg.dismisses_overlay() {
                modal.dismiss_alert();
            }
            return;
        }

        match msg {
            Message::ModalInput { ch } => modal.input_mut().insert_char(ch),
            Message::ModalBackspace => modal.input_mut().backspace(),
            Message::ModalCursorLeft => modal.input_mut().move_left(),
            Message::ModalCursorRight => modal.input_mut().move_right(),
            Message::ModalClear => modal.input_mut().clear(),
            Message::ModalSubmit => self.submit_modal(),
            Message::ModalClose | Message::Escape => self.close_modal(),
            Message::PointerDown { column, row } => self.handle_modal_click(column, row),
            _ => {}
        }
    }

    fn open_modal(&mut self) {
        self.recognizer.terminate(&mut self.controller);
        self.modal = Some(NewTagModal::new());
        debug!("opened new tag modal");
    }

    fn close_modal(&mut self) {
        self.modal = None;
        self.modal_layout = None;
        debug!("closed new tag modal");
    }

    fn submit_modal(&mut self) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };
        if let Some(title) = modal.submit() {
            // The modal closes before the tag is added
            self.close_modal();
            self.controller.submit_new_tag(title);
        }
    }

    /// Handles a click while the modal is open.
    ///
    /// "Add" submits, the backdrop closes the modal and the input panel
    /// keeps focus.
    fn handle_modal_click(&mut self, column: u16, row: u16) {
        let Some(layout) = self.modal_layout else {
            return;
        };
        let position = Position::new(column, row);
        if layout.add_button.contains(position) {
            self.submit_modal();
        } else if !layout.panel.contains(position) {
            self.close_modal();
        }
    }

    /// Handles a press and release that did not become a drag.
    ///
    /// Both ends must land on the same element.
    fn handle_tap(&mut self, down: Cell, up: Cell) {
        let target = self.tags_layout.hit(down.0, down.1);
        if target != self.tags_layout.hit(up.0, up.1) {
            return;
        }
        match target {
            Some(AreaTarget::Chip(title)) => {
                self.controller.remove_tag(&title);
            }
            Some(AreaTarget::AddNew) => self.open_modal(),
            None => {}
        }
    }

    /// Fires due timers and retires a finished animation.
    pub fn tick(&mut self, now: Instant) {
        self.controller.fire_due_timers(now);
        if self
            .animation
            .as_ref()
            .is_some_and(|animation| animation.is_finished(now))
        {
            self.animation = None;
        }
    }

    /// Returns how long the loop may wait for input before the next tick.
    ///
    /// The wait shrinks to the pending re-enable deadline and, while chips
    /// slide, to the frame interval.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let mut timeout = MAX_POLL_TIMEOUT;
        if let Some(deadline) = self.controller.next_deadline() {
            timeout = timeout.min(deadline.saturating_duration_since(now));
        }
        if self.animation.is_some() {
            timeout = timeout.min(FRAME_INTERVAL);
        }
        timeout
    }

    /// Renders the application UI to the given frame.
    ///
    /// This is [`Self::view_at`] with the current time.
    pub fn view(&mut self, frame: &mut Frame) {
        self.view_at(frame, Instant::now());
    }

    /// Renders the application UI as of `now`.
    ///
    /// Every render is a layout pass: the chip rectangles are reported to
    /// the controller so the next pointer event hit-tests against them.
    /// Below the minimum size a "terminal too small" message is shown and
    /// all chips lose their geometry.
    pub fn view_at(&mut self, frame: &mut Frame, now: Instant) {
        let area = frame.area();

        // Check if terminal is too small for any useful rendering
        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.report_layout(TagsAreaLayout::default());
            self.modal_layout = None;
            render_terminal_too_small(frame, area);
            return;
        }

        let [header_area, tags_area] =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);

        render_header(frame, header_area);

        let layout = layout_tags_area(self.controller.tags(), tags_area);
        self.start_animation_on_reorder(&layout, now);

        let animation_frame = self.animation.as_ref().map(|animation| animation.frame(now));
        render_tags_area(
            self.controller.tags(),
            &layout,
            animation_frame.as_ref(),
            tags_area,
            frame.buffer_mut(),
        );
        self.drawn = layout
            .placed(animation_frame.as_ref())
            .into_iter()
            .map(|(title, rect)| (title.to_string(), rect))
            .collect();

        self.report_layout(layout);

        // Render the modal on top of the tags
        if let Some(modal) = &self.modal {
            let modal_layout = render_new_tag_modal(modal, area, frame.buffer_mut());
            if let Some(cursor) = modal_layout.cursor {
                frame.set_cursor_position(cursor);
            }
            self.modal_layout = Some(modal_layout);
        } else {
            self.modal_layout = None;
        }

        // Render help overlay on top if visible
        if self.help_visible {
            render_help_overlay(area, frame.buffer_mut());
        }
    }

    /// Starts sliding chips if the tag order changed since the last frame.
    fn start_animation_on_reorder(&mut self, layout: &TagsAreaLayout, now: Instant) {
        let unchanged = layout
            .chips
            .iter()
            .map(|(title, _)| title)
            .eq(self.drawn_order.iter());
        if unchanged {
            return;
        }

        let duration = self.controller.animation_duration();
        if !self.drawn.is_empty() && !duration.is_zero() {
            self.animation = Some(LayoutAnimation::start(self.drawn.clone(), now, duration));
        }
        self.drawn_order = layout.chips.iter().map(|(title, _)| title.clone()).collect();
    }

    /// Feeds a layout pass into the controller's hit-test geometry.
    fn report_layout(&mut self, layout: TagsAreaLayout) {
        for (title, slot) in &layout.chips {
            match slot {
                Some(rect) => {
                    self.controller
                        .on_render_tag(title, rect.x, rect.y, rect.width, rect.height);
                }
                None => self.controller.clear_tag_bounds(title),
            }
        }
        // Chips missing from the pass (terminal too small) lose their geometry
        if layout.chips.is_empty() {
            let titles: Vec<String> = self
                .controller
                .tags()
                .iter()
                .map(|tag| tag.title.clone())
                .collect();
            for title in &titles {
                self.controller.clear_tag_bounds(title);
            }
        }
        self.tags_layout = layout;
    }

    /// Runs the main application loop.
    ///
    /// This function returns when the user quits the application.
    /// Each iteration fires due timers, renders, then waits for input no
    /// longer than [`Self::poll_timeout`].
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dragtags_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(["#rust", "#tui"]);
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        info!(tags = self.controller.tags().len(), "starting tag screen");

        loop {
            let now = Instant::now();
            self.tick(now);

            // Render
            terminal.draw(|frame| self.view_at(frame, now))?;

            // Poll for events (keyboard, mouse and resize)
            if let Some(event) = poll_event(self.poll_timeout(Instant::now()))? {
                if let Some(msg) = event_to_message(&event, self.modal.is_some()) {
                    self.update(msg);
                }
            }

            // Check for quit
            if self.should_quit {
                break;
            }
        }

        info!(tags = ?self.controller.tags().titles(), "leaving tag screen");
        Ok(())
    }
}

/// Renders the header with title, help cue and instructions.
fn render_header(frame: &mut Frame, area: Rect) {
    // Create the block first to get inner area (with rounded borders)
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [top_area, instructions_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    // Split top row: title left, help cue right
    let [title_area, help_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(17), // "Press ? for help" = 16 chars + padding
    ])
    .areas(top_area);

    let title = Paragraph::new(Line::from(Span::styled(
        HEADER_TITLE,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, title_area);

    let help_cue = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" for help", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(help_cue, help_area);

    let instructions = Paragraph::new(Span::styled(
        INSTRUCTIONS,
        Style::default().fg(Color::Gray),
    ))
    .wrap(Wrap { trim: true });
    frame.render_widget(instructions, instructions_area);
}

/// Renders a message indicating the terminal is too small.
fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    // Center the message vertically
    let vertical_offset = area.height.saturating_sub(2) / 2;
    let centered_area = Rect {
        x: area.x,
        y: area.y + vertical_offset,
        width: area.width,
        height: area.height.saturating_sub(vertical_offset),
    };

    frame.render_widget(paragraph, centered_area);
}
