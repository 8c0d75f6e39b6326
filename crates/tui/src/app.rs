//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle: translating input into drag gestures, feeding
//! collisions into the board store, and rendering the result.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tracing::{debug, trace};

use dragboard_config::Config;
use dragboard_protocol::{Board, Message};

use crate::{
    AppState,
    collision::closest_corners,
    event::{event_to_message, poll_event},
    layout::{
        BoardGeometry, CARD_HEIGHT, HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH,
        STATUS_BAR_HEIGHT,
    },
    sensor::{Direction, DragSession, KeyboardSensor, PointerEvent, PointerSensor, SensorKind},
    terminal::AppTerminal,
    widgets::{BoardView, render_board, render_help_overlay, render_status_bar},
};

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    /// Board restored by [`Message::Reset`].
    initial: Board,
    should_quit: bool,
    /// Whether the header was shown in the last render.
    header_visible: bool,
    /// Area the board occupied in the last render, used for hit-testing.
    board_area: Rect,
    pointer: PointerSensor,
    /// Store revision when the current drag started.
    drag_revision: u64,
    config: Config,
}

impl App {
    /// Creates a new application with the given board and default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragboard_protocol::seed::default_board;
    /// use dragboard_tui::App;
    ///
    /// let app = App::new(default_board());
    /// assert_eq!(app.state().board().len(), 3);
    /// ```
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::with_config(board, Config::default())
    }

    /// Creates a new application with the given board and configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragboard_config::Config;
    /// use dragboard_protocol::seed::default_board;
    /// use dragboard_tui::App;
    ///
    /// let mut config = Config::default();
    /// config.ui.show_help_on_start = true;
    ///
    /// let app = App::with_config(default_board(), config);
    /// assert!(app.state().help_visible);
    /// ```
    #[must_use]
    pub fn with_config(board: Board, config: Config) -> Self {
        let mut state = AppState::new(board.clone());
        state.help_visible = config.ui.show_help_on_start;

        Self {
            state,
            initial: board,
            should_quit: false,
            header_visible: true,
            board_area: Rect::default(),
            pointer: PointerSensor::new(config.drag.activation_distance),
            drag_revision: 0,
            config,
        }
    }

    /// Returns the current application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns `true` once the user asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns `true` if the header was drawn in the last render.
    #[must_use]
    pub fn header_visible(&self) -> bool {
        self.header_visible
    }

    /// Updates the application state based on a message.
    pub fn update(&mut self, msg: Message) {
        if self.state.help_visible {
            match msg {
                Message::Quit => self.should_quit = true,
                Message::ToggleHelp | Message::Escape => self.state.toggle_help(),
                Message::PointerMove { .. } | Message::PointerUp { .. } => {}
                _ => self.state.dismiss_help(),
            }
            return;
        }

        let keyboard_drag = self
            .state
            .drag
            .as_ref()
            .is_some_and(|drag| drag.sensor == SensorKind::Keyboard);

        match msg {
            Message::Quit => self.should_quit = true,
            Message::ToggleHelp => {
                // Help swallows pointer releases, so no gesture may outlive it.
                self.cancel_drag();
                self.state.toggle_help();
            }
            Message::Reset => self.reset(),
            Message::Escape => {
                if self.state.drag.is_some() {
                    self.cancel_drag();
                } else {
                    self.state.clear_selection();
                }
            }
            Message::NavigateLeft if keyboard_drag => self.keyboard_step(Direction::Left),
            Message::NavigateRight if keyboard_drag => self.keyboard_step(Direction::Right),
            Message::NavigateUp if keyboard_drag => self.keyboard_step(Direction::Up),
            Message::NavigateDown if keyboard_drag => self.keyboard_step(Direction::Down),
            msg if msg.is_navigation() && self.state.drag.is_some() => {}
            Message::NavigateLeft => self.state.navigate_left(),
            Message::NavigateRight => self.state.navigate_right(),
            Message::NavigateUp => self.state.navigate_up(),
            Message::NavigateDown => self.state.navigate_down(),
            Message::Select if keyboard_drag => self.finish_drag(),
            Message::Select => {
                if self.state.drag.is_none() {
                    self.pick_up();
                }
            }
            Message::PointerDown { column, row } => self.pointer_down(Position::new(column, row)),
            Message::PointerMove { column, row } => self.pointer_move(Position::new(column, row)),
            Message::PointerUp { column, row } => self.pointer_up(Position::new(column, row)),
        }
    }

    /// Geometry of the board as it would be drawn now.
    fn geometry(&self) -> BoardGeometry {
        BoardGeometry::compute(self.state.board(), self.board_area)
    }

    fn item_title(&self, id: &str) -> String {
        self.state
            .board()
            .item(id)
            .map_or_else(|| id.to_string(), |item| item.title.clone())
    }

    fn begin_drag(&mut self, session: DragSession) {
        debug!(active = %session.active, sensor = ?session.sensor, "drag started");
        let title = self.item_title(session.active.as_str());
        self.state.set_status(format!("Dragging {title}"));
        self.drag_revision = self.state.store.revision();
        self.state.drag = Some(session);
    }

    /// Lifts the selected item with the keyboard sensor.
    fn pick_up(&mut self) {
        if !self.config.drag.keyboard_enabled {
            self.state.set_status("Keyboard dragging is disabled");
            return;
        }
        let Some(item) = self.state.selected_item() else {
            return;
        };
        let geometry = self.geometry();
        // Items pushed past the bottom of a column have no card to lift.
        let Some(card) = geometry.card(item.id.as_str()) else {
            return;
        };
        let session = DragSession::new(card.id.clone(), SensorKind::Keyboard, card.area);
        self.begin_drag(session);
    }

    fn keyboard_step(&mut self, direction: Direction) {
        let geometry = self.geometry();
        let sensor = KeyboardSensor::new(CARD_HEIGHT, geometry.column_width());
        if let Some(drag) = self.state.drag.as_mut() {
            drag.delta = sensor.step(drag.delta, direction);
        }
        self.drag_over();
    }

    /// Resolves the collision for the current drag and commits any
    /// cross-column move it implies.
    fn drag_over(&mut self) {
        let geometry = self.geometry();
        let Some(drag) = self.state.drag.as_mut() else {
            return;
        };

        let collision = closest_corners(drag.rect(), &geometry.droppables());
        trace!(?collision, "collision");
        drag.over = collision.map(|collision| collision.id);

        let event = drag.over_event();
        if self.state.store.drag_over(&event) {
            debug!(active = %event.active, over = ?event.over, "moved across columns");
            self.state.select_item(event.active.as_str());
        }
    }

    /// Drops the dragged item at its current collision target.
    fn finish_drag(&mut self) {
        self.drag_over();
        let Some(drag) = self.state.drag.take() else {
            return;
        };

        let event = drag.end_event();
        self.state.store.drag_end(&event);
        debug!(active = %event.active, over = ?event.over, "drag ended");

        let active = drag.active.as_str();
        self.state.select_item(active);
        let title = self.item_title(active);
        if self.state.store.revision() == self.drag_revision {
            self.state.set_status(format!("Dropped {title} in place"));
        } else {
            let column = self
                .state
                .board()
                .find_column(Some(active))
                .map_or_else(String::new, |column| column.title.clone());
            self.state.set_status(format!("Moved {title} to {column}"));
        }
    }

    fn cancel_drag(&mut self) {
        self.pointer.cancel();
        if let Some(drag) = self.state.drag.take() {
            debug!(active = %drag.active, "drag cancelled");
            self.state.select_item(drag.active.as_str());
            self.state.set_status("Drag cancelled");
        }
    }

    fn pointer_down(&mut self, position: Position) {
        if self.state.drag.is_some() {
            return;
        }
        let geometry = self.geometry();
        match geometry.card_at(position.x, position.y) {
            Some((column, card)) => {
                let card = &geometry.columns[column].cards[card];
                self.pointer.press(card.id.clone(), card.area, position);
            }
            None => {
                if let Some(column) = geometry.column_at(position.x, position.y) {
                    self.state.selected_column = column;
                    self.state.clear_selection();
                }
            }
        }
    }

    fn pointer_move(&mut self, position: Position) {
        match self.pointer.motion(position) {
            Some(PointerEvent::Start {
                active,
                initial,
                delta,
            }) => {
                let mut session = DragSession::new(active, SensorKind::Pointer, initial);
                session.delta = delta;
                self.begin_drag(session);
                self.drag_over();
            }
            Some(PointerEvent::Move { delta }) => {
                if let Some(drag) = self.state.drag.as_mut() {
                    drag.delta = delta;
                }
                self.drag_over();
            }
            _ => {}
        }
    }

    fn pointer_up(&mut self, position: Position) {
        match self.pointer.release(position) {
            Some(PointerEvent::End { delta }) => {
                if let Some(drag) = self.state.drag.as_mut() {
                    drag.delta = delta;
                }
                self.finish_drag();
            }
            Some(PointerEvent::Click { item }) => {
                self.state.select_item(item.as_str());
            }
            _ => {}
        }
    }

    fn reset(&mut self) {
        self.pointer.cancel();
        self.state.reset(self.initial.clone());
        self.state.set_status("Board reset");
        debug!("board reset");
    }

    /// Renders the application UI to the frame.
    ///
    /// When the terminal is too small for the board, a message is shown
    /// instead. The header is hidden first when height runs short.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            self.board_area = Rect::default();
            Self::render_terminal_too_small(frame, area);
            return;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        self.header_visible = show_header;

        let content_area = if show_header {
            let [header, content] =
                Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
                    .areas(area);
            Self::render_header(frame, header);
            content
        } else {
            area
        };

        let [board_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
                .areas(content_area);
        self.board_area = board_area;

        let geometry = self.geometry();
        let view = BoardView {
            focused_column: self.state.selected_column,
            selected_item: self.state.selected_item,
            drag: self.state.drag.as_ref(),
        };
        let buf = frame.buffer_mut();
        render_board(self.state.board(), &geometry, &view, buf);
        render_status_bar(
            self.state.status.as_deref(),
            self.state.drag.is_some(),
            status_area,
            buf,
        );

        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            y: area.y + vertical_offset,
            height: area.height.saturating_sub(vertical_offset),
            ..area
        };

        frame.render_widget(paragraph, centered_area);
    }

    fn render_header(frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // "Press ? for help" plus padding.
        let [title_area, help_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(17)]).areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "dragboard",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("Kanban Board", Style::default().fg(Color::White)),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }

    /// Runs the main application loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dragboard_protocol::seed::default_board;
    /// use dragboard_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(default_board());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        let poll_interval = self.config.ui.poll_interval();

        while !self.should_quit {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event(poll_interval)?
                && let Some(msg) = event_to_message(&event)
            {
                self.update(msg);
            }
        }

        Ok(())
    }
}
