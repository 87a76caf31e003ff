use crate::activity::ActivityLog;
use crate::components::Banner;
use crate::dialog::{confirm_answer, handle_text_input, DialogAction};
use crate::events::{Event, EventHandler, EventSender, PromptRequest};
use crate::host::tui_capabilities;
use crate::selection::SelectionState;
use crate::ui;
use crossterm::{
    event::{KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use doccards_core::{AppConfig, Loggable, TextBuffer};
use doccards_domain::{
    AddCard, Capabilities, CardBoard, CardController, CardId, CardRecord, Command, CornerAction,
    HistoryManager, Outcome, TagAction,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::oneshot;

#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    /// The label of this card is being edited.
    EditCard(CardId),
    PickFile,
    ConfirmDelete { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Press {
    Corner,
    Tag,
}

/// Reply channel of the prompt currently on screen.
#[derive(Debug)]
enum PendingReply {
    Confirm(oneshot::Sender<bool>),
    PickFile(oneshot::Sender<Option<PathBuf>>),
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub board: CardBoard,
    pub controllers: BTreeMap<CardId, CardController>,
    pub selection: SelectionState,
    pub history: HistoryManager,
    pub banner: Option<Banner>,
    pub activity: ActivityLog,
    pub show_activity: bool,
    /// Path field of the file picker dialog.
    pub path_input: TextBuffer,
    /// Card whose corner or tag press is waiting on a capability.
    pub in_flight: Option<CardId>,
    pending_reply: Option<PendingReply>,
    caps: Capabilities,
    events: EventSender,
    banner_ttl: Duration,
}

impl App {
    pub fn new(config: &AppConfig, board: CardBoard, events: EventSender) -> Self {
        let caps = tui_capabilities(config, events.clone());
        Self::with_capabilities(config, board, caps, events)
    }

    pub fn with_capabilities(
        config: &AppConfig,
        board: CardBoard,
        caps: Capabilities,
        events: EventSender,
    ) -> Self {
        let mut app = Self {
            should_quit: false,
            mode: AppMode::Normal,
            board,
            controllers: BTreeMap::new(),
            selection: SelectionState::new(),
            history: HistoryManager::with_limit(config.history_limit),
            banner: None,
            activity: ActivityLog::new(),
            show_activity: false,
            path_input: TextBuffer::new(),
            in_flight: None,
            pending_reply: None,
            caps,
            events,
            banner_ttl: config.banner_ttl(),
        };
        app.sync_controllers();
        app
    }

    pub async fn run(mut self, mut events: EventHandler) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        let result = self.event_loop(&mut terminal, &mut events).await;

        events.stop();
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &mut EventHandler,
    ) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;
            match events.next().await {
                Some(event) => self.handle_event(event),
                None => break,
            }
        }
        Ok(())
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Tick => self.expire_banner(),
            Event::Prompt(request) => self.open_prompt(request),
            Event::Resolved { card_id, outcome } => self.apply_outcome(card_id, outcome),
            Event::HostError(message) => {
                self.activity.add_log(message.clone());
                self.banner = Some(Banner::error(message));
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.mode.clone() {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::EditCard(card_id) => self.handle_edit_key(card_id, key),
            AppMode::PickFile => self.handle_pick_file_key(key),
            AppMode::ConfirmDelete { .. } => self.handle_confirm_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
            self.quit();
            return;
        }
        if self.in_flight.is_some() {
            tracing::debug!("Ignoring {:?} while a card action is pending", key.code);
            return;
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.selection.prev(),
            KeyCode::Right | KeyCode::Char('l') => self.selection.next(self.board.len()),
            KeyCode::Char('n') => self.handle_add_card(),
            KeyCode::Char('e') | KeyCode::Enter => self.handle_start_edit(),
            KeyCode::Char('x') => self.handle_press(Press::Corner),
            KeyCode::Char('t') => self.handle_press(Press::Tag),
            KeyCode::Char('u') => self.handle_undo(),
            KeyCode::Char('r') => self.handle_redo(),
            KeyCode::Char('a') => self.show_activity = !self.show_activity,
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, card_id: CardId, key: KeyEvent) {
        let Some(controller) = self.controllers.get_mut(&card_id) else {
            self.mode = AppMode::Normal;
            return;
        };
        let Some(draft) = controller.draft_mut() else {
            self.mode = AppMode::Normal;
            return;
        };

        match handle_text_input(draft, key, true) {
            DialogAction::None => {}
            DialogAction::Cancel => {
                controller.cancel();
                self.mode = AppMode::Normal;
            }
            DialogAction::Confirm => {
                let command = controller.save();
                self.mode = AppMode::Normal;
                if let Some(command) = command {
                    self.apply(&command);
                }
            }
        }
    }

    fn handle_pick_file_key(&mut self, key: KeyEvent) {
        match handle_text_input(&mut self.path_input, key, false) {
            DialogAction::None => {}
            DialogAction::Cancel => self.answer_pick_file(None),
            DialogAction::Confirm => {
                let path = self.path_input.as_str().trim();
                let choice = (!path.is_empty()).then(|| PathBuf::from(path));
                self.answer_pick_file(choice);
            }
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
            self.answer_confirm(false);
            self.quit();
            return;
        }
        if let Some(answer) = confirm_answer(key) {
            self.answer_confirm(answer);
        }
    }

    fn answer_confirm(&mut self, answer: bool) {
        if let Some(PendingReply::Confirm(reply)) = self.pending_reply.take() {
            let _ = reply.send(answer);
        }
        self.mode = AppMode::Normal;
    }

    fn answer_pick_file(&mut self, choice: Option<PathBuf>) {
        if let Some(PendingReply::PickFile(reply)) = self.pending_reply.take() {
            let _ = reply.send(choice);
        }
        self.path_input.clear();
        self.mode = AppMode::Normal;
    }

    fn open_prompt(&mut self, request: PromptRequest) {
        // An unanswered prompt is dismissed by dropping its reply.
        self.pending_reply = None;
        match request {
            PromptRequest::Confirm { message, reply } => {
                self.pending_reply = Some(PendingReply::Confirm(reply));
                self.mode = AppMode::ConfirmDelete { message };
            }
            PromptRequest::PickFile { reply } => {
                self.pending_reply = Some(PendingReply::PickFile(reply));
                self.path_input.clear();
                self.mode = AppMode::PickFile;
            }
        }
    }

    pub fn selected_record(&self) -> Option<&CardRecord> {
        self.selection
            .get()
            .and_then(|idx| self.board.cards().get(idx))
    }

    fn handle_add_card(&mut self) {
        self.apply(&AddCard);
        self.selection.jump_to_last(self.board.len());
    }

    fn handle_start_edit(&mut self) {
        let Some(record) = self.selected_record().cloned() else {
            return;
        };
        if let Some(controller) = self.controllers.get_mut(&record.id) {
            controller.start_edit(&record);
            self.mode = AppMode::EditCard(record.id);
        }
    }

    fn handle_press(&mut self, press: Press) {
        let Some(record) = self.selected_record().cloned() else {
            return;
        };
        let Some(controller) = self.controllers.get(&record.id).cloned() else {
            return;
        };

        let intent = match press {
            Press::Corner => CornerAction::for_record(&record).label(),
            Press::Tag if !record.tag.visible => return,
            Press::Tag => match record.tag.action {
                TagAction::Upload => "Upload",
                TagAction::DownloadNow => "Download",
            },
        };
        self.activity
            .add_log(format!("{} triggered for card {}", intent, record.id));

        let caps = self.caps.clone();
        let events = self.events.clone();
        self.in_flight = Some(record.id);
        tokio::spawn(async move {
            let outcome = match press {
                Press::Corner => controller.press_corner(&record, &caps).await,
                Press::Tag => controller.press_tag(&record, &caps).await,
            };
            let _ = events.send(Event::Resolved {
                card_id: record.id,
                outcome,
            });
        });
    }

    fn apply_outcome(&mut self, card_id: CardId, outcome: Outcome) {
        if self.in_flight == Some(card_id) {
            self.in_flight = None;
        }
        if let Some(notice) = outcome.notice() {
            self.banner = Some(Banner::from_notice(notice));
            self.activity.add_log(notice.to_string());
        }
        match outcome {
            Outcome::Mutate { command, .. } => self.apply(command.as_ref()),
            Outcome::Notify(_) => {}
            Outcome::Aborted => tracing::debug!("Action on card {} dismissed", card_id),
        }
    }

    /// Replace the board with the command's result, recording the old one
    /// for undo.
    pub fn apply(&mut self, command: &dyn Command) {
        let next = command.execute(&self.board);
        if next == self.board {
            tracing::debug!("'{}' changed nothing", command.description());
            return;
        }
        self.history.capture_before_command(self.board.clone());
        self.board = next;
        self.activity.add_log(command.description());
        self.sync_controllers();
    }

    fn handle_undo(&mut self) {
        if let Some(previous) = self.history.undo(&self.board) {
            self.board = previous;
            self.activity.add_log("Undo".to_string());
            self.sync_controllers();
        }
    }

    fn handle_redo(&mut self) {
        if let Some(next) = self.history.redo(&self.board) {
            self.board = next;
            self.activity.add_log("Redo".to_string());
            self.sync_controllers();
        }
    }

    /// One controller per live card; controllers of removed cards go with them.
    fn sync_controllers(&mut self) {
        let board = &self.board;
        self.controllers.retain(|id, _| board.contains(*id));
        for record in board {
            self.controllers
                .entry(record.id)
                .or_insert_with(|| CardController::new(record.id));
        }
        self.selection.clamp(board.len());

        if let AppMode::EditCard(id) = self.mode {
            if !self.controllers.contains_key(&id) {
                self.mode = AppMode::Normal;
            }
        }
    }

    fn expire_banner(&mut self) {
        if self
            .banner
            .as_ref()
            .is_some_and(|banner| banner.is_expired(self.banner_ttl))
        {
            self.banner = None;
        }
    }
}
