use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use doccards_domain::{CardId, Outcome};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

/// Everything the app loop reacts to, delivered one at a time.
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    /// A capability needs an answer from the user.
    Prompt(PromptRequest),
    /// A card dispatch finished.
    Resolved { card_id: CardId, outcome: Outcome },
    /// A host capability failed (unreadable file, unwritable download dir).
    HostError(String),
}

#[derive(Debug)]
pub enum PromptRequest {
    Confirm {
        message: String,
        reply: oneshot::Sender<bool>,
    },
    PickFile {
        reply: oneshot::Sender<Option<PathBuf>>,
    },
}

pub type EventSender = mpsc::UnboundedSender<Event>;

pub struct EventHandler {
    tx: EventSender,
    rx: mpsc::UnboundedReceiver<Event>,
    shutdown_tx: mpsc::UnboundedSender<()>,
}

impl EventHandler {
    /// Channel only, no terminal polling. Used by tests and by [`EventHandler::new`].
    pub fn detached() -> (Self, mpsc::UnboundedReceiver<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                rx,
                shutdown_tx,
            },
            shutdown_rx,
        )
    }

    pub fn new() -> Self {
        let (handler, mut shutdown_rx) = Self::detached();
        let tx = handler.sender();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        break;
                    }
                    _ = tokio::time::sleep(Duration::from_millis(16)) => {
                        if event::poll(Duration::from_millis(0)).unwrap_or(false) {
                            if let Ok(CrosstermEvent::Key(key)) = event::read() {
                                if tx.send(Event::Key(key)).is_err() {
                                    break;
                                }
                            }
                        } else if tx.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        handler
    }

    pub fn sender(&self) -> EventSender {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
