//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox pattern
//!
//! Async work (HTTP requests) runs in spawned tasks whose results come back
//! as `UiEvent`s on a single unbounded inbox channel, drained each frame.
//! The bus subscription is bridged into the same inbox, so notices flow
//! through the reducer like any other event.

mod handlers;

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use turnstile_core::api::ApiClient;
use turnstile_core::bus::{Bus, Notice};
use turnstile_core::session::SessionStore;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick cadence: drives animations and banner/status expiry.
pub const TICK_INTERVAL: Duration = Duration::from_millis(150);

/// Full-screen TUI runtime.
///
/// Terminal state is restored on drop, panic, or quit.
pub struct Runtime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    api: Arc<ApiClient>,
    sessions: SessionStore,
    bus: Bus<Notice>,
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    last_tick: Instant,
}

impl Runtime {
    /// Creates the runtime: restores the session synchronously (before the
    /// first render), sets up the terminal, and bridges the bus to the inbox.
    pub fn new(api: ApiClient, sessions: SessionStore) -> Result<Self> {
        // Panic hook goes in before the alternate screen.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let session = sessions.load();
        let state = AppState::new(session);

        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let bus = Bus::new();
        let mut subscription = bus.subscribe();
        let notice_tx = inbox_tx.clone();
        tokio::spawn(async move {
            // Ends (and unsubscribes) when the bus or the inbox goes away.
            while let Some(notice) = subscription.recv().await {
                if notice_tx.send(UiEvent::Notice(notice)).is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            terminal,
            state,
            api: Arc::new(api),
            sessions,
            bus,
            inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        let startup = update::startup_effects(&mut self.state);
        self.execute_effects(startup);

        let mut dirty = true;

        while !self.state.should_quit {
            let events = self.collect_events()?;

            for event in events {
                // Renders are batched to tick cadence.
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Drain the inbox: async results and bus notices.
        while let Ok(event) = self.inbox_rx.try_recv() {
            events.push(event);
        }

        // Block on terminal input until the next tick is due (keeps input
        // responsive while capping idle CPU at tick cadence).
        let until_tick = TICK_INTERVAL.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            until_tick
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= TICK_INTERVAL {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async effect; its resulting event arrives on the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce(Arc<ApiClient>) -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f(api).await);
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        tracing::debug!(effect = effect.kind(), "executing effect");
        match effect {
            // Session persistence is synchronous file I/O; a failure leaves
            // the in-memory session authoritative.
            UiEffect::PersistSession(user) => {
                if let Err(err) = self.sessions.save(&user) {
                    tracing::warn!(%err, "failed to persist session");
                }
            }
            UiEffect::ClearSession => {
                if let Err(err) = self.sessions.clear() {
                    tracing::warn!(%err, "failed to clear session");
                }
            }

            UiEffect::PublishTicketBooked { event_id } => {
                self.bus.publish(&Notice::TicketBooked { event_id });
            }

            UiEffect::Login(form) => {
                self.spawn_effect(move |api| handlers::login(api, form));
            }
            UiEffect::Signup(form) => {
                self.spawn_effect(move |api| handlers::signup(api, form));
            }
            UiEffect::FetchEvents => {
                self.spawn_effect(handlers::fetch_events);
            }
            UiEffect::FetchEvent { id } => {
                self.spawn_effect(move |api| handlers::fetch_event(api, id));
            }
            UiEffect::CreateEvent { payload } => {
                self.spawn_effect(move |api| handlers::create_event(api, payload));
            }
            UiEffect::UpdateEvent { id, payload } => {
                self.spawn_effect(move |api| handlers::update_event(api, id, payload));
            }
            UiEffect::DeleteEvent { id } => {
                self.spawn_effect(move |api| handlers::delete_event(api, id));
            }
            UiEffect::BookTicket { user_id, event_id } => {
                self.spawn_effect(move |api| handlers::book_ticket(api, user_id, event_id));
            }
            UiEffect::FetchTickets { user_id } => {
                self.spawn_effect(move |api| handlers::fetch_tickets(api, user_id));
            }
            UiEffect::FetchCreatedEvents { user_id } => {
                self.spawn_effect(move |api| handlers::fetch_created_events(api, user_id));
            }
            UiEffect::CancelTicket { id } => {
                self.spawn_effect(move |api| handlers::cancel_ticket(api, id));
            }
            UiEffect::FetchTicketCount { user_id } => {
                self.spawn_effect(move |api| handlers::fetch_ticket_count(api, user_id));
            }
        }
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
