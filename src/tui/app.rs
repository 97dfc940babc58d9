use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::client::{ReportKind, ReportOpener, SaveError, ValuationService, report_url};
use crate::controller::{Notification, NotificationQueue, Tab, TabState};
use crate::model::SavedValuation;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{
    OwnerDetailsState, PropertyDetailsState, draw_owner_details, draw_property_details,
};
use super::widgets::{StatusBarContext, draw_status_bar, draw_tabs, draw_toast};

/// How often async results and notification expiries are applied.
const TICK: Duration = Duration::from_millis(100);

/// Shown when a report is requested before a successful save.
pub const SAVE_FIRST_MESSAGE: &str = "Save a valuation first";

type SaveResult = Result<SavedValuation, SaveError>;

/// Top-level application state.
///
/// Owns the screens, the notification queue, and the resources that actions
/// need: the valuation service and the report opener. Save requests run on
/// spawned tasks and report back over a channel drained by [`tick`](Self::tick),
/// so every state change happens on the UI task.
pub struct App<S, O> {
    tabs: TabState,
    tabs_focused: bool,
    owner: OwnerDetailsState,
    property: PropertyDetailsState,
    notifications: NotificationQueue,
    service: Arc<S>,
    opener: O,
    api_base: String,
    toast_duration: Duration,
    results_tx: UnboundedSender<SaveResult>,
    results_rx: UnboundedReceiver<SaveResult>,
    should_quit: bool,
}

impl<S: ValuationService, O: ReportOpener> App<S, O> {
    /// Creates an `App` on the owner details tab with an empty entry.
    pub fn new(
        service: S,
        opener: O,
        api_base: impl Into<String>,
        toast_duration: Duration,
    ) -> Self {
        let (results_tx, results_rx) = unbounded_channel();
        Self {
            tabs: TabState::new(),
            tabs_focused: false,
            owner: OwnerDetailsState::new(),
            property: PropertyDetailsState,
            notifications: NotificationQueue::new(),
            service: Arc::new(service),
            opener,
            api_base: api_base.into(),
            toast_duration,
            results_tx,
            results_rx,
            should_quit: false,
        }
    }

    /// Main event loop: draw → wait for a key or tick → apply → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub async fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(TICK);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            tokio::select! {
                event = events.next() => match event {
                    Some(Ok(Event::Key(key))) => self.handle_key(key),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },
                _ = ticker.tick() => self.tick(),
            }
        }
        Ok(())
    }

    /// Renders tabs, the active screen, the status bar, and the toast.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let [tabs_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        draw_tabs(&self.tabs, self.tabs_focused, frame, tabs_area);

        match self.tabs.active() {
            Tab::OwnerDetails => {
                draw_owner_details(&self.owner, !self.tabs_focused, frame, body_area)
            }
            Tab::PropertyDetails => draw_property_details(frame, body_area),
        }

        let controller = self.owner.controller();
        let ctx = StatusBarContext {
            api_base: self.api_base.clone(),
            mode: controller.mode(),
            state: controller.state().clone(),
            global_error: controller.global_error().map(str::to_string),
        };
        draw_status_bar(&ctx, frame, status_area);

        draw_toast(self.notifications.current(), frame, area);
    }

    /// Handles a key event: global keys first, then the tab bar or the
    /// active screen, depending on focus.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('x') => {
                    self.notifications.dismiss();
                    return;
                }
                _ => {}
            }
        }

        if self.tabs_focused {
            self.handle_tab_bar_key(key);
            return;
        }

        let action = match self.tabs.active() {
            Tab::OwnerDetails => self.owner.handle_key(key),
            Tab::PropertyDetails => self.property.handle_key(key),
        };
        self.apply(action);
    }

    fn handle_tab_bar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.tabs.prev(),
            KeyCode::Right => self.tabs.next(),
            KeyCode::Char(ch @ '1'..='9') => {
                let index = ch as usize - '1' as usize;
                self.tabs.select_index(index);
            }
            KeyCode::Down | KeyCode::Enter | KeyCode::Tab => self.tabs_focused = false,
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            _ => return,
        }
        debug!(tab = ?self.tabs.active(), focused = self.tabs_focused, "tab bar key");
    }

    /// Applies an [`Action`] returned by a screen.
    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Submit => self.submit(),
            Action::OpenReport(kind) => self.open_report(kind),
            Action::NewEntry => {
                if !self.owner.start_new_entry() {
                    debug!("new entry ignored while saving");
                }
            }
            Action::FocusTabs => self.tabs_focused = true,
        }
    }

    /// Starts a save on a spawned task. At most one save is in flight because
    /// `begin_submit` refuses while saving.
    fn submit(&mut self) {
        let Some(payload) = self.owner.controller_mut().begin_submit() else {
            return;
        };
        let service = Arc::clone(&self.service);
        let tx = self.results_tx.clone();
        tokio::spawn(async move {
            let result = service.save(&payload).await;
            // The receiver is gone only if the app was torn down mid-save.
            tx.send(result).ok();
        });
    }

    fn open_report(&mut self, kind: ReportKind) {
        let Some(id) = self.owner.controller().report_id() else {
            info!(report = kind.label(), "report requested before a save");
            self.notify(Notification::error(SAVE_FIRST_MESSAGE));
            return;
        };
        let url = report_url(&self.api_base, id, kind);
        match self.opener.open(&url) {
            Ok(()) => info!(%url, "opened report"),
            Err(e) => {
                warn!(error = %e, "could not open report");
                self.notify(Notification::error("Could not open report"));
            }
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.notify(notification, self.toast_duration);
    }

    /// Applies finished saves and expired notifications.
    pub fn tick(&mut self) {
        while let Ok(result) = self.results_rx.try_recv() {
            if let Some(notification) = self.owner.controller_mut().finish_submit(result) {
                self.notify(notification);
            }
        }
        self.notifications.process_expired();
    }

    /// Returns the tab state.
    pub fn tabs(&self) -> &TabState {
        &self.tabs
    }

    /// Returns `true` if the tab bar has keyboard focus.
    pub fn tabs_focused(&self) -> bool {
        self.tabs_focused
    }

    /// Returns the owner details screen state.
    pub fn owner(&self) -> &OwnerDetailsState {
        &self.owner
    }

    /// Returns the live notification, if any.
    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    /// Returns the report opener.
    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
