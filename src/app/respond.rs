use std::sync::{Arc, mpsc};
use std::thread;

use anyhow::{Result, bail};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;

use crate::domain::Form;
use crate::presentation::{self, RespondContext};
use crate::store::{StoreError, SubmissionStore};
use crate::submit::{FillState, SubmissionCollector, SubmissionPayload};

use super::input::{RespondCommand, classify_respond};
use super::options::UiOptions;
use super::status::{RESPOND_READY, StatusLine};
use super::terminal::TerminalGuard;

pub const RESPOND_HELP: &str =
    "Tab/↑/↓ -> move between fields • ←/→ -> pick option • Space -> toggle • \
    Ctrl+S -> submit • Ctrl+Q -> quit";

/// Interactive filling session for one saved form. Submissions run on
/// a worker thread, mirroring how the builder saves.
pub struct RespondApp {
    form: Form,
    fill: FillState,
    collector: SubmissionCollector,
    store: Arc<dyn SubmissionStore + Send + Sync>,
    pending_submit: Option<mpsc::Receiver<Result<(), StoreError>>>,
    options: UiOptions,
    status: StatusLine,
    should_quit: bool,
}

impl RespondApp {
    /// Fails when `form` has never been saved; responses need a form id
    /// to land under.
    pub fn new(
        form: Form,
        store: Arc<dyn SubmissionStore + Send + Sync>,
        options: UiOptions,
    ) -> Result<Self> {
        let Some(form_id) = form.id.clone() else {
            bail!("form must be saved before it can collect responses");
        };
        let fill = FillState::new(&form);
        Ok(Self {
            form,
            fill,
            collector: SubmissionCollector::new(form_id),
            store,
            pending_submit: None,
            options,
            status: StatusLine::new(RESPOND_READY),
            should_quit: false,
        })
    }

    /// Runs the session until the user quits; returns whether a
    /// response was recorded.
    pub fn run(mut self) -> Result<bool> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            self.tick();
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(width, height) => {
                    terminal.resize(Rect::new(0, 0, width, height))?;
                }
                Event::Mouse(_) => {}
                Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }
        Ok(self.collector.succeeded())
    }

    pub(crate) fn tick(&mut self) {
        self.poll_pending_submit();
        if self.collector.expire_submit(self.options.call_timeout) {
            self.pending_submit = None;
        }
        self.collector.prune_notice();
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.collector.succeeded() {
            // Success page: any of the usual exits closes it.
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')
            ) || matches!(classify_respond(&key), RespondCommand::Quit)
            {
                self.should_quit = true;
            }
            return;
        }
        match classify_respond(&key) {
            RespondCommand::NextField => self.fill.focus_next(),
            RespondCommand::PrevField => self.fill.focus_prev(),
            RespondCommand::Submit => self.on_submit(),
            RespondCommand::Quit => self.should_quit = true,
            RespondCommand::ResetStatus => {
                self.collector.dismiss_notice();
                self.status.ready();
            }
            RespondCommand::Edit(key) => self.on_edit(key),
            RespondCommand::None => {}
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let context = RespondContext {
            form: &self.form,
            fill: &self.fill,
            collector: &self.collector,
            status_message: self.status.message(),
            help: self.options.show_help.then_some(RESPOND_HELP),
        };
        presentation::draw_respond(frame, &context);
    }

    fn poll_pending_submit(&mut self) {
        let Some(receiver) = &self.pending_submit else {
            return;
        };
        match receiver.try_recv() {
            Ok(outcome) => {
                self.pending_submit = None;
                let _ = self.collector.complete_submit(outcome);
                self.status.ready();
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.pending_submit = None;
                let _ = self
                    .collector
                    .complete_submit(Err(StoreError::Rejected("store worker disappeared".into())));
                self.status.ready();
            }
        }
    }

    fn on_submit(&mut self) {
        if self.collector.begin_submit().is_err() {
            return;
        }
        let payload = SubmissionPayload::collect(self.fill.entries());
        let form_id = self.collector.form_id().to_string();
        let (tx, rx) = mpsc::channel();
        let store = Arc::clone(&self.store);
        thread::spawn(move || {
            let _ = tx.send(store.submit(&form_id, &payload));
        });
        self.pending_submit = Some(rx);
        self.status.set_raw("Submitting...");
    }

    fn on_edit(&mut self, key: KeyEvent) {
        if let Some(field) = self.fill.focused_mut() {
            field.handle_key(&key);
        }
    }
}

#[cfg(test)]
impl RespondApp {
    pub(crate) fn collector(&self) -> &SubmissionCollector {
        &self.collector
    }

    pub(crate) fn fill(&self) -> &FillState {
        &self.fill
    }

    pub(crate) fn wants_quit(&self) -> bool {
        self.should_quit
    }
}
