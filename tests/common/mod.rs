//! Shared test doubles for the notification facade and the availability workflow.
//!
//! Every double writes into one `EventLog`, so tests can assert on the order
//! in which the dialog, the date picker and the client were driven.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use roomprompt::availability::{
    AvailabilityClient, AvailabilityQuery, AvailabilityResult, DateRangeOptions,
    DateRangeProvider,
};
use roomprompt::errors::AppError;
use roomprompt::notify::{
    DialogLifecycle, DialogProvider, ModalResponse, ModalSpec, NoticeSpec, ToastSpec,
};

// ============================================================================
// EVENTS
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    WillOpen,
    Shown(ModalSpec),
    DidOpen,
    Toast(ToastSpec),
    Notice(NoticeSpec),
    Attached { container: String, options: DateRangeOptions },
    InputEnabled { input: String, enabled: bool },
    Search(AvailabilityQuery),
}

#[derive(Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<Event>>>);

impl EventLog {
    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn position(&self, pred: impl Fn(&Event) -> bool) -> Option<usize> {
        self.0.borrow().iter().position(pred)
    }

    pub fn dialogs(&self) -> Vec<ModalSpec> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Shown(spec) => Some(spec),
                _ => None,
            })
            .collect()
    }

    pub fn notices(&self) -> Vec<NoticeSpec> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Notice(spec) => Some(spec),
                _ => None,
            })
            .collect()
    }

    pub fn searches(&self) -> Vec<AvailabilityQuery> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Search(q) => Some(q),
                _ => None,
            })
            .collect()
    }
}

// ============================================================================
// DOUBLES
// ============================================================================

/// Dialog provider that answers each `fire` with the next scripted response.
/// Runs out to a plain close (no payload).
pub struct ScriptedDialogs {
    log: EventLog,
    responses: RefCell<VecDeque<ModalResponse>>,
}

impl ScriptedDialogs {
    pub fn new(log: &EventLog, responses: Vec<ModalResponse>) -> Self {
        Self {
            log: log.clone(),
            responses: RefCell::new(responses.into()),
        }
    }
}

impl DialogProvider for ScriptedDialogs {
    async fn fire(&self, modal: &ModalSpec, hooks: &mut dyn DialogLifecycle) -> ModalResponse {
        self.log.push(Event::WillOpen);
        hooks.will_open();
        self.log.push(Event::Shown(modal.clone()));
        self.log.push(Event::DidOpen);
        hooks.did_open();
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| ModalResponse::dismissed(roomprompt::notify::DismissReason::Close))
    }

    fn toast(&self, toast: &ToastSpec) {
        self.log.push(Event::Toast(toast.clone()));
    }

    fn notice(&self, notice: &NoticeSpec) {
        self.log.push(Event::Notice(notice.clone()));
    }
}

pub struct RecordingDates {
    log: EventLog,
}

impl RecordingDates {
    pub fn new(log: &EventLog) -> Self {
        Self { log: log.clone() }
    }
}

impl DateRangeProvider for RecordingDates {
    fn attach(&self, container_id: &str, options: &DateRangeOptions) {
        self.log.push(Event::Attached {
            container: container_id.to_string(),
            options: options.clone(),
        });
    }

    fn set_input_enabled(&self, input_id: &str, enabled: bool) {
        self.log.push(Event::InputEnabled {
            input: input_id.to_string(),
            enabled,
        });
    }
}

/// Client that records each query and answers with a fixed result.
pub struct StubClient {
    log: EventLog,
    reply: AvailabilityResult,
}

impl StubClient {
    pub fn new(log: &EventLog, reply: AvailabilityResult) -> Self {
        Self { log: log.clone(), reply }
    }
}

impl AvailabilityClient for StubClient {
    async fn search(&self, query: &AvailabilityQuery) -> Result<AvailabilityResult, AppError> {
        self.log.push(Event::Search(query.clone()));
        Ok(self.reply.clone())
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

pub const ROOM_ID: &str = "12";
pub const CSRF_TOKEN: &str = "test-csrf-token";
pub const START: &str = "2024-06-01";
pub const END: &str = "2024-06-05";

pub fn dates_payload(start: &str, end: &str) -> String {
    serde_urlencoded::to_string([("start_modal", start), ("end_modal", end)]).expect("encode payload")
}

pub fn available_reply() -> AvailabilityResult {
    serde_json::from_str(r#"{"ok":true,"room_id":"12","start_date":"2024-06-01","end_date":"2024-06-05"}"#)
        .expect("parse reply")
}

pub fn unavailable_reply() -> AvailabilityResult {
    serde_json::from_str(r#"{"ok":false}"#).expect("parse reply")
}
