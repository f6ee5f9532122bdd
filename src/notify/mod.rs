//! Notification facade over a modal/toast library.
//!
//! Three notice shapes (toast, success, error) plus one interactive dialog.
//! The provider specs serialize to the option names the browser-side modal
//! library expects, so a JS bridge can forward them as-is.

pub mod lifecycle;
pub mod provider;
pub mod toast;

use std::future::Future;
use std::time::Duration;

use serde::Serialize;

pub use lifecycle::{DialogLifecycle, NoHooks};
pub use provider::DialogProvider;
pub use toast::{PointerEvent, ToastCountdown};

pub const DEFAULT_TOAST_ICON: Icon = Icon::Success;
pub const DEFAULT_TOAST_POSITION: Position = Position::TopEnd;
pub const TOAST_TIMER: Duration = Duration::from_millis(3000);
pub const DEFAULT_SHOW_CONFIRM_BUTTON: bool = true;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Success,
    Error,
    Warning,
    Info,
    Question,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    Top,
    TopStart,
    TopEnd,
    Center,
    CenterStart,
    CenterEnd,
    Bottom,
    BottomStart,
    BottomEnd,
}

/// Why a dialog closed without the confirm button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Cancel,
    Backdrop,
    Close,
    Esc,
    Timer,
}

// ============================================================================
// Caller-facing options
// ============================================================================

#[derive(Debug, Clone)]
pub struct ToastOptions {
    pub title: String,
    pub icon: Icon,
    pub position: Position,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            icon: DEFAULT_TOAST_ICON,
            position: DEFAULT_TOAST_POSITION,
        }
    }
}

impl ToastOptions {
    pub fn titled(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }
}

/// Options for the terminal success/error notices.
#[derive(Debug, Clone, Default)]
pub struct NoticeOptions {
    pub title: String,
    pub text: String,
    pub footer: String,
}

impl NoticeOptions {
    pub fn titled(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

/// One interactive dialog invocation.
///
/// `on_result` is consumed by [`NotificationFacade::custom`], so it runs at
/// most once per request.
pub struct DialogRequest<L, F> {
    pub title: String,
    pub body_markup: String,
    pub icon: Option<Icon>,
    pub show_confirm_button: bool,
    pub lifecycle: L,
    pub on_result: F,
}

impl<F> DialogRequest<NoHooks, F> {
    pub fn new(title: impl Into<String>, body_markup: impl Into<String>, on_result: F) -> Self {
        Self {
            title: title.into(),
            body_markup: body_markup.into(),
            icon: None,
            show_confirm_button: DEFAULT_SHOW_CONFIRM_BUTTON,
            lifecycle: NoHooks,
            on_result,
        }
    }
}

impl<L, F> DialogRequest<L, F> {
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn show_confirm_button(mut self, show: bool) -> Self {
        self.show_confirm_button = show;
        self
    }

    pub fn with_lifecycle<M: DialogLifecycle>(self, lifecycle: M) -> DialogRequest<M, F> {
        DialogRequest {
            title: self.title,
            body_markup: self.body_markup,
            icon: self.icon,
            show_confirm_button: self.show_confirm_button,
            lifecycle,
            on_result: self.on_result,
        }
    }
}

/// Normalized result of a dialog: cancelled, or confirmed with a non-empty payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Cancelled,
    Confirmed(String),
}

impl DialogOutcome {
    /// Cancel wins over any captured value; an empty payload counts as no selection.
    pub fn from_response(response: ModalResponse) -> Self {
        if response.dismiss == Some(DismissReason::Cancel) || response.value.is_empty() {
            DialogOutcome::Cancelled
        } else {
            DialogOutcome::Confirmed(response.value)
        }
    }

    pub fn payload(&self) -> Option<&str> {
        match self {
            DialogOutcome::Confirmed(payload) => Some(payload),
            DialogOutcome::Cancelled => None,
        }
    }
}

// ============================================================================
// Provider-facing specs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalSpec {
    pub title: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    pub backdrop: bool,
    pub focus_confirm: bool,
    pub show_cancel_button: bool,
    pub show_confirm_button: bool,
}

/// What the provider reports when a dialog closes.
///
/// `value` holds the dialog's input values as captured at close time
/// (form-encoded), empty when there was nothing to capture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalResponse {
    pub dismiss: Option<DismissReason>,
    pub value: String,
}

impl ModalResponse {
    pub fn confirmed(value: impl Into<String>) -> Self {
        Self { dismiss: None, value: value.into() }
    }

    pub fn dismissed(reason: DismissReason) -> Self {
        Self { dismiss: Some(reason), value: String::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastSpec {
    pub toast: bool,
    pub title: String,
    pub icon: Icon,
    pub position: Position,
    pub show_confirm_button: bool,
    /// Milliseconds.
    pub timer: u64,
    pub timer_progress_bar: bool,
    pub pause_on_hover: bool,
}

impl ToastSpec {
    pub fn countdown(&self, now: std::time::Instant) -> ToastCountdown {
        ToastCountdown::start(Duration::from_millis(self.timer), now)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoticeSpec {
    pub icon: Icon,
    pub title: String,
    pub text: String,
    pub footer: String,
}

// ============================================================================
// Facade
// ============================================================================

pub struct NotificationFacade<P> {
    provider: P,
}

impl<P: DialogProvider> NotificationFacade<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Self-dismissing notice; pauses while hovered.
    pub fn toast(&self, options: ToastOptions) {
        let spec = ToastSpec {
            toast: true,
            title: options.title,
            icon: options.icon,
            position: options.position,
            show_confirm_button: false,
            timer: TOAST_TIMER.as_millis() as u64,
            timer_progress_bar: true,
            pause_on_hover: true,
        };
        log::debug!("toast: {}", spec.title);
        self.provider.toast(&spec);
    }

    pub fn success(&self, options: NoticeOptions) {
        self.notice(Icon::Success, options);
    }

    pub fn error(&self, options: NoticeOptions) {
        self.notice(Icon::Error, options);
    }

    fn notice(&self, icon: Icon, options: NoticeOptions) {
        let spec = NoticeSpec {
            icon,
            title: options.title,
            text: options.text,
            footer: options.footer,
        };
        log::debug!("{:?} notice: {}", icon, spec.title);
        self.provider.notice(&spec);
    }

    /// Open an interactive dialog and hand its normalized outcome to `on_result`.
    ///
    /// A cancel button is always shown. Resolves with whatever `on_result` resolves with.
    pub async fn custom<L, F, Fut>(&self, request: DialogRequest<L, F>) -> Fut::Output
    where
        L: DialogLifecycle,
        F: FnOnce(DialogOutcome) -> Fut,
        Fut: Future,
    {
        let DialogRequest {
            title,
            body_markup,
            icon,
            show_confirm_button,
            mut lifecycle,
            on_result,
        } = request;

        let modal = ModalSpec {
            title,
            html: body_markup,
            icon,
            backdrop: false,
            focus_confirm: false,
            show_cancel_button: true,
            show_confirm_button,
        };

        let response = self.provider.fire(&modal, &mut lifecycle).await;
        log::debug!("dialog '{}' closed: {:?}", modal.title, response.dismiss);
        on_result(DialogOutcome::from_response(response)).await
    }
}
