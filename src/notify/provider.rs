use std::future::Future;

use super::lifecycle::DialogLifecycle;
use super::{ModalResponse, ModalSpec, NoticeSpec, ToastSpec};

/// The modal/toast library the facade drives.
///
/// Implementations own rendering and user interaction. `fire` must call
/// `hooks.will_open()` before the dialog accepts input and `hooks.did_open()`
/// once it is on screen, then resolve when the user closes it.
pub trait DialogProvider {
    fn fire(
        &self,
        modal: &ModalSpec,
        hooks: &mut dyn DialogLifecycle,
    ) -> impl Future<Output = ModalResponse>;

    /// Fire-and-forget, self-dismissing notice.
    fn toast(&self, toast: &ToastSpec);

    /// Terminal notice the user dismisses.
    fn notice(&self, notice: &NoticeSpec);
}
