/// Hooks a caller attaches to a dialog's open sequence.
///
/// `will_open` runs before the dialog becomes interactive, `did_open` once it
/// is fully rendered. Both default to doing nothing, so callers that don't
/// care pass [`NoHooks`] instead of checking for presence at every call site.
pub trait DialogLifecycle {
    fn will_open(&mut self) {}

    fn did_open(&mut self) {}
}

/// Lifecycle with no hooks.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl DialogLifecycle for NoHooks {}
