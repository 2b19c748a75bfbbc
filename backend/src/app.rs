use log::error;

use crate::error::BackendError;
use crate::system::IoEvents;

/// What a lifecycle callback wants the runtime loop to do next.
/// `Success` and `Failure` both end the run; they only differ in the
/// process exit status they map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppResult {
    Continue,
    Success,
    Failure,
}

impl AppResult {
    pub fn exit_code(self) -> i32 {
        match self {
            AppResult::Failure => 1,
            _ => 0,
        }
    }
}

/// Something events can be pulled from once per loop pass. `System`
/// implements this over its SDL event pump; tests script their own.
pub trait EventSource {
    fn drain_events(&mut self) -> Vec<IoEvents>;
}

/// The four lifecycle entry points, invoked by [`run`] in a fixed order:
/// one `init`, then alternating `event` and `iterate` calls until one of
/// them ends the run, then exactly one `quit`.
///
/// The context created by `init` replaces the process-wide handles a
/// C-style SDL program would use: it is owned by the loop and handed to
/// every callback.
pub trait App {
    type Ctx: EventSource;

    /// Create the long-lived context (window, renderer, ...). Any error
    /// here is fatal: the loop never starts.
    fn init(&mut self) -> Result<Self::Ctx, BackendError>;

    /// Inspect one incoming event.
    fn event(&mut self, ctx: &mut Self::Ctx, event: &IoEvents) -> AppResult;

    /// Produce one frame.
    fn iterate(&mut self, ctx: &mut Self::Ctx) -> AppResult;

    /// Called once with the final result. Resource release happens when
    /// the context is dropped, so the default does nothing.
    fn quit(&mut self, _result: AppResult) {}
}

/// Drives an [`App`] to completion and returns its final result.
pub fn run<A: App>(app: &mut A) -> AppResult {
    let mut ctx = match app.init() {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("initialization failed: {e}");
            app.quit(AppResult::Failure);
            return AppResult::Failure;
        }
    };

    let result = 'main: loop {
        for event in ctx.drain_events() {
            match app.event(&mut ctx, &event) {
                AppResult::Continue => {}
                done => break 'main done,
            }
        }
        match app.iterate(&mut ctx) {
            AppResult::Continue => {}
            done => break 'main done,
        }
    };

    app.quit(result);
    result
}
