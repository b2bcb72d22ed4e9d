use crate::app::AppAction;
use crate::context::use_context;
use crate::error::HookError;
use crate::event_loop::ActionSender;
use std::fmt;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Handle to a running periodic dispatcher.
///
/// The timer task only enqueues actions; the event loop that owns the
/// receiving end dispatches them on its own thread. Dropping the guard
/// cancels the task.
#[must_use = "dropping a TimerGuard cancels the timer immediately"]
pub struct TimerGuard {
    task: JoinHandle<()>,
    period: Duration,
}

impl TimerGuard {
    /// Enqueue a clone of `action` every `period`, starting one period
    /// from now.
    pub fn start<A>(
        sender: ActionSender<A>,
        action: A,
        period: Duration,
    ) -> Result<Self, HookError>
    where
        A: Clone + fmt::Debug + Send + 'static,
    {
        if period.is_zero() {
            return Err(HookError::ZeroPeriod);
        }
        let runtime = tokio::runtime::Handle::try_current()?;

        let task = runtime.spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if sender.send(action.clone()).is_err() {
                    tracing::debug!(?action, "event loop closed, stopping timer");
                    break;
                }
            }
        });
        tracing::info!(?period, "timer started");

        Ok(Self { task, period })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Stop the timer. Ticks already enqueued are still delivered.
    pub fn cancel(&self) {
        if !self.task.is_finished() {
            self.task.abort();
            tracing::info!(period = ?self.period, "timer cancelled");
        }
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Start a `TIME` ticker against the nearest provided [`ActionSender`].
pub fn use_timer(period: Duration) -> Result<TimerGuard, HookError> {
    let sender = use_context::<ActionSender<AppAction>>()?;
    TimerGuard::start(sender, AppAction::Time, period)
}
