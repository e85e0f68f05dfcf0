use crossbeam_channel::Receiver;
use std::time::{Duration, Instant};

/// Produces the periodic signal that drives the countdown.
///
/// Every call hands out a fresh subscription. Dropping the receiver is the
/// only way to cancel one.
pub trait TickSource {
    fn subscribe(&mut self, period: Duration) -> Receiver<Instant>;
}

pub struct IntervalTicks;

impl TickSource for IntervalTicks {
    fn subscribe(&mut self, period: Duration) -> Receiver<Instant> {
        crossbeam_channel::tick(period)
    }
}

pub(crate) struct TimerSubscription {
    pub(crate) generation: u64,
    pub(crate) ticks: Receiver<Instant>,
}
