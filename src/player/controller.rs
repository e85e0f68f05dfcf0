use super::{
    FullscreenPort, FullscreenState, Notification, Notifier, PlaybackState, PlaybackStatus,
    TickOutcome, TickSource, timer::TimerSubscription,
};
use crate::domain::ExerciseStep;
use crossbeam_channel::Receiver;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Drives a one-exercise-at-a-time countdown through a fixed sequence.
///
/// The controller owns at most one timer subscription. Any change to the
/// running flag, the current index or the sequence drops the old
/// subscription before a new one is armed, and each subscription is tagged
/// with a generation so late ticks from a cancelled one are ignored.
pub struct WorkoutPlaybackController {
    state: PlaybackState,
    fullscreen: FullscreenState,

    ticks: Box<dyn TickSource>,
    tick_period: Duration,
    timer: Option<TimerSubscription>,
    generation: u64,

    display: Box<dyn FullscreenPort>,
    notifier: Box<dyn Notifier>,
}

impl WorkoutPlaybackController {
    pub fn new(
        ticks: Box<dyn TickSource>,
        tick_period: Duration,
        display: Box<dyn FullscreenPort>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        WorkoutPlaybackController {
            state: PlaybackState::default(),
            fullscreen: FullscreenState::default(),
            ticks,
            tick_period,
            timer: None,
            generation: 0,
            display,
            notifier,
        }
    }
}

// ================
//    OPERATIONS
// ================
impl WorkoutPlaybackController {
    pub fn load_sequence(&mut self, steps: Vec<ExerciseStep>) {
        info!(steps = steps.len(), "loading exercise sequence");
        self.state = PlaybackState::with_sequence(steps);
        self.rearm_timer();
    }

    /// Ends the session and forgets the sequence.
    pub fn clear(&mut self) {
        self.state = PlaybackState::default();
        self.rearm_timer();
    }

    pub fn play(&mut self) {
        if self.state.is_empty() {
            return;
        }

        match self.state.has_started {
            false => {
                self.state.has_started = true;
                self.state.is_running = true;
            }
            true => self.state.is_running = !self.state.is_running,
        }

        debug!(running = self.state.is_running, "play toggled");
        self.rearm_timer();
    }

    /// One elapsed second. Reaching zero goes through the same transition
    /// as moving to the next exercise.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_counting() {
            return TickOutcome::Idle;
        }

        self.state.time_remaining -= 1;
        self.state.seconds_worked += 1;

        if self.state.time_remaining > 0 {
            return TickOutcome::Counted;
        }
        self.state.finished_steps.insert(self.state.current_index);

        let finished = self.current_name();
        match self.advance() {
            true => {
                self.notifier.notify(Notification::ExerciseComplete {
                    finished,
                    next: self.current_name(),
                });
                TickOutcome::Advanced
            }
            false => {
                info!(seconds = self.state.seconds_worked, "sequence finished");
                // Nothing left to count down
                self.sync_timer();
                TickOutcome::Finished
            }
        }
    }

    /// Auto-advance. Once the session has started the new exercise begins
    /// counting immediately. Returns false at the last step.
    pub fn advance(&mut self) -> bool {
        if !self.step_forward() {
            return false;
        }

        if self.state.has_started {
            self.state.is_running = true;
        }
        self.rearm_timer();
        true
    }

    /// Manual skip. Never starts a paused timer.
    pub fn next(&mut self) {
        if self.step_forward() {
            self.rearm_timer();
        }
    }

    /// Manual step back. Never starts a paused timer.
    pub fn previous(&mut self) {
        if self.state.is_empty() || self.state.current_index == 0 {
            return;
        }

        self.state.seek_to(self.state.current_index - 1);
        self.rearm_timer();
    }

    /// Extends the current countdown, past the nominal duration if need be.
    pub fn add_time(&mut self, delta_secs: u32) {
        if self.state.is_empty() {
            return;
        }

        self.state.time_remaining = self.state.time_remaining.saturating_add(delta_secs);
        self.sync_timer();
    }

    /// Back to the freshly loaded state.
    pub fn stop(&mut self) {
        self.state.rewind();
        self.rearm_timer();
    }

    fn step_forward(&mut self) -> bool {
        if self.state.is_empty() || self.state.is_last() {
            return false;
        }

        self.state.seek_to(self.state.current_index + 1);
        true
    }

    fn current_name(&self) -> String {
        self.state
            .current_step()
            .map(|s| s.get_name().to_string())
            .unwrap_or_default()
    }
}

// ================
//    FULLSCREEN
// ================
impl WorkoutPlaybackController {
    pub fn toggle_fullscreen(&mut self) {
        let target = !self.fullscreen.confirmed;
        self.request_fullscreen(target);
    }

    pub fn exit_fullscreen(&mut self) {
        if self.fullscreen.confirmed {
            self.request_fullscreen(false);
        }
    }

    fn request_fullscreen(&mut self, target: bool) {
        self.fullscreen.requested = target;

        let result = match target {
            true => self.display.request_enter(),
            false => self.display.request_exit(),
        };

        if let Err(e) = result {
            warn!(error = %e, target, "fullscreen request rejected");
            self.fullscreen.requested = self.fullscreen.confirmed;
        }
    }

    /// Platform confirmation of the actual presentation state.
    pub fn on_fullscreen_changed(&mut self, active: bool) {
        debug!(active, "fullscreen confirmed");
        self.fullscreen.confirmed = active;
        self.fullscreen.requested = active;
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.confirmed
    }

    pub fn fullscreen_state(&self) -> FullscreenState {
        self.fullscreen
    }
}

// ===========
//    TIMER
// ===========
impl WorkoutPlaybackController {
    /// Current subscription for an event loop to wait on.
    pub fn timer_handle(&self) -> Option<(u64, Receiver<Instant>)> {
        self.timer
            .as_ref()
            .map(|t| (t.generation, t.ticks.clone()))
    }

    /// Tick received through [`Self::timer_handle`]. Ticks from a
    /// subscription that has since been cancelled are dropped.
    pub fn on_timer_tick(&mut self, generation: u64) -> TickOutcome {
        match &self.timer {
            Some(t) if t.generation == generation => self.tick(),
            _ => TickOutcome::Idle,
        }
    }

    /// Drains whatever ticks are already due without blocking.
    pub fn poll_timer(&mut self) -> Vec<TickOutcome> {
        let mut outcomes = vec![];

        while let Some(timer) = &self.timer {
            if timer.ticks.try_recv().is_err() {
                break;
            }
            outcomes.push(self.tick());
        }
        outcomes
    }

    pub fn has_active_timer(&self) -> bool {
        self.timer.is_some()
    }

    fn cancel_timer(&mut self) {
        if let Some(t) = self.timer.take() {
            debug!(generation = t.generation, "timer cancelled");
        }
    }

    /// Cancel, then arm a fresh subscription if the countdown should run.
    fn rearm_timer(&mut self) {
        self.cancel_timer();
        self.sync_timer();
    }

    /// Keeps a live subscription, arms one if due, drops it if not.
    fn sync_timer(&mut self) {
        match (self.state.is_counting(), self.timer.is_some()) {
            (true, false) => {
                self.generation += 1;
                self.timer = Some(TimerSubscription {
                    generation: self.generation,
                    ticks: self.ticks.subscribe(self.tick_period),
                });
            }
            (false, true) => self.cancel_timer(),
            _ => (),
        }
    }
}

// ===============
//    ACCESSORS
// ===============
impl WorkoutPlaybackController {
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn status(&self) -> PlaybackStatus {
        self.state.status()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn time_remaining(&self) -> u32 {
        self.state.time_remaining
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    pub fn has_started(&self) -> bool {
        self.state.has_started
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn current_step(&self) -> Option<&ExerciseStep> {
        self.state.current_step()
    }

    pub fn upcoming_step(&self) -> Option<&ExerciseStep> {
        self.state.upcoming_step()
    }

    pub fn progress_percent(&self) -> u8 {
        self.state.progress_percent()
    }

    pub fn seconds_worked(&self) -> u64 {
        self.state.seconds_worked
    }

    pub fn steps_finished(&self) -> usize {
        self.state.finished_steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use crossbeam_channel::{Sender, unbounded};
    use std::{cell::RefCell, rc::Rc};

    #[derive(Clone, Default)]
    struct ManualTicks {
        senders: Rc<RefCell<Vec<Sender<Instant>>>>,
    }

    impl ManualTicks {
        fn subscriptions(&self) -> usize {
            self.senders.borrow().len()
        }

        fn fire(&self, subscription: usize) {
            let _ = self.senders.borrow()[subscription].send(Instant::now());
        }

        fn fire_latest(&self) {
            let last = self.subscriptions() - 1;
            self.fire(last);
        }
    }

    impl TickSource for ManualTicks {
        fn subscribe(&mut self, _period: Duration) -> Receiver<Instant> {
            let (tx, rx) = unbounded();
            self.senders.borrow_mut().push(tx);
            rx
        }
    }

    #[derive(Clone, Default)]
    struct FakeDisplay {
        reject: Rc<RefCell<bool>>,
        requests: Rc<RefCell<Vec<bool>>>,
    }

    impl FullscreenPort for FakeDisplay {
        fn request_enter(&mut self) -> anyhow::Result<()> {
            self.requests.borrow_mut().push(true);
            match *self.reject.borrow() {
                true => Err(anyhow!("permission denied")),
                false => Ok(()),
            }
        }

        fn request_exit(&mut self) -> anyhow::Result<()> {
            self.requests.borrow_mut().push(false);
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Notification>>>);

    impl Notifier for Recorder {
        fn notify(&self, notification: Notification) {
            self.0.borrow_mut().push(notification);
        }
    }

    struct Harness {
        ctl: WorkoutPlaybackController,
        ticks: ManualTicks,
        display: FakeDisplay,
        notes: Recorder,
    }

    fn harness() -> Harness {
        let ticks = ManualTicks::default();
        let display = FakeDisplay::default();
        let notes = Recorder::default();
        let ctl = WorkoutPlaybackController::new(
            Box::new(ticks.clone()),
            Duration::from_secs(1),
            Box::new(display.clone()),
            Box::new(notes.clone()),
        );
        Harness {
            ctl,
            ticks,
            display,
            notes,
        }
    }

    fn steps(durations: &[Option<i64>]) -> Vec<ExerciseStep> {
        durations
            .iter()
            .enumerate()
            .map(|(i, d)| ExerciseStep::new(format!("step {i}"), *d).with_id(i as i64))
            .collect()
    }

    fn snapshot(ctl: &WorkoutPlaybackController) -> (usize, bool, bool, u32) {
        (
            ctl.current_index(),
            ctl.is_running(),
            ctl.has_started(),
            ctl.time_remaining(),
        )
    }

    #[test]
    fn load_resets_to_first_step() {
        let mut h = harness();
        h.ctl.load_sequence(steps(&[Some(20), Some(30)]));
        assert_eq!(snapshot(&h.ctl), (0, false, false, 20));
        assert_eq!(h.ctl.status(), PlaybackStatus::NotStarted);

        h.ctl.load_sequence(steps(&[None, Some(30)]));
        assert_eq!(h.ctl.time_remaining(), 60);

        h.ctl.load_sequence(steps(&[Some(-3)]));
        assert_eq!(h.ctl.time_remaining(), 60);
    }

    #[test]
    fn reload_mid_session_starts_over() {
        let mut h = harness();
        h.ctl.load_sequence(steps(&[Some(5), Some(10)]));
        h.ctl.play();
        h.ctl.next();

        h.ctl.load_sequence(steps(&[Some(8)]));
        assert_eq!(snapshot(&h.ctl), (0, false, false, 8));
        assert!(!h.ctl.has_active_timer());
    }

    #[test]
    fn play_starts_then_toggles() {
        let mut h = harness();
        h.ctl.load_sequence(steps(&[Some(10)]));

        h.ctl.play();
        assert!(h.ctl.has_started() && h.ctl.is_running());
        h.ctl.play();
        assert!(h.ctl.has_started() && !h.ctl.is_running());
        assert_eq!(h.ctl.status(), PlaybackStatus::Paused);
        h.ctl.play();
        assert!(h.ctl.is_running());
        assert_eq!(h.ctl.status(), PlaybackStatus::Running);
    }

    #[test]
    fn ticking_through_a_step_advances_once() {
        let mut h = harness();
        h.ctl.load_sequence(steps(&[Some(3), Some(4), Some(5)]));
        h.ctl.play();

        let outcomes: Vec<_> = (0..3).map(|_| h.ctl.tick()).collect();
        assert_eq!(
            outcomes,
            vec![
                TickOutcome::Counted,
                TickOutcome::Counted,
                TickOutcome::Advanced
            ]
        );
        assert_eq!(h.ctl.current_index(), 1);
        assert_eq!(h.ctl.time_remaining(), 4);
        assert_eq!(h.notes.0.borrow().len(), 1);
    }

    #[test]
    fn tick_is_idle_while_paused_or_not_started() {
        let mut h = harness();
        h.ctl.load_sequence(steps(&[Some(3)]));
        assert_eq!(h.ctl.tick(), TickOutcome::Idle);

        h.ctl.play();
        h.ctl.play();
        assert_eq!(h.ctl.tick(), TickOutcome::Idle);
        assert_eq!(h.ctl.time_remaining(), 3);
    }

    #[test]
    fn auto_flow_scenario() {
        let mut h = harness();
        h.ctl.load_sequence(steps(&[Some(5), Some(10)]));
        h.ctl.play();
        for _ in 0..5 {
            h.ctl.tick();
        }
        assert_eq!(snapshot(&h.ctl), (1, true, true, 10));

        h.ctl.next();
        assert_eq!(snapshot(&h.ctl), (1, true, true, 10));

        h.ctl.stop();
        assert_eq!(snapshot(&h.ctl), (0, false, false, 5));
    }

    #[test]
    fn last_step_timeout_finishes_without_stopping() {
        let mut h = harness();
        h.ctl.load_sequence(steps(&[Some(2)]));
        h.ctl.play();

        assert_eq!(h.ctl.tick(), TickOutcome::Counted);
        assert_eq!(h.ctl.tick(), TickOutcome::Finished);
        assert_eq!(snapshot(&h.ctl), (0, true, true, 0));
        assert_eq!(h.ctl.status(), PlaybackStatus::Completed);
        assert!(!h.ctl.has_active_timer());
        assert_eq!(h.ctl.tick(), TickOutcome::Idle);
        assert_eq!(h.ctl.seconds_worked(), 2);
    }

    #[test]
    fn next_and_advance_are_noops_on_last_step() {
        let mut h = harness();
        h.ctl.load_sequence(steps(&[Some(5), Some(10)]));
        h.ctl.next();
        h.ctl.add_time(7);
        let before = snapshot(&h.ctl);

        h.ctl.next();
        assert_eq!(snapshot(&h.ctl), before);
        assert!(!h.ctl.advance());
        assert_eq!(snapshot(&h.ctl), before);
    }

    #[test]
    fn previous_is_noop_at_first_step() {
        let mut h = harness();
        h.ctl.load_sequence(steps(&[Some(5), Some(10)]));
        h.ctl.add_time(3);
        h.ctl.previous();
        assert_eq!(snapshot(&h.ctl), (0, false, false, 8));
    }

    #[test]
    fn previous_refills_the_earlier_step() {
        let mut h = harness();
        h.ctl.load_sequence(steps(&[Some(5), Some(10)]));
        h.ctl.next();
        h.ctl.previous();
        assert_eq!(h.ctl.current_index(), 0);
        assert_eq!(h.ctl.time_remaining(), 5);
    }

    #[test]
    fn manual_navigation_keeps_paused_timer_paused() {
        let mut h = harness();
        h.ctl.load_sequence(steps(&[Some(5), Some(10), Some(15)]));
        h.ctl.play();
        h.ctl.play();

        h.ctl.next();
        assert_eq!(snapshot(&h.ctl), (1, false, true, 10));
        assert!(!h.ctl.has_active_timer());

        h.ctl.previous();
        assert_eq!(snapshot(&h.ctl), (0, false, true, 5));
    }

    #[test]
    fn manual_navigation_keeps_running_timer_running() {
        let mut h = harness();
        h.ctl.load_sequence(steps(&[Some(5), Some(10)]));
        h.ctl.play();
        h.ctl.tick();

        h.ctl.next();
        assert_eq!(snapshot(&h.ctl), (1, true, true, 10));
        assert!(h.ctl.has_active_timer());
    }

    #[test]
    fn add_time_extends_past_nominal_duration() {
        let mut h = harness();
        h.ctl.load_sequence(steps(&[Some(20)]));
        h.ctl.add_time(30);
        assert_eq!(h.ctl.time_remaining(), 50);

        h.ctl.play();
        h.ctl.tick();
        h.ctl.add_time(30);
        assert_eq!(h.ctl.time_remaining(), 79);
    }

    #[test]
    fn add_time_after_finish_resumes_counting() {
        let mut h = harness();
        h.ctl.load_sequence(steps(&[Some(1)]));
        h.ctl.play();
        assert_eq!(h.ctl.tick(), TickOutcome::Finished);

        h.ctl.add_time(30);
        assert!(h.ctl.has_active_timer());
        assert_eq!(h.ctl.tick(), TickOutcome::Counted);
        assert_eq!(h.ctl.time_remaining(), 29);
    }

    #[test]
    fn stop_rearms_from_any_state() {
        let mut h = harness();
        h.ctl.load_sequence(steps(&[Some(5), Some(10), Some(15)]));
        h.ctl.play();
        h.ctl.next();
        h.ctl.next();
        h.ctl.add_time(100);

        h.ctl.stop();
        assert_eq!(snapshot(&h.ctl), (0, false, false, 5));
        assert!(!h.ctl.has_active_timer());
    }

    #[test]
    fn empty_sequence_degrades_to_noops() {
        let mut h = harness();
        h.ctl.load_sequence(vec![]);

        h.ctl.play();
        h.ctl.next();
        h.ctl.previous();
        h.ctl.add_time(10);
        assert_eq!(h.ctl.tick(), TickOutcome::Idle);

        assert_eq!(snapshot(&h.ctl), (0, false, false, 0));
        assert_eq!(h.ctl.progress_percent(), 0);

        h.ctl.stop();
        assert_eq!(snapshot(&h.ctl), (0, false, false, 0));
    }

    #[test]
    fn progress_rounds_position() {
        let mut h = harness();
        h.ctl.load_sequence(steps(&[Some(1), Some(1), Some(1)]));
        assert_eq!(h.ctl.progress_percent(), 33);
        h.ctl.next();
        assert_eq!(h.ctl.progress_percent(), 67);
        h.ctl.next();
        assert_eq!(h.ctl.progress_percent(), 100);
    }

    #[test]
    fn every_state_change_replaces_the_subscription() {
        let mut h = harness();
        h.ctl.load_sequence(steps(&[Some(5), Some(10)]));
        assert_eq!(h.ticks.subscriptions(), 0);

        h.ctl.play();
        assert_eq!(h.ticks.subscriptions(), 1);
        h.ctl.next();
        assert_eq!(h.ticks.subscriptions(), 2);

        // Extending time keeps the live subscription
        h.ctl.add_time(5);
        assert_eq!(h.ticks.subscriptions(), 2);
    }

    #[test]
    fn stale_ticks_never_double_decrement() {
        let mut h = harness();
        h.ctl.load_sequence(steps(&[Some(10)]));
        h.ctl.play();

        let (old_gen, old_rx) = h.ctl.timer_handle().expect("timer armed");
        h.ctl.play();
        h.ctl.play();
        let (new_gen, _) = h.ctl.timer_handle().expect("timer re-armed");
        assert_ne!(old_gen, new_gen);

        h.ticks.fire(0);
        assert!(old_rx.try_recv().is_ok());
        assert_eq!(h.ctl.on_timer_tick(old_gen), TickOutcome::Idle);
        assert_eq!(h.ctl.time_remaining(), 10);

        assert_eq!(h.ctl.on_timer_tick(new_gen), TickOutcome::Counted);
        assert_eq!(h.ctl.time_remaining(), 9);
    }

    #[test]
    fn poll_timer_drains_due_ticks() {
        let mut h = harness();
        h.ctl.load_sequence(steps(&[Some(3), Some(10)]));
        h.ctl.play();

        h.ticks.fire_latest();
        h.ticks.fire_latest();
        assert_eq!(
            h.ctl.poll_timer(),
            vec![TickOutcome::Counted, TickOutcome::Counted]
        );

        // The advancing tick swaps subscriptions, queued ticks on the old one are lost
        h.ticks.fire_latest();
        h.ticks.fire(0);
        assert_eq!(h.ctl.poll_timer(), vec![TickOutcome::Advanced]);
        assert_eq!(h.ctl.time_remaining(), 10);
        assert!(h.ctl.poll_timer().is_empty());
    }

    #[test]
    fn fullscreen_flips_only_on_confirmation() {
        let mut h = harness();
        h.ctl.toggle_fullscreen();
        assert!(!h.ctl.is_fullscreen());
        assert!(h.ctl.fullscreen_state().is_pending());

        h.ctl.on_fullscreen_changed(true);
        assert!(h.ctl.is_fullscreen());

        h.ctl.exit_fullscreen();
        assert!(h.ctl.is_fullscreen());
        h.ctl.on_fullscreen_changed(false);
        assert!(!h.ctl.is_fullscreen());
        assert_eq!(*h.display.requests.borrow(), vec![true, false]);
    }

    #[test]
    fn rejected_fullscreen_request_rolls_back_intent() {
        let mut h = harness();
        *h.display.reject.borrow_mut() = true;

        h.ctl.toggle_fullscreen();
        assert_eq!(h.ctl.fullscreen_state(), FullscreenState::default());
        assert!(!h.ctl.is_fullscreen());
    }

    #[test]
    fn exit_fullscreen_when_windowed_is_noop() {
        let mut h = harness();
        h.ctl.exit_fullscreen();
        assert!(h.display.requests.borrow().is_empty());
    }

    #[test]
    fn notification_names_both_exercises() {
        let mut h = harness();
        h.ctl.load_sequence(vec![
            ExerciseStep::new("burpees", Some(1)),
            ExerciseStep::new("plank", Some(30)),
        ]);
        h.ctl.play();
        h.ctl.tick();

        assert_eq!(
            h.notes.0.borrow()[0],
            Notification::ExerciseComplete {
                finished: "burpees".into(),
                next: "plank".into(),
            }
        );
    }
}
