use std::time::{Duration, Instant};

/// Periodic tick source driven by the engine.
///
/// The engine calls `schedule` once when a run starts, `cancel` followed by
/// `schedule` when the tempo changes, and `cancel` when the run ends.
pub trait Scheduler {
    fn schedule(&mut self, interval: Duration);
    fn cancel(&mut self);
}

/// Wall-clock scheduler polled by a host loop.
///
/// Holds no thread of its own; the host asks [`IntervalTimer::poll`] whether a
/// tick is due.
#[derive(Debug, Clone, Default)]
pub struct IntervalTimer {
    interval: Option<Duration>,
    last_tick: Option<Instant>,
}

impl IntervalTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true and restarts the period when a tick is due at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        let (Some(interval), Some(last_tick)) = (self.interval, self.last_tick) else {
            return false;
        };

        if now.duration_since(last_tick) < interval {
            return false;
        }

        self.last_tick = Some(now);
        true
    }

    /// Time left until the next tick, `None` when nothing is scheduled.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let interval = self.interval?;
        let elapsed = now.duration_since(self.last_tick?);
        Some(interval.saturating_sub(elapsed))
    }
}

impl Scheduler for IntervalTimer {
    fn schedule(&mut self, interval: Duration) {
        self.interval = Some(interval);
        self.last_tick = Some(Instant::now());
    }

    fn cancel(&mut self) {
        self.interval = None;
        self.last_tick = None;
    }
}

/// One request received by a [`ManualScheduler`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ScheduleRequest {
    Schedule(Duration),
    Cancel,
}

/// Scheduler for step-driven hosts: records requests and never fires itself.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    active: Option<Duration>,
    requests: Vec<ScheduleRequest>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interval of the currently scheduled callback.
    #[must_use]
    pub fn active(&self) -> Option<Duration> {
        self.active
    }

    /// Every request received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> &[ScheduleRequest] {
        &self.requests
    }

    /// Drains the request log.
    pub fn take_requests(&mut self) -> Vec<ScheduleRequest> {
        std::mem::take(&mut self.requests)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, interval: Duration) {
        self.active = Some(interval);
        self.requests.push(ScheduleRequest::Schedule(interval));
    }

    fn cancel(&mut self) {
        self.active = None;
        self.requests.push(ScheduleRequest::Cancel);
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{IntervalTimer, ManualScheduler, ScheduleRequest, Scheduler};

    #[test]
    fn timer_fires_only_after_interval() {
        let mut timer = IntervalTimer::new();
        timer.schedule(Duration::from_millis(80));
        let start = Instant::now();

        assert!(!timer.poll(start));
        assert!(timer.poll(start + Duration::from_millis(200)));
        assert!(!timer.poll(start + Duration::from_millis(210)));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timer = IntervalTimer::new();
        timer.schedule(Duration::from_millis(10));
        timer.cancel();

        assert!(!timer.poll(Instant::now() + Duration::from_secs(1)));
        assert_eq!(timer.remaining(Instant::now()), None);
    }

    #[test]
    fn manual_scheduler_records_requests_in_order() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(Duration::from_millis(80));
        scheduler.cancel();
        scheduler.schedule(Duration::from_millis(90));

        assert_eq!(scheduler.active(), Some(Duration::from_millis(90)));
        assert_eq!(
            scheduler.take_requests(),
            vec![
                ScheduleRequest::Schedule(Duration::from_millis(80)),
                ScheduleRequest::Cancel,
                ScheduleRequest::Schedule(Duration::from_millis(90)),
            ]
        );
        assert!(scheduler.requests().is_empty());
    }
}
