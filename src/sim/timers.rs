//! One-shot deferred timers on a simulated millisecond clock
//!
//! Stands in for browser timeouts: an entry fires once after its delay, the
//! handler may schedule a follow-up, and the owner can revoke a pending entry.

/// Handle to a scheduled entry, used to cancel it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct Pending<T> {
    handle: TimerHandle,
    due_ms: f64,
    payload: T,
}

/// Deferred timer queue
#[derive(Debug, Clone)]
pub struct Timers<T> {
    now_ms: f64,
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timers<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0.0,
            next_id: 1,
            pending: Vec::new(),
        }
    }

    /// Current clock reading
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Number of entries still waiting to fire
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Schedule `payload` to fire `delay_ms` from now
    pub fn schedule(&mut self, delay_ms: f64, payload: T) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            handle,
            due_ms: self.now_ms + delay_ms.max(0.0),
            payload,
        });
        handle
    }

    /// Revoke a pending entry. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        self.pending.len() != before
    }

    /// Pop the earliest entry due at or before `until_ms`, moving the clock to its due time
    ///
    /// Ties fire in scheduling order. Call repeatedly, handling each payload before
    /// the next pop, so follow-ups scheduled by a handler are seen in the same sweep.
    pub fn pop_due(&mut self, until_ms: f64) -> Option<T> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until_ms)
            .min_by(|(_, a), (_, b)| {
                a.due_ms
                    .partial_cmp(&b.due_ms)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(a.handle.0.cmp(&b.handle.0))
            })
            .map(|(i, _)| i)?;

        let entry = self.pending.remove(index);
        self.now_ms = self.now_ms.max(entry.due_ms);
        Some(entry.payload)
    }

    /// Move the clock forward once every due entry has been popped
    pub fn settle(&mut self, until_ms: f64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(timers: &mut Timers<&'static str>, until: f64) -> Vec<&'static str> {
        let mut fired = Vec::new();
        while let Some(p) = timers.pop_due(until) {
            fired.push(p);
        }
        timers.settle(until);
        fired
    }

    #[test]
    fn test_fires_in_due_order() {
        let mut timers = Timers::new();
        timers.schedule(300.0, "c");
        timers.schedule(100.0, "a");
        timers.schedule(200.0, "b");

        assert_eq!(drain(&mut timers, 50.0), Vec::<&str>::new());
        assert_eq!(drain(&mut timers, 250.0), vec!["a", "b"]);
        assert_eq!(timers.now_ms(), 250.0);
        assert_eq!(drain(&mut timers, 1000.0), vec!["c"]);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_ties_fire_in_scheduling_order() {
        let mut timers = Timers::new();
        timers.schedule(0.0, "first");
        timers.schedule(0.0, "second");
        assert_eq!(drain(&mut timers, 0.0), vec!["first", "second"]);
    }

    #[test]
    fn test_cancel() {
        let mut timers = Timers::new();
        let keep = timers.schedule(100.0, "keep");
        let dropped = timers.schedule(100.0, "drop");

        assert!(timers.cancel(dropped));
        assert!(!timers.cancel(dropped));
        assert_eq!(drain(&mut timers, 100.0), vec!["keep"]);
        assert!(!timers.cancel(keep));
    }

    #[test]
    fn test_reschedule_from_handler_fires_in_same_sweep() {
        let mut timers = Timers::new();
        timers.schedule(100.0, "tick");

        let mut count = 0;
        while timers.pop_due(450.0).is_some() {
            count += 1;
            // Delay is measured from the firing time, not the sweep target
            timers.schedule(100.0, "tick");
        }
        timers.settle(450.0);

        assert_eq!(count, 4);
        assert_eq!(timers.len(), 1);
    }
}
