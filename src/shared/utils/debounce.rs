//! Clock-agnostic debouncer
//!
//! Callers pass the current time in milliseconds. Every `push` supersedes the
//! pending value; a ticket fires only if it is still the latest one and the
//! delay has elapsed since it was pushed.

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Handle returned by `push`, checked again when the timer elapses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
struct Pending<T> {
    ticket: Ticket,
    deadline_ms: u64,
    value: T,
}

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u64,
    next_ticket: u64,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            next_ticket: 0,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Schedule `value`, cancelling whatever was pending
    pub fn push(&mut self, value: T, now_ms: u64) -> Ticket {
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.pending = Some(Pending {
            ticket,
            deadline_ms: now_ms.saturating_add(self.delay_ms),
            value,
        });
        ticket
    }

    /// Take the pending value if `ticket` is current and due
    pub fn fire(&mut self, ticket: Ticket, now_ms: u64) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| p.ticket == ticket && now_ms >= p.deadline_ms);
        if !due {
            return None;
        }
        self.pending.take().map(|p| p.value)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending value, if any
    pub fn deadline_ms(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.deadline_ms)
    }

    /// Deadline of `ticket`, or None once it was superseded, fired or cancelled
    pub fn deadline_for(&self, ticket: Ticket) -> Option<u64> {
        self.pending
            .as_ref()
            .filter(|p| p.ticket == ticket)
            .map(|p| p.deadline_ms)
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_of_keystrokes_fires_once_with_final_value() {
        let mut debouncer = Debouncer::default();
        let t1 = debouncer.push("p", 0);
        let t2 = debouncer.push("pl", 50);
        let t3 = debouncer.push("plo", 100);

        let mut fired = Vec::new();
        // Each timer wakes up `delay` after its own keystroke
        for (ticket, wake) in [(t1, 300), (t2, 350), (t3, 400)] {
            if let Some(value) = debouncer.fire(ticket, wake) {
                fired.push((value, wake));
            }
        }

        assert_eq!(fired, vec![("plo", 400)]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_does_not_fire_early() {
        let mut debouncer = Debouncer::new(300);
        let ticket = debouncer.push(1, 100);
        assert_eq!(debouncer.fire(ticket, 399), None);
        assert_eq!(debouncer.deadline_ms(), Some(400));
        assert_eq!(debouncer.fire(ticket, 400), Some(1));
    }

    #[test]
    fn test_fires_at_most_once() {
        let mut debouncer = Debouncer::new(10);
        let ticket = debouncer.push("q", 0);
        assert_eq!(debouncer.fire(ticket, 20), Some("q"));
        assert_eq!(debouncer.fire(ticket, 30), None);
    }

    #[test]
    fn test_superseded_ticket_has_no_deadline() {
        let mut debouncer = Debouncer::new(300);
        let old = debouncer.push("a", 0);
        let new = debouncer.push("ab", 50);
        assert_eq!(debouncer.deadline_for(old), None);
        assert_eq!(debouncer.deadline_for(new), Some(350));
    }

    #[test]
    fn test_cancel_drops_pending() {
        let mut debouncer = Debouncer::new(10);
        let ticket = debouncer.push("q", 0);
        debouncer.cancel();
        assert_eq!(debouncer.fire(ticket, 50), None);
    }
}
