use crate::tick::Tick;

/// Explicit timer-reset debounce.
///
/// Each `arm` pushes the deadline out by the full delay, so during a rapid
/// burst only the last arm within the window ever fires. The map framework's
/// own timers are not relied on; the host simply calls `fire` on each tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    delay_ms: u64,
    deadline: Option<Tick>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    pub fn arm(&mut self, now: Tick) {
        self.deadline = Some(now.plus_ms(self.delay_ms));
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` exactly once when the deadline has passed.
    pub fn fire(&mut self, now: Tick) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Debouncer;
    use crate::tick::Tick;

    #[test]
    fn only_last_arm_in_window_fires() {
        let mut d = Debouncer::new(300);
        d.arm(Tick::new(0));
        d.arm(Tick::new(200));

        // Original deadline (300) has been pushed out by the second arm.
        assert!(!d.fire(Tick::new(300)));
        assert!(!d.fire(Tick::new(499)));
        assert!(d.fire(Tick::new(500)));
        assert!(!d.fire(Tick::new(501)));
    }

    #[test]
    fn cancel_disarms() {
        let mut d = Debouncer::new(300);
        d.arm(Tick::new(0));
        assert!(d.is_armed());
        d.cancel();
        assert!(!d.fire(Tick::new(1000)));
    }
}
