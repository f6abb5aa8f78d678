/// Millisecond timebase for the viewer core.
///
/// The core never reads a wall clock; hosts advance ticks from their own
/// event loop. This keeps debounce and animation sequencing deterministic
/// and replayable in tests.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tick(pub u64);

impl Tick {
    pub fn new(ms: u64) -> Self {
        Self(ms)
    }

    pub fn plus_ms(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }
}

#[cfg(test)]
mod tests {
    use super::Tick;

    #[test]
    fn ticks_order_and_advance() {
        let t = Tick::new(100);
        assert!(t < t.plus_ms(1));
        assert_eq!(t.plus_ms(300), Tick::new(400));
        assert_eq!(Tick::new(u64::MAX).plus_ms(1), Tick::new(u64::MAX));
    }
}
