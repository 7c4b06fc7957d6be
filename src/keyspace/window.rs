//! Skip and limit windowing over the valid candidate sequence

/// Window over the sequence of constraint-passing candidates
///
/// `skip` discards that many valid candidates before the first
/// emission. `limit` stops the run after that many emissions, with 0
/// meaning unbounded. Both count valid candidates only; rejected
/// vectors never touch the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Window {
    /// Valid candidates to discard before emitting
    pub skip: u64,
    /// Emissions after which the run stops, 0 for no limit
    pub limit: u64,
}

impl Window {
    /// Window emitting at most `limit` candidates after dropping `skip`
    pub fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }

    /// Window that emits every valid candidate
    pub fn unbounded() -> Self {
        Self::default()
    }
}

/// What the run loop should do with the current valid candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAction {
    /// Discard without emitting
    Skip,
    /// Emit and keep going
    Emit,
    /// Emit, then stop the run
    EmitThenStop,
}

/// Tracks window progress across a run
#[derive(Debug, Clone)]
pub struct WindowState {
    window: Window,
    skipped: u64,
    emitted: u64,
}

impl WindowState {
    /// Start tracking the given window
    pub fn new(window: Window) -> Self {
        Self {
            window,
            skipped: 0,
            emitted: 0,
        }
    }

    /// Account for one valid candidate and decide its fate
    pub fn decide(&mut self) -> WindowAction {
        if self.skipped < self.window.skip {
            self.skipped += 1;
            return WindowAction::Skip;
        }
        self.emitted += 1;
        if self.window.limit > 0 && self.emitted == self.window.limit {
            WindowAction::EmitThenStop
        } else {
            WindowAction::Emit
        }
    }

    /// Valid candidates discarded so far
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Candidates emitted so far
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_window_always_emits() {
        let mut state = WindowState::new(Window::unbounded());
        for _ in 0..100 {
            assert_eq!(state.decide(), WindowAction::Emit);
        }
        assert_eq!(state.emitted(), 100);
        assert_eq!(state.skipped(), 0);
    }

    #[test]
    fn test_skip_discards_leading_candidates() {
        let mut state = WindowState::new(Window::new(2, 0));
        assert_eq!(state.decide(), WindowAction::Skip);
        assert_eq!(state.decide(), WindowAction::Skip);
        assert_eq!(state.decide(), WindowAction::Emit);
        assert_eq!(state.skipped(), 2);
        assert_eq!(state.emitted(), 1);
    }

    #[test]
    fn test_limit_stops_on_the_last_emission() {
        let mut state = WindowState::new(Window::new(0, 3));
        assert_eq!(state.decide(), WindowAction::Emit);
        assert_eq!(state.decide(), WindowAction::Emit);
        assert_eq!(state.decide(), WindowAction::EmitThenStop);
        assert_eq!(state.emitted(), 3);
    }

    #[test]
    fn test_limit_of_one() {
        let mut state = WindowState::new(Window::new(0, 1));
        assert_eq!(state.decide(), WindowAction::EmitThenStop);
    }

    #[test]
    fn test_skip_then_limit() {
        let mut state = WindowState::new(Window::new(1, 2));
        assert_eq!(state.decide(), WindowAction::Skip);
        assert_eq!(state.decide(), WindowAction::Emit);
        assert_eq!(state.decide(), WindowAction::EmitThenStop);
        assert_eq!(state.skipped(), 1);
        assert_eq!(state.emitted(), 2);
    }
}
