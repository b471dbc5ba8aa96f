/// Lifecycle of the render loop.
///
/// ```text
/// Uninitialized -> Ready -> Running -> ShuttingDown -> Terminated
/// ```
///
/// Two shortcuts exist: a failed initialization goes from `Uninitialized`
/// straight to `Terminated`, and a close before the first frame goes from
/// `Ready` to `ShuttingDown`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopPhase {
    /// No window or GPU context yet.
    Uninitialized,
    /// Window, GPU context and application resources exist; no frame drawn.
    Ready,
    /// Redrawing every iteration.
    Running,
    /// Close observed; releasing resources.
    ShuttingDown,
    /// Everything released; the event loop is exiting.
    Terminated,
}

impl LoopPhase {
    pub fn can_advance_to(self, next: LoopPhase) -> bool {
        use LoopPhase::*;
        matches!(
            (self, next),
            (Uninitialized, Ready)
                | (Uninitialized, Terminated)
                | (Ready, Running)
                | (Ready, ShuttingDown)
                | (Running, ShuttingDown)
                | (ShuttingDown, Terminated)
        )
    }

    /// Whether frames should be requested in this phase.
    #[inline]
    pub fn wants_redraw(self) -> bool {
        matches!(self, LoopPhase::Ready | LoopPhase::Running)
    }
}

/// Tracks the current [`LoopPhase`] and rejects illegal transitions.
#[derive(Debug)]
pub(crate) struct LoopState {
    phase: LoopPhase,
}

impl LoopState {
    pub(crate) fn new() -> Self {
        Self { phase: LoopPhase::Uninitialized }
    }

    #[inline]
    pub(crate) fn phase(&self) -> LoopPhase {
        self.phase
    }

    /// Moves to `next` if the edge is legal. Illegal requests are logged and
    /// leave the phase unchanged.
    pub(crate) fn advance(&mut self, next: LoopPhase) -> bool {
        if !self.phase.can_advance_to(next) {
            log::error!("illegal render loop transition {:?} -> {:?}", self.phase, next);
            return false;
        }
        log::debug!("render loop {:?} -> {:?}", self.phase, next);
        self.phase = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LoopPhase::*;

    #[test]
    fn normal_lifecycle() {
        let mut s = LoopState::new();
        for next in [Ready, Running, ShuttingDown, Terminated] {
            assert!(s.advance(next), "-> {next:?}");
        }
        assert_eq!(s.phase(), Terminated);
    }

    #[test]
    fn init_failure_goes_straight_to_terminated() {
        let mut s = LoopState::new();
        assert!(s.advance(Terminated));
    }

    #[test]
    fn close_before_first_frame() {
        let mut s = LoopState::new();
        assert!(s.advance(Ready));
        assert!(s.advance(ShuttingDown));
    }

    #[test]
    fn illegal_edges_are_rejected() {
        let mut s = LoopState::new();
        assert!(!s.advance(Running));
        assert_eq!(s.phase(), Uninitialized);

        s.advance(Ready);
        s.advance(Running);
        assert!(!s.advance(Ready));
        assert!(!s.advance(Running));
        assert_eq!(s.phase(), Running);
    }

    #[test]
    fn terminated_is_final() {
        for next in [Uninitialized, Ready, Running, ShuttingDown, Terminated] {
            assert!(!Terminated.can_advance_to(next));
        }
    }

    #[test]
    fn redraw_only_while_live() {
        assert!(Ready.wants_redraw());
        assert!(Running.wants_redraw());
        assert!(!ShuttingDown.wants_redraw());
        assert!(!Uninitialized.wants_redraw());
    }
}
