use std::sync::atomic::{AtomicBool, Ordering};

/// Lifecycle state of one detection session, shared between the owner and
/// the scheduler's worker.
///
/// `active` is flipped exactly once on teardown and re-checked before every
/// post-suspension side effect, so continuations of an in-flight cycle never
/// touch a torn-down camera or call back into a gone consumer. The cycle
/// flag bounds in-flight cycles to at most one; it is always released
/// through [`CycleGuard`], even when a cycle panics.
pub struct DetectionSession {
    active: AtomicBool,
    cycle_running: AtomicBool,
}

impl DetectionSession {
    /// A new session starts inactive; the scheduler activates it on start.
    pub fn new() -> Self {
        Self {
            active: AtomicBool::new(false),
            cycle_running: AtomicBool::new(false),
        }
    }

    pub fn activate(&self) {
        self.active.store(true, Ordering::Relaxed);
    }

    pub fn deactivate(&self) {
        self.active.store(false, Ordering::Relaxed);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    pub fn is_cycle_running(&self) -> bool {
        self.cycle_running.load(Ordering::Relaxed)
    }

    /// Claim the in-flight slot. Returns `None` when a cycle is already
    /// running, in which case the caller must drop its tick.
    pub fn try_begin_cycle(&self) -> Option<CycleGuard<'_>> {
        if self.cycle_running.swap(true, Ordering::Relaxed) {
            None
        } else {
            Some(CycleGuard { session: self })
        }
    }

    /// Force-clear the in-flight flag during teardown.
    pub fn clear_cycle_flag(&self) {
        self.cycle_running.store(false, Ordering::Relaxed);
    }
}

impl Default for DetectionSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Releases the in-flight slot when dropped.
pub struct CycleGuard<'a> {
    session: &'a DetectionSession,
}

impl Drop for CycleGuard<'_> {
    fn drop(&mut self) {
        self.session.cycle_running.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_inactive_and_idle() {
        let session = DetectionSession::new();
        assert!(!session.is_active());
        assert!(!session.is_cycle_running());
    }

    #[test]
    fn test_activate_deactivate() {
        let session = DetectionSession::new();
        session.activate();
        assert!(session.is_active());
        session.deactivate();
        assert!(!session.is_active());
    }

    #[test]
    fn test_second_begin_cycle_is_refused() {
        let session = DetectionSession::new();
        let guard = session.try_begin_cycle();
        assert!(guard.is_some());
        assert!(session.try_begin_cycle().is_none());
    }

    #[test]
    fn test_guard_drop_releases_slot() {
        let session = DetectionSession::new();
        {
            let _guard = session.try_begin_cycle().unwrap();
            assert!(session.is_cycle_running());
        }
        assert!(!session.is_cycle_running());
        assert!(session.try_begin_cycle().is_some());
    }

    #[test]
    fn test_guard_releases_on_panic() {
        let session = DetectionSession::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = session.try_begin_cycle().unwrap();
            panic!("cycle blew up");
        }));
        assert!(result.is_err());
        assert!(!session.is_cycle_running());
    }

    #[test]
    fn test_clear_cycle_flag() {
        let session = DetectionSession::new();
        let guard = session.try_begin_cycle().unwrap();
        session.clear_cycle_flag();
        assert!(!session.is_cycle_running());
        drop(guard);
    }
}
