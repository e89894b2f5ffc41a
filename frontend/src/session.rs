/// Lifecycle of the one ride this page tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RideState {
    #[default]
    Idle,
    Active,
}

/// Owns the ride flag. View code never touches the state directly; the
/// only mutations are the two lifecycle transitions below, issued from
/// the message handlers on confirmed server responses.
#[derive(Debug, Default)]
pub struct RideSession {
    state: RideState,
}

impl RideSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.state == RideState::Active
    }

    /// Idle -> Active. A no-op while a ride is already active.
    pub fn begin(&mut self) {
        if self.state == RideState::Idle {
            self.state = RideState::Active;
        }
    }

    /// Active -> Idle. A no-op without an active ride.
    pub fn finish(&mut self) {
        if self.state == RideState::Active {
            self.state = RideState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        assert!(!RideSession::new().is_active());
    }

    #[test]
    fn begin_then_finish() {
        let mut session = RideSession::new();
        session.begin();
        assert!(session.is_active());
        session.finish();
        assert!(!session.is_active());
    }

    #[test]
    fn redundant_transitions_are_no_ops() {
        let mut session = RideSession::new();
        session.finish();
        assert!(!session.is_active());

        session.begin();
        session.begin();
        assert!(session.is_active());
    }
}
