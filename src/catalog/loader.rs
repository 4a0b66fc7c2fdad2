// SPDX-License-Identifier: MPL-2.0
//! One-shot guard around the catalog fetch.
//!
//! The fetch itself runs as an async task whose completion comes back as a
//! message. The loader hands out a [`Ticket`] when the fetch starts and only
//! accepts a completion carrying the ticket of the fetch still in flight.
//! Once the owner is torn down, every completion is rejected, so a late
//! response never touches disposed state.

/// Identifies one fetch started by a [`Loader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    InFlight(Ticket),
    Settled,
    TornDown,
}

#[derive(Debug, Clone)]
pub struct Loader {
    phase: Phase,
    next_ticket: u64,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            next_ticket: 0,
        }
    }

    /// Starts the fetch. Returns `None` if a fetch was already started (or the
    /// owner is gone), so a second call never issues a second request.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.phase != Phase::Idle {
            return None;
        }
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.phase = Phase::InFlight(ticket);
        Some(ticket)
    }

    /// Decides whether the completion for `ticket` may be applied.
    ///
    /// Returns `true` exactly once, for the ticket of the fetch in flight.
    pub fn accept(&mut self, ticket: Ticket) -> bool {
        match self.phase {
            Phase::InFlight(current) if current == ticket => {
                self.phase = Phase::Settled;
                true
            }
            _ => false,
        }
    }

    /// Marks the owner as disposed. Pending and future completions are dropped.
    pub fn teardown(&mut self) {
        self.phase = Phase::TornDown;
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        matches!(self.phase, Phase::InFlight(_))
    }

    /// Ticket of the fetch currently in flight.
    #[must_use]
    pub fn in_flight(&self) -> Option<Ticket> {
        match self.phase {
            Phase::InFlight(ticket) => Some(ticket),
            Phase::Idle | Phase::Settled | Phase::TornDown => None,
        }
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.phase == Phase::TornDown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_only_starts_one_fetch() {
        let mut loader = Loader::new();
        assert!(loader.begin().is_some());
        assert!(loader.begin().is_none());
        assert!(loader.is_in_flight());
    }

    #[test]
    fn accept_applies_matching_ticket_once() {
        let mut loader = Loader::new();
        let ticket = loader.begin().expect("first begin starts a fetch");

        assert!(loader.accept(ticket));
        assert!(!loader.accept(ticket));
        assert!(!loader.is_in_flight());
    }

    #[test]
    fn begin_after_settle_is_refused() {
        let mut loader = Loader::new();
        let ticket = loader.begin().expect("first begin starts a fetch");
        loader.accept(ticket);

        assert!(loader.begin().is_none());
    }

    #[test]
    fn teardown_drops_late_completion() {
        let mut loader = Loader::new();
        let ticket = loader.begin().expect("first begin starts a fetch");

        loader.teardown();

        assert!(!loader.accept(ticket));
        assert!(loader.is_torn_down());
        assert!(loader.begin().is_none());
    }

    #[test]
    fn acceptance_depends_on_each_loaders_own_phase() {
        let mut live = Loader::new();
        let mut disposed = Loader::new();
        let _ = live.begin();
        let ticket = disposed.begin().expect("fresh loader starts a fetch");
        disposed.teardown();

        assert!(!disposed.accept(ticket));
        assert!(live.accept(ticket));
    }
}
