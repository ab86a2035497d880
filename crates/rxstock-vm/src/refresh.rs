//! Stale-guarded refresh: background reloads must never clobber fresh
//! state.
//!
//! Aging and valuation panels reload whenever their inputs change; a slow
//! or failed reload from an earlier input must not overwrite the data a
//! newer reload already displayed, and a failure must leave the previous
//! data visible rather than blanking the panel.

/// Generation counter that ties each in-flight refresh to the state it is
/// allowed to write.
#[derive(Debug, Default)]
pub struct StaleGuard {
    generation: u64,
}

/// Proof of which refresh generation a fetch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    generation: u64,
}

impl StaleGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new refresh, invalidating every earlier ticket.
    pub fn begin(&mut self) -> RefreshTicket {
        self.generation += 1;
        RefreshTicket {
            generation: self.generation,
        }
    }

    #[must_use]
    pub fn is_current(&self, ticket: RefreshTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Applies a fetch result to `slot` only when the ticket is still
    /// current and the fetch succeeded. A stale or failed refresh leaves
    /// the previously displayed value untouched.
    pub fn apply<T, E: std::fmt::Display>(
        &self,
        ticket: RefreshTicket,
        slot: &mut Option<T>,
        result: Result<T, E>,
    ) {
        if !self.is_current(ticket) {
            tracing::debug!("discarding result of a superseded refresh");
            return;
        }
        match result {
            Ok(value) => *slot = Some(value),
            Err(e) => {
                tracing::debug!(error = %e, "background refresh failed; keeping prior data");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_current_refresh_replaces_the_value() {
        let mut guard = StaleGuard::new();
        let mut slot = Some(1);
        let ticket = guard.begin();
        guard.apply::<_, &str>(ticket, &mut slot, Ok(2));
        assert_eq!(slot, Some(2));
    }

    #[test]
    fn failed_refresh_keeps_prior_data_visible() {
        let mut guard = StaleGuard::new();
        let mut slot = Some(1);
        let ticket = guard.begin();
        guard.apply(ticket, &mut slot, Err("network unreachable"));
        assert_eq!(slot, Some(1), "error must not blank displayed data");
    }

    #[test]
    fn superseded_refresh_cannot_clobber_newer_data() {
        let mut guard = StaleGuard::new();
        let mut slot = None;

        let old_ticket = guard.begin();
        let new_ticket = guard.begin();
        guard.apply::<_, &str>(new_ticket, &mut slot, Ok(20));
        // The older fetch lands late with stale data.
        guard.apply::<_, &str>(old_ticket, &mut slot, Ok(10));

        assert_eq!(slot, Some(20));
    }

    #[test]
    fn failed_stale_refresh_is_also_ignored() {
        let mut guard = StaleGuard::new();
        let mut slot = Some(5);
        let old_ticket = guard.begin();
        guard.begin();
        guard.apply(old_ticket, &mut slot, Err("cancelled"));
        assert_eq!(slot, Some(5));
    }
}
