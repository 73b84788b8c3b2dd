use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// What a fetch loads into the cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FetchScope {
    TaskLists,
    Tasks(String),
}

/// Issued when a fetch starts; handed back when its response arrives.
#[derive(Debug)]
pub struct FetchTicket {
    scope: FetchScope,
    epoch: u64,
}

impl FetchTicket {
    pub fn scope(&self) -> &FetchScope {
        &self.scope
    }
}

#[derive(Debug, Default)]
struct FenceState {
    next_epoch: u64,
    latest: HashMap<FetchScope, u64>,
    in_flight: HashMap<FetchScope, usize>,
}

/// Request epochs per fetch scope. Only the most recently started fetch of a
/// scope may write its response into the cache; older responses are stale.
#[derive(Debug, Default)]
pub struct FetchFence {
    state: Mutex<FenceState>,
}

impl FetchFence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self, scope: FetchScope) -> FetchTicket {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.next_epoch += 1;
        let epoch = state.next_epoch;
        state.latest.insert(scope.clone(), epoch);
        *state.in_flight.entry(scope.clone()).or_default() += 1;
        FetchTicket { scope, epoch }
    }

    /// Mark the fetch finished. Returns whether its response is still the
    /// latest for its scope.
    pub fn finish(&self, ticket: FetchTicket) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(count) = state.in_flight.get_mut(&ticket.scope) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                state.in_flight.remove(&ticket.scope);
            }
        }
        state.latest.get(&ticket.scope) == Some(&ticket.epoch)
    }

    pub fn is_loading(&self, scope: &FetchScope) -> bool {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.in_flight.contains_key(scope)
    }
}
