//! Load-cycle state for remotely sourced collections
//!
//! Each remote collection (insight fields, fraud signals) is owned by exactly
//! one view, which drives it through unloaded -> loading -> populated. While
//! a collection is loading its items are not authoritative and consumers
//! render skeleton placeholders instead.

/// State of one remotely sourced collection.
///
/// Invariants:
/// - A collection is fetched at most once per session: `should_fetch` returns
///   false as soon as items are present or a fetch is in flight.
/// - A transport failure or empty response never leaves this state; the
///   collection simply stays in its loading phase.
/// - `generation` increments on every `reset`, so results from a superseded
///   load cycle can be recognized and dropped.
#[derive(Debug, Clone, Default)]
pub struct CollectionState<T> {
    items: Vec<T>,
    is_loading: bool,
    generation: u64,
}

impl<T> CollectionState<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            generation: 0,
        }
    }

    /// The loaded items. Empty until a load cycle completes.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a call to `load` should actually issue a request.
    ///
    /// False once items are present (idempotent-load guard against
    /// re-render-triggered duplicate fetches) or while a fetch is in flight.
    pub fn should_fetch(&self) -> bool {
        self.items.is_empty() && !self.is_loading
    }

    /// Enter the loading phase. Callers check `should_fetch` first.
    pub fn begin(&mut self) {
        self.is_loading = true;
    }

    /// Complete the load cycle for `generation`, replacing the item set
    /// atomically. Returns false (and drops the items) when the cycle was
    /// superseded by a `reset` in the meantime, or when the response carried
    /// no items; an empty response keeps the collection loading.
    pub fn try_populate(&mut self, generation: u64, items: Vec<T>) -> bool {
        if generation != self.generation || items.is_empty() {
            return false;
        }
        self.items = items;
        self.is_loading = false;
        true
    }

    /// Discard everything and allow a fresh load cycle. Pending results from
    /// the previous cycle no longer match `generation` and are dropped.
    pub fn reset(&mut self) {
        self.items.clear();
        self.is_loading = false;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_wants_fetch() {
        let state: CollectionState<u32> = CollectionState::new();
        assert!(state.should_fetch());
        assert!(!state.is_loading());
        assert!(state.items().is_empty());
    }

    #[test]
    fn test_populated_state_never_refetches() {
        let mut state = CollectionState::new();
        state.begin();
        assert!(state.try_populate(0, vec![1, 2, 3]));
        assert!(!state.should_fetch());
        assert!(!state.is_loading());
        assert_eq!(state.items(), &[1, 2, 3]);
    }

    #[test]
    fn test_empty_response_stays_loading() {
        let mut state: CollectionState<u32> = CollectionState::new();
        state.begin();
        assert!(!state.try_populate(0, Vec::new()));
        assert!(state.is_loading());
        assert!(state.items().is_empty());
    }

    #[test]
    fn test_stale_generation_is_dropped() {
        let mut state = CollectionState::new();
        state.begin();
        let stale = state.generation();
        state.reset();
        assert!(!state.try_populate(stale, vec![9]));
        assert!(state.items().is_empty());
        assert!(state.should_fetch());
    }
}
