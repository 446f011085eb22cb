//! Circular paginator driving the hero and spotlight carousels.
//!
//! [`Paginator`] owns the current index over a fixed, non-empty deck and moves it
//! with wraparound arithmetic: stepping past the last item lands on the first and
//! stepping back from the first lands on the last. It never clamps.
//!
//! Views do not poll the paginator. They [`subscribe`](Paginator::subscribe) and get a
//! [`PageChange`] every time the index moves. The Leptos landing page routes that
//! into a signal; the Tokio [`crate::carousel`] publishes it on a watch channel.
//!
//! ```rust
//! use allyconnect_core::paginator::Paginator;
//!
//! let mut deck = Paginator::new(3).unwrap();
//! deck.next();
//! deck.next();
//! deck.next();
//! assert_eq!(deck.current(), 0);
//! deck.previous();
//! assert_eq!(deck.current(), 2);
//! ```
//!
//! The timer half of a carousel lives elsewhere: this type is plain synchronous state
//! and is shared between the native runtime and the wasm landing page.

use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::PaginatorError;

/// What `go_to` does with an index outside `[0, item_count)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfRange {
    /// Leave the index untouched and return [`PaginatorError::IndexOutOfRange`].
    #[default]
    Reject,
    /// Normalize with `index % item_count`.
    Wrap,
}

/// Notification delivered to observers after the index moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub previous: usize,
    pub current: usize,
    pub item_count: usize,
}

/// Handle returned by [`Paginator::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(PageChange) + Send + Sync>;

/// Index state for one carousel deck.
pub struct Paginator {
    item_count: NonZeroUsize,
    current: usize,
    out_of_range: OutOfRange,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl Paginator {
    /// Create a paginator over `item_count` items, starting at index 0.
    ///
    /// Out-of-range `go_to` calls are rejected; see [`Paginator::with_policy`].
    pub fn new(item_count: usize) -> Result<Self, PaginatorError> {
        Self::with_policy(item_count, OutOfRange::default())
    }

    /// Create a paginator with an explicit out-of-range policy.
    pub fn with_policy(item_count: usize, out_of_range: OutOfRange) -> Result<Self, PaginatorError> {
        let item_count = NonZeroUsize::new(item_count).ok_or(PaginatorError::Empty)?;
        Ok(Self {
            item_count,
            current: 0,
            out_of_range,
            observers: Vec::new(),
            next_subscription: 0,
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn item_count(&self) -> usize {
        self.item_count.get()
    }

    pub fn out_of_range(&self) -> OutOfRange {
        self.out_of_range
    }

    /// Advance one item, wrapping from the last item to the first.
    pub fn next(&mut self) -> usize {
        let target = (self.current + 1) % self.item_count();
        self.move_to(target);
        self.current
    }

    /// Step back one item, wrapping from the first item to the last.
    pub fn previous(&mut self) -> usize {
        let len = self.item_count();
        let target = (self.current + len - 1) % len;
        self.move_to(target);
        self.current
    }

    /// Jump straight to `index`.
    ///
    /// In-range indices always succeed. Out-of-range indices follow the
    /// configured [`OutOfRange`] policy.
    pub fn go_to(&mut self, index: usize) -> Result<usize, PaginatorError> {
        let len = self.item_count();
        let target = if index < len {
            index
        } else {
            match self.out_of_range {
                OutOfRange::Reject => {
                    warn!(index, len, "rejected out-of-range carousel navigation");
                    return Err(PaginatorError::IndexOutOfRange { index, len });
                }
                OutOfRange::Wrap => index % len,
            }
        };
        self.move_to(target);
        Ok(self.current)
    }

    /// Register an observer called after every index change.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(PageChange) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn move_to(&mut self, target: usize) {
        debug_assert!(target < self.item_count());
        if target == self.current {
            return;
        }
        let change = PageChange {
            previous: self.current,
            current: target,
            item_count: self.item_count(),
        };
        self.current = target;
        debug!(from = change.previous, to = change.current, "carousel moved");
        for (_, observer) in &mut self.observers {
            observer(change);
        }
    }
}

impl fmt::Debug for Paginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("item_count", &self.item_count)
            .field("current", &self.current)
            .field("out_of_range", &self.out_of_range)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn three_item_walk_wraps_both_ways() {
        let mut deck = Paginator::new(3).unwrap();
        assert_eq!(deck.next(), 1);
        assert_eq!(deck.next(), 2);
        assert_eq!(deck.next(), 0);
        assert_eq!(deck.previous(), 2);
    }

    #[test]
    fn single_item_deck_never_moves() {
        let mut deck = Paginator::new(1).unwrap();
        assert_eq!(deck.next(), 0);
        assert_eq!(deck.previous(), 0);
        assert_eq!(deck.go_to(0), Ok(0));
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert_eq!(Paginator::new(0).unwrap_err(), PaginatorError::Empty);
    }

    #[test]
    fn reject_policy_keeps_index() {
        let mut deck = Paginator::new(3).unwrap();
        deck.next();
        assert_eq!(
            deck.go_to(5),
            Err(PaginatorError::IndexOutOfRange { index: 5, len: 3 })
        );
        assert_eq!(deck.current(), 1);
    }

    #[test]
    fn wrap_policy_normalizes_index() {
        let mut deck = Paginator::with_policy(3, OutOfRange::Wrap).unwrap();
        assert_eq!(deck.go_to(5), Ok(2));
        assert_eq!(deck.go_to(3), Ok(0));
    }

    #[test]
    fn observers_see_every_move_until_unsubscribed() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut deck = Paginator::new(3).unwrap();
        let sink = Arc::clone(&seen);
        let id = deck.subscribe(move |change| sink.lock().unwrap().push(change));

        deck.next();
        deck.previous();
        deck.go_to(2).unwrap();
        assert!(deck.unsubscribe(id));
        deck.next();

        let seen = seen.lock().unwrap();
        let moves: Vec<(usize, usize)> = seen.iter().map(|c| (c.previous, c.current)).collect();
        assert_eq!(moves, vec![(0, 1), (1, 0), (0, 2)]);
        assert!(seen.iter().all(|c| c.item_count == 3));
        assert!(!deck.unsubscribe(id));
    }

    #[test]
    fn staying_put_does_not_notify() {
        let hits = Arc::new(Mutex::new(0));
        let mut deck = Paginator::new(1).unwrap();
        let counter = Arc::clone(&hits);
        deck.subscribe(move |_| *counter.lock().unwrap() += 1);
        deck.next();
        deck.previous();
        assert_eq!(*hits.lock().unwrap(), 0);
    }

    #[test]
    fn policy_deserializes_from_snake_case() {
        let policy: OutOfRange = serde_json::from_str("\"wrap\"").unwrap();
        assert_eq!(policy, OutOfRange::Wrap);
    }

    proptest! {
        #[test]
        fn index_stays_in_range(len in 1usize..50, steps in proptest::collection::vec(any::<bool>(), 0..200)) {
            let mut deck = Paginator::new(len).unwrap();
            for forward in steps {
                if forward { deck.next(); } else { deck.previous(); }
                prop_assert!(deck.current() < len);
            }
        }

        #[test]
        fn next_then_previous_is_identity(len in 1usize..50, start in 0usize..50) {
            let mut deck = Paginator::new(len).unwrap();
            deck.go_to(start % len).unwrap();
            let before = deck.current();
            deck.next();
            deck.previous();
            prop_assert_eq!(deck.current(), before);
        }

        #[test]
        fn full_cycle_returns_home(len in 1usize..50, start in 0usize..50) {
            let mut deck = Paginator::new(len).unwrap();
            deck.go_to(start % len).unwrap();
            let before = deck.current();
            for _ in 0..len {
                deck.next();
            }
            prop_assert_eq!(deck.current(), before);
        }

        #[test]
        fn go_to_in_range_is_exact(len in 1usize..50, k in 0usize..50) {
            let mut deck = Paginator::new(len).unwrap();
            let k = k % len;
            prop_assert_eq!(deck.go_to(k), Ok(k));
            prop_assert_eq!(deck.current(), k);
        }
    }
}
