//! # Listener Registry
//!
//! Replaces implicit reactivity with explicit callbacks. Dispatch clones the
//! listener list first, so a listener may subscribe, unsubscribe or call back
//! into the emitter without deadlocking.

use std::sync::Arc;

use crate::event::EmitterEvent;

/// Callback invoked after each buffer mutation.
pub type Listener = Arc<dyn Fn(&EmitterEvent) + Send + Sync>;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Ordered set of listeners. Dispatch order is subscription order.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl ListenerRegistry {
    pub(crate) fn insert(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Copies the current listeners out for lock-free dispatch.
    pub(crate) fn snapshot(&self) -> Vec<Listener> {
        self.entries.iter().map(|(_, l)| Arc::clone(l)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(counter: &Arc<AtomicUsize>) -> Listener {
        let counter = Arc::clone(counter);
        Arc::new(move |_: &EmitterEvent| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_ids_are_unique() {
        let mut registry = ListenerRegistry::default();
        let counter = Arc::new(AtomicUsize::new(0));
        let a = registry.insert(counting(&counter));
        let b = registry.insert(counting(&counter));
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_remove_is_exact() {
        let mut registry = ListenerRegistry::default();
        let counter = Arc::new(AtomicUsize::new(0));
        let a = registry.insert(counting(&counter));
        let b = registry.insert(counting(&counter));

        assert!(registry.remove(a));
        assert!(!registry.remove(a));
        assert_eq!(registry.len(), 1);

        for listener in registry.snapshot() {
            listener(&EmitterEvent::Cleared { dropped: 0 });
        }
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(registry.remove(b));
    }
}
