//! Change notification for locale state.
//!
//! The engine exposes plain state plus this subscription interface instead
//! of framework-specific observables; a UI adapter subscribes and re-renders
//! on events. Callbacks run synchronously on the mutating thread, after the
//! state change is applied and before the mutating call returns.

use std::collections::BTreeMap;

/// A change to the engine's locale state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    /// The current locale switched, or was cleared by removing it.
    LocaleChanged { locale: Option<String> },
    /// A locale entry was inserted or replaced.
    LocaleAdded { locale: String },
    /// A locale entry was deleted.
    LocaleRemoved { locale: String },
    /// The fallback locale changed.
    FallbackChanged { locale: Option<String> },
}

/// Handle returned by `subscribe`, used to unsubscribe.
pub type ObserverId = u64;

type Callback = Box<dyn Fn(&ChangeEvent) + Send + Sync>;

/// Observer registry. Callbacks are notified in subscription order.
#[derive(Default)]
pub(crate) struct Registry {
    next_id: ObserverId,
    observers: BTreeMap<ObserverId, Callback>,
}

impl Registry {
    pub(crate) fn subscribe(&mut self, callback: Callback) -> ObserverId {
        let id = self.next_id;
        self.next_id += 1;
        self.observers.insert(id, callback);
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.remove(&id).is_some()
    }

    pub(crate) fn notify(&self, event: &ChangeEvent) {
        for callback in self.observers.values() {
            callback(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::observe::*;

    #[test]
    fn test_notify_in_subscription_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut registry = Registry::default();

        for tag in ["first", "second"] {
            let seen = seen.clone();
            registry.subscribe(Box::new(move |event: &ChangeEvent| {
                seen.lock().unwrap().push((tag, event.clone()));
            }));
        }

        let event = ChangeEvent::LocaleAdded {
            locale: "en".to_string(),
        };
        registry.notify(&event);

        let seen = seen.lock().unwrap();
        assert_eq!(*seen, vec![("first", event.clone()), ("second", event)]);
    }

    #[test]
    fn test_unsubscribe() {
        let seen = Arc::new(Mutex::new(0));
        let mut registry = Registry::default();

        let counter = seen.clone();
        let id = registry.subscribe(Box::new(move |_| {
            *counter.lock().unwrap() += 1;
        }));

        registry.notify(&ChangeEvent::LocaleChanged { locale: None });
        assert!(registry.unsubscribe(id));
        registry.notify(&ChangeEvent::LocaleChanged { locale: None });

        assert_eq!(*seen.lock().unwrap(), 1);
        // Unknown ids are a silent no-op.
        assert!(!registry.unsubscribe(id));
    }
}
