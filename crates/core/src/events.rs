use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use luxwear_protocol::PageEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&PageEvent)>;

/// Callback list for [`PageEvent`]s.
///
/// Listeners may subscribe, unsubscribe or trigger further events while
/// being notified. Events raised during dispatch are queued and delivered
/// in order once the current one has reached every listener.
#[derive(Default)]
pub struct EventBus {
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
    queue: RefCell<VecDeque<PageEvent>>,
    dispatching: Cell<bool>,
}

impl EventBus {
    pub fn subscribe(&self, listener: impl Fn(&PageEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Returns whether `id` was subscribed. A listener removed mid-dispatch
    /// still sees the event being dispatched.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(key, _)| *key != id);
        listeners.len() != before
    }

    pub fn emit(&self, event: PageEvent) {
        self.queue.borrow_mut().push_back(event);
        if self.dispatching.replace(true) {
            return;
        }
        loop {
            let Some(event) = self.queue.borrow_mut().pop_front() else {
                break;
            };
            let listeners: Vec<Listener> = self
                .listeners
                .borrow()
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();
            for listener in listeners {
                listener(&event);
            }
        }
        self.dispatching.set(false);
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
