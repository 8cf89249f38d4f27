use std::sync::RwLock;

type Listener = Box<dyn Fn() + Send + Sync>;

/// Holds the listeners interested in "the list changed". Delivery is
/// synchronous and in registration order; there is no payload and no
/// buffering of missed notifications.
#[derive(Default)]
pub struct ListChangedNotifier {
    listeners: RwLock<Vec<Listener>>,
}

impl ListChangedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) {
        self.listeners
            .write()
            .expect("listener lock poisoned")
            .push(Box::new(listener));
    }

    pub fn notify_list_changed(&self) {
        let listeners = self.listeners.read().expect("listener lock poisoned");
        for listener in listeners.iter() {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().expect("listener lock poisoned").len()
    }
}
