use crate::app::{Action, AppState, Outcome, Snapshot};

/// Callback invoked with a fresh snapshot after every visible change
pub type Listener = Box<dyn FnMut(&Snapshot)>;

/// Handle returned by `Screen::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

/// State container for the task screen.
///
/// All mutations go through `dispatch`, which runs the transition on
/// `AppState` and then notifies subscribers with a snapshot. Renderers are
/// subscribers; they never hold on to the live state.
pub struct Screen {
    state: AppState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: usize,
}

impl Screen {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Apply an action and notify subscribers unless it was ignored
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let outcome = self.state.apply(action);
        if outcome.is_visible() {
            self.notify();
        }
        outcome
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }

        let snapshot = self.state.snapshot();
        for (_, listener) in self.listeners.iter_mut() {
            listener(&snapshot);
        }
    }
}
