use super::waypoint::SectionId;

type Listener = Box<dyn FnMut(SectionId, Option<SectionId>)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

/// Observable holder of the active section.
///
/// Shared as `Rc<RefCell<SectionStore>>`. Listeners receive
/// `(current, previous)` and fire only on real transitions.
#[derive(Default)]
pub struct SectionStore {
    current: Option<SectionId>,
    previous: Option<SectionId>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u32,
    transitions: u64,
}

impl SectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current(&self) -> Option<SectionId> {
        self.current
    }

    /// Current section, or the first one before anything was resolved.
    #[inline]
    pub fn current_or_home(&self) -> SectionId {
        self.current.unwrap_or(SectionId::Home)
    }

    #[inline]
    pub fn previous(&self) -> Option<SectionId> {
        self.previous
    }

    /// Number of transitions published so far.
    #[inline]
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    /// Returns `true` if `id` differs from the current section and listeners
    /// were notified.
    pub fn set_current(&mut self, id: SectionId) -> bool {
        if self.current == Some(id) {
            return false;
        }
        self.previous = self.current;
        self.current = Some(id);
        self.transitions += 1;
        let previous = self.previous;
        for (_, listener) in &mut self.listeners {
            listener(id, previous);
        }
        true
    }

    pub fn subscribe(
        &mut self,
        listener: impl FnMut(SectionId, Option<SectionId>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }
}
