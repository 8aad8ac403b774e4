use crate::person::Person;

/// Id handed out when the store holds nobody.
pub const BASE_ID: u32 = 1000;

/// Opaque handle for one inserted record. Person ids may repeat, keys never do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowKey(u64);

#[derive(Clone, Debug, PartialEq)]
pub enum StoreEvent {
    Added { key: RowKey, id: u32 },
    Removed { key: RowKey, person: Person },
    Cleared { removed: usize },
}

/// Anything that has to react to a store mutation before the mutation returns.
pub trait StoreObserver {
    fn store_changed(&mut self, event: &StoreEvent, store: &RecordStore);
}

#[derive(Debug, Default)]
pub struct RecordStore {
    rows: Vec<(RowKey, Person)>,
    next_key: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_people(people: impl IntoIterator<Item = Person>) -> Self {
        let mut store = Self::new();
        for person in people {
            store.push(person);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (RowKey, &Person)> {
        self.rows.iter().map(|(key, person)| (*key, person))
    }

    pub fn get(&self, key: RowKey) -> Option<&Person> {
        self.rows
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, person)| person)
    }

    /// `max(existing ids, 1000) + 1`
    pub fn next_id(&self) -> u32 {
        self.rows
            .iter()
            .map(|(_, person)| person.id)
            .max()
            .unwrap_or(BASE_ID)
            .saturating_add(1)
    }

    pub fn add(&mut self, person: Person, observers: &mut [&mut dyn StoreObserver]) -> RowKey {
        let id = person.id;
        let key = self.push(person);
        self.notify(&StoreEvent::Added { key, id }, observers);
        key
    }

    /// Removes the record behind `key`. Unknown keys are a no-op returning `None`.
    pub fn remove(
        &mut self,
        key: RowKey,
        observers: &mut [&mut dyn StoreObserver],
    ) -> Option<Person> {
        let index = self.rows.iter().position(|(k, _)| *k == key)?;
        let (_, person) = self.rows.remove(index);
        self.notify(
            &StoreEvent::Removed {
                key,
                person: person.clone(),
            },
            observers,
        );
        Some(person)
    }

    pub fn clear(&mut self, observers: &mut [&mut dyn StoreObserver]) -> usize {
        let removed = self.rows.len();
        self.rows.clear();
        self.notify(&StoreEvent::Cleared { removed }, observers);
        removed
    }

    fn push(&mut self, person: Person) -> RowKey {
        let key = RowKey(self.next_key);
        self.next_key += 1;
        self.rows.push((key, person));
        key
    }

    fn notify(&self, event: &StoreEvent, observers: &mut [&mut dyn StoreObserver]) {
        log::trace!("Store event: {:?}", event);
        for observer in observers.iter_mut() {
            observer.store_changed(event, self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<StoreEvent>,
        lengths: Vec<usize>,
    }

    impl StoreObserver for Recorder {
        fn store_changed(&mut self, event: &StoreEvent, store: &RecordStore) {
            self.events.push(event.clone());
            self.lengths.push(store.len());
        }
    }

    fn person(id: u32) -> Person {
        Person::new(id, "First", "Last", "Role", "first@example.com")
    }

    #[test]
    fn add_appends_and_notifies_after_mutation() {
        // Given a store with one record
        let mut store = RecordStore::with_people([person(1)]);
        let mut recorder = Recorder::default();

        // When we add another
        let key = store.add(person(2), &mut [&mut recorder]);

        // Then it lands at the end and the observer saw the new length
        let ids: Vec<u32> = store.iter().map(|(_, p)| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(recorder.events, vec![StoreEvent::Added { key, id: 2 }]);
        assert_eq!(recorder.lengths, vec![2]);
    }

    #[test]
    fn remove_is_by_identity_not_by_id() {
        // Given two records sharing an id
        let mut store = RecordStore::new();
        let first = store.add(person(5), &mut []);
        let second = store.add(person(5), &mut []);

        // When we remove the second
        let removed = store.remove(second, &mut []);

        // Then only that one is gone
        assert_eq!(removed, Some(person(5)));
        assert!(store.get(first).is_some());
        assert!(store.get(second).is_none());
    }

    #[test]
    fn removing_unknown_key_is_a_silent_no_op() {
        let mut store = RecordStore::with_people([person(1)]);
        let key = store.iter().map(|(k, _)| k).next().expect("one row");
        store.remove(key, &mut []);

        let mut recorder = Recorder::default();
        assert_eq!(store.remove(key, &mut [&mut recorder]), None);
        assert!(recorder.events.is_empty());
    }

    #[test]
    fn clear_empties_and_reports_count() {
        let mut store = RecordStore::with_people([person(1), person(2), person(3)]);
        let mut recorder = Recorder::default();

        let removed = store.clear(&mut [&mut recorder]);

        assert_eq!(removed, 3);
        assert!(store.is_empty());
        assert_eq!(recorder.events, vec![StoreEvent::Cleared { removed: 3 }]);
        assert_eq!(recorder.lengths, vec![0]);
    }

    #[test]
    fn next_id_continues_from_max_or_starts_at_1001() {
        assert_eq!(RecordStore::new().next_id(), 1001);

        let store = RecordStore::with_people([person(1003), person(1001), person(7)]);
        assert_eq!(store.next_id(), 1004);
    }

    #[test]
    fn keys_are_not_reused_after_clear() {
        let mut store = RecordStore::new();
        let before = store.add(person(1), &mut []);
        store.clear(&mut []);
        let after = store.add(person(1), &mut []);

        assert_ne!(before, after);
    }
}
