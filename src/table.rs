use crate::filter::Filter;
use crate::person::Person;
use crate::store::{RecordStore, RowKey, StoreEvent, StoreObserver};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    RowNumber,
    Id,
    FirstName,
    LastName,
    Role,
    Email,
}

#[derive(Clone, Copy, Debug)]
pub struct Column {
    pub kind: ColumnKind,
    pub header: &'static str,
    pub width: f32,
}

pub const COLUMNS: [Column; 6] = [
    Column {
        kind: ColumnKind::RowNumber,
        header: "#",
        width: 55.0,
    },
    Column {
        kind: ColumnKind::Id,
        header: "ID",
        width: 90.0,
    },
    Column {
        kind: ColumnKind::FirstName,
        header: "First Name",
        width: 180.0,
    },
    Column {
        kind: ColumnKind::LastName,
        header: "Last Name",
        width: 180.0,
    },
    Column {
        kind: ColumnKind::Role,
        header: "Role",
        width: 180.0,
    },
    Column {
        kind: ColumnKind::Email,
        header: "Email",
        width: 260.0,
    },
];

/// A record as currently shown. `number` is its 1-based position in the visible rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleRow<'a> {
    pub number: usize,
    pub key: RowKey,
    pub person: &'a Person,
}

impl VisibleRow<'_> {
    pub fn cell(&self, column: ColumnKind) -> String {
        match column {
            ColumnKind::RowNumber => self.number.to_string(),
            ColumnKind::Id => self.person.id.to_string(),
            ColumnKind::FirstName => self.person.first_name.clone(),
            ColumnKind::LastName => self.person.last_name.clone(),
            ColumnKind::Role => self.person.role.clone(),
            ColumnKind::Email => self.person.email.clone(),
        }
    }
}

/// View state over the store: current filter, the single selection, and a
/// counter bumped whenever the rows have to be redrawn.
#[derive(Debug, Default)]
pub struct TablePresentation {
    filter: Filter,
    selected: Option<RowKey>,
    generation: u64,
}

impl TablePresentation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always re-derived from the whole store, never from a previous view.
    pub fn visible_rows<'a>(&self, store: &'a RecordStore) -> Vec<VisibleRow<'a>> {
        store
            .iter()
            .filter(|(_, person)| self.filter.matches(person))
            .enumerate()
            .map(|(index, (key, person))| VisibleRow {
                number: index + 1,
                key,
                person,
            })
            .collect()
    }

    pub fn visible_count(&self, store: &RecordStore) -> usize {
        store
            .iter()
            .filter(|(_, person)| self.filter.matches(person))
            .count()
    }

    pub fn is_visible(&self, key: RowKey, store: &RecordStore) -> bool {
        store
            .get(key)
            .is_some_and(|person| self.filter.matches(person))
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn apply_filter(&mut self, query: &str, store: &RecordStore) {
        self.filter = Filter::new(query);
        if let Some(key) = self.selected {
            if !self.is_visible(key, store) {
                self.selected = None;
            }
        }
        self.generation += 1;
    }

    pub fn selected(&self) -> Option<RowKey> {
        self.selected
    }

    /// Selects a visible row. Hidden or unknown rows leave the selection untouched.
    pub fn select(&mut self, key: RowKey, store: &RecordStore) -> bool {
        if self.is_visible(key, store) {
            self.selected = Some(key);
            true
        } else {
            false
        }
    }

    pub fn refresh(&mut self) {
        self.generation += 1;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl StoreObserver for TablePresentation {
    fn store_changed(&mut self, event: &StoreEvent, _store: &RecordStore) {
        match event {
            StoreEvent::Removed { key, .. } if self.selected == Some(*key) => {
                self.selected = None;
            }
            StoreEvent::Cleared { .. } => self.selected = None,
            _ => {}
        }
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> RecordStore {
        RecordStore::with_people([
            Person::new(
                1001,
                "Anthony",
                "Randazzo",
                "IT Support",
                "arandazzo@example.com",
            ),
            Person::new(1002, "Jane", "Doe", "Analyst", "jdoe@example.com"),
            Person::new(1003, "John", "Smith", "Developer", "jsmith@example.com"),
        ])
    }

    fn key_of(store: &RecordStore, id: u32) -> RowKey {
        store
            .iter()
            .find(|(_, p)| p.id == id)
            .map(|(k, _)| k)
            .expect("id should be in store")
    }

    fn numbers(rows: &[VisibleRow]) -> Vec<usize> {
        rows.iter().map(|r| r.number).collect()
    }

    #[test]
    fn filter_doe_then_clear_restores_order() {
        // Given the seed
        let store = seeded();
        let mut table = TablePresentation::new();

        // When we search for "doe"
        table.apply_filter("doe", &store);

        // Then only Jane Doe is shown, numbered 1
        let rows = table.visible_rows(&store);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].person.full_name(), "Jane Doe");
        assert_eq!(rows[0].number, 1);

        // And clearing the query brings back all three in order
        table.apply_filter("", &store);
        let ids: Vec<u32> = table
            .visible_rows(&store)
            .iter()
            .map(|r| r.person.id)
            .collect();
        assert_eq!(ids, vec![1001, 1002, 1003]);
    }

    #[test]
    fn narrowing_query_can_be_widened_again() {
        let store = seeded();
        let mut table = TablePresentation::new();

        table.apply_filter("j", &store);
        assert_eq!(table.visible_count(&store), 2);
        table.apply_filter("jsm", &store);
        assert_eq!(table.visible_count(&store), 1);
        table.apply_filter("j", &store);
        assert_eq!(table.visible_count(&store), 2);
    }

    #[test]
    fn row_numbers_have_no_gaps_after_removal() {
        let mut store = seeded();
        let mut table = TablePresentation::new();

        let middle = key_of(&store, 1002);
        store.remove(middle, &mut [&mut table]);

        assert_eq!(numbers(&table.visible_rows(&store)), vec![1, 2]);

        table.apply_filter("example.com", &store);
        assert_eq!(numbers(&table.visible_rows(&store)), vec![1, 2]);
    }

    #[test]
    fn removing_selected_row_clears_selection() {
        let mut store = seeded();
        let mut table = TablePresentation::new();
        let key = key_of(&store, 1003);
        assert!(table.select(key, &store));

        store.remove(key, &mut [&mut table]);

        assert_eq!(table.selected(), None);
    }

    #[test]
    fn removing_other_row_keeps_selection() {
        let mut store = seeded();
        let mut table = TablePresentation::new();
        let selected = key_of(&store, 1003);
        table.select(selected, &store);

        store.remove(key_of(&store, 1001), &mut [&mut table]);

        assert_eq!(table.selected(), Some(selected));
    }

    #[test]
    fn clearing_store_clears_selection() {
        let mut store = seeded();
        let mut table = TablePresentation::new();
        table.select(key_of(&store, 1001), &store);

        store.clear(&mut [&mut table]);

        assert_eq!(table.selected(), None);
        assert!(table.visible_rows(&store).is_empty());
    }

    #[test]
    fn filtering_out_selected_row_clears_selection() {
        let store = seeded();
        let mut table = TablePresentation::new();
        table.select(key_of(&store, 1001), &store);

        table.apply_filter("doe", &store);

        assert_eq!(table.selected(), None);
    }

    #[test]
    fn hidden_rows_cannot_be_selected() {
        let store = seeded();
        let mut table = TablePresentation::new();
        table.apply_filter("doe", &store);

        assert!(!table.select(key_of(&store, 1003), &store));
        assert_eq!(table.selected(), None);
    }

    #[test]
    fn cells_follow_column_order() {
        let store = seeded();
        let table = TablePresentation::new();
        let rows = table.visible_rows(&store);

        let cells: Vec<String> = COLUMNS.iter().map(|c| rows[1].cell(c.kind)).collect();
        assert_eq!(
            cells,
            vec!["2", "1002", "Jane", "Doe", "Analyst", "jdoe@example.com"]
        );
    }

    #[test]
    fn refresh_bumps_generation_without_touching_rows() {
        let store = seeded();
        let mut table = TablePresentation::new();
        let before = table.generation();

        table.refresh();

        assert!(table.generation() > before);
        assert_eq!(table.visible_count(&store), 3);
    }
}
