use crate::person::Person;
use crate::store::{RecordStore, RowKey, StoreEvent, StoreObserver};
use crate::table::TablePresentation;

pub const ABOUT_TEXT: &str = "Roster: an egui MenuBar + table demo over in-memory Person records.";

/// Every action the chrome can ask for. Menu items, toolbar buttons,
/// accelerators and row interactions all map onto one of these.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Add,
    DeleteSelected,
    ClearAll,
    Refresh,
    Open,
    Save,
    Exit,
    ToggleToolbar,
    About,
    Search(String),
    Select(RowKey),
    ShowRow(RowKey),
    ViewDetails(RowKey),
    DeleteRow(RowKey),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmAction {
    Delete(RowKey),
    ClearAll,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Dialog {
    Info {
        title: String,
        body: String,
    },
    Confirm {
        title: String,
        body: String,
        action: ConfirmAction,
    },
}

impl Dialog {
    fn info(title: &str, body: impl Into<String>) -> Self {
        Dialog::Info {
            title: title.to_string(),
            body: body.into(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Dialog::Info { title, .. } | Dialog::Confirm { title, .. } => title,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Dialog::Info { body, .. } | Dialog::Confirm { body, .. } => body,
        }
    }
}

/// Left-hand status message. The row count is derived at render time.
#[derive(Debug)]
pub struct StatusBar {
    message: String,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self {
            message: "Ready".to_string(),
        }
    }
}

impl StatusBar {
    pub fn message(&self) -> &str {
        &self.message
    }

    fn set(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}

impl StoreObserver for StatusBar {
    fn store_changed(&mut self, event: &StoreEvent, _store: &RecordStore) {
        self.message = match event {
            StoreEvent::Added { id, .. } => format!("Added row {}", id),
            StoreEvent::Removed { person, .. } => format!("Deleted row {}", person.id),
            StoreEvent::Cleared { removed } => format!("Cleared {} rows", removed),
        };
    }
}

/// Application state and the single place commands mutate it.
#[derive(Debug)]
pub struct Session {
    store: RecordStore,
    table: TablePresentation,
    status: StatusBar,
    dialog: Option<Dialog>,
    show_toolbar: bool,
    exit_requested: bool,
}

impl Session {
    pub fn new(people: Vec<Person>) -> Self {
        Self {
            store: RecordStore::with_people(people),
            table: TablePresentation::new(),
            status: StatusBar::default(),
            dialog: None,
            show_toolbar: true,
            exit_requested: false,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn table(&self) -> &TablePresentation {
        &self.table
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn show_toolbar(&self) -> bool {
        self.show_toolbar
    }

    pub fn set_show_toolbar(&mut self, show: bool) {
        self.show_toolbar = show;
    }

    pub fn status_message(&self) -> &str {
        self.status.message()
    }

    /// "Rows: N" over the whole store, plus the visible count while filtering.
    pub fn row_count_label(&self) -> String {
        let total = self.store.len();
        if self.table.filter().is_active() {
            format!(
                "Rows: {} ({} shown)",
                total,
                self.table.visible_count(&self.store)
            )
        } else {
            format!("Rows: {}", total)
        }
    }

    /// Returns true once, after Exit has been dispatched.
    pub fn take_exit_request(&mut self) -> bool {
        std::mem::take(&mut self.exit_requested)
    }

    /// Runs one command. While a dialog is open nothing else is accepted.
    pub fn dispatch(&mut self, command: Command) {
        if let Some(dialog) = &self.dialog {
            log::debug!(
                "Ignoring {:?} while \"{}\" is open",
                command,
                dialog.title()
            );
            return;
        }

        match &command {
            Command::Search(query) => {
                log::debug!("Filter: {:?}", query);
                self.table.apply_filter(query, &self.store);
                return;
            }
            Command::Select(key) => {
                self.table.select(*key, &self.store);
                return;
            }
            _ => log::info!("Command: {:?}", command),
        }

        match command {
            Command::Add => self.add_row(),
            Command::DeleteSelected => self.delete_selected(),
            Command::ClearAll => {
                self.dialog = Some(Dialog::Confirm {
                    title: "Clear table?".to_string(),
                    body: "This will remove all rows.".to_string(),
                    action: ConfirmAction::ClearAll,
                });
            }
            Command::Refresh => {
                self.table.refresh();
                log::debug!("Table generation {}", self.table.generation());
                self.status.set("Refreshed");
            }
            Command::Open => {
                self.dialog = Some(Dialog::info(
                    "Open clicked",
                    "Hook this up to a file chooser if needed.",
                ));
            }
            Command::Save => {
                self.dialog = Some(Dialog::info(
                    "Save clicked",
                    "Persistence (CSV/DB) is not implemented.",
                ));
            }
            Command::Exit => self.exit_requested = true,
            Command::ToggleToolbar => {
                self.show_toolbar = !self.show_toolbar;
                // The search field lives on the toolbar
                if !self.show_toolbar && self.table.filter().is_active() {
                    self.table.apply_filter("", &self.store);
                }
            }
            Command::About => self.dialog = Some(Dialog::info("About", ABOUT_TEXT)),
            Command::ShowRow(key) => {
                if let Some(person) = self.store.get(key) {
                    self.dialog = Some(Dialog::info("Row double-clicked", person.to_string()));
                }
            }
            Command::ViewDetails(key) => {
                if let Some(person) = self.store.get(key) {
                    self.dialog = Some(Dialog::info("Details", person.to_string()));
                }
            }
            // Context-menu delete skips the confirmation Delete Selected asks for.
            Command::DeleteRow(key) => {
                self.store
                    .remove(key, &mut [&mut self.table, &mut self.status]);
            }
            Command::Search(_) | Command::Select(_) => {}
        }
    }

    /// Answers the open dialog. `confirmed` only matters for confirmations.
    pub fn respond(&mut self, confirmed: bool) {
        let Some(dialog) = self.dialog.take() else {
            return;
        };

        let Dialog::Confirm { action, .. } = dialog else {
            return;
        };

        if !confirmed {
            log::info!("Cancelled {:?}", action);
            self.status.set(match action {
                ConfirmAction::Delete(_) => "Delete cancelled",
                ConfirmAction::ClearAll => "Clear cancelled",
            });
            return;
        }

        match action {
            ConfirmAction::Delete(key) => {
                if self
                    .store
                    .remove(key, &mut [&mut self.table, &mut self.status])
                    .is_none()
                {
                    log::warn!("Confirmed delete of a row that is already gone");
                }
            }
            ConfirmAction::ClearAll => {
                self.store.clear(&mut [&mut self.table, &mut self.status]);
            }
        }
    }

    fn add_row(&mut self) {
        let person = Person::placeholder(self.store.next_id());
        self.store
            .add(person, &mut [&mut self.table, &mut self.status]);
    }

    fn delete_selected(&mut self) {
        let Some((key, person)) = self
            .table
            .selected()
            .and_then(|key| self.store.get(key).map(|person| (key, person)))
        else {
            self.dialog = Some(Dialog::info("Nothing selected", "Select a row first."));
            return;
        };

        self.dialog = Some(Dialog::Confirm {
            title: "Delete row?".to_string(),
            body: format!("Delete {}?", person.full_name()),
            action: ConfirmAction::Delete(key),
        });
    }
}
