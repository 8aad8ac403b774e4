use eframe::egui;
use egui::{Key, KeyboardShortcut, Modifiers};

use crate::session::{Command, Dialog, Session};
use crate::table::{ColumnKind, COLUMNS};

const NEW_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::N);
const OPEN_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::O);
const SAVE_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);
const DELETE_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::NONE, Key::Delete);

const ROW_HEIGHT: f32 = 22.0;

pub struct RosterApp {
    session: Session,
    search: String,
}

impl RosterApp {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            search: String::new(),
        }
    }
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut commands = Vec::new();
        let modal = self.session.dialog().is_some();
        let show_toolbar = self.session.show_toolbar();

        if !modal {
            collect_shortcuts(ctx, &mut commands);
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.add_enabled_ui(!modal, |ui| {
                menu_bar(ui, show_toolbar, &mut commands);
            });
        });

        egui::TopBottomPanel::top("toolbar").show_animated(ctx, show_toolbar, |ui| {
            ui.add_enabled_ui(!modal, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("➕ Add").clicked() {
                        commands.push(Command::Add);
                    }
                    if ui.button("🗑 Delete").clicked() {
                        commands.push(Command::DeleteSelected);
                    }
                    if ui.button("🔄 Refresh").clicked() {
                        commands.push(Command::Refresh);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let search = ui.add(
                            egui::TextEdit::singleline(&mut self.search)
                                .hint_text("Search (name/email)...")
                                .desired_width(240.0),
                        );
                        if search.changed() {
                            commands.push(Command::Search(self.search.clone()));
                        }
                    });
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(self.session.status_message())
                        .color(egui::Color32::LIGHT_GRAY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(self.session.row_count_label()).strong());
                });
            });
        });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(egui::Color32::from_rgb(19, 28, 36))
                    .inner_margin(12.0),
            )
            .show(ctx, |ui| {
                ui.add_enabled_ui(!modal, |ui| {
                    people_table(ui, &self.session, &mut commands);
                });
            });

        if let Some(dialog) = self.session.dialog() {
            if let Some(confirmed) = show_dialog(ctx, dialog) {
                self.session.respond(confirmed);
            }
        }

        for command in commands {
            self.session.dispatch(command);
        }

        // Hiding the toolbar drops the query, keep the field in step
        if !self.session.show_toolbar() {
            self.search.clear();
        }

        if self.session.take_exit_request() {
            log::info!("Exit requested");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

fn collect_shortcuts(ctx: &egui::Context, commands: &mut Vec<Command>) {
    // Let text fields keep Delete and friends while they have focus
    if ctx.wants_keyboard_input() {
        return;
    }

    ctx.input_mut(|i| {
        if i.consume_shortcut(&NEW_SHORTCUT) {
            commands.push(Command::Add);
        }
        if i.consume_shortcut(&OPEN_SHORTCUT) {
            commands.push(Command::Open);
        }
        if i.consume_shortcut(&SAVE_SHORTCUT) {
            commands.push(Command::Save);
        }
        if i.consume_shortcut(&DELETE_SHORTCUT) {
            commands.push(Command::DeleteSelected);
        }
    });
}

fn menu_item(ui: &mut egui::Ui, label: &str, shortcut: Option<&KeyboardShortcut>) -> bool {
    let mut button = egui::Button::new(label);
    if let Some(shortcut) = shortcut {
        button = button.shortcut_text(ui.ctx().format_shortcut(shortcut));
    }

    let clicked = ui.add(button).clicked();
    if clicked {
        ui.close_menu();
    }
    clicked
}

fn menu_bar(ui: &mut egui::Ui, show_toolbar: bool, commands: &mut Vec<Command>) {
    egui::menu::bar(ui, |ui| {
        ui.menu_button("File", |ui| {
            if menu_item(ui, "New", Some(&NEW_SHORTCUT)) {
                commands.push(Command::Add);
            }
            if menu_item(ui, "Open", Some(&OPEN_SHORTCUT)) {
                commands.push(Command::Open);
            }
            if menu_item(ui, "Save", Some(&SAVE_SHORTCUT)) {
                commands.push(Command::Save);
            }
            ui.separator();
            if menu_item(ui, "Exit", None) {
                commands.push(Command::Exit);
            }
        });

        ui.menu_button("Edit", |ui| {
            if menu_item(ui, "Add Row", None) {
                commands.push(Command::Add);
            }
            if menu_item(ui, "Delete Selected", Some(&DELETE_SHORTCUT)) {
                commands.push(Command::DeleteSelected);
            }
            ui.separator();
            if menu_item(ui, "Clear All", None) {
                commands.push(Command::ClearAll);
            }
        });

        ui.menu_button("View", |ui| {
            let mut checked = show_toolbar;
            if ui.checkbox(&mut checked, "Show Toolbar").clicked() {
                commands.push(Command::ToggleToolbar);
                ui.close_menu();
            }
        });

        ui.menu_button("Help", |ui| {
            if menu_item(ui, "About", None) {
                commands.push(Command::About);
            }
        });
    });
}

fn people_table(ui: &mut egui::Ui, session: &Session, commands: &mut Vec<Command>) {
    let table = session.table();
    let rows = table.visible_rows(session.store());
    let selected = table.selected();

    egui::ScrollArea::both()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            egui::Grid::new("people_table")
                .striped(true)
                .num_columns(COLUMNS.len())
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    for column in &COLUMNS {
                        ui.add_sized(
                            [column.width, ROW_HEIGHT],
                            egui::Label::new(
                                egui::RichText::new(column.header)
                                    .strong()
                                    .color(egui::Color32::from_rgb(60, 180, 255)),
                            ),
                        );
                    }
                    ui.end_row();

                    for row in &rows {
                        let is_selected = selected == Some(row.key);
                        let mut response: Option<egui::Response> = None;

                        for column in &COLUMNS {
                            let text = row.cell(column.kind);
                            let text = if column.kind == ColumnKind::RowNumber {
                                egui::RichText::new(text).color(egui::Color32::GRAY)
                            } else {
                                egui::RichText::new(text)
                            };
                            let cell = ui.add_sized(
                                [column.width, ROW_HEIGHT],
                                egui::SelectableLabel::new(is_selected, text),
                            );
                            response = Some(match response {
                                Some(row_response) => row_response.union(cell),
                                None => cell,
                            });
                        }
                        ui.end_row();

                        let Some(response) = response else {
                            continue;
                        };

                        if response.double_clicked() {
                            commands.push(Command::ShowRow(row.key));
                        } else if response.clicked() || response.secondary_clicked() {
                            commands.push(Command::Select(row.key));
                        }

                        response.context_menu(|ui| {
                            if ui.button("View Details").clicked() {
                                commands.push(Command::ViewDetails(row.key));
                                ui.close_menu();
                            }
                            if ui.button("Delete").clicked() {
                                commands.push(Command::DeleteRow(row.key));
                                ui.close_menu();
                            }
                        });
                    }
                });

            if rows.is_empty() {
                let placeholder = if session.store().is_empty() {
                    "No content in table"
                } else {
                    "No rows match the search"
                };
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(placeholder)
                            .size(16.0)
                            .color(egui::Color32::GRAY),
                    );
                });
            }
        });
}

/// Draws the open dialog. Returns the user's answer once they give one.
fn show_dialog(ctx: &egui::Context, dialog: &Dialog) -> Option<bool> {
    let mut answer = None;

    egui::Window::new(dialog.title())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(dialog.body()).size(15.0));
            ui.add_space(10.0);
            ui.horizontal(|ui| match dialog {
                Dialog::Info { .. } => {
                    if ui.button("OK").clicked() {
                        answer = Some(true);
                    }
                }
                Dialog::Confirm { .. } => {
                    if ui
                        .add(
                            egui::Button::new("OK")
                                .fill(egui::Color32::from_rgb(44, 97, 167))
                                .rounding(5.0),
                        )
                        .clicked()
                    {
                        answer = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        answer = Some(false);
                    }
                }
            });
        });

    if answer.is_none() && ctx.input(|i| i.key_pressed(Key::Escape)) {
        answer = Some(false);
    }
    if answer.is_none() && ctx.input(|i| i.key_pressed(Key::Enter)) {
        answer = Some(true);
    }
    answer
}
