//! Main application struct and eframe::App implementation

use eframe::egui;
use egui::RichText;
use metodika_catalog::Catalog;

use crate::state::AppState;
use crate::theme::{colors, spacing};
use crate::views::{AuthorView, CatalogView, MaterialView};

/// Main application struct
pub struct MetodikaApp {
    catalog: Catalog,
    state: AppState,
}

impl MetodikaApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, catalog: Catalog) -> Self {
        // Initialize Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        Self {
            catalog,
            state: AppState::default(),
        }
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(egui_phosphor::regular::BOOK_OPEN)
                    .size(24.0)
                    .color(colors::ACCENT),
            );
            ui.heading("МетодКопилка");
            ui.label(RichText::new("Портал для педагогов").weak());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(format!("{} Авторы", egui_phosphor::regular::USERS))
                    .clicked()
                {
                    // The nav link opens the first profile and closes any
                    // open material, same as the close-then-open pair.
                    if let Some(author) = self.catalog.authors().next() {
                        self.state.selection.close_material();
                        self.state.selection.open_author(author.name.clone());
                    }
                }
            });
        });
        ui.separator();
    }

    /// Handle global keyboard shortcuts
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Escape - close the material panel first, then the author panel
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            if self.state.selection.material().is_some() {
                self.state.selection.close_material();
            } else if self.state.selection.author().is_some() {
                self.state.selection.close_author();
            }
        }
    }
}

impl eframe::App for MetodikaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_header(ui);

            egui::ScrollArea::vertical().show(ui, |ui| {
                CatalogView::show(ui, &self.catalog, &mut self.state);

                // Both panels can be open at once; the author panel renders
                // above the material panel, as the catalog page lays it out.
                if let Some(author) = self.state.selection.author().map(str::to_owned) {
                    ui.add_space(spacing::LG);
                    AuthorView::show(ui, &self.catalog, &mut self.state, &author);
                }
                if let Some(material) = self.state.selection.material() {
                    ui.add_space(spacing::LG);
                    MaterialView::show(ui, &mut self.catalog, &mut self.state, material);
                }
            });
        });
    }
}
