//! Catalog view
//!
//! Search box, category filter bar, sort dropdown and the material card grid.

use egui::{RichText, Ui};
use metodika_catalog::{Catalog, dates};
use metodika_model::{CategoryFilter, Material, MaterialId, SortKey};

use crate::state::AppState;
use crate::theme::{colors, spacing};

/// What a click inside a material card asks for.
enum CardAction {
    /// Open the material detail panel.
    Open,
    /// Open the author profile. The author button is its own widget, so
    /// clicking it never also opens the material.
    OpenAuthor,
}

/// Catalog view
pub struct CatalogView;

impl CatalogView {
    /// Render the search inputs and the filtered card grid.
    pub fn show(ui: &mut Ui, catalog: &Catalog, state: &mut AppState) {
        // Track clicks and apply them after rendering, once borrows end.
        let mut clicked_material: Option<MaterialId> = None;
        let mut clicked_author: Option<String> = None;

        ui.vertical_centered(|ui| {
            ui.add_space(spacing::LG);
            ui.heading(
                RichText::new("Методические разработки для современных педагогов").size(26.0),
            );
            ui.add_space(spacing::SM);
            ui.label(
                RichText::new(
                    "Обменивайтесь опытом, находите проверенные материалы и развивайте свои \
                     методики вместе с коллегами",
                )
                .weak(),
            );
            ui.add_space(spacing::MD);

            ui.horizontal_top(|ui| {
                ui.label(RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS).weak());
                ui.add(
                    egui::TextEdit::singleline(&mut state.session.search_query)
                        .hint_text("Поиск методических материалов...")
                        .desired_width(480.0),
                );
            });
        });

        ui.add_space(spacing::MD);

        ui.horizontal_wrapped(|ui| {
            for option in CategoryFilter::all() {
                let active = state.session.category == option;
                if ui.selectable_label(active, option.as_str()).clicked() {
                    state.session.category = option;
                }
            }

            ui.separator();
            ui.label(RichText::new(egui_phosphor::regular::ARROWS_DOWN_UP).weak());
            egui::ComboBox::from_id_salt("sort_by")
                .selected_text(state.session.sort_key.label())
                .show_ui(ui, |ui| {
                    for key in SortKey::all() {
                        ui.selectable_value(&mut state.session.sort_key, *key, key.label());
                    }
                });
        });

        ui.add_space(spacing::MD);

        let results = catalog.filter_materials(
            &state.session.search_query,
            state.session.category,
            state.session.sort_key,
        );

        if results.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(spacing::LG);
                ui.label(RichText::new("Ничего не найдено").weak());
            });
        }

        ui.columns(2, |columns| {
            for (index, material) in results.iter().enumerate() {
                let column = &mut columns[index % 2];
                match material_card(column, material) {
                    Some(CardAction::Open) => clicked_material = Some(material.id),
                    Some(CardAction::OpenAuthor) => clicked_author = Some(material.author.clone()),
                    None => {}
                }
                column.add_space(spacing::SM);
            }
        });

        // Handle navigation after borrowing ends
        if let Some(id) = clicked_material {
            state.selection.open_material(id);
        }
        if let Some(name) = clicked_author {
            state.selection.open_author(name);
        }
    }
}

fn material_card(ui: &mut Ui, material: &Material) -> Option<CardAction> {
    let mut action = None;

    egui::Frame::group(ui.style())
        .inner_margin(spacing::MD)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(material.category.as_str())
                        .small()
                        .strong()
                        .color(colors::BADGE),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Like counts are inert; the click is acknowledged nowhere.
                    if ui.button(egui_phosphor::regular::HEART).clicked() {
                        tracing::debug!(material = %material.id, "like clicked, inert");
                    }
                });
            });

            if ui
                .link(RichText::new(&material.title).strong().size(17.0))
                .clicked()
            {
                action = Some(CardAction::Open);
            }
            ui.label(&material.description);
            ui.add_space(spacing::SM);

            ui.horizontal(|ui| {
                if ui
                    .button(format!(
                        "{} {}",
                        egui_phosphor::regular::USER_CIRCLE,
                        material.author
                    ))
                    .clicked()
                {
                    action = Some(CardAction::OpenAuthor);
                }
                ui.label(
                    RichText::new(dates::format_long_ru(material.published))
                        .weak()
                        .small(),
                );
            });

            ui.separator();
            ui.horizontal(|ui| {
                stat_label(ui, egui_phosphor::regular::HEART, material.likes);
                stat_label(ui, egui_phosphor::regular::CHAT_CIRCLE, material.comment_count);
                stat_label(ui, egui_phosphor::regular::DOWNLOAD_SIMPLE, material.downloads);
            });
        });

    action
}

fn stat_label(ui: &mut Ui, icon: &str, value: u32) {
    ui.label(RichText::new(format!("{icon} {value}")).weak().small());
}
