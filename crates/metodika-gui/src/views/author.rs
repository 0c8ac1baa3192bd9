//! Author profile view
//!
//! Bio, specialization badge, three aggregate stat tiles and the author's
//! material list. Two of the tiles render denormalized source-data fields;
//! only the download total is computed live (see `AuthorProfile`).

use egui::{RichText, Ui};
use metodika_catalog::{Catalog, dates};
use metodika_model::MaterialId;

use crate::state::AppState;
use crate::theme::{colors, spacing};

/// Author profile view
pub struct AuthorView;

impl AuthorView {
    /// Render the profile panel for the selected author.
    pub fn show(ui: &mut Ui, catalog: &Catalog, state: &mut AppState, name: &str) {
        // A name without a profile record renders nothing; load-time
        // validation keeps this from happening with the shipped tables.
        let Some(profile) = catalog.author_profile(name) else {
            tracing::warn!(author = name, "no profile record for selected author");
            return;
        };

        let mut close = false;
        let mut clicked_material: Option<MaterialId> = None;

        egui::Frame::group(ui.style())
            .inner_margin(spacing::MD)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let initial = profile.author.name.chars().next().unwrap_or('?');
                    ui.label(RichText::new(initial.to_string()).size(32.0).strong());
                    ui.vertical(|ui| {
                        ui.heading(&profile.author.name);
                        ui.label(
                            RichText::new(profile.author.specialization.as_str())
                                .small()
                                .strong()
                                .color(colors::BADGE),
                        );
                        ui.label(
                            RichText::new(format!("На платформе с {}", profile.author.joined))
                                .weak()
                                .small(),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        if ui.button(egui_phosphor::regular::X).clicked() {
                            close = true;
                        }
                    });
                });

                ui.add_space(spacing::SM);
                ui.label(&profile.author.bio);
                ui.add_space(spacing::MD);

                ui.columns(3, |columns| {
                    stat_tile(
                        &mut columns[0],
                        u64::from(profile.author.materials_count),
                        "Публикаций",
                    );
                    stat_tile(
                        &mut columns[1],
                        u64::from(profile.author.total_likes),
                        "Лайков",
                    );
                    stat_tile(&mut columns[2], profile.total_downloads, "Загрузок");
                });

                ui.add_space(spacing::MD);
                ui.separator();
                ui.label(RichText::new("Публикации автора").strong());
                ui.add_space(spacing::SM);

                for material in &profile.materials {
                    egui::Frame::group(ui.style())
                        .inner_margin(spacing::SM)
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(material.category.as_str())
                                    .small()
                                    .strong()
                                    .color(colors::BADGE),
                            );
                            if ui
                                .link(RichText::new(&material.title).strong())
                                .clicked()
                            {
                                clicked_material = Some(material.id);
                            }
                            ui.label(&material.description);
                            ui.horizontal(|ui| {
                                stat_label(ui, egui_phosphor::regular::HEART, material.likes);
                                stat_label(
                                    ui,
                                    egui_phosphor::regular::CHAT_CIRCLE,
                                    material.comment_count,
                                );
                                stat_label(
                                    ui,
                                    egui_phosphor::regular::DOWNLOAD_SIMPLE,
                                    material.downloads,
                                );
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        ui.label(
                                            RichText::new(dates::format_long_ru(
                                                material.published,
                                            ))
                                            .weak()
                                            .small(),
                                        );
                                    },
                                );
                            });
                        });
                    ui.add_space(spacing::XS);
                }
            });

        // Handle navigation after borrowing ends. Opening a material from
        // this panel also closes it, the one coupling rule in the state
        // machine.
        if let Some(id) = clicked_material {
            state.selection.open_material_from_author(id);
        }
        if close {
            state.selection.close_author();
        }
    }
}

fn stat_tile(ui: &mut Ui, value: u64, caption: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(value.to_string())
                .size(24.0)
                .strong()
                .color(colors::ACCENT),
        );
        ui.label(RichText::new(caption).weak().small());
    });
}

fn stat_label(ui: &mut Ui, icon: &str, value: u32) {
    ui.label(RichText::new(format!("{icon} {value}")).weak().small());
}
