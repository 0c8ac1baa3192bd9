//! Material detail view
//!
//! One open material: description, inert download/like actions, the comment
//! thread and the draft editor.

use chrono::Local;
use egui::{RichText, Ui};
use metodika_catalog::{Catalog, dates};
use metodika_model::{Comment, MaterialId};

use crate::state::AppState;
use crate::theme::{colors, spacing};

/// Material detail view
pub struct MaterialView;

impl MaterialView {
    /// Render the detail panel for the selected material.
    pub fn show(ui: &mut Ui, catalog: &mut Catalog, state: &mut AppState, id: MaterialId) {
        let Some(material) = catalog.material(id).cloned() else {
            tracing::warn!(material = %id, "selected material missing from the table");
            state.selection.close_material();
            return;
        };
        let thread: Vec<Comment> = catalog.comments_for(id).into_iter().cloned().collect();

        let mut close = false;
        let mut clicked_author: Option<String> = None;
        let mut submit = false;

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
                        if ui.button(egui_phosphor::regular::X).clicked() {
                            close = true;
                        }
                    });
                });

                ui.heading(&material.title);
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
                        clicked_author = Some(material.author.clone());
                    }
                    ui.label(
                        RichText::new(dates::format_long_ru(material.published))
                            .weak()
                            .small(),
                    );
                });

                ui.add_space(spacing::SM);
                ui.horizontal(|ui| {
                    // Download and like actions are inert in this build.
                    if ui
                        .button(format!(
                            "{} Скачать материал",
                            egui_phosphor::regular::DOWNLOAD_SIMPLE
                        ))
                        .clicked()
                    {
                        tracing::debug!(material = %id, "download clicked, inert");
                    }
                    if ui
                        .button(format!("{} {}", egui_phosphor::regular::HEART, material.likes))
                        .clicked()
                    {
                        tracing::debug!(material = %id, "like clicked, inert");
                    }
                });

                ui.separator();
                ui.label(
                    RichText::new(format!(
                        "{} Обсуждение ({})",
                        egui_phosphor::regular::CHAT_CIRCLE,
                        thread.len()
                    ))
                    .strong(),
                );
                ui.add_space(spacing::SM);

                for comment in &thread {
                    comment_row(ui, comment);
                    ui.add_space(spacing::XS);
                }

                ui.add_space(spacing::SM);
                ui.label(RichText::new("Добавить комментарий").strong());
                ui.add(
                    egui::TextEdit::multiline(&mut state.session.comment_draft)
                        .hint_text("Поделитесь своим опытом использования методики...")
                        .desired_rows(4)
                        .desired_width(f32::INFINITY),
                );

                let can_send = !state.session.comment_draft.trim().is_empty();
                if ui
                    .add_enabled(
                        can_send,
                        egui::Button::new(format!(
                            "{} Отправить",
                            egui_phosphor::regular::PAPER_PLANE_TILT
                        )),
                    )
                    .clicked()
                {
                    submit = true;
                }
            });

        // Handle mutation and navigation after borrowing ends
        if submit {
            let today = Local::now().date_naive();
            if catalog
                .add_comment(id, &state.session.comment_draft, today)
                .is_some()
            {
                state.session.comment_draft.clear();
            }
        }
        if let Some(name) = clicked_author {
            state.selection.open_author(name);
        }
        if close {
            state.selection.close_material();
        }
    }
}

fn comment_row(ui: &mut Ui, comment: &Comment) {
    egui::Frame::group(ui.style())
        .inner_margin(spacing::SM)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&comment.author).strong().small());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(dates::format_long_ru(comment.posted))
                            .weak()
                            .small(),
                    );
                });
            });
            ui.label(&comment.text);
        });
}
