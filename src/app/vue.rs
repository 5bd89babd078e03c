// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Menu d’opérations, champs selon l’arité, bouton de calcul
// - Clavier : Enter calcule (quand un champ est focus)
// - Historique : K dernières entrées, la plus récente en tête

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::format::format_nombre;
use crate::noyau::{Issue, Operation};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Scientific Calculator");
                ui.add_space(6.0);

                let mut radians = self.radians();
                if ui
                    .checkbox(&mut radians, "Use radians (unchecked = degrees)")
                    .changed()
                {
                    self.set_radians(radians);
                }

                ui.add_space(6.0);
                self.ui_menu(ui);

                ui.add_space(8.0);
                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    fn ui_menu(&mut self, ui: &mut egui::Ui) {
        let mut choix = self.operation;
        egui::ComboBox::from_label("Choose an operation:")
            .selected_text(choix.libelle())
            .width(240.0)
            .show_ui(ui, |ui| {
                for op in Operation::TOUTES {
                    ui.selectable_value(&mut choix, op, op.libelle());
                }
            });
        self.set_operation(choix);
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        let invites = self.operation.invites();
        let mut enter = false;

        for (k, invite) in invites.iter().enumerate() {
            ui.label(*invite);
            let resp = ui.add(
                egui::TextEdit::singleline(&mut self.champs[k])
                    .desired_width(ui.available_width())
                    .id_salt(("champ", k))
                    .code_editor(),
            );

            // après un clic bouton, on redonne le focus au premier champ
            if k == 0 && self.focus_entree {
                resp.request_focus();
                self.focus_entree = false;
            }

            if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                enter = true;
            }
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let calc = ui.add_sized([120.0, 30.0], egui::Button::new("Calculate"));
            if calc.clicked() || enter {
                self.calculer();
            }

            let clr = ui
                .add_sized([120.0, 30.0], egui::Button::new("Clear inputs"))
                .on_hover_text("Clears the inputs only (Esc)");
            if clr.clicked() {
                self.clear_entree();
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_resultats(&self, ui: &mut egui::Ui) {
        ui.label("Result :");
        match &self.issue {
            None => {
                ui.monospace("—");
            }
            Some(Issue::Erreur(e)) if e.est_info() => {
                ui.colored_label(ui.visuals().warn_fg_color, e.to_string());
            }
            Some(Issue::Erreur(e)) => {
                ui.colored_label(ui.visuals().error_fg_color, e.to_string());
            }
            Some(issue) => {
                Self::champ_monospace(ui, "resultat_out", &issue.to_string(), 1);
            }
        }

        if !self.exact.is_empty() {
            ui.add_space(6.0);
            ui.label("Exact :");
            Self::champ_monospace(ui, "exact_out", &self.exact, 2);
        }

        ui.add_space(6.0);
        let memoire = match self.session.memoire() {
            Some(m) => format!("Memory: {}", format_nombre(m)),
            None => "Memory is empty".to_string(),
        };
        ui.monospace(memoire);
    }

    fn ui_historique(&self, ui: &mut egui::Ui) {
        let h = self.session.historique();
        egui::CollapsingHeader::new(format!("Show calculation history ({})", h.len()))
            .id_salt("historique")
            .default_open(false)
            .show(ui, |ui| {
                if h.is_empty() {
                    ui.monospace("(empty)");
                    return;
                }
                for e in h.recentes(self.historique_visible) {
                    ui.monospace(e.ligne());
                }
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }
}
