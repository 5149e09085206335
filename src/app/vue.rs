// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// - Deux fractions : numérateur au-dessus, dénominateur en dessous
// - Un bouton par opération (+ - * /), Enter = refaire la dernière opération
// - Résultat "num/den", erreur en couleur d’erreur, démarche repliable
//
// Aucune logique de calcul ici : tout passe par AppCalc::calculer (etat.rs).

use eframe::egui;

use calculatrice_rationnelle::noyau::Operation;

use super::etat::{AppCalc, NOMS_CHAMPS};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice rationnelle");
                ui.add_space(6.0);

                self.ui_entrees(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entrees(&mut self, ui: &mut egui::Ui) {
        let mut valider = false;

        egui::Grid::new("fractions_entree")
            .num_columns(2)
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                ui.label("Fraction 1");
                ui.label("Fraction 2");
                ui.end_row();

                // ligne 0 : numérateurs (champs 0 et 2), ligne 1 : dénominateurs (1 et 3)
                for ligne in 0..2 {
                    for col in 0..2 {
                        let i = col * 2 + ligne;
                        let resp = ui.add(
                            egui::TextEdit::singleline(&mut self.entrees[i])
                                .desired_width(120.0)
                                .hint_text(NOMS_CHAMPS[i])
                                .id_salt(("champ_fraction", i))
                                .code_editor(),
                        );
                        if i == 0 && self.focus_entree {
                            resp.request_focus();
                            self.focus_entree = false;
                        }
                        if resp.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter)) {
                            valider = true;
                        }
                    }
                    ui.end_row();
                }
            });

        // Enter : on rejoue la dernière opération choisie (addition par défaut).
        if valider {
            self.calculer(self.derniere_op.unwrap_or(Operation::Addition));
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            for op in Operation::TOUTES {
                let resp = ui
                    .add_sized([46.0, 32.0], egui::Button::new(op.symbole()))
                    .on_hover_text(op.libelle());
                if resp.clicked() {
                    self.calculer(op);
                }
            }

            ui.separator();

            // Contrat: C = champs seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement les champs", Action::ClearEntrees);
            self.bouton_action(ui, "CLR", "Efface résultat + erreur + démarche", Action::ClearResultats);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        let titre = match self.derniere_op {
            Some(op) => format!("Résultat ({}) :", op.libelle()),
            None => "Résultat :".to_string(),
        };
        ui.label(titre);
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Saisie", "demarche_saisie", &self.demarche.saisie);
                Self::champ_demarche(ui, "Réduits", "demarche_reduits", &self.demarche.reduits);
                Self::champ_demarche(ui, "Produits croisés", "demarche_brut", &self.demarche.brut);
                Self::champ_demarche(ui, "Irréductible", "demarche_resultat", &self.demarche.resultat);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Lecture seule, cadre via Frame + Label monospace.
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

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([46.0, 32.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntrees => self.clear_entrees(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntrees,
    ClearResultats,
    ResetTotal,
}
