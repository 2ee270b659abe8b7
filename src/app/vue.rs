// src/app/vue.rs
//
// Vue (UI egui) - natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pile en haut (fenêtre des dernières valeurs), ligne de saisie en dessous
// - Appui long = clic droit (souris) ou appui prolongé (tactile)
// - Clavier : chiffres / opérateurs, Enter valide, Backspace efface

use eframe::egui;

use super::etat::{AppCalc, Touche};
use super::format::format_valeur;
use crate::noyau::{ModeAngle, Operateur};

const TAILLE_TOUCHE: [f32; 2] = [64.0, 40.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.clavier_physique(ui);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Calculatrice RPN");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.monospace(libelle_fr(self.moteur.libelle_mode_angle()));
                    });
                });
                ui.add_space(6.0);

                self.ui_pile(ui);
                self.ui_ligne(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave_numerique(ui);

                ui.add_space(8.0);

                if self.second_panneau {
                    self.ui_panneau_scientifique(ui);
                } else {
                    self.ui_panneau_base(ui);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_reglages(ui);
            });
    }

    fn clavier_physique(&mut self, ui: &mut egui::Ui) {
        // Si un widget texte a le focus, le clavier lui appartient.
        if ui.ctx().wants_keyboard_input() {
            return;
        }

        let (texte, enter, backspace) = ui.input(|i| {
            let texte: String = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.as_str()),
                    _ => None,
                })
                .collect();
            (
                texte,
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
            )
        });

        for c in texte.chars() {
            if let Some(t) = Touche::depuis_char(c) {
                self.appui(t, false);
            }
        }
        if enter {
            self.appui(Touche::Enter, false);
        }
        if backspace {
            self.appui(Touche::Backspace, false);
        }
    }

    fn ui_pile(&mut self, ui: &mut egui::Ui) {
        let precision = self.moteur.reglages().precision;
        let lignes = self.moteur.reglages().lignes_pile;

        let fenetre = self.fenetre_pile();
        // lignes vides en haut : le sommet reste collé à la ligne de saisie
        let mut texte = "\n".repeat(lignes.saturating_sub(fenetre.len().max(1)));
        let valeurs: Vec<String> = fenetre
            .iter()
            .map(|v| format_valeur(*v, precision))
            .collect();
        texte.push_str(&valeurs.join("\n"));

        // sommet en pleine précision au survol
        let survol = match self.moteur.peek() {
            Ok(v) => format!("sommet : {v}\nClic : échange les deux derniers (long : 3e au sommet)"),
            Err(e) => e.to_string(),
        };
        let resp = Self::champ_monospace(ui, "pile_out", &texte, lignes).on_hover_text(survol);

        if resp.secondary_clicked() || resp.long_touched() {
            self.appui(Touche::Pile, true);
        } else if resp.clicked() {
            self.appui(Touche::Pile, false);
        }
    }

    fn ui_ligne(&mut self, ui: &mut egui::Ui) {
        let ligne = self.moteur.ligne().to_string();
        let resp = Self::champ_monospace(ui, "ligne_out", &ligne, 1);
        if let Some(v) = self.moteur.dernier() {
            resp.on_hover_text(format!("Enter à vide rappelle {v}"));
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_chiffre(ui, '7');
                self.bouton_chiffre(ui, '8');
                self.bouton_chiffre(ui, '9');
                self.bouton(ui, "DEL", "Efface le dernier chiffre (long : toute la ligne)", Touche::Backspace);
                ui.end_row();

                self.bouton_chiffre(ui, '4');
                self.bouton_chiffre(ui, '5');
                self.bouton_chiffre(ui, '6');
                self.bouton(ui, "CLR", "Retire le sommet (long : vide la pile)", Touche::Clear);
                ui.end_row();

                self.bouton_chiffre(ui, '1');
                self.bouton_chiffre(ui, '2');
                self.bouton_chiffre(ui, '3');
                self.bouton(ui, "2nd", "Change de panneau", Touche::Panneau);
                ui.end_row();

                self.bouton_chiffre(ui, '0');
                self.bouton_chiffre(ui, '.');
                ui.label("");
                self.bouton(ui, "ENTER", "Empile la ligne (long : rappelle le sommet)", Touche::Enter);
                ui.end_row();
            });
    }

    fn ui_panneau_base(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("panneau_base_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "+", "Addition (long : somme de la pile)", Touche::Op(Operateur::Addition));
                self.bouton(ui, "-", "Soustraction (long : opposé)", Touche::Op(Operateur::Soustraction));
                self.bouton(ui, "*", "Multiplication (long : puissance)", Touche::Op(Operateur::Multiplication));
                self.bouton(ui, "/", "Division (long : modulo)", Touche::Op(Operateur::Division));
                ui.end_row();
            });
    }

    fn ui_panneau_scientifique(&mut self, ui: &mut egui::Ui) {
        let angle = match self.moteur.mode_angle() {
            ModeAngle::Radians => "RAD",
            ModeAngle::Degres => "DEG",
        };

        egui::Grid::new("panneau_sci_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "sin", "Sinus (long : arc sinus)", Touche::Op(Operateur::Sinus));
                self.bouton(ui, "cos", "Cosinus (long : arc cosinus)", Touche::Op(Operateur::Cosinus));
                self.bouton(ui, "tan", "Tangente (long : arc tangente)", Touche::Op(Operateur::Tangente));
                self.bouton(ui, angle, "Bascule DEG/RAD (long : convertit la valeur)", Touche::Angle);
                ui.end_row();

                self.bouton(ui, "sqrt", "Racine carrée", Touche::Op(Operateur::RacineCarree));
                self.bouton(ui, "x^2", "Carré", Touche::Op(Operateur::Carre));
                self.bouton(ui, "y^x", "Puissance", Touche::Op(Operateur::Puissance));
                self.bouton(ui, "mod", "Modulo", Touche::Op(Operateur::Modulo));
                ui.end_row();

                self.bouton(ui, "ln", "Logarithme népérien (long : log base x de y)", Touche::Op(Operateur::LogNaturel));
                self.bouton(ui, "pi", "Empile π", Touche::Pi);
                self.bouton(ui, "e", "Empile e", Touche::E);
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        let r = self.moteur.reglages();

        ui.horizontal(|ui| {
            ui.label("Précision :");
            let mut p = r.precision as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut p)
                    .speed(1)
                    .range(0..=20)
                    .suffix(" décimales"),
            );
            if resp.changed() {
                self.set_precision(p as usize);
            }

            ui.separator();

            ui.label("Pile :");
            let mut l = r.lignes_pile as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut l)
                    .speed(1)
                    .range(1..=12)
                    .suffix(" lignes"),
            );
            if resp.changed() {
                self.set_lignes_pile(l as usize);
            }
        });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) -> egui::Response {
        // Affichage lecture seule, aligné à droite comme un écran de calculatrice.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                        ui.monospace(contenu);
                    });
                });
            })
            .response
            .interact(egui::Sense::click())
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, c: char) {
        let label = c.to_string();
        self.bouton(ui, &label, "", Touche::Chiffre(c));
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, touche: Touche) {
        let mut resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label));
        if !tip.is_empty() {
            resp = resp.on_hover_text(tip);
        }

        // appui long d’abord : un appui prolongé ne doit pas compter aussi comme court
        if resp.secondary_clicked() || resp.long_touched() {
            self.appui(touche, true);
        } else if resp.clicked() {
            self.appui(touche, false);
        }
    }
}

/// Libellé moteur ("radians" / "degrees") -> affichage.
fn libelle_fr(libelle: &str) -> &str {
    match libelle {
        "degrees" => "degrés",
        autre => autre,
    }
}
