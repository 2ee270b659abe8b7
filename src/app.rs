// src/app.rs
//
// Calculatrice RPN - module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + format.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Chiffres / Enter / Backspace sont lus dans vue.rs (une seule fois par frame).
// - Ici, seulement le raccourci global ESC.

pub mod etat;
pub mod format;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer seulement la ligne de saisie (comme DEL en appui long).
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_ligne();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
