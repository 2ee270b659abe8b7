//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur RPN et traduire chaque touche (appui court / long)
//! en une action du moteur. Aucun calcul ici : le moteur fait tout.
//!
//! Contrats :
//! - Une touche = une action moteur (ou le basculement de panneau, purement visuel).
//! - Appui long = colonne "alterne" de la touche quand elle en a une.
//! - Le panneau affiché n’influence jamais le moteur.

use crate::noyau::{Moteur, Operateur, Reglages, Variante};

/// Touches du clavier de la calculatrice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// '0'..='9' ou '.'
    Chiffre(char),
    Enter,
    Backspace,
    /// court : retire le sommet ; long : vide la pile
    Clear,
    Op(Operateur),
    /// court : bascule DEG/RAD ; long : conversion de la valeur
    Angle,
    Pi,
    E,
    /// Zone de pile : court = swap, long = rotation
    Pile,
    /// Bascule panneau de base / panneau scientifique
    Panneau,
}

impl Touche {
    /// Clavier physique : chiffres, point et opérateurs binaires usuels.
    pub fn depuis_char(c: char) -> Option<Touche> {
        let t = match c {
            '0'..='9' | '.' => Touche::Chiffre(c),
            ',' => Touche::Chiffre('.'),
            '+' => Touche::Op(Operateur::Addition),
            '-' => Touche::Op(Operateur::Soustraction),
            '*' => Touche::Op(Operateur::Multiplication),
            '/' => Touche::Op(Operateur::Division),
            '%' => Touche::Op(Operateur::Modulo),
            '^' => Touche::Op(Operateur::Puissance),
            _ => return None,
        };
        Some(t)
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub moteur: Moteur,

    // --- UX ---
    pub second_panneau: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            moteur: Moteur::new(Reglages::default()),
            second_panneau: false,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// Traduit un appui en action moteur.
    pub fn appui(&mut self, touche: Touche, long: bool) {
        let m = &mut self.moteur;
        let variante = if long {
            Variante::Alterne
        } else {
            Variante::Primaire
        };

        match touche {
            Touche::Chiffre(c) => {
                m.ajoute_chiffre(c);
            }
            Touche::Enter if long => m.rappel_sommet(),
            Touche::Enter => {
                m.commit();
            }
            Touche::Backspace if long => m.clear_ligne(),
            Touche::Backspace => m.backspace_ligne(),
            Touche::Clear if long => m.clear_pile(),
            Touche::Clear => {
                m.pop_jete();
            }
            Touche::Op(Operateur::Addition) if long => m.somme(),
            Touche::Op(op) => {
                m.invoque(op, variante);
            }
            Touche::Angle if long => {
                m.invoque(Operateur::ConversionAngle, Variante::Alterne);
            }
            Touche::Angle => m.bascule_mode_angle(),
            Touche::Pi => m.push_constante(std::f64::consts::PI),
            Touche::E => m.push_constante(std::f64::consts::E),
            Touche::Pile if long => m.rotation(),
            Touche::Pile => m.swap(),
            Touche::Panneau => self.second_panneau = !self.second_panneau,
        }
    }

    /// ESC : effacer seulement la ligne.
    pub fn clear_ligne(&mut self) {
        self.moteur.clear_ligne();
    }

    /// Fenêtre visible de la pile (fond → sommet), au plus `lignes_pile` valeurs.
    pub fn fenetre_pile(&self) -> &[f64] {
        let pile = self.moteur.pile();
        let n = self.moteur.reglages().lignes_pile;
        &pile[pile.len().saturating_sub(n)..]
    }

    /// Garde-fou : le moteur borne lui-même.
    pub fn set_precision(&mut self, precision: usize) {
        let r = self.moteur.reglages();
        self.moteur.set_reglages(Reglages { precision, ..r });
    }

    pub fn set_lignes_pile(&mut self, lignes_pile: usize) {
        let r = self.moteur.reglages();
        self.moteur.set_reglages(Reglages { lignes_pile, ..r });
    }
}
