// src/noyau/reglages.rs
//
// Réglages fournis par l’UI (pas de constante en dur dans le moteur).
// Défense en profondeur : chaque champ est borné.

/// Nombre max de chiffres saisis (le point décimal ne compte pas).
pub const CHIFFRES_MAX_DEFAUT: usize = 15;
const CHIFFRES_MAX_BORNE: usize = 30;

/// Décimales affichées (formatage côté UI seulement).
pub const PRECISION_DEFAUT: usize = 10;
const PRECISION_BORNE: usize = 20;

/// Lignes de pile rendues par l’UI.
pub const LIGNES_PILE_DEFAUT: usize = 4;
const LIGNES_PILE_BORNE: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub chiffres_max: usize,
    pub precision: usize,
    pub lignes_pile: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            chiffres_max: CHIFFRES_MAX_DEFAUT,
            precision: PRECISION_DEFAUT,
            lignes_pile: LIGNES_PILE_DEFAUT,
        }
    }
}

impl Reglages {
    /// Copie bornée (anti-abus : 0 chiffre saisissable, précision délirante…).
    pub fn bornes(self) -> Self {
        Self {
            chiffres_max: self.chiffres_max.clamp(1, CHIFFRES_MAX_BORNE),
            precision: self.precision.min(PRECISION_BORNE),
            lignes_pile: self.lignes_pile.clamp(1, LIGNES_PILE_BORNE),
        }
    }
}
