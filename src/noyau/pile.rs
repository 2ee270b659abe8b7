// src/noyau/pile.rs
//
// Pile d’opérandes (f64)
// ----------------------
// - Dernier élément du Vec = sommet
// - Pas de capacité fixe, pile vide valide
// - pop/peek sur pile vide => ErreurNoyau::PileVide
// - swap / rotation : no-op si pas assez d’éléments

use super::erreur::ErreurNoyau;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pile {
    valeurs: Vec<f64>,
}

impl Pile {
    pub fn push(&mut self, v: f64) {
        self.valeurs.push(v);
    }

    pub fn pop(&mut self) -> Result<f64, ErreurNoyau> {
        self.valeurs.pop().ok_or(ErreurNoyau::PileVide)
    }

    pub fn peek(&self) -> Result<f64, ErreurNoyau> {
        self.valeurs.last().copied().ok_or(ErreurNoyau::PileVide)
    }

    pub fn size(&self) -> usize {
        self.valeurs.len()
    }

    pub fn clear(&mut self) {
        self.valeurs.clear();
    }

    /// Échange les deux éléments du sommet (no-op si size < 2).
    pub fn swap(&mut self) {
        let n = self.valeurs.len();
        if n >= 2 {
            self.valeurs.swap(n - 2, n - 1);
        }
    }

    /// "over" : le 3e élément depuis le sommet remonte au sommet.
    ///
    /// Sommet → fond : [a, b, c, ...] devient [c, a, b, ...]. No-op si size < 3.
    pub fn rotate_third_to_top(&mut self) {
        let n = self.valeurs.len();
        if n >= 3 {
            // fond → sommet : [c, b, a] -> [b, a, c]
            self.valeurs[n - 3..].rotate_left(1);
        }
    }

    /// Vide la pile et pousse la somme de tous ses éléments (0.0 si vide).
    pub fn sum(&mut self) {
        let total: f64 = self.valeurs.drain(..).sum();
        self.valeurs.push(total);
    }

    /// Vue fond → sommet (le sommet est le dernier élément).
    pub fn valeurs(&self) -> &[f64] {
        &self.valeurs
    }
}
