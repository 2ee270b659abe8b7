//! Noyau RPN
//!
//! Organisation interne :
//! - erreur.rs     : PileVide / Lecture
//! - pile.rs       : pile d’opérandes f64 (push/pop/peek/swap/rotation/somme)
//! - operateurs.rs : table primaire / alterne + mode d’angle
//! - reglages.rs   : chiffres max, précision d’affichage, lignes de pile
//! - moteur.rs     : ligne de saisie + commit + dispatch des opérateurs

pub mod erreur;
pub mod moteur;
pub mod operateurs;
pub mod pile;
pub mod reglages;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use moteur::Moteur;
pub use operateurs::{ModeAngle, Operateur, Variante};
pub use reglages::Reglages;
