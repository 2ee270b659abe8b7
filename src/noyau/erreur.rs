// src/noyau/erreur.rs
//
// Erreurs du noyau RPN.
// - PileVide : pop/peek sur pile vide (le moteur vérifie l’arité avant)
// - Lecture  : la ligne ne se lit pas comme un nombre (inatteignable en saisie normale)

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    #[error("pile vide")]
    PileVide,

    #[error("nombre illisible : {0:?}")]
    Lecture(String),
}
