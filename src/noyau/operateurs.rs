// src/noyau/operateurs.rs
//
// Table des opérateurs (deux colonnes : primaire / alterne)
// --------------------------------------------------------
// - Une touche = un Operateur ; l’appui long choisit la colonne Variante::Alterne
// - L’arité vient de l’entrée de table (Unaire / Binaire), jamais de l’appelant
// - Binaire : gauche = opérande le plus profond (empilé en premier), droite = sommet
// - Pas d’erreur de domaine : NaN / ±inf sont des valeurs comme les autres

/// Identifiant d’opérateur (une touche du clavier).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
    Modulo,
    Puissance,
    RacineCarree,
    Carre,
    Sinus,
    Cosinus,
    Tangente,
    LogNaturel,
    /// Touche DEG/RAD : primaire = bascule de mode (hors table), alterne = conversion.
    ConversionAngle,
}

/// Colonne de la table : appui court (Primaire) ou appui long (Alterne).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variante {
    #[default]
    Primaire,
    Alterne,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    Radians,
    #[default]
    Degres,
}

impl ModeAngle {
    pub fn bascule(self) -> Self {
        match self {
            ModeAngle::Radians => ModeAngle::Degres,
            ModeAngle::Degres => ModeAngle::Radians,
        }
    }

    /// Entrée trig : degrés -> radians si besoin.
    pub fn vers_radians(self, x: f64) -> f64 {
        match self {
            ModeAngle::Radians => x,
            ModeAngle::Degres => x.to_radians(),
        }
    }

    /// Sortie trig inverse : radians -> degrés si besoin.
    pub fn depuis_radians(self, x: f64) -> f64 {
        match self {
            ModeAngle::Radians => x,
            ModeAngle::Degres => x.to_degrees(),
        }
    }

    /// Conversion explicite (touche DEG/RAD en appui long), sans changer le mode :
    /// en radians on convertit des degrés vers radians, en degrés l’inverse.
    pub fn convertit(self, x: f64) -> f64 {
        match self {
            ModeAngle::Radians => x.to_radians(),
            ModeAngle::Degres => x.to_degrees(),
        }
    }

    /// Libellé stable lu par l’UI ("radians" / "degrees").
    pub fn libelle(self) -> &'static str {
        match self {
            ModeAngle::Radians => "radians",
            ModeAngle::Degres => "degrees",
        }
    }
}

/// Calcul associé à une entrée de table.
#[derive(Clone, Copy, Debug)]
pub enum Calcul {
    /// x -> résultat (le mode d’angle est fourni pour la trig)
    Unaire(fn(f64, ModeAngle) -> f64),
    /// (gauche, droite) -> résultat
    Binaire(fn(f64, f64) -> f64),
}

impl Calcul {
    pub fn arite(&self) -> usize {
        match self {
            Calcul::Unaire(_) => 1,
            Calcul::Binaire(_) => 2,
        }
    }
}

/// Table statique : (opérateur, variante) -> calcul.
/// None = pas d’entrée (ex: Addition en alterne, géré par la somme de pile).
pub fn calcul(op: Operateur, variante: Variante) -> Option<Calcul> {
    use Calcul::{Binaire, Unaire};
    use Operateur::*;

    let c = match variante {
        Variante::Primaire => match op {
            Addition => Binaire(|g, d| g + d),
            Soustraction => Binaire(|g, d| g - d),
            Multiplication => Binaire(|g, d| g * d),
            Division => Binaire(|g, d| g / d),
            Modulo => Binaire(|g, d| g % d),
            Puissance => Binaire(f64::powf),
            RacineCarree => Unaire(|x, _| x.sqrt()),
            Carre => Unaire(|x, _| x.powi(2)),
            Sinus => Unaire(|x, m| m.vers_radians(x).sin()),
            Cosinus => Unaire(|x, m| m.vers_radians(x).cos()),
            Tangente => Unaire(|x, m| m.vers_radians(x).tan()),
            LogNaturel => Unaire(|x, _| x.ln()),
            ConversionAngle => return None,
        },

        Variante::Alterne => match op {
            Soustraction => Unaire(|x, _| -x),
            Multiplication => Binaire(f64::powf),
            // même ordre d’opérandes que Modulo primaire
            Division => Binaire(|g, d| g % d),
            // log base `d` de `g`
            LogNaturel => Binaire(|g, d| g.ln() / d.ln()),
            Sinus => Unaire(|x, m| m.depuis_radians(x.asin())),
            Cosinus => Unaire(|x, m| m.depuis_radians(x.acos())),
            Tangente => Unaire(|x, m| m.depuis_radians(x.atan())),
            ConversionAngle => Unaire(|x, m| m.convertit(x)),
            Addition | Modulo | Puissance | RacineCarree | Carre => return None,
        },
    };

    Some(c)
}
