// src/noyau/moteur.rs
//
// Moteur RPN
// ----------
// Possède :
// - la pile d’opérandes
// - la ligne de saisie (chiffres + au plus un '.')
// - le dernier nombre validé (rappel sur Enter à vide)
// - le mode d’angle
//
// Contrats :
// - Une action = une méthode, exécutée jusqu’au bout (aucune suspension)
// - Aucune méthode publique ne panique ni ne remonte PileVide (sauf `peek`, lecture seule)
// - Arité insuffisante => no-op silencieux
// - Toutes les valeurs restent en f64 pleine précision (le formatage est l’affaire de l’UI)

use log::{debug, trace, warn};

use super::erreur::ErreurNoyau;
use super::operateurs::{calcul, Calcul, ModeAngle, Operateur, Variante};
use super::pile::Pile;
use super::reglages::Reglages;

/// Sentinelle "rien tapé" : remplacée (pas complétée) par le prochain chiffre.
const SENTINELLE: &str = "0";

#[derive(Clone, Debug, Default)]
pub struct Moteur {
    pile: Pile,
    ligne: String,
    dernier: Option<f64>,
    mode_angle: ModeAngle,
    reglages: Reglages,
}

impl Moteur {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            reglages: reglages.bornes(),
            ..Self::default()
        }
    }

    /* ------------------------ Lecture (pour l’UI) ------------------------ */

    pub fn ligne(&self) -> &str {
        &self.ligne
    }

    /// Pile fond → sommet. L’UI choisit combien de lignes afficher.
    pub fn pile(&self) -> &[f64] {
        self.pile.valeurs()
    }

    pub fn peek(&self) -> Result<f64, ErreurNoyau> {
        self.pile.peek()
    }

    pub fn dernier(&self) -> Option<f64> {
        self.dernier
    }

    pub fn mode_angle(&self) -> ModeAngle {
        self.mode_angle
    }

    pub fn libelle_mode_angle(&self) -> &'static str {
        self.mode_angle.libelle()
    }

    pub fn reglages(&self) -> Reglages {
        self.reglages
    }

    /// Nouveaux réglages (bornés). Une ligne déjà tapée n’est jamais tronquée.
    pub fn set_reglages(&mut self, reglages: Reglages) {
        self.reglages = reglages.bornes();
    }

    /* ------------------------ Ligne de saisie ------------------------ */

    /// Ajoute un chiffre ('0'..='9') ou le point décimal.
    /// Retourne false si la saisie est refusée.
    pub fn ajoute_chiffre(&mut self, c: char) -> bool {
        if !(c.is_ascii_digit() || c == '.') {
            trace!("saisie ignorée : {c:?}");
            return false;
        }
        if c == '.' && self.ligne.contains('.') {
            trace!("second point décimal refusé");
            return false;
        }
        if !est_numerique(&self.ligne) {
            warn!("ligne non numérique remplacée : {:?}", self.ligne);
            self.ligne.clear();
        }
        let nb_chiffres = self.ligne.chars().filter(|&x| x != '.').count();
        if nb_chiffres >= self.reglages.chiffres_max {
            trace!("ligne pleine ({nb_chiffres} chiffres)");
            return false;
        }

        if self.ligne == SENTINELLE && c != '.' {
            self.ligne.clear();
        }
        self.ligne.push(c);
        true
    }

    /// Retire le dernier caractère (ne revient jamais à la sentinelle "0").
    pub fn backspace_ligne(&mut self) {
        if self.ligne.chars().count() > 1 {
            self.ligne.pop();
        } else {
            self.ligne.clear();
        }
    }

    pub fn clear_ligne(&mut self) {
        self.ligne.clear();
    }

    /// Ligne -> pile.
    ///
    /// - ligne vide : rappelle le dernier nombre validé dans la ligne (sans empiler),
    ///   arrondi à `chiffres_max` chiffres ; rien si la valeur ne s’écrit pas
    ///   avec le clavier (négative, NaN, ±inf, trop grande)
    /// - ligne "." : rien
    /// - sinon : empile, mémorise, vide la ligne
    ///
    /// Retourne true seulement si une valeur a été empilée. Une ligne illisible
    /// est laissée telle quelle.
    pub fn commit(&mut self) -> bool {
        match self.essaie_commit() {
            Ok(empile) => empile,
            Err(e) => {
                warn!("commit ignoré : {e}");
                false
            }
        }
    }

    fn essaie_commit(&mut self) -> Result<bool, ErreurNoyau> {
        if self.ligne.is_empty() {
            if let Some(v) = self.dernier {
                self.rappel(v);
            }
            return Ok(false);
        }
        if self.ligne == "." {
            return Ok(false);
        }

        let v: f64 = self
            .ligne
            .parse()
            .map_err(|_| ErreurNoyau::Lecture(self.ligne.clone()))?;

        debug!("push {v}");
        self.dernier = Some(v);
        self.pile.push(v);
        self.ligne.clear();
        Ok(true)
    }

    /// Appui long sur Enter : copie le sommet dans la ligne (sans dépiler).
    /// Mêmes règles d’écriture que le rappel du dernier nombre.
    pub fn rappel_sommet(&mut self) {
        if let Ok(v) = self.pile.peek() {
            self.rappel(v);
        }
    }

    fn rappel(&mut self, v: f64) {
        match texte_rappel(v, self.reglages.chiffres_max) {
            Some(t) => {
                trace!("rappel de {v} : {t:?}");
                self.ligne = t;
            }
            None => trace!("rappel impossible dans la ligne : {v}"),
        }
    }

    /* ------------------------ Opérateurs ------------------------ */

    /// Applique `op` dans la colonne `variante`.
    ///
    /// 1. commit si la ligne est non vide ou si la pile manque d’opérandes
    /// 2. toujours pas assez d’opérandes => no-op
    /// 3. dépile exactement l’arité (binaire : 1er dépilé = droite, 2e = gauche)
    /// 4. empile un seul résultat
    ///
    /// Retourne true si un résultat a été empilé.
    pub fn invoque(&mut self, op: Operateur, variante: Variante) -> bool {
        let Some(c) = calcul(op, variante) else {
            trace!("{op:?}/{variante:?} : pas d’entrée dans la table");
            return false;
        };
        let arite = c.arite();

        if !self.ligne.is_empty() || self.pile.size() < arite {
            self.commit();
        }
        if self.pile.size() < arite {
            trace!("{op:?}/{variante:?} : {} opérande(s) sur {arite}", self.pile.size());
            return false;
        }

        match self.applique(c) {
            Ok(r) => {
                debug!("{op:?}/{variante:?} ({:?}) -> {r}", self.mode_angle);
                self.pile.push(r);
                true
            }
            Err(e) => {
                warn!("{op:?}/{variante:?} abandonné : {e}");
                false
            }
        }
    }

    fn applique(&mut self, c: Calcul) -> Result<f64, ErreurNoyau> {
        let r = match c {
            Calcul::Unaire(f) => {
                let x = self.pile.pop()?;
                f(x, self.mode_angle)
            }
            Calcul::Binaire(f) => {
                let droite = self.pile.pop()?;
                let gauche = self.pile.pop()?;
                f(gauche, droite)
            }
        };
        Ok(r)
    }

    /// Appui long sur "+" : toute la pile devient sa somme.
    pub fn somme(&mut self) {
        if !self.ligne.is_empty() {
            self.commit();
        }
        debug!("somme de {} valeur(s)", self.pile.size());
        self.pile.sum();
    }

    /// Empile une constante (π, e…) sans passer par la ligne.
    /// Une ligne en cours est d’abord validée pour ne pas perdre la saisie.
    pub fn push_constante(&mut self, v: f64) {
        if !self.ligne.is_empty() {
            self.commit();
        }
        debug!("push constante {v}");
        self.dernier = Some(v);
        self.pile.push(v);
    }

    /* ------------------------ Manipulations de pile ------------------------ */

    /// Retire le sommet sans le réutiliser.
    pub fn pop_jete(&mut self) -> Option<f64> {
        let v = self.pile.pop().ok();
        if let Some(x) = v {
            debug!("drop {x}");
        }
        v
    }

    pub fn clear_pile(&mut self) {
        debug!("clear pile ({} valeur(s))", self.pile.size());
        self.pile.clear();
    }

    pub fn swap(&mut self) {
        self.pile.swap();
    }

    /// "over" : le 3e élément remonte au sommet.
    pub fn rotation(&mut self) {
        self.pile.rotate_third_to_top();
    }

    pub fn bascule_mode_angle(&mut self) {
        self.mode_angle = self.mode_angle.bascule();
        debug!("mode d’angle : {}", self.mode_angle.libelle());
    }
}

/// Ligne tapable : chiffres ASCII et au plus un '.'.
fn est_numerique(ligne: &str) -> bool {
    ligne.chars().all(|c| c.is_ascii_digit() || c == '.') && ligne.matches('.').count() <= 1
}

/// Texte d’une valeur rappelée dans la ligne, arrondie à `chiffres_max` chiffres
/// (le point ne compte pas). None si le clavier ne sait pas l’écrire :
/// négative, NaN, ±inf, ou partie entière plus longue que la limite.
fn texte_rappel(v: f64, chiffres_max: usize) -> Option<String> {
    if !v.is_finite() || v < 0.0 {
        return None;
    }
    if v == 0.0 {
        return Some(SENTINELLE.to_string());
    }

    // "0" compte pour un chiffre quand v < 1
    let entiers = format!("{:.0}", v.trunc()).len();
    if entiers > chiffres_max {
        return None;
    }
    let decimales = chiffres_max - entiers;

    let mut t = format!("{v:.decimales$}");
    if t.contains('.') {
        while t.ends_with('0') {
            t.pop();
        }
        if t.ends_with('.') {
            t.pop();
        }
    }

    // l’arrondi peut ajouter un chiffre (999.7 -> "1000")
    let chiffres = t.chars().filter(|&c| c != '.').count();
    (chiffres <= chiffres_max).then_some(t)
}
