//! Tests fuzz safe : robustesse + invariants sur des suites d’actions aléatoires.
//!
//! But : marteler le moteur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - nombre d’actions borné
//! - budget temps global
//! - invariants clés : ligne = chiffres + au plus un '.', jamais plus de chiffres
//!   que le réglage (rappels compris), un opérateur dépile son arité et empile un résultat

use std::time::{Duration, Instant};

use super::operateurs::calcul;
use super::{Moteur, Operateur, Reglages, Variante};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Actions aléatoires ------------------------ */

const OPERATEURS: [Operateur; 13] = [
    Operateur::Addition,
    Operateur::Soustraction,
    Operateur::Multiplication,
    Operateur::Division,
    Operateur::Modulo,
    Operateur::Puissance,
    Operateur::RacineCarree,
    Operateur::Carre,
    Operateur::Sinus,
    Operateur::Cosinus,
    Operateur::Tangente,
    Operateur::LogNaturel,
    Operateur::ConversionAngle,
];

const TOUCHES_SAISIE: &[u8] = b"0123456789.";

fn action_aleatoire(rng: &mut Rng, m: &mut Moteur) {
    match rng.pick(12) {
        // la saisie domine, sinon la ligne reste presque toujours vide
        0..=4 => {
            let c = TOUCHES_SAISIE[rng.pick(TOUCHES_SAISIE.len() as u32) as usize] as char;
            m.ajoute_chiffre(c);
        }
        5 => m.backspace_ligne(),
        6 => {
            m.commit();
        }
        7 => {
            let op = OPERATEURS[rng.pick(OPERATEURS.len() as u32) as usize];
            let variante = if rng.coin() {
                Variante::Alterne
            } else {
                Variante::Primaire
            };
            let avant = m.pile().len();
            let ligne_tapee = !m.ligne().is_empty();
            if m.invoque(op, variante) {
                // ligne validée (+1), arité dépilée, un seul résultat
                let arite = calcul(op, variante).map_or(0, |c| c.arite());
                let validee = ligne_tapee && m.ligne().is_empty();
                let attendu = avant + usize::from(validee) + 1 - arite;
                assert_eq!(
                    m.pile().len(),
                    attendu,
                    "{op:?}/{variante:?} : pile {avant} -> {}",
                    m.pile().len()
                );
            }
        }
        8 => {
            if rng.coin() {
                m.swap();
            } else {
                m.rotation();
            }
        }
        9 => {
            if rng.pick(8) == 0 {
                m.clear_pile();
            } else {
                m.pop_jete();
            }
        }
        10 => {
            if rng.pick(6) == 0 {
                m.somme();
            } else {
                m.bascule_mode_angle();
            }
        }
        _ => {
            if rng.coin() {
                m.push_constante(std::f64::consts::PI);
            } else {
                m.clear_ligne();
            }
        }
    }
}

fn check_invariants_ligne(m: &Moteur) {
    let ligne = m.ligne();
    let points = ligne.matches('.').count();
    assert!(points <= 1, "plus d’un point: {ligne:?}");

    assert!(
        ligne.chars().all(|c| c.is_ascii_digit() || c == '.'),
        "ligne non numérique: {ligne:?}"
    );
    let chiffres = ligne.chars().filter(|c| *c != '.').count();
    assert!(chiffres <= m.reglages().chiffres_max, "trop de chiffres: {ligne:?}");
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_saisie_seule_respecte_les_bornes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    for seed in 0..200u64 {
        let mut rng = Rng::new(seed);
        let chiffres_max = 1 + rng.pick(20) as usize;
        let mut m = Moteur::new(Reglages {
            chiffres_max,
            ..Reglages::default()
        });

        for _ in 0..60 {
            if rng.pick(5) == 0 {
                m.backspace_ligne();
            } else {
                let c = TOUCHES_SAISIE[rng.pick(TOUCHES_SAISIE.len() as u32) as usize] as char;
                m.ajoute_chiffre(c);
            }

            let ligne = m.ligne();
            assert!(ligne.matches('.').count() <= 1, "seed={seed} ligne={ligne:?}");
            let chiffres = ligne.chars().filter(|c| *c != '.').count();
            assert!(chiffres <= chiffres_max, "seed={seed} ligne={ligne:?}");
            assert!(ligne != "00", "sentinelle complétée: seed={seed}");
        }
        budget(t0, max);
    }
}

#[test]
fn fuzz_actions_mixtes_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(800);

    for seed in 1..=150u64 {
        let mut rng = Rng::new(seed.wrapping_mul(0x9E37_79B9));
        let mut m = Moteur::new(Reglages::default());

        for _ in 0..300 {
            action_aleatoire(&mut rng, &mut m);
            check_invariants_ligne(&m);
            // peek et pile doivent rester cohérents
            assert_eq!(m.peek().ok().map(f64::to_bits), m.pile().last().map(|v| v.to_bits()));
        }
        budget(t0, max);
    }
}

#[test]
fn fuzz_swap_involution() {
    let mut rng = Rng::new(7);
    for _ in 0..100 {
        let mut m = Moteur::new(Reglages::default());
        let n = rng.pick(6);
        for _ in 0..n {
            m.push_constante(f64::from(rng.pick(1000)) / 8.0);
        }
        let avant = m.pile().to_vec();
        m.swap();
        if avant.len() < 2 {
            assert_eq!(m.pile(), &avant[..]);
        }
        m.swap();
        assert_eq!(m.pile(), &avant[..]);
    }
}

#[test]
fn fuzz_rotation_cycle_de_trois() {
    let mut rng = Rng::new(11);
    for _ in 0..100 {
        let mut m = Moteur::new(Reglages::default());
        let n = rng.pick(7);
        for _ in 0..n {
            m.push_constante(f64::from(rng.pick(1000)) - 500.0);
        }
        let avant = m.pile().to_vec();

        m.rotation();
        if avant.len() < 3 {
            assert_eq!(m.pile(), &avant[..]);
        } else {
            // le fond ne bouge jamais
            assert_eq!(&m.pile()[..avant.len() - 3], &avant[..avant.len() - 3]);
        }
        m.rotation();
        m.rotation();
        assert_eq!(m.pile(), &avant[..]);
    }
}

#[test]
fn fuzz_determinisme() {
    let rejoue = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut m = Moteur::new(Reglages::default());
        for _ in 0..200 {
            action_aleatoire(&mut rng, &mut m);
        }
        let bits: Vec<u64> = m.pile().iter().map(|v| v.to_bits()).collect();
        (bits, m.ligne().to_string(), m.mode_angle())
    };

    for seed in [1u64, 42, 2024] {
        assert_eq!(rejoue(seed), rejoue(seed), "seed={seed}");
    }
}
