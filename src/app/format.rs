// src/app/format.rs
//
// Affichage des valeurs de pile
// -----------------------------
// Le moteur garde des f64 pleine précision ; ici seulement on arrondit.
// f64 -> rationnel exact -> entier "scalé" arrondi -> texte décimal,
// puis on retire les zéros finaux.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// Au-delà, l’écriture décimale devient illisible : notation scientifique.
const SEUIL_SCIENTIFIQUE: f64 = 1e15;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// "1.2500" -> "1.25", "3.000" -> "3"
fn retire_zeros_finaux(mut s: String) -> String {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

/// Texte affiché pour une valeur, arrondie à `precision` décimales.
pub fn format_valeur(v: f64, precision: usize) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v.abs() >= SEUIL_SCIENTIFIQUE {
        return format!("{v:e}");
    }

    // f64 fini => toujours représentable exactement
    let Some(r) = BigRational::from_float(v) else {
        return format!("{v}");
    };

    let scaled = (r * BigRational::from_integer(pow10(precision)))
        .round()
        .to_integer();

    // "-0" n’a pas de sens à l’écran
    if scaled.is_zero() {
        return "0".to_string();
    }

    retire_zeros_finaux(scaled_to_decimal(scaled, precision))
}
