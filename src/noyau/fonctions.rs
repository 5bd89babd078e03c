// src/noyau/fonctions.rs
//
// Primitives scalaires qui demandent plus qu’un appel f64 direct :
// racine cubique signée, reste au signe du diviseur, factorielle (exacte via BigInt).

use num_bigint::BigInt;
use num_traits::{One, ToPrimitive};

use super::erreur::ErreurCalc;

/// Au-delà, n! dépasse f64::MAX : le résultat flottant est +inf.
pub const FACTORIELLE_MAX_F64: u64 = 170;

/// Garde-fou : on n’expand pas d’entier exact au-delà (anti-gel UI).
pub const FACTORIELLE_EXACTE_MAX: u64 = 3000;

/// sign(a)·|a|^(1/3)
pub fn racine_cubique(a: f64) -> f64 {
    a.abs().powf(1.0 / 3.0).copysign(a)
}

/// Reste par division plancher : le résultat prend le signe du diviseur.
pub fn reste(a: f64, b: f64) -> Result<f64, ErreurCalc> {
    if b == 0.0 {
        return Err(ErreurCalc::ModuloParZero);
    }
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        Ok(r + b)
    } else {
        Ok(r)
    }
}

/// Vérifie que `a` est un entier ≥ 0 et le retourne en u64.
///
/// NaN et ±inf sont refusés (partie fractionnaire non nulle).
pub fn entier_factorielle(a: f64) -> Result<u64, ErreurCalc> {
    if a < 0.0 || a.fract() != 0.0 {
        return Err(ErreurCalc::FactorielleInvalide);
    }
    // saturant : tout ce qui dépasse u64 est de toute façon +inf en f64
    Ok(a as u64)
}

/// a! en f64 (arrondi correct depuis l’entier exact).
pub fn factorielle(a: f64) -> Result<f64, ErreurCalc> {
    let n = entier_factorielle(a)?;
    if n > FACTORIELLE_MAX_F64 {
        return Ok(f64::INFINITY);
    }
    Ok(produit(n).to_f64().unwrap_or(f64::INFINITY))
}

/// n! exact ; None au-delà du garde-fou.
pub fn factorielle_exacte(n: u64) -> Option<BigInt> {
    (n <= FACTORIELLE_EXACTE_MAX).then(|| produit(n))
}

fn produit(n: u64) -> BigInt {
    let mut acc = BigInt::one();
    for k in 2..=n {
        acc *= k;
    }
    acc
}
