// src/noyau/stats.rs
//
// Statistiques sur liste (déjà lue) : moyenne + médiane.
// Les deux supposent une liste non vide (garantie par lecture::lire_liste).

pub fn moyenne(valeurs: &[f64]) -> f64 {
    let somme: f64 = valeurs.iter().sum();
    somme / valeurs.len() as f64
}

/// Médiane après tri numérique complet ; longueur paire => moyenne des deux centraux.
pub fn mediane(valeurs: &[f64]) -> f64 {
    let mut tri = valeurs.to_vec();
    // ordre total : NaN accepté sans panique
    tri.sort_by(f64::total_cmp);

    let n = tri.len();
    if n % 2 == 1 {
        tri[n / 2]
    } else {
        (tri[n / 2 - 1] + tri[n / 2]) / 2.0
    }
}
