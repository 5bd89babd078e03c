// src/noyau/lecture.rs
//
// Lecture des saisies texte -> nombres
// -----------------------------------
// Contrat : rejet immédiat (jamais de 0 ou NaN “par défaut”),
// et rejet EN BLOC d’une liste dès qu’un seul jeton est illisible.

use super::erreur::ErreurCalc;

/// Lit un nombre flottant depuis un champ de saisie (espaces autour tolérés).
pub fn lire_nombre(texte: &str) -> Result<f64, ErreurCalc> {
    let t = texte.trim();
    if t.is_empty() {
        return Err(ErreurCalc::nombre_invalide(t));
    }
    t.parse::<f64>()
        .map_err(|_| ErreurCalc::nombre_invalide(t))
}

/// Découpe sur les blancs et lit chaque jeton ; liste vide = invalide.
pub fn lire_liste(texte: &str) -> Result<Vec<f64>, ErreurCalc> {
    let valeurs = texte
        .split_whitespace()
        .map(|jeton| jeton.parse::<f64>().map_err(|_| ErreurCalc::ListeInvalide))
        .collect::<Result<Vec<_>, _>>()?;

    if valeurs.is_empty() {
        return Err(ErreurCalc::ListeInvalide);
    }
    Ok(valeurs)
}
