// src/noyau/format.rs
//
// Affichage texte : nombres + résumé des entrées (historique)

use super::operation::{Arguments, Operation};

/// Seuils de bascule en notation scientifique (comme un `repr` flottant usuel).
const SCI_GRAND: f64 = 1e16;
const SCI_PETIT: f64 = 1e-4;

/// Forme courte “aller-retour” : 120, 2.5, inf, NaN, 7.257415615307994e306.
pub fn format_nombre(x: f64) -> String {
    let a = x.abs();
    if x.is_finite() && a != 0.0 && !(SCI_PETIT..SCI_GRAND).contains(&a) {
        format!("{x:e}")
    } else {
        format!("{x}")
    }
}

/// Résumé lisible des entrées d’un appel (colonne “inputs” de l’historique).
///
/// `memoire` sert seulement à MR (“MR -> m”).
pub fn resume_entrees(op: Operation, args: &Arguments, memoire: Option<f64>) -> String {
    use Operation::*;

    match (op, args) {
        (DegresVersRadians, Arguments::Un(x)) => format!("{}°", format_nombre(*x)),
        (RadiansVersDegres, Arguments::Un(x)) => format!("{} rad", format_nombre(*x)),
        (MemoireAjout, Arguments::Un(x)) => format!("M+ {}", format_nombre(*x)),
        (MemoireRetrait, Arguments::Un(x)) => format!("M- {}", format_nombre(*x)),
        (Pourcentage, Arguments::Deux(base, pct)) => {
            format!("{}, {}%", format_nombre(*base), format_nombre(*pct))
        }

        (Pi, Arguments::Aucun) => "π".to_string(),
        (AfficherMemoire, Arguments::Aucun) => "M".to_string(),
        (MemoireEffacer, Arguments::Aucun) => "MC".to_string(),
        (MemoireRappel, Arguments::Aucun) => match memoire {
            Some(m) => format!("MR -> {}", format_nombre(m)),
            None => "MR".to_string(),
        },

        // cas génériques (et arguments mal formés : on garde une trace fidèle)
        (_, Arguments::Aucun) => String::new(),
        (_, Arguments::Un(x)) => format_nombre(*x),
        (_, Arguments::Deux(a, b)) => format!("{}, {}", format_nombre(*a), format_nombre(*b)),
        (_, Arguments::Liste(texte)) => texte.clone(),
    }
}
