//! Noyau calcul + état
//!
//! Organisation interne :
//! - operation.rs  : tags du menu + arité + arguments
//! - erreur.rs     : erreurs de domaine (issues attendues, jamais des pannes)
//! - lecture.rs    : saisies texte -> nombres (rejet en bloc)
//! - fonctions.rs  : racine cubique, reste, factorielle exacte
//! - stats.rs      : moyenne, médiane
//! - trig.rs       : unité d’angle + sin/cos/tan + conversions
//! - format.rs     : affichage des nombres + résumé des entrées
//! - historique.rs : journal de session en ajout seul
//! - session.rs    : état explicite {mémoire, unité, historique}
//! - eval.rs       : `executer` (dispatch + effets)

pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod historique;
pub mod lecture;
pub mod operation;
pub mod session;
pub mod stats;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::ErreurCalc;
pub use eval::{executer, Issue};
pub use operation::{Arguments, Arite, Operation};
pub use session::Session;
pub use trig::UniteAngle;
