//! Noyau — erreurs de domaine.
//!
//! Toutes les erreurs sont des *issues* attendues d’un calcul (jamais une panne) :
//! `executer` les retourne, l’UI les affiche, l’historique les enregistre.
//! Le message `Display` est exactement la chaîne placée dans l’historique.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ErreurCalc {
    #[error("Error: Division by zero")]
    DivisionParZero,

    #[error("Error: Modulus by zero")]
    ModuloParZero,

    #[error("Error: negative input")]
    RacineNegative,

    #[error("Error: non-positive input")]
    EntreeNonPositive,

    #[error("Error: invalid input")]
    FactorielleInvalide,

    #[error("Error: invalid number list")]
    ListeInvalide,

    #[error("Error: invalid number '{0}'")]
    NombreInvalide(String),

    #[error("Error: {operation} expects {attendu}")]
    ArgumentsInvalides {
        operation: &'static str,
        attendu: &'static str,
    },

    /// Information, pas une vraie erreur (MR / affichage mémoire vide).
    #[error("Memory is empty")]
    MemoireVide,
}

impl ErreurCalc {
    pub fn nombre_invalide(texte: impl Into<String>) -> Self {
        Self::NombreInvalide(texte.into())
    }

    pub fn arguments_invalides(operation: &'static str, attendu: &'static str) -> Self {
        Self::ArgumentsInvalides { operation, attendu }
    }

    /// Vrai pour les avis (affichés en “info”, pas en rouge).
    pub fn est_info(&self) -> bool {
        matches!(self, Self::MemoireVide)
    }
}
