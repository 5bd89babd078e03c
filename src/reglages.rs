//! Réglages de l’application.
//!
//! Priorité (la plus forte en dernier) :
//! 1. valeurs par défaut
//! 2. fichier `calculatrice.toml` (optionnel, répertoire courant)
//! 3. variables d’environnement préfixées `CALC_` (ex. `CALC_UNITE_ANGLE=radians`)
//!
//! En wasm32 (ni fichier ni environnement), seules les valeurs par défaut existent.

#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

#[cfg(not(target_arch = "wasm32"))]
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use thiserror::Error;

use crate::noyau::UniteAngle;

#[cfg(not(target_arch = "wasm32"))]
pub const FICHIER_REGLAGES: &str = "calculatrice.toml";
#[cfg(not(target_arch = "wasm32"))]
const PREFIXE_ENV: &str = "CALC_";

/// Nombre d’entrées d’historique affichées par défaut.
const HISTORIQUE_VISIBLE_DEFAUT: usize = 20;

/// Garde-fou : on borne l’affichage (le stockage, lui, n’est jamais tronqué).
#[cfg(not(target_arch = "wasm32"))]
const HISTORIQUE_VISIBLE_MAX: usize = 200;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("Failed to load configuration: {0}")]
    Extraction(#[from] figment::Error),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Reglages {
    /// Unité d’angle au démarrage de la session.
    pub unite_angle: UniteAngle,
    /// K : entrées d’historique affichées (les plus récentes).
    pub historique_visible: usize,
    /// Filtre `tracing` utilisé si `RUST_LOG` est absent.
    pub niveau_log: String,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            unite_angle: UniteAngle::Degres,
            historique_visible: HISTORIQUE_VISIBLE_DEFAUT,
            niveau_log: "info".to_string(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Reglages {
    /// Charge depuis `calculatrice.toml` + environnement.
    pub fn charger() -> Result<Self, ErreurReglages> {
        Self::charger_depuis(FICHIER_REGLAGES)
    }

    pub fn charger_depuis(chemin: impl AsRef<Path>) -> Result<Self, ErreurReglages> {
        let reglages: Reglages = Figment::new()
            .merge(Toml::file(chemin.as_ref()))
            .merge(Env::prefixed(PREFIXE_ENV))
            .extract()?;

        Ok(reglages.bornes())
    }

    fn bornes(mut self) -> Self {
        self.historique_visible = self.historique_visible.clamp(1, HISTORIQUE_VISIBLE_MAX);
        self
    }
}
