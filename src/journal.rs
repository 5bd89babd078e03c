//! Journal (tracing) — natif seulement.
//!
//! `RUST_LOG` prime ; sinon le niveau des réglages ; sinon "info".

use tracing_subscriber::EnvFilter;

/// Installe l’abonné global. Un second appel est ignoré (retourne false).
pub fn init(niveau_defaut: &str) -> bool {
    let filtre = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(niveau_defaut))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_target(false)
        .try_init()
        .is_ok()
}
