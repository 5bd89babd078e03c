//! Noyau — historique de session.
//!
//! Journal en ajout seul : une entrée par appel à `executer` (succès OU erreur),
//! dans l’ordre des appels. Aucune troncature du stockage ; l’affichage peut se
//! limiter aux K dernières via `recentes`.

use chrono::{DateTime, Local};

use super::operation::Operation;

const FORMAT_HORODATAGE: &str = "%Y-%m-%d %H:%M:%S";

/// Une entrée figée (champs privés : pas de mutation après ajout).
#[derive(Clone, Debug)]
pub struct EntreeHistorique {
    horodatage: DateTime<Local>,
    operation: Operation,
    entrees: String,
    resultat: String,
}

impl EntreeHistorique {
    pub fn horodatage_texte(&self) -> String {
        self.horodatage.format(FORMAT_HORODATAGE).to_string()
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn entrees(&self) -> &str {
        &self.entrees
    }

    /// Chaîne d’affichage de l’issue (nombre ou message d’erreur).
    pub fn resultat(&self) -> &str {
        &self.resultat
    }

    /// Ligne d’affichage : `time — op — inputs: … — result: …`
    pub fn ligne(&self) -> String {
        format!(
            "{} — {} — inputs: {} — result: {}",
            self.horodatage_texte(),
            self.operation().libelle(),
            self.entrees(),
            self.resultat()
        )
    }
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: Vec<EntreeHistorique>,
}

impl Historique {
    /// Seul point d’écriture ; réservé au noyau.
    pub(crate) fn ajouter(&mut self, operation: Operation, entrees: String, resultat: String) {
        self.entrees.push(EntreeHistorique {
            horodatage: Local::now(),
            operation,
            entrees,
            resultat,
        });
    }

    pub fn entrees(&self) -> &[EntreeHistorique] {
        &self.entrees
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    /// Les `k` plus récentes, de la plus récente à la plus ancienne.
    pub fn recentes(&self, k: usize) -> impl Iterator<Item = &EntreeHistorique> {
        self.entrees.iter().rev().take(k)
    }
}
