//! Noyau — état de session explicite.
//!
//! `{mémoire, unité d’angle, historique}` : possédé par l’appelant (l’UI),
//! passé à chaque `executer`. Aucun état global : une session par utilisateur.

use super::historique::Historique;
use super::trig::UniteAngle;

#[derive(Clone, Debug, Default)]
pub struct Session {
    pub(super) memoire: Option<f64>,
    pub(super) unite_angle: UniteAngle,
    pub(super) historique: Historique,
}

impl Session {
    /// Session vierge : mémoire absente, historique vide.
    pub fn new(unite_angle: UniteAngle) -> Self {
        Self {
            unite_angle,
            ..Self::default()
        }
    }

    pub fn memoire(&self) -> Option<f64> {
        self.memoire
    }

    pub fn unite_angle(&self) -> UniteAngle {
        self.unite_angle
    }

    /// Le réglage d’unité n’est pas une opération : pas d’entrée d’historique.
    pub fn set_unite_angle(&mut self, unite: UniteAngle) {
        self.unite_angle = unite;
    }

    pub fn historique(&self) -> &Historique {
        &self.historique
    }
}
