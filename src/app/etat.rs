//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir la saisie (opération choisie + champs texte), la session du noyau,
//! et le dernier affichage (issue, exact, erreur de saisie).
//!
//! Contrats :
//! - Aucun calcul ici : tout passe par `noyau::executer`.
//! - L’historique appartient au noyau ; l’UI ne fait que le lire.
//! - Saisie illisible => rejet immédiat, rien n’atteint le noyau.

use crate::noyau::fonctions::{entier_factorielle, factorielle_exacte};
use crate::noyau::lecture::lire_nombre;
use crate::noyau::{executer, Arguments, Arite, ErreurCalc, Issue, Operation, Session, UniteAngle};
use crate::reglages::Reglages;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- noyau ---
    pub session: Session,

    // --- saisie ---
    pub operation: Operation,
    pub champs: [String; 2],

    // --- sorties ---
    pub issue: Option<Issue>,
    pub exact: String,  // factorielle en entier exact (vide sinon)
    pub erreur: String, // erreur de saisie (avant le noyau)

    // --- paramètres ---
    pub historique_visible: usize,

    // --- UX ---
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: &Reglages) -> Self {
        Self {
            session: Session::new(reglages.unite_angle),
            operation: Operation::Addition,
            champs: Default::default(),
            issue: None,
            exact: String::new(),
            erreur: String::new(),
            historique_visible: reglages.historique_visible,
            focus_entree: true,
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// Effacer seulement la saisie (sans toucher aux résultats ni à la session).
    pub fn clear_entree(&mut self) {
        for c in &mut self.champs {
            c.clear();
        }
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// Changer d’opération : les anciens résultats ne correspondent plus.
    pub fn set_operation(&mut self, op: Operation) {
        if op == self.operation {
            return;
        }
        self.operation = op;
        self.clear_resultats();
    }

    pub fn clear_resultats(&mut self) {
        self.issue = None;
        self.exact.clear();
        self.erreur.clear();
        self.focus_entree = true;
    }

    pub fn radians(&self) -> bool {
        self.session.unite_angle() == UniteAngle::Radians
    }

    pub fn set_radians(&mut self, radians: bool) {
        let unite = if radians {
            UniteAngle::Radians
        } else {
            UniteAngle::Degres
        };
        self.session.set_unite_angle(unite);
    }

    /// Utilitaire : placer une erreur de saisie (l’écran garde le dernier résultat).
    pub fn set_erreur(&mut self, e: &ErreurCalc) {
        self.erreur = e.to_string();
        self.focus_entree = true;
    }

    /* ------------------------ Calcul ------------------------ */

    /// Lit les champs selon l’arité, appelle le noyau, dépose l’issue.
    pub fn calculer(&mut self) {
        let args = match self.lire_arguments() {
            Ok(a) => a,
            Err(e) => {
                self.set_erreur(&e);
                return;
            }
        };

        let issue = executer(&mut self.session, self.operation, args.clone());

        self.exact = match &args {
            Arguments::Un(a)
                if self.operation == Operation::Factorielle && issue.valeur().is_some() =>
            {
                entier_factorielle(*a)
                    .ok()
                    .and_then(factorielle_exacte)
                    .map(|n| n.to_string())
                    .unwrap_or_default()
            }
            _ => String::new(),
        };

        self.erreur.clear();
        self.issue = Some(issue);
        self.focus_entree = true;
    }

    fn lire_arguments(&self) -> Result<Arguments, ErreurCalc> {
        Ok(match self.operation.arite() {
            Arite::Aucune => Arguments::Aucun,
            Arite::Un => Arguments::Un(lire_nombre(&self.champs[0])?),
            Arite::Deux => Arguments::Deux(
                lire_nombre(&self.champs[0])?,
                lire_nombre(&self.champs[1])?,
            ),
            Arite::Liste => Arguments::Liste(self.champs[0].clone()),
        })
    }
}
