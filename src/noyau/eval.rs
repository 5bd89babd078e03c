//! Noyau — exécution (point d’entrée unique)
//!
//! (opération, arguments, session) -> issue, + effets sur la session :
//! - mémoire = dernier succès numérique (sauf lectures, %, moyenne, médiane)
//! - M+/M-/MC : règle propre
//! - exactement UNE entrée d’historique par appel, succès ou erreur
//!
//! Les violations de domaine sont des `Issue::Erreur`, jamais des paniques.

use std::f64::consts::PI;
use std::fmt;

use tracing::{debug, info};

use super::erreur::ErreurCalc;
use super::fonctions::{factorielle, racine_cubique, reste};
use super::format::{format_nombre, resume_entrees};
use super::lecture::lire_liste;
use super::operation::{Arguments, Operation};
use super::session::Session;
use super::stats::{mediane, moyenne};
use super::trig::{deg_vers_rad, rad_vers_deg, trig_valeur, TrigFn};

/// Issue d’un appel : nombre, mémoire effacée, ou erreur typée.
#[derive(Clone, Debug, PartialEq)]
pub enum Issue {
    Succes(f64),
    Efface,
    Erreur(ErreurCalc),
}

impl Issue {
    pub fn valeur(&self) -> Option<f64> {
        match self {
            Issue::Succes(v) => Some(*v),
            Issue::Efface | Issue::Erreur(_) => None,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::Succes(v) => f.write_str(&format_nombre(*v)),
            Issue::Efface => f.write_str("Memory cleared"),
            Issue::Erreur(e) => write!(f, "{e}"),
        }
    }
}

/// API publique : exécute `op` sur `args` dans `session`.
pub fn executer(session: &mut Session, op: Operation, args: Arguments) -> Issue {
    // résumé AVANT effets (MR affiche la mémoire lue)
    let entrees = resume_entrees(op, &args, session.memoire);

    let issue = calculer(session, op, &args).unwrap_or_else(Issue::Erreur);

    if let Issue::Succes(v) = issue {
        if op.ecrase_memoire() {
            session.memoire = Some(v);
        }
    }

    debug!(
        operation = op.libelle(),
        entrees = %entrees,
        issue = %issue,
        memoire = ?session.memoire,
        "executer"
    );

    session.historique.ajouter(op, entrees, issue.to_string());
    issue
}

/// Table de dispatch : calcul pur + règles mémoire propres (M+, M-, MC).
fn calculer(session: &mut Session, op: Operation, args: &Arguments) -> Result<Issue, ErreurCalc> {
    use Arguments::{Aucun, Deux, Liste, Un};
    use Operation::*;

    let unite = session.unite_angle;

    let v = match (op, args) {
        // --- deux nombres ---
        (Addition, &Deux(a, b)) => a + b,
        (Soustraction, &Deux(a, b)) => a - b,
        (Multiplication, &Deux(a, b)) => a * b,
        (Division, &Deux(a, b)) => {
            if b == 0.0 {
                return Err(ErreurCalc::DivisionParZero);
            }
            a / b
        }
        // NaN/inf IEEE laissés tels quels
        (Puissance, &Deux(a, b)) => a.powf(b),
        (Modulo, &Deux(a, b)) => reste(a, b)?,
        (Pourcentage, &Deux(base, pct)) => base * pct / 100.0,

        // --- un nombre ---
        (RacineCarree, &Un(a)) => {
            if a < 0.0 {
                return Err(ErreurCalc::RacineNegative);
            }
            a.sqrt()
        }
        (RacineCubique, &Un(a)) => racine_cubique(a),
        (Log10, &Un(a)) | (Ln, &Un(a)) => {
            if a <= 0.0 {
                return Err(ErreurCalc::EntreeNonPositive);
            }
            if op == Log10 {
                a.log10()
            } else {
                a.ln()
            }
        }
        (Exp, &Un(a)) => a.exp(),
        (Factorielle, &Un(a)) => factorielle(a)?,

        (Sin, &Un(a)) => trig_valeur(a, TrigFn::Sin, unite),
        (Cos, &Un(a)) => trig_valeur(a, TrigFn::Cos, unite),
        (Tan, &Un(a)) => trig_valeur(a, TrigFn::Tan, unite),

        // conversions : indépendantes de l’unité de session
        (DegresVersRadians, &Un(a)) => deg_vers_rad(a),
        (RadiansVersDegres, &Un(a)) => rad_vers_deg(a),

        // --- mémoire ---
        (MemoireAjout, &Un(a)) => {
            let m = session.memoire.unwrap_or(0.0) + a;
            session.memoire = Some(m);
            m
        }
        (MemoireRetrait, &Un(a)) => {
            let m = session.memoire.unwrap_or(0.0) - a;
            session.memoire = Some(m);
            m
        }
        (AfficherMemoire, Aucun) | (MemoireRappel, Aucun) => {
            session.memoire.ok_or(ErreurCalc::MemoireVide)?
        }
        (MemoireEffacer, Aucun) => {
            session.memoire = None;
            info!("mémoire effacée");
            return Ok(Issue::Efface);
        }

        // --- constante ---
        (Pi, Aucun) => PI,

        // --- listes (lecture atomique) ---
        (Moyenne, Liste(texte)) => moyenne(&lire_liste(texte)?),
        (Mediane, Liste(texte)) => mediane(&lire_liste(texte)?),

        // arité incohérente
        _ => {
            return Err(ErreurCalc::arguments_invalides(
                op.libelle(),
                op.arite().description(),
            ))
        }
    };

    Ok(Issue::Succes(v))
}
