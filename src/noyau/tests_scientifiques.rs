//! Tests scientifiques (campagne) : propriétés du noyau de bout en bout.
//!
//! Chaque test passe par `executer` (pas par les primitives) pour couvrir
//! aussi les effets de session : mémoire + historique.

use std::f64::consts::PI;

use super::{executer, Arguments, ErreurCalc, Issue, Operation, Session, UniteAngle};

const EPS: f64 = 1e-9;

fn val(s: &mut Session, op: Operation, args: Arguments) -> f64 {
    executer(s, op, args.clone())
        .valeur()
        .unwrap_or_else(|| panic!("op={op:?} args={args:?} : pas de valeur"))
}

fn assert_erreur(s: &mut Session, op: Operation, args: Arguments, attendu: ErreurCalc) {
    let issue = executer(s, op, args.clone());
    assert_eq!(issue, Issue::Erreur(attendu), "op={op:?} args={args:?}");
}

fn assert_proche(a: f64, b: f64, ctx: &str) {
    assert!((a - b).abs() < EPS, "{ctx}: {a} != {b}");
}

/* ------------------------ Division ------------------------ */

#[test]
fn sci_division_ieee_exacte() {
    let mut s = Session::default();
    for (a, b) in [(1.0, 3.0), (-7.5, 2.0), (1e300, 1e-10), (0.1, 0.7)] {
        assert_eq!(val(&mut s, Operation::Division, Arguments::Deux(a, b)), a / b);
    }
}

#[test]
fn sci_division_par_zero_memoire_intacte() {
    let mut s = Session::default();
    assert_erreur(
        &mut s,
        Operation::Division,
        Arguments::Deux(5.0, 0.0),
        ErreurCalc::DivisionParZero,
    );
    assert_eq!(s.memoire(), None);
}

/* ------------------------ Modulo ------------------------ */

#[test]
fn sci_modulo_signe_du_diviseur() {
    let mut s = Session::default();
    assert_eq!(val(&mut s, Operation::Modulo, Arguments::Deux(-7.0, 3.0)), 2.0);
    assert_eq!(s.memoire(), Some(2.0));
    assert_eq!(val(&mut s, Operation::Modulo, Arguments::Deux(7.0, -3.0)), -2.0);
    assert_eq!(val(&mut s, Operation::Modulo, Arguments::Deux(7.5, 2.0)), 1.5);
    assert_erreur(
        &mut s,
        Operation::Modulo,
        Arguments::Deux(7.0, 0.0),
        ErreurCalc::ModuloParZero,
    );
    assert_eq!(s.memoire(), Some(1.5));
}

/* ------------------------ Racines + factorielle ------------------------ */

#[test]
fn sci_racine_carree_au_carre() {
    let mut s = Session::default();
    for a in [0.0, 0.25, 2.0, 10.0, 12345.678] {
        let r = val(&mut s, Operation::RacineCarree, Arguments::Un(a));
        assert_proche(r * r, a, "√a²");
    }
    assert_erreur(
        &mut s,
        Operation::RacineCarree,
        Arguments::Un(-1.0),
        ErreurCalc::RacineNegative,
    );
}

#[test]
fn sci_factorielle() {
    let mut s = Session::default();
    assert_eq!(val(&mut s, Operation::Factorielle, Arguments::Un(5.0)), 120.0);
    for a in [-1.0, 2.5] {
        assert_erreur(
            &mut s,
            Operation::Factorielle,
            Arguments::Un(a),
            ErreurCalc::FactorielleInvalide,
        );
    }
}

/* ------------------------ Trig + unité d’angle ------------------------ */

#[test]
fn sci_bascule_unite_angle() {
    let mut s = Session::new(UniteAngle::Degres);
    assert_proche(val(&mut s, Operation::Sin, Arguments::Un(90.0)), 1.0, "sin 90°");
    assert_proche(val(&mut s, Operation::Sin, Arguments::Un(180.0)), 0.0, "sin 180°");

    s.set_unite_angle(UniteAngle::Radians);
    assert_proche(val(&mut s, Operation::Sin, Arguments::Un(PI / 2.0)), 1.0, "sin π/2");
    assert_proche(val(&mut s, Operation::Cos, Arguments::Un(PI)), -1.0, "cos π");
}

#[test]
fn sci_conversions_independantes_unite() {
    for unite in [UniteAngle::Degres, UniteAngle::Radians] {
        let mut s = Session::new(unite);
        assert_proche(
            val(&mut s, Operation::DegresVersRadians, Arguments::Un(180.0)),
            PI,
            "deg->rad",
        );
        assert_proche(
            val(&mut s, Operation::RadiansVersDegres, Arguments::Un(PI)),
            180.0,
            "rad->deg",
        );
    }
}

/* ------------------------ Mémoire ------------------------ */

#[test]
fn sci_memoire_aller_retour() {
    let mut s = Session::default();
    val(&mut s, Operation::MemoireAjout, Arguments::Un(5.0));
    assert_eq!(s.memoire(), Some(5.0));
    val(&mut s, Operation::MemoireRetrait, Arguments::Un(2.0));
    assert_eq!(s.memoire(), Some(3.0));
    assert_eq!(
        executer(&mut s, Operation::MemoireEffacer, Arguments::Aucun),
        Issue::Efface
    );
    assert_eq!(s.memoire(), None);
    assert_erreur(
        &mut s,
        Operation::MemoireRappel,
        Arguments::Aucun,
        ErreurCalc::MemoireVide,
    );
}

#[test]
fn sci_afficher_memoire_pleine() {
    let mut s = Session::default();
    val(&mut s, Operation::Addition, Arguments::Deux(4.0, 3.0));
    assert_eq!(
        executer(&mut s, Operation::AfficherMemoire, Arguments::Aucun),
        Issue::Succes(7.0)
    );
    assert_eq!(s.memoire(), Some(7.0));
    assert_eq!(
        executer(&mut s, Operation::MemoireRappel, Arguments::Aucun),
        Issue::Succes(7.0)
    );
    assert_eq!(s.memoire(), Some(7.0));
    assert_eq!(s.historique().len(), 3);
}

#[test]
fn sci_succes_ecrase_memoire_sauf_pourcentage() {
    let mut s = Session::default();
    let cas = [
        (Operation::Addition, Arguments::Deux(1.0, 2.0)),
        (Operation::Soustraction, Arguments::Deux(1.0, 2.0)),
        (Operation::Multiplication, Arguments::Deux(3.0, 2.0)),
        (Operation::Division, Arguments::Deux(3.0, 2.0)),
        (Operation::Puissance, Arguments::Deux(3.0, 2.0)),
        (Operation::Modulo, Arguments::Deux(7.0, 4.0)),
        (Operation::RacineCarree, Arguments::Un(9.0)),
        (Operation::RacineCubique, Arguments::Un(-27.0)),
        (Operation::Log10, Arguments::Un(10.0)),
        (Operation::Ln, Arguments::Un(2.0)),
        (Operation::Exp, Arguments::Un(1.0)),
        (Operation::Factorielle, Arguments::Un(5.0)),
        (Operation::Sin, Arguments::Un(30.0)),
        (Operation::Cos, Arguments::Un(60.0)),
        (Operation::Tan, Arguments::Un(45.0)),
        (Operation::DegresVersRadians, Arguments::Un(180.0)),
        (Operation::RadiansVersDegres, Arguments::Un(1.0)),
        (Operation::Pi, Arguments::Aucun),
    ];
    for (op, args) in cas {
        let v = val(&mut s, op, args);
        assert_eq!(s.memoire(), Some(v), "op={op:?}");
    }

    let avant = s.memoire();
    val(&mut s, Operation::Pourcentage, Arguments::Deux(50.0, 10.0));
    assert_eq!(s.memoire(), avant);
}

/* ------------------------ Listes ------------------------ */

#[test]
fn sci_moyenne_mediane() {
    let mut s = Session::default();
    let l = |t: &str| Arguments::Liste(t.to_string());
    assert_eq!(val(&mut s, Operation::Moyenne, l("1 2 3 4")), 2.5);
    assert_eq!(val(&mut s, Operation::Mediane, l("1 2 3 4")), 2.5);
    assert_eq!(val(&mut s, Operation::Mediane, l("1 2 3")), 2.0);
    assert_erreur(&mut s, Operation::Moyenne, l("1 foo 3"), ErreurCalc::ListeInvalide);
}

/* ------------------------ Historique ------------------------ */

#[test]
fn sci_historique_ordre_et_affichage() {
    let mut s = Session::default();
    let appels = [
        (Operation::Addition, Arguments::Deux(2.0, 2.0)),
        (Operation::Log10, Arguments::Un(-1.0)),
        (Operation::Pi, Arguments::Aucun),
        (Operation::Moyenne, Arguments::Liste("x".into())),
        (Operation::MemoireEffacer, Arguments::Aucun),
        (Operation::AfficherMemoire, Arguments::Aucun),
        (Operation::Pourcentage, Arguments::Deux(80.0, 25.0)),
    ];

    let mut affichages = Vec::new();
    for (op, args) in appels.iter().cloned() {
        affichages.push(executer(&mut s, op, args).to_string());
    }

    let h = s.historique().entrees();
    assert_eq!(h.len(), appels.len());
    for (k, e) in h.iter().enumerate() {
        assert_eq!(e.operation(), appels[k].0);
        assert_eq!(e.resultat(), affichages[k]);
    }
    assert_eq!(h[1].resultat(), "Error: non-positive input");
    assert_eq!(h[6].entrees(), "80, 25%");
    assert_eq!(h[6].resultat(), "20");
}
