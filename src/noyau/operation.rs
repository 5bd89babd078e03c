// src/noyau/operation.rs
//
// Opérations du menu (ensemble fermé) + arguments
// -----------------------------------------------
// - Operation : un tag par entrée de menu, libellé + arité + invites
// - Arguments : ce que l’UI fournit (0, 1, 2 nombres, ou une liste texte)
// - Politique mémoire : quelles opérations écrasent la mémoire sur succès

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Soustraction,
    Multiplication,
    Division,
    Puissance,
    Modulo,
    RacineCarree,
    RacineCubique,
    Log10,
    Ln,
    Exp,
    Factorielle,
    Sin,
    Cos,
    Tan,
    DegresVersRadians,
    RadiansVersDegres,
    Pi,
    AfficherMemoire,
    MemoireAjout,
    MemoireRetrait,
    MemoireRappel,
    MemoireEffacer,
    Pourcentage,
    Moyenne,
    Mediane,
}

/// Forme des entrées attendues par une opération.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arite {
    Aucune,
    Un,
    Deux,
    Liste,
}

impl Arite {
    /// Texte court pour les messages d’erreur.
    pub fn description(self) -> &'static str {
        match self {
            Arite::Aucune => "no input",
            Arite::Un => "one number",
            Arite::Deux => "two numbers",
            Arite::Liste => "a list of numbers",
        }
    }
}

/// Entrées d’un appel à `executer`.
///
/// `Liste` garde le texte brut : le noyau le découpe et le rejette en bloc si besoin.
#[derive(Clone, Debug, PartialEq)]
pub enum Arguments {
    Aucun,
    Un(f64),
    Deux(f64, f64),
    Liste(String),
}

impl Operation {
    /// Ordre du menu.
    pub const TOUTES: [Operation; 26] = [
        Operation::Addition,
        Operation::Soustraction,
        Operation::Multiplication,
        Operation::Division,
        Operation::Puissance,
        Operation::Modulo,
        Operation::RacineCarree,
        Operation::RacineCubique,
        Operation::Log10,
        Operation::Ln,
        Operation::Exp,
        Operation::Factorielle,
        Operation::Sin,
        Operation::Cos,
        Operation::Tan,
        Operation::DegresVersRadians,
        Operation::RadiansVersDegres,
        Operation::Pi,
        Operation::AfficherMemoire,
        Operation::MemoireAjout,
        Operation::MemoireRetrait,
        Operation::MemoireRappel,
        Operation::MemoireEffacer,
        Operation::Pourcentage,
        Operation::Moyenne,
        Operation::Mediane,
    ];

    /// Libellé affiché dans le menu (et dans l’historique).
    pub fn libelle(self) -> &'static str {
        use Operation::*;
        match self {
            Addition => "Addition",
            Soustraction => "Subtraction",
            Multiplication => "Multiplication",
            Division => "Division",
            Puissance => "Power (x^y)",
            Modulo => "Modulus (x % y)",
            RacineCarree => "Square Root",
            RacineCubique => "Cube Root",
            Log10 => "Logarithm (base 10)",
            Ln => "Natural Log (ln)",
            Exp => "Exponential (e^x)",
            Factorielle => "Factorial",
            Sin => "Sine",
            Cos => "Cosine",
            Tan => "Tangent",
            DegresVersRadians => "Degree → Radian",
            RadiansVersDegres => "Radian → Degree",
            Pi => "Pi (constant)",
            AfficherMemoire => "Show Memory",
            MemoireAjout => "Memory Add (M+)",
            MemoireRetrait => "Memory Subtract (M-)",
            MemoireRappel => "Memory Recall (MR)",
            MemoireEffacer => "Memory Clear (MC)",
            Pourcentage => "Percentage",
            Moyenne => "Average / Mean",
            Mediane => "Median",
        }
    }

    pub fn arite(self) -> Arite {
        use Operation::*;
        match self {
            Addition | Soustraction | Multiplication | Division | Puissance | Modulo
            | Pourcentage => Arite::Deux,

            RacineCarree | RacineCubique | Log10 | Ln | Exp | Factorielle | Sin | Cos | Tan
            | DegresVersRadians | RadiansVersDegres | MemoireAjout | MemoireRetrait => Arite::Un,

            Pi | AfficherMemoire | MemoireRappel | MemoireEffacer => Arite::Aucune,

            Moyenne | Mediane => Arite::Liste,
        }
    }

    /// Invites des champs de saisie (une par champ).
    pub fn invites(self) -> &'static [&'static str] {
        use Operation::*;
        match self {
            Pourcentage => &["Enter base number", "Enter percentage"],
            DegresVersRadians => &["Enter angle in degrees"],
            RadiansVersDegres => &["Enter angle in radians"],
            MemoireAjout => &["Add value to memory (M+)"],
            MemoireRetrait => &["Subtract value from memory (M-)"],
            Moyenne | Mediane => &["Enter numbers separated by spaces (e.g., 1 2 3 4)"],
            _ => match self.arite() {
                Arite::Deux => &["Enter first number", "Enter second number"],
                Arite::Un => &["Enter number"],
                Arite::Aucune | Arite::Liste => &[],
            },
        }
    }

    /// Vrai si un succès numérique de cette opération devient la nouvelle mémoire.
    ///
    /// Lectures (MR, affichage) et Pourcentage/Moyenne/Médiane ne touchent jamais la mémoire ;
    /// M+/M-/MC ont leur propre règle (appliquée directement dans `executer`).
    pub fn ecrase_memoire(self) -> bool {
        use Operation::*;
        !matches!(
            self,
            AfficherMemoire
                | MemoireRappel
                | MemoireAjout
                | MemoireRetrait
                | MemoireEffacer
                | Pourcentage
                | Moyenne
                | Mediane
        )
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.libelle())
    }
}
