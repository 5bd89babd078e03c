// src/noyau/trig.rs
//
// Trig flottante pour sin/cos/tan + conversions d’angle
// ----------------------------------------------------
// - UniteAngle : réglage de session (Degrés par défaut)
// - trig_valeur : convertit en radians SEULEMENT si l’unité est Degrés
// - deg/rad : conversions pures, indépendantes du réglage

use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UniteAngle {
    #[default]
    Degres,
    Radians,
}

impl UniteAngle {
    pub fn libelle(self) -> &'static str {
        match self {
            UniteAngle::Degres => "Degrees",
            UniteAngle::Radians => "Radians",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

/// sin/cos/tan de `x` lu dans l’unité `unite`.
///
/// Aucun cas spécial : tan(90°) donne une très grande valeur finie (IEEE), pas une erreur.
pub fn trig_valeur(x: f64, f: TrigFn, unite: UniteAngle) -> f64 {
    let rad = match unite {
        UniteAngle::Degres => deg_vers_rad(x),
        UniteAngle::Radians => x,
    };

    match f {
        TrigFn::Sin => rad.sin(),
        TrigFn::Cos => rad.cos(),
        TrigFn::Tan => rad.tan(),
    }
}

pub fn deg_vers_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

pub fn rad_vers_deg(rad: f64) -> f64 {
    rad * 180.0 / std::f64::consts::PI
}
