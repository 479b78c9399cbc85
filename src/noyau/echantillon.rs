// src/noyau/echantillon.rs
//
// Échantillonnage d'une formule sur un domaine fermé.
// `nb_pas` pas réguliers => `nb_pas + 1` abscisses, bornes comprises.
// Chaque point s'évalue indépendamment : un échec écarte CE point,
// jamais la passe entière.

use super::eval::{analyse, evalue};
use super::expr::Expr;

pub type Point = (f64, f64);

/// Fenêtre verticale de repli quand aucune courbe n'est exploitable.
pub const FENETRE_Y_DEFAUT: (f64, f64) = (-5.0, 5.0);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Echantillon {
    pub points: Vec<Point>,
    pub y_min: f64,
    pub y_max: f64,
    pub valide: bool,
}

impl Echantillon {
    /// Fenêtre verticale élargie d'une marge proportionnelle à l'amplitude.
    /// Amplitude nulle (fonction constante) : élargissement absolu de ±1.0.
    /// Échantillon invalide : fenêtre de repli.
    pub fn fenetre(&self, marge: f64) -> (f64, f64) {
        if !self.valide {
            return FENETRE_Y_DEFAUT;
        }
        let amplitude = self.y_max - self.y_min;
        let delta = if amplitude == 0.0 {
            1.0
        } else {
            amplitude * marge
        };
        (self.y_min - delta, self.y_max + delta)
    }
}

/// Échantillonne `expr` de `x_min` à `x_max` inclus.
/// L'échantillon est valide dès qu'il reste au moins un point.
pub fn echantillonne(expr: &Expr, x_min: f64, x_max: f64, nb_pas: usize) -> Echantillon {
    let nb_pas = nb_pas.max(1);
    let pas = (x_max - x_min) / nb_pas as f64;

    let mut points: Vec<Point> = Vec::with_capacity(nb_pas + 1);
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for i in 0..=nb_pas {
        let x = x_min + pas * i as f64;
        let y = match evalue(expr, x) {
            Ok(v) => v,
            Err(_) => continue,
        };
        y_min = y_min.min(y);
        y_max = y_max.max(y);
        points.push((x, y));
    }

    let valide = !points.is_empty();
    if !valide {
        y_min = 0.0;
        y_max = 0.0;
    }

    Echantillon {
        points,
        y_min,
        y_max,
        valide,
    }
}

/// Variante texte : analyse puis échantillonne.
/// Une saisie inanalysable donne l'échantillon invalide par défaut.
pub fn echantillonne_texte(texte: &str, x_min: f64, x_max: f64, nb_pas: usize) -> Echantillon {
    match analyse(texte) {
        Ok(expr) => echantillonne(&expr, x_min, x_max, nb_pas),
        Err(_) => Echantillon::default(),
    }
}

/* ------------------------ tests ------------------------ */
