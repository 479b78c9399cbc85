// src/partie/config.rs
//
// Réglages d'une partie : paliers, gabarits de formules cibles, domaine.
// Structure immuable, construite une fois puis possédée par la Partie.
// Aucune table globale mutable.

/* ------------------------ paliers ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palier {
    Facile,
    Moyen,
    Difficile,
    Expert,
}

impl Palier {
    pub fn nom(&self) -> &'static str {
        match self {
            Palier::Facile => "facile",
            Palier::Moyen => "moyen",
            Palier::Difficile => "difficile",
            Palier::Expert => "expert",
        }
    }
}

/// Réglage d'un palier : plafond de niveau, points par victoire, tolérance
/// d'erreur normalisée, gabarits de formules cibles.
#[derive(Clone, Debug)]
pub struct ReglagePalier {
    pub niveau_max: u32,
    pub points: u32,
    pub tolerance: f64,
    pub gabarits: Vec<String>,
}

/* ------------------------ configuration ------------------------ */

#[derive(Clone, Debug)]
pub struct ConfigPartie {
    pub facile: ReglagePalier,
    pub moyen: ReglagePalier,
    pub difficile: ReglagePalier,
    pub expert: ReglagePalier,

    /// Domaine d'abscisses échantillonné, bornes comprises.
    pub domaine: (f64, f64),

    /// Nombre de pas d'échantillonnage (donc `nb_pas + 1` abscisses).
    pub nb_pas: usize,

    /// Marge verticale proportionnelle autour de la courbe cible.
    pub marge_y: f64,

    /// Points retirés quand le joueur passe un niveau.
    pub penalite_passe: u32,

    /// Indices disponibles pour toute la session (jamais rechargés).
    pub indices_initiaux: u32,

    /// Plancher du dénominateur de l'erreur normalisée.
    pub epsilon_norme: f64,
}

impl ConfigPartie {
    /// Palier d'un niveau : premier palier dont le plafond couvre le niveau.
    /// Toujours recalculé, jamais stocké à part.
    pub fn palier_pour(&self, niveau: u32) -> Palier {
        if niveau <= self.facile.niveau_max {
            Palier::Facile
        } else if niveau <= self.moyen.niveau_max {
            Palier::Moyen
        } else if niveau <= self.difficile.niveau_max {
            Palier::Difficile
        } else {
            Palier::Expert
        }
    }

    pub fn reglage(&self, palier: Palier) -> &ReglagePalier {
        match palier {
            Palier::Facile => &self.facile,
            Palier::Moyen => &self.moyen,
            Palier::Difficile => &self.difficile,
            Palier::Expert => &self.expert,
        }
    }
}

impl Default for ConfigPartie {
    fn default() -> Self {
        fn gabarits(liste: &[&str]) -> Vec<String> {
            liste.iter().map(|s| s.to_string()).collect()
        }

        ConfigPartie {
            facile: ReglagePalier {
                niveau_max: 3,
                points: 100,
                tolerance: 0.05,
                gabarits: gabarits(&["sin(x)", "cos(x)", "x", "x ** 2"]),
            },
            moyen: ReglagePalier {
                niveau_max: 6,
                points: 200,
                tolerance: 0.04,
                gabarits: gabarits(&[
                    "2 * sin(x)",
                    "cos(x * 2)",
                    "x ** 2 - 3",
                    "sqrt(x + 1)",
                    "log(x + 1)",
                    "sin(x) + cos(x)",
                ]),
            },
            difficile: ReglagePalier {
                niveau_max: 10,
                points: 300,
                tolerance: 0.03,
                gabarits: gabarits(&[
                    "sin(x) * cos(x)",
                    "exp(x / 5) - 2",
                    "sin(x ** 2)",
                    "tan(x / 2)",
                    "sqrt(abs(sin(x * 3)))",
                    "log(abs(x) + 1) * sin(x)",
                ]),
            },
            expert: ReglagePalier {
                niveau_max: u32::MAX,
                points: 500,
                tolerance: 0.02,
                gabarits: gabarits(&[
                    "sinh(x / 2)",
                    "sin(x) / (x + 1)",
                    "exp(-x) * sin(x * 3)",
                    "atan(x) * 2",
                    "floor(sin(x * 3)) + x / 5",
                    "cosh(x / 3) - 2",
                ]),
            },

            domaine: (0.0, 10.0),
            nb_pas: 400,
            marge_y: 0.2,
            penalite_passe: 50,
            indices_initiaux: 3,
            epsilon_norme: 1e-6,
        }
    }
}

/* ------------------------ tests ------------------------ */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seuils_de_palier_exacts() {
        let cfg = ConfigPartie::default();
        assert_eq!(cfg.palier_pour(1), Palier::Facile);
        assert_eq!(cfg.palier_pour(3), Palier::Facile);
        assert_eq!(cfg.palier_pour(4), Palier::Moyen);
        assert_eq!(cfg.palier_pour(6), Palier::Moyen);
        assert_eq!(cfg.palier_pour(7), Palier::Difficile);
        assert_eq!(cfg.palier_pour(10), Palier::Difficile);
        assert_eq!(cfg.palier_pour(11), Palier::Expert);
        assert_eq!(cfg.palier_pour(u32::MAX), Palier::Expert);
    }

    #[test]
    fn reglages_coherents() {
        let cfg = ConfigPartie::default();
        assert_eq!(cfg.reglage(Palier::Facile).points, 100);
        assert_eq!(cfg.reglage(Palier::Expert).points, 500);

        // les tolérances se resserrent avec la difficulté
        assert!(cfg.facile.tolerance > cfg.moyen.tolerance);
        assert!(cfg.moyen.tolerance > cfg.difficile.tolerance);
        assert!(cfg.difficile.tolerance > cfg.expert.tolerance);

        for palier in [Palier::Facile, Palier::Moyen, Palier::Difficile, Palier::Expert] {
            assert!(!cfg.reglage(palier).gabarits.is_empty());
        }
    }
}
