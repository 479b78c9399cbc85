// src/noyau/registre.rs
//
// Registre clos des fonctions et constantes admises dans une formule.
// Tout nom absent d'ici est rejeté au parse : aucune résolution dynamique,
// aucun accès à quoi que ce soit d'autre que ces dix-huit fonctions.

use super::erreurs::ErreurEval;

/* ------------------------ fonctions ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Sqrt,
    Log,
    Log10,
    Exp,
    Abs,
    Floor,
    Ceil,
    Round,
    Pow,
}

impl Fonction {
    /// Résolution d'un identifiant, sensible à la casse (`Sin` est inconnu).
    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        let f = match nom {
            "sin" => Fonction::Sin,
            "cos" => Fonction::Cos,
            "tan" => Fonction::Tan,
            "asin" => Fonction::Asin,
            "acos" => Fonction::Acos,
            "atan" => Fonction::Atan,
            "sinh" => Fonction::Sinh,
            "cosh" => Fonction::Cosh,
            "tanh" => Fonction::Tanh,
            "sqrt" => Fonction::Sqrt,
            "log" => Fonction::Log,
            "log10" => Fonction::Log10,
            "exp" => Fonction::Exp,
            "abs" => Fonction::Abs,
            "floor" => Fonction::Floor,
            "ceil" => Fonction::Ceil,
            "round" => Fonction::Round,
            "pow" => Fonction::Pow,
            _ => return None,
        };
        Some(f)
    }

    pub fn nom(&self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Asin => "asin",
            Fonction::Acos => "acos",
            Fonction::Atan => "atan",
            Fonction::Sinh => "sinh",
            Fonction::Cosh => "cosh",
            Fonction::Tanh => "tanh",
            Fonction::Sqrt => "sqrt",
            Fonction::Log => "log",
            Fonction::Log10 => "log10",
            Fonction::Exp => "exp",
            Fonction::Abs => "abs",
            Fonction::Floor => "floor",
            Fonction::Ceil => "ceil",
            Fonction::Round => "round",
            Fonction::Pow => "pow",
        }
    }

    /// Nombre d'arguments attendu, connu statiquement.
    pub fn arite(&self) -> usize {
        match self {
            Fonction::Pow => 2,
            _ => 1,
        }
    }

    /// Applique la fonction à ses arguments déjà évalués.
    ///
    /// Les gardes de domaine sont écrites avec des comparaisons strictes :
    /// un argument NaN ne déclenche PAS `HorsDomaine`, il traverse et sera
    /// attrapé en racine par le contrôle de finitude.
    pub fn applique(&self, args: &[f64]) -> Result<f64, ErreurEval> {
        let hors_domaine = |a: f64| ErreurEval::HorsDomaine {
            fonction: self.nom(),
            argument: a,
        };

        match (self, args) {
            (Fonction::Sin, [a]) => Ok(a.sin()),
            (Fonction::Cos, [a]) => Ok(a.cos()),
            (Fonction::Tan, [a]) => Ok(a.tan()),

            (Fonction::Asin, [a]) => {
                if *a < -1.0 || *a > 1.0 {
                    return Err(hors_domaine(*a));
                }
                Ok(a.asin())
            }
            (Fonction::Acos, [a]) => {
                if *a < -1.0 || *a > 1.0 {
                    return Err(hors_domaine(*a));
                }
                Ok(a.acos())
            }
            (Fonction::Atan, [a]) => Ok(a.atan()),

            (Fonction::Sinh, [a]) => Ok(a.sinh()),
            (Fonction::Cosh, [a]) => Ok(a.cosh()),
            (Fonction::Tanh, [a]) => Ok(a.tanh()),

            (Fonction::Sqrt, [a]) => {
                if *a < 0.0 {
                    return Err(hors_domaine(*a));
                }
                Ok(a.sqrt())
            }
            (Fonction::Log, [a]) => {
                if *a <= 0.0 {
                    return Err(hors_domaine(*a));
                }
                Ok(a.ln())
            }
            (Fonction::Log10, [a]) => {
                if *a <= 0.0 {
                    return Err(hors_domaine(*a));
                }
                Ok(a.log10())
            }
            (Fonction::Exp, [a]) => Ok(a.exp()),

            (Fonction::Abs, [a]) => Ok(a.abs()),
            (Fonction::Floor, [a]) => Ok(a.floor()),
            (Fonction::Ceil, [a]) => Ok(a.ceil()),
            // Arrondi au pair le plus proche sur les .5, comme round() de
            // l'écosystème scientifique usuel.
            (Fonction::Round, [a]) => Ok(a.round_ties_even()),

            (Fonction::Pow, [a, b]) => Ok(a.powf(*b)),

            // L'arité est vérifiée au parse, cette branche est un garde-fou.
            _ => Err(ErreurEval::Interne("arité incohérente au registre")),
        }
    }
}

/* ------------------------ constantes ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn depuis_nom(nom: &str) -> Option<Constante> {
        match nom {
            "pi" => Some(Constante::Pi),
            "e" => Some(Constante::E),
            _ => None,
        }
    }

    pub fn nom(&self) -> &'static str {
        match self {
            Constante::Pi => "pi",
            Constante::E => "e",
        }
    }

    pub fn valeur(&self) -> f64 {
        match self {
            Constante::Pi => std::f64::consts::PI,
            Constante::E => std::f64::consts::E,
        }
    }
}
