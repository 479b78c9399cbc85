//! Noyau — analyse et évaluation (pipeline réel)
//!
//! analyse : tokenize -> RPN -> Expr   (une fois par saisie)
//! evalue  : Expr + x -> f64           (une fois par abscisse, sans allocation)
//!
//! Remarque : l'évaluation est purement f64 et sans effet de bord. Un échec
//! (domaine, division par zéro, résultat non fini) est une erreur PAR POINT :
//! l'échantillonneur écarte le point, rien ne panique jamais.

use super::erreurs::{ErreurEval, ErreurExpr};
use super::expr::Expr;
use super::jetons::tokenize;
use super::rpn::{from_rpn, to_rpn};

/// API publique : analyse une saisie complète en AST.
/// Les blancs sont ignorés par le lexeur : inutile de nettoyer avant.
pub fn analyse(texte: &str) -> Result<Expr, ErreurExpr> {
    // 1) Jetons
    let jetons = tokenize(texte)?;

    // 2) RPN (identifiants résolus, arités vérifiées)
    let rpn = to_rpn(&jetons)?;

    // 3) AST (Expr)
    let expr = from_rpn(&rpn)?;

    Ok(expr)
}

/// API publique : évalue `expr` en un point.
///
/// Le contrôle de finitude ne porte que sur la racine : un infini
/// intermédiaire peut se résorber (ex: `1/exp(x**2)` aux grands x vaut 0).
pub fn evalue(expr: &Expr, x: f64) -> Result<f64, ErreurEval> {
    let y = evalue_noeud(expr, x)?;
    if !y.is_finite() {
        return Err(ErreurEval::NonFini);
    }
    Ok(y)
}

fn evalue_noeud(expr: &Expr, x: f64) -> Result<f64, ErreurEval> {
    use Expr::*;

    let v = match expr {
        Num(v) => *v,
        X => x,
        Cste(c) => c.valeur(),

        Neg(a) => -evalue_noeud(a, x)?,

        Add(a, b) => evalue_noeud(a, x)? + evalue_noeud(b, x)?,
        Sub(a, b) => evalue_noeud(a, x)? - evalue_noeud(b, x)?,
        Mul(a, b) => evalue_noeud(a, x)? * evalue_noeud(b, x)?,

        Div(a, b) => {
            let num = evalue_noeud(a, x)?;
            let den = evalue_noeud(b, x)?;
            // == 0.0 attrape aussi -0.0
            if den == 0.0 {
                return Err(ErreurEval::DivisionParZero);
            }
            num / den
        }

        Mod(a, b) => {
            let num = evalue_noeud(a, x)?;
            let den = evalue_noeud(b, x)?;
            if den == 0.0 {
                return Err(ErreurEval::ModuloParZero);
            }
            modulo_plancher(num, den)
        }

        Pow(a, b) => {
            let base = evalue_noeud(a, x)?;
            let exposant = evalue_noeud(b, x)?;
            // base négative + exposant fractionnaire => NaN, attrapé en racine
            base.powf(exposant)
        }

        Appel(fx, args) => {
            // au plus 2 arguments dans le registre actuel
            let mut valeurs = [0.0f64; 2];
            if args.len() > valeurs.len() {
                return Err(ErreurEval::Interne("trop d'arguments pour le registre"));
            }
            for (case, arg) in valeurs.iter_mut().zip(args.iter()) {
                *case = evalue_noeud(arg, x)?;
            }
            fx.applique(&valeurs[..args.len()])?
        }
    };

    Ok(v)
}

/// Modulo plancher : le reste suit le signe du diviseur.
/// `a % b = a - b*floor(a/b)`, donc `-7 % 3 == 2` et `7 % -3 == -2`.
fn modulo_plancher(a: f64, b: f64) -> f64 {
    a - b * (a / b).floor()
}

/* ------------------------ tests ------------------------ */
