//! Noyau d'interprétation des formules
//!
//! Organisation interne :
//! - erreurs.rs     : taxonomie lexème / syntaxe / évaluation
//! - jetons.rs      : tokenisation
//! - registre.rs    : fonctions et constantes admises (grammaire close)
//! - expr.rs        : AST f64
//! - rpn.rs         : shunting-yard + construction Expr
//! - eval.rs        : analyse complète + évaluation par point
//! - echantillon.rs : courbe sur un domaine (points écartés un à un)

pub mod echantillon;
pub mod erreurs;
pub mod eval;
pub mod expr;
pub mod jetons;
pub mod registre;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use echantillon::{echantillonne, echantillonne_texte, Echantillon, Point, FENETRE_Y_DEFAUT};
pub use erreurs::{ErreurEval, ErreurExpr, ErreurLexeme, ErreurSyntaxe};
pub use eval::{analyse, evalue};
pub use expr::Expr;
pub use registre::{Constante, Fonction};
