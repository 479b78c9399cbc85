// src/noyau/expr.rs
//
// AST d'une formule (flottants f64).
// - Num  : littéral
// - X    : la variable d'abscisse
// - Cste : constante nommée (pi, e)
// - Neg  : négation unaire, nœud à part entière (pas un Sub(0, _))
// - Appel: fonction du registre, arité déjà vérifiée au parse

use super::registre::{Constante, Fonction};

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),
    X,
    Cste(Constante),

    Neg(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Mod(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),

    Appel(Fonction, Vec<Expr>),
}

/* ------------------------ Affichage debug (parenthésage intégral) ------------------------ */

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;
        match self {
            Num(v) => write!(f, "{v}"),
            X => write!(f, "x"),
            Cste(c) => write!(f, "{}", c.nom()),
            Neg(a) => write!(f, "(-{a})"),
            Add(a, b) => write!(f, "({a}+{b})"),
            Sub(a, b) => write!(f, "({a}-{b})"),
            Mul(a, b) => write!(f, "({a}*{b})"),
            Div(a, b) => write!(f, "({a}/{b})"),
            Mod(a, b) => write!(f, "({a}%{b})"),
            Pow(a, b) => write!(f, "({a}**{b})"),
            Appel(fx, args) => {
                write!(f, "{}(", fx.nom())?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{a}")?;
                }
                write!(f, ")")
            }
        }
    }
}
