// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), identifiants résolus
// - Puis reconstruire Expr
//
// Règles:
// - Ident(name):
//    - "x"                  => la variable
//    - "pi" / "e"           => constante du registre
//    - fonction du registre => DOIT être suivie de '(' ; l'arité se compte
//                              par virgules et se vérifie à la ')'
//    - sinon                => NomInconnu (grammaire close, rien d'autre ne passe)
// - Moins unaire:
//    - si '-' arrive quand on n'attend PAS une valeur, il devient un vrai
//      marqueur Neg en RPN (préfixe: jamais de dépilage à l'empilement)
// - Juxtapositions ("2x", "(1)(2)") refusées : tout opérateur est explicite.
//
// NOTE:
// - Les fonctions restent collées à leur argument : elles bloquent le
//   dépilage des opérateurs, comme '('.

use super::erreurs::ErreurSyntaxe;
use super::expr::Expr;
use super::jetons::Tok;
use super::registre::{Constante, Fonction};

/// SAFE: bornes de la passe RPN. La profondeur de pile majore aussi la
/// profondeur de l'arbre final, donc la récursion de l'évaluateur.
pub const JETONS_MAX: usize = 1024;
pub const PROFONDEUR_MAX: usize = 512;

/* ------------------------ opérateurs binaires ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBin {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

/// Précédence du moins unaire : sous `**`, au-dessus de `*` `/` `%`.
const PRECEDENCE_NEG: i32 = 3;

impl OpBin {
    fn precedence(self) -> i32 {
        match self {
            OpBin::Add | OpBin::Sub => 1,
            OpBin::Mul | OpBin::Div | OpBin::Mod => 2,
            OpBin::Pow => 4,
        }
    }

    fn est_associatif_droite(self) -> bool {
        matches!(self, OpBin::Pow)
    }

    fn en_expr(self, a: Expr, b: Expr) -> Expr {
        let (a, b) = (Box::new(a), Box::new(b));
        match self {
            OpBin::Add => Expr::Add(a, b),
            OpBin::Sub => Expr::Sub(a, b),
            OpBin::Mul => Expr::Mul(a, b),
            OpBin::Div => Expr::Div(a, b),
            OpBin::Mod => Expr::Mod(a, b),
            OpBin::Pow => Expr::Pow(a, b),
        }
    }
}

/* ------------------------ éléments RPN + pile ------------------------ */

#[derive(Clone, Debug, PartialEq)]
pub enum ElemRpn {
    Num(f64),
    X,
    Cste(Constante),
    Bin(OpBin),
    Neg,
    Appel(Fonction),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum OpPile {
    Bin(OpBin),
    MoinsUnaire,
    Fonction(Fonction, usize), // virgules déjà vues dans l'appel
    Par,                       // '(' de groupement
}

fn verifie_pile(ops: &[OpPile]) -> Result<(), ErreurSyntaxe> {
    if ops.len() > PROFONDEUR_MAX {
        return Err(ErreurSyntaxe::ExpressionTropProfonde);
    }
    Ok(())
}

/// Empile un opérateur binaire après avoir dépilé ce que la précédence et
/// l'associativité exigent. '(' et les fonctions bloquent le dépilage.
fn empile_binaire(
    op: OpBin,
    prev_was_value: bool,
    ops: &mut Vec<OpPile>,
    out: &mut Vec<ElemRpn>,
) -> Result<(), ErreurSyntaxe> {
    if !prev_was_value {
        return Err(ErreurSyntaxe::OperandeManquante);
    }

    while let Some(&top) = ops.last() {
        let (p_top, elem) = match top {
            OpPile::Bin(o) => (o.precedence(), ElemRpn::Bin(o)),
            OpPile::MoinsUnaire => (PRECEDENCE_NEG, ElemRpn::Neg),
            OpPile::Par | OpPile::Fonction(..) => break,
        };

        let doit_pop = if op.est_associatif_droite() {
            p_top > op.precedence()
        } else {
            p_top >= op.precedence()
        };
        if !doit_pop {
            break;
        }

        ops.pop();
        out.push(elem);
    }

    ops.push(OpPile::Bin(op));
    verifie_pile(ops)
}

/* ------------------------ Tok -> RPN ------------------------ */

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Ident("sin"), LPar, Ident("x"), RPar, End]
///   rpn:    [X, Appel(Sin)]
pub fn to_rpn(jetons: &[Tok]) -> Result<Vec<ElemRpn>, ErreurSyntaxe> {
    if jetons.len() > JETONS_MAX {
        return Err(ErreurSyntaxe::ExpressionTropLongue(jetons.len()));
    }

    let mut out: Vec<ElemRpn> = Vec::new();
    let mut ops: Vec<OpPile> = Vec::new();

    // "valeur" = un atome ou une expression fermée.
    // Sert à détecter le moins unaire et les juxtapositions.
    let mut prev_was_value = false;

    // Fonction vue mais dont la '(' n'est pas encore arrivée.
    let mut fonction_en_attente: Option<Fonction> = None;

    for tok in jetons {
        if let Some(fx) = fonction_en_attente {
            if !matches!(tok, Tok::LPar) {
                return Err(ErreurSyntaxe::ParentheseFonctionAttendue(fx.nom()));
            }
        }

        match tok {
            Tok::Num(v) => {
                if prev_was_value {
                    return Err(ErreurSyntaxe::ValeursAdjacentes);
                }
                out.push(ElemRpn::Num(*v));
                prev_was_value = true;
            }

            Tok::Ident(nom) => {
                if prev_was_value {
                    return Err(ErreurSyntaxe::ValeursAdjacentes);
                }
                if nom == "x" {
                    out.push(ElemRpn::X);
                    prev_was_value = true;
                } else if let Some(c) = Constante::depuis_nom(nom) {
                    out.push(ElemRpn::Cste(c));
                    prev_was_value = true;
                } else if let Some(fx) = Fonction::depuis_nom(nom) {
                    fonction_en_attente = Some(fx);
                } else {
                    return Err(ErreurSyntaxe::NomInconnu(nom.clone()));
                }
            }

            Tok::LPar => {
                if let Some(fx) = fonction_en_attente.take() {
                    ops.push(OpPile::Fonction(fx, 0));
                } else {
                    if prev_was_value {
                        return Err(ErreurSyntaxe::ValeursAdjacentes);
                    }
                    ops.push(OpPile::Par);
                }
                verifie_pile(&ops)?;
                prev_was_value = false;
            }

            Tok::RPar => {
                if !prev_was_value {
                    // ')' juste après '(' , ',' ou un opérateur
                    return Err(match ops.last().copied() {
                        Some(OpPile::Par) => ErreurSyntaxe::GroupeVide,
                        Some(OpPile::Fonction(fx, 0)) => ErreurSyntaxe::MauvaiseArite {
                            nom: fx.nom(),
                            attendu: fx.arite(),
                            recu: 0,
                        },
                        Some(OpPile::Fonction(..)) => ErreurSyntaxe::ArgumentVide,
                        Some(_) => ErreurSyntaxe::OperandeManquante,
                        None => ErreurSyntaxe::ParentheseEnTrop,
                    });
                }

                // dépile jusqu'à '(' ou jusqu'à la fonction ouvrante
                loop {
                    match ops.pop() {
                        Some(OpPile::Bin(o)) => out.push(ElemRpn::Bin(o)),
                        Some(OpPile::MoinsUnaire) => out.push(ElemRpn::Neg),
                        Some(OpPile::Par) => break,
                        Some(OpPile::Fonction(fx, virgules)) => {
                            let recu = virgules + 1;
                            if recu != fx.arite() {
                                return Err(ErreurSyntaxe::MauvaiseArite {
                                    nom: fx.nom(),
                                    attendu: fx.arite(),
                                    recu,
                                });
                            }
                            out.push(ElemRpn::Appel(fx));
                            break;
                        }
                        None => return Err(ErreurSyntaxe::ParentheseEnTrop),
                    }
                }
                prev_was_value = true;
            }

            Tok::Comma => {
                if !prev_was_value {
                    return Err(match ops.last().copied() {
                        Some(OpPile::Fonction(..)) => ErreurSyntaxe::ArgumentVide,
                        Some(OpPile::Bin(_)) | Some(OpPile::MoinsUnaire) => {
                            ErreurSyntaxe::OperandeManquante
                        }
                        Some(OpPile::Par) | None => ErreurSyntaxe::VirguleInattendue,
                    });
                }

                // dépile l'argument courant jusqu'à la fonction ouvrante
                loop {
                    match ops.pop() {
                        Some(OpPile::Bin(o)) => out.push(ElemRpn::Bin(o)),
                        Some(OpPile::MoinsUnaire) => out.push(ElemRpn::Neg),
                        Some(OpPile::Fonction(fx, virgules)) => {
                            ops.push(OpPile::Fonction(fx, virgules + 1));
                            break;
                        }
                        Some(OpPile::Par) | None => {
                            return Err(ErreurSyntaxe::VirguleInattendue)
                        }
                    }
                }
                prev_was_value = false;
            }

            Tok::Plus => {
                empile_binaire(OpBin::Add, prev_was_value, &mut ops, &mut out)?;
                prev_was_value = false;
            }
            Tok::Star => {
                empile_binaire(OpBin::Mul, prev_was_value, &mut ops, &mut out)?;
                prev_was_value = false;
            }
            Tok::Slash => {
                empile_binaire(OpBin::Div, prev_was_value, &mut ops, &mut out)?;
                prev_was_value = false;
            }
            Tok::Percent => {
                empile_binaire(OpBin::Mod, prev_was_value, &mut ops, &mut out)?;
                prev_was_value = false;
            }
            Tok::DoubleStar => {
                empile_binaire(OpBin::Pow, prev_was_value, &mut ops, &mut out)?;
                prev_was_value = false;
            }

            Tok::Minus => {
                if prev_was_value {
                    empile_binaire(OpBin::Sub, prev_was_value, &mut ops, &mut out)?;
                } else {
                    // préfixe : s'empile sans rien dépiler, ses opérandes
                    // sont à sa droite
                    ops.push(OpPile::MoinsUnaire);
                    verifie_pile(&ops)?;
                }
                prev_was_value = false;
            }

            Tok::End => break,
        }
    }

    if !prev_was_value {
        if out.is_empty() && ops.is_empty() {
            return Err(ErreurSyntaxe::EntreeVide);
        }
        return Err(ErreurSyntaxe::ExpressionIncomplete);
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        match op {
            OpPile::Bin(o) => out.push(ElemRpn::Bin(o)),
            OpPile::MoinsUnaire => out.push(ElemRpn::Neg),
            OpPile::Par | OpPile::Fonction(..) => {
                return Err(ErreurSyntaxe::ParentheseNonFermee)
            }
        }
    }

    Ok(out)
}

/* ------------------------ RPN -> Expr ------------------------ */

/// Construit une Expr à partir d'une RPN résolue.
///
/// Les arités étant déjà vérifiées par `to_rpn`, les dépilements ratés ici
/// relèvent d'une RPN forgée à la main, pas du pipeline normal.
pub fn from_rpn(rpn: &[ElemRpn]) -> Result<Expr, ErreurSyntaxe> {
    let mut st: Vec<Expr> = Vec::new();

    for elem in rpn.iter().cloned() {
        match elem {
            ElemRpn::Num(v) => st.push(Expr::Num(v)),
            ElemRpn::X => st.push(Expr::X),
            ElemRpn::Cste(c) => st.push(Expr::Cste(c)),

            ElemRpn::Neg => {
                let a = st.pop().ok_or(ErreurSyntaxe::OperandeManquante)?;
                st.push(Expr::Neg(Box::new(a)));
            }

            ElemRpn::Bin(op) => {
                let b = st.pop().ok_or(ErreurSyntaxe::OperandeManquante)?;
                let a = st.pop().ok_or(ErreurSyntaxe::OperandeManquante)?;
                st.push(op.en_expr(a, b));
            }

            ElemRpn::Appel(fx) => {
                let mut args = Vec::with_capacity(fx.arite());
                for _ in 0..fx.arite() {
                    args.push(st.pop().ok_or(ErreurSyntaxe::OperandeManquante)?);
                }
                args.reverse();
                st.push(Expr::Appel(fx, args));
            }
        }
    }

    let expr = st.pop().ok_or(ErreurSyntaxe::EntreeVide)?;
    if !st.is_empty() {
        return Err(ErreurSyntaxe::ValeursAdjacentes);
    }
    Ok(expr)
}
