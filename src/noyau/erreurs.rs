//! Erreurs du noyau : lexèmes, syntaxe, évaluation.
//!
//! Chaque étage du pipeline (`jetons` → `rpn` → `eval`) remonte son propre
//! type. `ErreurExpr` regroupe les deux premiers pour les appelants qui ne
//! veulent qu'un verdict « expression invalide ».

use thiserror::Error;

/* ------------------------ lexèmes ------------------------ */

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurLexeme {
    #[error("caractère inattendu '{caractere}' (position {position})")]
    CaractereInconnu { caractere: char, position: usize },

    #[error("nombre mal formé « {texte} » (position {position})")]
    NombreInvalide { texte: String, position: usize },

    #[error("saisie trop longue ({0} caractères)")]
    SaisieTropLongue(usize),
}

/* ------------------------ syntaxe ------------------------ */

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurSyntaxe {
    #[error("saisie vide")]
    EntreeVide,

    #[error("expression incomplète")]
    ExpressionIncomplete,

    #[error("nom inconnu « {0} »")]
    NomInconnu(String),

    #[error("la fonction {0} doit être suivie d'une parenthèse ouvrante")]
    ParentheseFonctionAttendue(&'static str),

    #[error("opérande manquante")]
    OperandeManquante,

    #[error("deux valeurs sans opérateur entre elles")]
    ValeursAdjacentes,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseEnTrop,

    #[error("parenthèse ouvrante jamais fermée")]
    ParentheseNonFermee,

    #[error("groupe () vide")]
    GroupeVide,

    #[error("argument vide dans un appel de fonction")]
    ArgumentVide,

    #[error("virgule hors d'un appel de fonction")]
    VirguleInattendue,

    #[error("{nom} attend {attendu} argument(s), reçu {recu}")]
    MauvaiseArite {
        nom: &'static str,
        attendu: usize,
        recu: usize,
    },

    #[error("expression trop imbriquée")]
    ExpressionTropProfonde,

    #[error("expression trop longue ({0} jetons)")]
    ExpressionTropLongue(usize),
}

/* ------------------------ évaluation ------------------------ */

/// Échec d'évaluation en un point. Le point est simplement écarté par
/// l'échantillonneur, jamais remonté à l'utilisateur.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurEval {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("modulo par zéro")]
    ModuloParZero,

    #[error("{fonction} hors domaine (argument {argument})")]
    HorsDomaine {
        fonction: &'static str,
        argument: f64,
    },

    #[error("résultat non fini")]
    NonFini,

    #[error("erreur interne : {0}")]
    Interne(&'static str),
}

/* ------------------------ enveloppe ------------------------ */

/// Erreur d'analyse complète (lexèmes ou syntaxe).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurExpr {
    #[error("{0}")]
    Lexeme(#[from] ErreurLexeme),

    #[error("{0}")]
    Syntaxe(#[from] ErreurSyntaxe),
}
