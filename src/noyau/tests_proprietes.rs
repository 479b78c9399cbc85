//! Tests propriétés (campagne) : invariants transverses du noyau.
//!
//! But : vérifier ce qui doit tenir quelle que soit la formule.
//! - chaque gabarit livré s'analyse, s'échantillonne plein et reste fini
//! - l'analyse est déterministe et l'affichage se ré-analyse à l'identique
//! - les plafonds (caractères, jetons, profondeur) coupent court
//!
//! Notes (aligné avec l'état actuel du noyau) :
//! - tan(x / 2) a un pôle en x = pi, mais aucun pas d'échantillonnage ne
//!   tombe exactement dessus (pi n'est pas un flottant) : la courbe reste
//!   finie, simplement très raide autour du pôle.
//! - la profondeur de pile se dépasse sans dépasser le plafond de jetons
//!   avec une chaîne de moins unaires : un jeton par étage de pile.

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use crate::partie::config::ConfigPartie;

use super::{analyse, echantillonne, evalue, ErreurExpr, ErreurLexeme, ErreurSyntaxe};

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Gabarits livrés ------------------------ */

#[test]
fn prop_gabarits_officiels_tracables() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let cfg = ConfigPartie::default();
    let (x_min, x_max) = cfg.domaine;

    for reglage in [&cfg.facile, &cfg.moyen, &cfg.difficile, &cfg.expert] {
        for gabarit in &reglage.gabarits {
            budget(t0, max);

            let expr = analyse(gabarit)
                .unwrap_or_else(|e| panic!("gabarit refusé: {gabarit:?} err={e}"));

            // même texte, même arbre ; l'affichage se ré-analyse tel quel
            assert_eq!(analyse(gabarit).as_ref(), Ok(&expr), "gabarit={gabarit:?}");
            let affiche = expr.to_string();
            assert_eq!(
                analyse(&affiche).as_ref(),
                Ok(&expr),
                "gabarit={gabarit:?} affiche={affiche:?}"
            );

            // courbe pleine : aucun gabarit livré ne perd un seul point
            let courbe = echantillonne(&expr, x_min, x_max, cfg.nb_pas);
            assert!(courbe.valide, "gabarit={gabarit:?}");
            assert_eq!(courbe.points.len(), cfg.nb_pas + 1, "gabarit={gabarit:?}");
            for &(x, y) in &courbe.points {
                assert!(x.is_finite() && y.is_finite(), "gabarit={gabarit:?} x={x}");
            }

            // échantillonnage pur : deux passes, mêmes bits
            assert_eq!(
                echantillonne(&expr, x_min, x_max, cfg.nb_pas),
                courbe,
                "gabarit={gabarit:?}"
            );

            // la fenêtre englobe la courbe
            let (bas, haut) = courbe.fenetre(cfg.marge_y);
            assert!(
                bas <= courbe.y_min && courbe.y_max <= haut,
                "gabarit={gabarit:?} fenetre=({bas}, {haut})"
            );
        }
    }
}

/* ------------------------ Ré-analyse des formes délicates ------------------------ */

#[test]
fn prop_reanalyse_des_formes_delicates() {
    // formes où précédence et associativité se voient à l'affichage
    let formules = [
        "-x ** 2",
        "2 ** -3 ** 2",
        "1 - 2 - 3",
        "-7 % 3",
        "2 * -3",
        "pow(x, 3) - pow(2, x)",
        "sin(cos(x)) ** 2",
        "-(x + 1) * 2",
        "x / 2 / 2",
        "e ** -x",
    ];

    for formule in formules {
        let expr = analyse(formule)
            .unwrap_or_else(|e| panic!("formule refusée: {formule:?} err={e}"));
        let affiche = expr.to_string();
        assert_eq!(
            analyse(&affiche).as_ref(),
            Ok(&expr),
            "formule={formule:?} affiche={affiche:?}"
        );
    }
}

/* ------------------------ Plafonds ------------------------ */

#[test]
fn prop_plafonds_coupent_court() {
    // trop de caractères : coupé au lexeur, avant toute analyse
    let saisie = "1+".repeat(2500);
    assert!(matches!(
        analyse(&saisie),
        Err(ErreurExpr::Lexeme(ErreurLexeme::SaisieTropLongue(_)))
    ));

    // trop de jetons : coupé à l'entrée du parseur
    let mut saisie = String::from("x");
    for _ in 0..600 {
        saisie.push_str("+x");
    }
    assert!(matches!(
        analyse(&saisie),
        Err(ErreurExpr::Syntaxe(ErreurSyntaxe::ExpressionTropLongue(_)))
    ));

    // pile trop profonde : un moins unaire par étage
    let saisie = format!("{}x", "-".repeat(600));
    assert!(matches!(
        analyse(&saisie),
        Err(ErreurExpr::Syntaxe(ErreurSyntaxe::ExpressionTropProfonde))
    ));
}

#[test]
fn prop_sous_les_plafonds_accepte() {
    // 510 moins unaires : sous le plafond de profondeur, nombre pair
    let saisie = format!("{}x", "-".repeat(510));
    let expr = analyse(&saisie).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(evalue(&expr, 2.0), Ok(2.0));

    // 501 termes : sous le plafond de jetons, somme entière exacte
    let mut saisie = String::from("x");
    for _ in 0..500 {
        saisie.push_str("+x");
    }
    let expr = analyse(&saisie).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(evalue(&expr, 1.0), Ok(501.0));
}
