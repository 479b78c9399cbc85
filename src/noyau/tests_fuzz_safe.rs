//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (graine fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte les erreurs d'évaluation attendues (division par zéro,
//!   hors domaine, non-fini) ; jamais l'erreur interne
//! - invariant clé : jamais de panique, et toute valeur rendue est finie

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{analyse, echantillonne_texte, evalue, ErreurEval};

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(e: &ErreurEval) -> bool {
    // Liste blanche : erreurs qui sont *normales* pour un fuzz,
    // parce que le domaine réel est volontairement limité.
    !matches!(e, ErreurEval::Interne(_))
}

/* ------------------------ Génération de formules (bornée) ------------------------ */

fn gen_nombre(rng: &mut SmallRng) -> String {
    // petits entiers et décimaux courts, zéro compris (utile pour 1/0, log(0))
    match rng.gen_range(0..6) {
        0 => "0".to_string(),
        1 => "1".to_string(),
        2 => "2".to_string(),
        3 => "3".to_string(),
        4 => "0.5".to_string(),
        _ => "10".to_string(),
    }
}

fn gen_atome(rng: &mut SmallRng) -> String {
    match rng.gen_range(0..6) {
        0 | 1 => "x".to_string(),
        2 => gen_nombre(rng),
        3 => "pi".to_string(),
        4 => "e".to_string(),
        _ => format!("-{}", gen_nombre(rng)),
    }
}

fn gen_formule(rng: &mut SmallRng, profondeur: usize) -> String {
    if profondeur == 0 {
        return gen_atome(rng);
    }

    match rng.gen_range(0..12) {
        0 => gen_atome(rng),
        1 => format!(
            "({} + {})",
            gen_formule(rng, profondeur - 1),
            gen_formule(rng, profondeur - 1)
        ),
        2 => format!(
            "({} - {})",
            gen_formule(rng, profondeur - 1),
            gen_formule(rng, profondeur - 1)
        ),
        3 => format!(
            "({} * {})",
            gen_formule(rng, profondeur - 1),
            gen_formule(rng, profondeur - 1)
        ),
        4 => format!(
            "({} / {})",
            gen_formule(rng, profondeur - 1),
            gen_formule(rng, profondeur - 1)
        ),
        5 => format!(
            "({} % {})",
            gen_formule(rng, profondeur - 1),
            gen_formule(rng, profondeur - 1)
        ),
        // exposant simple pour que le résultat reste souvent fini
        6 => format!("({} ** {})", gen_formule(rng, profondeur - 1), gen_nombre(rng)),
        7 => format!("sin({})", gen_formule(rng, profondeur - 1)),
        8 => format!("cos({})", gen_formule(rng, profondeur - 1)),
        9 => format!("sqrt({})", gen_formule(rng, profondeur - 1)),
        10 => format!("log({})", gen_formule(rng, profondeur - 1)),
        _ => format!("-({})", gen_formule(rng, profondeur - 1)),
    }
}

/// Mutile une formule ASCII : coupe à une position arbitraire puis glisse
/// parfois un caractère piégé. Le résultat n'a aucune raison d'être valide.
fn mutile(rng: &mut SmallRng, formule: &str) -> String {
    let coupe = rng.gen_range(0..=formule.len());
    let mut s = formule[..coupe].to_string();
    if rng.gen_bool(0.7) {
        let pieges = ['(', ')', '*', '+', '.', ',', 'x', 'q', '#', '!'];
        s.push(pieges[rng.gen_range(0..pieges.len())]);
        s.push_str(&formule[coupe..]);
    }
    s
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_formules_generees_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même graine => mêmes formules => mêmes sorties (déterminisme)
    let mut rng = SmallRng::seed_from_u64(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..120 {
        budget(t0, max);

        let formule = gen_formule(&mut rng, 5);
        // le générateur n'émet que de la grammaire valide
        let expr = analyse(&formule)
            .unwrap_or_else(|e| panic!("formule générée refusée: {formule:?} err={e}"));

        for x in [-2.0, 0.0, 0.5, 3.0] {
            match evalue(&expr, x) {
                Ok(v) => {
                    assert!(v.is_finite(), "non-fini rendu: {formule:?} x={x} v={v}");
                    // une expression pure rend deux fois le même bit-à-bit
                    assert_eq!(evalue(&expr, x), Ok(v));
                    seen_ok += 1;
                }
                Err(e) => {
                    assert!(
                        is_erreur_attendue(&e),
                        "erreur non attendue: formule={formule:?} x={x} err={e}"
                    );
                    seen_err += 1;
                }
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne balaye rien.
    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 5, "aucun rejet vu: fuzz trop sage ({seen_err})");
}

#[test]
fn fuzz_safe_saisies_mutilees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = SmallRng::seed_from_u64(0xBADC0DE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let base = gen_formule(&mut rng, 4);
        let saisie = mutile(&mut rng, &base);

        // Ok ou Err, peu importe : l'analyse ne doit jamais paniquer,
        // et l'échantillonneur doit avaler la même saisie sans broncher.
        let _ = analyse(&saisie);
        let courbe = echantillonne_texte(&saisie, 0.0, 10.0, 16);
        for &(_, y) in &courbe.points {
            assert!(y.is_finite());
        }
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 200 feuilles "x" : sous le plafond de jetons, arbre peu profond
    let formule = somme_balancee("x", 200);
    budget(t0, max);

    let expr = analyse(&formule).unwrap_or_else(|e| panic!("err: {e}"));

    // 200 * 0.5 : chaque somme partielle est exacte en binaire
    assert_eq!(evalue(&expr, 0.5), Ok(100.0));
}
