// src/partie/indices.rs
//
// Indices textuels sur la formule cible. On collecte les faits applicables
// dans un ordre stable, puis on en tire un au sort. La détection est une
// simple recherche de sous-chaîne : "atan" contient "tan", le fait sur la
// tangente peut donc s'appliquer à une formule en atan.

use rand::seq::SliceRandom;
use rand::Rng;

/// Indice de repli quand aucun fait ne s'applique.
pub const INDICE_GENERIQUE: &str = "Essayez des fonctions simples : sin, cos, ou un polynôme.";

/// Faits applicables à une formule, dans un ordre stable.
pub fn faits_applicables(formule: &str) -> Vec<&'static str> {
    let mut faits: Vec<&'static str> = Vec::new();

    if formule.contains("sin") && !formule.contains("sinh") {
        faits.push("La courbe oscille régulièrement : pensez à la fonction sinus.");
    }
    if formule.contains("cos") && !formule.contains("cosh") {
        faits.push("Une oscillation qui démarre à son maximum : cosinus.");
    }
    if formule.contains("tan") && !formule.contains("tanh") {
        faits.push("Des branches qui filent vers la verticale : tangente.");
    }
    if formule.contains("sinh") {
        faits.push("Croissance explosive et symétrie impaire : sinus hyperbolique.");
    }
    if formule.contains("cosh") {
        faits.push("Une vallée symétrique en forme de chaînette : cosinus hyperbolique.");
    }
    if formule.contains("tanh") {
        faits.push("Un S aplati qui sature vers ±1 : tangente hyperbolique.");
    }
    if formule.contains("sqrt") {
        faits.push("Croissance douce, définie à partir d'un seuil : racine carrée.");
    }
    if formule.contains("log") {
        faits.push("Croissance de plus en plus lente : un logarithme se cache ici.");
    }
    if formule.contains("exp") {
        faits.push("Croissance ou amortissement exponentiel au rendez-vous.");
    }
    if formule.contains("**") {
        faits.push("Une puissance entre en jeu : essayez ** .");
    }
    if formule.contains('*') && !formule.contains("**") {
        faits.push("Un produit ou un facteur d'échelle entre en jeu.");
    }

    faits
}

/// Tire un indice pour `formule`. Sans fait applicable, l'indice générique.
pub fn indice_pour<R: Rng>(formule: &str, rng: &mut R) -> String {
    faits_applicables(formule)
        .choose(rng)
        .copied()
        .unwrap_or(INDICE_GENERIQUE)
        .to_string()
}

/* ------------------------ tests ------------------------ */
