// src/noyau/jetons.rs

use super::erreurs::ErreurLexeme;

/// SAFE: borne la saisie avant tout travail (garde-fou contre le collage
/// de texte arbitraire dans le champ de formule).
pub const CARACTERES_MAX: usize = 4096;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Fonctions, constantes, variable (tout ce qui n'est pas opérateur / nombre)
    // NOTE: le parse (RPN->Expr) décidera si c'est une fonction du registre,
    // une constante (pi, e) ou la variable x. Jamais de résolution ici.
    Ident(String),

    Plus,
    Minus,
    Star,
    DoubleStar, // **
    Slash,
    Percent,

    LPar,
    RPar,
    Comma,

    End, // toujours émis en dernier, même sur saisie vide
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.25, 12.) : un seul point, pas de point en tête
/// - opérateurs + - * / % **
/// - parenthèses ( ) et virgule d'appel
/// - identifiants ASCII [a-zA-Z_][a-zA-Z0-9_]*, sensibles à la casse
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurLexeme> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() > CARACTERES_MAX {
        return Err(ErreurLexeme::SaisieTropLongue(chars.len()));
    }

    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses + virgule
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }
        if c == ',' {
            out.push(Tok::Comma);
            i += 1;
            continue;
        }

        // Opérateurs. `**` se teste avant `*`.
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    out.push(Tok::DoubleStar);
                    i += 2;
                } else {
                    out.push(Tok::Star);
                    i += 1;
                }
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '%' => {
                out.push(Tok::Percent);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        // Pas de normalisation de casse : `Sin` restera inconnu au parse.
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(word));
            continue;
        }

        // Nombre décimal : chiffres, au plus un point, point final toléré ("12.")
        if c.is_ascii_digit() {
            let start = i;
            let mut point_vu = false;
            while i < chars.len() {
                let d = chars[i];
                if d.is_ascii_digit() {
                    i += 1;
                } else if d == '.' && !point_vu {
                    point_vu = true;
                    i += 1;
                } else {
                    break;
                }
            }
            let brut: String = chars[start..i].iter().collect();
            let valeur: f64 = brut.parse().map_err(|_| ErreurLexeme::NombreInvalide {
                texte: brut.clone(),
                position: start,
            })?;

            // Un littéral à 400 chiffres déborde en infini : refusé ici
            // plutôt que laissé filer jusqu'à l'évaluation.
            if !valeur.is_finite() {
                return Err(ErreurLexeme::NombreInvalide {
                    texte: brut,
                    position: start,
                });
            }
            out.push(Tok::Num(valeur));
            continue;
        }

        return Err(ErreurLexeme::CaractereInconnu {
            caractere: c,
            position: i,
        });
    }

    out.push(Tok::End);
    Ok(out)
}
