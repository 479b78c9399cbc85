//! Labo de courbes
//!
//! Un petit jeu : une formule cible est tracée, le joueur doit la
//! retrouver en tapant la sienne. Deux étages :
//!
//! - [`noyau`]  : analyse, évaluation et échantillonnage des formules,
//!   sans aucun état de jeu ;
//! - [`partie`] : niveaux, paliers, score et indices, bâtis sur le noyau.
//!
//! ```
//! use labo_courbes::{ConfigPartie, Partie};
//!
//! let mut partie = Partie::avec_graine(ConfigPartie::default(), 7);
//! partie.maj_saisie("sin(x)");
//! assert!(partie.saisie_valide());
//! ```

pub mod noyau;
pub mod partie;

pub use noyau::{
    analyse, echantillonne, echantillonne_texte, evalue, Echantillon, Expr, Point,
};
pub use partie::{ConfigPartie, Palier, Partie};
