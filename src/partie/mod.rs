//! Règles du jeu
//!
//! Organisation interne :
//! - config.rs  : réglages immuables (paliers, gabarits, domaine)
//! - indices.rs : faits textuels sur la formule cible
//! - etat.rs    : la machine d'état d'une partie

pub mod config;
pub mod etat;
pub mod indices;

// API publique minimale
pub use config::{ConfigPartie, Palier, ReglagePalier};
pub use etat::Partie;
