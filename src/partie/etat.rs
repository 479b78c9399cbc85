// src/partie/etat.rs
//
// La machine d'état d'une partie : manches, score, indices, détection de
// victoire. Possède la configuration, le générateur aléatoire et les deux
// courbes. Aucune commande ne panique : une saisie invalide est un état
// comme un autre, pas une erreur.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::noyau::echantillon::{echantillonne_texte, Echantillon, Point, FENETRE_Y_DEFAUT};

use super::config::{ConfigPartie, Palier};
use super::indices::indice_pour;

#[derive(Debug)]
pub struct Partie {
    config: ConfigPartie,
    rng: SmallRng,

    niveau: u32,
    score: u32,
    indices_restants: u32,

    formule_cible: String,
    courbe_cible: Echantillon,
    fenetre_y: (f64, f64),

    saisie: String,
    courbe_joueur: Echantillon,

    gagne: bool,
    // la victoire d'une manche ne paie qu'une fois, même si la saisie
    // repasse plusieurs fois sous la tolérance
    recompense_attribuee: bool,
}

impl Partie {
    /// Partie avec générateur non déterministe.
    pub fn nouvelle(config: ConfigPartie) -> Partie {
        Partie::avec_rng(config, SmallRng::from_entropy())
    }

    /// Partie rejouable : même graine, mêmes cibles, mêmes indices.
    pub fn avec_graine(config: ConfigPartie, graine: u64) -> Partie {
        Partie::avec_rng(config, SmallRng::seed_from_u64(graine))
    }

    fn avec_rng(config: ConfigPartie, rng: SmallRng) -> Partie {
        let indices_restants = config.indices_initiaux;
        let mut partie = Partie {
            config,
            rng,
            niveau: 1,
            score: 0,
            indices_restants,
            formule_cible: String::new(),
            courbe_cible: Echantillon::default(),
            fenetre_y: FENETRE_Y_DEFAUT,
            saisie: String::new(),
            courbe_joueur: Echantillon::default(),
            gagne: false,
            recompense_attribuee: false,
        };
        partie.nouvelle_manche();
        partie
    }

    /* ------------------------ commandes ------------------------ */

    /// Ouvre une manche au niveau courant : cible tirée parmi les gabarits
    /// du palier, saisie et courbe joueur remises à zéro. Niveau, score et
    /// budget d'indices sont conservés.
    pub fn nouvelle_manche(&mut self) {
        let palier = self.config.palier_pour(self.niveau);
        let formule = self
            .config
            .reglage(palier)
            .gabarits
            .choose(&mut self.rng)
            .cloned()
            // garde-fou : palier sans gabarit dans une config artisanale
            .unwrap_or_else(|| "x".to_string());
        self.lance_manche(formule);
    }

    fn lance_manche(&mut self, formule: String) {
        let (x_min, x_max) = self.config.domaine;
        self.courbe_cible = echantillonne_texte(&formule, x_min, x_max, self.config.nb_pas);
        self.fenetre_y = self.courbe_cible.fenetre(self.config.marge_y);
        self.formule_cible = formule;

        self.saisie.clear();
        self.courbe_joueur = Echantillon::default();
        self.gagne = false;
        self.recompense_attribuee = false;

        debug!(
            niveau = self.niveau,
            palier = self.palier().nom(),
            cible = %self.formule_cible,
            "nouvelle manche"
        );
    }

    /// Remplace la saisie du joueur, ré-échantillonne sa courbe puis
    /// réévalue la victoire. Jamais d'erreur : une saisie inanalysable
    /// donne simplement une courbe invalide.
    pub fn maj_saisie(&mut self, texte: &str) {
        self.saisie = texte.to_string();
        let (x_min, x_max) = self.config.domaine;
        self.courbe_joueur = echantillonne_texte(&self.saisie, x_min, x_max, self.config.nb_pas);
        self.verifie_victoire();
    }

    fn verifie_victoire(&mut self) {
        let tolerance = self.config.reglage(self.palier()).tolerance;
        self.gagne = match self.erreur_normalisee() {
            Some(e) => e < tolerance,
            None => false,
        };

        if self.gagne && !self.recompense_attribuee {
            // points du palier au moment de la victoire, avant la montée
            let points = self.config.reglage(self.palier()).points;
            self.score = self.score.saturating_add(points);
            self.recompense_attribuee = true;
            self.niveau = self.niveau.saturating_add(1);
            info!(
                niveau = self.niveau,
                score = self.score,
                points,
                "manche gagnée"
            );
        }
    }

    /// Abandonne la manche : pénalité sur le score (plancher zéro) puis
    /// nouvelle manche au même niveau.
    pub fn passe_niveau(&mut self) {
        self.score = self.score.saturating_sub(self.config.penalite_passe);
        info!(score = self.score, "manche passée");
        self.nouvelle_manche();
    }

    /// Consomme un indice du budget de session.
    /// None quand il n'en reste plus : l'appelant distingue « plus
    /// d'indice » d'un indice substantiel.
    pub fn demande_indice(&mut self) -> Option<String> {
        if self.indices_restants == 0 {
            return None;
        }
        self.indices_restants -= 1;
        debug!(restants = self.indices_restants, "indice délivré");
        Some(indice_pour(&self.formule_cible, &mut self.rng))
    }

    /* ------------------------ lecture ------------------------ */

    pub fn formule_cible(&self) -> &str {
        &self.formule_cible
    }

    pub fn courbe_cible(&self) -> &[Point] {
        &self.courbe_cible.points
    }

    pub fn saisie(&self) -> &str {
        &self.saisie
    }

    pub fn courbe_joueur(&self) -> &[Point] {
        &self.courbe_joueur.points
    }

    pub fn saisie_valide(&self) -> bool {
        self.courbe_joueur.valide
    }

    pub fn gagne(&self) -> bool {
        self.gagne
    }

    /// Erreur normalisée : moyenne des écarts |y_joueur - y_cible| sur les
    /// points appariés par indice, rapportée à l'amplitude de la fenêtre
    /// verticale de la manche (plancher `epsilon_norme`).
    /// None tant que l'une des deux courbes est inexploitable.
    pub fn erreur_normalisee(&self) -> Option<f64> {
        if !self.courbe_cible.valide || !self.courbe_joueur.valide {
            return None;
        }

        let paires = self
            .courbe_joueur
            .points
            .iter()
            .zip(self.courbe_cible.points.iter());
        let n = self
            .courbe_joueur
            .points
            .len()
            .min(self.courbe_cible.points.len());

        let amplitude = (self.fenetre_y.1 - self.fenetre_y.0).max(self.config.epsilon_norme);
        let total: f64 = paires.map(|((_, yj), (_, yc))| (yj - yc).abs()).sum();

        Some(total / amplitude / n as f64)
    }

    pub fn niveau(&self) -> u32 {
        self.niveau
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn indices_restants(&self) -> u32 {
        self.indices_restants
    }

    /// Palier courant, dérivé du niveau. Jamais stocké à part.
    pub fn palier(&self) -> Palier {
        self.config.palier_pour(self.niveau)
    }

    pub fn domaine(&self) -> (f64, f64) {
        self.config.domaine
    }

    /// Fenêtre verticale de tracé, figée à l'ouverture de la manche.
    pub fn fenetre_y(&self) -> (f64, f64) {
        self.fenetre_y
    }

    pub fn config(&self) -> &ConfigPartie {
        &self.config
    }

    /// Manche sur une formule imposée, pour des scénarios déterministes.
    #[cfg(test)]
    pub(crate) fn force_manche(&mut self, formule: &str) {
        self.lance_manche(formule.to_string());
    }
}

/* ------------------------ tests ------------------------ */
