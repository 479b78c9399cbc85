// src/main.rs
//
// Labo de courbes : point d'entrée terminal
// -----------------------------------------
// But:
// - une formule cible est tirée et tracée en secret ; le joueur tape la
//   sienne et reçoit un verdict après chaque ligne
// - commandes préfixées par `:` ; tout le reste est lu comme une formule
//
// IMPORTANT (structure projet):
// - toute la logique vit dans la bibliothèque (noyau/ + partie/)
// - ici : options, journal, boucle de lecture et affichage seulement

use std::io::{self, BufRead, Write};

use clap::Parser;

use labo_courbes::noyau::analyse;
use labo_courbes::{ConfigPartie, Partie};

/// Titre unique (bannière).
const TITRE_APP: &str = "Labo de courbes";

/* ------------------------ Ligne de commande ------------------------ */

#[derive(Parser)]
#[command(version, about = "Retrouvez la formule cachée derrière sa courbe.")]
struct Args {
    /// Graine du générateur aléatoire (partie rejouable).
    #[arg(long)]
    graine: Option<u64>,

    /// Verbosité du journal (-v : info, -vv : debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/* ------------------------ Journal ------------------------ */

fn installer_journal(verbose: u8) {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::EnvFilter;

    let niveau = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };

    // RUST_LOG garde le dernier mot ; -vv (ou RUST_LOG=debug) révèle la
    // formule cible, à réserver au débogage
    let filtre = EnvFilter::builder()
        .with_default_directive(niveau.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(io::stderr)
        .init();
}

/* ------------------------ Affichage ------------------------ */

fn affiche_bandeau() {
    println!("{TITRE_APP}");
    println!("Une formule est tracée en secret : retrouvez-la.");
    println!("Commandes : :indice  :passe  :nouvelle  :quitte");
}

fn affiche_manche(partie: &Partie) {
    let (x_min, x_max) = partie.domaine();
    let (y_min, y_max) = partie.fenetre_y();
    println!();
    println!(
        "niveau {} ({}), score {}, indices restants {}",
        partie.niveau(),
        partie.palier().nom(),
        partie.score(),
        partie.indices_restants(),
    );
    println!(
        "cible tracée sur x de {x_min} à {x_max}, fenêtre y de {y_min:.2} à {y_max:.2} ({} points)",
        partie.courbe_cible().len(),
    );
}

fn affiche_verdict(partie: &Partie) {
    if !partie.saisie_valide() {
        // l'échantillonneur a jeté la saisie ; on rejoue l'analyse pour
        // distinguer une formule refusée d'une courbe sans point réel
        match analyse(partie.saisie()) {
            Err(e) => println!("formule refusée : {e}"),
            Ok(_) => println!("formule acceptée mais aucun point traçable sur le domaine."),
        }
        return;
    }

    match partie.erreur_normalisee() {
        Some(erreur) if partie.gagne() => {
            println!(
                "gagné ! écart {erreur:.4}, score {} : tapez :nouvelle pour continuer.",
                partie.score(),
            );
        }
        Some(erreur) => {
            let tolerance = partie.config().reglage(partie.palier()).tolerance;
            println!("écart normalisé {erreur:.4} (seuil de victoire {tolerance})");
        }
        None => println!("cible inexploitable : écart incalculable."),
    }
}

/* ------------------------ Boucle de lecture ------------------------ */

fn main() {
    let args = Args::parse();
    installer_journal(args.verbose);

    let config = ConfigPartie::default();
    let mut partie = match args.graine {
        Some(graine) => Partie::avec_graine(config, graine),
        None => Partie::nouvelle(config),
    };

    affiche_bandeau();
    affiche_manche(&partie);

    let mut entree = io::stdin().lock();
    let mut sortie = io::stdout();

    loop {
        print!("f(x) = ");
        let _ = sortie.flush();

        let mut ligne = String::new();
        match entree.read_line(&mut ligne) {
            Ok(0) | Err(_) => break, // fin d'entrée
            Ok(_) => {}
        }

        match ligne.trim() {
            "" => continue,
            ":quitte" | ":q" => break,
            ":indice" => match partie.demande_indice() {
                Some(indice) => println!("indice : {indice}"),
                None => println!("plus d'indice disponible."),
            },
            ":passe" => {
                partie.passe_niveau();
                affiche_manche(&partie);
            }
            ":nouvelle" => {
                if partie.gagne() {
                    partie.nouvelle_manche();
                    affiche_manche(&partie);
                } else {
                    println!("la manche n'est pas gagnée (:passe pour abandonner).");
                }
            }
            commande if commande.starts_with(':') => {
                println!("commande inconnue : {commande}");
            }
            formule => {
                partie.maj_saisie(formule);
                affiche_verdict(&partie);
            }
        }
    }

    println!("score final : {}", partie.score());
}
