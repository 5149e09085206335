// src/main.rs
//
// Calculatrice rationnelle — point d’entrée
// -----------------------------------------
// - par défaut : fenêtre native (eframe::run_native + NativeOptions)
// - `--console` : dialogue texte historique (4 entiers + menu 1..4)
//
// En console, le code de sortie est toujours 0 : saisie invalide, division
// impossible ou fin d'entrée ne sont que des diagnostics.

use clap::Parser;
use eframe::egui;

mod app;
mod console;
mod journal;

use app::AppCalc;

/// Titre unique (fenêtre + journal).
const TITRE_APP: &str = "Calculatrice rationnelle";

#[derive(Parser, Debug)]
#[command(name = "calculatrice_rationnelle", about = "Fractions exactes : + - * /")]
struct Args {
    /// Dialogue en console au lieu de la fenêtre.
    #[arg(long)]
    console: bool,

    /// Filtre du journal (syntaxe EnvFilter, ex: "debug"). Par défaut : RUST_LOG, sinon info.
    #[arg(long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    journal::init(args.log.as_deref())?;

    if args.console {
        tracing::debug!("{TITRE_APP} : mode console");
        let stdin = std::io::stdin();
        let mut entree = stdin.lock();
        if let Err(e) = console::executer(&mut entree, &mut std::io::stdout(), &mut std::io::stderr()) {
            // fin d'entrée / E/S : journalisé, le code de sortie reste 0
            tracing::error!("console : {e}");
        }
        return Ok(());
    }

    tracing::debug!("{TITRE_APP} : mode fenêtre");
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([460.0, 520.0])
            .with_min_inner_size([380.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
    .map_err(|e| anyhow::anyhow!("fenêtre : {e}"))
}
