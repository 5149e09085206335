// src/console.rs
//
// Mode console : deux fractions + choix 1..4, puis le résultat.
//
// Contrats :
// - Aucune évaluation ici : tout passe par `noyau::eval_operation`.
// - Entrée non entière => nouvelle demande, sans limite (fin d'entrée = UnexpectedEof).
// - Lecture ligne par ligne : un entier par ligne ("5 -3" sur une ligne est refusé).
// - Les diagnostics (saisie invalide, erreurs du noyau, choix invalide) vont sur `diag`.

use std::io::{self, BufRead, Write};

use calculatrice_rationnelle::noyau::{eval_operation, Operation};

const MSG_ENTIER_INVALIDE: &str = "Invalid input. Please enter a valid integer: ";

/// Affiche `message` puis lit un entier ; redemande tant que la ligne n'en est pas un.
pub fn lire_entier<R: BufRead, W: Write, E: Write>(
    entree: &mut R,
    sortie: &mut W,
    diag: &mut E,
    message: &str,
) -> io::Result<i32> {
    write!(sortie, "{message}")?;
    sortie.flush()?;

    let mut ligne = String::new();
    loop {
        ligne.clear();
        if entree.read_line(&mut ligne)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "entrée terminée avant un entier valide",
            ));
        }

        match ligne.trim().parse::<i32>() {
            Ok(v) => return Ok(v),
            Err(_) => {
                tracing::debug!(saisie = ligne.trim(), "entier invalide");
                write!(diag, "{MSG_ENTIER_INVALIDE}")?;
                diag.flush()?;
            }
        }
    }
}

pub fn afficher_menu<W: Write>(sortie: &mut W) -> io::Result<()> {
    writeln!(sortie, "\nSelect operation:")?;
    for op in Operation::TOUTES {
        writeln!(sortie, "{} - {} ({})", op.choix(), op.libelle(), op.symbole())?;
    }
    write!(sortie, "Choice: ")?;
    sortie.flush()
}

/// Session complète. Les erreurs du noyau sont des diagnostics, pas des échecs :
/// seule une erreur d'E/S remonte.
pub fn executer<R: BufRead, W: Write, E: Write>(
    entree: &mut R,
    sortie: &mut W,
    diag: &mut E,
) -> io::Result<()> {
    let num1 = lire_entier(entree, sortie, diag, "Enter numerator for number 1: ")?;
    let den1 = lire_entier(entree, sortie, diag, "Enter denominator for number 1: ")?;
    let num2 = lire_entier(entree, sortie, diag, "Enter numerator for number 2: ")?;
    let den2 = lire_entier(entree, sortie, diag, "Enter denominator for number 2: ")?;

    afficher_menu(sortie)?;

    // Choix : une seule lecture, tout ce qui n'est pas 1..4 est invalide.
    let mut ligne = String::new();
    entree.read_line(&mut ligne)?;
    let choix = ligne.trim().parse::<i64>().ok();

    let Some(op) = choix.and_then(Operation::depuis_choix) else {
        tracing::debug!(choix = ligne.trim(), "opération invalide");
        writeln!(diag, "Invalid operation selected.")?;
        return Ok(());
    };

    match eval_operation((num1, den1), (num2, den2), op) {
        Ok((resultat, _demarche)) => {
            writeln!(sortie, "Result: {resultat}")?;
        }
        Err(e) => {
            tracing::debug!(erreur = %e, "opération impossible");
            writeln!(diag, "ERROR: {e}")?;
        }
    }
    Ok(())
}
