//! Noyau — évaluation d'une opération complète
//!
//! (n1, d1), (n2, d2), op -> Rationnel x2 -> produits croisés -> réduction -> résultat
//!
//! La démarche garde la trace de chaque étape pour l'UI ; elle n'influence pas le calcul
//! (le résultat vient toujours de `Operation::appliquer`).

use super::erreur::ErreurRationnel;
use super::operation::Operation;
use super::rationnel::Rationnel;

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    /// Opérandes tels que saisis : "1/4 + 2/8".
    pub saisie: String,
    /// Opérandes réduits : "1/4 + 1/4".
    pub reduits: String,
    /// Produits croisés avant réduction : "1·4 + 1·4 / 4·4 = 8/16".
    pub brut: String,
    /// Forme irréductible finale.
    pub resultat: String,
}

/// API publique : construit les deux opérandes, applique `op`, retourne le résultat
/// réduit et sa démarche.
pub fn eval_operation(
    a: (i32, i32),
    b: (i32, i32),
    op: Operation,
) -> Result<(Rationnel, DemarcheNoyau), ErreurRationnel> {
    let ra = Rationnel::new(a.0, a.1)?;
    let rb = Rationnel::new(b.0, b.1)?;

    let resultat = op.appliquer(&ra, &rb)?;

    let sym = op.symbole();
    let d = DemarcheNoyau {
        saisie: format!("{}/{} {sym} {}/{}", a.0, a.1, b.0, b.1),
        reduits: format!("{ra} {sym} {rb}"),
        brut: format_brut(op, &ra, &rb),
        resultat: resultat.to_string(),
    };

    tracing::debug!(op = sym, a = %ra, b = %rb, resultat = %resultat, "opération évaluée");

    Ok((resultat, d))
}

/// Produits croisés non réduits (même arithmétique wrapping que le noyau).
fn format_brut(op: Operation, a: &Rationnel, b: &Rationnel) -> String {
    let (an, ad) = (a.numerateur(), a.denominateur());
    let (bn, bd) = (b.numerateur(), b.denominateur());

    match op {
        Operation::Addition => {
            let n = an.wrapping_mul(bd).wrapping_add(bn.wrapping_mul(ad));
            let d = ad.wrapping_mul(bd);
            format!("{an}·{bd} + {bn}·{ad} / {ad}·{bd} = {n}/{d}")
        }
        Operation::Soustraction => {
            let n = an.wrapping_mul(bd).wrapping_sub(bn.wrapping_mul(ad));
            let d = ad.wrapping_mul(bd);
            format!("{an}·{bd} - {bn}·{ad} / {ad}·{bd} = {n}/{d}")
        }
        Operation::Multiplication => {
            let n = an.wrapping_mul(bn);
            let d = ad.wrapping_mul(bd);
            format!("{an}·{bn} / {ad}·{bd} = {n}/{d}")
        }
        Operation::Division => {
            let n = an.wrapping_mul(bd);
            let d = ad.wrapping_mul(bn);
            format!("{an}·{bd} / {ad}·{bn} = {n}/{d}")
        }
    }
}
