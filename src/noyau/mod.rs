//! Noyau exact rationnel
//!
//! Organisation interne :
//! - rationnel.rs : valeur Rationnel (construction, réduction, opérateurs, rendu)
//! - erreur.rs    : dénominateur nul / division par zéro
//! - operation.rs : les quatre opérations (menu 1..=4)
//! - eval.rs      : pipeline complet + démarche

pub mod erreur;
pub mod eval;
pub mod operation;
pub mod rationnel;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::ErreurRationnel;
pub use eval::{eval_operation, DemarcheNoyau};
pub use operation::Operation;
pub use rationnel::Rationnel;
