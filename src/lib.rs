//! Calculatrice rationnelle — noyau exact (fractions i32 réduites).
//!
//! Le binaire (fenêtre egui ou console) ne fait que lire des entiers et afficher
//! le résultat ; toute la logique vit dans `noyau`.

pub mod noyau;

pub use noyau::{eval_operation, DemarcheNoyau, ErreurRationnel, Operation, Rationnel};
