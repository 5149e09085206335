// src/noyau/erreur.rs
//
// Erreurs du noyau rationnel.
// Construction refusée (dénominateur nul, forme canonique hors i32), division par zéro.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErreurRationnel {
    /// `Rationnel::new(n, 0)` : aucune valeur n'est construite.
    DenominateurNul { numerateur: i32 },
    /// `Rationnel::new(n, d)` dont la forme canonique sort de i32
    /// (dénominateur ou numérateur 2^31 après passage du signe).
    HorsBornes { numerateur: i32, denominateur: i32 },
    /// Diviseur de numérateur nul.
    DivisionParZero,
}

impl fmt::Display for ErreurRationnel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurRationnel::DenominateurNul { numerateur } => {
                write!(f, "dénominateur nul ({numerateur}/0)")
            }
            ErreurRationnel::HorsBornes {
                numerateur,
                denominateur,
            } => write!(f, "hors bornes i32 ({numerateur}/{denominateur})"),
            ErreurRationnel::DivisionParZero => write!(f, "division par zéro"),
        }
    }
}

impl std::error::Error for ErreurRationnel {}
