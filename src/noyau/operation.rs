// src/noyau/operation.rs
//
// Les quatre opérations, en ordre de menu (1..=4).

use super::erreur::ErreurRationnel;
use super::rationnel::Rationnel;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operation {
    pub const TOUTES: [Operation; 4] = [
        Operation::Addition,
        Operation::Soustraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    /// Numéro de menu -> opération ; `None` = opération invalide.
    pub fn depuis_choix(choix: i64) -> Option<Operation> {
        match choix {
            1 => Some(Operation::Addition),
            2 => Some(Operation::Soustraction),
            3 => Some(Operation::Multiplication),
            4 => Some(Operation::Division),
            _ => None,
        }
    }

    pub fn choix(&self) -> u8 {
        match self {
            Operation::Addition => 1,
            Operation::Soustraction => 2,
            Operation::Multiplication => 3,
            Operation::Division => 4,
        }
    }

    pub fn symbole(&self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Soustraction => "-",
            Operation::Multiplication => "*",
            Operation::Division => "/",
        }
    }

    /// Libellé du menu console (texte historique, en anglais).
    pub fn libelle(&self) -> &'static str {
        match self {
            Operation::Addition => "Addition",
            Operation::Soustraction => "Subtraction",
            Operation::Multiplication => "Multiplication",
            Operation::Division => "Division",
        }
    }

    pub fn appliquer(&self, a: &Rationnel, b: &Rationnel) -> Result<Rationnel, ErreurRationnel> {
        match self {
            Operation::Addition => Ok(a.additionner(b)),
            Operation::Soustraction => Ok(a.soustraire(b)),
            Operation::Multiplication => Ok(a.multiplier(b)),
            Operation::Division => a.diviser(b),
        }
    }
}
