// src/noyau/rationnel.rs
//
// Rationnel exact (i32 / i32), toujours sous forme canonique :
// - fraction irréductible : pgcd(|num|, den) = 1 ; zéro s'écrit 0/1
// - dénominateur strictement positif (le signe est porté par le numérateur)
//
// Valeur immuable et copiable : les opérateurs ne modifient jamais leurs opérandes,
// ils construisent un nouveau Rationnel réduit.
//
// Limite connue : pas de détection de dépassement. Les produits croisés utilisent
// l'arithmétique i32 *wrapping* (déterministe en debug comme en release) ; un résultat
// qui déborde est faux, et peut même porter un dénominateur nul (valeur “empoisonnée”).

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_rational::Ratio;
use num_traits::{One, Zero};

use super::erreur::ErreurRationnel;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rationnel {
    num: i32,
    den: i32,
}

impl Rationnel {
    /// 0/1 : valeur canonique de zéro (et valeur de repli).
    pub const ZERO: Rationnel = Rationnel { num: 0, den: 1 };
    pub const UN: Rationnel = Rationnel { num: 1, den: 1 };

    /// Construit `num/den` réduit et normalisé.
    ///
    /// Un dénominateur nul est refusé : aucune valeur n'est construite,
    /// l'appelant reçoit `ErreurRationnel::DenominateurNul`.
    ///
    /// La réduction se fait en i64 : une forme canonique qui ne tient pas en i32
    /// (`1/i32::MIN` -> `-1/2^31`, `i32::MIN/-1` -> `2^31/1`) est refusée avec
    /// `ErreurRationnel::HorsBornes`.
    pub fn new(num: i32, den: i32) -> Result<Self, ErreurRationnel> {
        if den == 0 {
            tracing::debug!(num, "construction refusée : dénominateur nul");
            return Err(ErreurRationnel::DenominateurNul { numerateur: num });
        }

        let (mut n, mut d) = (num as i64, den as i64);
        let g = pgcd(num.unsigned_abs(), den.unsigned_abs()) as i64;
        n /= g;
        d /= g;
        if d < 0 {
            n = -n;
            d = -d;
        }

        match (i32::try_from(n), i32::try_from(d)) {
            (Ok(num_r), Ok(den_r)) => Ok(Self { num: num_r, den: den_r }),
            _ => {
                tracing::debug!(num, den, "construction refusée : hors bornes i32");
                Err(ErreurRationnel::HorsBornes {
                    numerateur: num,
                    denominateur: den,
                })
            }
        }
    }

    pub fn entier(n: i32) -> Self {
        Self { num: n, den: 1 }
    }

    pub fn numerateur(&self) -> i32 {
        self.num
    }

    pub fn denominateur(&self) -> i32 {
        self.den
    }

    pub fn additionner(&self, autre: &Rationnel) -> Rationnel {
        let num = self
            .num
            .wrapping_mul(autre.den)
            .wrapping_add(autre.num.wrapping_mul(self.den));
        Self::reduit(num, self.den.wrapping_mul(autre.den))
    }

    pub fn soustraire(&self, autre: &Rationnel) -> Rationnel {
        let num = self
            .num
            .wrapping_mul(autre.den)
            .wrapping_sub(autre.num.wrapping_mul(self.den));
        Self::reduit(num, self.den.wrapping_mul(autre.den))
    }

    pub fn multiplier(&self, autre: &Rationnel) -> Rationnel {
        Self::reduit(
            self.num.wrapping_mul(autre.num),
            self.den.wrapping_mul(autre.den),
        )
    }

    /// Division exacte ; un diviseur nul est une erreur explicite.
    pub fn diviser(&self, autre: &Rationnel) -> Result<Rationnel, ErreurRationnel> {
        if autre.num == 0 {
            return Err(ErreurRationnel::DivisionParZero);
        }
        Ok(Self::reduit(
            self.num.wrapping_mul(autre.den),
            self.den.wrapping_mul(autre.num),
        ))
    }

    /// Variante tolérante de `diviser` : sur division par zéro, journalise un
    /// avertissement et renvoie la valeur de repli 0/1.
    ///
    /// L'appelant ne peut plus distinguer un zéro calculé d'un zéro de repli ;
    /// préférer `diviser`.
    pub fn diviser_ou_zero(&self, autre: &Rationnel) -> Rationnel {
        match self.diviser(autre) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(dividende = %self, diviseur = %autre, "{e} : repli sur 0/1");
                Rationnel::ZERO
            }
        }
    }

    /// Écrit "num/den" sur la sortie standard.
    pub fn afficher(&self) {
        println!("{self}");
    }

    /* ------------------------ réduction (privée) ------------------------ */

    /// Réduit par le pgcd puis place le signe au numérateur, en i32 wrapping.
    /// Réservé aux opérateurs : hors dépassement, den != 0 et la forme tient en i32.
    fn reduit(mut num: i32, mut den: i32) -> Self {
        let g = pgcd(num.unsigned_abs(), den.unsigned_abs());
        if g != 0 {
            // g = 2^31 seulement si num = den = i32::MIN : le cast donne i32::MIN, quotient 1.
            let g = g as i32;
            num = num.wrapping_div(g);
            den = den.wrapping_div(g);
        }
        if den < 0 {
            num = num.wrapping_neg();
            den = den.wrapping_neg();
        }
        Self { num, den }
    }
}

/// Euclide sur valeurs absolues ; pgcd(0, 0) = 0.
fn pgcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/* ------------------------ traits ------------------------ */

impl Default for Rationnel {
    fn default() -> Self {
        Rationnel::ZERO
    }
}

impl fmt::Display for Rationnel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl Add for Rationnel {
    type Output = Rationnel;

    fn add(self, rhs: Rationnel) -> Rationnel {
        self.additionner(&rhs)
    }
}

impl Sub for Rationnel {
    type Output = Rationnel;

    fn sub(self, rhs: Rationnel) -> Rationnel {
        self.soustraire(&rhs)
    }
}

impl Mul for Rationnel {
    type Output = Rationnel;

    fn mul(self, rhs: Rationnel) -> Rationnel {
        self.multiplier(&rhs)
    }
}

impl Div for Rationnel {
    type Output = Result<Rationnel, ErreurRationnel>;

    fn div(self, rhs: Rationnel) -> Self::Output {
        self.diviser(&rhs)
    }
}

impl Neg for Rationnel {
    type Output = Rationnel;

    fn neg(self) -> Rationnel {
        // den > 0 reste vrai, pgcd inchangé.
        Rationnel {
            num: self.num.wrapping_neg(),
            den: self.den,
        }
    }
}

impl Zero for Rationnel {
    fn zero() -> Self {
        Rationnel::ZERO
    }

    fn is_zero(&self) -> bool {
        self.num == 0
    }
}

impl One for Rationnel {
    fn one() -> Self {
        Rationnel::UN
    }
}

impl From<Rationnel> for Ratio<i32> {
    fn from(r: Rationnel) -> Self {
        // déjà irréductible, dénominateur > 0
        Ratio::new_raw(r.num, r.den)
    }
}
