//! Tests scientifiques : forme canonique + opérateurs sur des cas connus.
//!
//! Notes :
//! - Égalité = même couple (numérateur, dénominateur) réduit.
//! - La division par zéro a deux comportements : `diviser` renvoie une erreur,
//!   `diviser_ou_zero` renvoie 0/1. Un appelant de `diviser_ou_zero` ne peut pas
//!   distinguer ce repli d'un vrai zéro calculé ; c'est testé explicitement plus bas.

use num_rational::Ratio;
use num_traits::{One, Zero};

use super::{ErreurRationnel, Operation, Rationnel};

fn r(n: i32, d: i32) -> Rationnel {
    Rationnel::new(n, d).unwrap_or_else(|e| panic!("r({n}, {d}) err={e}"))
}

fn assert_couple(x: Rationnel, num: i32, den: i32) {
    assert_eq!(
        (x.numerateur(), x.denominateur()),
        (num, den),
        "attendu {num}/{den}, obtenu {x}"
    );
}

/* ------------------------ Construction / forme canonique ------------------------ */

#[test]
fn sci_construction_valide() {
    assert_couple(r(2, 3), 2, 3);
}

#[test]
fn sci_denominateur_negatif() {
    assert_couple(r(5, -3), -5, 3);
}

#[test]
fn sci_double_negatif() {
    assert_couple(r(-4, -8), 1, 2);
}

#[test]
fn sci_zero_canonique() {
    assert_couple(r(0, 10), 0, 1);
    assert_couple(r(0, -7), 0, 1);
    assert_eq!(r(0, 10), Rationnel::ZERO);
}

#[test]
fn sci_denominateur_nul_refuse() {
    assert_eq!(
        Rationnel::new(3, 0),
        Err(ErreurRationnel::DenominateurNul { numerateur: 3 })
    );
    // (0, 0) : jamais construit, donc jamais “empoisonné”.
    assert_eq!(
        Rationnel::new(0, 0),
        Err(ErreurRationnel::DenominateurNul { numerateur: 0 })
    );
}

#[test]
fn sci_entier_et_constantes() {
    assert_couple(Rationnel::entier(-6), -6, 1);
    assert_eq!(Rationnel::UN, r(7, 7));
    assert_eq!(Rationnel::zero(), Rationnel::ZERO);
    assert_eq!(Rationnel::one(), Rationnel::UN);
    assert!(r(0, 3).is_zero());
    assert!(!r(1, 3).is_zero());
}

#[test]
fn sci_idempotence_reduction() {
    for (n, d) in [(1, 2), (-5, 3), (0, 1), (7, 1), (-13, 17)] {
        let x = r(n, d);
        assert_eq!(r(x.numerateur(), x.denominateur()), x);
    }
}

#[test]
fn sci_bornes_i32() {
    assert_couple(r(i32::MIN, i32::MIN), 1, 1);
    assert_couple(r(i32::MAX, -i32::MAX), -1, 1);
    assert_couple(r(i32::MIN, 2), -(1 << 30), 1);
    assert_couple(r(2, i32::MIN), -1, 1 << 30);
    assert_couple(r(i32::MIN, 1), i32::MIN, 1);
}

#[test]
fn sci_bornes_i32_hors_forme_canonique() {
    // numérateur impair sur -2^31, ou i32::MIN/-1 : la forme canonique porte +2^31
    for (n, d) in [(1, i32::MIN), (3, i32::MIN), (-7, i32::MIN), (i32::MIN, -1)] {
        let res = Rationnel::new(n, d);
        assert_eq!(
            res,
            Err(ErreurRationnel::HorsBornes {
                numerateur: n,
                denominateur: d
            }),
            "new({n}, {d})"
        );
    }
    assert_eq!(
        ErreurRationnel::HorsBornes {
            numerateur: 1,
            denominateur: i32::MIN
        }
        .to_string(),
        "hors bornes i32 (1/-2147483648)"
    );
}

/* ------------------------ Opérateurs ------------------------ */

#[test]
fn sci_addition() {
    assert_couple(r(1, 4) + r(1, 4), 1, 2);
    assert_couple(r(1, 4).additionner(&r(1, 4)), 1, 2);
}

#[test]
fn sci_soustraction() {
    assert_couple(r(3, 4) - r(1, 4), 1, 2);
    assert_couple(r(1, 4) - r(3, 4), -1, 2);
    assert_couple(r(1, 3) - r(1, 3), 0, 1);
}

#[test]
fn sci_multiplication() {
    assert_couple(r(2, 3) * r(3, 4), 1, 2);
    assert_couple(r(-2, 3) * r(3, -4), 1, 2);
}

#[test]
fn sci_division() {
    assert_couple((r(3, 4) / r(2, 3)).unwrap(), 9, 8);
    assert_couple(r(3, 4).diviser(&r(-2, 3)).unwrap(), -9, 8);
}

#[test]
fn sci_operandes_inchanges() {
    let a = r(1, 2);
    let b = r(2, 3);
    let _ = a.additionner(&b);
    let _ = a.soustraire(&b);
    let _ = a.multiplier(&b);
    let _ = a.diviser(&b);
    assert_couple(a, 1, 2);
    assert_couple(b, 2, 3);
}

#[test]
fn sci_toutes_operations_sans_panique() {
    let a = r(1, 2);
    let b = r(2, 3);
    for op in Operation::TOUTES {
        let x = op.appliquer(&a, &b).unwrap();
        assert!(x.denominateur() > 0, "op={op:?}");
    }
}

#[test]
fn sci_negation() {
    assert_couple(-r(3, 4), -3, 4);
    assert_couple(-r(-3, 4), 3, 4);
    assert_eq!(-Rationnel::ZERO, Rationnel::ZERO);
}

/* ------------------------ Division par zéro : écart de comportement ------------------------ */

#[test]
fn sci_division_par_zero_erreur() {
    assert_eq!(r(1, 2).diviser(&r(0, 5)), Err(ErreurRationnel::DivisionParZero));
    assert_eq!(r(1, 2) / Rationnel::ZERO, Err(ErreurRationnel::DivisionParZero));
}

#[test]
fn sci_division_par_zero_repli() {
    // Repli historique : 0/1, sans panique.
    assert_eq!(r(1, 2).diviser_ou_zero(&r(0, 9)), Rationnel::ZERO);

    // Écart : le repli est indiscernable d'un zéro calculé…
    let repli = r(1, 2).diviser_ou_zero(&Rationnel::ZERO);
    let calcule = Rationnel::ZERO.diviser_ou_zero(&r(1, 2));
    assert_eq!(repli, calcule);

    // …alors que `diviser` les distingue.
    assert!(r(1, 2).diviser(&Rationnel::ZERO).is_err());
    assert_eq!(Rationnel::ZERO.diviser(&r(1, 2)), Ok(Rationnel::ZERO));
}

/* ------------------------ Menu / rendu / valeur ------------------------ */

#[test]
fn sci_menu_operations() {
    for op in Operation::TOUTES {
        assert_eq!(Operation::depuis_choix(op.choix() as i64), Some(op));
    }
    assert_eq!(Operation::depuis_choix(0), None);
    assert_eq!(Operation::depuis_choix(5), None);
    assert_eq!(Operation::depuis_choix(-1), None);
}

#[test]
fn sci_afficher_sans_panique() {
    // afficher = println!("{self}") ; le rendu lui-même est vérifié par sci_rendu
    r(5, -3).afficher();
    Rationnel::ZERO.afficher();
}

#[test]
fn sci_rendu() {
    assert_eq!(r(5, -3).to_string(), "-5/3");
    assert_eq!(r(4, 2).to_string(), "2/1");
    assert_eq!(Rationnel::ZERO.to_string(), "0/1");
}

#[test]
fn sci_valeur_prise_remise_a_zero() {
    // “moved-from” : std::mem::take laisse la valeur canonique 0/1.
    let mut x = r(3, 9);
    let pris = std::mem::take(&mut x);
    assert_couple(pris, 1, 3);
    assert_eq!(x, Rationnel::ZERO);
    assert_eq!(Rationnel::default(), Rationnel::ZERO);
}

#[test]
fn sci_interop_ratio() {
    let q: Ratio<i32> = r(-6, 8).into();
    assert_eq!(q, Ratio::new(-3, 4));
    assert_eq!(*q.numer(), -3);
    assert_eq!(*q.denom(), 4);
}
