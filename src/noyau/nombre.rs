// src/noyau/nombre.rs
//
// Valeur numérique du noyau : entier EXACT (big int) ou réel (f64).
// L’entier-ité est conservée du littéral jusqu’au résultat :
// - "3"   -> Entier(3)
// - "3.0" -> Reel(3.0)
//
// Règles de promotion :
// - Entier (+ - *) Entier => Entier (exact, jamais de débordement)
// - / : TOUJOURS réel (division vraie, jamais tronquée)
// - ** : Entier si base et exposant entiers et exposant >= 0, sinon réel ;
//        au-delà de PUISSANCE_MAX_BITS estimés, réel (=> inf) au lieu de geler
// - dès qu’un opérande est réel => réel

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{FromPrimitive, One, Signed, ToPrimitive, Zero};

use super::erreur::EvalError;
use super::jetons::Op;

/// Taille maximale (en bits, estimée) d’une puissance entière exacte.
pub const PUISSANCE_MAX_BITS: u64 = 1 << 16;

#[derive(Clone, Debug)]
pub enum Nombre {
    Entier(BigInt),
    Reel(f64),
}

impl Nombre {
    pub fn est_entier(&self) -> bool {
        matches!(self, Nombre::Entier(_))
    }

    pub fn est_zero(&self) -> bool {
        match self {
            Nombre::Entier(n) => n.is_zero(),
            Nombre::Reel(x) => *x == 0.0,
        }
    }

    /// Lecture flottante (big int hors plage => ±inf).
    pub fn vers_reel(&self) -> f64 {
        match self {
            Nombre::Entier(n) => n.to_f64().unwrap_or(f64::NAN),
            Nombre::Reel(x) => *x,
        }
    }

    /// Applique un opérateur binaire avec la promotion numérique du noyau.
    pub fn applique(&self, op: Op, autre: &Nombre) -> Result<Nombre, EvalError> {
        use Nombre::*;

        match op {
            Op::Add => Ok(match (self, autre) {
                (Entier(a), Entier(b)) => Entier(a + b),
                _ => Reel(self.vers_reel() + autre.vers_reel()),
            }),
            Op::Sub => Ok(match (self, autre) {
                (Entier(a), Entier(b)) => Entier(a - b),
                _ => Reel(self.vers_reel() - autre.vers_reel()),
            }),
            Op::Mul => Ok(match (self, autre) {
                (Entier(a), Entier(b)) => Entier(a * b),
                _ => Reel(self.vers_reel() * autre.vers_reel()),
            }),
            Op::Div => self.divise(autre),
            Op::Pow => self.puissance(autre),
        }
    }

    fn divise(&self, autre: &Nombre) -> Result<Nombre, EvalError> {
        if autre.est_zero() {
            return Err(EvalError::DivisionByZero);
        }
        match (self, autre) {
            // quotient exact puis arrondi unique (précis même pour de très grands entiers)
            (Nombre::Entier(a), Nombre::Entier(b)) => {
                let q = BigRational::new(a.clone(), b.clone());
                Ok(Nombre::Reel(q.to_f64().unwrap_or(f64::NAN)))
            }
            _ => Ok(Nombre::Reel(self.vers_reel() / autre.vers_reel())),
        }
    }

    fn puissance(&self, exposant: &Nombre) -> Result<Nombre, EvalError> {
        if let (Nombre::Entier(base), Nombre::Entier(n)) = (self, exposant) {
            if !n.is_negative() {
                if let Some(exact) = puissance_exacte(base, n) {
                    return Ok(Nombre::Entier(exact));
                }
                log::debug!("{base} ** {n}: résultat trop grand, bascule en réel");
            }
        }

        let exposant_negatif = match exposant {
            Nombre::Entier(n) => n.is_negative(),
            Nombre::Reel(x) => *x < 0.0,
        };
        if self.est_zero() && exposant_negatif {
            return Err(EvalError::DivisionByZero);
        }

        Ok(Nombre::Reel(self.vers_reel().powf(exposant.vers_reel())))
    }
}

/// base ** n exact si la taille du résultat reste sous PUISSANCE_MAX_BITS.
/// 0, 1 et -1 restent exacts quel que soit l’exposant.
fn puissance_exacte(base: &BigInt, n: &BigInt) -> Option<BigInt> {
    if base.is_zero() {
        return Some(if n.is_zero() { BigInt::one() } else { BigInt::zero() });
    }
    if base.abs().is_one() {
        let impair = !(n % BigInt::from(2)).is_zero();
        return Some(if base.is_negative() && impair {
            -BigInt::one()
        } else {
            BigInt::one()
        });
    }

    let e = n.to_u32()?;
    // |base| >= 2 : le résultat a entre (bits - 1) * e et bits * e bits
    if base.bits().saturating_mul(u64::from(e)) > PUISSANCE_MAX_BITS {
        return None;
    }
    Some(base.pow(e))
}

/// Égalité NUMÉRIQUE : Entier(3) == Reel(3.0), NaN n’égale rien.
impl PartialEq for Nombre {
    fn eq(&self, other: &Self) -> bool {
        use Nombre::*;

        match (self, other) {
            (Entier(a), Entier(b)) => a == b,
            (Reel(x), Reel(y)) => x == y,
            (Entier(a), Reel(x)) | (Reel(x), Entier(a)) => {
                x.fract() == 0.0 && BigInt::from_f64(*x).is_some_and(|b| &b == a)
            }
        }
    }
}

impl fmt::Display for Nombre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nombre::Entier(n) => write!(f, "{n}"),
            // Debug garde toujours ".0" ou un exposant : "3.0", "1e16"
            Nombre::Reel(x) => write!(f, "{x:?}"),
        }
    }
}

impl From<i64> for Nombre {
    fn from(n: i64) -> Self {
        Nombre::Entier(BigInt::from(n))
    }
}

impl From<i32> for Nombre {
    fn from(n: i32) -> Self {
        Nombre::Entier(BigInt::from(n))
    }
}

impl From<BigInt> for Nombre {
    fn from(n: BigInt) -> Self {
        Nombre::Entier(n)
    }
}

impl From<f64> for Nombre {
    fn from(x: f64) -> Self {
        Nombre::Reel(x)
    }
}
