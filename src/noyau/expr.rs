// src/noyau/expr.rs
//
// Arbre d’expression (immuable après construction).
// - Num : constante (entier exact ou réel)
// - Var : variable non liée (valeur fournie à l’évaluation)
// - Bin : opérateur binaire + deux sous-arbres
//
// Les sous-arbres sont en Arc : partage en lecture seule (ex: e + e),
// y compris entre threads. Aucune opération ne modifie un arbre existant.

use std::collections::HashMap;
use std::sync::Arc;

use super::erreur::EvalError;
use super::jetons::Op;
use super::nombre::Nombre;

/// Liaisons nom -> valeur, maintenues par l’appelant.
pub type Liaisons = HashMap<String, Nombre>;

/// Égalité STRUCTURELLE (dérivée) : même variante, même opérateur,
/// enfants égaux récursivement ; les constantes se comparent numériquement.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(Nombre),
    Var(String),
    Bin(Op, Arc<Expr>, Arc<Expr>),
}

impl Expr {
    pub fn num(n: impl Into<Nombre>) -> Expr {
        Expr::Num(n.into())
    }

    pub fn var(name: impl Into<String>) -> Expr {
        Expr::Var(name.into())
    }

    pub fn bin(op: Op, a: impl Into<Arc<Expr>>, b: impl Into<Arc<Expr>>) -> Expr {
        Expr::Bin(op, a.into(), b.into())
    }

    /// Opérateur au sommet (None pour une feuille).
    pub fn op(&self) -> Option<Op> {
        match self {
            Expr::Bin(op, _, _) => Some(*op),
            Expr::Num(_) | Expr::Var(_) => None,
        }
    }

    /// Évalue l’arbre sous les liaisons données.
    pub fn evaluate(&self, liaisons: &Liaisons) -> Result<Nombre, EvalError> {
        match self {
            Expr::Num(n) => Ok(n.clone()),
            Expr::Var(name) => liaisons.get(name).cloned().ok_or_else(|| {
                log::debug!("variable non liée: {name}");
                EvalError::UnboundVariable(name.clone())
            }),
            Expr::Bin(op, a, b) => {
                let x = a.evaluate(liaisons)?;
                let y = b.evaluate(liaisons)?;
                x.applique(*op, &y)
                    .inspect_err(|e| log::debug!("{x} {op} {y}: {e}"))
            }
        }
    }
}

/* ------------------------ Constructeurs d’opérateurs ------------------------ */
// Aucun ne simplifie : add(x, 0) reste Bin(Add, x, 0).

pub fn add(a: impl Into<Arc<Expr>>, b: impl Into<Arc<Expr>>) -> Expr {
    Expr::bin(Op::Add, a, b)
}

pub fn sub(a: impl Into<Arc<Expr>>, b: impl Into<Arc<Expr>>) -> Expr {
    Expr::bin(Op::Sub, a, b)
}

pub fn mul(a: impl Into<Arc<Expr>>, b: impl Into<Arc<Expr>>) -> Expr {
    Expr::bin(Op::Mul, a, b)
}

pub fn div(a: impl Into<Arc<Expr>>, b: impl Into<Arc<Expr>>) -> Expr {
    Expr::bin(Op::Div, a, b)
}

pub fn pow(a: impl Into<Arc<Expr>>, b: impl Into<Arc<Expr>>) -> Expr {
    Expr::bin(Op::Pow, a, b)
}
