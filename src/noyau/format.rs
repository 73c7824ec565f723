// src/noyau/format.rs
//
// Rendu canonique : infixe, un espace autour de chaque opérateur,
// parenthèses MINIMALES.
//
// Règle (rang = précédence) :
// - enfant gauche : parenthèses ssi rang < parent, ou rang == parent et parent associatif à droite
// - enfant droit  : parenthèses ssi rang < parent, ou rang == parent et parent associatif à gauche
// - feuilles : jamais de parenthèses
//
// Avec les mêmes Reglages que le parser, texte canonique -> parse redonne le même arbre.

use std::fmt;

use super::expr::Expr;
use super::jetons::Op;
use super::reglages::Reglages;

/* ------------------------ Parenthèses ------------------------ */

fn parentheses_gauche(parent: Op, enfant: &Expr, reglages: &Reglages) -> bool {
    match enfant.op() {
        None => false,
        Some(op) => {
            op.precedence() < parent.precedence()
                || (op.precedence() == parent.precedence() && reglages.associatif_droite(parent))
        }
    }
}

fn parentheses_droite(parent: Op, enfant: &Expr, reglages: &Reglages) -> bool {
    match enfant.op() {
        None => false,
        Some(op) => {
            op.precedence() < parent.precedence()
                || (op.precedence() == parent.precedence() && !reglages.associatif_droite(parent))
        }
    }
}

/* ------------------------ Rendu ------------------------ */

fn ecrit_enfant(e: &Expr, entre_parentheses: bool, reglages: &Reglages, out: &mut String) {
    if entre_parentheses {
        out.push('(');
        ecrit(e, reglages, out);
        out.push(')');
    } else {
        ecrit(e, reglages, out);
    }
}

fn ecrit(e: &Expr, reglages: &Reglages, out: &mut String) {
    match e {
        Expr::Num(n) => out.push_str(&n.to_string()),
        Expr::Var(name) => out.push_str(name),
        Expr::Bin(op, a, b) => {
            ecrit_enfant(a, parentheses_gauche(*op, a, reglages), reglages, out);
            out.push(' ');
            out.push_str(op.symbole());
            out.push(' ');
            ecrit_enfant(b, parentheses_droite(*op, b, reglages), reglages, out);
        }
    }
}

/// Rendu canonique avec les réglages par défaut.
pub fn to_canonical_string(e: &Expr) -> String {
    to_canonical_string_avec(e, &Reglages::default())
}

pub fn to_canonical_string_avec(e: &Expr, reglages: &Reglages) -> String {
    let mut out = String::new();
    ecrit(e, reglages, &mut out);
    out
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_canonical_string(self))
    }
}
