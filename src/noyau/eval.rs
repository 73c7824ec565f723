//! Noyau — pipeline public
//!
//! tokenize -> RPN -> Expr -> (evaluate | rendu canonique)
//!
//! Les fonctions sans suffixe utilisent `Reglages::default()` ;
//! les variantes `_avec` prennent des réglages explicites.

use super::erreur::{Erreur, EvalError, ParseError};
use super::expr::{Expr, Liaisons};
use super::format::to_canonical_string_avec;
use super::jetons::{format_tokens, tokenize};
use super::nombre::Nombre;
use super::reglages::Reglages;
use super::rpn::{from_rpn, parse_tokens, to_rpn};

/// Étapes intermédiaires du pipeline (diagnostic).
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub canon: String,
}

/// Texte -> arbre.
pub fn parse_expression(s: &str) -> Result<Expr, ParseError> {
    parse_expression_avec(s, &Reglages::default())
}

pub fn parse_expression_avec(s: &str, reglages: &Reglages) -> Result<Expr, ParseError> {
    let jetons = tokenize(s)?;
    parse_tokens(&jetons, reglages)
}

pub fn evaluate(e: &Expr, liaisons: &Liaisons) -> Result<Nombre, EvalError> {
    e.evaluate(liaisons)
}

/// Égalité structurelle (même forme d’arbre, constantes numériquement égales).
pub fn equals(a: &Expr, b: &Expr) -> bool {
    a == b
}

/// Parse + évaluation en une fois.
pub fn eval_expression(s: &str, liaisons: &Liaisons) -> Result<Nombre, Erreur> {
    let e = parse_expression(s)?;
    Ok(e.evaluate(liaisons)?)
}

/// Parse en gardant la trace de chaque étape : jetons, RPN, rendu canonique.
pub fn demarche(s: &str, reglages: &Reglages) -> Result<(Expr, Demarche), ParseError> {
    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN
    let rpn = to_rpn(&jetons, reglages)?;

    // 3) AST (Expr)
    let e = from_rpn(&rpn)?;

    let d = Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
        canon: to_canonical_string_avec(&e, reglages),
    };

    Ok((e, d))
}
