// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr (pile de valeurs, droite dépilée d’abord)
//
// Règles:
// - Num  : sortie directe (Entier si littéral entier, sinon Reel)
// - Ident: sortie directe (Var) s’il s’agit d’un nom valide, sinon jeton inconnu
// - Op   : dépile tant que le sommet lie plus fort (ou autant, si l’opérateur
//          entrant est associatif à gauche)
//
// NOTE:
// - le moins unaire est déjà réécrit par le tokenizer : pas de cas spécial ici.

use std::sync::Arc;

use num_bigint::BigInt;

use super::erreur::ParseError;
use super::expr::Expr;
use super::jetons::{est_identifiant, format_tokens, Tok};
use super::nombre::Nombre;
use super::reglages::Reglages;

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(3), Op(+), Num(4), Op(*), Num(2)]
///   rpn:    [Num(3), Num(4), Num(2), Op(*), Op(+)]
pub fn to_rpn(tokens: &[Tok], reglages: &Reglages) -> Result<Vec<Tok>, ParseError> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num { .. } => out.push(tok),

            Tok::Ident(ref name) => {
                if !est_identifiant(name) {
                    return Err(ParseError::UnknownToken(name.clone()));
                }
                out.push(tok);
            }

            Tok::Op(op) => {
                while let Some(Tok::Op(top)) = ops.last() {
                    let doit_pop = top.precedence() > op.precedence()
                        || (top.precedence() == op.precedence()
                            && !reglages.associatif_droite(op));
                    if !doit_pop {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }
                ops.push(tok);
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '(' (qui disparaît)
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(t) => out.push(t),
                        None => return Err(ParseError::UnbalancedParens),
                    }
                }
            }

            Tok::Virgule => return Err(ParseError::UnknownToken(",".into())),
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ParseError::UnbalancedParens);
        }
        out.push(op);
    }

    log::debug!("rpn: {}", format_tokens(&out));

    Ok(out)
}

fn lit_nombre(litteral: &str, entier: bool) -> Result<Nombre, ParseError> {
    if entier {
        litteral
            .parse::<BigInt>()
            .map(Nombre::Entier)
            .map_err(|_| ParseError::UnknownToken(litteral.to_string()))
    } else {
        litteral
            .parse::<f64>()
            .map(Nombre::Reel)
            .map_err(|_| ParseError::UnknownToken(litteral.to_string()))
    }
}

/// Construit une Expr à partir d’une RPN.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ParseError> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num { litteral, entier } => st.push(Expr::Num(lit_nombre(litteral, *entier)?)),

            Tok::Ident(name) => {
                if !est_identifiant(name) {
                    return Err(ParseError::UnknownToken(name.clone()));
                }
                st.push(Expr::Var(name.clone()));
            }

            Tok::Op(op) => {
                let b = st.pop().ok_or(ParseError::MalformedOutput)?;
                let a = st.pop().ok_or(ParseError::MalformedOutput)?;
                st.push(Expr::Bin(*op, Arc::new(a), Arc::new(b)));
            }

            Tok::LPar | Tok::RPar => return Err(ParseError::UnbalancedParens),
            Tok::Virgule => return Err(ParseError::UnknownToken(",".into())),
        }
    }

    if st.len() != 1 {
        return Err(ParseError::MalformedOutput);
    }
    st.pop().ok_or(ParseError::MalformedOutput)
}

/// Jetons -> arbre (les deux étapes d’un coup).
pub fn parse_tokens(tokens: &[Tok], reglages: &Reglages) -> Result<Expr, ParseError> {
    let rpn = to_rpn(tokens, reglages)?;
    from_rpn(&rpn)
}
