// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// - LexError   : caractère que le tokenizer ne sait pas classer
// - ParseError : flux de jetons non réductible à UN arbre
// - EvalError  : uniquement à l’évaluation (jamais au parse)
//
// Aucune erreur n’est avalée : tout remonte à l’appelant immédiat.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("caractère invalide {caractere:?} en position {position}")]
    CaractereInvalide { caractere: char, position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Ni nombre, ni identifiant valide, ni opérateur, ni parenthèse.
    #[error("jeton inconnu: {0}")]
    UnknownToken(String),

    #[error("parenthèses non équilibrées")]
    UnbalancedParens,

    /// La RPN ne se replie pas en exactement une expression.
    #[error("expression invalide")]
    MalformedOutput,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("variable non liée: {0}")]
    UnboundVariable(String),

    #[error("division par zéro")]
    DivisionByZero,
}

/// Erreur du pipeline complet (parse + évaluation).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Erreur {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl From<LexError> for Erreur {
    fn from(e: LexError) -> Self {
        Erreur::Parse(ParseError::Lex(e))
    }
}
