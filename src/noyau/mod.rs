//! Noyau arbre d’expressions
//!
//! Organisation interne :
//! - erreur.rs   : LexError / ParseError / EvalError
//! - nombre.rs   : entier exact (big int) ou réel + promotion
//! - jetons.rs   : tokenisation (+ réécriture du moins unaire)
//! - reglages.rs : associativité de ** (partagée parse / rendu)
//! - rpn.rs      : shunting-yard + construction Expr
//! - expr.rs     : arbre, constructeurs add/sub/…, évaluation
//! - format.rs   : rendu canonique (parenthèses minimales)
//! - eval.rs     : pipeline public

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod nombre;
pub mod reglages;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;



/// Logs des campagnes de tests (env_logger en mode test, une fois par processus).
#[cfg(test)]
fn init_log() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

// API publique
pub use erreur::{Erreur, EvalError, LexError, ParseError};
pub use eval::{
    demarche, equals, eval_expression, evaluate, parse_expression, parse_expression_avec, Demarche,
};
pub use expr::{add, div, mul, pow, sub, Expr, Liaisons};
pub use format::{to_canonical_string, to_canonical_string_avec};
pub use jetons::{tokenize, Op, Tok};
pub use nombre::{Nombre, PUISSANCE_MAX_BITS};
pub use reglages::{Associativite, Reglages};
