//! arbre_expr — expressions arithmétiques en arbre
//!
//! texte -> jetons -> RPN (shunting-yard) -> arbre -> évaluation / rendu canonique
//!
//! ```
//! use arbre_expr::{parse_expression, Liaisons, Nombre};
//!
//! let e = parse_expression("(x + 4) * 2").unwrap();
//! let mut env = Liaisons::new();
//! env.insert("x".to_string(), Nombre::from(3));
//! assert_eq!(e.evaluate(&env).unwrap(), Nombre::from(14));
//! assert_eq!(e.to_string(), "(x + 4) * 2");
//! ```

pub mod noyau;

pub use noyau::*;
