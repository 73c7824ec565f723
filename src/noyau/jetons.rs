// src/noyau/jetons.rs
//
// Tokenisation en deux passes :
// 1) découpe brute : séparateurs + - * / ( ) , ; blancs = frontières ; "* *" => "**"
//    (le signe d’un exposant reste dans le mot : "1e-7", "2.5E+3")
// 2) réécriture du moins unaire : "-x" => "( -1 * x )"
//
// Le groupe synthétique se referme après l’opérande COMPLET qui suit le moins
// (littéral entier, identifiant entier, groupe parenthésé entier).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::erreur::LexError;

static ENTIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("regex entier"));

static REEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").expect("regex réel")
});

// mantisse + 'e' : le '+' / '-' suivant appartient au littéral
static EXPOSANT_OUVERT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)[eE]$").expect("regex exposant ouvert")
});

static IDENTIFIANT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("regex identifiant"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow, // **
}

impl Op {
    pub fn symbole(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Pow => "**",
        }
    }

    /// Rang de priorité : ** = 3, * / = 2, + - = 1.
    pub fn precedence(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div => 2,
            Op::Pow => 3,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    /// Littéral numérique ; `entier` décide Entier vs Reel au parse.
    Num { litteral: String, entier: bool },

    // Tout le reste (validé comme nom de variable par le parser)
    Ident(String),

    Op(Op),

    LPar,
    RPar,
    Virgule,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num { litteral, .. } => f.write_str(litteral),
            Tok::Ident(name) => f.write_str(name),
            Tok::Op(op) => write!(f, "{op}"),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
            Tok::Virgule => f.write_str(","),
        }
    }
}

/// Classe un littéral : Some(true) entier, Some(false) réel, None si non numérique.
/// Vérification syntaxique (pas de conversion “pour voir”).
pub fn classe_litteral(s: &str) -> Option<bool> {
    if ENTIER.is_match(s) {
        Some(true)
    } else if REEL.is_match(s) {
        Some(false)
    } else {
        None
    }
}

pub fn est_identifiant(s: &str) -> bool {
    IDENTIFIANT.is_match(s)
}

fn classe(mot: String) -> Tok {
    match classe_litteral(&mot) {
        Some(entier) => Tok::Num {
            litteral: mot,
            entier,
        },
        None => Tok::Ident(mot),
    }
}

/* ------------------------ Passe 1 : découpe brute ------------------------ */

enum Brut {
    Mot(String),
    Op(Op),
    LPar,
    RPar,
    Virgule,
}

fn pousse_mot(out: &mut Vec<Brut>, mot: &mut String) {
    if !mot.is_empty() {
        out.push(Brut::Mot(std::mem::take(mot)));
    }
}

fn decoupe(s: &str) -> Result<Vec<Brut>, LexError> {
    let mut out = Vec::new();
    let mut mot = String::new();

    for (position, c) in s.chars().enumerate() {
        if matches!(c, '+' | '-') && EXPOSANT_OUVERT.is_match(&mot) {
            mot.push(c);
            continue;
        }

        let sep = match c {
            '+' => Some(Brut::Op(Op::Add)),
            '-' => Some(Brut::Op(Op::Sub)),
            '*' => Some(Brut::Op(Op::Mul)),
            '/' => Some(Brut::Op(Op::Div)),
            '(' => Some(Brut::LPar),
            ')' => Some(Brut::RPar),
            ',' => Some(Brut::Virgule),
            _ => None,
        };

        if let Some(sep) = sep {
            pousse_mot(&mut out, &mut mot);
            // deux '*' consécutifs (blancs ignorés) => '**'
            if matches!(sep, Brut::Op(Op::Mul)) && matches!(out.last(), Some(Brut::Op(Op::Mul))) {
                out.pop();
                out.push(Brut::Op(Op::Pow));
            } else {
                out.push(sep);
            }
        } else if c.is_ascii_whitespace() {
            pousse_mot(&mut out, &mut mot);
        } else if c.is_ascii_graphic() {
            mot.push(c);
        } else {
            return Err(LexError::CaractereInvalide {
                caractere: c,
                position,
            });
        }
    }
    pousse_mot(&mut out, &mut mot);

    Ok(out)
}

/* ------------------------ Passe 2 : moins unaire ------------------------ */

/// Referme les groupes synthétiques ouverts à la profondeur courante.
fn ferme_groupes(out: &mut Vec<Tok>, groupes: &mut Vec<usize>, profondeur: usize) {
    while groupes.last() == Some(&profondeur) {
        groupes.pop();
        out.push(Tok::RPar);
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers (ex: 12) et réels (ex: 2.5, .5, 1e3, 1e-7)
/// - opérateurs + - * / **
/// - parenthèses ( ) et virgule
/// - identifiants (tout mot qui n’est pas un nombre)
/// - moins unaire, réécrit en multiplication par -1
pub fn tokenize(s: &str) -> Result<Vec<Tok>, LexError> {
    let bruts = decoupe(s)?;

    let mut out = Vec::with_capacity(bruts.len());
    // profondeur (parenthèses réelles) à laquelle chaque groupe synthétique a été ouvert
    let mut groupes: Vec<usize> = Vec::new();
    let mut profondeur: usize = 0;
    // vrai en début d’entrée, après un opérateur, '(' ou ','
    let mut attend_operande = true;

    for b in bruts {
        match b {
            Brut::Op(Op::Sub) if attend_operande => {
                out.push(Tok::LPar);
                out.push(Tok::Num {
                    litteral: "-1".to_string(),
                    entier: true,
                });
                out.push(Tok::Op(Op::Mul));
                groupes.push(profondeur);
            }
            Brut::Op(op) => {
                out.push(Tok::Op(op));
                attend_operande = true;
            }
            Brut::LPar => {
                out.push(Tok::LPar);
                profondeur += 1;
                attend_operande = true;
            }
            Brut::RPar => {
                out.push(Tok::RPar);
                profondeur = profondeur.saturating_sub(1);
                attend_operande = false;
                ferme_groupes(&mut out, &mut groupes, profondeur);
            }
            Brut::Virgule => {
                out.push(Tok::Virgule);
                attend_operande = true;
            }
            Brut::Mot(mot) => {
                out.push(classe(mot));
                attend_operande = false;
                ferme_groupes(&mut out, &mut groupes, profondeur);
            }
        }
    }

    log::trace!("tokenize {s:?} => {}", format_tokens(&out));

    Ok(out)
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
