//! Tests scientifiques (campagne) : propriétés observables du noyau.
//!
//! - priorités et associativité (valeurs attendues figées)
//! - moins unaire
//! - erreurs d’évaluation (division par zéro, variable non liée)
//! - constructeurs vs parse
//! - rendu canonique (parenthèses réinsérées quand il le faut)
//! - stress borné (taille, big int)

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use super::init_log;
use super::*;

fn vide() -> Liaisons {
    Liaisons::new()
}

fn eval_ok(expr: &str, liaisons: &Liaisons) -> Nombre {
    let e = parse_expression(expr).unwrap_or_else(|err| panic!("expr={expr:?} err={err}"));
    evaluate(&e, liaisons).unwrap_or_else(|err| panic!("expr={expr:?} err={err}"))
}

fn canon(expr: &str) -> String {
    to_canonical_string(&parse_expression(expr).unwrap())
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Priorités ------------------------ */

#[test]
fn sci_priorites() {
    init_log();
    assert_eq!(eval_ok("3 + 4 * 2", &vide()), Nombre::from(11));
    assert_eq!(eval_ok("(3 + 4) * 2", &vide()), Nombre::from(14));
    assert_eq!(eval_ok("2 * 3 ** 2", &vide()), Nombre::from(18));
    assert_eq!(eval_ok("10 - 4 - 3", &vide()), Nombre::from(3));
    assert_eq!(eval_ok("2 ** 10 / 4", &vide()), Nombre::Reel(256.0));
}

#[test]
fn sci_puissance_associative_droite() {
    init_log();
    // 2 ** (3 ** 2) = 512 (convention mathématique)
    assert_eq!(eval_ok("2 ** 3 ** 2", &vide()), Nombre::from(512));

    // et 64 quand on demande explicitement l’associativité à gauche
    let gauche = Reglages::avec_puissance(Associativite::Gauche);
    let e = parse_expression_avec("2 ** 3 ** 2", &gauche).unwrap();
    assert_eq!(e.evaluate(&vide()).unwrap(), Nombre::from(64));
}

/* ------------------------ Moins unaire ------------------------ */

#[test]
fn sci_moins_unaire() {
    init_log();
    assert_eq!(eval_ok("-3 + 5", &vide()), Nombre::from(2));
    assert_eq!(eval_ok("-12 + 2", &vide()), Nombre::from(-10));
    assert_eq!(eval_ok("4 * -2.5", &vide()), Nombre::Reel(-10.0));
    assert_eq!(eval_ok("-(2 + 3) * 2", &vide()), Nombre::from(-10));
    assert_eq!(eval_ok("--3", &vide()), Nombre::from(3));
    assert_eq!(eval_ok("2 ** -1", &vide()), Nombre::Reel(0.5));

    let mut env = vide();
    env.insert("abc".into(), Nombre::from(7));
    assert_eq!(eval_ok("-abc", &env), Nombre::from(-7));
    assert_eq!(eval_ok("(abc)-1", &env), Nombre::from(6));
}

#[test]
fn sci_moins_unaire_lie_l_operande_seul() {
    init_log();
    // le groupe synthétique entoure l’opérande : -x ** 2 = (-x) ** 2
    let mut env = vide();
    env.insert("x".into(), Nombre::from(3));
    assert_eq!(eval_ok("-x ** 2", &env), Nombre::from(9));
}

/* ------------------------ Erreurs d’évaluation ------------------------ */

#[test]
fn sci_division_par_zero() {
    init_log();
    let mut env = vide();
    env.insert("x".into(), Nombre::from(10));
    env.insert("y".into(), Nombre::from(0));

    let e = parse_expression("x / y").unwrap();
    assert_eq!(evaluate(&e, &env), Err(EvalError::DivisionByZero));
}

#[test]
fn sci_variable_non_liee() {
    init_log();
    // parse OK : une variable peut rester non liée tant qu’on n’évalue pas
    let e = parse_expression("x + 1").unwrap();
    assert_eq!(
        evaluate(&e, &vide()),
        Err(EvalError::UnboundVariable("x".into()))
    );
}

/* ------------------------ Division vraie / entier exact ------------------------ */

#[test]
fn sci_division_vraie() {
    init_log();
    assert_eq!(eval_ok("1 / 3", &vide()), Nombre::Reel(1.0 / 3.0));
    assert!(!eval_ok("4 / 2", &vide()).est_entier());
    assert!(eval_ok("4 * 2", &vide()).est_entier());
    assert!(!eval_ok("4 * 2.0", &vide()).est_entier());
}

/* ------------------------ Constructeurs vs parse ------------------------ */

#[test]
fn sci_constructeurs_egal_parse() {
    init_log();
    assert!(equals(
        &add(Expr::num(1), Expr::num(2)),
        &parse_expression("1 + 2").unwrap()
    ));
    assert!(equals(
        &pow(Expr::var("x"), sub(Expr::num(2), Expr::var("y"))),
        &parse_expression("x ** (2 - y)").unwrap()
    ));
    assert!(equals(
        &div(mul(Expr::var("a"), Expr::var("b")), Expr::var("c")),
        &parse_expression("a * b / c").unwrap()
    ));
    // 3 et 3.0 sont numériquement égaux
    assert!(equals(
        &parse_expression("3").unwrap(),
        &parse_expression("3.0").unwrap()
    ));
}

/* ------------------------ Rendu canonique ------------------------ */

#[test]
fn sci_rendu_parentheses_reinserees() {
    init_log();
    assert_eq!(canon("(1 + 2) * 3"), "(1 + 2) * 3");
    assert_eq!(canon("1 + (2 * 3)"), "1 + 2 * 3");
    assert_eq!(canon("((a))"), "a");
    assert_eq!(canon("a-(b+c)"), "a - (b + c)");
    assert_eq!(canon("(a-b)+c"), "a - b + c");
    assert_eq!(canon("x/(y/z)"), "x / (y / z)");
    assert_eq!(canon("2**(3**2)"), "2 ** 3 ** 2");
    assert_eq!(canon("(2**3)**2"), "(2 ** 3) ** 2");
}

#[test]
fn sci_rendu_reparse_identique() {
    init_log();
    for s in [
        "(1 + 2) * 3",
        "a - (b - c) / d",
        "x ** (y * 2) + 0.5",
        "((p + q) * (r - s)) ** t ** u",
        "a / b / (c / d)",
    ] {
        let e = parse_expression(s).unwrap();
        let r = parse_expression(&e.to_string()).unwrap();
        assert_eq!(r, e, "s={s:?} canon={}", e);
    }
}

#[test]
fn sci_rendu_reels_extremes_reparse() {
    init_log();
    for s in ["0.0000001", "0.00001", "1e+3", "2.5E-12 * x", "100000000000000000000.0"] {
        let e = parse_expression(s).unwrap_or_else(|err| panic!("s={s:?} err={err}"));
        let canon = e.to_string();
        let r = parse_expression(&canon).unwrap_or_else(|err| panic!("canon={canon:?} err={err}"));
        assert_eq!(r, e, "s={s:?} canon={canon:?}");
    }
    assert_eq!(canon("0.0000001"), "1e-7");
    assert_eq!(eval_ok("1e+3", &vide()), Nombre::Reel(1000.0));

    // arbre construit : même exigence
    let e = mul(Expr::var("x"), Expr::num(1e-7));
    assert_eq!(e.to_string(), "x * 1e-7");
    assert_eq!(parse_expression(&e.to_string()), Ok(e));
    let e = add(Expr::num(1e20), Expr::num(3e-300));
    assert_eq!(parse_expression(&e.to_string()), Ok(e));
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_taille_somme_safe() {
    init_log();
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut expr = String::new();
    for k in 0..400 {
        if k > 0 {
            expr.push_str(" + ");
        }
        expr.push('1');
        budget(t0, max);
    }

    assert_eq!(eval_ok(&expr, &vide()), Nombre::from(400));
    budget(t0, max);
}

#[test]
fn sci_stress_bigint_safe() {
    init_log();
    let big = "9".repeat(100);
    let r = eval_ok(&format!("{big} + 1"), &vide());
    assert_eq!(r.to_string(), format!("1{}", "0".repeat(100)));

    // division vraie d’énormes entiers : quotient exact puis arrondi
    let r = eval_ok(&format!("{big}0 / {big}"), &vide());
    assert_eq!(r, Nombre::Reel(10.0));
}

#[test]
fn sci_stress_puissance_geante_safe() {
    init_log();
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // 9 ** (9 ** 9) : trop grand pour un entier exact, bascule en réel
    let r = eval_ok("9 ** 9 ** 9", &vide());
    budget(t0, max);
    assert!(!r.est_entier());
    assert_eq!(r, Nombre::Reel(f64::INFINITY));

    let r = eval_ok("10 ** 4000000000", &vide());
    budget(t0, max);
    assert_eq!(r, Nombre::Reel(f64::INFINITY));

    // les unités restent exactes même avec un exposant démesuré
    assert_eq!(eval_ok("(-1) ** 9 ** 9", &vide()), Nombre::from(-1));
    budget(t0, max);

    // petites puissances : toujours exactes
    assert_eq!(eval_ok("9 ** 9", &vide()), Nombre::from(387_420_489));
    assert!(eval_ok("2 ** 1000", &vide()).est_entier());
    budget(t0, max);
}
