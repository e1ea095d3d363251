use crate::{
    Apply, Binary, Constant, Cos, DEFAULT_POINTS, Divide, Expression, Plus, Report, Variable,
    approx_eq, cos, evaluate_at, exp, sin, var,
};

type ProgramExpr =
    Binary<Binary<Apply<Cos, Variable<f64>>, Divide, Variable<f64>>, Plus, Constant<f64>>;

fn program_expression() -> ProgramExpr {
    let x = var::<f64>();
    cos(x) / x + 2.0
}

#[test]
fn test_program_values() {
    let expr = program_expression();
    assert!(approx_eq(expr.eval(3.0), 3.0_f64.cos() / 3.0 + 2.0));
    assert!(approx_eq(expr.eval(1.5), 1.5_f64.cos() / 1.5 + 2.0));
    // Known values, for a reader checking by hand
    assert!((expr.eval(3.0) - 1.670_002_5).abs() < 1e-6);
    assert!((expr.eval(1.5) - 2.047_158_1).abs() < 1e-6);
}

#[test]
fn test_evaluate_at_default_points() {
    let expr = program_expression();
    let values = evaluate_at(&expr, &DEFAULT_POINTS);
    assert_eq!(values, Report::default().evaluate(&expr));
}

#[test]
fn test_expression_passed_generically() {
    // Callers accept any expression by trait, like a template parameter
    fn twice_at<E: Expression<Scalar = f64>>(e: &E, x: f64) -> f64 {
        e.eval(x) * 2.0
    }

    let x = var::<f64>();
    assert_eq!(twice_at(&(x + 1.0), 2.0), 6.0);
    assert_eq!(twice_at(&program_expression(), 3.0), program_expression().eval(3.0) * 2.0);
}

#[test]
fn test_expressions_are_copy() {
    let x = var::<f64>();
    let inner = sin(x) + 1.0;
    // inner is reused twice without cloning
    let outer = inner * inner - exp(inner);
    let v = 0.25_f64;
    let i = v.sin() + 1.0;
    assert_eq!(outer.eval(v), i * i - i.exp());
    assert_eq!(inner.eval(v), i);
}

#[test]
fn test_reusable_across_calls() {
    let expr = program_expression();
    let first = expr.eval(3.0);
    let _ = expr.eval(1.5);
    assert_eq!(expr.eval(3.0), first);
}

#[test]
fn test_f32_program() {
    let x = var::<f32>();
    let expr = cos(x) / x + 2.0_f32;
    assert!(approx_eq(expr.eval(3.0), 3.0_f32.cos() / 3.0 + 2.0));
    assert_eq!(std::mem::size_of_val(&expr), std::mem::size_of::<f32>());
}
