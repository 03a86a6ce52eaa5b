//! Tests for the path interpreter.

use super::*;

fn pts(prim: &RawPrimitive) -> Vec<(f64, f64)> {
    prim.points().iter().map(|p| (p.x, p.y)).collect()
}

// =============================================================================
// TOKENIZER
// =============================================================================

#[test]
fn test_tokenize_commas_and_whitespace() {
    let tokens = tokenize("M 1,2\nL3 ,4").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Letter('M'),
            Token::Number(1.0),
            Token::Number(2.0),
            Token::Letter('L'),
            Token::Number(3.0),
            Token::Number(4.0),
        ]
    );
}

#[test]
fn test_tokenize_compact_numbers() {
    let tokens = tokenize("10-5.5.25").unwrap();
    assert_eq!(
        tokens,
        vec![Token::Number(10.0), Token::Number(-5.5), Token::Number(0.25)]
    );
}

#[test]
fn test_tokenize_exponent() {
    let tokens = tokenize("1e2 -2.5E-1").unwrap();
    assert_eq!(tokens, vec![Token::Number(100.0), Token::Number(-0.25)]);
}

#[test]
fn test_tokenize_bare_e_is_letter() {
    let tokens = tokenize("5e").unwrap();
    assert_eq!(tokens, vec![Token::Number(5.0), Token::Letter('e')]);
}

#[test]
fn test_tokenize_rejects_garbage() {
    assert!(matches!(tokenize("M0 0 ; L1 1"), Err(SvgError::InvalidInput { .. })));
    assert!(matches!(tokenize("M - 1"), Err(SvgError::InvalidInput { .. })));
}

// =============================================================================
// INTERPRETER
// =============================================================================

#[test]
fn test_absolute_open_path() {
    let prim = interpret("M0 0 L10 0 L10 10").unwrap().unwrap();
    assert!(!prim.is_closed());
    assert_eq!(pts(&prim), vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
}

#[test]
fn test_relative_commands_accumulate() {
    let prim = interpret("m1 1 l2 0 v3 h-2").unwrap().unwrap();
    assert_eq!(
        pts(&prim),
        vec![(1.0, 1.0), (3.0, 1.0), (3.0, 4.0), (1.0, 4.0)]
    );
}

#[test]
fn test_close_returns_to_start() {
    let prim = interpret("M0 0 H10 V10 Z").unwrap().unwrap();
    assert!(prim.is_closed());
    assert_eq!(
        pts(&prim),
        vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]
    );
}

#[test]
fn test_implicit_lineto_after_move() {
    let prim = interpret("M0 0 5 0 5 5").unwrap().unwrap();
    assert_eq!(pts(&prim), vec![(0.0, 0.0), (5.0, 0.0), (5.0, 5.0)]);
}

#[test]
fn test_implicit_relative_lineto_after_relative_move() {
    let prim = interpret("m2 2 1 0 0 1").unwrap().unwrap();
    assert_eq!(pts(&prim), vec![(2.0, 2.0), (3.0, 2.0), (3.0, 3.0)]);
}

#[test]
fn test_cursor_resets_after_close() {
    let prim = interpret("M5 5 h1 v1 z l1 0").unwrap().unwrap();
    let points = pts(&prim);
    assert_eq!(points.last(), Some(&(6.0, 5.0)));
}

#[test]
fn test_subpaths_concatenated() {
    let prim = interpret("M0 0 H4 V4 Z M1 1 H2 V2 Z").unwrap().unwrap();
    assert!(prim.is_closed());
    assert_eq!(prim.points().len(), 8);
}

#[test]
fn test_short_path_dropped() {
    assert_eq!(interpret("M0 0 L10 0").unwrap(), None);
    assert_eq!(interpret("").unwrap(), None);
}

#[test]
fn test_curve_rejected() {
    let err = interpret("M0 0 C1 1 2 2 3 3").unwrap_err();
    assert_eq!(err, SvgError::UnsupportedPathCommand { command: 'C' });
}

#[test]
fn test_arc_rejected() {
    let err = interpret("M0 0 a5 5 0 0 1 10 0").unwrap_err();
    assert_eq!(err, SvgError::UnsupportedPathCommand { command: 'a' });
}

#[test]
fn test_numbers_before_command() {
    assert!(matches!(interpret("0 0 L1 1"), Err(SvgError::InvalidInput { .. })));
}

#[test]
fn test_numbers_after_close() {
    assert!(matches!(
        interpret("M0 0 H1 V1 Z 4 4"),
        Err(SvgError::InvalidInput { .. })
    ));
}

#[test]
fn test_truncated_pair() {
    assert!(matches!(interpret("M0 0 L1 1 L2"), Err(SvgError::InvalidInput { .. })));
}

#[test]
fn test_command_without_arguments() {
    assert!(matches!(interpret("M0 0 L"), Err(SvgError::InvalidInput { .. })));
    assert!(matches!(interpret("M L 1 1"), Err(SvgError::InvalidInput { .. })));
}

#[test]
fn test_step_is_pure() {
    let state = PathState::default();
    let next = state.clone().step(Token::Letter('M')).unwrap();
    assert_eq!(state, PathState::default());
    assert_ne!(next, state);
}
