mod common;
use common::run;

#[test]
fn test_precedence() {
    assert_eq!(run("10 PRINT 2 + 3 * 4\n"), "14\n");
    assert_eq!(run("10 PRINT (2 + 3) * 4\n"), "20\n");
}

#[test]
fn test_division_truncates() {
    assert_eq!(run("10 PRINT 7 / 2\n"), "3\n");
    assert_eq!(run("10 PRINT 0 - 7 / 2\n"), "-3\n");
}

#[test]
fn test_left_assoc() {
    assert_eq!(run("10 PRINT 10 - 2 - 3\n"), "5\n");
    assert_eq!(run("10 PRINT 100 / 5 / 2\n"), "10\n");
}

#[test]
fn test_unary_sign() {
    assert_eq!(run("10 PRINT -5\n"), "-5\n");
    assert_eq!(run("10 PRINT +5\n"), "5\n");
    assert_eq!(run("10 PRINT - 5 + 10\n"), "5\n");
    assert_eq!(run("10 PRINT -2 * 3\n"), "-6\n");
}

#[test]
fn test_parens_nest() {
    assert_eq!(run("10 PRINT ((1 + 2) * (3 + 4))\n"), "21\n");
}

#[test]
fn test_relations() {
    assert_eq!(run("10 PRINT 1 < 2\n"), "?SYNTAX ERROR; EXPECTED END OF LINE, FOUND <\n");
    assert_eq!(run("10 IF 1 < 2 THEN PRINT \"T\"\n"), "T\n");
    assert_eq!(run("10 IF 2 < 2 THEN PRINT \"T\"\n"), "");
    assert_eq!(run("10 IF 2 <= 2 THEN PRINT \"T\"\n"), "T\n");
    assert_eq!(run("10 IF 3 > 2 THEN PRINT \"T\"\n"), "T\n");
    assert_eq!(run("10 IF 2 >= 3 THEN PRINT \"T\"\n"), "");
    assert_eq!(run("10 IF 2 = 2 THEN PRINT \"T\"\n"), "T\n");
    assert_eq!(run("10 IF 1 <> 2 THEN PRINT \"T\"\n"), "T\n");
    assert_eq!(run("10 IF 1 >< 2 THEN PRINT \"T\"\n"), "T\n");
    assert_eq!(run("10 IF 2 <> 2 THEN PRINT \"T\"\n"), "");
}

#[test]
fn test_unset_variable_is_zero() {
    assert_eq!(run("10 PRINT A\n"), "0\n");
}

#[test]
fn test_int16_bounds() {
    assert_eq!(run("10 PRINT 32767\n"), "32767\n");
    assert_eq!(run("10 PRINT 0 - 32767 - 1\n"), "-32768\n");
}

#[test]
fn test_literal_past_max_rejected() {
    assert_eq!(run("10 PRINT 32768\n"), "?SYNTAX ERROR; EXPECTED EXPRESSION\n");
}

#[test]
fn test_add_overflow() {
    assert_eq!(run("10 PRINT 30000 + 30000\n"), "?OVERFLOW\n");
}

#[test]
fn test_subtract_overflow() {
    assert_eq!(run("10 PRINT 0 - 32767 - 2\n"), "?OVERFLOW\n");
}

#[test]
fn test_multiply_overflow() {
    assert_eq!(run("10 PRINT 300 * 300\n"), "?OVERFLOW\n");
}

#[test]
fn test_divide_overflow() {
    assert_eq!(run("10 PRINT (0 - 32767 - 1) / (0 - 1)\n"), "?OVERFLOW\n");
}

#[test]
fn test_division_by_zero() {
    assert_eq!(run("10 PRINT 1 / 0\n"), "?DIVISION BY ZERO\n");
}

#[test]
fn test_error_stops_the_run() {
    assert_eq!(run("10 PRINT 1 / 0\n20 PRINT \"AFTER\"\n"), "?DIVISION BY ZERO\n");
}
