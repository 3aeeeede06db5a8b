mod common;
use common::run;

#[test]
fn test_fn_abs() {
    assert_eq!(run("10 PRINT ABS(5), ABS(0 - 5)\n"), "5 5\n");
}

#[test]
fn test_fn_abs_of_minimum_wraps() {
    assert_eq!(run("10 PRINT ABS(0 - 32767 - 1)\n"), "-32768\n");
}

#[test]
fn test_fn_abs_in_expression() {
    assert_eq!(run("10 LET A = 0 - 3\n20 PRINT ABS(A) * 2\n"), "6\n");
}

#[test]
fn test_fn_mod() {
    assert_eq!(run("10 PRINT MOD(7, 3), MOD(0 - 7, 3)\n"), "1 -1\n");
}

#[test]
fn test_fn_mod_identity() {
    assert_eq!(run("10 PRINT 3 * (7 / 3) + MOD(7, 3)\n"), "7\n");
}

#[test]
fn test_fn_mod_by_zero() {
    assert_eq!(run("10 PRINT MOD(5, 0)\n"), "?DIVISION BY ZERO\n");
}

#[test]
fn test_fn_rnd_stays_in_range() {
    let source = "\
10 LET N = 0
20 LET N = N + 1
30 LET R = RND(6)
40 IF R < 1 THEN GOTO 100
50 IF R > 6 THEN GOTO 100
60 IF N < 50 THEN GOTO 20
70 PRINT \"OK\"
80 END
100 PRINT \"BAD\"
";
    assert_eq!(run(source), "OK\n");
}

#[test]
fn test_fn_rnd_degenerate_bound() {
    assert_eq!(run("10 PRINT RND(0), RND(0 - 5), RND(1)\n"), "1 1 1\n");
}

#[test]
fn test_fn_rnd_seeded_runs_repeat() {
    let source = "10 PRINT RND(1000), RND(1000), RND(1000)\n";
    assert_eq!(run(source), run(source));
}

#[test]
fn test_fn_calls_nest() {
    assert_eq!(run("10 PRINT ABS(MOD(0 - 7, 3))\n"), "1\n");
}
