#![allow(dead_code)]

use tinybasic::lang::{parse, scan};
use tinybasic::mach::Runtime;

/// Run a program with no console input and return its transcript.
/// Errors from any stage appear in classic form, `?MESSAGE`.
pub fn run(source: &str) -> String {
    run_with_input(source, "")
}

pub fn run_with_input(source: &str, input: &str) -> String {
    let tokens = scan(source);
    let ast = match parse(&tokens) {
        Ok(ast) => ast,
        Err(error) => return format!("?{}\n", error),
    };
    let mut output: Vec<u8> = Vec::new();
    let result = {
        let mut runtime = Runtime::new(source, &tokens, &ast, input.as_bytes(), &mut output);
        runtime.randomize(0);
        runtime.run()
    };
    let mut transcript = String::from_utf8_lossy(&output).into_owned();
    if let Err(error) = result {
        transcript.push_str(&format!("?{}\n", error));
    }
    transcript
}
