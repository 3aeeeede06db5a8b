//! # Tiny BASIC
//!
//! Runs a Tiny BASIC program from a file. `--tokens` and `--ast` dump
//! the scanner and parser output instead of executing.

use ansi_term::Style;
use std::env;
use std::fs;
use std::io;
use std::process::exit;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tinybasic::lang::{annotate, parse, scan, token::Token, Error};
use tinybasic::mach::Runtime;

enum Mode {
    Run,
    Tokens,
    Ast,
}

fn usage() -> ! {
    eprintln!("usage: tinybasic [--tokens|--ast] program.bas");
    exit(2);
}

fn main() {
    let mut mode = Mode::Run;
    let mut path: Option<String> = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--tokens" => mode = Mode::Tokens,
            "--ast" => mode = Mode::Ast,
            _ if arg.starts_with('-') => usage(),
            _ if path.is_none() => path = Some(arg),
            _ => usage(),
        }
    }
    let path = match path {
        Some(path) => path,
        None => usage(),
    };
    let source = match fs::read_to_string(&path) {
        Ok(source) => source,
        Err(cause) => {
            eprintln!("{}: {}", path, cause);
            exit(2);
        }
    };
    let tokens = scan(&source);
    if let Mode::Tokens = mode {
        for (id, token) in tokens.iter().enumerate() {
            println!(
                "{:>4}: {:?} {:?} {:?}",
                id,
                token.tag,
                &source[token.column.clone()],
                token.column
            );
        }
        return;
    }
    let ast = match parse(&tokens) {
        Ok(ast) => ast,
        Err(error) => {
            report(&source, &tokens, &error);
            exit(1);
        }
    };
    if let Mode::Ast = mode {
        print!("{}", ast);
        return;
    }
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let stdin = io::stdin();
    let mut runtime = Runtime::new(&source, &tokens, &ast, stdin.lock(), io::stdout());
    loop {
        if interrupted.load(Ordering::SeqCst) {
            println!("BREAK");
            break;
        }
        match runtime.step() {
            Ok(true) => {}
            Ok(false) => break,
            Err(error) => {
                report(&source, &tokens, &error);
                exit(1);
            }
        }
    }
}

fn report(source: &str, tokens: &[Token], error: &Error) {
    eprintln!("{}", Style::new().bold().paint(format!("?{}", error)));
    if let Some(token) = tokens.get(error.token()) {
        eprintln!("{}", annotate(source, &token.column));
    }
}
