//! # Tiny BASIC
//!
//! An interpreter for a Tiny BASIC dialect: line numbered programs,
//! twenty six integer variables, GOTO and GOSUB control flow, PRINT
//! and INPUT.
//!
//! The `lang` module scans source text into tagged tokens and parses
//! them into a flat syntax tree. The `mach` module walks that tree
//! with a `Runtime` wired to any input and output streams.
//!
//! ```
//! use tinybasic::lang::{parse, scan};
//! use tinybasic::mach::Runtime;
//!
//! let source = "10 PRINT \"HELLO\"\n20 END\n";
//! let tokens = scan(source);
//! let ast = parse(&tokens).unwrap();
//! let mut output: Vec<u8> = Vec::new();
//! let mut runtime = Runtime::new(source, &tokens, &ast, &b""[..], &mut output);
//! runtime.run().unwrap();
//! drop(runtime);
//! assert_eq!(String::from_utf8(output).unwrap(), "HELLO\n");
//! ```

pub mod lang;
pub mod mach;
