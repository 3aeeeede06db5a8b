/*!
# Machine Module

This module executes a parsed program by walking the syntax tree. All
run state (the program counter, variable memory, the GOSUB stack, and
the RND generator) belongs to one `Runtime`.

*/

mod function;
mod operation;
mod runtime;
mod stack;
mod var;

pub use function::Function;
pub use operation::Operation;
pub use runtime::Runtime;
pub use stack::Stack;
pub use var::Var;

/// Most deeply nested GOSUBs a program may hold at once.
pub const GOSUB_LIMIT: usize = 16;

/// Longest accepted INPUT response in bytes.
pub const INPUT_LIMIT: usize = 128;
