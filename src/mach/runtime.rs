use super::{Function, Operation, Stack, Var, INPUT_LIMIT};
use crate::lang::ast::{Ast, Node};
use crate::lang::token::{Func, Operator, Tag, Token};
use crate::lang::{Error, ErrorKind, NodeId, TokenId};
use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::io::{BufRead, Read, Write};

type Result<T> = std::result::Result<T, Error>;

/// Walks a parsed program one line at a time.
///
/// The runtime borrows the source, tokens, and tree it was built from
/// and owns everything that changes during a run: the program counter,
/// the variables, the GOSUB stack, and the RND generator. Console
/// traffic goes through the injected reader and writer, so tests can
/// run programs against byte buffers.
pub struct Runtime<'a, R, W> {
    source: &'a str,
    tokens: &'a [Token],
    ast: &'a Ast,
    input: R,
    output: W,
    line_map: HashMap<i16, usize>,
    pc: usize,
    var: Var,
    stack: Stack,
    rng: StdRng,
}

impl<'a, R: BufRead, W: Write> Runtime<'a, R, W> {
    pub fn new(
        source: &'a str,
        tokens: &'a [Token],
        ast: &'a Ast,
        input: R,
        output: W,
    ) -> Runtime<'a, R, W> {
        let mut runtime = Runtime {
            source,
            tokens,
            ast,
            input,
            output,
            line_map: HashMap::new(),
            pc: 0,
            var: Var::new(),
            stack: Stack::new(),
            rng: StdRng::seed_from_u64(Local::now().timestamp_millis() as u64),
        };
        for (position, &line) in runtime.ast.lines().iter().enumerate() {
            if let Node::MarkedLine(number, _) = runtime.ast.node(line) {
                let number = runtime.literal(*number);
                runtime.line_map.insert(number, position);
            }
        }
        runtime
    }

    /// Reseed RND for a reproducible run.
    pub fn randomize(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Execute the line at the program counter. Returns false once the
    /// counter moves past the last line.
    pub fn step(&mut self) -> Result<bool> {
        let line = match self.ast.lines().get(self.pc) {
            Some(&line) => line,
            None => return Ok(false),
        };
        self.pc += 1;
        let statement = match self.ast.node(line) {
            Node::NakedLine(statement) => *statement,
            Node::MarkedLine(_, statement) => *statement,
            _ => {
                debug_assert!(false, "program list holds a non line");
                return Ok(true);
            }
        };
        self.eval(statement)?;
        Ok(true)
    }

    /// Run until the program falls off the end or an error stops it.
    pub fn run(&mut self) -> Result<()> {
        while self.step()? {}
        Ok(())
    }

    fn literal(&self, token: TokenId) -> i16 {
        let column = match self.tokens.get(token) {
            Some(token) => token.column.clone(),
            None => {
                debug_assert!(false, "token id out of range");
                return 0;
            }
        };
        match self.source.get(column).map(|text| text.parse::<i16>()) {
            Some(Ok(number)) => number,
            _ => {
                debug_assert!(false, "number token does not scan");
                0
            }
        }
    }

    fn letter(&self, token: TokenId) -> u8 {
        let column = match self.tokens.get(token) {
            Some(token) => token.column.clone(),
            None => {
                debug_assert!(false, "token id out of range");
                return b'A';
            }
        };
        match self.source.as_bytes().get(column.start) {
            Some(&letter) => letter,
            None => {
                debug_assert!(false, "variable token has no text");
                b'A'
            }
        }
    }

    fn text(&self, token: TokenId) -> &'a str {
        let column = match self.tokens.get(token) {
            Some(token) => token.column.clone(),
            None => {
                debug_assert!(false, "token id out of range");
                return "";
            }
        };
        match self
            .source
            .get(column.start + 1..column.end.saturating_sub(1))
        {
            Some(text) => text,
            None => {
                debug_assert!(false, "string token has no body");
                ""
            }
        }
    }

    fn write(&mut self, bytes: &[u8], token: TokenId) -> Result<()> {
        self.output
            .write_all(bytes)
            .map_err(|cause| Error::new(ErrorKind::Io(cause), token))
    }

    fn flush(&mut self, token: TokenId) -> Result<()> {
        self.output
            .flush()
            .map_err(|cause| Error::new(ErrorKind::Io(cause), token))
    }

    fn resolve(&self, number: i16, token: TokenId) -> Result<usize> {
        match self.line_map.get(&number) {
            Some(&position) => Ok(position),
            None => Err(Error::new(ErrorKind::UndefinedLine(number), token)),
        }
    }

    fn value(&mut self, node: NodeId) -> Result<i16> {
        match self.eval(node)? {
            Some(value) => Ok(value),
            None => {
                debug_assert!(false, "statement in expression position");
                Ok(0)
            }
        }
    }

    fn read_number(&mut self, token: TokenId) -> Result<i16> {
        loop {
            self.write(b"? ", token)?;
            self.flush(token)?;
            let mut buf = Vec::new();
            let count = (&mut self.input)
                .take(INPUT_LIMIT as u64)
                .read_until(b'\n', &mut buf)
                .map_err(|cause| Error::new(ErrorKind::Io(cause), token))?;
            if count == 0 {
                let cause = std::io::Error::from(std::io::ErrorKind::UnexpectedEof);
                return Err(Error::new(ErrorKind::Io(cause), token));
            }
            if let Ok(value) = String::from_utf8_lossy(&buf).trim().parse::<i16>() {
                return Ok(value);
            }
            self.write(b"?REDO\n", token)?;
        }
    }

    fn eval(&mut self, node: NodeId) -> Result<Option<i16>> {
        match self.ast.node(node) {
            Node::Print(token, range) => {
                let token = *token;
                for (index, &item) in self.ast.extra(range).iter().enumerate() {
                    let text = match self.ast.node(item) {
                        Node::String(token) => self.text(*token).to_string(),
                        _ => self.value(item)?.to_string(),
                    };
                    if index > 0 {
                        self.write(b" ", token)?;
                    }
                    self.write(text.as_bytes(), token)?;
                }
                self.write(b"\n", token)?;
                self.flush(token)?;
                Ok(None)
            }
            Node::Input(token, range) => {
                let token = *token;
                for &item in self.ast.extra(range).iter() {
                    let letter = match self.ast.node(item) {
                        Node::Variable(token) => self.letter(*token),
                        _ => {
                            debug_assert!(false, "input list holds a non variable");
                            b'A'
                        }
                    };
                    let value = self.read_number(token)?;
                    self.var.store(letter, value);
                }
                Ok(None)
            }
            Node::Let(var, expression) => {
                let letter = self.letter(*var);
                let value = self.value(*expression)?;
                self.var.store(letter, value);
                Ok(None)
            }
            Node::If(_, predicate, statement) => {
                let statement = *statement;
                if self.value(*predicate)? != 0 {
                    self.eval(statement)?;
                }
                Ok(None)
            }
            Node::Goto(token, target) => {
                let token = *token;
                let number = self.value(*target)?;
                self.pc = self.resolve(number, token)?;
                Ok(None)
            }
            Node::Gosub(token, target) => {
                let token = *token;
                let number = self.value(*target)?;
                let position = self.resolve(number, token)?;
                self.stack.push(self.pc, token)?;
                self.pc = position;
                Ok(None)
            }
            Node::Return(token) => match self.stack.pop() {
                Some(position) => {
                    self.pc = position;
                    Ok(None)
                }
                None => Err(Error::new(ErrorKind::ReturnWithoutGosub, *token)),
            },
            Node::End(_) => {
                self.pc = usize::max_value();
                Ok(None)
            }
            Node::Clear(token) | Node::List(token) | Node::Run(token) => {
                Err(Error::new(ErrorKind::NotImplemented, *token))
            }
            Node::Expression(range) => {
                let mut acc = 0;
                for &term in self.ast.extra(range).iter() {
                    let value = self.value(term)?;
                    acc = match self.ast.node(term) {
                        Node::TermPlus(token, _) => Operation::add(acc, value, *token)?,
                        Node::TermMinus(token, _) => Operation::subtract(acc, value, *token)?,
                        _ => {
                            debug_assert!(false, "expression list holds a non term");
                            acc
                        }
                    };
                }
                Ok(Some(acc))
            }
            Node::TermPlus(_, range) | Node::TermMinus(_, range) => {
                let mut acc = 1;
                for &factor in self.ast.extra(range).iter() {
                    let value = self.value(factor)?;
                    acc = match self.ast.node(factor) {
                        Node::FactorMul(token, _) => Operation::multiply(acc, value, *token)?,
                        Node::FactorDiv(token, _) => Operation::divide(acc, value, *token)?,
                        _ => {
                            debug_assert!(false, "term list holds a non factor");
                            acc
                        }
                    };
                }
                Ok(Some(acc))
            }
            Node::FactorMul(_, operand) | Node::FactorDiv(_, operand) => self.eval(*operand),
            Node::Predicate(token, lhs, rhs) => {
                let token = *token;
                let rhs = *rhs;
                let left = self.value(*lhs)?;
                let right = self.value(rhs)?;
                let operator = match self.tokens.get(token).map(|token| token.tag) {
                    Some(Tag::Operator(operator)) => operator,
                    _ => {
                        debug_assert!(false, "predicate token is not an operator");
                        Operator::Equal
                    }
                };
                Ok(Some(Operation::compare(operator, left, right)))
            }
            Node::Call(token, range) => {
                let token = *token;
                let mut args = Vec::new();
                for &arg in self.ast.extra(range).iter() {
                    args.push(self.value(arg)?);
                }
                let func = match self.tokens.get(token).map(|token| token.tag) {
                    Some(Tag::Func(func)) => func,
                    _ => {
                        debug_assert!(false, "call token is not a function");
                        Func::Abs
                    }
                };
                Ok(Some(Function::eval(func, &args, &mut self.rng, token)?))
            }
            Node::Variable(token) => Ok(Some(self.var.fetch(self.letter(*token)))),
            Node::Number(token) => Ok(Some(self.literal(*token))),
            Node::Root(_) | Node::NakedLine(_) | Node::MarkedLine(_, _) | Node::String(_) => {
                debug_assert!(false, "node outside its context");
                Ok(None)
            }
        }
    }
}
