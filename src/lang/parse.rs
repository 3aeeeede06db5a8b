use super::ast::{Ast, Node};
use super::token::{Func, Operator, Tag, Token, Word};
use super::{Error, ErrorKind, ExtraRange, NodeId, TokenId};

type Result<T> = std::result::Result<T, Error>;

/// Parse a scanned token stream into a syntax tree. Only token tags
/// are consulted; literal text stays in the source until run time.
/// Parsing stops at the first error and the partial tree is dropped.
pub fn parse(tokens: &[Token]) -> Result<Ast> {
    Parser::parse(tokens)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: TokenId,
    nodes: Vec<Node>,
    extra: Vec<NodeId>,
    scratch: Vec<NodeId>,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Ast> {
        let mut parser = Parser {
            tokens,
            pos: 0,
            nodes: vec![],
            extra: vec![],
            scratch: vec![],
        };
        let root = parser.program()?;
        Ok(Ast::new(parser.nodes, parser.extra, root))
    }

    fn peek(&self) -> Tag {
        match self.tokens.get(self.pos) {
            Some(token) => token.tag,
            None => Tag::Eof,
        }
    }

    fn next(&mut self) -> TokenId {
        let id = self.pos;
        // Never move past the closing Eof so error positions stay
        // inside the token list.
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        id
    }

    fn expect(&mut self, want: Tag) -> Result<TokenId> {
        let got = self.peek();
        if got == want {
            return Ok(self.next());
        }
        Err(Error::new(ErrorKind::ExpectedToken { want, got }, self.pos))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        id
    }

    /// Move everything collected since `mark` out of the scratch list
    /// and into the extra data array as one contiguous range.
    fn flush(&mut self, mark: usize) -> ExtraRange {
        let start = self.extra.len();
        self.extra.extend(self.scratch.drain(mark..));
        start..self.extra.len()
    }

    fn program(&mut self) -> Result<NodeId> {
        let mark = self.scratch.len();
        loop {
            match self.peek() {
                Tag::Eof => break,
                Tag::Eol => {
                    self.next();
                }
                _ => {
                    if let Some(line) = self.line()? {
                        self.scratch.push(line);
                    }
                }
            }
        }
        let range = self.flush(mark);
        Ok(self.push(Node::Root(range)))
    }

    /// One line: an optional number, an optional statement, and a
    /// terminator. A line with no statement is dropped entirely. The
    /// final line may end at Eof instead of Eol.
    fn line(&mut self) -> Result<Option<NodeId>> {
        let number = match self.peek() {
            Tag::Number => Some(self.next()),
            _ => None,
        };
        let statement = match self.peek() {
            Tag::Eol | Tag::Eof => None,
            _ => Some(self.statement()?),
        };
        match self.peek() {
            Tag::Eol => {
                self.next();
            }
            Tag::Eof => {}
            got => {
                return Err(Error::new(
                    ErrorKind::ExpectedToken { want: Tag::Eol, got },
                    self.pos,
                ))
            }
        }
        Ok(statement.map(|statement| match number {
            Some(number) => self.push(Node::MarkedLine(number, statement)),
            None => self.push(Node::NakedLine(statement)),
        }))
    }

    fn statement(&mut self) -> Result<NodeId> {
        match self.peek() {
            Tag::Word(Word::Print) => self.r#print(),
            Tag::Word(Word::If) => self.r#if(),
            Tag::Word(Word::Goto) => self.r#goto(),
            Tag::Word(Word::Input) => self.input(),
            Tag::Word(Word::Let) => self.r#let(),
            Tag::Word(Word::Gosub) => self.gosub(),
            Tag::Word(Word::Return) => self.bare(Node::Return),
            Tag::Word(Word::Clear) => self.bare(Node::Clear),
            Tag::Word(Word::List) => self.bare(Node::List),
            Tag::Word(Word::Run) => self.bare(Node::Run),
            Tag::Word(Word::End) => self.bare(Node::End),
            _ => Err(Error::new(ErrorKind::ExpectedStatement, self.pos)),
        }
    }

    fn bare(&mut self, node: fn(TokenId) -> Node) -> Result<NodeId> {
        let token = self.next();
        Ok(self.push(node(token)))
    }

    fn r#print(&mut self) -> Result<NodeId> {
        let token = self.next();
        let mark = self.scratch.len();
        loop {
            let item = match self.peek() {
                Tag::String => {
                    let token = self.next();
                    self.push(Node::String(token))
                }
                _ => self.expression()?,
            };
            self.scratch.push(item);
            if self.peek() != Tag::Comma {
                break;
            }
            self.next();
        }
        let range = self.flush(mark);
        Ok(self.push(Node::Print(token, range)))
    }

    fn input(&mut self) -> Result<NodeId> {
        let token = self.next();
        let mark = self.scratch.len();
        loop {
            let var = self.expect(Tag::Var)?;
            let var = self.push(Node::Variable(var));
            self.scratch.push(var);
            if self.peek() != Tag::Comma {
                break;
            }
            self.next();
        }
        let range = self.flush(mark);
        Ok(self.push(Node::Input(token, range)))
    }

    fn r#let(&mut self) -> Result<NodeId> {
        self.next();
        let var = self.expect(Tag::Var)?;
        self.expect(Tag::Operator(Operator::Equal))?;
        let expression = self.expression()?;
        Ok(self.push(Node::Let(var, expression)))
    }

    fn r#if(&mut self) -> Result<NodeId> {
        let token = self.next();
        let predicate = self.predicate()?;
        self.expect(Tag::Word(Word::Then))?;
        let statement = self.statement()?;
        Ok(self.push(Node::If(token, predicate, statement)))
    }

    fn r#goto(&mut self) -> Result<NodeId> {
        let token = self.next();
        let target = self.expression()?;
        Ok(self.push(Node::Goto(token, target)))
    }

    fn gosub(&mut self) -> Result<NodeId> {
        let token = self.next();
        let target = self.expression()?;
        Ok(self.push(Node::Gosub(token, target)))
    }

    fn predicate(&mut self) -> Result<NodeId> {
        let lhs = self.expression()?;
        let token = match self.peek() {
            Tag::Operator(operator) if operator.is_relational() => self.next(),
            _ => return Err(Error::new(ErrorKind::ExpectedRelop, self.pos)),
        };
        let rhs = self.expression()?;
        Ok(self.push(Node::Predicate(token, lhs, rhs)))
    }

    /// Signed terms folded left to right. A leading sign belongs to
    /// the first term; an unsigned first term counts as added.
    fn expression(&mut self) -> Result<NodeId> {
        let mark = self.scratch.len();
        let mut term = match self.peek() {
            Tag::Operator(Operator::Plus) => {
                let token = self.next();
                self.term(Node::TermPlus, token)?
            }
            Tag::Operator(Operator::Minus) => {
                let token = self.next();
                self.term(Node::TermMinus, token)?
            }
            _ => self.term(Node::TermPlus, self.pos)?,
        };
        loop {
            self.scratch.push(term);
            term = match self.peek() {
                Tag::Operator(Operator::Plus) => {
                    let token = self.next();
                    self.term(Node::TermPlus, token)?
                }
                Tag::Operator(Operator::Minus) => {
                    let token = self.next();
                    self.term(Node::TermMinus, token)?
                }
                _ => break,
            };
        }
        let range = self.flush(mark);
        Ok(self.push(Node::Expression(range)))
    }

    fn term(&mut self, node: fn(TokenId, ExtraRange) -> Node, token: TokenId) -> Result<NodeId> {
        let mark = self.scratch.len();
        let mut factor = self.factor(Node::FactorMul, self.pos)?;
        loop {
            self.scratch.push(factor);
            factor = match self.peek() {
                Tag::Operator(Operator::Multiply) => {
                    let token = self.next();
                    self.factor(Node::FactorMul, token)?
                }
                Tag::Operator(Operator::Divide) => {
                    let token = self.next();
                    self.factor(Node::FactorDiv, token)?
                }
                _ => break,
            };
        }
        let range = self.flush(mark);
        Ok(self.push(node(token, range)))
    }

    fn factor(&mut self, node: fn(TokenId, NodeId) -> Node, token: TokenId) -> Result<NodeId> {
        let operand = match self.peek() {
            Tag::Var => {
                let token = self.next();
                self.push(Node::Variable(token))
            }
            Tag::Number => {
                let token = self.next();
                self.push(Node::Number(token))
            }
            Tag::LParen => {
                self.next();
                let expression = self.expression()?;
                self.expect(Tag::RParen)?;
                expression
            }
            Tag::Func(func) => self.call(func)?,
            _ => return Err(Error::new(ErrorKind::ExpectedExpression, self.pos)),
        };
        Ok(self.push(node(token, operand)))
    }

    /// Exactly the function's arity, enforced by expecting the comma
    /// or closing parenthesis in the right place.
    fn call(&mut self, func: Func) -> Result<NodeId> {
        let token = self.next();
        let mark = self.scratch.len();
        self.expect(Tag::LParen)?;
        for n in 0..func.arity() {
            if n > 0 {
                self.expect(Tag::Comma)?;
            }
            let argument = self.expression()?;
            self.scratch.push(argument);
        }
        self.expect(Tag::RParen)?;
        let range = self.flush(mark);
        Ok(self.push(Node::Call(token, range)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::scan;

    #[test]
    fn test_empty_program() {
        let ast = parse(&scan("")).unwrap();
        assert!(ast.lines().is_empty());
        let ast = parse(&scan("\n10\n\n")).unwrap();
        assert!(ast.lines().is_empty());
    }

    #[test]
    fn test_idempotent() {
        let tokens = scan("10 LET A = MOD(7, 3)\n20 PRINT A, \"DONE\"\n");
        assert_eq!(parse(&tokens).unwrap(), parse(&tokens).unwrap());
    }

    #[test]
    fn test_line_shapes() {
        let ast = parse(&scan("10 END\nEND\n")).unwrap();
        let lines = ast.lines();
        assert_eq!(lines.len(), 2);
        assert!(matches!(ast.node(lines[0]), Node::MarkedLine(_, _)));
        assert!(matches!(ast.node(lines[1]), Node::NakedLine(_)));
    }

    #[test]
    fn test_error_token() {
        let tokens = scan("10 IF 1 = 1 PRINT \"X\"\n");
        let error = parse(&tokens).unwrap_err();
        assert_eq!(tokens[error.token()].tag, Tag::Word(Word::Print));
    }

    #[test]
    fn test_error_kind() {
        let error = parse(&scan("10 GOTO\n")).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::ExpectedExpression));
        let error = parse(&scan("10 IF 1 THEN END\n")).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::ExpectedRelop));
    }

    #[test]
    fn test_final_line_may_omit_newline() {
        assert!(parse(&scan("10 PRINT 1")).is_ok());
    }

    #[test]
    fn test_call_arity() {
        assert!(parse(&scan("10 LET A = ABS(1)\n")).is_ok());
        assert!(parse(&scan("10 LET A = ABS(1, 2)\n")).is_err());
        assert!(parse(&scan("10 LET A = MOD(1, 2)\n")).is_ok());
        assert!(parse(&scan("10 LET A = MOD(1)\n")).is_err());
    }
}
