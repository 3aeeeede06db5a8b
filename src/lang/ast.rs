use super::{ExtraRange, NodeId, TokenId};

/// One arena record. The `TokenId` in each variant names the most
/// relevant token: the keyword, the operator, or the literal itself.
/// A chain head with no written operator points at its first token.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Extra range lists every line in program order.
    Root(ExtraRange),
    NakedLine(NodeId),
    MarkedLine(TokenId, NodeId),
    /// Extra range lists `String` and `Expression` items.
    Print(TokenId, ExtraRange),
    /// Extra range lists `Variable` nodes, assigned in order.
    Input(TokenId, ExtraRange),
    /// Token is the destination variable, not the keyword.
    Let(TokenId, NodeId),
    If(TokenId, NodeId, NodeId),
    Goto(TokenId, NodeId),
    Gosub(TokenId, NodeId),
    Return(TokenId),
    Clear(TokenId),
    List(TokenId),
    Run(TokenId),
    End(TokenId),
    /// Extra range lists signed terms, folded left to right from 0.
    Expression(ExtraRange),
    /// Extra range lists factors, folded left to right from 1.
    TermPlus(TokenId, ExtraRange),
    TermMinus(TokenId, ExtraRange),
    FactorMul(TokenId, NodeId),
    FactorDiv(TokenId, NodeId),
    /// Token is the relational operator between the two expressions.
    Predicate(TokenId, NodeId, NodeId),
    /// Extra range lists the arguments in call order.
    Call(TokenId, ExtraRange),
    Variable(TokenId),
    Number(TokenId),
    String(TokenId),
}

/// ## Syntax tree arena
///
/// Every node is one fixed size enum record in insertion order, and a
/// node never owns another node. Child links are either a `NodeId`
/// stored in the variant or an `ExtraRange` into the shared extra data
/// array for lists whose length the grammar leaves open (lines of the
/// program, PRINT items, INPUT variables, term and factor chains, call
/// arguments).
#[derive(Debug, PartialEq)]
pub struct Ast {
    nodes: Vec<Node>,
    extra: Vec<NodeId>,
    root: NodeId,
}

impl Ast {
    pub(crate) fn new(nodes: Vec<Node>, extra: Vec<NodeId>, root: NodeId) -> Ast {
        Ast { nodes, extra, root }
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn extra(&self, range: &ExtraRange) -> &[NodeId] {
        &self.extra[range.start..range.end]
    }

    /// Every line of the program, in source order.
    pub fn lines(&self) -> &[NodeId] {
        match &self.nodes[self.root] {
            Node::Root(range) => self.extra(range),
            _ => {
                debug_assert!(false, "root id does not name a root node");
                &[]
            }
        }
    }

    fn write_node(
        &self,
        f: &mut std::fmt::Formatter,
        id: NodeId,
        depth: usize,
    ) -> std::fmt::Result {
        let node = &self.nodes[id];
        writeln!(f, "{:indent$}{}: {:?}", "", id, node, indent = depth * 2)?;
        use Node::*;
        match node {
            Root(range) | Print(_, range) | Input(_, range) | Expression(range)
            | TermPlus(_, range) | TermMinus(_, range) | Call(_, range) => {
                for &child in self.extra(range) {
                    self.write_node(f, child, depth + 1)?;
                }
            }
            NakedLine(child)
            | MarkedLine(_, child)
            | Let(_, child)
            | Goto(_, child)
            | Gosub(_, child)
            | FactorMul(_, child)
            | FactorDiv(_, child) => {
                self.write_node(f, *child, depth + 1)?;
            }
            If(_, lhs, rhs) | Predicate(_, lhs, rhs) => {
                self.write_node(f, *lhs, depth + 1)?;
                self.write_node(f, *rhs, depth + 1)?;
            }
            Return(_) | Clear(_) | List(_) | Run(_) | End(_) | Variable(_) | Number(_)
            | String(_) => {}
        }
        Ok(())
    }
}

impl std::fmt::Display for Ast {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.write_node(f, self.root, 0)
    }
}
