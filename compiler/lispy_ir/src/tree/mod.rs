//! Owned parse tree.
//!
//! The parser produces one [`ParseNode`] per input line. Every node records
//! which grammar [`Rule`] it satisfied, the literal text of leaves, and its
//! children in source order. Delimiter leaves (`(` and `)`) are kept so the
//! printed tree mirrors the input; evaluation skips them via
//! [`ParseNode::items`].

mod print;


use std::fmt;

use crate::Span;

/// Which grammar the parser applies.
///
/// `Arithmetic` is the tutorial grammar: the top level must be an operator
/// followed by one or more expressions, and nested applications need
/// parentheses. `SExpression` reads generic s-expressions whose items are
/// numbers, symbols, or nested s-expressions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Dialect {
    #[default]
    Arithmetic,
    SExpression,
}

impl Dialect {
    /// Name accepted by `--dialect=`.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Arithmetic => "arithmetic",
            Dialect::SExpression => "sexpr",
        }
    }

    /// Parse a dialect name as written on the command line.
    pub fn from_name(name: &str) -> Option<Dialect> {
        match name {
            "arithmetic" => Some(Dialect::Arithmetic),
            "sexpr" | "s-expression" => Some(Dialect::SExpression),
            _ => None,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Grammar rule a node satisfied.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Rule {
    /// Start rule; the root of every tree.
    Lispy,
    /// Parenthesized operator application (arithmetic dialect).
    Expression,
    /// Parenthesized list of expressions (s-expression dialect).
    SExpr,
    /// Integer literal leaf.
    Number,
    /// One of `+ - * /` in operator position (arithmetic dialect).
    Operator,
    /// Operator or identifier leaf (s-expression dialect).
    Symbol,
    /// `(` or `)` leaf.
    Delimiter,
}

impl Rule {
    /// Lowercase tag used when printing trees.
    pub fn tag(self) -> &'static str {
        match self {
            Rule::Lispy => "lispy",
            Rule::Expression => "expression",
            Rule::SExpr => "sexpr",
            Rule::Number => "number",
            Rule::Operator => "operator",
            Rule::Symbol => "symbol",
            Rule::Delimiter => "char",
        }
    }

    /// Rules that can name the operator of an application.
    pub fn is_operator_like(self) -> bool {
        matches!(self, Rule::Operator | Rule::Symbol)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A node in the parse tree.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseNode {
    pub rule: Rule,
    /// Literal text for leaves; empty for interior nodes.
    pub contents: String,
    pub span: Span,
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    /// Create a leaf node.
    pub fn leaf(rule: Rule, contents: impl Into<String>, span: Span) -> Self {
        ParseNode {
            rule,
            contents: contents.into(),
            span,
            children: Vec::new(),
        }
    }

    /// Create an interior node.
    pub fn branch(rule: Rule, children: Vec<ParseNode>, span: Span) -> Self {
        ParseNode {
            rule,
            contents: String::new(),
            span,
            children,
        }
    }

    /// Children that carry meaning, i.e. everything except delimiters.
    pub fn items(&self) -> impl Iterator<Item = &ParseNode> {
        self.children.iter().filter(|c| c.rule != Rule::Delimiter)
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}

impl Drop for ParseNode {
    // Unlink children iteratively so deep trees do not recurse on drop.
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}
