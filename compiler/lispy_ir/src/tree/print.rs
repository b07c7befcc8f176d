//! Indented tree rendering.
//!
//! One node per line, two spaces of indent per level:
//!
//! ```text
//! lispy @ 0..9
//!   operator @ 0..1 '+'
//!   number @ 2..3 '1'
//!   expression @ 4..9
//!     char @ 4..5 '('
//!     ...
//! ```
//!
//! Uses an explicit work stack so arbitrarily deep trees print without
//! recursion.

use std::fmt;

use super::ParseNode;

impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(&ParseNode, usize)> = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            for _ in 0..depth {
                f.write_str("  ")?;
            }
            write!(f, "{} @ {}", node.rule.tag(), node.span)?;
            if !node.contents.is_empty() {
                write!(f, " '{}'", node.contents)?;
            }
            f.write_str("\n")?;
            // Reverse so the first child is popped first.
            for child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        Ok(())
    }
}
