//! Namespace tree — groups flat declarations by shared path prefixes.
//!
//! A node is either a fully rendered declaration block or an ordered list of
//! named children. Children keep first-seen insertion order, which is what
//! makes regeneration byte-stable for identical input.

use anyhow::{bail, Result};

#[derive(Debug)]
pub enum Node {
    /// Rendered text for one declaration, ready for inclusion in its parent.
    Leaf(String),
    /// Named children in first-seen insertion order.
    Branch(Vec<(String, Node)>),
}

impl Node {
    pub fn branch() -> Node {
        Node::Branch(Vec::new())
    }

    /// Insert a rendered declaration block at `path`, creating intermediate
    /// branches on demand. The final segment becomes the leaf's key.
    ///
    /// Two declarations cannot share a path, and a namespace segment cannot
    /// double as a function name; either case is an error in the upstream
    /// spec and aborts the run.
    pub fn insert(&mut self, path: &[String], block: String) -> Result<()> {
        let Node::Branch(children) = self else {
            bail!("namespace collides with a function of the same name");
        };
        match path {
            [] => bail!("empty namespace path"),
            [last] => {
                if children.iter().any(|(key, _)| key == last) {
                    bail!("duplicate declaration '{}'", last);
                }
                children.push((last.clone(), Node::Leaf(block)));
                Ok(())
            }
            [head, rest @ ..] => {
                let pos = match children.iter().position(|(key, _)| key == head) {
                    Some(pos) => pos,
                    None => {
                        children.push((head.clone(), Node::branch()));
                        children.len() - 1
                    }
                };
                children[pos].1.insert(rest, block)
            }
        }
    }
}
