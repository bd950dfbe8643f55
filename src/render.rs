//! Scala DSL emission — declaration blocks, namespace containers, and the
//! top-level `FunctionLibrary` document.
//!
//! Rendering is a structural recursion over the namespace tree: leaves are
//! emitted as-is, branches wrap their children (in insertion order) in an
//! `object` named after the branch key, and the root wraps everything in the
//! trait plus fixed boilerplate.

use crate::config::GenConfig;
use crate::model::{Declaration, Signature};
use crate::tree::Node;
use anyhow::{Context, Result};

/// Render the full generated document from the flat declaration list.
pub fn render_library(decls: &[Declaration], cfg: &GenConfig) -> Result<String> {
    let mut root = Node::branch();
    for decl in decls {
        root.insert(&decl.namespace_path, declaration_block(decl, cfg))
            .with_context(|| format!("placing declaration '{}'", decl.qualified_name))?;
    }
    Ok(render_document(&root, cfg))
}

/// One overload as a `def apply` stub. The original qualified name is quoted
/// verbatim inside the `FunctionCall`; only the object name is remapped.
fn signature_line(qualified_name: &str, sig: &Signature, cfg: &GenConfig) -> String {
    let decl_params: Vec<String> = sig
        .params
        .iter()
        .map(|p| format!("{}: {}", p.name, cfg.scala_type(p.kind.key())))
        .collect();
    let mut line = format!(
        "def apply({}) = new FunctionCall(\"{}\"",
        decl_params.join(", "),
        qualified_name
    );
    for p in &sig.params {
        line.push_str(", ");
        line.push_str(&p.name);
    }
    line.push(')');
    line
}

/// The leaf block for one declaration: an `object` grouping its unique
/// overload lines.
///
/// The spec redeclares many functions once per concrete type, and the apply
/// template erases most type distinctions, so overloads frequently render to
/// identical text. Duplicates collapse to the first occurrence; survivors
/// keep input order so regeneration is stable.
fn declaration_block(decl: &Declaration, cfg: &GenConfig) -> String {
    let mut lines: Vec<String> = Vec::new();
    for sig in &decl.signatures {
        let line = signature_line(&decl.qualified_name, sig, cfg);
        if !lines.contains(&line) {
            lines.push(line);
        }
    }

    let pad = " ".repeat(cfg.indent);
    let mut block = format!("object {} {{\n", decl.short_name);
    for line in &lines {
        block.push_str(&pad);
        block.push_str(line);
        block.push('\n');
    }
    block.push('}');
    block
}

fn render_node(key: &str, node: &Node, cfg: &GenConfig) -> String {
    match node {
        Node::Leaf(block) => block.clone(),
        Node::Branch(children) => {
            let blocks: Vec<String> = children
                .iter()
                .map(|(k, child)| render_node(k, child, cfg))
                .collect();
            let pad = " ".repeat(cfg.indent);
            let mut out = format!("object {} {{\n", key);
            out.push_str(&indent_block(&blocks.join("\n\n"), &pad));
            out.push_str("\n}");
            out
        }
    }
}

fn render_document(root: &Node, cfg: &GenConfig) -> String {
    let blocks: Vec<String> = match root {
        Node::Branch(children) => children
            .iter()
            .map(|(k, child)| render_node(k, child, cfg))
            .collect(),
        Node::Leaf(block) => vec![block.clone()],
    };

    let mut out = String::new();
    for line in &cfg.banner {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("package ");
    out.push_str(&cfg.package);
    out.push_str("\n\n");
    for import in &cfg.imports {
        out.push_str("import ");
        out.push_str(import);
        out.push('\n');
    }
    out.push('\n');
    out.push_str("trait ");
    out.push_str(&cfg.trait_name);
    out.push_str(" {\n");
    if !blocks.is_empty() {
        let pad = " ".repeat(cfg.indent);
        out.push_str(&indent_block(&blocks.join("\n\n"), &pad));
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

/// Prefix every non-blank line of a block with `pad`.
fn indent_block(block: &str, pad: &str) -> String {
    let lines: Vec<String> = block
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect();
    lines.join("\n")
}
