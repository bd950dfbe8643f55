//! Declaration extractor — walks the parsed XML spec into a flat, ordered
//! list of [`Declaration`]s.
//!
//! Fail-fast by design: a structurally malformed declaration aborts the run
//! with the offending declaration and overload identified, rather than
//! letting a bad signature slip into the generated code.

use crate::config::GenConfig;
use crate::model::{self, Declaration, Param, ParamKind, Signature};
use anyhow::{bail, Context, Result};
use roxmltree::{Document, Node};

/// Extract every `<fcn>` declaration from the spec document, in document
/// order.
pub fn extract(doc: &Document, cfg: &GenConfig) -> Result<Vec<Declaration>> {
    let mut decls = Vec::new();
    for fcn in doc
        .root_element()
        .descendants()
        .filter(|n| n.has_tag_name("fcn"))
    {
        let name = fcn
            .attribute("name")
            .context("<fcn> element without a name attribute")?;
        decls.push(extract_declaration(name, fcn, cfg)?);
    }
    Ok(decls)
}

fn extract_declaration(name: &str, fcn: Node, cfg: &GenConfig) -> Result<Declaration> {
    if name.is_empty() || name.split('.').any(str::is_empty) {
        bail!("declaration '{}' has an empty name segment", name);
    }

    let namespace_path = model::namespace_path(name, &cfg.default_namespace);
    let last_segment = name.rsplit('.').next().unwrap_or(name);
    let short_name = cfg.object_name(last_segment).to_string();

    let mut signatures = Vec::new();
    for (idx, sig) in fcn
        .descendants()
        .filter(|n| n.has_tag_name("sig"))
        .enumerate()
    {
        signatures.push(
            extract_signature(sig)
                .with_context(|| format!("declaration '{}' signature #{}", name, idx + 1))?,
        );
    }

    Ok(Declaration {
        qualified_name: name.to_string(),
        short_name,
        namespace_path,
        signatures,
    })
}

fn extract_signature(sig: Node) -> Result<Signature> {
    let mut params = Vec::new();
    // Only direct <par> children belong to this overload; nested type nodes
    // can contain their own parameter-like elements.
    for par in sig
        .children()
        .filter(|n| n.is_element() && n.has_tag_name("par"))
    {
        let name = par
            .attribute("name")
            .context("<par> element without a name attribute")?;
        let kind =
            infer_kind(par).with_context(|| format!("parameter '{}'", name))?;
        params.push(Param {
            name: name.to_string(),
            kind,
        });
    }
    Ok(Signature { params })
}

/// Classify a parameter by the shape of its type children.
///
/// A `<function>` node anywhere below the parameter wins outright, even
/// nested inside a union or array type. Otherwise the count of direct
/// element children decides: one is a concrete type, more is a union.
fn infer_kind(par: Node) -> Result<ParamKind> {
    if par
        .descendants()
        .any(|n| n.is_element() && n.has_tag_name("function"))
    {
        return Ok(ParamKind::Function);
    }

    let mut types = par.children().filter(Node::is_element);
    match (types.next(), types.next()) {
        (None, _) => bail!("has no type children"),
        (Some(only), None) => Ok(ParamKind::Concrete(only.tag_name().name().to_string())),
        (Some(_), Some(_)) => Ok(ParamKind::Union),
    }
}
