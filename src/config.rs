//! Generator configuration — every table and constant the pipeline consults.
//!
//! The upstream tool kept these as module-level globals; here they travel as
//! one owned value so the extractor and renderer stay free of process-wide
//! state and tests can substitute their own tables.

/// Raw XML listing of every built-in PFA library function.
pub const DEFAULT_SPEC_URL: &str =
    "https://raw.githubusercontent.com/datamininggroup/pfa/master/libfcns.xml";

/// Configuration for one generation run.
pub struct GenConfig {
    /// Namespace segment prepended to undotted function names.
    pub default_namespace: String,
    /// Rendered type for any parameter kind absent from [`type_map`](Self::type_map).
    pub fallback_type: String,
    /// Indent width in spaces. Cosmetic only.
    pub indent: usize,
    /// Operator-like function names mapped to identifier-safe object names.
    pub symbol_map: Vec<(String, String)>,
    /// Parameter kind keys mapped to rendered Scala type names.
    pub type_map: Vec<(String, String)>,
    /// Comment lines emitted at the very top of the generated file.
    pub banner: Vec<String>,
    /// Scala package of the generated file.
    pub package: String,
    /// Imports the generated code depends on.
    pub imports: Vec<String>,
    /// Name of the top-level trait wrapping all namespace containers.
    pub trait_name: String,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            default_namespace: "core".to_string(),
            fallback_type: "Any".to_string(),
            indent: 4,
            symbol_map: owned_pairs(&[
                ("+", "plus"),
                ("-", "minus"),
                ("*", "mult"),
                ("/", "div"),
                ("//", "divfloor"),
                ("u-", "addinv"),
                ("%", "mod"),
                ("%%", "modmod"),
                ("&&", "and"),
                ("^^", "xor"),
                ("&&&", "nullableAnd"),
                ("|||", "nullableOr"),
                ("!!!", "nullableNot"),
                ("==", "eq"),
                ("<", "lt"),
                ("<=", "lte"),
                (">", "gt"),
                (">=", "gte"),
                ("!=", "net"),
                ("**", "pow"),
                ("!", "not"),
                ("toString", "toStringPFA"),
            ]),
            type_map: owned_pairs(&[("function", "FunctionRef")]),
            banner: vec![
                "// DO NOT EDIT BY HAND, GENERATED BY pfagen".to_string(),
                "// MODIFIED tag marks blocks edited by hand, check for it before replacing"
                    .to_string(),
                "// Format with a Scala formatter before committing".to_string(),
            ],
            package: "com.ibm.aardpfark.pfa.functions".to_string(),
            imports: vec![
                "com.ibm.aardpfark.pfa.expression._".to_string(),
                "com.ibm.aardpfark.spark.ml.linear.LinearModelData".to_string(),
            ],
            trait_name: "FunctionLibrary".to_string(),
        }
    }
}

impl GenConfig {
    /// Object name for a function's final path segment. Operator-like names
    /// are remapped; everything else passes through unchanged.
    pub fn object_name<'a>(&'a self, name: &'a str) -> &'a str {
        lookup(&self.symbol_map, name).unwrap_or(name)
    }

    /// Rendered Scala type for a parameter kind key.
    pub fn scala_type<'a>(&'a self, kind: &str) -> &'a str {
        lookup(&self.type_map, kind).unwrap_or(&self.fallback_type)
    }
}

// The tables hold a couple of dozen entries and are consulted once per
// declaration; a linear scan beats hauling in a map type.
fn lookup<'a>(table: &'a [(String, String)], key: &str) -> Option<&'a str> {
    table
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn owned_pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
