//! Data model for extracted function declarations — renderer-agnostic.

/// One named function from the library specification, with all its overloads.
#[derive(Debug)]
pub struct Declaration {
    /// Dot-separated name exactly as declared, e.g. `model.linear.predict`.
    /// This is what the generated `FunctionCall` quotes at runtime.
    pub qualified_name: String,
    /// Identifier-safe object name for the final path segment (remapped for
    /// operator-like names, e.g. `+` becomes `plus`).
    pub short_name: String,
    /// Dot-split segments; undotted names gain the default namespace prefix,
    /// so the path always has at least two segments.
    pub namespace_path: Vec<String>,
    pub signatures: Vec<Signature>,
}

/// One parameter-list overload of a declaration.
#[derive(Debug)]
pub struct Signature {
    pub params: Vec<Param>,
}

#[derive(Debug)]
pub struct Param {
    pub name: String,
    pub kind: ParamKind,
}

/// Inferred shape of a parameter's accepted types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamKind {
    /// A function-valued type appears anywhere in the parameter's type tree.
    Function,
    /// More than one accepted concrete type.
    Union,
    /// Exactly one concrete type; carries its tag name.
    Concrete(String),
}

impl ParamKind {
    /// Key used against the configured type table.
    pub fn key(&self) -> &str {
        match self {
            ParamKind::Function => "function",
            ParamKind::Union => "union",
            ParamKind::Concrete(name) => name,
        }
    }
}

/// Split a qualified name into its namespace path. A bare name is placed
/// under the default namespace so every declaration nests at least one level.
pub fn namespace_path(qualified: &str, default_namespace: &str) -> Vec<String> {
    if qualified.contains('.') {
        qualified.split('.').map(str::to_string).collect()
    } else {
        vec![default_namespace.to_string(), qualified.to_string()]
    }
}
