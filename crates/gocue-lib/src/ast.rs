//! Parsed Go declarations, as handed over by a front end.
//!
//! The tree mirrors the subset of Go's `go/ast` that type projection looks at:
//! generic declaration groups holding import, type and value specs. Every node
//! deserializes from JSON with a `kind` discriminator, so a front end in any
//! language can produce input for the CLI.

use serde::Deserialize;

use crate::ir::Docs;

/// One source file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Module {
    pub package: String,
    #[serde(default)]
    pub decls: Vec<Decl>,
}

impl Module {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            decls: Vec::new(),
        }
    }

    pub fn with_decl(mut self, decl: Decl) -> Self {
        self.decls.push(decl);
        self
    }
}

/// Top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Decl {
    /// `import`, `type`, `var` or `const`, possibly parenthesized.
    Gen(GenDecl),
    /// Function declarations carry no data shape.
    Func { name: String },
}

/// A declaration group. Group docs apply to every spec without docs of its own.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenDecl {
    #[serde(default)]
    pub docs: Option<Docs>,
    pub specs: Vec<Spec>,
}

impl GenDecl {
    pub fn new(specs: Vec<Spec>) -> Self {
        Self { docs: None, specs }
    }

    pub fn with_docs(mut self, docs: Docs) -> Self {
        self.docs = Some(docs);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Spec {
    Import(ImportSpec),
    Type(TypeSpec),
    Value(ValueSpec),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImportSpec {
    #[serde(default)]
    pub name: Option<String>,
    pub path: String,
}

impl ImportSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            name: None,
            path: path.into(),
        }
    }

    pub fn named(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            path: path.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeSpec {
    pub name: String,
    #[serde(default)]
    pub docs: Option<Docs>,
    pub expr: Expr,
}

impl TypeSpec {
    pub fn new(name: impl Into<String>, expr: Expr) -> Self {
        Self {
            name: name.into(),
            docs: None,
            expr,
        }
    }

    pub fn with_docs(mut self, docs: Docs) -> Self {
        self.docs = Some(docs);
        self
    }
}

/// `var`/`const` spec: names, optional type and initializer expressions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValueSpec {
    pub names: Vec<String>,
    #[serde(default)]
    pub docs: Option<Docs>,
    #[serde(default)]
    pub ty: Option<Expr>,
    #[serde(default)]
    pub values: Vec<ValueExpr>,
}

impl ValueSpec {
    pub fn new(name: impl Into<String>, values: Vec<ValueExpr>) -> Self {
        Self {
            names: vec![name.into()],
            docs: None,
            ty: None,
            values,
        }
    }

    /// First declared name, if any.
    pub fn name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }
}

/// Type expression.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    /// `int`, `MyType`
    Ident { name: String },
    /// `pkg.Type`
    Selector { qualifier: String, name: String },
    /// `*T`
    Pointer { elem: Box<Expr> },
    /// `[]T` when `len` is absent, `[N]T` otherwise
    Array {
        #[serde(default)]
        len: Option<u64>,
        elem: Box<Expr>,
    },
    /// `map[K]V`
    Map { key: Box<Expr>, value: Box<Expr> },
    /// `struct { ... }`
    Struct {
        #[serde(default)]
        fields: Vec<FieldExpr>,
    },
    /// `interface { ... }`; method sets are irrelevant for data shapes
    Interface {
        #[serde(default)]
        methods: Vec<String>,
    },
    /// `func(...) ...`
    Func,
    /// `chan T`
    Chan { elem: Box<Expr> },
    /// `...T`
    Ellipsis { elem: Box<Expr> },
    /// `T[A, B]`
    Generic { base: Box<Expr>, args: Vec<Expr> },
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident { name: name.into() }
    }

    pub fn selector(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Expr::Selector {
            qualifier: qualifier.into(),
            name: name.into(),
        }
    }

    pub fn pointer(elem: Expr) -> Self {
        Expr::Pointer {
            elem: Box::new(elem),
        }
    }

    pub fn slice(elem: Expr) -> Self {
        Expr::Array {
            len: None,
            elem: Box::new(elem),
        }
    }

    pub fn array(len: u64, elem: Expr) -> Self {
        Expr::Array {
            len: Some(len),
            elem: Box::new(elem),
        }
    }

    pub fn map(key: Expr, value: Expr) -> Self {
        Expr::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn structure(fields: Vec<FieldExpr>) -> Self {
        Expr::Struct { fields }
    }

    pub fn any() -> Self {
        Expr::Interface {
            methods: Vec::new(),
        }
    }

    /// Node kind as it appears in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Expr::Ident { .. } => "identifier",
            Expr::Selector { .. } => "selector",
            Expr::Pointer { .. } => "pointer",
            Expr::Array { .. } => "array",
            Expr::Map { .. } => "map",
            Expr::Struct { .. } => "struct",
            Expr::Interface { .. } => "interface",
            Expr::Func => "func",
            Expr::Chan { .. } => "chan",
            Expr::Ellipsis { .. } => "ellipsis",
            Expr::Generic { .. } => "generic instantiation",
        }
    }
}

/// Struct field. No names means an embedded field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldExpr {
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub docs: Option<Docs>,
    pub expr: Expr,
    /// Raw tag literal, with or without the surrounding backticks.
    #[serde(default)]
    pub tag: Option<String>,
}

impl FieldExpr {
    pub fn new(name: impl Into<String>, expr: Expr) -> Self {
        Self {
            names: vec![name.into()],
            docs: None,
            expr,
            tag: None,
        }
    }

    pub fn embedded(expr: Expr) -> Self {
        Self {
            names: Vec::new(),
            docs: None,
            expr,
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_docs(mut self, docs: Docs) -> Self {
        self.docs = Some(docs);
        self
    }
}

/// Initializer expression of a value spec.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueExpr {
    /// Raw literal text, quotes included: `"FOO"`, `42`.
    Literal { value: String },
    Ident { name: String },
    /// `T{ elements }`
    Composite {
        #[serde(default)]
        ty: Option<Expr>,
        #[serde(default)]
        elements: Vec<ValueExpr>,
    },
    /// `key: value` inside a composite literal.
    KeyValue {
        key: Box<ValueExpr>,
        value: Box<ValueExpr>,
    },
}

impl ValueExpr {
    pub fn literal(value: impl Into<String>) -> Self {
        ValueExpr::Literal {
            value: value.into(),
        }
    }

    pub fn key_value(key: ValueExpr, value: ValueExpr) -> Self {
        ValueExpr::KeyValue {
            key: Box::new(key),
            value: Box::new(value),
        }
    }
}
