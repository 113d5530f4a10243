// ── Value ─────────────────────────────────────────────────────────────────

/// A literal value in a property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Quoted string: `"Heart_Generated_Mesh"`
    Str(String),
    /// Floating-point literal: `0.03` or `10`
    Number(f32),
    /// Color literal: `#rrggbb` or `#rrggbbaa`, straight-alpha bytes
    Color([u8; 4]),
    /// Unquoted identifier: mode names, flags
    Ident(String),
}

impl Value {
    /// Returns the text of a `Str` or `Ident`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) | Value::Ident(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

// ── Prop ──────────────────────────────────────────────────────────────────

/// A `key: value value ...` property inside a block.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub key: String,
    /// One or more values, in source order.
    pub values: Vec<Value>,
    /// 1-based line of the key.
    pub line: usize,
}

impl Prop {
    /// The single value of a scalar property, or `None` when the list is not exactly one long.
    pub fn single(&self) -> Option<&Value> {
        match self.values.as_slice() {
            [v] => Some(v),
            _ => None,
        }
    }
}

// ── Node ──────────────────────────────────────────────────────────────────

/// A declaration in a route file.
///
/// ```text
/// Route "heart" {
///     modes: sympathetic parasympathetic
///     nodes: "Hypothalamus" "Spinal_dura" "Heart"
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Declaration kind: `"Route"`, `"Mode"`, `"Settings"`.
    pub kind: String,
    /// Optional name following the kind, quoted or bare.
    pub name: Option<String>,
    pub props: Vec<Prop>,
    pub children: Vec<Node>,
    /// 1-based line of the kind keyword.
    pub line: usize,
}

impl Node {
    /// Look up a property by key.
    pub fn prop(&self, key: &str) -> Option<&Prop> {
        self.props.iter().find(|p| p.key == key)
    }

    /// Get a scalar property as `f32` if it is a `Number`.
    pub fn prop_f32(&self, key: &str) -> Option<f32> {
        match self.prop(key)?.single()? {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Get a scalar property as a color if it is a `Color`.
    pub fn prop_color(&self, key: &str) -> Option<[u8; 4]> {
        match self.prop(key)?.single()? {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }
}

// ── RouteDocument ─────────────────────────────────────────────────────────

/// The top-level parse result for a `.routes` source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteDocument {
    pub nodes: Vec<Node>,
}

impl RouteDocument {
    /// Iterates top-level declarations of one kind.
    pub fn nodes_of<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |n| n.kind == kind)
    }
}
