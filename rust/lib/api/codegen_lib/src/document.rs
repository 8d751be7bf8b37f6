//! Typed document tree for a generated object type.
//!
//! The renderer builds an [`ObjectTypeDoc`] from the schema; emit styles
//! serialise it. Every name that lands inside a string literal goes through
//! [`js_string`], so model and field names cannot break out of the output.

use indexmap::IndexMap;

/// One `objectType({...})` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectTypeDoc {
    pub name: String,
    pub fields: Vec<FieldDoc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDoc {
    pub name: String,
    pub builder: FieldBuilder,
    pub options: FieldOptions,
}

/// Which `t.*` method declares the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldBuilder {
    /// Built-in scalar builder, e.g. `t.int`, `t.string`.
    Scalar(String),
    /// `t.field`, used for relations, enums and `DateTime`.
    Generic,
}

/// Options object passed as the builder's second argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOptions {
    pub nullable: bool,
    /// Nullability of list members; `Some` only for list fields.
    pub list: Option<Vec<bool>>,
    /// Explicit type reference.
    pub type_name: Option<String>,
    /// Argument name to input type name, in declaration order.
    pub args: Option<IndexMap<String, String>>,
    pub resolve: Option<Resolver>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolver {
    /// `resolve(parent) { return parent[field] }`
    ParentProperty(String),
}

impl ObjectTypeDoc {
    /// Render the `objectType({...})` call. Imports and the binding around
    /// it belong to the emit style.
    pub fn render_call(&self) -> String {
        let mut out = String::new();
        out.push_str("objectType({\n");
        out.push_str(&format!("  name: {},\n", js_string(&self.name)));
        out.push_str("  definition(t) {\n");
        for field in &self.fields {
            out.push_str("    ");
            out.push_str(&field.render());
            out.push('\n');
        }
        out.push_str("  },\n");
        out.push_str("})\n");
        out
    }
}

impl FieldDoc {
    pub fn render(&self) -> String {
        let method = match &self.builder {
            FieldBuilder::Scalar(scalar) => scalar.as_str(),
            FieldBuilder::Generic => "field",
        };
        format!(
            "t.{}({}, {})",
            method,
            js_string(&self.name),
            self.options.render()
        )
    }
}

impl FieldOptions {
    /// Render as a JS object literal. Keys come out in a fixed order:
    /// `nullable`, `list`, `type`, `args`, `resolve`.
    pub fn render(&self) -> String {
        let mut entries = vec![format!("nullable: {}", self.nullable)];

        if let Some(list) = &self.list {
            let members: Vec<String> = list.iter().map(bool::to_string).collect();
            entries.push(format!("list: [{}]", members.join(", ")));
        }
        if let Some(type_name) = &self.type_name {
            entries.push(format!("type: {}", js_string(type_name)));
        }
        if let Some(args) = &self.args {
            let pairs: Vec<String> = args
                .iter()
                .map(|(name, ty)| format!("{}: {}", js_string(name), js_string(ty)))
                .collect();
            entries.push(format!("args: {{ {} }}", pairs.join(", ")));
        }
        if let Some(resolver) = &self.resolve {
            entries.push(resolver.render());
        }

        format!("{{ {} }}", entries.join(", "))
    }
}

impl Resolver {
    pub fn render(&self) -> String {
        match self {
            Resolver::ParentProperty(field) => format!(
                "resolve(parent: any) {{ return parent[{}] }}",
                js_string(field)
            ),
        }
    }
}

/// Quote `s` as a JS string literal.
pub fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

/// ASCII JS identifier: `[A-Za-z_$][A-Za-z0-9_$]*`.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
