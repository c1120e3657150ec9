//! Lisp data types.
//!
//! A [`Value`] is a tree: containers own their children outright.
//! Nothing is shared between trees, and a tree is not modified after the
//! reader hands it over.
//!
//! Limitations:
//! - Only i64 numbers are supported.
//! - Strings keep their delimiting quotes and escapes as written;
//!   there is no unescaping at this layer.
//! - Mapping keys are compared by their canonical rendering; see [`Mapping`].

mod mapping;
pub use mapping::Mapping;

pub type Integer = i64;

/// A Lisp value, as produced by the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    List(Vec<Value>),
    Vector(Vec<Value>),
    Mapping(Mapping),
    Number(Integer),
    /// The full token text, including both quote characters.
    String(String),
    Symbol(String),
}

impl Value {
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(items.into_iter().collect())
    }

    pub fn vector(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Vector(items.into_iter().collect())
    }
}

impl From<Integer> for Value {
    fn from(value: Integer) -> Self {
        Value::Number(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Value::Mapping(value)
    }
}

/// Write the space-separated rendering of the items.
fn write_joined<'a>(
    f: &mut std::fmt::Formatter<'_>,
    items: impl IntoIterator<Item = &'a Value>,
) -> std::fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::List(items) => {
                write!(f, "(")?;
                write_joined(f, items)?;
                write!(f, ")")
            }
            Value::Vector(items) => {
                write!(f, "[")?;
                write_joined(f, items)?;
                write!(f, "]")
            }
            Value::Mapping(m) => {
                write!(f, "{{")?;
                write_joined(f, m.iter().flat_map(|(k, v)| [k, v]))?;
                write!(f, "}}")
            }
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Symbol(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_atoms() {
        assert_eq!(Value::Number(-42).to_string(), "-42");
        assert_eq!(Value::symbol("tree->list").to_string(), "tree->list");
        assert_eq!(
            Value::String(r#""hi \"there\"""#.to_owned()).to_string(),
            r#""hi \"there\"""#
        );
    }

    #[test]
    fn render_nested() {
        let v = Value::list([
            Value::symbol("+"),
            Value::vector([Value::Number(1), Value::Number(2)]),
            Value::list([]),
        ]);
        assert_eq!(v.to_string(), "(+ [1 2] ())");
    }

    #[test]
    fn render_mapping() {
        let mut m = Mapping::new();
        m.insert(Value::symbol("b"), Value::Number(2));
        m.insert(Value::symbol("a"), Value::vector([Value::Number(1)]));
        assert_eq!(Value::Mapping(m).to_string(), "{a [1] b 2}");
        assert_eq!(Value::Mapping(Mapping::new()).to_string(), "{}");
    }
}
