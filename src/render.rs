//! Render a value tree as a Graphviz graph.

use std::io::{self, Write};
use std::process::Command;

use dot_writer::{Attributes, DotWriter, Scope};

use crate::data::Value;

/// Escape text for use inside a quoted DOT label.
fn escape_label(s: &str) -> String {
    s.replace('\\', r#"\\"#).replace('"', r#"\""#)
}

/// Add the node for `value` (and its children) to the graph; returns the node name.
fn add_value(graph: &mut Scope<'_, '_>, value: &Value, count: &mut usize) -> String {
    let id = format!("v{count}");
    *count += 1;

    let (shape, label) = match value {
        Value::List(_) => ("oval", "()".to_owned()),
        Value::Vector(_) => ("box", "[]".to_owned()),
        Value::Mapping(_) => ("hexagon", "{}".to_owned()),
        Value::Number(n) => ("rectangle", n.to_string()),
        Value::String(s) => ("note", escape_label(s)),
        Value::Symbol(s) => ("diamond", escape_label(s)),
    };
    {
        let mut node = graph.node_named(&id);
        node.set("shape", shape, false);
        node.set_label(&label);
    }

    match value {
        Value::List(items) | Value::Vector(items) => {
            for item in items {
                let child = add_value(graph, item, count);
                graph.edge(id.as_str(), child.as_str());
            }
        }
        Value::Mapping(m) => {
            for (k, v) in m.iter() {
                let key = add_value(graph, k, count);
                graph
                    .edge(id.as_str(), key.as_str())
                    .attributes()
                    .set_label("key");
                let val = add_value(graph, v, count);
                graph
                    .edge(key.as_str(), val.as_str())
                    .attributes()
                    .set_label("value");
            }
        }
        Value::Number(_) | Value::String(_) | Value::Symbol(_) => (),
    }
    id
}

/// Render the value into Graphviz (DOT) source.
pub fn render_graphviz(value: &Value) -> Vec<u8> {
    let mut outbuf = Vec::new();
    {
        let mut writer = DotWriter::from(&mut outbuf);
        let mut graph = writer.digraph();
        let mut count = 0;
        add_value(&mut graph, value, &mut count);
        tracing::trace!("rendered {count} nodes");
    }
    outbuf
}

/// Environment variable: when set, [`render_svg`] keeps its DOT input file.
pub const SAVE_GRAPH_VAR: &str = "MAL_READER_SAVE_GRAPH";

/// Render the value as SVG, using the `dot` program.
///
/// The DOT source goes through a temporary file. The file is kept (and its path
/// logged) when `dot` fails or when [`SAVE_GRAPH_VAR`] is set.
pub fn render_svg(value: &Value) -> io::Result<String> {
    let mut source = tempfile::Builder::new()
        .prefix("mal-reader-")
        .suffix(".dot")
        .tempfile()?;
    source.write_all(&render_graphviz(value))?;
    source.flush()?;

    let dot = Command::new("dot")
        .arg("-Tsvg")
        .arg(source.path())
        .output()
        .map_err(|e| io::Error::new(e.kind(), format!("failed to run dot: {e}")))?;

    if !dot.status.success() || std::env::var_os(SAVE_GRAPH_VAR).is_some() {
        let (_, path) = source.keep()?;
        tracing::info!("DOT source kept in {}", path.display());
    }

    if !dot.status.success() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("dot failed: {}", String::from_utf8_lossy(&dot.stderr).trim()),
        ));
    }
    String::from_utf8(dot.stdout).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
