//! Reader for a small Lisp surface syntax (the "mal" dialect).
//!
//! Text goes in, a [`data::Value`] tree (or a [`reader::ReadErr`]) comes out.
//! The evaluator is the identity function; the printer is `Display`.

pub mod reader;

pub mod data;

mod eval;
pub use eval::eval;

pub mod repl;
pub use repl::{rep, repl};

#[cfg(feature = "render")]
mod render;
#[cfg(feature = "render")]
pub use render::{render_graphviz, render_svg, SAVE_GRAPH_VAR};

pub use data::Value;
pub use reader::{read_str, ReadErr, ReadResult};
