//! Render an unevaluated Lisp tree as Graphviz.
//!
//! Inspired by [@thingskatedid][kate] and [Ben Weintraub][ben].
//!
//! [kate]: https://twitter.com/thingskatedid/status/1386077306381242371?ref_src=twsrc%5Etfw
//! [ben]: https://www.benweintraub.com/2022/11/12/graphviz-in-the-terminal/
//!
//! Usage:
//!
//! ```ignore
//! <input.lisp lisp_to_graphviz | dot -T png >output.png
//! <input.lisp lisp_to_graphviz --svg >output.svg
//! ```
//!
//! Only the first form of the input is rendered.

use std::io::{stdout, Read, Write};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Render the first Lisp form on stdin as a Graphviz graph")]
struct Args {
    /// Emit SVG (rendered by the `dot` program) instead of DOT source.
    #[arg(long)]
    svg: bool,
}

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let form = mal_reader::read_str(&input)?;

    if args.svg {
        let rendered = mal_reader::render_svg(&form)?;
        stdout().write_all(rendered.as_bytes())
    } else {
        stdout().write_all(&mal_reader::render_graphviz(&form))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args() {
        Args::command().debug_assert();
        assert!(!Args::try_parse_from(["lisp_to_graphviz"]).unwrap().svg);
        assert!(Args::try_parse_from(["lisp_to_graphviz", "--svg"]).unwrap().svg);
        assert!(Args::try_parse_from(["lisp_to_graphviz", "svg"]).is_err());
    }
}
