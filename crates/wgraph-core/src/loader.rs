//! Plain-text graph files.
//!
//! The format is line-oriented at the top and token-oriented afterwards:
//!
//! ```text
//! <graph name>
//! N
//! x y            (N lines, one per node)
//! start goal
//! E
//! u v w          (E lines, one per undirected edge)
//! ```
//!
//! Everything after the name line is read as whitespace-separated tokens, so
//! line breaks between numbers are not significant. Trailing tokens are
//! ignored.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{GraphError, LoadError};
use crate::geom::Coord;
use crate::graph::{Graph, GraphBuilder, NodeId};

/// File extension (without the dot) of graph files picked up by [`load_dir`].
pub const GRAPH_EXTENSION: &str = "txt";

/// Whitespace tokens tagged with their 1-based line number.
struct Tokens<'a> {
    items: std::vec::IntoIter<(usize, &'a str)>,
}

impl<'a> Tokens<'a> {
    fn new(body: &'a str, first_line: usize) -> Self {
        let items: Vec<(usize, &str)> = body
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |t| (i + first_line, t)))
            .collect();
        Self {
            items: items.into_iter(),
        }
    }

    fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T, LoadError> {
        let (line, tok) = self
            .items
            .next()
            .ok_or(LoadError::UnexpectedEof { expected })?;
        tok.parse().map_err(|_| LoadError::Parse {
            line,
            expected,
            found: tok.to_string(),
        })
    }
}

/// Parse a graph from the contents of a graph file.
pub fn parse_graph(text: &str) -> Result<Graph, LoadError> {
    let (name, body) = text.split_once('\n').unwrap_or((text, ""));
    let mut tokens = Tokens::new(body, 2);

    let n: i64 = tokens.next("node count")?;
    if n <= 0 {
        return Err(GraphError::Empty.into());
    }

    let mut coords = Vec::new();
    for _ in 0..n {
        let x: f64 = tokens.next("x coordinate")?;
        let y: f64 = tokens.next("y coordinate")?;
        coords.push(Coord::new(x, y));
    }

    let start: NodeId = tokens.next("start node")?;
    let goal: NodeId = tokens.next("goal node")?;
    let num_edges: usize = tokens.next("edge count")?;

    let mut builder = GraphBuilder::new(name.trim(), coords);
    builder.endpoints(start, goal);
    for _ in 0..num_edges {
        let u: NodeId = tokens.next("edge endpoint")?;
        let v: NodeId = tokens.next("edge endpoint")?;
        let w: f64 = tokens.next("edge weight")?;
        builder.edge(u, v, w)?;
    }

    Ok(builder.build()?)
}

/// Read and parse a single graph file.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_graph(&text)
}

/// Load every `*.txt` graph in `dir`, in path order.
///
/// Files that fail to read or parse are logged and skipped. Only a failure
/// to list the directory itself is returned as an error.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<Vec<Graph>, LoadError> {
    let dir = dir.as_ref();
    let io_err = |source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && path.extension().is_some_and(|ext| ext == GRAPH_EXTENSION) {
                    paths.push(path);
                }
            }
            Err(e) => log::warn!("skipping unreadable entry in {}: {e}", dir.display()),
        }
    }
    paths.sort();

    let mut graphs = Vec::with_capacity(paths.len());
    for path in &paths {
        match load_graph(path) {
            Ok(g) => {
                log::debug!(
                    "loaded {:?} from {}: {} nodes, {} edges",
                    g.name(),
                    path.display(),
                    g.len(),
                    g.edge_count()
                );
                graphs.push(g);
            }
            Err(e) => log::warn!("skipping {}: {e}", path.display()),
        }
    }

    log::info!(
        "loaded {} of {} graph files from {}",
        graphs.len(),
        paths.len(),
        dir.display()
    );
    Ok(graphs)
}
