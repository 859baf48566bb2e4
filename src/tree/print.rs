//! Text dumps of trees for debugging and snapshot comparison
//!
//! One line per node, children indented one level deeper than their parent.
//! With states shown each level indents by a tab and lines end in ` (STATE)`;
//! without states each level indents by two spaces.

use crate::tree::node::{Branch, Node};
use std::fmt::{self, Write};

const STATE_INDENT: &str = "\t";
const PLAIN_INDENT: &str = "  ";

impl Node {
    /// Render the subtree rooted here. Lines are joined with `\n` and there is
    /// no trailing newline.
    pub fn print(&self, indent: &str, include_state: bool) -> String {
        let mut out = String::new();
        let mut prefix = indent.to_string();
        write_node(&mut out, self, &mut prefix, include_state);
        out
    }
}

impl Branch {
    pub fn print(&self, indent: &str, include_state: bool) -> String {
        let mut out = String::new();
        let mut prefix = indent.to_string();
        write_branch(&mut out, self, &mut prefix, include_state);
        out
    }
}

fn write_title(out: &mut String, prefix: &str, name: &str, state: &str, include_state: bool) {
    out.push_str(prefix);
    out.push_str(name);
    if include_state {
        // Writing to a String cannot fail
        let _ = write!(out, " ({})", state);
    }
}

fn write_node(out: &mut String, node: &Node, prefix: &mut String, include_state: bool) {
    match node {
        Node::Leaf(leaf) => write_title(
            out,
            prefix,
            leaf.name(),
            leaf.state().as_str(),
            include_state,
        ),
        Node::Branch(branch) => write_branch(out, branch, prefix, include_state),
    }
}

fn write_branch(out: &mut String, branch: &Branch, prefix: &mut String, include_state: bool) {
    write_title(
        out,
        prefix,
        branch.name(),
        branch.state().as_str(),
        include_state,
    );
    let step = if include_state {
        STATE_INDENT
    } else {
        PLAIN_INDENT
    };
    prefix.push_str(step);
    for child in branch.children() {
        out.push('\n');
        write_node(out, child, prefix, include_state);
    }
    prefix.truncate(prefix.len() - step.len());
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print("", true))
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print("", true))
    }
}
