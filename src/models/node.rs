//! Tree node representation for the virtual filesystem.
//!
//! A [`Node`] is either a file or a directory. The two kinds carry mutually
//! exclusive payloads, so the distinction is encoded as the [`NodeKind`] sum
//! type rather than a pair of optional fields: a file can never grow
//! children and a directory can never grow content.

/// Kind-specific payload of a [`Node`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// A directory owning an ordered list of children (insertion order).
    Directory { children: Vec<Node> },
    /// A file holding its full content.
    File { content: String },
}

/// A single entry in the virtual filesystem tree.
///
/// Ownership is strictly hierarchical: a directory exclusively owns its
/// children, so every node is reachable from the root by exactly one path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    /// Entry name, unique among siblings. Never empty, never contains `/`.
    pub name: String,
    /// Unix timestamp of the last mutation to this node.
    pub modified: u64,
    /// File or directory payload.
    pub kind: NodeKind,
}

impl Node {
    /// Create an empty directory.
    pub fn directory(name: impl Into<String>, modified: u64) -> Self {
        Self {
            name: name.into(),
            modified,
            kind: NodeKind::Directory {
                children: Vec::new(),
            },
        }
    }

    /// Create a file with the given content.
    pub fn file(name: impl Into<String>, content: impl Into<String>, modified: u64) -> Self {
        Self {
            name: name.into(),
            modified,
            kind: NodeKind::File {
                content: content.into(),
            },
        }
    }

    /// Check if this node is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// Byte length of the content (files only).
    pub fn size(&self) -> Option<u64> {
        match &self.kind {
            NodeKind::File { content } => Some(content.len() as u64),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Get the file content (files only).
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => Some(content),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Get the children in insertion order (directories only).
    pub fn children(&self) -> Option<&[Node]> {
        match &self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    /// Mutable access to the children list (directories only).
    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match &mut self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    /// Look up a direct child by exact name. `None` for files.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children()?.iter().find(|c| c.name == name)
    }

    /// Mutable lookup of a direct child by exact name.
    pub(crate) fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children_mut()?.iter_mut().find(|c| c.name == name)
    }
}
