use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::warn;

use crate::core::error::StoreError;
use crate::core::path::{self, SEPARATOR};
use crate::models::{Node, NodeKind, SeedManifest};

/// Virtual filesystem store.
///
/// Owns the canonical tree of [`Node`]s and is the single source of truth
/// for every consumer (terminal session, file-manager views). All addressing
/// is by `/`-delimited path; `/` alone denotes the root.
///
/// # Copy-on-write
///
/// Every mutation clones the whole tree, applies the change to the clone,
/// and atomically swaps the root reference. A snapshot obtained via
/// [`snapshot`](Self::snapshot) before the mutation therefore never changes
/// in place: readers observe either the pre- or post-mutation tree in full,
/// never a partially mutated one. Failed mutations drop the clone, so the
/// visible tree is untouched on any error.
///
/// # Path Convention
///
/// - Root: `/`
/// - Nested entries: `/Users/guest`, `/Users/guest/Documents/README.txt`
/// - Repeated separators are tolerated (`//Users` equals `/Users`)
#[derive(Clone, Debug)]
pub struct VirtualFileStore {
    /// Current root of the tree. Replaced wholesale on every mutation.
    root: Arc<Node>,
}

impl VirtualFileStore {
    /// Create a store holding only an empty root directory.
    pub fn new() -> Self {
        Self {
            root: Arc::new(Node::directory(path::ROOT, now_secs())),
        }
    }

    /// Build a store from a seed manifest.
    ///
    /// Files are inserted first, then the directory list (which is what
    /// keeps empty directories alive); missing parents are created on the
    /// way, so sibling order follows manifest order. Entries whose path is
    /// blocked by an existing file are skipped with a warning rather than
    /// failing the whole seed.
    pub fn from_manifest(manifest: &SeedManifest) -> Self {
        let stamp = now_secs();
        let mut root = Node::directory(path::ROOT, stamp);

        for file in &manifest.files {
            insert_seed_file(&mut root, &file.path, &file.content, stamp);
        }
        for dir in &manifest.directories {
            ensure_seed_directory(&mut root, &dir.path, stamp);
        }

        Self {
            root: Arc::new(root),
        }
    }

    /// Build a store from the embedded default seed (home tree plus
    /// `Applications` and `System`).
    pub fn seeded() -> Self {
        let manifest: SeedManifest = serde_json::from_str(crate::config::SEED_MANIFEST)
            .expect("embedded seed manifest must be valid JSON");
        Self::from_manifest(&manifest)
    }

    /// A consistent snapshot of the whole tree.
    ///
    /// The returned handle keeps observing the tree exactly as it was at the
    /// time of the call, no matter what is mutated afterwards.
    pub fn snapshot(&self) -> Arc<Node> {
        Arc::clone(&self.root)
    }

    /// Resolve a path to its node. No side effects.
    ///
    /// Fails as soon as an intermediate segment is missing or is not a
    /// directory.
    pub fn resolve(&self, target: &str) -> Option<&Node> {
        let mut current: &Node = &self.root;
        for segment in path::segments(target) {
            current = current.child(segment)?;
        }
        Some(current)
    }

    /// List a directory's children, as currently ordered.
    ///
    /// An empty directory yields an empty slice, distinct from `None`
    /// (not found, or not a directory).
    pub fn list(&self, target: &str) -> Option<&[Node]> {
        self.resolve(target)?.children()
    }

    /// Read a file's content. `None` if the path does not resolve to a file.
    pub fn read_file(&self, target: &str) -> Option<&str> {
        self.resolve(target)?.content()
    }

    /// Overwrite a file's content, updating its size and timestamp.
    ///
    /// The file must already exist; this store does not auto-create on
    /// write.
    pub fn write_file(&mut self, target: &str, content: &str) -> Result<(), StoreError> {
        let mut next = (*self.root).clone();

        let node = node_at_mut(&mut next, path::segments(target))
            .ok_or_else(|| StoreError::NotFound(target.to_string()))?;
        match &mut node.kind {
            NodeKind::File { content: current } => {
                *current = content.to_string();
                node.modified = now_secs();
            }
            NodeKind::Directory { .. } => {
                return Err(StoreError::NotAFile(target.to_string()));
            }
        }

        self.root = Arc::new(next);
        Ok(())
    }

    /// Create a file as the last child of the directory at `parent_path`.
    pub fn create_file(
        &mut self,
        parent_path: &str,
        name: &str,
        content: &str,
    ) -> Result<(), StoreError> {
        self.insert_node(parent_path, Node::file(name, content, now_secs()))
    }

    /// Create an empty directory as the last child of the directory at
    /// `parent_path`.
    pub fn create_directory(&mut self, parent_path: &str, name: &str) -> Result<(), StoreError> {
        self.insert_node(parent_path, Node::directory(name, now_secs()))
    }

    /// Delete the node at `target`, discarding its whole subtree.
    ///
    /// The root itself can never be deleted.
    pub fn delete_node(&mut self, target: &str) -> Result<(), StoreError> {
        let mut parents: Vec<&str> = path::segments(target).collect();
        let Some(name) = parents.pop() else {
            return Err(StoreError::RootProtected);
        };

        let mut next = (*self.root).clone();

        let parent = node_at_mut(&mut next, parents.into_iter())
            .ok_or_else(|| StoreError::NotFound(target.to_string()))?;
        let children = parent
            .children_mut()
            .ok_or_else(|| StoreError::NotFound(target.to_string()))?;
        let index = children
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| StoreError::NotFound(target.to_string()))?;
        children.remove(index);

        self.root = Arc::new(next);
        Ok(())
    }

    /// Move the node at `from` to the path `to`, preserving its kind and
    /// content (and, for directories, the whole subtree).
    ///
    /// Equivalent to an atomic delete-at-`from` plus create-at-`to`: if any
    /// step fails — the source is missing, the destination parent does not
    /// resolve to a directory, the destination name is taken, or the
    /// destination lies inside the moved subtree — the store is left exactly
    /// as it was, source included.
    pub fn move_node(&mut self, from: &str, to: &str) -> Result<(), StoreError> {
        let mut from_parents: Vec<&str> = path::segments(from).collect();
        let Some(source_name) = from_parents.pop() else {
            return Err(StoreError::RootProtected);
        };
        let mut to_parents: Vec<&str> = path::segments(to).collect();
        let Some(dest_name) = to_parents.pop() else {
            return Err(StoreError::RootProtected);
        };

        // Stage every step on a clone; the visible root is only replaced
        // once the whole detach + reattach has succeeded.
        let mut next = (*self.root).clone();

        let source_parent = node_at_mut(&mut next, from_parents.into_iter())
            .ok_or_else(|| StoreError::NotFound(from.to_string()))?;
        let source_children = source_parent
            .children_mut()
            .ok_or_else(|| StoreError::NotFound(from.to_string()))?;
        let index = source_children
            .iter()
            .position(|c| c.name == source_name)
            .ok_or_else(|| StoreError::NotFound(from.to_string()))?;
        let mut moved = source_children.remove(index);

        // With the source detached, a destination inside the moved subtree
        // no longer resolves, which is exactly the failure we want.
        let dest_parent = node_at_mut(&mut next, to_parents.into_iter())
            .ok_or_else(|| StoreError::NotFound(to.to_string()))?;
        let dest_children = dest_parent
            .children_mut()
            .ok_or_else(|| StoreError::NotADirectory(to.to_string()))?;
        if dest_children.iter().any(|c| c.name == dest_name) {
            return Err(StoreError::NameTaken(dest_name.to_string()));
        }
        moved.name = dest_name.to_string();
        moved.modified = now_secs();
        dest_children.push(moved);

        self.root = Arc::new(next);
        Ok(())
    }

    /// Append `node` to the children of the directory at `parent_path`,
    /// enforcing name validity and sibling uniqueness before committing.
    fn insert_node(&mut self, parent_path: &str, node: Node) -> Result<(), StoreError> {
        validate_name(&node.name)?;

        let mut next = (*self.root).clone();

        let parent = node_at_mut(&mut next, path::segments(parent_path))
            .ok_or_else(|| StoreError::NotFound(parent_path.to_string()))?;
        let children = parent
            .children_mut()
            .ok_or_else(|| StoreError::NotADirectory(parent_path.to_string()))?;
        if children.iter().any(|c| c.name == node.name) {
            return Err(StoreError::NameTaken(node.name));
        }
        children.push(node);

        self.root = Arc::new(next);
        Ok(())
    }
}

impl Default for VirtualFileStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk `segments` from `root`, mutably. `None` as soon as a segment is
/// missing or an intermediate node is a file.
fn node_at_mut<'a, 'b>(
    root: &'a mut Node,
    segments: impl Iterator<Item = &'b str>,
) -> Option<&'a mut Node> {
    let mut current = root;
    for segment in segments {
        current = current.child_mut(segment)?;
    }
    Some(current)
}

/// Reject empty names and names containing the separator before any
/// mutation happens.
fn validate_name(name: &str) -> Result<(), StoreError> {
    if name.is_empty() || name.contains(SEPARATOR) {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Insert a seed file, creating missing parent directories.
fn insert_seed_file(root: &mut Node, seed_path: &str, content: &str, stamp: u64) {
    let all: Vec<&str> = path::segments(seed_path).collect();
    let Some((name, parents)) = all.split_last() else {
        warn!(path = seed_path, "seed conflict: file entry with empty path");
        return;
    };
    let Some(dir) = descend_or_create(root, parents, stamp) else {
        warn!(path = seed_path, "seed conflict: parent blocked by a file");
        return;
    };
    let Some(children) = dir.children_mut() else {
        return;
    };
    if children.iter().any(|c| c.name == *name) {
        warn!(path = seed_path, "seed conflict: duplicate entry");
        return;
    }
    children.push(Node::file(*name, content, stamp));
}

/// Ensure a seed directory exists (even if it stays empty).
fn ensure_seed_directory(root: &mut Node, seed_path: &str, stamp: u64) {
    let all: Vec<&str> = path::segments(seed_path).collect();
    if descend_or_create(root, &all, stamp).is_none() {
        warn!(path = seed_path, "seed conflict: directory blocked by a file");
    }
}

/// Walk `segments` from `node`, creating missing directories along the way.
/// `None` if an existing entry on the way is a file.
fn descend_or_create<'a>(node: &'a mut Node, segments: &[&str], stamp: u64) -> Option<&'a mut Node> {
    let mut current = node;
    for segment in segments {
        let children = current.children_mut()?;
        if !children.iter().any(|c| c.name == *segment) {
            children.push(Node::directory(*segment, stamp));
        }
        current = current.child_mut(segment)?;
        if !current.is_directory() {
            return None;
        }
    }
    Some(current)
}
