//! Lazily expanded directory tree rooted at the opened project.
//!
//! Nodes only hold children while expanded. Collapsing a directory drops its
//! children, and expanding it again always issues a fresh listing.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::entry::{Entry, EntryKind, sort_by_entry};

/// Pending directory listing owned by one expanded node.
///
/// Dropping the ticket raises its cancellation flag, so a listing that
/// finishes after its node was collapsed or discarded is never delivered.
#[derive(Debug)]
pub struct FetchTicket {
    cancel: Arc<AtomicBool>,
    id: u64,
}

impl FetchTicket {
    fn new(id: u64) -> Self {
        Self {
            cancel: Arc::new(AtomicBool::new(false)),
            id,
        }
    }
}

impl Drop for FetchTicket {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}

/// Directory listing the app must run for a freshly expanded node.
#[derive(Debug)]
pub struct FetchRequest {
    pub cancel: Arc<AtomicBool>,
    pub entry: Entry,
    pub fetch_id: u64,
    pub node_path: Vec<String>,
}

/// Children state of an expanded directory.
#[derive(Debug)]
pub enum Children {
    Failed(String),
    Loaded(Vec<TreeNode>),
    Loading(FetchTicket),
}

/// Expansion state of a directory node.
#[derive(Debug)]
pub enum Expansion {
    Collapsed,
    Expanded(Children),
}

/// One node of the rendered tree.
#[derive(Debug)]
pub enum TreeNode {
    Directory { entry: Entry, expansion: Expansion },
    File { entry: Entry },
}

impl TreeNode {
    /// Creates a collapsed node for `entry`.
    pub fn new(entry: Entry) -> Self {
        match entry.kind {
            EntryKind::Directory => Self::Directory {
                entry,
                expansion: Expansion::Collapsed,
            },
            EntryKind::File => Self::File { entry },
        }
    }

    /// Returns the entry this node renders.
    pub fn entry(&self) -> &Entry {
        match self {
            Self::Directory { entry, .. } | Self::File { entry } => entry,
        }
    }

    /// Returns `true` for an expanded directory.
    pub fn is_expanded(&self) -> bool {
        matches!(
            self,
            Self::Directory {
                expansion: Expansion::Expanded(_),
                ..
            }
        )
    }

    fn child_mut(&mut self, name: &str) -> Option<&mut TreeNode> {
        let Self::Directory {
            expansion: Expansion::Expanded(Children::Loaded(children)),
            ..
        } = self
        else {
            return None;
        };

        children
            .iter_mut()
            .find(|child| child.entry().name == name)
    }
}

/// What one visible tree row shows.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RowKind {
    Directory { expanded: bool },
    Empty,
    Failed(String),
    File,
    Loading,
}

/// One flattened, visible tree row.
///
/// Placeholder rows (`Empty`, `Failed`, `Loading`) carry the path of the
/// directory they belong to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeRow {
    pub depth: usize,
    pub kind: RowKind,
    pub name: String,
    pub node_path: Vec<String>,
}

impl TreeRow {
    fn is_placeholder(&self) -> bool {
        matches!(
            self.kind,
            RowKind::Empty | RowKind::Failed(_) | RowKind::Loading
        )
    }
}

/// Tree state for the currently opened root plus the row selection.
#[derive(Debug)]
pub struct TreeView {
    next_fetch_id: u64,
    root: TreeNode,
    selected_index: usize,
}

impl TreeView {
    /// Creates a collapsed tree rooted at `root`.
    pub fn new(root: Entry) -> Self {
        Self {
            next_fetch_id: 0,
            root: TreeNode::new(root),
            selected_index: 0,
        }
    }

    /// Returns the root node.
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Returns the entry the tree is rooted at.
    pub fn root_entry(&self) -> &Entry {
        self.root.entry()
    }

    /// Returns the selected visible row index.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Flattens the visible tree into rows, sorting each expanded
    /// directory's children on the way.
    pub fn rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        let mut node_path = Vec::new();
        push_rows(&self.root, 0, &mut node_path, &mut rows);

        rows
    }

    /// Moves the selection down by one row.
    pub fn select_next(&mut self) {
        let row_count = self.rows().len();
        self.selected_index = (self.selected_index + 1).min(row_count.saturating_sub(1));
    }

    /// Moves the selection up by one row.
    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Toggles the directory at `node_path`.
    ///
    /// Expanding returns the listing request the caller must run. Collapsing
    /// drops the children together with any pending listing. Files and
    /// unknown paths are ignored.
    pub fn toggle(&mut self, node_path: &[String]) -> Option<FetchRequest> {
        let fetch_id = self.next_fetch_id;
        let node = find_node_mut(&mut self.root, node_path)?;
        let TreeNode::Directory { entry, expansion } = node else {
            return None;
        };

        if matches!(expansion, Expansion::Expanded(_)) {
            *expansion = Expansion::Collapsed;
            self.clamp_selection();

            return None;
        }

        let ticket = FetchTicket::new(fetch_id);
        let request = FetchRequest {
            cancel: Arc::clone(&ticket.cancel),
            entry: entry.clone(),
            fetch_id,
            node_path: node_path.to_vec(),
        };
        *expansion = Expansion::Expanded(Children::Loading(ticket));
        self.next_fetch_id += 1;

        Some(request)
    }

    /// Toggles the directory on the selected row.
    pub fn toggle_selected(&mut self) -> Option<FetchRequest> {
        let row = self.rows().into_iter().nth(self.selected_index)?;
        if !matches!(row.kind, RowKind::Directory { .. }) {
            return None;
        }

        self.toggle(&row.node_path)
    }

    /// Collapses the selected directory, or moves the selection to the
    /// owning directory when the selected row is not an expanded directory.
    pub fn collapse_selected(&mut self) {
        let rows = self.rows();
        let Some(row) = rows.get(self.selected_index) else {
            return;
        };

        if row.kind == (RowKind::Directory { expanded: true }) {
            let node_path = row.node_path.clone();
            self.toggle(&node_path);

            return;
        }

        let owner_path = if row.is_placeholder() {
            row.node_path.as_slice()
        } else {
            let Some((_, parent_path)) = row.node_path.split_last() else {
                return;
            };

            parent_path
        };

        if let Some(owner_index) = rows.iter().position(|candidate| {
            !candidate.is_placeholder() && candidate.node_path.as_slice() == owner_path
        }) {
            self.selected_index = owner_index;
        }
    }

    /// Applies a finished listing to the node at `node_path`.
    ///
    /// Returns `false` and leaves the tree untouched when the node is gone,
    /// collapsed, or waiting for a different listing.
    pub fn apply_listing(
        &mut self,
        fetch_id: u64,
        node_path: &[String],
        result: Result<Vec<Entry>, String>,
    ) -> bool {
        let Some(TreeNode::Directory {
            expansion: Expansion::Expanded(children),
            ..
        }) = find_node_mut(&mut self.root, node_path)
        else {
            return false;
        };

        if !matches!(children, Children::Loading(ticket) if ticket.id == fetch_id) {
            return false;
        }

        *children = match result {
            Ok(entries) => Children::Loaded(entries.into_iter().map(TreeNode::new).collect()),
            Err(message) => Children::Failed(message),
        };
        self.clamp_selection();

        true
    }

    fn clamp_selection(&mut self) {
        let row_count = self.rows().len();
        self.selected_index = self.selected_index.min(row_count.saturating_sub(1));
    }
}

/// Resolves `node_path` by child name; with duplicate names the first match
/// wins.
fn find_node_mut<'a>(root: &'a mut TreeNode, node_path: &[String]) -> Option<&'a mut TreeNode> {
    node_path
        .iter()
        .try_fold(root, |node, name| node.child_mut(name))
}

fn push_rows(node: &TreeNode, depth: usize, node_path: &mut Vec<String>, rows: &mut Vec<TreeRow>) {
    let entry = node.entry();
    let kind = match node {
        TreeNode::Directory { .. } => RowKind::Directory {
            expanded: node.is_expanded(),
        },
        TreeNode::File { .. } => RowKind::File,
    };
    rows.push(TreeRow {
        depth,
        kind,
        name: entry.name.clone(),
        node_path: node_path.clone(),
    });

    let TreeNode::Directory {
        expansion: Expansion::Expanded(children),
        ..
    } = node
    else {
        return;
    };

    let owner_path = node_path.clone();
    let placeholder = move |kind: RowKind| TreeRow {
        depth: depth + 1,
        kind,
        name: String::new(),
        node_path: owner_path,
    };

    match children {
        Children::Loading(_) => rows.push(placeholder(RowKind::Loading)),
        Children::Failed(message) => rows.push(placeholder(RowKind::Failed(message.clone()))),
        Children::Loaded(children) if children.is_empty() => {
            rows.push(placeholder(RowKind::Empty));
        }
        Children::Loaded(children) => {
            let mut sorted_children: Vec<&TreeNode> = children.iter().collect();
            sort_by_entry(&mut sorted_children, |child| child.entry());

            for child in sorted_children {
                node_path.push(child.entry().name.clone());
                push_rows(child, depth + 1, node_path, rows);
                node_path.pop();
            }
        }
    }
}
