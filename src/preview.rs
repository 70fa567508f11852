use crate::vfs::VirtualFS;
use colored::Colorize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Represents a node in the tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<Rc<RefCell<TreeNode>>>,
    is_file: bool,
}
impl TreeNode {
    fn new(name: String, is_file: bool) -> Self {
        Self {
            name,
            children: Vec::new(),
            is_file,
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Finds the node for `path`, creating directory nodes for it and any missing ancestors.
///
/// Names such as `a/b/` create several levels at once on disk, so their intermediate
/// directories never show up as entries of their own.
fn directory_node(
    path: &Path,
    lookup: &mut HashMap<PathBuf, Rc<RefCell<TreeNode>>>,
) -> Rc<RefCell<TreeNode>> {
    if let Some(node) = lookup.get(path) {
        return Rc::clone(node);
    }

    let node = Rc::new(RefCell::new(TreeNode::new(display_name(path), false)));

    if let Some(parent) = path.parent() {
        directory_node(parent, lookup)
            .borrow_mut()
            .children
            .push(Rc::clone(&node));
    }

    lookup.insert(path.to_path_buf(), Rc::clone(&node));

    node
}

/// Build the directory tree from the VFS entries, returning the root node.
fn build_tree(vfs: &VirtualFS) -> Rc<RefCell<TreeNode>> {
    let root = Rc::new(RefCell::new(TreeNode::new(display_name(&vfs.base), false)));

    // map full path to node
    let mut lookup: HashMap<PathBuf, Rc<RefCell<TreeNode>>> = HashMap::new();
    lookup.insert(vfs.base.clone(), Rc::clone(&root));

    for entry in &vfs.entries {
        // entries repeated in the input only show once
        if lookup.contains_key(&entry.destination) {
            log::debug!("skipping repeated entry: {}", entry.destination.display());
            continue;
        }

        if entry.is_file() {
            let Some(parent) = entry.destination.parent() else {
                continue;
            };

            let file = Rc::new(RefCell::new(TreeNode::new(
                display_name(&entry.destination),
                true,
            )));

            directory_node(parent, &mut lookup)
                .borrow_mut()
                .children
                .push(Rc::clone(&file));

            lookup.insert(entry.destination.clone(), file);
        } else {
            directory_node(&entry.destination, &mut lookup);
        }
    }

    root
}

/// Write the tree with a nice ASCII style.
fn write_tree(out: &mut String, node: &Rc<RefCell<TreeNode>>, prefix: &str, is_last: bool) {
    let node_borrow = node.borrow();

    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };
    let name = if node_borrow.is_file {
        node_borrow.name.green()
    } else {
        format!("{}/", node_borrow.name).blue()
    };
    out.push_str(&format!("{}{}{}\n", prefix.yellow(), connector, name));

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node_borrow.children.len();
    for (i, child) in node_borrow.children.iter().enumerate() {
        let last = i == len - 1;
        write_tree(out, child, &child_prefix, last);
    }
}

/// Renders the entries of `vfs` as a tree rooted at its base path.
pub fn render_tree(vfs: &VirtualFS) -> String {
    let tree_root = build_tree(vfs);

    let mut out = String::new();
    write_tree(&mut out, &tree_root, "", true);

    out
}

pub fn preview_as_tree(vfs: &VirtualFS) {
    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    let fancy_prompt = format!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    println!("{}", fancy_prompt);

    print!("{}", render_tree(vfs));

    println!(
        "\n{} {} directories, {} files\n",
        "└─".bold().bright_blue(),
        vfs.directories().count(),
        vfs.files().count()
    );
}
