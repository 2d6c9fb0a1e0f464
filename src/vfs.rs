use std::collections::HashMap;
use thiserror::Error;

use crate::path;

#[derive(Debug, Clone, PartialEq)]
pub enum VfsNode {
    File {
        content: String,
        url: Option<String>,
        // computed at startup from the cv data, reads the same as a stored file
        is_virtual: bool,
    },
    Directory {
        // insertion order = display order
        children: Vec<String>,
    },
    Symlink {
        target: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VfsError {
    #[error("No such file or directory")]
    NotFound,
    #[error("Is a directory")]
    IsADirectory,
    #[error("Not a directory")]
    NotADirectory,
}

/// Read-only tree keyed by absolute path. Populated once, never mutated by
/// any command.
#[derive(Debug, Clone)]
pub struct VirtualFileSystem {
    nodes: HashMap<String, VfsNode>,
}

impl Default for VirtualFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualFileSystem {
    pub fn new() -> Self {
        let mut nodes = HashMap::new();
        nodes.insert("/".to_string(), VfsNode::Directory { children: Vec::new() });
        Self { nodes }
    }

    // construction helpers - parents list their children explicitly
    pub fn add_dir(&mut self, path: &str, children: &[&str]) {
        self.nodes.insert(
            path::normalize(path),
            VfsNode::Directory {
                children: children.iter().map(|c| c.to_string()).collect(),
            },
        );
    }

    pub fn add_file(&mut self, path: &str, content: &str) {
        self.insert_file(path, content, None, false);
    }

    pub fn add_virtual_file(&mut self, path: &str, content: &str) {
        self.insert_file(path, content, None, true);
    }

    pub fn add_linked_file(&mut self, path: &str, content: &str, url: &str) {
        self.insert_file(path, content, Some(url.to_string()), false);
    }

    pub fn add_symlink(&mut self, path: &str, target: &str) {
        self.nodes.insert(
            path::normalize(path),
            VfsNode::Symlink { target: path::normalize(target) },
        );
    }

    fn insert_file(&mut self, path: &str, content: &str, url: Option<String>, is_virtual: bool) {
        self.nodes.insert(
            path::normalize(path),
            VfsNode::File { content: content.to_string(), url, is_virtual },
        );
    }

    /// Raw lookup, symlinks are returned as-is.
    pub fn lookup(&self, path: &str) -> Option<&VfsNode> {
        self.nodes.get(path)
    }

    /// Lookup following exactly one symlink hop. Returns the path the node
    /// actually lives at.
    pub fn follow(&self, path: &str) -> Option<(&str, &VfsNode)> {
        let (key, node) = self.nodes.get_key_value(path)?;
        match node {
            VfsNode::Symlink { target } => {
                let (key, node) = self.nodes.get_key_value(target.as_str())?;
                Some((key.as_str(), node))
            }
            node => Some((key.as_str(), node)),
        }
    }

    pub fn is_dir(&self, path: &str) -> bool {
        matches!(self.nodes.get(path), Some(VfsNode::Directory { .. }))
    }

    /// Child names of a directory, unmarked.
    pub fn children(&self, path: &str) -> Result<&[String], VfsError> {
        match self.follow(path) {
            Some((_, VfsNode::Directory { children })) => Ok(children.as_slice()),
            Some(_) => Err(VfsError::NotADirectory),
            None => Err(VfsError::NotFound),
        }
    }

    /// Child names with a trailing `/` on subdirectories.
    pub fn list_dir(&self, path: &str) -> Result<Vec<String>, VfsError> {
        let (dir, node) = self.follow(path).ok_or(VfsError::NotFound)?;
        match node {
            VfsNode::Directory { children } => Ok(children
                .iter()
                .map(|name| {
                    if self.is_dir(&path::join(dir, name)) {
                        format!("{}/", name)
                    } else {
                        name.clone()
                    }
                })
                .collect()),
            _ => Err(VfsError::NotADirectory),
        }
    }

    pub fn read_file(&self, path: &str) -> Result<&str, VfsError> {
        match self.follow(path) {
            Some((_, VfsNode::File { content, .. })) => Ok(content.as_str()),
            Some((_, VfsNode::Directory { .. })) => Err(VfsError::IsADirectory),
            // link to a link counts as dangling, we only hop once
            Some((_, VfsNode::Symlink { .. })) | None => Err(VfsError::NotFound),
        }
    }

    /// External URL attached to a file, if any.
    pub fn file_url(&self, path: &str) -> Result<Option<&str>, VfsError> {
        match self.follow(path) {
            Some((_, VfsNode::File { url, .. })) => Ok(url.as_deref()),
            Some((_, VfsNode::Directory { .. })) => Err(VfsError::IsADirectory),
            Some((_, VfsNode::Symlink { .. })) | None => Err(VfsError::NotFound),
        }
    }
}
