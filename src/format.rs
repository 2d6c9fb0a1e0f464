// text formatters: gauges for the monitor views, box-drawing tree

use crate::path;
use crate::vfs::{VfsNode, VirtualFileSystem};

const FILLED: char = '█';
const EMPTY: char = '░';

/// Fixed-width block gauge, e.g. `[████░░░░░░]`. Values outside
/// `0..=max` are clamped.
pub fn gauge(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    let filled = ((ratio * width as f64).round() as usize).min(width);
    let mut out = String::with_capacity(width * 3 + 2);
    out.push('[');
    out.extend(std::iter::repeat(FILLED).take(filled));
    out.extend(std::iter::repeat(EMPTY).take(width - filled));
    out.push(']');
    out
}

/// Render everything below `root` with `├── `/`└── ` connectors.
/// Empty for files and missing paths.
pub fn render_tree(vfs: &VirtualFileSystem, root: &str) -> String {
    let mut out = String::new();
    walk(vfs, root, "", &mut out);
    out
}

fn walk(vfs: &VirtualFileSystem, dir: &str, indent: &str, out: &mut String) {
    let children = match vfs.lookup(dir) {
        Some(VfsNode::Directory { children }) => children,
        _ => return,
    };
    for (i, name) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let full = path::join(dir, name);
        let is_dir = vfs.is_dir(&full);

        out.push_str(indent);
        out.push_str(if last { "└── " } else { "├── " });
        out.push_str(name);
        if is_dir {
            out.push('/');
        }
        out.push('\n');

        if is_dir {
            let next = format!("{}{}", indent, if last { "    " } else { "│   " });
            walk(vfs, &full, &next, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> VirtualFileSystem {
        let mut vfs = VirtualFileSystem::new();
        vfs.add_dir("/", &["dir1", "dir2", "file1.txt"]);
        vfs.add_dir("/dir1", &["subdir1", "file2.txt"]);
        vfs.add_dir("/dir1/subdir1", &["file3.txt"]);
        vfs.add_file("/dir1/subdir1/file3.txt", "content");
        vfs.add_file("/dir1/file2.txt", "content");
        vfs.add_dir("/dir2", &[]);
        vfs.add_file("/file1.txt", "content");
        vfs
    }

    #[test]
    fn test_gauge_widths() {
        assert_eq!(gauge(0.0, 100.0, 10), "[░░░░░░░░░░]");
        assert_eq!(gauge(50.0, 100.0, 10), "[█████░░░░░]");
        assert_eq!(gauge(100.0, 100.0, 4), "[████]");
    }

    #[test]
    fn test_gauge_clamps() {
        assert_eq!(gauge(250.0, 100.0, 4), "[████]");
        assert_eq!(gauge(-3.0, 100.0, 4), "[░░░░]");
        assert_eq!(gauge(5.0, 0.0, 2), "[░░]");
    }

    #[test]
    fn test_render_tree_exact() {
        let tree = render_tree(&fixture(), "/");
        let expected = "\
├── dir1/
│   ├── subdir1/
│   │   └── file3.txt
│   └── file2.txt
├── dir2/
└── file1.txt
";
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_render_tree_last_branch_uses_spaces() {
        let mut vfs = VirtualFileSystem::new();
        vfs.add_dir("/", &["a"]);
        vfs.add_dir("/a", &["b"]);
        vfs.add_file("/a/b", "");
        assert_eq!(render_tree(&vfs, "/"), "└── a/\n    └── b\n");
    }

    #[test]
    fn test_render_tree_non_directory() {
        let vfs = fixture();
        assert_eq!(render_tree(&vfs, "/file1.txt"), "");
        assert_eq!(render_tree(&vfs, "/nonexistent"), "");
    }
}
