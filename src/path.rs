// path helpers shared by every command that takes a path argument
// only whole-token `.` and `..` are special, `a/../b` is taken literally

/// Resolve `input` against `cwd` into an absolute, normalized path.
pub fn resolve(input: &str, cwd: &str) -> String {
    match input {
        "" => cwd.to_string(),
        "/" => "/".to_string(),
        "." => cwd.to_string(),
        ".." => parent(cwd),
        path if path.starts_with('/') => normalize(path),
        path => normalize(&join(cwd, path)),
    }
}

/// Collapse duplicate and trailing slashes, always with a leading `/`.
pub fn normalize(path: &str) -> String {
    let parts: Vec<&str> = path.split('/').filter(|c| !c.is_empty()).collect();
    format!("/{}", parts.join("/"))
}

// parent of an absolute path, root stays root
pub fn parent(path: &str) -> String {
    let parts: Vec<&str> = path.split('/').filter(|c| !c.is_empty()).collect();
    if parts.len() <= 1 {
        "/".to_string()
    } else {
        format!("/{}", parts[..parts.len() - 1].join("/"))
    }
}

/// Full key of `name` inside directory `dir`.
pub fn join(dir: &str, name: &str) -> String {
    if dir == "/" {
        format!("/{}", name)
    } else {
        format!("{}/{}", dir.trim_end_matches('/'), name)
    }
}
