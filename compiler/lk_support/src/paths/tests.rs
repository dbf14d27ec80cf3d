#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;

#[test]
fn absolute_file() {
    let dir = file_dir("/usr/share/templates/decl.mako").expect("absolute path");
    assert_eq!(dir, PathBuf::from("/usr/share/templates"));
}

#[test]
fn relative_file_is_resolved() {
    let cwd = std::env::current_dir().expect("cwd");
    let dir = file_dir("templates/decl.mako").expect("relative path");
    assert!(dir.is_absolute());
    assert_eq!(dir, cwd.join("templates"));
}

#[test]
fn filesystem_root() {
    let dir = file_dir("/").expect("root");
    assert_eq!(dir, PathBuf::from("/"));
}

#[test]
fn empty_path_is_an_error() {
    assert!(file_dir("").is_err());
}
