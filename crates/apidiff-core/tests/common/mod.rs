use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write one listing file per `(relative path, lines)` under a fresh directory
#[allow(dead_code)]
pub fn snapshot_dir(listings: &[(&str, &[&str])]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (relative, lines) in listings {
        write_listing(dir.path(), relative, lines);
    }
    dir
}

/// Write a listing, creating parent directories as needed
#[allow(dead_code)]
pub fn write_listing(root: &Path, relative: &str, lines: &[&str]) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut text = lines.join("\n");
    text.push('\n');
    fs::write(&path, text).unwrap();
    path
}

#[allow(dead_code)]
pub const WIDGET_OLD: &[&str] = &[
    "public class Widget {",
    "  public Widget();",
    "  public void draw();",
    "}",
];

#[allow(dead_code)]
pub const WIDGET_NEW: &[&str] = &[
    "public class Widget {",
    "  public Widget();",
    "  public void draw(int x);",
    "  public int color;",
    "}",
];
