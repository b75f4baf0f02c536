//! Tests for path containment under the docs root

use crate::common::DocsSite;
use vitepress_mcp::core::guard::PathGuard;

#[test]
fn test_parent_segments_rejected_regardless_of_existence() {
    let site = DocsSite::small();
    let guard = PathGuard::new(site.root());

    for path in [
        "../../etc/passwd",
        "..",
        "../a.md",
        "guide/../../a.md",
        "./../a.md",
    ] {
        assert!(guard.resolve(path).is_none(), "{path} should be rejected");
    }
}

#[test]
fn test_absolute_paths_rejected() {
    let site = DocsSite::small();
    let guard = PathGuard::new(site.root());

    let absolute = site.root().join("a.md");
    assert!(guard.resolve(absolute.to_str().unwrap()).is_none());
    assert!(guard.resolve("/etc/passwd").is_none());
}

#[test]
fn test_paths_inside_root_accepted() {
    let site = DocsSite::small();
    let guard = PathGuard::new(site.root());
    let real_root = site.root().canonicalize().unwrap();

    let resolved = guard.resolve("guide/intro.md").unwrap();
    assert_eq!(resolved, real_root.join("guide/intro.md"));
    assert!(resolved.is_absolute());

    assert_eq!(guard.resolve("./a.md").unwrap(), real_root.join("a.md"));
    assert_eq!(
        guard.resolve("guide/./../b.md").unwrap(),
        real_root.join("b.md")
    );
}

#[test]
fn test_nonexistent_root_rejects_everything() {
    let site = DocsSite::small();
    let guard = PathGuard::new(site.root().join("missing-root"));
    assert!(guard.resolve("a.md").is_none());
}

#[cfg(unix)]
#[test]
fn test_symlink_to_outside_file_rejected() {
    let outside = DocsSite::with_files(&[("passwd.md", "root:x:0:0")]);
    let site = DocsSite::small();
    site.symlink("guide/escape.md", &outside.root().join("passwd.md"));

    let guard = PathGuard::new(site.root());
    assert!(guard.resolve("guide/escape.md").is_none());
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_to_outside_rejected() {
    let outside = DocsSite::with_files(&[("secret/page.md", "secret")]);
    let site = DocsSite::small();
    site.symlink("external", &outside.root().join("secret"));

    let guard = PathGuard::new(site.root());
    assert!(guard.resolve("external/page.md").is_none());
}

#[cfg(unix)]
#[test]
fn test_symlink_inside_root_accepted() {
    let site = DocsSite::small();
    site.symlink("latest.md", &site.root().join("guide/intro.md"));

    let guard = PathGuard::new(site.root());
    assert_eq!(
        guard.resolve("latest.md").unwrap(),
        site.root().join("guide/intro.md").canonicalize().unwrap()
    );
}
