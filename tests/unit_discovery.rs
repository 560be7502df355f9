// tests/unit_discovery.rs
use std::fs;

use propcop_core::config::Config;
use propcop_core::discovery::discover;
use tempfile::TempDir;

fn touch(dir: &TempDir, rel: &str) {
    let path = dir.path().join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "export {};\n").unwrap();
}

#[test]
fn test_discovers_component_files_only() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "src/App.tsx");
    touch(&dir, "src/util.ts");
    touch(&dir, "src/legacy.jsx");
    touch(&dir, "README.md");
    touch(&dir, "styles.css");

    let files = discover(&[dir.path().to_path_buf()], &Config::default()).unwrap();
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();

    assert_eq!(files.len(), 3);
    assert!(names.contains(&"App.tsx".to_string()));
    assert!(names.contains(&"util.ts".to_string()));
    assert!(names.contains(&"legacy.jsx".to_string()));
}

#[test]
fn test_prunes_node_modules() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "src/App.tsx");
    touch(&dir, "node_modules/react/index.js");
    touch(&dir, "dist/bundle.js");

    let files = discover(&[dir.path().to_path_buf()], &Config::default()).unwrap();
    assert_eq!(files.len(), 1);
}

#[test]
fn test_explicit_file_bypasses_extension_filter() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "component.vue");

    let explicit = dir.path().join("component.vue");
    let files = discover(&[explicit.clone()], &Config::default()).unwrap();
    assert_eq!(files, vec![explicit]);
}

#[test]
fn test_ignore_patterns_filter_paths() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "src/App.tsx");
    touch(&dir, "src/generated/schema.ts");

    let mut config = Config::default();
    config.parse_toml("[rules]\nignore = [\"generated\"]\n").unwrap();

    let files = discover(&[dir.path().to_path_buf()], &config).unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("src/App.tsx"));
}

#[test]
fn test_results_sorted_and_deduped() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "src/App.tsx");

    let root = dir.path().to_path_buf();
    let files = discover(&[root.clone(), root], &Config::default()).unwrap();
    assert_eq!(files.len(), 1);
}
