use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn fndlwr_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("fndlwr");
    path
}

const PROFILES: &str = r#"[
  {
    "id": 1,
    "name": "Ada Smith",
    "specialty": "Family Law",
    "location": "Austin, TX",
    "imageurl": "ada.jpg",
    "phone": "555-0100",
    "email": "ada@example.com",
    "bio": "Ada handles divorce and custody matters.",
    "expertise": ["Divorce", "Custody"]
  },
  {
    "id": 2,
    "name": "Bob Smithers",
    "specialty": "Criminal Defense",
    "location": "Dallas, TX"
  },
  {
    "id": 3,
    "name": "Carla Jones",
    "specialty": "Family Law",
    "location": "Boston, MA"
  }
]"#;

fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir).unwrap();

    fs::write(root.join("lawyers.json"), PROFILES).unwrap();

    let config_content = format!(
        r#"[db]
url = "sqlite:{}/data/fndlwr.sqlite"

[server]
bind = "127.0.0.1:3000"
"#,
        root.display()
    );

    let config_path = config_dir.join("fndlwr.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_fndlwr(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = fndlwr_binary();
    let output = Command::new(&binary)
        .env_remove("FNDLWR_URL")
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run fndlwr binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

fn setup_seeded_env() -> (TempDir, PathBuf) {
    let (tmp, config_path) = setup_test_env();
    let import_path = tmp.path().join("lawyers.json");

    let (_, stderr, success) = run_fndlwr(&config_path, &["init"]);
    assert!(success, "init failed: {}", stderr);
    let (stdout, stderr, success) =
        run_fndlwr(&config_path, &["import", import_path.to_str().unwrap()]);
    assert!(success, "import failed: {}", stderr);
    assert!(stdout.contains("imported: 3"));

    (tmp, config_path)
}

#[test]
fn test_init_creates_database() {
    let (tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_fndlwr(&config_path, &["init"]);
    assert!(success, "init failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("initialized"));
    assert!(tmp.path().join("data/fndlwr.sqlite").exists());
}

#[test]
fn test_init_idempotent() {
    let (_tmp, config_path) = setup_test_env();

    let (_, _, success1) = run_fndlwr(&config_path, &["init"]);
    assert!(success1, "First init failed");

    let (_, _, success2) = run_fndlwr(&config_path, &["init"]);
    assert!(success2, "Second init failed (not idempotent)");
}

#[test]
fn test_import_twice_fails_without_duplicates() {
    let (tmp, config_path) = setup_seeded_env();
    let import_path = tmp.path().join("lawyers.json");

    let (_, _, success) = run_fndlwr(&config_path, &["import", import_path.to_str().unwrap()]);
    assert!(!success, "re-importing the same ids should fail");

    let (stdout, _, _) = run_fndlwr(&config_path, &["search"]);
    assert_eq!(stdout.matches("id: ").count(), 3);
}

#[test]
fn test_search_lists_all_without_filters() {
    let (_tmp, config_path) = setup_seeded_env();

    let (stdout, _, success) = run_fndlwr(&config_path, &["search"]);
    assert!(success);
    assert!(stdout.contains("Ada Smith"));
    assert!(stdout.contains("Bob Smithers"));
    assert!(stdout.contains("Carla Jones"));
}

#[test]
fn test_search_case_insensitive() {
    let (_tmp, config_path) = setup_seeded_env();

    let (upper, _, _) = run_fndlwr(&config_path, &["search", "SMITH"]);
    let (lower, _, _) = run_fndlwr(&config_path, &["search", "smith"]);
    assert_eq!(upper, lower);
    assert!(upper.contains("Ada Smith"));
    assert!(!upper.contains("Carla Jones"));
}

#[test]
fn test_search_with_location() {
    let (_tmp, config_path) = setup_seeded_env();

    let (stdout, _, success) =
        run_fndlwr(&config_path, &["search", "family", "--location", "boston"]);
    assert!(success);
    assert!(stdout.contains("Carla Jones"));
    assert!(!stdout.contains("Ada Smith"));
}

#[test]
fn test_search_no_results() {
    let (_tmp, config_path) = setup_seeded_env();

    let (stdout, _, success) = run_fndlwr(&config_path, &["search", "xyznonexistent"]);
    assert!(success);
    assert!(stdout.contains("No results"));
}

#[test]
fn test_get_lawyer() {
    let (_tmp, config_path) = setup_seeded_env();

    let (stdout, stderr, success) = run_fndlwr(&config_path, &["get", "1"]);
    assert!(success, "get failed: {}", stderr);
    assert!(stdout.contains("Ada Smith"));
    assert!(stdout.contains("--- Expertise (2) ---"));
    assert!(stdout.contains("- Custody"));
}

#[test]
fn test_get_missing_lawyer() {
    let (_tmp, config_path) = setup_seeded_env();

    let (_, stderr, success) = run_fndlwr(&config_path, &["get", "999"]);
    assert!(!success, "get with missing ID should fail");
    assert!(
        stderr.contains("not found"),
        "Should report not found, got: {}",
        stderr
    );
}

#[test]
fn test_suggest() {
    let (_tmp, config_path) = setup_seeded_env();

    let (stdout, _, success) = run_fndlwr(&config_path, &["suggest", "family"]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "got: {}", stdout);
    assert_eq!(lines.iter().filter(|l| **l == "Family Law").count(), 1);
}

#[test]
fn test_suggest_short_input_prints_nothing() {
    let (_tmp, config_path) = setup_seeded_env();

    let (stdout, _, success) = run_fndlwr(&config_path, &["suggest", "a"]);
    assert!(success);
    assert!(stdout.trim().is_empty());
}

#[test]
fn test_invalid_config_is_rejected() {
    let (tmp, _) = setup_test_env();
    let bad = tmp.path().join("bad.toml");
    fs::write(&bad, "[suggestions]\nmax_rows = 0\n").unwrap();

    let (_, stderr, success) = run_fndlwr(&bad, &["init"]);
    assert!(!success);
    assert!(stderr.contains("max_rows"));
}
