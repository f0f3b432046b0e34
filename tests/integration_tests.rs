//! Integration tests for the brand-tokens CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use brand_tokens::core::TokenTree;
use brand_tokens::render::template::extract_module_tokens;

const FILES: [&str; 3] = ["tokens.js", "tokens.cjs", "tokens.json"];

/// Helper to get a brand-tokens command
fn brand_tokens() -> Command {
    Command::cargo_bin("brand-tokens").unwrap()
}

/// Helper to create an empty package directory
fn setup_package() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("package.json"), "{\"name\": \"site\"}\n").unwrap();
    tmp
}

fn read_outputs(dir: &Path) -> Vec<Vec<u8>> {
    FILES
        .iter()
        .map(|name| fs::read(dir.join(name)).unwrap())
        .collect()
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    brand_tokens()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("design token"));
}

#[test]
fn test_version_displays() {
    brand_tokens()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("brand-tokens"));
}

#[test]
fn test_unknown_command_fails() {
    brand_tokens()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// ============================================================================
// Build Tests
// ============================================================================

#[test]
fn test_no_arguments_builds_into_dist_tokens() {
    let tmp = setup_package();

    brand_tokens()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Generated tokens.js"))
        .stdout(predicate::str::contains("✓ Generated tokens.cjs"))
        .stdout(predicate::str::contains("✓ Generated tokens.json"))
        .stdout(predicate::str::ends_with("\n\nToken generation complete!\n"));

    let out = tmp.path().join("dist/tokens");
    for name in FILES {
        assert!(out.join(name).is_file(), "{} missing", name);
    }
}

#[test]
fn test_build_from_subdirectory_uses_package_root() {
    let tmp = setup_package();
    let scripts = tmp.path().join("scripts");
    fs::create_dir_all(&scripts).unwrap();

    brand_tokens()
        .current_dir(&scripts)
        .arg("build")
        .assert()
        .success();

    assert!(tmp.path().join("dist/tokens/tokens.json").is_file());
    assert!(!scripts.join("dist").exists());
}

#[test]
fn test_build_twice_is_byte_identical() {
    let tmp = setup_package();
    let out = tmp.path().join("dist/tokens");

    brand_tokens().current_dir(tmp.path()).arg("build").assert().success();
    let first = read_outputs(&out);

    brand_tokens().current_dir(tmp.path()).arg("build").assert().success();
    let second = read_outputs(&out);

    assert_eq!(first, second);
}

#[test]
fn test_build_replaces_stale_files() {
    let tmp = setup_package();
    let out = tmp.path().join("dist/tokens");
    fs::create_dir_all(&out).unwrap();
    for name in FILES {
        fs::write(out.join(name), "// stale content that must disappear\n".repeat(500)).unwrap();
    }

    brand_tokens().current_dir(tmp.path()).arg("build").assert().success();

    for name in FILES {
        let content = fs::read_to_string(out.join(name)).unwrap();
        assert!(!content.contains("stale content"), "{} was merged", name);
    }
}

#[test]
fn test_build_quiet_prints_nothing() {
    let tmp = setup_package();

    brand_tokens()
        .current_dir(tmp.path())
        .args(["build", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_build_out_dir_flag() {
    let tmp = setup_package();

    brand_tokens()
        .current_dir(tmp.path())
        .args(["build", "--out-dir", "public/tokens"])
        .assert()
        .success();

    assert!(tmp.path().join("public/tokens/tokens.cjs").is_file());
    assert!(!tmp.path().join("dist").exists());
}

#[test]
fn test_build_with_project_flag() {
    let tmp = TempDir::new().unwrap();
    let site = tmp.path().join("site");
    fs::create_dir_all(&site).unwrap();

    brand_tokens()
        .current_dir(tmp.path())
        .args(["--project", "site", "build"])
        .assert()
        .success();

    assert!(site.join("dist/tokens/tokens.js").is_file());
}

#[test]
fn test_build_missing_project_fails() {
    let tmp = TempDir::new().unwrap();

    brand_tokens()
        .current_dir(tmp.path())
        .args(["--project", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_build_fails_when_output_directory_is_a_file() {
    let tmp = setup_package();
    fs::write(tmp.path().join("dist"), "not a directory").unwrap();

    brand_tokens()
        .current_dir(tmp.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create output directory"));
}

#[test]
fn test_project_config_selects_artifacts_and_directory() {
    let tmp = setup_package();
    fs::write(
        tmp.path().join("brand-tokens.yaml"),
        "out_dir: src/generated\nartifacts:\n  - json\n",
    )
    .unwrap();

    brand_tokens()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Generated tokens.json"))
        .stdout(predicate::str::contains("tokens.js\n").not());

    let out = tmp.path().join("src/generated");
    assert!(out.join("tokens.json").is_file());
    assert!(!out.join("tokens.js").exists());
    assert!(!out.join("tokens.cjs").exists());
}

// ============================================================================
// Output Content Tests
// ============================================================================

#[test]
fn test_outputs_round_trip_to_token_tree() {
    let tmp = setup_package();
    brand_tokens().current_dir(tmp.path()).arg("build").assert().success();

    let out = tmp.path().join("dist/tokens");
    let expected = TokenTree::brand();

    let json = fs::read_to_string(out.join("tokens.json")).unwrap();
    let parsed: TokenTree = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, expected);

    for name in ["tokens.js", "tokens.cjs"] {
        let module = fs::read_to_string(out.join(name)).unwrap();
        assert!(module.contains(&format!("const tokens = {};\n", json)), "{}", name);
        let embedded = extract_module_tokens(&module).unwrap();
        let parsed: TokenTree = serde_json::from_value(embedded).unwrap();
        assert_eq!(parsed, expected);
    }
}

#[test]
fn test_es_module_shape() {
    let tmp = setup_package();
    brand_tokens().current_dir(tmp.path()).arg("build").assert().success();

    let js = fs::read_to_string(tmp.path().join("dist/tokens/tokens.js")).unwrap();
    assert!(js.starts_with("/**\n * GivingTuesday Design Tokens\n"));
    assert!(js.contains("export const zIndex = tokens.zIndex;\n"));
    assert!(js.contains("export function isValidColorCombo(color1, color2) {\n"));
    assert!(js.ends_with("export default tokens;\n"));

    let exports: Vec<&str> = js
        .lines()
        .filter_map(|l| l.strip_prefix("export const "))
        .filter_map(|l| l.split(' ').next())
        .collect();
    insta::assert_snapshot!(
        exports.join(","),
        @"tokens,colors,semantic,theme,typography,spacing,borders,shadows,transitions,breakpoints,containers,zIndex,gradients,brandRules"
    );
}

#[test]
fn test_common_js_shape() {
    let tmp = setup_package();
    brand_tokens().current_dir(tmp.path()).arg("build").assert().success();

    let cjs = fs::read_to_string(tmp.path().join("dist/tokens/tokens.cjs")).unwrap();
    assert!(!cjs.contains("export "));
    assert!(cjs.contains("\nconst gradients = tokens.gradients;\n"));
    assert!(cjs.contains("\nfunction getFontSize(key) {\n  return typography.fontSizes[key] || null;\n}\n"));
    assert!(cjs.ends_with("  isTypographySafe,\n};\n"));
}

// ============================================================================
// Check / Print / Query / List Tests
// ============================================================================

#[test]
fn test_check_after_build_succeeds() {
    let tmp = setup_package();
    brand_tokens().current_dir(tmp.path()).arg("build").assert().success();

    brand_tokens()
        .current_dir(tmp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));
}

#[test]
fn test_check_detects_edited_and_missing_files() {
    let tmp = setup_package();
    brand_tokens().current_dir(tmp.path()).arg("build").assert().success();

    let out = tmp.path().join("dist/tokens");
    fs::write(out.join("tokens.js"), "export default {};\n").unwrap();
    fs::remove_file(out.join("tokens.json")).unwrap();

    brand_tokens()
        .current_dir(tmp.path())
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("stale"))
        .stdout(predicate::str::contains("missing"))
        .stderr(predicate::str::contains("out of date"));

    // check never writes
    assert!(!out.join("tokens.json").exists());
}

#[test]
fn test_print_json_matches_built_file() {
    let tmp = setup_package();
    brand_tokens().current_dir(tmp.path()).arg("build").assert().success();
    let built = fs::read(tmp.path().join("dist/tokens/tokens.json")).unwrap();

    brand_tokens()
        .args(["print", "json"])
        .assert()
        .success()
        .stdout(predicate::eq(built));
}

#[test]
fn test_print_rejects_unknown_artifact() {
    brand_tokens()
        .args(["print", "css"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_query_color_lookup() {
    brand_tokens()
        .args(["query", "color", "red"])
        .assert()
        .success()
        .stdout("#ED132E\n");

    brand_tokens()
        .args(["query", "color", "accent"])
        .assert()
        .success()
        .stdout("#0fb5c3\n");

    brand_tokens()
        .args(["query", "color", "doesNotExist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no color token named 'doesNotExist'"));
}

#[test]
fn test_query_spacing_and_font_size() {
    brand_tokens()
        .args(["query", "spacing", "4"])
        .assert()
        .success()
        .stdout("32px\n");

    brand_tokens()
        .args(["query", "font-size", "h1"])
        .assert()
        .success()
        .stdout("72px\n");
}

#[test]
fn test_query_brand_rules() {
    brand_tokens()
        .args(["query", "combo", "#ED132E", "#CAC7F8"])
        .assert()
        .success()
        .stdout("false\n");

    brand_tokens()
        .args(["query", "combo", "#CAC7F8", "#ED132E"])
        .assert()
        .success()
        .stdout("false\n");

    brand_tokens()
        .args(["query", "combo", "#000000", "#FFFFFF"])
        .assert()
        .success()
        .stdout("true\n");

    brand_tokens()
        .args(["query", "text-safe", "#6CF4FF"])
        .assert()
        .success()
        .stdout("false\n");

    brand_tokens()
        .args(["query", "text-safe", "#001548"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_list_shows_categories() {
    brand_tokens()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("typography"))
        .stdout(predicate::str::contains("brandRules"));
}

#[test]
fn test_completions_bash() {
    brand_tokens()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("brand-tokens"));
}
