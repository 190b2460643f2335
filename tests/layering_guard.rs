//! Layering guardrails for the workspace crates.
//!
//! `parseconf_core` is pure vocabulary and must stay dependency-free. `parseconf_syntax` performs no
//! I/O and must not pull in the CLI or logging-subscriber stack; those belong to the root crate.
//! These tests scan the member manifests and fail when a dependency crosses a layer.

/// Crate names listed in the `[dependencies]` table of a manifest.
fn dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_has_no_dependencies() {
    let manifest = include_str!("../crates/parseconf_core/Cargo.toml");
    assert_eq!(dependencies(manifest), Vec::<String>::new());
}

#[test]
fn syntax_stays_below_the_driver() {
    let manifest = include_str!("../crates/parseconf_syntax/Cargo.toml");
    let deps = dependencies(manifest);
    for forbidden in ["parseconf", "clap", "tracing-subscriber"] {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "`{forbidden}` must not appear in parseconf_syntax [dependencies]"
        );
    }
    assert!(deps.iter().any(|d| d == "parseconf_core"));
}

#[test]
fn root_uses_the_member_crates() {
    let deps = dependencies(include_str!("../Cargo.toml"));
    assert!(deps.iter().any(|d| d == "parseconf_core"));
    assert!(deps.iter().any(|d| d == "parseconf_syntax"));
}
