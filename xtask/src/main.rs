//! XTask - build automation for waktu
//!
//! # Usage
//! ```sh
//! cargo xtask dist-web              # Build the WASM package into pkg/
//! cargo xtask build-all             # Release build + WASM
//! cargo xtask sync-versions         # Copy the workspace version into pkg/
//! cargo xtask publish-crates -n     # Validate crates.io publishing
//! ```

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let dry_run = args.iter().any(|a| a == "--dry-run" || a == "-n");

    match args[1].as_str() {
        "dist-web" => dist_web()?,
        "build-all" => build_all()?,
        "sync-versions" => sync_versions()?,
        "publish-crates" => publish_crates(dry_run)?,
        "-h" | "--help" | "help" => print_usage(),
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_usage() {
    println!(
        r#"
waktu xtask

USAGE:
    cargo xtask <COMMAND> [OPTIONS]

COMMANDS:
    dist-web        Build the WASM bindings with wasm-pack
                    Output: dist/web/, pkg/
    build-all       Release build of the workspace, then dist-web
    sync-versions   Copy the workspace version into pkg/package.json
    publish-crates  Publish the crates to crates.io in dependency order

OPTIONS:
    --dry-run, -n   Validate without publishing
"#
    );
}

// =============================================================================
// Helpers
// =============================================================================

fn project_root() -> Result<PathBuf> {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .context("Failed to find project root")?
        .to_path_buf();
    Ok(root)
}

fn run_cmd_in_dir(dir: &Path, cmd: &str, args: &[&str]) -> Result<()> {
    println!("  → [{}] {} {}", dir.display(), cmd, args.join(" "));

    let status = Command::new(cmd)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to start: {} {}", cmd, args.join(" ")))?;

    if !status.success() {
        bail!("Command '{}' failed with exit code: {:?}", cmd, status.code());
    }
    Ok(())
}

fn run_cmd(cmd: &str, args: &[&str]) -> Result<()> {
    run_cmd_in_dir(&project_root()?, cmd, args)
}

fn command_exists(cmd: &str) -> bool {
    let finder = if cfg!(windows) { "where" } else { "which" };
    Command::new(finder)
        .arg(cmd)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Reads `version` from the `[workspace.package]` table of the root manifest.
fn read_workspace_version() -> Result<String> {
    let content = fs::read_to_string(project_root()?.join("Cargo.toml"))?;
    let mut in_package = false;
    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('[') {
            in_package = line == "[workspace.package]";
            continue;
        }
        if in_package && line.starts_with("version") {
            if let Some(version) = line.split('"').nth(1) {
                return Ok(version.to_string());
            }
        }
    }
    bail!("Could not find [workspace.package] version in Cargo.toml")
}

// =============================================================================
// Task: sync-versions
// =============================================================================

fn sync_versions() -> Result<()> {
    let version = read_workspace_version()?;
    println!("Syncing version {} ...", version);
    update_json_version(&project_root()?.join("pkg/package.json"), &version)?;
    Ok(())
}

fn update_json_version(path: &Path, version: &str) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }

    let content = fs::read_to_string(path)?;
    let updated = content
        .lines()
        .map(|line| {
            if line.trim().starts_with("\"version\"") {
                format!("  \"version\": \"{}\",", version)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    fs::write(path, updated)?;
    println!("  Updated {}", path.display());
    Ok(())
}

// =============================================================================
// Task: dist-web
// =============================================================================

fn dist_web() -> Result<()> {
    println!("\nBuilding WASM package...\n");

    let root = project_root()?;
    let wasm_dir = root.join("bindings").join("waktu_wasm");
    let dist_web = root.join("dist").join("web");
    let pkg_dir = root.join("pkg");

    if !command_exists("wasm-pack") {
        println!("  wasm-pack not found, installing...");
        run_cmd("cargo", &["install", "wasm-pack"])?;
    }

    for (target, out) in [("web", &dist_web), ("nodejs", &pkg_dir)] {
        run_cmd_in_dir(
            &wasm_dir,
            "wasm-pack",
            &["build", "--target", target, "--out-dir", out.to_string_lossy().as_ref(), "--out-name", "waktu"],
        )?;
    }

    let pkg_json = pkg_dir.join("package.json");
    if pkg_json.exists() {
        let content = fs::read_to_string(&pkg_json)?;
        fs::write(&pkg_json, content.replace("\"name\": \"waktu-wasm\"", "\"name\": \"waktu\""))?;
    }
    sync_versions()?;

    println!("\nWASM build complete: dist/web/, pkg/");
    Ok(())
}

// =============================================================================
// Task: publish-crates
// =============================================================================

/// Crate name and directory, leaves first, facade last.
const WORKSPACE_CRATES: &[(&str, &str)] = &[
    ("waktu-types", "crates/waktu-types"),
    ("waktu-calendar", "crates/waktu-calendar"),
    ("waktu-astronomy", "crates/waktu-astronomy"),
    ("waktu-cities", "crates/waktu-cities"),
    ("waktu-location", "crates/waktu-location"),
    ("waktu-network", "crates/waktu-network"),
    ("waktu-notify", "crates/waktu-notify"),
    ("waktu-core", "crates/waktu_core"),
    ("waktu", "crates/waktu"),
];

fn publish_crates(dry_run: bool) -> Result<()> {
    let root = project_root()?;

    for (name, dir) in WORKSPACE_CRATES {
        println!("  Publishing {}...", name);

        let mut args = vec!["publish"];
        if dry_run {
            args.push("--dry-run");
        }

        let output = Command::new("cargo")
            .args(&args)
            .current_dir(root.join(dir))
            .output()
            .with_context(|| format!("Failed to run cargo publish for {}", name))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if output.status.success() {
            println!("  {} ok", name);
        } else if stderr.contains("already exists") {
            println!("  {} already published, skipping", name);
            continue;
        } else {
            eprintln!("{}", String::from_utf8_lossy(&output.stdout));
            eprintln!("{}", stderr);
            bail!("Failed to publish {}", name);
        }

        if !dry_run {
            // crates.io index needs time before dependents resolve
            std::thread::sleep(std::time::Duration::from_secs(30));
        }
    }

    Ok(())
}

// =============================================================================
// Task: build-all
// =============================================================================

fn build_all() -> Result<()> {
    run_cmd("cargo", &["build", "--release", "-p", "waktu", "--all-features"])?;
    dist_web()?;
    println!("\nAll builds complete: target/release, dist/web/, pkg/");
    Ok(())
}
