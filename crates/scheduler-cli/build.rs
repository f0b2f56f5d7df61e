//! Embeds the commit and build date shown by `scheduler --version`.

use std::process::Command;

fn main() {
    println!("cargo:rustc-env=GIT_HASH={}", short_commit());
    println!(
        "cargo:rustc-env=BUILD_DATE={}",
        chrono::Utc::now().date_naive()
    );

    for watched in ["../../.git/HEAD", "../../.git/refs/heads/"] {
        println!("cargo:rerun-if-changed={}", watched);
    }
}

/// Short hash of HEAD, or "unknown" outside a git checkout.
fn short_commit() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|hash| hash.trim().to_owned())
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".to_owned())
}
