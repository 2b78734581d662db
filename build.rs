use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let version = env!("CARGO_PKG_VERSION");
    let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_default();
    let commit_date =
        git(&["log", "-1", "--format=%cd", "--date=format:%Y-%m-%d"]).unwrap_or_default();
    let is_dirty = git(&["status", "--porcelain"]).is_some_and(|s| !s.is_empty());
    let tag_at_head = git(&["tag", "--points-at", "HEAD"]).is_some_and(|s| {
        s.lines()
            .any(|tag| tag == format!("v{}", version) || tag == version)
    });

    // Release builds report the bare version; anything else gets "(dev <hash> <date>)".
    let build = if hash.is_empty() || (tag_at_head && !is_dirty) {
        String::new()
    } else {
        format!(" (dev {} {})", hash, commit_date)
    };
    println!("cargo:rustc-env=ROSTER_BUILD={}", build);
}
