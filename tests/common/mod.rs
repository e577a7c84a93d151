#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn wellnest_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wellnest").unwrap();
    cmd.env_remove("WELLNEST_ROOT");
    cmd.env_remove("WELLNEST_LOG");
    cmd
}

/// Command run inside `root` with a fixed calendar day
pub fn wellnest_at(root: &Path, today: &str) -> Command {
    let mut cmd = wellnest_cmd();
    cmd.current_dir(root).arg("--today").arg(today);
    cmd
}

pub fn init(root: &Path) {
    wellnest_cmd().arg("init").arg(root).assert().success();
}

/// Pull the id printed in square brackets on the last line that has one
pub fn bracketed_id(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    text.lines()
        .rev()
        .find_map(|line| {
            let start = line.rfind('[')?;
            let end = line.rfind(']')?;
            (end > start + 1).then(|| line[start + 1..end].to_string())
        })
        .expect("no [id] in output")
}
