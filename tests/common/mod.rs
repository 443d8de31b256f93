#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn mealtrack_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mealtrack").unwrap();
    cmd.env_remove("MEALTRACK_ROOT");
    cmd.env_remove("MEALTRACK_LOG");
    cmd
}

/// Command running inside an initialized data root
pub fn in_root(root: &Path) -> Command {
    let mut cmd = mealtrack_cmd();
    cmd.current_dir(root);
    cmd
}

pub fn add_meal(root: &Path, name: &str, values: [&str; 4]) {
    in_root(root)
        .args(["meal", "add", name])
        .args(["--calories", values[0]])
        .args(["--protein", values[1]])
        .args(["--fat", values[2]])
        .args(["--carbs", values[3]])
        .assert()
        .success();
}
