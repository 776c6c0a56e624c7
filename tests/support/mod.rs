#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command as AssertCommand;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A description long enough to clear the "very short" warning.
pub const GOOD_DESCRIPTION: &str =
    "Checks SKILL.md descriptors for schema problems before they are shared";

pub fn filler(len: usize) -> String {
    "x".repeat(len)
}

/// `count` numbered, non-empty lines.
pub fn body_lines(count: usize) -> String {
    (1..=count).map(|i| format!("line {i}\n")).collect()
}

pub fn descriptor(header: &str, body: &str) -> String {
    format!("---\n{header}\n---\n{body}")
}

pub struct SkillFixture {
    _tmp: TempDir,
    pub root: PathBuf,
    pub config_dir: PathBuf,
}

impl SkillFixture {
    pub fn new() -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("skills");
        let config_dir = tmp.path().join("config");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(&config_dir).unwrap();
        Self {
            _tmp: tmp,
            root,
            config_dir,
        }
    }

    pub fn skill_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Write raw SKILL.md content into `<root>/<dir>` and return the dir.
    pub fn write_skill(&self, dir: &str, content: &str) -> PathBuf {
        let skill_dir = self.skill_dir(dir);
        fs::create_dir_all(&skill_dir).unwrap();
        fs::write(skill_dir.join("SKILL.md"), content).unwrap();
        skill_dir
    }

    pub fn write_descriptor(&self, dir: &str, header: &str, body: &str) -> PathBuf {
        self.write_skill(dir, &descriptor(header, body))
    }

    /// A skill that passes every check without warnings.
    pub fn write_valid(&self, name: &str) -> PathBuf {
        self.write_descriptor(
            name,
            &format!("name: {name}\ndescription: {GOOD_DESCRIPTION}"),
            &body_lines(10),
        )
    }

    /// Drop a config.json where a per-user config would live under the
    /// fixture's XDG_CONFIG_HOME and return its path.
    pub fn write_user_config(&self, json: &str) -> PathBuf {
        let dir = self.config_dir.join("skillcheck");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        fs::write(&path, json).unwrap();
        path
    }

    pub fn cmd(&self) -> AssertCommand {
        let mut cmd = cargo_bin_cmd!("skillcheck");
        cmd.env("HOME", &self.config_dir)
            .env("XDG_CONFIG_HOME", &self.config_dir)
            .env_remove("RUST_LOG");
        cmd
    }
}

pub fn path_arg(p: &Path) -> String {
    p.to_string_lossy().into_owned()
}
