#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Duration, NaiveDate};
use std::env;
use std::fs;
use std::path::PathBuf;

/// An isolated HOME with its own database path.
pub struct Sandbox {
    pub home: PathBuf,
    pub db: String,
}

impl Sandbox {
    pub fn new(name: &str) -> Self {
        let mut home: PathBuf = env::temp_dir();
        home.push(format!("pantrywatch_test_{}", name));
        fs::remove_dir_all(&home).ok();
        fs::create_dir_all(&home).expect("create sandbox home");
        let db = home.join("pantry.sqlite").to_string_lossy().to_string();
        Self { home, db }
    }

    /// Command with HOME pointing at the sandbox and the --db override set.
    pub fn cmd(&self) -> Command {
        let mut c = cargo_bin_cmd!("pantrywatch");
        c.env("HOME", &self.home)
            .env("APPDATA", &self.home)
            .env_remove("RUST_LOG")
            .args(["--db", &self.db]);
        c
    }

    pub fn init(&self) {
        self.cmd().args(["--test", "init"]).assert().success();
    }

    pub fn add(&self, name: &str, qty: &str, unit: &str, expires: NaiveDate) {
        let date = expires.format("%Y-%m-%d").to_string();
        self.cmd()
            .args(["add", name, qty, "--unit", unit, "--expires", &date])
            .assert()
            .success();
    }

    /// Write a config file into the sandbox's config directory.
    pub fn write_config(&self, yaml: &str) {
        let dir = self.home.join(".pantrywatch");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("pantrywatch.conf"), yaml).expect("write config");
    }

    pub fn stdout(&self, args: &[&str]) -> String {
        let out = self.cmd().args(args).output().expect("run pantrywatch");
        assert!(out.status.success(), "{:?} failed: {:?}", args, out);
        String::from_utf8_lossy(&out.stdout).to_string()
    }
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn days(offset: i64) -> NaiveDate {
    today() + Duration::days(offset)
}
