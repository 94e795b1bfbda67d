#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the ballot-guard binary.
#[macro_export]
macro_rules! ballot_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("ballot-guard"))
    };
}

/// Header of a complete precinct-level results file.
pub const FULL_HEADER: &str =
    "county,precinct,office,district,party,candidate,votes,early_voting,election_day,mail,provisional";

/// A results file every suite accepts.
pub const CLEAN_RESULTS: &str = "\
county,precinct,office,district,party,candidate,votes,early_voting,election_day,mail,provisional
Adams,1,Governor,,DEM,Jane Doe,100,40,50,8,2
Adams,1,Governor,,REP,John Roe,90,30,50,9,1
Adams,2,Governor,,DEM,Jane Doe,75,25,40,10,0
";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a results file from a header and data rows.
    pub fn create_results(&self, relative_path: &str, header: &str, rows: &[&str]) {
        let mut content = format!("{header}\n");
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        self.create_file(relative_path, &content);
    }

    /// Creates a local ballot-guard config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".ballot-guard.toml", content);
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Reads a file from the temp directory.
    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
