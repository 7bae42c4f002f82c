use {
    csvgate_headers::{Summary, DEFAULT_DATA_DIR, DEFAULT_REPORT_PATH},
    std::{
        fs,
        path::{Path, PathBuf},
    },
    tempfile::TempDir,
};

/// Scratch working directory laid out the way `csvgate` expects by default:
/// CSV inputs under `data/`, report under `report/`.
pub struct TestFixture {
    temp_dir: TempDir,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap_or_else(|e| panic!("Failed to create temp dir: {e}"));
        Self { temp_dir }
    }

    /// Working directory to run `csvgate` from
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root().join(DEFAULT_DATA_DIR)
    }

    pub fn default_report_path(&self) -> PathBuf {
        self.root().join(DEFAULT_REPORT_PATH)
    }

    /// Write `contents` verbatim to `data/<name>`, returning its relative path.
    pub fn write_data_file(&self, name: &str, contents: &[u8]) -> PathBuf {
        self.write_file(Path::new(DEFAULT_DATA_DIR).join(name), contents)
    }

    /// Write a CSV under `data/` with `header` as its first line and `rows` after it.
    pub fn write_csv(&self, name: &str, header: &str, rows: &[&str]) -> PathBuf {
        let mut contents = String::new();
        for line in std::iter::once(&header).chain(rows) {
            contents.push_str(line);
            contents.push('\n');
        }
        self.write_data_file(name, contents.as_bytes())
    }

    /// Write `contents` to a path relative to [`root`](Self::root).
    pub fn write_file<P: AsRef<Path>>(&self, relative: P, contents: &[u8]) -> PathBuf {
        let relative = relative.as_ref();
        let full = self.root().join(relative);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("Failed to create {}: {e}", parent.display()));
        }
        fs::write(&full, contents)
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", full.display()));
        relative.to_path_buf()
    }

    pub fn read_report_bytes<P: AsRef<Path>>(&self, relative: P) -> Vec<u8> {
        let full = self.root().join(relative);
        fs::read(&full).unwrap_or_else(|e| panic!("Failed to read {}: {e}", full.display()))
    }

    pub fn read_report<P: AsRef<Path>>(&self, relative: P) -> Summary {
        let bytes = self.read_report_bytes(relative);
        serde_json::from_slice(&bytes).unwrap_or_else(|e| panic!("Report is not a summary: {e}"))
    }

    pub fn read_default_report(&self) -> Summary {
        self.read_report(DEFAULT_REPORT_PATH)
    }

    pub fn exists<P: AsRef<Path>>(&self, relative: P) -> bool {
        self.root().join(relative).exists()
    }
}
