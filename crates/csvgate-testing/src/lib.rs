mod test_fixture;

pub use test_fixture::TestFixture;

/// Header shared by the "clean" sample files
pub const SAMPLE_HEADER: &str = "id,name,value";

/// Required columns used by most scenarios
pub const SAMPLE_REQUIRED_COLS: &str = "id,name";
