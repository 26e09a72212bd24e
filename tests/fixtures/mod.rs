use std::path::PathBuf;

pub fn get_test_fixture_path(fixture_name: Option<&str>) -> PathBuf {
    let manifests = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("manifests");
    match fixture_name {
        Some(fixture_name) => manifests.join(fixture_name),
        None => manifests,
    }
}
