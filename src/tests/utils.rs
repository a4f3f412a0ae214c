use crate::db::{init_db, save_listings, Database};
use crate::domain::Listing;
use astra::{Body, Response};
use std::io::Read;
use std::ops::Deref;
use tempfile::TempDir;

/// A fresh database inside its own temp directory.
/// The directory (and the SQLite file) is removed when this is dropped.
pub struct TestDb {
    db: Database,
    dir: TempDir,
}

impl TestDb {
    pub fn dir(&self) -> &std::path::Path {
        self.dir.path()
    }
}

impl Deref for TestDb {
    type Target = Database;

    fn deref(&self) -> &Database {
        &self.db
    }
}

/// Initialize a fresh test DB using the production schema.
/// `name` only labels the file for debugging.
pub fn init_test_db(name: &str) -> TestDb {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("Failed to create temp dir: {e}"));
    let path = dir.path().join(format!("{name}.sqlite"));
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    TestDb { db, dir }
}

/// A test DB holding the two listings used throughout the search tests.
pub fn seeded_test_db(name: &str) -> TestDb {
    let db = init_test_db(name);
    save_listings(
        &db,
        &[
            Listing::new("A1", "house", 200000.0, "Austin")
                .with_title("Modern family house")
                .with_address("1210 W 6th St, Austin, TX"),
            Listing::new("A2", "apartment", 150000.0, "Dallas")
                .with_title("Downtown apartment")
                .with_address("400 Main St, Dallas, TX"),
        ],
    )
    .expect("Failed to seed listings");
    db
}

pub fn get(uri: &str) -> astra::Request {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

#[test]
fn test_db_files_are_removed_on_drop() {
    let db = init_test_db("cleanup");
    let dir = db.dir().to_path_buf();
    let file = std::path::PathBuf::from(db.path());

    assert!(file.starts_with(&dir));
    assert!(file.exists());

    drop(db);
    assert!(!dir.exists());
}
