//! Shared test harness for integration tests.
//!
//! Provides [`TestStore`]: a temporary directory holding an image folder and
//! a SQLite database seeded with the storefront's categories and products.

#![allow(dead_code)]

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use strive_db::schema::{apply_schema, BUNDLED_SCHEMA};
use strive_images::config::Config;

const SEED: &str = "
INSERT INTO categories (name) VALUES
    ('Men''s Jackets'), ('Men''s Footwear'), ('Outdoor'),
    ('Winter Sports'), ('Camping & Hiking'), ('Water Sports');

INSERT INTO products (id, name, price) VALUES
    (1, 'Trail Master Pro Bike', 899.0),
    (2, 'Performance T-Shirt', 29.0),
    (3, 'Trail Running Shoes', 119.0),
    (4, 'Lightweight Hiking Backpack', 89.0),
    (5, 'Alpine Explorer Insulated Jacket', 249.0),
    (6, 'Bike Repair Kit', 39.0),
    (16, 'Explorer 4-Person Tent', 329.0);
";

/// Temporary storefront database plus image directory.
pub struct TestStore {
    pub dir: TempDir,
    pub db_path: PathBuf,
    pub images: PathBuf,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let db_path = dir.path().join("strive.db");
        let images = dir.path().join("images");
        std::fs::create_dir(&images).expect("failed to create image dir");

        let conn = strive_db::connection::open(&db_path).expect("failed to open database");
        let report = apply_schema(&conn, BUNDLED_SCHEMA);
        assert_eq!(report.failed, 0);
        conn.execute_batch(SEED).expect("failed to seed database");

        Self {
            dir,
            db_path,
            images,
        }
    }

    /// Write an image file whose bytes are its own name.
    pub fn add_image(&self, name: &str) -> PathBuf {
        let path = self.images.join(name);
        std::fs::write(&path, name.as_bytes()).expect("failed to write image");
        path
    }

    pub fn conn(&self) -> Connection {
        strive_db::connection::open(&self.db_path).expect("failed to open database")
    }

    /// Default config pointed at this store, schema application disabled.
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.database.path = self.db_path.clone();
        config.images.dir = self.images.clone();
        config.schema.apply = false;
        config
    }

    /// Write a TOML config file and return its path.
    pub fn write_config(&self, extra: &str) -> PathBuf {
        let path = self.dir.path().join("strive-images.toml");
        let content = format!(
            "[database]\npath = {:?}\n\n[images]\ndir = {:?}\n\n{}",
            self.db_path.to_string_lossy(),
            self.images.to_string_lossy(),
            extra
        );
        std::fs::write(&path, content).expect("failed to write config");
        path
    }

    /// Write a schema whose foreign key violation only surfaces at commit.
    pub fn write_deferred_violation_schema(&self) -> PathBuf {
        let path = self.dir.path().join("deferred.sql");
        std::fs::write(
            &path,
            "CREATE TABLE IF NOT EXISTS audit (
                id INTEGER PRIMARY KEY,
                product_id INTEGER REFERENCES products(id) DEFERRABLE INITIALLY DEFERRED
            );
            INSERT INTO audit (product_id) VALUES (9999);
            ",
        )
        .expect("failed to write schema");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Number of stored images for a product at a display order.
pub fn images_at(conn: &Connection, product_id: i64, order: u32) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM product_images WHERE product_id = ?1 AND display_order = ?2",
        rusqlite::params![product_id, order],
        |row| row.get(0),
    )
    .expect("count query failed")
}

pub fn total_images(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM product_images", [], |row| row.get(0))
        .expect("count query failed")
}

/// Image bytes and MIME type stored on a category.
pub fn category_image(conn: &Connection, name: &str) -> (Option<Vec<u8>>, Option<String>) {
    conn.query_row(
        "SELECT image_data, image_type FROM categories WHERE name = ?1",
        [name],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
    .expect("category query failed")
}
