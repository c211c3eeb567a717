//! End-to-end ingestion runs against a seeded SQLite store.

mod common;

use assert_matches::assert_matches;
use common::{category_image, images_at, total_images, TestStore};
use strive_images::config::{ProductMode, WriteMode};
use strive_db::schema::SchemaReport;
use strive_images::ingest::Ingestor;

#[test]
fn test_full_run_binds_categories_and_products() {
    let store = TestStore::new();
    store.add_image("1.jpg");
    store.add_image("3.jpg");
    store.add_image("Men's Jackets_on.jpg");
    store.add_image("kırmızı mont_arka.jpg");
    store.add_image("çadır_iç.png");
    store.add_image("IMG_0423.jpg");
    store.add_image("notes.txt");

    let config = store.config();
    let mut conn = store.conn();
    let report = Ingestor::new(&config).run(&mut conn, false).unwrap();

    assert!(report.committed);
    assert_eq!(report.categories.updated, 2);
    assert_eq!(report.categories.missing_files, 4);
    assert_eq!(report.products.imported, 4);
    assert_eq!(report.products.failed, 0);

    let (data, mime) = category_image(&conn, "Men's Jackets");
    assert_eq!(data.as_deref(), Some(&b"1.jpg"[..]));
    assert_eq!(mime.as_deref(), Some("image/jpeg"));
    let (data, _) = category_image(&conn, "Outdoor");
    assert_eq!(data.as_deref(), Some(&b"3.jpg"[..]));
    let (data, _) = category_image(&conn, "Winter Sports");
    assert!(data.is_none());

    // Category files are never treated as product images
    assert_eq!(images_at(&conn, 5, 1), 1);
    assert_eq!(images_at(&conn, 5, 2), 1);
    assert_eq!(images_at(&conn, 16, 2), 2);
    assert_eq!(total_images(&conn), 4);
}

#[test]
fn test_generated_mode_is_idempotent() {
    let store = TestStore::new();
    store.add_image("1.jpg");
    store.add_image("product_5_1.jpg");
    store.add_image("product_5_2.PNG");

    let mut config = store.config();
    config.products.mode = ProductMode::Generated;

    let mut conn = store.conn();
    let ingestor = Ingestor::new(&config);
    ingestor.run(&mut conn, false).unwrap();
    let report = ingestor.run(&mut conn, false).unwrap();

    assert_eq!(report.products.imported, 2);
    assert_eq!(report.products.write_mode, WriteMode::Replace);
    assert_eq!(report.categories.updated, 1);
    assert_eq!(images_at(&conn, 5, 1), 1);
    assert_eq!(images_at(&conn, 5, 2), 1);
    assert_eq!(total_images(&conn), 2);

    let (data, _) = category_image(&conn, "Men's Jackets");
    assert_eq!(data.as_deref(), Some(&b"1.jpg"[..]));
}

#[test]
fn test_fuzzy_append_accumulates_across_runs() {
    let store = TestStore::new();
    store.add_image("tişört_on.jpg");

    let config = store.config();
    let mut conn = store.conn();
    let ingestor = Ingestor::new(&config);
    ingestor.run(&mut conn, false).unwrap();
    ingestor.run(&mut conn, false).unwrap();

    assert_eq!(images_at(&conn, 2, 1), 2);
}

#[test]
fn test_fuzzy_replace_keeps_one_image_per_slot() {
    let store = TestStore::new();
    store.add_image("tişört_on.jpg");

    let mut config = store.config();
    config.products.write_mode = Some(WriteMode::Replace);
    let mut conn = store.conn();
    let ingestor = Ingestor::new(&config);
    ingestor.run(&mut conn, false).unwrap();
    ingestor.run(&mut conn, false).unwrap();

    assert_eq!(images_at(&conn, 2, 1), 1);
}

#[test]
fn test_dry_run_rolls_back() {
    let store = TestStore::new();
    store.add_image("1.jpg");
    store.add_image("bisiklet_yan.jpg");

    let config = store.config();
    let mut conn = store.conn();
    let report = Ingestor::new(&config).run(&mut conn, true).unwrap();

    assert!(report.dry_run);
    assert!(!report.committed);
    assert_eq!(report.categories.updated, 1);
    assert_eq!(report.products.imported, 1);

    let (data, _) = category_image(&conn, "Men's Jackets");
    assert!(data.is_none());
    assert_eq!(total_images(&conn), 0);
}

#[test]
fn test_missing_schema_file_does_not_abort() {
    let store = TestStore::new();
    store.add_image("1.jpg");

    let mut config = store.config();
    config.schema.apply = true;
    config.schema.path = Some(store.path().join("missing.sql"));

    let mut conn = store.conn();
    let report = Ingestor::new(&config).run(&mut conn, false).unwrap();

    assert_matches!(report.schema, None);
    assert_eq!(report.categories.updated, 1);
    assert!(report.committed);
}

#[test]
fn test_schema_statement_failures_are_counted() {
    let store = TestStore::new();
    let schema = store.path().join("schema.sql");
    std::fs::write(
        &schema,
        "CREATE TABLE IF NOT EXISTS audit (id INTEGER PRIMARY KEY);\nINSERT INTO nowhere VALUES (1);\n",
    )
    .unwrap();

    let mut config = store.config();
    config.schema.apply = true;
    config.schema.path = Some(schema);

    let mut conn = store.conn();
    let report = Ingestor::new(&config).run(&mut conn, false).unwrap();

    assert_matches!(
        report.schema,
        Some(SchemaReport {
            executed: 1,
            failed: 1
        })
    );
    assert!(report.committed);
}

#[test]
fn test_bundled_schema_rerun_is_harmless() {
    let store = TestStore::new();
    store.add_image("çanta_arka.jpg");

    let mut config = store.config();
    config.schema.apply = true;

    let mut conn = store.conn();
    let report = Ingestor::new(&config).run(&mut conn, false).unwrap();

    assert_eq!(report.schema.unwrap().failed, 0);
    assert_eq!(images_at(&conn, 4, 2), 1);
}

#[test]
fn test_missing_image_dir_imports_nothing() {
    let store = TestStore::new();

    let mut config = store.config();
    config.images.dir = store.path().join("nope");

    let mut conn = store.conn();
    let report = Ingestor::new(&config).run(&mut conn, false).unwrap();

    assert_eq!(report.categories.missing_files, 6);
    assert_eq!(report.products.imported, 0);
    assert!(report.committed);
}

#[test]
fn test_mapped_mode_uses_table() {
    let store = TestStore::new();
    store.add_image("tshirt1.jpg");
    store.add_image("tshirt2.jpg");

    let mut config = store.config();
    config.products.mode = ProductMode::Mapped;

    let mut conn = store.conn();
    let report = Ingestor::new(&config).run(&mut conn, false).unwrap();

    assert_eq!(report.products.mode, ProductMode::Mapped);
    assert_eq!(report.products.imported, 2);
    assert_eq!(
        report.products.missing_files,
        config.products.mapped.len() - 2
    );
    assert_eq!(images_at(&conn, 2, 1), 1);
    assert_eq!(images_at(&conn, 2, 2), 1);
}

#[test]
fn test_dry_run_survives_transaction_control_in_schema() {
    let store = TestStore::new();
    store.add_image("1.jpg");
    store.add_image("tişört_on.jpg");
    let schema = store.path().join("dump.sql");
    std::fs::write(
        &schema,
        "BEGIN TRANSACTION;\nCREATE TABLE IF NOT EXISTS audit (id INTEGER PRIMARY KEY);\nCOMMIT;\n",
    )
    .unwrap();

    let mut config = store.config();
    config.schema.apply = true;
    config.schema.path = Some(schema);

    let mut conn = store.conn();
    let report = Ingestor::new(&config).run(&mut conn, true).unwrap();

    assert_matches!(
        report.schema,
        Some(SchemaReport {
            executed: 1,
            failed: 2
        })
    );
    assert_eq!(report.categories.updated, 1);
    assert_eq!(report.products.imported, 1);

    let (data, _) = category_image(&conn, "Men's Jackets");
    assert!(data.is_none());
    assert_eq!(total_images(&conn), 0);
    let audit: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE name = 'audit'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(audit, 0);
}

#[test]
fn test_failed_commit_is_reported() {
    let store = TestStore::new();
    store.add_image("1.jpg");
    let schema = store.write_deferred_violation_schema();

    let mut config = store.config();
    config.schema.apply = true;
    config.schema.path = Some(schema);

    let mut conn = store.conn();
    let report = Ingestor::new(&config).run(&mut conn, false).unwrap();

    assert!(!report.dry_run);
    assert!(!report.committed);
    assert_eq!(report.categories.updated, 1);
    assert!(report.to_string().ends_with("NOT committed"));

    let (data, _) = category_image(&conn, "Men's Jackets");
    assert!(data.is_none());
}
