//! Integration tests for the intake pipeline.
//!
//! These tests run full inbound transfers end to end: resolve a transfer
//! reference, decode the sender metadata, copy the payload into a received
//! directory, and persist the document record.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use filefly_core::codec::TaggedFilename;
use filefly_core::error::Error;
use filefly_core::intake::{ContentResolver, IntakeHandler, IntakeOptions, TransferRef};
use filefly_core::store::DocumentStore;

fn create_inbound_file(dir: &Path, encoded_name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(encoded_name);
    fs::write(&path, content).unwrap();
    path
}

/// Count files present in the received directory (zero if never created).
fn received_file_count(received_dir: &Path) -> usize {
    if !received_dir.exists() {
        return 0;
    }
    fs::read_dir(received_dir).unwrap().count()
}

#[test]
fn test_local_file_intake_stores_record_and_payload() {
    let temp_dir = TempDir::new().unwrap();
    let received_dir = temp_dir.path().join("received");
    let content = b"quarterly numbers";
    let source = create_inbound_file(temp_dir.path(), "Smith_Jane_report.pdf", content);

    let store = DocumentStore::open_in_memory().unwrap();
    let handler = IntakeHandler::new(&received_dir);

    let reference = TransferRef::parse(&format!("file://{}", source.display())).unwrap();
    let receipt = handler.handle(&store, &reference).unwrap();

    assert_eq!(receipt.record.filename, "report.pdf");
    assert_eq!(receipt.record.owner_first_name, "Jane");
    assert_eq!(receipt.record.owner_last_name, "Smith");
    assert_eq!(receipt.saved_to, received_dir.join("report.pdf"));

    let saved = fs::read(&receipt.saved_to).unwrap();
    assert_eq!(saved, content);

    let records = store.get_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0], receipt.record);
}

#[test]
fn test_prefixed_intake_strips_transport_prefix() {
    let temp_dir = TempDir::new().unwrap();
    let received_dir = temp_dir.path().join("received");
    let source = create_inbound_file(temp_dir.path(), "filesDoe_John_slides_final.pptx", b"deck");

    let store = DocumentStore::open_in_memory().unwrap();
    let handler = IntakeHandler::new(&received_dir).with_options(IntakeOptions {
        strip_transport_prefix: true,
    });

    let reference = TransferRef::LocalFile(source);
    let receipt = handler.handle(&store, &reference).unwrap();

    // Underscores past the second delimiter belong to the original name
    assert_eq!(receipt.record.filename, "slides_final.pptx");
    assert_eq!(receipt.record.owner_last_name, "Doe");
    assert!(received_dir.join("slides_final.pptx").exists());
}

#[test]
fn test_unresolvable_reference_leaves_no_trace() {
    let temp_dir = TempDir::new().unwrap();
    let received_dir = temp_dir.path().join("received");

    let store = DocumentStore::open_in_memory().unwrap();

    let err = TransferRef::parse("ftp://host/Smith_Jane_report.pdf").unwrap_err();
    assert!(matches!(err, Error::UnresolvedSource(_)));

    // Unknown content authority also fails resolution, after parsing
    let handler = IntakeHandler::new(&received_dir);
    let reference = TransferRef::parse("content://downloads/tmp/Smith_Jane_report.pdf").unwrap();
    let err = handler.handle(&store, &reference).unwrap_err();
    assert!(matches!(err, Error::UnresolvedSource(_)));

    assert_eq!(store.get_all().unwrap().len(), 0);
    assert_eq!(received_file_count(&received_dir), 0);
}

#[test]
fn test_malformed_name_aborts_before_copy() {
    let temp_dir = TempDir::new().unwrap();
    let received_dir = temp_dir.path().join("received");
    let source = create_inbound_file(temp_dir.path(), "untagged.pdf", b"payload");

    let store = DocumentStore::open_in_memory().unwrap();
    let handler = IntakeHandler::new(&received_dir);

    let err = handler
        .handle(&store, &TransferRef::LocalFile(source))
        .unwrap_err();
    assert!(matches!(err, Error::MalformedName(_)));
    assert!(err.is_pre_copy());

    assert_eq!(store.get_all().unwrap().len(), 0);
    assert_eq!(received_file_count(&received_dir), 0);
}

#[test]
fn test_missing_source_copies_nothing_and_persists_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let received_dir = temp_dir.path().join("received");

    let store = DocumentStore::open_in_memory().unwrap();
    let handler = IntakeHandler::new(&received_dir);

    let reference = TransferRef::LocalFile(temp_dir.path().join("Smith_Jane_ghost.pdf"));
    let err = handler.handle(&store, &reference).unwrap_err();
    assert!(matches!(err, Error::Io(_)));

    assert_eq!(store.get_all().unwrap().len(), 0);
    assert_eq!(received_file_count(&received_dir), 0);
}

#[test]
fn test_content_reference_resolved_by_authority() {
    let temp_dir = TempDir::new().unwrap();
    let received_dir = temp_dir.path().join("received");
    let source = create_inbound_file(temp_dir.path(), "Lee_Ana_photo.png", b"pixels");

    let store = DocumentStore::open_in_memory().unwrap();
    let handler = IntakeHandler::new(&received_dir);

    // content://media/<abs path without leading slash>
    let locator = format!(
        "content://media{}",
        source.display()
    );
    let reference = TransferRef::parse(&locator).unwrap();
    let receipt = handler.handle(&store, &reference).unwrap();

    assert_eq!(receipt.record.filename, "photo.png");
    assert!(received_dir.join("photo.png").exists());
}

#[test]
fn test_custom_resolver_is_honored() {
    struct FixedResolver(PathBuf);

    impl ContentResolver for FixedResolver {
        fn resolve(&self, _locator: &str) -> filefly_core::Result<PathBuf> {
            Ok(self.0.clone())
        }
    }

    let temp_dir = TempDir::new().unwrap();
    let received_dir = temp_dir.path().join("received");
    let source = create_inbound_file(temp_dir.path(), "Reyes_Luis_notes.txt", b"notes");

    let store = DocumentStore::open_in_memory().unwrap();
    let handler =
        IntakeHandler::new(&received_dir).with_resolver(Box::new(FixedResolver(source)));

    let reference = TransferRef::parse("content://anything/at-all").unwrap();
    let receipt = handler.handle(&store, &reference).unwrap();

    assert_eq!(receipt.record.filename, "notes.txt");
}

#[test]
fn test_reintake_overwrites_payload_and_adds_row() {
    let temp_dir = TempDir::new().unwrap();
    let received_dir = temp_dir.path().join("received");

    let store = DocumentStore::open_in_memory().unwrap();
    let handler = IntakeHandler::new(&received_dir);

    let first = create_inbound_file(temp_dir.path(), "Smith_Jane_memo.txt", b"v1");
    handler
        .handle(&store, &TransferRef::LocalFile(first))
        .unwrap();

    let inner = temp_dir.path().join("again");
    fs::create_dir_all(&inner).unwrap();
    let second = create_inbound_file(&inner, "Smith_Jane_memo.txt", b"v2 with more");
    handler
        .handle(&store, &TransferRef::LocalFile(second))
        .unwrap();

    // Disk keeps the newest payload; the store keeps one row per arrival
    assert_eq!(fs::read(received_dir.join("memo.txt")).unwrap(), b"v2 with more");
    assert_eq!(store.get_all().unwrap().len(), 2);
}

#[test]
fn test_round_trip_send_shape() {
    // The exact scenario from the transfer contract
    let tag = TaggedFilename::new("Smith", "Jane", "report.pdf").unwrap();
    assert_eq!(tag.encode(), "Smith_Jane_report.pdf");

    let decoded = TaggedFilename::decode("Smith_Jane_report.pdf").unwrap();
    assert_eq!(decoded.last_name, "Smith");
    assert_eq!(decoded.first_name, "Jane");
    assert_eq!(decoded.original_name, "report.pdf");
}
