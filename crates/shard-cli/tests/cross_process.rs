//! Several `shard` processes writing the same key at once.

use std::process::Command;

use shard_store::{DiskStore, ObjectStore};

const BIN: &str = env!("CARGO_BIN_EXE_shard");

#[test]
fn concurrent_processes_converge() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("store");

    let payloads: Vec<Vec<u8>> = (0..6u8).map(|i| vec![b'a' + i; 64 * 1024]).collect();
    let mut children = Vec::new();
    for (i, payload) in payloads.iter().enumerate() {
        let input = dir.path().join(format!("input-{i}"));
        std::fs::write(&input, payload).unwrap();
        children.push(
            Command::new(BIN)
                .arg("--root")
                .arg(&root)
                .args(["--partitions", "4", "--levels", "2", "put", "shared.bin", "--file"])
                .arg(&input)
                .spawn()
                .unwrap(),
        );
    }
    for mut child in children {
        assert!(child.wait().unwrap().success());
    }

    let store = DiskStore::open(&root, 4, 2).unwrap();
    let stored = store.get("shared.bin").unwrap();
    assert!(payloads.contains(&stored));
}

#[test]
fn exists_exit_status() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("store");

    let status = Command::new(BIN)
        .arg("--root")
        .arg(&root)
        .args(["exists", "missing"])
        .output()
        .unwrap()
        .status;
    assert_eq!(status.code(), Some(1));

    let store = DiskStore::open(&root, 16, 2).unwrap();
    store.put_bytes("present", b"x").unwrap();
    let status = Command::new(BIN)
        .arg("--root")
        .arg(&root)
        .args(["exists", "present"])
        .output()
        .unwrap()
        .status;
    assert!(status.success());
}

#[test]
fn get_writes_payload_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("store");
    let store = DiskStore::open(&root, 16, 2).unwrap();
    store.put_bytes("reports/q3.csv", b"a,b\n").unwrap();

    let out = Command::new(BIN)
        .arg("--root")
        .arg(&root)
        .args(["get", "reports/q3.csv"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(out.stdout, b"a,b\n");
}
