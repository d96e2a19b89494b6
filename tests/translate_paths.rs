//! Integration tests: translate paths across formats with a fixed mount table
//! and check the documented clean/translate properties.

use wsl_path::{Format, MountTable, TranslateErrorKind, TranslateOptions, Translator};

fn mounts() -> MountTable {
    MountTable::from_vars([
        ("C_VOLUME_PATH", "/mnt/c"),
        ("D_VOLUME_PATH", "/mnt/backup"),
        ("WSL_UNC_PATH", r"\\fileserver\projects=/mnt/projects"),
        ("WSL_ROOTFS_PATH", r"C:\rootfs"),
    ])
}

fn translator() -> Translator {
    Translator::new(mounts(), TranslateOptions::default())
}

#[test]
fn clean_matches_documented_edge_cases() {
    let _ = env_logger::try_init();

    assert_eq!(Format::Unix.clean("/a/../../b"), "/b");
    assert_eq!(Format::Unix.clean(""), ".");
    assert_eq!(Format::Windows.clean("C:"), "C:.");
    assert_eq!(Format::Windows.clean("C:\\"), "C:\\");
    assert_eq!(Format::identify("foo.txt"), Format::Any);
    assert_eq!(Format::Any.clean("foo.txt"), "foo.txt");
}

#[test]
fn windows_drive_path_translates_to_mount_point() {
    let result = translator()
        .translate(Format::Windows, Format::Unix, "C:\\Windows\\System32\\..")
        .expect("translate");
    assert_eq!(result.path, "/mnt/c/Windows");
    assert!(!result.rootfs_fallback);
}

#[test]
fn longest_mount_point_selects_drive() {
    let result = translator()
        .translate(Format::Unix, Format::Windows, "/mnt/backup/andrew/file")
        .expect("translate");
    assert_eq!(result.path, "D:\\andrew\\file");
}

#[test]
fn rootfs_fallback_is_reported() {
    let result = translator()
        .translate(Format::Unix, Format::Windows, "/etc")
        .expect("translate");
    assert_eq!(result.path, "C:\\rootfs\\etc");
    assert!(result.rootfs_fallback);
}

#[test]
fn disabled_rootfs_fallback_fails() {
    let options = TranslateOptions {
        allow_rootfs_fallback: false,
        ..TranslateOptions::default()
    };
    let err = Translator::new(mounts(), options)
        .translate(Format::Unix, Format::Windows, "/etc")
        .expect_err("no mount should match");
    assert_eq!(err.kind(), TranslateErrorKind::NoMountMatch);
}

#[test]
fn absolute_paths_round_trip() {
    let t = translator();
    let cases = [
        (Format::Windows, Format::Unix, r"C:\Users\me\..\you\file.txt"),
        (Format::Windows, Format::Unix, r"D:\"),
        (Format::Windows, Format::Unix, r"\\fileserver\projects\rust\src"),
        (Format::Windows, Format::Unix, r"\\fileserver\projects"),
        (Format::Unix, Format::Windows, "/mnt/c/Program Files/./app"),
        (Format::Unix, Format::Windows, "/mnt/projects/a/b/../c"),
        (Format::Unix, Format::Windows, "/mnt/backup"),
    ];
    for (from, to, path) in cases {
        let there = t.translate(from, to, path).expect("forward");
        assert!(!there.rootfs_fallback, "unexpected fallback for {}", path);
        let back = t.translate(to, from, &there.path).expect("backward");
        assert_eq!(back.path, from.clean(path), "round trip failed for {}", path);
    }
}

#[test]
fn same_format_returns_cleaned_path() {
    let t = translator();
    let result = t
        .translate(Format::Unix, Format::Unix, "/x//y/./z/..")
        .expect("translate");
    assert_eq!(result.path, "/x/y");
    let result = t
        .translate(Format::Any, Format::Any, "foo.txt")
        .expect("translate");
    assert_eq!(result.path, "foo.txt");
}

#[test]
fn auto_detection_picks_opposite_format() {
    let t = translator();
    assert_eq!(t.translate_auto(r"C:\Temp").expect("windows").path, "/mnt/c/Temp");
    assert_eq!(t.translate_auto("/mnt/c/Temp").expect("unix").path, r"C:\Temp");
    assert_eq!(t.translate_auto("readme.md").expect("any").path, "readme.md");
}
