use std::fs;
use std::io::Write;
use tempfile::tempdir;
use tilewave_tiles::loader::{load_from_file, load_from_str};
use tilewave_tiles::{Direction, LoadError, Socket, TileId};

const VALID_RULES: &str = r#"
(
    tiles: [
        (name: "grass", sockets: (0, 0, 0, 0)),
        (name: "road", sockets: (0, 1, 0, 1)),
    ],
)
"#;

#[test]
fn loads_tiles_in_declaration_order() {
    let (tileset, names) = load_from_str(VALID_RULES).expect("valid rules should load");
    assert_eq!(tileset.num_tiles(), 2);
    assert_eq!(names, vec!["grass".to_owned(), "road".to_owned()]);
    assert_eq!(tileset.socket(TileId(1), Direction::East), Some(Socket(1)));
    assert_eq!(tileset.socket(TileId(1), Direction::North), Some(Socket(0)));
}

#[test]
fn transforms_expand_and_label_variants() {
    let rules = r#"
(
    tiles: [
        (name: "bend", sockets: (1, 1, 0, 0)),
    ],
    transforms: ["rot90", "rot180", "rot270"],
)
"#;
    let (tileset, names) = load_from_str(rules).expect("valid rules should load");
    assert_eq!(tileset.num_tiles(), 4);
    assert_eq!(
        names,
        vec![
            "bend".to_owned(),
            "bend@rot90".to_owned(),
            "bend@rot180".to_owned(),
            "bend@rot270".to_owned(),
        ]
    );
    // rot90 of (1, 1, 0, 0) moves the west socket to north.
    assert_eq!(tileset.socket(TileId(1), Direction::North), Some(Socket(0)));
    assert_eq!(tileset.socket(TileId(1), Direction::East), Some(Socket(1)));
}

#[test]
fn rejects_empty_tile_list() {
    let result = load_from_str("(tiles: [])");
    assert!(matches!(result, Err(LoadError::InvalidData(_))));
}

#[test]
fn rejects_duplicate_tile_names() {
    let rules = r#"
(
    tiles: [
        (name: "grass", sockets: (0, 0, 0, 0)),
        (name: "grass", sockets: (1, 1, 1, 1)),
    ],
)
"#;
    let result = load_from_str(rules);
    match result {
        Err(LoadError::InvalidData(message)) => assert!(message.contains("grass")),
        other => panic!("expected InvalidData error, got {other:?}"),
    }
}

#[test]
fn rejects_unknown_transformation() {
    let rules = r#"
(
    tiles: [(name: "grass", sockets: (0, 0, 0, 0))],
    transforms: ["rot45"],
)
"#;
    assert!(matches!(
        load_from_str(rules),
        Err(LoadError::InvalidData(_))
    ));
}

#[test]
fn rejects_malformed_ron() {
    assert!(matches!(
        load_from_str("this is not ron"),
        Err(LoadError::Parse(_))
    ));
}

#[test]
fn loads_rules_from_disk() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("rules.ron");
    let mut file = fs::File::create(&path).expect("failed to create rule file");
    file.write_all(VALID_RULES.as_bytes())
        .expect("failed to write rule file");

    let (tileset, names) = load_from_file(&path).expect("rules on disk should load");
    assert_eq!(tileset.num_tiles(), 2);
    assert_eq!(names.len(), 2);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("does_not_exist.ron");
    assert!(matches!(load_from_file(&path), Err(LoadError::Io(_))));
}
