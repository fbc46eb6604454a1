use std::fs;

use tempfile::TempDir;
use tilemap_content::ContentFactory;
use tilemap_core::{
    CellBounds, Position, ScanBounds, SnapshotIssue, SparseGrid, TerrainKind, TileCatalogEntry,
    TileGrid, TileType,
};
use tilemap_runtime::{
    FileSnapshotRepository, RepositoryError, RuntimeError, SaveConfig, SnapshotFormat,
    SnapshotRepository, SnapshotService,
};

const CATALOG: &str = r#"(
    tiles: [
        (name: "grass_01", label: Some("Grass")),
        (name: "water_01", label: Some("Water"), terrain: Some(Water)),
    ],
)"#;

const LAYOUTS: &str = r#"(
    grids: [
        (name: "Ground", tiles: [(0, 0, "grass_01"), (1, 0, "grass_01"), (2, 0, "water_01")]),
        (name: "Decor"),
    ],
)"#;

fn content_dir(save_dir: &std::path::Path, format: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tiles.ron"), CATALOG).unwrap();
    fs::write(dir.path().join("layouts.ron"), LAYOUTS).unwrap();
    fs::write(
        dir.path().join("save.toml"),
        format!(
            "save_dir = {:?}\nformat = \"{}\"\n",
            save_dir.display().to_string(),
            format
        ),
    )
    .unwrap();
    dir
}

fn config_in(dir: &TempDir) -> SaveConfig {
    SaveConfig {
        save_dir: Some(dir.path().to_path_buf()),
        ..SaveConfig::default()
    }
}

#[test]
fn saved_json_matches_documented_shape() {
    let save_dir = TempDir::new().unwrap();
    let grass = TileType::with_terrain("Grass", TerrainKind::Floor);
    let water = TileType::with_terrain("Water", TerrainKind::Water);

    let service = SnapshotService::builder()
        .config(config_in(&save_dir))
        .catalog([
            TileCatalogEntry::new("grass_01", grass.clone()),
            TileCatalogEntry::new("water_01", water.clone()),
        ])
        .grid(
            "Ground",
            SparseGrid::with_tiles([
                (Position::new(0, 0), grass.clone()),
                (Position::new(1, 0), grass),
                (Position::new(2, 0), water),
            ]),
        )
        .build()
        .unwrap();

    service.save().unwrap();

    let text = fs::read_to_string(save_dir.path().join("tilemapData.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {
                "key": "Ground",
                "tiles": [
                    { "position": { "x": 0, "y": 0, "z": 0 }, "tile": "grass_01" },
                    { "position": { "x": 1, "y": 0, "z": 0 }, "tile": "grass_01" },
                    { "position": { "x": 2, "y": 0, "z": 0 }, "tile": "water_01" }
                ]
            }
        ])
    );
}

#[test]
fn content_directory_drives_a_bincode_round_trip() {
    let save_dir = TempDir::new().unwrap();
    let content = content_dir(save_dir.path(), "bincode");
    let factory = ContentFactory::new(content.path());

    let mut service = SnapshotService::<SparseGrid>::builder()
        .content(&factory)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(service.config().format, SnapshotFormat::Bincode);
    assert_eq!(service.grids().len(), 2);

    let report = service.save().unwrap();
    assert_eq!(report.grids, 2);
    assert_eq!(report.records, 3);
    assert!(save_dir.path().join("tilemapData.bin").exists());

    let grass = service.table().resolve("grass_01").cloned().unwrap();
    let ground = service.grid_mut("Ground").unwrap();
    ground.clear_tile(Position::new(2, 0));
    ground.set_tile(Position::new(9, 9), grass.clone());
    service
        .grid_mut("Decor")
        .unwrap()
        .set_tile(Position::new(4, 4), grass);

    let report = service.load().unwrap().unwrap();

    assert_eq!(report.restored_grids, 2);
    assert_eq!(report.applied, 3);
    let ground = service.grid("Ground").unwrap();
    assert_eq!(ground.occupied_count(), 3);
    assert_eq!(
        ground.tile(Position::new(2, 0)).map(|tile| tile.label()),
        Some("Water")
    );
    assert!(!ground.has_tile(Position::new(9, 9)));
    assert_eq!(service.grid("Decor").unwrap().occupied_count(), 0);
}

#[test]
fn fixed_bounds_limit_what_is_saved() {
    let save_dir = TempDir::new().unwrap();
    let grass = TileType::with_terrain("Grass", TerrainKind::Floor);
    let config = SaveConfig {
        bounds: ScanBounds::Fixed(CellBounds::new(0, 0, 2, 2)),
        ..config_in(&save_dir)
    };

    let service = SnapshotService::builder()
        .config(config)
        .catalog([TileCatalogEntry::new("grass_01", grass.clone())])
        .grid(
            "Ground",
            SparseGrid::with_tiles([
                (Position::new(1, 1), grass.clone()),
                (Position::new(5, 5), grass),
            ]),
        )
        .build()
        .unwrap();

    let (document, _) = service.encode();

    assert_eq!(document.record_count(), 1);
    assert_eq!(
        document.grid("Ground").unwrap().tiles[0].position.position(),
        Position::new(1, 1)
    );
}

#[test]
fn hand_edited_snapshot_reports_skipped_data() {
    let save_dir = TempDir::new().unwrap();
    let grass = TileType::with_terrain("Grass", TerrainKind::Floor);
    let path = save_dir.path().join("tilemapData.json");
    fs::write(
        &path,
        r#"[
            {"key": "Ground", "tiles": [
                {"position": {"x": 0, "y": 0}, "tile": "grass_01"},
                {"position": {"x": 1, "y": 0, "z": 3}, "tile": "lava_01"}
            ]},
            {"key": "Ceiling", "tiles": []}
        ]"#,
    )
    .unwrap();

    let mut service = SnapshotService::builder()
        .catalog([TileCatalogEntry::new("grass_01", grass)])
        .grid("Ground", SparseGrid::new())
        .repository(FileSnapshotRepository::open(&path, SnapshotFormat::Json))
        .build()
        .unwrap();

    let report = service.load().unwrap().unwrap();

    assert!(!report.is_complete());
    assert_eq!(report.applied, 1);
    assert_eq!(report.skipped_records, 1);
    assert_eq!(report.skipped_grids, vec!["Ceiling".to_string()]);
    assert!(report.issues.contains(&SnapshotIssue::UnknownGrid {
        grid: "Ceiling".into()
    }));
    assert_eq!(service.grid("Ground").unwrap().occupied_count(), 1);
}

#[test]
fn delete_removes_snapshot_file() {
    let save_dir = TempDir::new().unwrap();
    let repo = FileSnapshotRepository::new(save_dir.path(), "world.json", SnapshotFormat::Json)
        .unwrap();

    let service = SnapshotService::<SparseGrid>::builder()
        .repository(repo.clone())
        .build()
        .unwrap();

    service.save().unwrap();
    assert!(repo.exists());

    service.delete_snapshot().unwrap();
    assert!(!service.has_snapshot());
}

#[test]
fn unmapped_tiles_are_counted_on_save() {
    let save_dir = TempDir::new().unwrap();
    let grass = TileType::with_terrain("Grass", TerrainKind::Floor);
    let shrub = TileType::with_terrain("Shrub", TerrainKind::Custom(7));

    let service = SnapshotService::builder()
        .config(config_in(&save_dir))
        .catalog([TileCatalogEntry::new("grass_01", grass.clone())])
        .grid(
            "Ground",
            SparseGrid::with_tiles([
                (Position::new(0, 0), grass),
                (Position::new(3, 1), shrub),
            ]),
        )
        .build()
        .unwrap();

    let report = service.save().unwrap();

    assert!(!report.is_lossless());
    assert_eq!(report.records, 1);
    assert_eq!(report.unmapped, 1);
    assert_eq!(
        report.issues,
        vec![SnapshotIssue::UnmappedTileOnSave {
            grid: "Ground".into(),
            position: Position::new(3, 1),
            label: "Shrub".into(),
        }]
    );

    let saved = FileSnapshotRepository::open(
        save_dir.path().join("tilemapData.json"),
        SnapshotFormat::Json,
    )
    .load()
    .unwrap()
    .unwrap();
    assert_eq!(saved.record_count(), 1);
}

#[test]
fn malformed_snapshot_fails_without_touching_grids() {
    let save_dir = TempDir::new().unwrap();
    let grass = TileType::with_terrain("Grass", TerrainKind::Floor);
    fs::write(
        save_dir.path().join("tilemapData.json"),
        r#"[{"key": "Ground", "tiles": [{"position": {"x": 0}"#,
    )
    .unwrap();

    let mut service = SnapshotService::builder()
        .config(config_in(&save_dir))
        .catalog([TileCatalogEntry::new("grass_01", grass.clone())])
        .grid(
            "Ground",
            SparseGrid::with_tiles([(Position::new(4, 4), grass.clone())]),
        )
        .build()
        .unwrap();

    let result = service.load();

    assert!(matches!(
        result,
        Err(RuntimeError::Repository(RepositoryError::Json(_)))
    ));
    let ground = service.grid("Ground").unwrap();
    assert_eq!(ground.occupied_count(), 1);
    assert_eq!(ground.tile(Position::new(4, 4)), Some(&grass));
}
