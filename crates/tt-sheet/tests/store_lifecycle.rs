//! Store lifecycle integration tests for tt-sheet.

use std::fs;

use serde_json::json;
use tempfile::TempDir;
use tt_sheet::{
    AttributeField, AttributeKind, FileStorage, GameState, LoadOrigin, MonsterUpdate, Mutation,
    RecordStore, SheetConfig, Storage, TextField,
};

fn config(dir: &TempDir) -> SheetConfig {
    SheetConfig::default()
        .with_seed(7)
        .with_save_dir(dir.path())
}

fn open(dir: &TempDir) -> RecordStore<FileStorage> {
    RecordStore::open_default(&config(dir)).unwrap()
}

fn set_attr(store: &mut RecordStore<FileStorage>, attribute: AttributeKind, value: i64) {
    for field in [AttributeField::Initial, AttributeField::Current] {
        store
            .apply(Mutation::AdjustAttribute {
                attribute,
                field,
                delta: value,
            })
            .unwrap();
    }
}

#[test]
fn sheet_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let saved = {
        let mut store = open(&dir);
        assert_eq!(store.origin(), LoadOrigin::Fresh);
        set_attr(&mut store, AttributeKind::Skill, 11);
        set_attr(&mut store, AttributeKind::Stamina, 20);
        set_attr(&mut store, AttributeKind::Luck, 9);
        store
            .apply(Mutation::AddMonster {
                name: "Goblin".to_string(),
            })
            .unwrap();
        let id = store.state().monsters[0].id.clone();
        store
            .apply(Mutation::UpdateMonster {
                id,
                update: MonsterUpdate::Stamina(5),
            })
            .unwrap();
        store
            .apply(Mutation::AddSpell {
                name: "Levitation".to_string(),
            })
            .unwrap();
        store
            .apply(Mutation::SetText {
                field: TextField::Gold,
                value: "12 + ring".to_string(),
            })
            .unwrap();
        store
            .apply(Mutation::SetText {
                field: TextField::CurrentParagraph,
                value: "212".to_string(),
            })
            .unwrap();
        store.state().clone()
    };

    let store = open(&dir);
    assert_eq!(store.origin(), LoadOrigin::Loaded);
    assert_eq!(*store.state(), saved);
    assert_eq!(store.state().monsters[0].stamina, 5);
    assert_eq!(store.state().spells[0].name, "Levitation");
}

#[test]
fn first_release_save_is_migrated() {
    let dir = TempDir::new().unwrap();
    let old = json!({
        "skill": { "current": 10, "initial": 12 },
        "stamina": { "current": 3, "initial": 18 },
        "luck": { "current": 6, "initial": 10 },
        "equipment": "sword",
        "gold": "4",
        "provisions": 2,
        "monsters": []
    });
    fs::write(
        dir.path().join("templo-terror-save.json"),
        old.to_string(),
    )
    .unwrap();

    let store = open(&dir);
    assert_eq!(store.origin(), LoadOrigin::Loaded);
    let s = store.state();
    assert!(s.spells.is_empty());
    assert_eq!(s.notes, "");
    assert_eq!(s.current_paragraph, "");
    assert_eq!(s.skill.initial, 12);
    assert_eq!(s.equipment, "sword");
    assert_eq!(s.provisions, 2);
    assert!(s.is_near_death());
}

#[test]
fn corrupt_save_starts_fresh() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("templo-terror-save.json"), "{\"skill\": ").unwrap();

    let mut store = open(&dir);
    assert_eq!(store.origin(), LoadOrigin::Recovered);
    assert_eq!(*store.state(), GameState::default());

    store.apply(Mutation::ConsumeProvision).unwrap();
    let reopened = open(&dir);
    assert_eq!(reopened.origin(), LoadOrigin::Loaded);
    assert_eq!(reopened.state().provisions, 9);
}

#[test]
fn binary_save_starts_fresh() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("templo-terror-save.json"), [0xff, 0xfe, b'{']).unwrap();

    let mut store = open(&dir);
    assert_eq!(store.origin(), LoadOrigin::Recovered);
    assert_eq!(*store.state(), GameState::default());

    store.apply(Mutation::AdjustProvisions { delta: -3 }).unwrap();
    let reopened = open(&dir);
    assert_eq!(reopened.origin(), LoadOrigin::Loaded);
    assert_eq!(reopened.state().provisions, 7);
}

#[test]
fn open_default_uses_configured_dir() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    assert_eq!(
        store.storage().path_for(store.storage_key()),
        dir.path().join("templo-terror-save.json")
    );
    store.apply(Mutation::ConsumeProvision).unwrap();
    assert!(dir.path().join("templo-terror-save.json").exists());
}

#[test]
fn reset_removes_save_file() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store
        .apply(Mutation::SetText {
            field: TextField::Notes,
            value: "the key is in the well".to_string(),
        })
        .unwrap();
    let path = store.storage().path_for(store.storage_key());
    assert!(path.exists());

    store.reset().unwrap();
    assert!(!path.exists());
    assert_eq!(*store.state(), GameState::default());
    assert_eq!(open(&dir).origin(), LoadOrigin::Fresh);
}

#[test]
fn ten_provisions_then_noop() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    set_attr(&mut store, AttributeKind::Stamina, 20);
    for _ in 0..10 {
        assert!(store.apply(Mutation::ConsumeProvision).unwrap());
    }
    assert_eq!(store.state().provisions, 0);

    let before = store.state().clone();
    let on_disk = store.storage().get(store.storage_key()).unwrap();
    assert!(!store.apply(Mutation::ConsumeProvision).unwrap());
    assert_eq!(*store.state(), before);
    assert_eq!(store.storage().get(store.storage_key()).unwrap(), on_disk);
}

#[test]
fn custom_storage_key() {
    let dir = TempDir::new().unwrap();
    let cfg = config(&dir).with_storage_key("slot-2");
    let mut store = RecordStore::open(FileStorage::new(dir.path()), &cfg).unwrap();
    store.apply(Mutation::AdjustProvisions { delta: 1 }).unwrap();
    assert!(dir.path().join("slot-2.json").exists());
    assert!(!dir.path().join("templo-terror-save.json").exists());
}
