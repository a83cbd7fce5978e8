use adboard::api::{DetailQuery, ListQuery};
use adboard::init::initialize;
use adboard::model::{Ad, ExtraFields, Price, User};
use adboard::store::backend::StorageBackend;
use adboard::store::fs_backend::{FsBackend, ADS_FILE, USERS_FILE};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

fn sample_ad(id: u64) -> Ad {
    Ad {
        id,
        title: format!("Ad {}", id),
        price: Price::fixed(25.0),
        user_id: 1,
        images: vec!["http://localhost/uploads/1-a.jpg".to_string()],
        category: Some("home".into()),
        description: Some(String::new()),
        created_at: None,
        views: 0,
        extra: ExtraFields::new(),
    }
}

#[test]
fn test_missing_files_read_as_empty() {
    let (_dir, backend) = setup();
    assert!(backend.load_ads().unwrap().is_empty());
    assert!(backend.load_users().unwrap().is_empty());
}

#[test]
fn test_blank_file_reads_as_empty() {
    let (dir, backend) = setup();
    fs::write(dir.path().join(ADS_FILE), "  \n").unwrap();
    assert!(backend.load_ads().unwrap().is_empty());
}

#[test]
fn test_write_then_read_preserves_order() {
    let (_dir, backend) = setup();
    let ads = vec![sample_ad(3), sample_ad(1), sample_ad(2)];
    backend.save_ads(&ads).unwrap();

    let loaded = backend.load_ads().unwrap();
    let ids: Vec<u64> = loaded.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(loaded, ads);
}

#[test]
fn test_atomic_write_leaves_no_tmp_files() {
    let (dir, backend) = setup();
    backend.save_ads(&[sample_ad(1)]).unwrap();
    backend.save_ads(&[sample_ad(1), sample_ad(2)]).unwrap();

    assert!(dir.path().join(ADS_FILE).exists());
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_first_write_creates_data_dir() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("data");
    let backend = FsBackend::new(root.clone());

    backend.save_users(&[]).unwrap();
    assert!(root.join(USERS_FILE).exists());
}

#[test]
fn test_loads_hand_written_collections() {
    let (dir, backend) = setup();
    fs::write(
        dir.path().join(USERS_FILE),
        r#"[{"id": 1, "name": "Maria", "email": "maria@example.com", "password": "pw",
             "phone": "11 5555", "avatar": null, "state": "SP"}]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join(ADS_FILE),
        r#"[{"id": 1700000000000, "title": "Bike", "userId": 1,
             "price": {"value": null, "priceNegotiable": true},
             "category": {"slug": "sports", "name": "Sports"}}]"#,
    )
    .unwrap();

    let users: Vec<User> = backend.load_users().unwrap();
    assert_eq!(users[0].state.as_deref(), Some("SP"));
    assert!(users[0].token.is_none());

    let ads = backend.load_ads().unwrap();
    assert_eq!(ads[0].views, 0);
    assert_eq!(ads[0].category_slug(), Some("sports"));

    // Saving back keeps the nested category object intact.
    backend.save_ads(&ads).unwrap();
    let raw = fs::read_to_string(dir.path().join(ADS_FILE)).unwrap();
    assert!(raw.contains("\"name\": \"Sports\""));
}

#[test]
fn test_corrupt_collection_is_an_error() {
    let (dir, backend) = setup();
    fs::write(dir.path().join(ADS_FILE), "{ not json").unwrap();
    let err = backend.load_ads().unwrap_err();
    assert!(err.is_store_failure());
    assert_eq!(err.public_message(), "Internal error");
}

fn read_raw_ads(dir: &TempDir) -> Vec<serde_json::Value> {
    let raw = fs::read_to_string(dir.path().join(ADS_FILE)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_detail_fetch_keeps_unknown_keys_on_every_ad() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(USERS_FILE),
        r#"[{"id": 1, "name": "Maria", "email": "m@example.com", "password": "pw", "state": "SP"}]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join(ADS_FILE),
        r#"[{"id": 1, "title": "Bike", "userId": 1, "price": {"value": 10, "priceNegotiable": false},
             "state": "RJ", "slugUrl": "bike-1"},
            {"id": 2, "title": "Lamp", "userId": 1, "price": {"value": 5, "priceNegotiable": false},
             "featured": true}]"#,
    )
    .unwrap();

    let api = initialize(Some(dir.path().to_path_buf())).unwrap().api;
    let detail = api
        .get_ad(&DetailQuery {
            id: Some("1".to_string()),
            other: None,
        })
        .unwrap();
    assert_eq!(detail.state.as_deref(), Some("SP"));

    let stored = read_raw_ads(&dir);
    assert_eq!(stored[0]["views"], 1);
    assert_eq!(stored[0]["state"], "RJ");
    assert_eq!(stored[0]["slugUrl"], "bike-1");
    assert_eq!(stored[1]["featured"], true);
}

#[test]
fn test_degraded_records_do_not_take_down_listing() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(ADS_FILE),
        r#"[{"id": 1, "title": "Bare price", "userId": 1, "price": 30},
            {"id": 2, "title": "No price", "userId": 1},
            {"id": 3, "title": "Odd date", "userId": 1,
             "price": {"value": 8, "priceNegotiable": false}, "createdAt": "05/04/2024"},
            {"title": "No id at all", "userId": 1, "price": 4},
            "not even an object"]"#,
    )
    .unwrap();

    let api = initialize(Some(dir.path().to_path_buf())).unwrap().api;
    let page = api.list_ads(&ListQuery::default()).unwrap();
    let ids: Vec<u64> = page.ads.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
    assert_eq!(page.ads[2].price, Price::fixed(30.0));
}

#[test]
fn test_unreadable_records_are_written_back_untouched() {
    let (dir, backend) = setup();
    fs::write(
        dir.path().join(ADS_FILE),
        r#"[{"id": 1, "title": "Fine", "userId": 1, "price": 3, "createdAt": "yesterday"},
            {"title": "No id", "price": 4}]"#,
    )
    .unwrap();

    let mut ads = backend.load_ads().unwrap();
    assert_eq!(ads.len(), 1);
    ads[0].record_view();
    backend.save_ads(&ads).unwrap();

    let stored = read_raw_ads(&dir);
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0]["views"], 1);
    assert_eq!(stored[0]["createdAt"], "yesterday");
    assert_eq!(stored[1]["title"], "No id");
}
