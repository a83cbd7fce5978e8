use adboard::api::{AdboardApi, CreateForm, DetailQuery};
use adboard::config::AdboardConfig;
use adboard::init::initialize;
use adboard::store::FileStore;
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

fn seeded_api(dir: &TempDir) -> AdboardApi<FileStore> {
    fs::write(
        dir.path().join("users.json"),
        r#"[{"id": 1, "name": "Maria", "email": "maria@example.com", "password": "pw",
             "phone": null, "avatar": null, "state": "SP"}]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("ads.json"),
        r#"[{"id": 10, "title": "Bike", "userId": 1,
             "price": {"value": 100, "priceNegotiable": false}, "views": 5}]"#,
    )
    .unwrap();
    initialize(Some(dir.path().to_path_buf())).unwrap().api
}

#[test]
fn test_concurrent_detail_fetches_count_every_view() {
    let dir = TempDir::new().unwrap();
    let api = Arc::new(seeded_api(&dir));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let api = Arc::clone(&api);
            thread::spawn(move || {
                for _ in 0..10 {
                    let query = DetailQuery {
                        id: Some("10".to_string()),
                        other: None,
                    };
                    api.get_ad(&query).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let query = DetailQuery {
        id: Some("10".to_string()),
        other: None,
    };
    let detail = api.get_ad(&query).unwrap();
    assert_eq!(detail.ad.views, 5 + 80 + 1);
    assert_eq!(detail.state.as_deref(), Some("SP"));
}

#[test]
fn test_concurrent_creates_get_distinct_ids() {
    let dir = TempDir::new().unwrap();
    let api = Arc::new(AdboardApi::new(
        adboard::store::RecordStore::with_backend(adboard::store::FsBackend::new(
            dir.path().to_path_buf(),
        )),
        AdboardConfig::default(),
    ));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let api = Arc::clone(&api);
            thread::spawn(move || {
                (0..5)
                    .map(|i| {
                        let form = CreateForm {
                            title: Some(format!("item {}-{}", t, i)),
                            price: Some("10".to_string()),
                            ..Default::default()
                        };
                        api.create_ad(form, Vec::new(), None).unwrap().id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids: Vec<u64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 20);

    let stored = api.list_ads(&Default::default()).unwrap();
    assert_eq!(stored.total, 20);
}
