use crate::model::{Ad, Category, ExtraFields, Price, User, UserId};
use crate::store::{InMemoryStore, MemBackend, RecordStore};

pub fn ad(id: u64, title: &str, owner: UserId) -> Ad {
    Ad {
        id,
        title: title.to_string(),
        price: Price::fixed(10.0),
        user_id: owner,
        images: Vec::new(),
        category: None,
        description: None,
        created_at: None,
        views: 0,
        extra: ExtraFields::new(),
    }
}

pub fn user(id: UserId, state: &str) -> User {
    User {
        id,
        name: format!("user-{}", id),
        email: format!("user{}@example.com", id),
        password: "secret".to_string(),
        phone: Some(format!("555-000{}", id)),
        avatar: None,
        state: Some(state.to_string()),
        token: None,
        extra: ExtraFields::new(),
    }
}

/// Users 1 and 3 live in SP, user 2 in RJ. Ad 105 belongs to a user that
/// does not exist. Ad 106 uses the nested category shape.
pub fn fixture_records() -> (Vec<Ad>, Vec<User>) {
    let mut bike = ad(101, "Mountain bike", 1);
    bike.category = Some("sports".into());
    bike.description = Some("Aluminium frame".to_string());

    let mut helmet = ad(102, "Helmet", 2);
    helmet.category = Some("sports".into());
    helmet.description = Some("Fits any BIKE rider".to_string());

    let mut sofa = ad(103, "Sofa", 3);
    sofa.category = Some("home".into());

    let mut lamp = ad(104, "Lamp", 1);
    lamp.category = Some("home".into());
    lamp.price = Price::negotiable();

    let mut guitar = ad(105, "Guitar", 99);
    guitar.category = Some("music".into());

    let mut desk = ad(106, "Desk", 1);
    desk.category = Some(Category::Nested {
        slug: "home".to_string(),
        rest: serde_json::Map::new(),
    });

    let mut token_holder = user(3, "SP");
    token_holder.token = Some("token_abc".to_string());

    (
        vec![bike, helmet, sofa, lamp, guitar, desk],
        vec![user(1, "SP"), user(2, "RJ"), token_holder],
    )
}

pub fn seeded_store() -> InMemoryStore {
    let (ads, users) = fixture_records();
    RecordStore::with_backend(MemBackend::with_records(ads, users))
}

pub fn ids(ads: &[Ad]) -> Vec<u64> {
    ads.iter().map(|a| a.id).collect()
}
