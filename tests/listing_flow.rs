use gethome_store::draft::ListingDraft;
use gethome_store::storage::{FileStorage, KeyValueStorage, PROPERTIES_KEY};
use gethome_store::{ListingStore, SearchQuery, StoreEvent};
use std::sync::Arc;

fn scratch_dir() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("gethome-flow-{}-{}", std::process::id(), rand::random::<u32>()))
}

#[tokio::test]
async fn post_edit_rename_delete_on_disk() {
    let dir = scratch_dir();
    let storage = Arc::new(FileStorage::open(&dir).await.unwrap());
    let mut store = ListingStore::initialize(storage.clone()).await;
    let host = store.profile().name.clone();

    // post
    let draft = ListingDraft {
        title: "Sunset Penthouse".to_string(),
        kind: "Penthouse".to_string(),
        country: "Turkey".to_string(),
        city: "Istanbul".to_string(),
        area: "Beyoglu".to_string(),
        street: "Istiklal 12".to_string(),
        price: "3200".to_string(),
        phone_number: "5550000000".to_string(),
        images: vec!["blob:a".to_string(), "blob:b".to_string()],
        ..ListingDraft::default()
    };
    let property = draft.into_property(&host, None).unwrap();
    let id = property.id.clone();
    assert_eq!(store.upsert_property(property).await, StoreEvent::Created { id: id.clone() });

    let found = store.search(&SearchQuery::text("sunset"));
    let titles: Vec<&str> = found.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Sunset Penthouse", "Modern Sunset Villa"]);

    // edit
    let existing = store.get(&id).unwrap().clone();
    let mut draft = ListingDraft::from_property(&existing);
    draft.price = "2900".to_string();
    let edited = draft.into_property(&host, Some(&existing)).unwrap();
    assert_eq!(store.upsert_property(edited).await.message(), "Post Updated Successfully!");
    assert_eq!(store.properties()[0].price, 2900.0);
    assert_eq!(store.properties()[0].currency, "TRY");

    // rename
    store.update_profile("Alex J.", "Host in Istanbul").await;
    assert_eq!(store.my_properties().len(), 2);
    assert!(store.properties_by_owner(&host).is_empty());

    // reopen from disk
    drop(store);
    let reopened = FileStorage::open(&dir).await.unwrap();
    assert!(reopened.get(PROPERTIES_KEY).await.unwrap().is_some());
    let mut store = ListingStore::initialize(Arc::new(reopened)).await;
    assert_eq!(store.profile().name, "Alex J.");
    assert_eq!(store.get(&id).unwrap().host_name, "Alex J.");

    // delete
    store.delete_property(&id).await;
    store.delete_property(&id).await;
    assert!(store.get(&id).is_none());
    assert_eq!(store.properties().len(), 2);

    tokio::fs::remove_dir_all(dir).await.unwrap();
}
