use poemstore_core::{
    open_store, open_store_in_memory, Poem, PoemCollection, PoemRepository, SqlitePoemRepository,
    DEFAULT_TEXT, STORE_NAME,
};
use uuid::Uuid;

#[test]
fn new_collection_is_empty_before_fetch() {
    let conn = open_store_in_memory().unwrap();
    let repo = SqlitePoemRepository::try_new(&conn).unwrap();

    let collection = PoemCollection::new(repo);
    assert!(collection.is_empty());
    assert_eq!(collection.len(), 0);
}

#[test]
fn fetch_on_empty_store_loads_zero_records() {
    let conn = open_store_in_memory().unwrap();
    let repo = SqlitePoemRepository::try_new(&conn).unwrap();

    let mut collection = PoemCollection::new(repo);
    let count = collection.fetch().unwrap();

    assert_eq!(count, 0);
    assert!(collection.is_empty());
}

#[test]
fn fetch_loads_persisted_records_in_store_order() {
    let conn = open_store_in_memory().unwrap();

    let seed = SqlitePoemRepository::try_new(&conn).unwrap();
    let first = Poem::with_text("Hello");
    let second = Poem::with_text("Goodbye");
    seed.insert_poem(&first).unwrap();
    seed.insert_poem(&second).unwrap();

    let repo = SqlitePoemRepository::try_new(&conn).unwrap();
    let mut collection = PoemCollection::new(repo);
    let count = collection.fetch().unwrap();

    assert_eq!(count, 2);
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.poems()[0].uuid, first.uuid);
    assert_eq!(collection.poems()[0].text, "Hello");
    assert_eq!(collection.poems()[1].uuid, second.uuid);
}

#[test]
fn fetch_replaces_in_memory_contents() {
    let conn = open_store_in_memory().unwrap();

    let repo = SqlitePoemRepository::try_new(&conn).unwrap();
    let mut collection = PoemCollection::new(repo);
    let kept = Poem::with_text("kept");
    let dropped = Poem::with_text("dropped elsewhere");
    collection.create(kept.clone()).unwrap();
    collection.create(dropped.clone()).unwrap();
    assert_eq!(collection.len(), 2);

    // Another owner of the same store removes one record behind our back.
    let other = SqlitePoemRepository::try_new(&conn).unwrap();
    other.delete_poem(dropped.uuid).unwrap();

    let count = collection.fetch().unwrap();
    assert_eq!(count, 1);
    assert_eq!(collection.poems()[0].uuid, kept.uuid);
    assert!(collection.get(dropped.uuid).is_none());
}

#[test]
fn fetch_applies_schema_default_for_missing_text() {
    let conn = open_store_in_memory().unwrap();

    let id = Uuid::new_v4();
    conn.execute("INSERT INTO poems (uuid) VALUES (?1);", [id.to_string()])
        .unwrap();

    let repo = SqlitePoemRepository::try_new(&conn).unwrap();
    let mut collection = PoemCollection::new(repo);
    collection.fetch().unwrap();

    assert_eq!(collection.len(), 1);
    assert_eq!(collection.get(id).unwrap().text, DEFAULT_TEXT);
}

#[test]
fn every_collection_is_bound_to_the_same_store_name() {
    let conn_a = open_store_in_memory().unwrap();
    let conn_b = open_store_in_memory().unwrap();

    let collection_a = PoemCollection::new(SqlitePoemRepository::try_new(&conn_a).unwrap());
    let collection_b = PoemCollection::new(SqlitePoemRepository::try_new(&conn_b).unwrap());

    assert_eq!(collection_a.store_name(), "poems-backbone");
    assert_eq!(collection_b.store_name(), STORE_NAME);
}

#[test]
fn create_persists_and_appends() {
    let conn = open_store_in_memory().unwrap();

    let repo = SqlitePoemRepository::try_new(&conn).unwrap();
    let mut collection = PoemCollection::new(repo);
    let id = collection.create(Poem::new()).unwrap();
    collection.create(Poem::with_text("second")).unwrap();

    assert_eq!(collection.len(), 2);
    assert_eq!(collection.get(id).unwrap().text, DEFAULT_TEXT);

    // A fresh collection over the same store sees both records.
    let fresh_repo = SqlitePoemRepository::try_new(&conn).unwrap();
    let mut fresh = PoemCollection::new(fresh_repo);
    assert_eq!(fresh.fetch().unwrap(), 2);
}

#[test]
fn remove_deletes_from_store_and_memory() {
    let conn = open_store_in_memory().unwrap();

    let repo = SqlitePoemRepository::try_new(&conn).unwrap();
    let mut collection = PoemCollection::new(repo);
    let poem = Poem::with_text("to be removed");
    collection.create(poem.clone()).unwrap();
    collection.create(Poem::with_text("survivor")).unwrap();

    collection.remove(poem.uuid).unwrap();
    assert_eq!(collection.len(), 1);
    assert!(collection.get(poem.uuid).is_none());

    let check = SqlitePoemRepository::try_new(&conn).unwrap();
    assert!(check.get_poem(poem.uuid).unwrap().is_none());
}

#[test]
fn persisted_records_survive_store_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let poem = Poem::with_text("written in one lifetime");
    {
        let conn = open_store(dir.path()).unwrap();
        let repo = SqlitePoemRepository::try_new(&conn).unwrap();
        let mut collection = PoemCollection::new(repo);
        collection.create(poem.clone()).unwrap();
    }

    let conn = open_store(dir.path()).unwrap();
    let repo = SqlitePoemRepository::try_new(&conn).unwrap();
    let mut collection = PoemCollection::new(repo);
    // Callers may drop the fetch result; assert through the contents.
    let _ = collection.fetch();

    assert_eq!(collection.len(), 1);
    assert_eq!(collection.poems()[0], poem);
}
