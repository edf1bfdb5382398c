use super::*;
use crate::model::{Role, UserId, UserPayload};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn payload(name: &str) -> UserPayload {
    UserPayload {
        username: name.to_string(),
        password: "secret".to_string(),
        email: format!("{name}@example.com"),
        role: None,
    }
}

#[test]
fn test_empty_store_lists_nothing() {
    let store = UserStore::default();
    assert!(store.list_all().is_empty());
    assert!(store.is_empty());
}

#[test]
fn test_create_then_get_round_trips() {
    let store = UserStore::default();
    let created = store.create(payload("alice")).unwrap();
    assert_eq!(created.id, 0);
    assert_eq!(created.role, Role::General);
    assert_eq!(store.get(created.id), Ok(created));
}

#[test]
fn test_ids_increase_and_are_never_reused() {
    let store = UserStore::default();
    let a = store.create(payload("a")).unwrap();
    let b = store.create(payload("b")).unwrap();
    assert!(b.id > a.id);

    store.delete(b.id).unwrap();
    let c = store.create(payload("c")).unwrap();
    assert!(c.id > b.id);
}

#[test]
fn test_first_id_is_configurable() {
    let store = UserStore::new(&StoreConfig {
        first_id: 1,
        seed_admin: None,
    });
    assert_eq!(store.create(payload("a")).unwrap().id, 1);
    assert_eq!(store.create(payload("b")).unwrap().id, 2);
}

#[test]
fn test_counter_stops_at_max_id() {
    let store = UserStore::new(&StoreConfig {
        first_id: UserId::MAX - 1,
        seed_admin: None,
    });
    assert_eq!(store.create(payload("a")).unwrap().id, UserId::MAX - 1);
    assert_eq!(store.create(payload("b")).unwrap().id, UserId::MAX);
    assert_eq!(store.create(payload("c")), Err(StoreError::IdsExhausted));
    assert_eq!(store.create(payload("d")), Err(StoreError::IdsExhausted));
    assert_eq!(store.len(), 2);
    assert!(store.get(0).is_err());
}

#[test]
fn test_seed_admin_at_max_id_leaves_no_ids() {
    let store = UserStore::new(&StoreConfig {
        first_id: UserId::MAX,
        seed_admin: Some(SeedUser {
            username: "root".into(),
            password: "root".into(),
            email: "root@example.com".into(),
        }),
    });
    assert_eq!(store.get(UserId::MAX).unwrap().role, Role::Admin);
    assert_eq!(store.create(payload("a")), Err(StoreError::IdsExhausted));
}

#[test]
fn test_seed_admin_occupies_first_id() {
    let store = UserStore::new(&StoreConfig {
        first_id: 0,
        seed_admin: Some(SeedUser {
            username: "root".into(),
            password: "root".into(),
            email: "root@example.com".into(),
        }),
    });
    let admin = store.get(0).unwrap();
    assert_eq!(admin.role, Role::Admin);
    assert_eq!(admin.username, "root");
    assert_eq!(store.create(payload("next")).unwrap().id, 1);
}

#[test]
fn test_get_missing_is_not_found() {
    let store = UserStore::default();
    assert_eq!(store.get(999), Err(StoreError::NotFound(999)));
}

#[test]
fn test_update_keeps_id_and_replaces_fields() {
    let store = UserStore::default();
    let created = store
        .create(UserPayload {
            role: Some(Role::Manager),
            ..payload("a")
        })
        .unwrap();
    let updated = store.update(created.id, payload("b")).unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.username, "b");
    // Role is replaced too; omitted means GENERAL.
    assert_eq!(updated.role, Role::General);
    assert_eq!(store.get(created.id), Ok(updated));
}

#[test]
fn test_update_missing_does_not_insert() {
    let store = UserStore::default();
    assert_eq!(store.update(7, payload("x")), Err(StoreError::NotFound(7)));
    assert!(store.is_empty());
    // A failed update must not consume an id either.
    assert_eq!(store.create(payload("a")).unwrap().id, 0);
}

#[test]
fn test_delete_returns_snapshot_then_not_found() {
    let store = UserStore::default();
    let created = store.create(payload("a")).unwrap();
    assert_eq!(store.delete(created.id), Ok(created.clone()));
    assert_eq!(store.get(created.id), Err(StoreError::NotFound(created.id)));
    assert_eq!(store.delete(created.id), Err(StoreError::NotFound(created.id)));
}

#[test]
fn test_repeated_reads_are_identical() {
    let store = UserStore::default();
    for name in ["a", "b", "c"] {
        store.create(payload(name)).unwrap();
    }
    let first = store.list_all();
    assert_eq!(first, store.list_all());
    assert_eq!(store.get(1), store.get(1));
    let ids: Vec<_> = first.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn test_concurrent_creates_get_distinct_ids() {
    let store = Arc::new(UserStore::default());
    let threads = 8;
    let per_thread = 250;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..per_thread)
                    .map(|i| store.create(payload(&format!("t{t}-{i}"))).unwrap().id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        let ids = handle.join().unwrap();
        // Within one thread, issuance order is strictly increasing.
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        for id in ids {
            assert!(seen.insert(id), "id {id} issued twice");
        }
    }
    assert_eq!(seen.len(), threads * per_thread);
    assert_eq!(store.len(), threads * per_thread);
    let expected: HashSet<_> = (0..(threads * per_thread) as u64).collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_concurrent_deletes_remove_once() {
    let store = Arc::new(UserStore::default());
    let id = store.create(payload("target")).unwrap().id;

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.delete(id).is_ok())
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert_eq!(successes, 1);
    assert!(store.is_empty());
}

#[test]
fn test_concurrent_update_and_delete_never_resurrect() {
    for _ in 0..50 {
        let store = Arc::new(UserStore::default());
        let id = store.create(payload("a")).unwrap().id;

        let updater = {
            let store = Arc::clone(&store);
            thread::spawn(move || store.update(id, payload("b")).is_ok())
        };
        let deleter = {
            let store = Arc::clone(&store);
            thread::spawn(move || store.delete(id).is_ok())
        };
        let _updated = updater.join().unwrap();
        assert!(deleter.join().unwrap());
        // Whatever the interleaving, the delete wins in the end state.
        assert_eq!(store.get(id), Err(StoreError::NotFound(id)));
    }
}
