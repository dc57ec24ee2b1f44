//! Persistence Integration Tests
//!
//! Bridge and store wired together over `MemoryStorage`.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::config::PersistConfig;
    use crate::domain::{PersistError, StorageError, TodoId, TodoItem};
    use crate::persistence::{
        MemoryStorage, PersistOutcome, PersistenceBridge, RestoreOutcome,
    };
    use crate::store::TodoStore;

    fn setup(storage: MemoryStorage) -> (Rc<MemoryStorage>, PersistenceBridge<Rc<MemoryStorage>>) {
        let storage = Rc::new(storage);
        let bridge = PersistenceBridge::new(storage.clone(), PersistConfig::default());
        (storage, bridge)
    }

    fn sample() -> Vec<TodoItem> {
        vec![
            TodoItem::with_id(TodoId::from("a"), "Buy milk"),
            TodoItem {
                id: TodoId::from("b"),
                description: "Walk dog".to_string(),
                completed: true,
            },
            TodoItem::with_id(TodoId::from("c"), "Call mum"),
        ]
    }

    #[tokio::test]
    async fn test_restore_empty_storage() {
        let (_, bridge) = setup(MemoryStorage::new());
        assert!(!bridge.is_ready());

        let report = bridge.restore().await;
        assert!(report.items.is_empty());
        assert_eq!(report.outcome, RestoreOutcome::Empty);
        assert!(bridge.is_ready());
    }

    #[tokio::test]
    async fn test_round_trip() {
        let (_, bridge) = setup(MemoryStorage::new());
        let items = sample();

        let outcome = bridge.persist(1, &items).await.expect("persist failed");
        assert_eq!(outcome, PersistOutcome::Written { attempts: 1 });

        let report = bridge.restore().await;
        assert_eq!(report.items, items);
        assert_eq!(report.outcome, RestoreOutcome::Restored { count: 3 });
    }

    #[tokio::test]
    async fn test_malformed_data_restores_empty() {
        for raw in [r#"{"todos":[]}"#, "42", "not json", "null", r#"[{"id":1}]"#] {
            let (_, bridge) = setup(MemoryStorage::with_value("todos", raw));
            let report = bridge.restore().await;
            assert!(report.items.is_empty(), "raw value {raw:?}");
            assert!(
                matches!(report.outcome, RestoreOutcome::Recovered { .. }),
                "raw value {raw:?}"
            );
            assert!(bridge.is_ready());
        }
    }

    #[tokio::test]
    async fn test_read_failure_restores_empty() {
        let storage = MemoryStorage::with_value("todos", "[]");
        storage.fail_reads(true);
        let (_, bridge) = setup(storage);

        let report = bridge.restore().await;
        assert!(report.items.is_empty());
        assert!(matches!(report.outcome, RestoreOutcome::Recovered { .. }));
        assert!(bridge.is_ready());
    }

    #[tokio::test]
    async fn test_restores_legacy_records() {
        let raw = r#"[
            {"id":"k3","description":"Edited","completed":false,"editing":true,"editedDescription":"Edi"},
            {"id":"k1","description":"Done","completed":true}
        ]"#;
        let (_, bridge) = setup(MemoryStorage::with_value("todos", raw));
        let report = bridge.restore().await;
        let ids: Vec<_> = report.items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["k3", "k1"]);
        assert_eq!(report.items[0].description, "Edited");
    }

    #[tokio::test]
    async fn test_custom_storage_key() {
        let storage = Rc::new(MemoryStorage::new());
        let config = PersistConfig {
            storage_key: "my-list".to_string(),
            ..PersistConfig::default()
        };
        let bridge = PersistenceBridge::new(storage.clone(), config);
        bridge.persist(1, &sample()).await.unwrap();
        assert!(storage.value("my-list").is_some());
        assert!(storage.value("todos").is_none());
    }

    #[tokio::test]
    async fn test_write_retries_then_succeeds() {
        let storage = MemoryStorage::new();
        storage.fail_next_writes(2);
        let (storage, bridge) = setup(storage);

        let outcome = bridge.persist(1, &sample()).await.unwrap();
        assert_eq!(outcome, PersistOutcome::Written { attempts: 3 });
        assert_eq!(storage.write_count(), 1);
        assert_eq!(bridge.last_written_revision(), Some(1));
    }

    #[tokio::test]
    async fn test_write_gives_up_after_bounded_attempts() {
        let storage = MemoryStorage::new();
        storage.fail_next_writes(10);
        let (storage, bridge) = setup(storage);

        let err = bridge.persist(1, &sample()).await.unwrap_err();
        assert!(matches!(
            err,
            PersistError::WriteFailed {
                attempts: 3,
                source: StorageError::Write(_)
            }
        ));
        assert_eq!(storage.write_count(), 0);
        assert_eq!(bridge.last_written_revision(), None);

        // the same snapshot can be written once storage recovers
        storage.fail_next_writes(0);
        let outcome = bridge.persist(1, &sample()).await.unwrap();
        assert_eq!(outcome, PersistOutcome::Written { attempts: 1 });
    }

    #[tokio::test]
    async fn test_stale_snapshot_is_skipped() {
        let (storage, bridge) = setup(MemoryStorage::new());
        let newer = sample();
        bridge.persist(5, &newer).await.unwrap();

        let outcome = bridge.persist(4, &newer[..1]).await.unwrap();
        assert_eq!(outcome, PersistOutcome::Stale);
        assert_eq!(storage.write_count(), 1);
        assert_eq!(bridge.restore().await.items, newer);
    }

    #[tokio::test]
    async fn test_store_changes_mirror_to_storage() {
        let (storage, bridge) = setup(MemoryStorage::new());
        let bridge = Rc::new(bridge);

        let mut store = TodoStore::new();
        store.hydrate(bridge.restore().await.items);

        // queue snapshots from the subscriber, then flush them in order
        let pending: Rc<RefCell<Vec<(u64, Vec<TodoItem>)>>> = Rc::default();
        let queue = pending.clone();
        store.subscribe(move |event| {
            queue.borrow_mut().push((event.revision, event.items.to_vec()));
        });

        let milk = store.add("Buy milk").unwrap();
        store.add("Walk dog").unwrap();
        store.toggle(&milk).unwrap();
        store.reorder(0, 1).unwrap();

        let snapshots: Vec<_> = pending.borrow_mut().drain(..).collect();
        assert_eq!(snapshots.len(), 4);
        for (revision, items) in &snapshots {
            bridge.persist(*revision, items).await.unwrap();
        }

        let restored = bridge.restore().await.items;
        assert_eq!(restored, store.items());
        assert_eq!(restored[0].id, milk);
        assert!(restored[0].completed);
        assert_eq!(storage.write_count(), 4);
    }
}
