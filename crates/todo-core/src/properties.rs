//! Invariant checks over random operation sequences.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::{Filter, TodoId, TodoItem};
use crate::persistence::{MemoryStorage, PersistenceBridge};
use crate::config::PersistConfig;
use crate::store::TodoStore;

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Toggle(usize),
    Rename(usize, String),
    Remove(usize),
    RemoveUnknown,
    Reorder(usize, usize),
    ClearCompleted,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => "[ a-z]{0,8}".prop_map(Op::Add),
        2 => any::<usize>().prop_map(Op::Toggle),
        1 => (any::<usize>(), "[ a-z]{0,8}").prop_map(|(i, s)| Op::Rename(i, s)),
        2 => any::<usize>().prop_map(Op::Remove),
        1 => Just(Op::RemoveUnknown),
        2 => (0usize..12, 0usize..12).prop_map(|(a, b)| Op::Reorder(a, b)),
        1 => Just(Op::ClearCompleted),
    ]
}

fn pick(store: &TodoStore, index: usize) -> Option<TodoId> {
    if store.is_empty() {
        None
    } else {
        Some(store.items()[index % store.len()].id.clone())
    }
}

fn items() -> impl Strategy<Value = Vec<TodoItem>> {
    prop::collection::vec(("[a-zA-Z0-9 ]{1,12}", any::<bool>()), 0..10).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (description, completed))| TodoItem {
                id: TodoId::from(format!("id-{i}")),
                description,
                completed,
            })
            .collect()
    })
}

fn ids_in(items: &[TodoItem], filter: Filter) -> HashSet<&TodoId> {
    filter.apply(items).map(|item| &item.id).collect()
}

proptest! {
    #[test]
    fn ids_stay_unique_and_live(ops in prop::collection::vec(op(), 0..40)) {
        let mut store = TodoStore::new();
        let mut live: HashSet<TodoId> = HashSet::new();

        for op in ops {
            match op {
                Op::Add(text) => {
                    if let Ok(id) = store.add(&text) {
                        prop_assert!(live.insert(id));
                    } else {
                        prop_assert!(text.trim().is_empty());
                    }
                }
                Op::Toggle(i) => {
                    if let Some(id) = pick(&store, i) {
                        store.toggle(&id).unwrap();
                    }
                }
                Op::Rename(i, text) => {
                    if let Some(id) = pick(&store, i) {
                        let _ = store.rename(&id, &text);
                    }
                }
                Op::Remove(i) => {
                    if let Some(id) = pick(&store, i) {
                        store.remove(&id).unwrap();
                        live.remove(&id);
                    }
                }
                Op::RemoveUnknown => {
                    let before = store.items().to_vec();
                    prop_assert!(store.remove(&TodoId::from("never-issued")).is_err());
                    prop_assert_eq!(store.items(), &before[..]);
                }
                Op::Reorder(a, b) => {
                    let before = store.items().to_vec();
                    let result = store.reorder(a, b);
                    if a >= before.len() || b >= before.len() || a == b {
                        prop_assert_eq!(store.items(), &before[..]);
                    } else {
                        prop_assert_eq!(result, Ok(true));
                    }
                }
                Op::ClearCompleted => {
                    let done: Vec<TodoId> = store
                        .filtered_view(Filter::Completed)
                        .iter()
                        .map(|item| item.id.clone())
                        .collect();
                    store.clear_completed();
                    for id in done {
                        live.remove(&id);
                    }
                }
            }

            let ids: HashSet<TodoId> = store.items().iter().map(|item| item.id.clone()).collect();
            prop_assert_eq!(ids.len(), store.len());
            prop_assert_eq!(&ids, &live);
        }
    }

    #[test]
    fn active_and_completed_partition_all(items in items()) {
        let mut store = TodoStore::new();
        store.hydrate(items);

        let all = ids_in(store.items(), Filter::All);
        let active = ids_in(store.items(), Filter::Active);
        let completed = ids_in(store.items(), Filter::Completed);
        prop_assert_eq!(store.filtered_view(Filter::All).len(), all.len());

        prop_assert!(active.is_disjoint(&completed));
        let union: HashSet<&TodoId> = active.union(&completed).copied().collect();
        prop_assert_eq!(union, all);
        prop_assert_eq!(store.filtered_view(Filter::from_str("bogus")).len(), store.len());
    }

    #[test]
    fn persist_then_restore_is_identity(items in items()) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let restored = runtime.block_on(async {
            let bridge = PersistenceBridge::new(MemoryStorage::new(), PersistConfig::default());
            bridge.persist(1, &items).await.unwrap();
            bridge.restore().await.items
        });
        prop_assert_eq!(restored, items);
    }
}
