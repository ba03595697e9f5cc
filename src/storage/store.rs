//! In-memory todo store.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{TodoId, TodoItem};

/// Items plus the id counter. Always mutated together under one guard.
#[derive(Debug)]
struct StoreState {
    items: Vec<TodoItem>,
    next_id: TodoId,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

/// Authoritative holder of all todo items.
///
/// Cloning is cheap and every clone shares the same state. Mutations take the
/// write lock, so id assignment and the append are observed atomically and
/// readers never see a half-applied change.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    state: Arc<RwLock<StoreState>>,
}

impl TodoStore {
    /// Create an empty store whose first id will be 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// All current items in insertion order.
    pub async fn list(&self) -> Vec<TodoItem> {
        self.state.read().await.items.clone()
    }

    /// Look up a single item.
    pub async fn get(&self, id: TodoId) -> Option<TodoItem> {
        let state = self.state.read().await;
        state.items.iter().find(|item| item.id == id).cloned()
    }

    /// Number of items currently held.
    pub async fn count(&self) -> usize {
        self.state.read().await.items.len()
    }

    /// Append a new item with the next id and return it.
    ///
    /// The counter only moves forward, so ids freed by [`TodoStore::delete`]
    /// are never handed out again.
    pub async fn create(&self, title: impl Into<String>) -> TodoItem {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;

        let item = TodoItem::new(id, title);
        state.items.push(item.clone());

        tracing::debug!(todo_id = id, "Todo stored");
        item
    }

    /// Remove the item with `id`. Returns `false` if there was none.
    pub async fn delete(&self, id: TodoId) -> bool {
        let mut state = self.state.write().await;
        match state.items.iter().position(|item| item.id == id) {
            Some(index) => {
                // `remove` rather than `swap_remove` to keep insertion order.
                state.items.remove(index);
                tracing::debug!(todo_id = id, "Todo removed");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let store = TodoStore::new();
        assert!(store.list().await.is_empty());
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = TodoStore::new();

        let first = store.create("Buy milk").await;
        assert_eq!(first, TodoItem::new(1, "Buy milk"));
        assert!(!first.is_completed);

        let second = store.create("Walk dog").await;
        assert_eq!(second.id, 2);
        assert_eq!(second.title, "Walk dog");
    }

    #[tokio::test]
    async fn test_delete_then_list() {
        let store = TodoStore::new();
        store.create("Buy milk").await;
        store.create("Walk dog").await;

        assert!(store.delete(1).await);
        assert_eq!(store.list().await, vec![TodoItem::new(2, "Walk dog")]);
    }

    #[tokio::test]
    async fn test_deleted_ids_are_not_reused() {
        let store = TodoStore::new();
        store.create("Buy milk").await;
        store.create("Walk dog").await;

        assert!(store.delete(1).await);
        assert!(!store.delete(1).await);

        let third = store.create("Read").await;
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_deleting_highest_id_does_not_rewind_counter() {
        let store = TodoStore::new();
        store.create("a").await;
        store.create("b").await;
        assert!(store.delete(2).await);

        assert_eq!(store.create("c").await.id, 3);
    }

    #[tokio::test]
    async fn test_empty_title_accepted() {
        let store = TodoStore::new();
        let item = store.create("").await;
        assert_eq!(item, TodoItem::new(1, ""));

        let blank = store.create("   ").await;
        assert_eq!(blank.title, "   ");
    }

    #[tokio::test]
    async fn test_delete_unknown_id_leaves_store_unchanged() {
        let store = TodoStore::new();
        assert!(!store.delete(999).await);
        assert!(store.list().await.is_empty());

        store.create("Keep me").await;
        assert!(!store.delete(999).await);
        assert_eq!(store.list().await, vec![TodoItem::new(1, "Keep me")]);
    }

    #[tokio::test]
    async fn test_get_finds_only_live_items() {
        let store = TodoStore::new();
        store.create("Buy milk").await;

        assert_eq!(store.get(1).await, Some(TodoItem::new(1, "Buy milk")));
        assert!(store.delete(1).await);
        assert_eq!(store.get(1).await, None);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = TodoStore::new();
        let other = store.clone();

        store.create("shared").await;
        assert_eq!(other.count().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_distinct_ids() {
        let store = TodoStore::new();

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(format!("todo {i}")).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().id);
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=64).collect::<Vec<_>>());
        assert_eq!(store.count().await, 64);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Create(String),
        Delete(TodoId),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[a-z ]{0,8}".prop_map(Op::Create),
            (0i64..16).prop_map(Op::Delete),
        ]
    }

    proptest! {
        #[test]
        fn prop_store_matches_model(ops in prop::collection::vec(op_strategy(), 0..48)) {
            tokio_test::block_on(async {
                let store = TodoStore::new();
                let mut expected: Vec<TodoItem> = Vec::new();
                let mut highest: TodoId = 0;

                for op in ops {
                    match op {
                        Op::Create(title) => {
                            let item = store.create(title.clone()).await;
                            assert!(item.id > highest);
                            assert!(!item.is_completed);
                            assert_eq!(item.title, title);
                            highest = item.id;
                            expected.push(item);
                        }
                        Op::Delete(id) => {
                            let present = expected.iter().any(|item| item.id == id);
                            assert_eq!(store.delete(id).await, present);
                            expected.retain(|item| item.id != id);
                        }
                    }
                }

                assert_eq!(store.list().await, expected);
            });
        }
    }
}
