use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use crate::models::Comment;

/// In-memory, append-only comment log.
///
/// Cloning a `CommentStore` yields another handle to the same log, so one
/// store created at startup can be handed to every request handler. Contents
/// are lost when the process exits.
#[derive(Clone, Default)]
pub struct CommentStore {
    comments: Arc<Mutex<Vec<Comment>>>,
}

impl CommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a comment to the end of the log and return the stored record.
    pub fn append(&self, author: impl Into<String>, body: impl Into<String>) -> Comment {
        let comment = Comment {
            id: Uuid::new_v4(),
            author: author.into(),
            body: body.into(),
            created_at: Utc::now(),
        };

        let mut comments = self.comments.lock().expect("comment store lock poisoned");
        comments.push(comment.clone());
        comment
    }

    /// Snapshot of every comment, oldest first.
    pub fn all(&self) -> Vec<Comment> {
        let comments = self.comments.lock().expect("comment store lock poisoned");
        comments.clone()
    }

    pub fn len(&self) -> usize {
        self.comments
            .lock()
            .expect("comment store lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for CommentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommentStore")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_log() {
        let store = CommentStore::new();
        let handle = store.clone();

        handle.append("alice", "first");

        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].author, "alice");
    }

    #[test]
    fn snapshot_is_detached_from_later_appends() {
        let store = CommentStore::new();
        store.append("alice", "first");

        let snapshot = store.all();
        store.append("bob", "second");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn concurrent_appends_are_all_kept() {
        let store = CommentStore::new();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for j in 0..25 {
                        store.append(format!("writer-{i}"), format!("{j}"));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 200);
    }
}
