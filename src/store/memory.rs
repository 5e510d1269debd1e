//! In-Memory Store
//!
//! Vec-backed student store keeping insertion order, with the same identifier
//! rules as the MongoDB backend.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{DeleteOutcome, NewStudent, Student, StudentPatch};
use crate::store::{new_object_id, parse_object_id, Result, StudentStore};

// == Memory Store ==
/// Process-local student storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Records in insertion order
    students: RwLock<Vec<Student>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty MemoryStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Length ==
    /// Returns the current number of records.
    pub async fn len(&self) -> usize {
        self.students.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.students.read().await.is_empty()
    }

    // == Modify ==
    /// Applies `change` to the record with `id` and returns its new state.
    async fn modify<F>(&self, id: &str, change: F) -> Result<Option<Student>>
    where
        F: FnOnce(&mut Student) + Send,
    {
        let id = parse_object_id(id)?.to_hex();
        let mut students = self.students.write().await;

        Ok(students.iter_mut().find(|s| s.id == id).map(|student| {
            change(student);
            student.clone()
        }))
    }
}

#[async_trait]
impl StudentStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Student>> {
        Ok(self.students.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Student>> {
        let id = parse_object_id(id)?.to_hex();
        let students = self.students.read().await;
        Ok(students.iter().find(|s| s.id == id).cloned())
    }

    async fn insert(&self, student: NewStudent) -> Result<Student> {
        let student = student.into_student(new_object_id());
        self.students.write().await.push(student.clone());
        Ok(student)
    }

    async fn replace(&self, id: &str, student: NewStudent) -> Result<Option<Student>> {
        self.modify(id, move |current| {
            *current = student.into_student(current.id.clone());
        })
        .await
    }

    async fn update(&self, id: &str, patch: StudentPatch) -> Result<Option<Student>> {
        self.modify(id, move |current| patch.apply_to(current)).await
    }

    async fn delete(&self, id: &str) -> Result<DeleteOutcome> {
        let id = parse_object_id(id)?.to_hex();
        let mut students = self.students.write().await;

        match students.iter().position(|s| s.id == id) {
            Some(index) => {
                students.remove(index);
                Ok(DeleteOutcome::deleted(1))
            }
            None => Ok(DeleteOutcome::deleted(0)),
        }
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
