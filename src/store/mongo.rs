//! MongoDB Store
//!
//! Student store backed by a MongoDB collection. The client is a connection
//! pool; constructing it does not contact the server, so an unreachable
//! database only surfaces on the first operation or [`StudentStore::ping`].

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{ClientOptions, FindOneAndUpdateOptions, ReturnDocument},
    Client, Collection,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{DeleteOutcome, NewStudent, Scholarship, Student, StudentPatch};
use crate::store::{parse_object_id, Result, StudentStore};

/// Stored shape of a student document.
///
/// Documents written by older clients may lack the scholarship or one of its
/// amounts; those read back as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StudentDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    age: i32,
    major: String,
    #[serde(default)]
    scholarship: ScholarshipDocument,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct ScholarshipDocument {
    #[serde(default)]
    merit: f64,
    #[serde(default)]
    other: f64,
}

impl StudentDocument {
    fn new(id: ObjectId, student: NewStudent) -> Self {
        Self {
            id,
            name: student.name,
            age: student.age,
            major: student.major,
            scholarship: ScholarshipDocument {
                merit: student.scholarship.merit,
                other: student.scholarship.other,
            },
        }
    }
}

impl From<StudentDocument> for Student {
    fn from(doc: StudentDocument) -> Self {
        Student {
            id: doc.id.to_hex(),
            name: doc.name,
            age: doc.age,
            major: doc.major,
            scholarship: Scholarship {
                merit: doc.scholarship.merit,
                other: doc.scholarship.other,
            },
        }
    }
}

// == Mongo Store ==
/// MongoDB-backed student store.
#[derive(Debug, Clone)]
pub struct MongoStore {
    client: Client,
    collection: Collection<StudentDocument>,
}

impl MongoStore {
    /// Builds the client for `uri` and binds the target collection.
    ///
    /// Fails only on an unparseable URI; reachability is checked separately.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let mut options = ClientOptions::parse(uri).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(options)?;
        let collection = client.database(database).collection(collection);

        Ok(Self { client, collection })
    }

    fn return_updated() -> FindOneAndUpdateOptions {
        FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build()
    }
}

/// Builds the `$set` body of a partial update using dotted paths for the
/// scholarship amounts.
fn patch_document(patch: StudentPatch) -> Document {
    let mut set = Document::new();
    if let Some(name) = patch.name {
        set.insert("name", name);
    }
    if let Some(age) = patch.age {
        set.insert("age", age);
    }
    if let Some(major) = patch.major {
        set.insert("major", major);
    }
    if let Some(merit) = patch.merit {
        set.insert("scholarship.merit", merit);
    }
    if let Some(other) = patch.other {
        set.insert("scholarship.other", other);
    }
    set
}

#[async_trait]
impl StudentStore for MongoStore {
    async fn find_all(&self) -> Result<Vec<Student>> {
        let cursor = self.collection.find(None, None).await?;
        let documents: Vec<StudentDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Student::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Student>> {
        let oid = parse_object_id(id)?;
        let found = self.collection.find_one(doc! { "_id": oid }, None).await?;
        Ok(found.map(Student::from))
    }

    async fn insert(&self, student: NewStudent) -> Result<Student> {
        let document = StudentDocument::new(ObjectId::new(), student);
        self.collection.insert_one(&document, None).await?;
        debug!(id = %document.id, "inserted student");
        Ok(document.into())
    }

    async fn replace(&self, id: &str, student: NewStudent) -> Result<Option<Student>> {
        let oid = parse_object_id(id)?;
        let update = doc! {
            "$set": {
                "name": student.name,
                "age": student.age,
                "major": student.major,
                "scholarship": {
                    "merit": student.scholarship.merit,
                    "other": student.scholarship.other,
                },
            }
        };

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, update, Self::return_updated())
            .await?;
        Ok(updated.map(Student::from))
    }

    async fn update(&self, id: &str, patch: StudentPatch) -> Result<Option<Student>> {
        let oid = parse_object_id(id)?;
        let filter = doc! { "_id": oid };

        // An empty $set is rejected by the server; nothing to change means a plain read.
        if patch.is_empty() {
            let found = self.collection.find_one(filter, None).await?;
            return Ok(found.map(Student::from));
        }

        let update = doc! { "$set": patch_document(patch) };
        let updated = self
            .collection
            .find_one_and_update(filter, update, Self::return_updated())
            .await?;
        Ok(updated.map(Student::from))
    }

    async fn delete(&self, id: &str) -> Result<DeleteOutcome> {
        let oid = parse_object_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }, None).await?;
        Ok(DeleteOutcome::deleted(result.deleted_count))
    }

    async fn ping(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
    }

    fn backend(&self) -> &'static str {
        "mongodb"
    }
}
