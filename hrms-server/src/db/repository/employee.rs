//! Employee Repository (MongoDB)

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};
use shared::models::Employee;

use super::{EmployeeStore, RepoError, RepoResult};
use crate::core::config::EMPLOYEE_COLLECTION;
use crate::db::models::{EmployeeDocument, EmployeeId};

#[derive(Clone)]
pub struct MongoEmployeeRepository {
    collection: Collection<EmployeeDocument>,
}

impl MongoEmployeeRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(EMPLOYEE_COLLECTION),
        }
    }
}

#[async_trait]
impl EmployeeStore for MongoEmployeeRepository {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<EmployeeDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let document = self
            .collection
            .find_one(doc! { "_id": id.as_object_id() })
            .await?;
        Ok(document.map(Employee::from))
    }

    async fn insert_one(&self, employee: &Employee) -> RepoResult<EmployeeId> {
        let result = self
            .collection
            .insert_one(EmployeeDocument::from(employee))
            .await?;
        result
            .inserted_id
            .as_object_id()
            .map(EmployeeId::from)
            .ok_or_else(|| {
                RepoError::InvalidDocument(format!(
                    "inserted id is not an ObjectId: {}",
                    result.inserted_id
                ))
            })
    }

    async fn update_one(&self, id: EmployeeId, employee: &Employee) -> RepoResult<u64> {
        let update = doc! {
            "$set": {
                "name": employee.name.clone(),
                "age": employee.age,
                "salary": employee.salary,
            }
        };
        let result = self
            .collection
            .update_one(doc! { "_id": id.as_object_id() }, update)
            .await?;
        Ok(result.matched_count)
    }

    async fn delete_one(&self, id: EmployeeId) -> RepoResult<u64> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.as_object_id() })
            .await?;
        Ok(result.deleted_count)
    }
}
