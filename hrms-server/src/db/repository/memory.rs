//! Employee Repository (in-process)
//!
//! Keeps employees in a map behind a lock. Backs the handler tests and is
//! handy for running the API without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::Employee;

use super::{EmployeeStore, RepoResult};
use crate::db::models::EmployeeId;

#[derive(Default)]
pub struct MemoryEmployeeRepository {
    employees: RwLock<BTreeMap<EmployeeId, Employee>>,
}

impl MemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.employees.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.read().is_empty()
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeRepository {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        Ok(self.employees.read().values().cloned().collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        Ok(self.employees.read().get(&id).cloned())
    }

    async fn insert_one(&self, employee: &Employee) -> RepoResult<EmployeeId> {
        let mut employees = self.employees.write();
        let mut id = EmployeeId::generate();
        while employees.contains_key(&id) {
            id = EmployeeId::generate();
        }
        let stored = Employee {
            id: Some(id.to_hex()),
            ..employee.without_id()
        };
        employees.insert(id, stored);
        Ok(id)
    }

    async fn update_one(&self, id: EmployeeId, employee: &Employee) -> RepoResult<u64> {
        match self.employees.write().get_mut(&id) {
            Some(stored) => {
                stored.name = employee.name.clone();
                stored.age = employee.age;
                stored.salary = employee.salary;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_one(&self, id: EmployeeId) -> RepoResult<u64> {
        Ok(self.employees.write().remove(&id).map_or(0, |_| 1))
    }
}
