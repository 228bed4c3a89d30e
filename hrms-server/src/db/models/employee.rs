//! Employee Model (storage side)

use std::fmt;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use shared::models::Employee;

/// Identifier of a stored employee
///
/// Wraps the database-native document id. Parsing is validation only: ids
/// are created by storage, never by clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeId(ObjectId);

/// The path segment is not a 24-character hex document id
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid employee id: {0:?}")]
pub struct InvalidEmployeeId(pub String);

impl EmployeeId {
    /// Parse the hex form used on the wire
    pub fn parse(s: &str) -> Result<Self, InvalidEmployeeId> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| InvalidEmployeeId(s.to_string()))
    }

    /// Fresh id, for stores that assign ids themselves
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl From<ObjectId> for EmployeeId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

/// Employee document in the `employee` collection
///
/// `_id` is left out on insert so the database assigns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: f64,
    #[serde(default)]
    pub salary: f64,
}

impl From<EmployeeDocument> for Employee {
    fn from(doc: EmployeeDocument) -> Self {
        Employee {
            id: doc.id.map(|oid| oid.to_hex()),
            name: doc.name,
            age: doc.age,
            salary: doc.salary,
        }
    }
}

impl From<&Employee> for EmployeeDocument {
    /// Insert projection: the wire id is never trusted
    fn from(emp: &Employee) -> Self {
        EmployeeDocument {
            id: None,
            name: emp.name.clone(),
            age: emp.age,
            salary: emp.salary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_parse_valid_hex() {
        let id = EmployeeId::parse("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        assert_eq!(id.to_hex(), "65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(id.to_string(), "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "",
            "not-a-hex-id",
            "65a1f0c2e4b0a1b2c3d4e5f",
            "65a1f0c2e4b0a1b2c3d4e5f6a",
            "zza1f0c2e4b0a1b2c3d4e5f6",
        ] {
            assert_eq!(
                EmployeeId::parse(bad),
                Err(InvalidEmployeeId(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        assert_ne!(EmployeeId::generate(), EmployeeId::generate());
    }

    #[test]
    fn test_insert_projection_drops_id() {
        let emp = Employee {
            id: Some("65a1f0c2e4b0a1b2c3d4e5f6".to_string()),
            ..Employee::new("Ada", 36.0, 1000.0)
        };
        let document = bson::to_document(&EmployeeDocument::from(&emp)).unwrap();
        assert_eq!(
            document,
            doc! { "name": "Ada", "age": 36.0, "salary": 1000.0 }
        );
    }

    #[test]
    fn test_document_to_wire() {
        let oid = ObjectId::parse_str("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        let stored: EmployeeDocument =
            bson::from_document(doc! { "_id": oid, "name": "Ada", "age": 36, "salary": 1000.5 })
                .unwrap();
        let emp = Employee::from(stored);
        assert_eq!(emp.id.as_deref(), Some("65a1f0c2e4b0a1b2c3d4e5f6"));
        assert_eq!(emp.age, 36.0);
        assert_eq!(emp.salary, 1000.5);
    }
}
