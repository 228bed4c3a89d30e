//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee as it travels over the wire
///
/// `id` is the hex form of the storage-assigned document id and is omitted
/// when absent. Missing fields decode to their defaults (`""`, `0`), so a
/// partial body is a valid `Employee`. Whole numbers are written without
/// a fractional part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(serialize_with = "super::serde_helpers::number")]
    pub age: f64,
    #[serde(serialize_with = "super::serde_helpers::number")]
    pub salary: f64,
}

impl Employee {
    pub fn new(name: impl Into<String>, age: f64, salary: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            age,
            salary,
        }
    }

    /// Copy of this employee without its id
    ///
    /// Create requests never choose their own identifier.
    pub fn without_id(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }

    /// Combine a stored record with a partial update
    ///
    /// Each field of `update` that is non-empty (non-empty name, non-zero
    /// number) replaces the stored value; the rest keep what is stored. The
    /// stored id always wins.
    pub fn merge_update(&self, update: &Employee) -> Employee {
        Employee {
            id: self.id.clone(),
            name: if update.name.is_empty() {
                self.name.clone()
            } else {
                update.name.clone()
            },
            age: if update.age == 0.0 { self.age } else { update.age },
            salary: if update.salary == 0.0 {
                self.salary
            } else {
                update.salary
            },
        }
    }
}
