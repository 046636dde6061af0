//! The `{"result": [...]}` response envelope.

use serde::Serialize;

/// Wraps CRUD responses as `{"result": [...]}`.
///
/// Single-record endpoints still return a one-element array.
#[derive(Debug, Serialize)]
pub struct ResultResponse<T: Serialize> {
    pub result: Vec<T>,
}

impl<T: Serialize> ResultResponse<T> {
    pub fn many(result: Vec<T>) -> Self {
        Self { result }
    }

    pub fn one(item: T) -> Self {
        Self { result: vec![item] }
    }

    pub fn empty() -> Self {
        Self { result: Vec::new() }
    }
}
