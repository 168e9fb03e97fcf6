use serde::{Deserialize, Serialize};

/// A single registry entry.
///
/// The same shape is used for request bodies, response bodies, and the rows
/// of the persisted CSV file (header `id,firstName,lastName,taxCode`), so
/// the wire names are fixed to camelCase here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Caller-supplied identifier, unique across the collection.
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    /// 16-character uppercase alphanumeric tax code, unique across the
    /// collection. Format rules live in [`super::taxcode`].
    pub tax_code: String,
}
