//! Wire models.

use serde::{Deserialize, Serialize};

/// A product that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftProduct {
    pub name: String,
    pub price: f64,
}

/// A stored product.
///
/// Fields the server sends beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

/// Body of a non-success response.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub(crate) error: Option<String>,

    #[serde(default)]
    pub(crate) errors: Vec<FieldErrorBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FieldErrorBody {
    pub(crate) msg: String,
}

impl ErrorBody {
    pub(crate) fn into_messages(self) -> Vec<String> {
        self.error
            .into_iter()
            .chain(self.errors.into_iter().map(|error| error.msg))
            .collect()
    }
}
