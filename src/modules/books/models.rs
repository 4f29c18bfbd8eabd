use serde::{Deserialize, Serialize};

use super::error::{CatalogError, CatalogResult};

/// Identifier assigned by the store on insertion
pub type BookId = u64;

/// A catalogued book with its inventory counters.
///
/// `total_available` never exceeds `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub author: String,
    pub genre: String,
    /// Physical copies owned
    pub quantity: u32,
    /// Copies currently loanable
    pub total_available: u32,
}

/// Request model for creating a new book.
///
/// Counters are signed so a negative value reaches validation instead of
/// failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    pub name: String,
    pub author: String,
    pub genre: String,
    pub quantity: i64,
    pub total_available: i64,
}

/// Validated book fields awaiting an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub name: String,
    pub author: String,
    pub genre: String,
    pub quantity: u32,
    pub total_available: u32,
}

impl NewBook {
    pub(crate) fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            name: self.name,
            author: self.author,
            genre: self.genre,
            quantity: self.quantity,
            total_available: self.total_available,
        }
    }
}

impl CreateBook {
    /// Check the payload and convert it into store-ready fields.
    ///
    /// Text fields are kept verbatim; the name is matched exactly by the
    /// store's uniqueness check.
    pub fn validate(self) -> CatalogResult<NewBook> {
        require_text("name", &self.name)?;
        require_text("author", &self.author)?;
        require_text("genre", &self.genre)?;

        let quantity = counter("quantity", self.quantity)?;
        let total_available = counter("totalAvailable", self.total_available)?;
        if total_available > quantity {
            return Err(CatalogError::validation(
                "totalAvailable",
                format!("must not exceed quantity ({quantity})"),
            ));
        }

        Ok(NewBook {
            name: self.name,
            author: self.author,
            genre: self.genre,
            quantity,
            total_available,
        })
    }
}

fn require_text(field: &'static str, value: &str) -> CatalogResult<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::validation(field, "must not be empty"));
    }
    Ok(())
}

fn counter(field: &'static str, value: i64) -> CatalogResult<u32> {
    if value < 0 {
        return Err(CatalogError::validation(field, "must not be negative"));
    }
    u32::try_from(value)
        .map_err(|_| CatalogError::validation(field, format!("must not exceed {}", u32::MAX)))
}
