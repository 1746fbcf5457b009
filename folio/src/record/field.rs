use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::errors::{ErrorKind, FolioError, FolioResult};

/// A searchable field of a [crate::record::Record].
///
/// Named fields parse case-insensitively from their lowercase names
/// (`"title"`, `"author"`, `"genre"`, `"isbn"`, `"editorial"`). Any other
/// non-empty name addresses a passthrough extra.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum RecordField {
    #[default]
    Title,
    Author,
    Genre,
    Isbn,
    Editorial,
    Extra(String),
}

impl RecordField {
    pub fn name(&self) -> &str {
        match self {
            RecordField::Title => "title",
            RecordField::Author => "author",
            RecordField::Genre => "genre",
            RecordField::Isbn => "isbn",
            RecordField::Editorial => "editorial",
            RecordField::Extra(name) => name,
        }
    }
}

impl From<&str> for RecordField {
    fn from(name: &str) -> Self {
        let trimmed = name.trim();
        match trimmed.to_lowercase().as_str() {
            "title" => RecordField::Title,
            "author" => RecordField::Author,
            "genre" => RecordField::Genre,
            "isbn" => RecordField::Isbn,
            "editorial" => RecordField::Editorial,
            _ => RecordField::Extra(trimmed.to_string()),
        }
    }
}

impl FromStr for RecordField {
    type Err = FolioError;

    /// Like the `From<&str>` conversion, but rejects a blank name.
    fn from_str(name: &str) -> FolioResult<Self> {
        if name.trim().is_empty() {
            return Err(FolioError::new(
                "Field name cannot be empty",
                ErrorKind::InvalidFieldName,
            ));
        }
        Ok(RecordField::from(name))
    }
}

impl Display for RecordField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
