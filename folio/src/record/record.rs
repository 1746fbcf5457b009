use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use crate::common::Value;
use crate::record::RecordField;

/// Storage identifier of a record.
///
/// The index keeps no ordering on ids; [crate::index::TitleIndex::find_by_id]
/// is a full scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RecordId(u64);

impl RecordId {
    pub fn new(id: u64) -> Self {
        RecordId(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId(id)
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One catalog entry, as loaded by the storage layer.
///
/// A record is a snapshot: the index stores it by value and hands out shared
/// references, it never edits one. `title` is the ordering key and is compared
/// case-insensitively; `author` and `genre` are searchable text; `isbn` and
/// `editorial` are optional searchable text. Anything else the loader knows
/// about the book goes into `extras` and is carried along untouched.
///
/// Records are not validated on construction. [crate::index::TitleIndex::ingest]
/// rejects a record whose title is empty.
///
/// # Examples
///
/// ```rust
/// use folio::record::Record;
///
/// let record = Record::new("Dune", "Frank Herbert", "Science Fiction")
///     .with_id(7)
///     .with_isbn("978-0441013593")
///     .with_extra("pages", 412);
///
/// assert_eq!(record.title(), "Dune");
/// assert_eq!(record.id().map(|id| id.value()), Some(7));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    id: Option<RecordId>,
    title: String,
    author: String,
    genre: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    isbn: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    editorial: Option<String>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    extras: BTreeMap<String, Value>,
}

impl Record {
    /// Creates a record with the three required fields.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Record {
            id: None,
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            isbn: None,
            editorial: None,
            extras: BTreeMap::new(),
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(RecordId::new(id));
        self
    }

    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    pub fn with_editorial(mut self, editorial: impl Into<String>) -> Self {
        self.editorial = Some(editorial.into());
        self
    }

    /// Attaches an opaque passthrough attribute.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn isbn(&self) -> Option<&str> {
        self.isbn.as_deref()
    }

    pub fn editorial(&self) -> Option<&str> {
        self.editorial.as_deref()
    }

    pub fn extras(&self) -> &BTreeMap<String, Value> {
        &self.extras
    }

    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extras.get(key)
    }

    /// Returns the text of `field`, if the record has a textual value for it.
    ///
    /// Extra fields only yield text when they hold a [Value::String].
    pub fn field_text(&self, field: &RecordField) -> Option<&str> {
        match field {
            RecordField::Title => Some(self.title()),
            RecordField::Author => Some(self.author()),
            RecordField::Genre => Some(self.genre()),
            RecordField::Isbn => self.isbn(),
            RecordField::Editorial => self.editorial(),
            RecordField::Extra(name) => self.extra(name).and_then(Value::as_str),
        }
    }

    /// Iterates over the texts matched by a general search: title, author,
    /// genre, then isbn and editorial when present.
    pub(crate) fn searchable_texts(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.title()),
            Some(self.author()),
            Some(self.genre()),
            self.isbn(),
            self.editorial(),
        ]
        .into_iter()
        .flatten()
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" by {}", self.title, self.author)
    }
}
