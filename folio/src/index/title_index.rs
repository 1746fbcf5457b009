use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};

use crate::common::fold;
use crate::config::FolioConfig;
use crate::errors::{ErrorKind, FolioError, FolioResult};
use crate::filter::{any_field, field, Filter};
use crate::index::{
    IndexStatistics, InOrder, LevelOrder, LevelWidths, Node, PostOrder, PreOrder,
};
use crate::record::{Record, RecordField, RecordId};
use crate::suggest::{rank, LookupOutcome, SuggestOptions, Suggestion};

/// The immediate children of a node found by title.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Children<'a> {
    pub left: Option<&'a Record>,
    pub right: Option<&'a Record>,
}

/// An in-memory binary search tree of catalog records, keyed by title.
///
/// Titles are compared case-insensitively. A title that is less than a node's
/// title goes left; an equal or greater one goes right, so duplicate titles are
/// kept as separate nodes with the later one below and to the right of the
/// earlier one. The tree is never rebalanced: its shape depends only on the
/// insertion order, and a title-sorted rebuild yields a right-leaning chain
/// whose lookups are linear.
///
/// The index is rebuilt rather than edited: [TitleIndex::clear] followed by one
/// [TitleIndex::ingest] per record. Queries borrow the tree and never modify
/// it. See [crate::catalog::Catalog] for sharing an index between threads.
///
/// # Examples
///
/// ```rust
/// use folio::index::TitleIndex;
/// use folio::record::Record;
///
/// let mut index = TitleIndex::new();
/// index.ingest(Record::new("Dune", "Frank Herbert", "Science Fiction"))?;
/// index.ingest(Record::new("Foundation", "Isaac Asimov", "Science Fiction"))?;
/// index.ingest(Record::new("1984", "George Orwell", "Dystopia"))?;
///
/// let titles: Vec<&str> = index.in_order().iter().map(|r| r.title()).collect();
/// assert_eq!(titles, vec!["1984", "Dune", "Foundation"]);
/// assert_eq!(index.height(), 2);
/// assert!(index.find_by_title("dune").is_some());
/// # Ok::<(), folio::errors::FolioError>(())
/// ```
pub struct TitleIndex {
    root: Option<Box<Node>>,
    len: usize,
    config: FolioConfig,
}

impl TitleIndex {
    /// Creates an empty index with the default configuration.
    pub fn new() -> Self {
        TitleIndex::with_config(FolioConfig::default())
    }

    /// Creates an empty index that takes its query defaults from `config`.
    pub fn with_config(config: FolioConfig) -> Self {
        TitleIndex {
            root: None,
            len: 0,
            config,
        }
    }

    /// Creates an index holding `records`, ingested in the given order.
    ///
    /// # Errors
    ///
    /// Fails on the first record [TitleIndex::ingest] rejects.
    pub fn build<I>(records: I) -> FolioResult<Self>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut index = TitleIndex::new();
        for record in records {
            index.ingest(record)?;
        }
        Ok(index)
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    /// The root node, for callers that inspect the tree shape.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Adds `record` as a new leaf.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if the title is empty or only
    /// whitespace. The tree is left unchanged in that case.
    pub fn ingest(&mut self, record: Record) -> FolioResult<()> {
        if record.title().trim().is_empty() {
            return Err(FolioError::new(
                &format!("Record {} has an empty title", describe(&record)),
                ErrorKind::MissingRequiredField,
            ));
        }

        let node = Box::new(Node::new(record));
        let mut slot = &mut self.root;
        while let Some(current) = slot {
            slot = if node.key() < current.key() {
                &mut current.left
            } else {
                &mut current.right
            };
        }
        *slot = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Total number of nodes, counted by walking the tree.
    pub fn count(&self) -> usize {
        self.iter_pre_order().count()
    }

    /// Number of records ingested since the last clear, without a walk.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn iter_pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(self.root())
    }

    pub fn iter_in_order(&self) -> InOrder<'_> {
        InOrder::new(self.root())
    }

    pub fn iter_post_order(&self) -> PostOrder<'_> {
        PostOrder::new(self.root())
    }

    pub fn iter_level_order(&self) -> LevelOrder<'_> {
        LevelOrder::new(self.root())
    }

    pub fn pre_order(&self) -> Vec<&Record> {
        self.iter_pre_order().collect()
    }

    /// All records in ascending case-insensitive title order.
    pub fn in_order(&self) -> Vec<&Record> {
        self.iter_in_order().collect()
    }

    pub fn post_order(&self) -> Vec<&Record> {
        self.iter_post_order().collect()
    }

    pub fn level_order(&self) -> Vec<&Record> {
        self.iter_level_order().collect()
    }

    /// Finds the first record whose title equals `title`, ignoring case.
    ///
    /// Descends from the root, so the cost is the length of one path. With
    /// duplicate titles the one closest to the root, which is the one ingested
    /// first, is returned.
    pub fn find_by_title(&self, title: &str) -> Option<&Record> {
        self.find_node(&fold(title)).map(Node::record)
    }

    /// Finds the first record carrying `id`.
    ///
    /// Titles say nothing about ids, so this walks the whole tree.
    pub fn find_by_id(&self, id: u64) -> Option<&Record> {
        let id = RecordId::new(id);
        self.iter_pre_order().find(|record| record.id() == Some(id))
    }

    /// Records accepted by `filter`, in title order.
    pub fn find(&self, filter: &Filter) -> Vec<&Record> {
        self.iter_in_order()
            .filter(|record| filter.apply(record))
            .collect()
    }

    /// Records whose author contains `term`, ignoring case.
    pub fn search_by_author(&self, term: &str) -> Vec<&Record> {
        self.find(&field(RecordField::Author).contains(term))
    }

    /// Records whose genre contains `term`, ignoring case.
    pub fn search_by_genre(&self, term: &str) -> Vec<&Record> {
        self.find(&field(RecordField::Genre).contains(term))
    }

    /// Records where any of title, author, genre, isbn or editorial contains
    /// `term`, ignoring case.
    pub fn search_general(&self, term: &str) -> Vec<&Record> {
        self.find(&any_field().contains(term))
    }

    /// Records whose configured prefix field (title unless changed) starts
    /// with `prefix`, ignoring case.
    pub fn search_by_prefix(&self, prefix: &str) -> Vec<&Record> {
        self.search_by_prefix_on(prefix, self.config.prefix_field())
    }

    /// Records whose `field` starts with `prefix`, ignoring case.
    pub fn search_by_prefix_on(&self, prefix: &str, field_name: RecordField) -> Vec<&Record> {
        self.find(&field(field_name).starts_with(prefix))
    }

    /// Up to `max_results` records within `max_distance` edits of `term`,
    /// closest first.
    ///
    /// The distance of a record is the smaller of its title and author
    /// distances. Records at the same distance keep their title order.
    pub fn suggest(&self, term: &str, max_results: usize, max_distance: usize) -> Vec<&Record> {
        self.ranked_suggestions(term, SuggestOptions::new(max_results, max_distance))
            .into_iter()
            .map(|suggestion| suggestion.record)
            .collect()
    }

    /// [TitleIndex::suggest] with the configured limit and distance.
    pub fn suggest_default(&self, term: &str) -> Vec<&Record> {
        let options = SuggestOptions::from_config(&self.config);
        self.suggest(term, options.max_results, options.max_distance)
    }

    /// Like [TitleIndex::suggest], but keeps the distances.
    pub fn ranked_suggestions(&self, term: &str, options: SuggestOptions) -> Vec<Suggestion<'_>> {
        rank(self.iter_in_order(), term, options)
    }

    /// Runs a general search and falls back to suggestions when it finds
    /// nothing.
    pub fn lookup(&self, term: &str) -> LookupOutcome<'_> {
        let matches = self.search_general(term);
        if !matches.is_empty() {
            return LookupOutcome::Matches(matches);
        }

        let suggestions = self.suggest_default(term);
        if suggestions.is_empty() {
            LookupOutcome::Nothing
        } else {
            LookupOutcome::Suggestions(suggestions)
        }
    }

    /// Number of levels: 0 when empty, 1 for a lone root.
    pub fn height(&self) -> usize {
        LevelWidths::new(self.root()).count()
    }

    /// Largest number of nodes on a single level.
    pub fn width(&self) -> usize {
        LevelWidths::new(self.root()).max().unwrap_or(0)
    }

    pub fn statistics(&self) -> IndexStatistics {
        let (height, width) = LevelWidths::new(self.root())
            .fold((0, 0), |(height, width), level| (height + 1, width.max(level)));
        IndexStatistics {
            count: self.count(),
            height,
            width,
            is_empty: self.is_empty(),
        }
    }

    /// Left and right children of the node titled `title`.
    ///
    /// Returns `None` if no node has that title; a leaf yields two `None`
    /// children.
    pub fn children_of(&self, title: &str) -> Option<Children<'_>> {
        self.find_node(&fold(title)).map(|node| Children {
            left: node.left().map(Node::record),
            right: node.right().map(Node::record),
        })
    }

    /// Parent of the node titled `title`.
    ///
    /// Returns `None` if no node has that title or if it is the root.
    pub fn parent_of(&self, title: &str) -> Option<&Record> {
        let key = fold(title);
        let mut parent: Option<&Node> = None;
        let mut current = self.root();
        while let Some(node) = current {
            match key.as_str().cmp(node.key()) {
                Ordering::Equal => return parent.map(Node::record),
                Ordering::Less => {
                    parent = Some(node);
                    current = node.left();
                }
                Ordering::Greater => {
                    parent = Some(node);
                    current = node.right();
                }
            }
        }
        None
    }

    /// Number of edges between the root and the node titled `title`.
    pub fn depth_of(&self, title: &str) -> Option<usize> {
        let key = fold(title);
        let mut depth = 0;
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.as_str().cmp(node.key()) {
                Ordering::Equal => return Some(depth),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }
        None
    }

    /// The record with the smallest title.
    pub fn min_title(&self) -> Option<&Record> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.record())
    }

    /// The record with the largest title; the last ingested one among equals.
    pub fn max_title(&self) -> Option<&Record> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.record())
    }

    fn find_node(&self, key: &str) -> Option<&Node> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(node.key()) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }
        None
    }
}

impl Default for TitleIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for TitleIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitleIndex")
            .field("len", &self.len)
            .field("root", &self.root().map(|node| node.record().title()))
            .finish()
    }
}

fn describe(record: &Record) -> String {
    match record.id() {
        Some(id) => format!("with id {}", id),
        None => format!("by '{}'", record.author()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::field;

    fn book(title: &str, author: &str, genre: &str) -> Record {
        Record::new(title, author, genre)
    }

    fn scenario() -> TitleIndex {
        TitleIndex::build(vec![
            book("Dune", "Frank Herbert", "Science Fiction").with_id(1),
            book("Foundation", "Isaac Asimov", "Science Fiction").with_id(2),
            book("1984", "George Orwell", "Dystopia").with_id(3),
        ])
        .unwrap()
    }

    //            Neuromancer
    //           /           \
    //        Emma          The Road
    //       /    \         /
    //    Beloved  Hamlet  Rebecca
    fn library() -> TitleIndex {
        TitleIndex::build(vec![
            book("Neuromancer", "William Gibson", "Cyberpunk").with_id(10),
            book("Emma", "Jane Austen", "Classic").with_id(11),
            book("The Road", "Cormac McCarthy", "Post-apocalyptic").with_id(12),
            book("Beloved", "Toni Morrison", "Historical Fiction")
                .with_id(13)
                .with_editorial("Knopf"),
            book("Hamlet", "William Shakespeare", "Tragedy").with_id(14),
            book("Rebecca", "Daphne du Maurier", "Gothic")
                .with_id(15)
                .with_isbn("978-0380730407"),
        ])
        .unwrap()
    }

    fn titles(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.title().to_string()).collect()
    }

    #[test]
    fn test_scenario_in_order_and_height() {
        let index = scenario();
        assert_eq!(titles(&index.in_order()), vec!["1984", "Dune", "Foundation"]);
        assert_eq!(index.height(), 2);
        assert_eq!(index.width(), 2);
    }

    #[test]
    fn test_scenario_find_by_title_ignores_case() {
        let index = scenario();
        let dune = index.find_by_title("dune").unwrap();
        assert_eq!(dune.title(), "Dune");
        assert!(index.find_by_title("DUNE").is_some());
        assert!(index.find_by_title("Dune Messiah").is_none());
    }

    #[test]
    fn test_scenario_suggest() {
        let index = scenario();
        let ranked = index.ranked_suggestions("Dune ", SuggestOptions::new(5, 3));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].record.title(), "Dune");
        assert_eq!(ranked[0].distance, 1);
        assert_eq!(titles(&index.suggest("Dune ", 5, 3)), vec!["Dune"]);
    }

    #[test]
    fn test_empty_index() {
        let index = TitleIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.count(), 0);
        assert_eq!(index.len(), 0);
        assert_eq!(index.height(), 0);
        assert_eq!(index.width(), 0);
        assert!(index.in_order().is_empty());
        assert!(index.pre_order().is_empty());
        assert!(index.post_order().is_empty());
        assert!(index.find_by_title("anything").is_none());
        assert!(index.find_by_id(1).is_none());
        assert!(index.search_general("anything").is_empty());
        assert!(index.search_by_prefix("a").is_empty());
        assert!(index.suggest_default("anything").is_empty());
        assert!(index.children_of("anything").is_none());
        assert!(index.parent_of("anything").is_none());
        assert!(index.min_title().is_none());
        assert_eq!(index.lookup("anything"), LookupOutcome::Nothing);
        assert_eq!(
            index.statistics(),
            IndexStatistics {
                count: 0,
                height: 0,
                width: 0,
                is_empty: true
            }
        );
    }

    #[test]
    fn test_ingest_rejects_blank_title() {
        let mut index = scenario();
        let err = index.ingest(book("   ", "Nobody", "None").with_id(99)).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::MissingRequiredField);
        assert!(err.message().contains("99"));
        assert_eq!(index.count(), 3);

        let err = index.ingest(book("", "Nobody", "None")).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::MissingRequiredField);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_duplicate_titles_go_right() {
        let mut index = TitleIndex::new();
        index.ingest(book("Dune", "Frank Herbert", "SF").with_id(1)).unwrap();
        index.ingest(book("dune", "Someone Else", "SF").with_id(2)).unwrap();

        assert_eq!(index.count(), 2);
        let root = index.root().unwrap();
        assert!(root.left().is_none());
        assert_eq!(root.right().unwrap().record().id(), Some(RecordId::new(2)));
        // the first one ingested wins the lookup
        assert_eq!(index.find_by_title("DUNE").unwrap().id(), Some(RecordId::new(1)));
        assert_eq!(index.parent_of("dune").map(|r| r.title()), None);
    }

    #[test]
    fn test_clear_then_reingest() {
        let mut index = scenario();
        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.count(), 0);

        index.ingest(book("Emma", "Jane Austen", "Classic")).unwrap();
        assert_eq!(index.count(), 1);
        assert_eq!(index.height(), 1);
    }

    #[test]
    fn test_traversals() {
        let index = library();
        assert_eq!(
            titles(&index.pre_order()),
            vec!["Neuromancer", "Emma", "Beloved", "Hamlet", "The Road", "Rebecca"]
        );
        assert_eq!(
            titles(&index.in_order()),
            vec!["Beloved", "Emma", "Hamlet", "Neuromancer", "Rebecca", "The Road"]
        );
        assert_eq!(
            titles(&index.post_order()),
            vec!["Beloved", "Hamlet", "Emma", "Rebecca", "The Road", "Neuromancer"]
        );
        assert_eq!(
            titles(&index.level_order()),
            vec!["Neuromancer", "Emma", "The Road", "Beloved", "Hamlet", "Rebecca"]
        );
    }

    #[test]
    fn test_find_by_id_scans_whole_tree() {
        let index = library();
        assert_eq!(index.find_by_id(15).map(|r| r.title()), Some("Rebecca"));
        assert_eq!(index.find_by_id(10).map(|r| r.title()), Some("Neuromancer"));
        assert!(index.find_by_id(404).is_none());
    }

    #[test]
    fn test_search_by_author() {
        let index = library();
        assert_eq!(
            titles(&index.search_by_author("WILLIAM")),
            vec!["Hamlet", "Neuromancer"]
        );
        assert!(index.search_by_author("tolkien").is_empty());
    }

    #[test]
    fn test_search_by_genre() {
        let index = library();
        assert_eq!(titles(&index.search_by_genre("fiction")), vec!["Beloved"]);
        assert_eq!(titles(&index.search_by_genre("goth")), vec!["Rebecca"]);
    }

    #[test]
    fn test_search_general_checks_optional_fields() {
        let index = library();
        assert_eq!(titles(&index.search_general("knopf")), vec!["Beloved"]);
        assert_eq!(titles(&index.search_general("0380730407")), vec!["Rebecca"]);
        assert_eq!(
            titles(&index.search_general("re")),
            vec!["Hamlet", "Rebecca"]
        );
    }

    #[test]
    fn test_search_by_prefix() {
        let index = library();
        assert_eq!(titles(&index.search_by_prefix("the")), vec!["The Road"]);
        assert_eq!(titles(&index.search_by_prefix("")).len(), 6);
        assert_eq!(
            titles(&index.search_by_prefix_on("will", RecordField::Author)),
            vec!["Hamlet", "Neuromancer"]
        );
    }

    #[test]
    fn test_search_by_prefix_uses_configured_field() {
        let config = FolioConfig::new().with_prefix_field(RecordField::Genre);
        let mut index = TitleIndex::with_config(config);
        index.ingest(book("Emma", "Jane Austen", "Classic")).unwrap();
        index.ingest(book("Dracula", "Bram Stoker", "Gothic")).unwrap();
        assert_eq!(titles(&index.search_by_prefix("goth")), vec!["Dracula"]);
    }

    #[test]
    fn test_find_with_custom_filter() {
        let index = library();
        let filter = field("author").contains("william").and(field("genre").contains("cyber"));
        assert_eq!(titles(&index.find(&filter)), vec!["Neuromancer"]);
    }

    #[test]
    fn test_suggest_default_uses_config() {
        let config = FolioConfig::new()
            .with_suggestion_limit(1)
            .with_suggestion_max_distance(2);
        let mut index = TitleIndex::with_config(config);
        index.ingest(book("Emma", "Jane Austen", "Classic")).unwrap();
        index.ingest(book("Emmy", "Someone", "Drama")).unwrap();
        assert_eq!(titles(&index.suggest_default("emm")), vec!["Emma"]);
    }

    #[test]
    fn test_lookup_falls_back_to_suggestions() {
        let index = library();
        match index.lookup("hamlett") {
            LookupOutcome::Suggestions(records) => assert_eq!(titles(&records), vec!["Hamlet"]),
            other => panic!("expected suggestions, got {:?}", other),
        }
        match index.lookup("hamlet") {
            LookupOutcome::Matches(records) => assert_eq!(titles(&records), vec!["Hamlet"]),
            other => panic!("expected matches, got {:?}", other),
        }
        assert_eq!(index.lookup("zzzzzzzzzzzz"), LookupOutcome::Nothing);
    }

    #[test]
    fn test_shape_queries() {
        let index = library();
        assert_eq!(index.height(), 3);
        assert_eq!(index.width(), 3);
        assert_eq!(index.count(), 6);
        assert_eq!(index.len(), 6);
        assert_eq!(
            index.statistics(),
            IndexStatistics {
                count: 6,
                height: 3,
                width: 3,
                is_empty: false
            }
        );
    }

    #[test]
    fn test_children_of() {
        let index = library();
        let children = index.children_of("emma").unwrap();
        assert_eq!(children.left.map(|r| r.title()), Some("Beloved"));
        assert_eq!(children.right.map(|r| r.title()), Some("Hamlet"));

        let children = index.children_of("The Road").unwrap();
        assert_eq!(children.left.map(|r| r.title()), Some("Rebecca"));
        assert!(children.right.is_none());

        let leaf = index.children_of("Hamlet").unwrap();
        assert_eq!(leaf, Children { left: None, right: None });
        assert!(index.children_of("Ulysses").is_none());
    }

    #[test]
    fn test_parent_of() {
        let index = library();
        assert_eq!(index.parent_of("rebecca").map(|r| r.title()), Some("The Road"));
        assert_eq!(index.parent_of("Emma").map(|r| r.title()), Some("Neuromancer"));
        assert!(index.parent_of("Neuromancer").is_none());
        assert!(index.parent_of("Ulysses").is_none());
    }

    #[test]
    fn test_depth_min_max() {
        let index = library();
        assert_eq!(index.depth_of("Neuromancer"), Some(0));
        assert_eq!(index.depth_of("hamlet"), Some(2));
        assert_eq!(index.depth_of("Ulysses"), None);
        assert_eq!(index.min_title().map(|r| r.title()), Some("Beloved"));
        assert_eq!(index.max_title().map(|r| r.title()), Some("The Road"));
    }

    #[test]
    fn test_sorted_input_builds_a_chain() {
        let titles: Vec<String> = (0..5_000).map(|i| format!("title {:05}", i)).collect();
        let index = TitleIndex::build(titles.iter().map(|t| book(t, "a", "g"))).unwrap();
        assert_eq!(index.height(), 5_000);
        assert_eq!(index.width(), 1);
        assert_eq!(index.count(), 5_000);
        assert_eq!(
            index.find_by_title("TITLE 04999").map(|r| r.title()),
            Some("title 04999")
        );
        assert_eq!(index.in_order().len(), 5_000);
        assert_eq!(index.post_order().first().map(|r| r.title()), Some("title 04999"));
    }

    #[test]
    fn test_debug_output() {
        let index = scenario();
        let formatted = format!("{:?}", index);
        assert!(formatted.contains("len: 3"));
        assert!(formatted.contains("Dune"));
    }
}
