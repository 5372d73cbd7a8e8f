/// A single search hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    /// 1-based position in the output order
    pub position: usize,

    /// Display title (may be empty)
    pub title: String,

    /// Destination URL, never empty
    pub link: String,

    /// Descriptive text (may be empty)
    pub snippet: String,
}

/// Ordered, contiguously numbered list of search hits
///
/// Records can only be added through [`ResultSet::accept`], which assigns
/// positions 1..N in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    records: Vec<ResultRecord>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record, numbering it after the ones already accepted
    pub fn accept(&mut self, title: String, link: String, snippet: String) -> &ResultRecord {
        let position = self.records.len() + 1;
        self.records.push(ResultRecord {
            position,
            title,
            link,
            snippet,
        });
        &self.records[position - 1]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ResultRecord;
    type IntoIter = std::slice::Iter<'a, ResultRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
