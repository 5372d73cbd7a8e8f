use scraper::{ElementRef, Html, Selector};

/// An owned, mutable HTML document scoped to a single extraction
///
/// The underlying tree is not `Send`; create it, query it and drop it
/// without crossing an `.await`.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a raw HTML string into a document
    ///
    /// Never fails: the HTML5 parser recovers from any input, so partial or
    /// malformed markup yields a (possibly empty) tree.
    ///
    /// # Example
    ///
    /// ```
    /// use duckscribe::markup::{inner_text, Document};
    ///
    /// let doc = Document::parse("<p class='a'>  hi </p>");
    /// let found = doc.select(".a");
    /// assert_eq!(inner_text(found[0]), "hi");
    /// ```
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Returns every element matching `selector`, in document order
    pub fn select(&self, selector: &str) -> Vec<ElementRef<'_>> {
        match compile(selector) {
            Some(selector) => self.html.select(&selector).collect(),
            None => Vec::new(),
        }
    }

    /// Detaches every element matching `selector` from the tree
    ///
    /// Returns the number of elements removed. Matches nested inside an
    /// already removed subtree are counted too.
    pub fn remove_all(&mut self, selector: &str) -> usize {
        let Some(selector) = compile(selector) else {
            return 0;
        };

        let ids: Vec<_> = self.html.select(&selector).map(|el| el.id()).collect();
        for id in &ids {
            if let Some(mut node) = self.html.tree.get_mut(*id) {
                node.detach();
            }
        }

        ids.len()
    }

    /// Returns the raw (untrimmed) text of the `<body>` element
    ///
    /// Empty when the document has no body.
    pub fn body_text(&self) -> String {
        self.select("body")
            .first()
            .map(|body| body.text().collect::<String>())
            .unwrap_or_default()
    }
}

/// Returns every descendant of `element` matching `selector`, in document order
pub fn select_within<'a>(element: ElementRef<'a>, selector: &str) -> Vec<ElementRef<'a>> {
    match compile(selector) {
        Some(selector) => element.select(&selector).collect(),
        None => Vec::new(),
    }
}

/// Returns the concatenated text of `element` with surrounding whitespace trimmed
pub fn inner_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Returns the text of every element in `elements`, concatenated in order
/// and trimmed as a whole
///
/// Text is not separated between elements, so
/// `<a>one</a> <a>two</a>` yields `"onetwo"`. An empty slice yields `""`.
pub fn joined_text(elements: &[ElementRef<'_>]) -> String {
    elements
        .iter()
        .flat_map(|element| element.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Returns the value of attribute `name`
///
/// `None` means the attribute is absent; an attribute present with no value
/// yields `Some("")`.
pub fn attribute<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

fn compile(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::warn!("Ignoring invalid selector '{}': {:?}", selector, e);
            None
        }
    }
}
