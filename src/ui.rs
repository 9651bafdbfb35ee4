use dashmap::DashMap;

use crate::config::{DEFAULT_INPUT_ID, DEFAULT_RESULTS_ID};
use crate::error::SearchError;

/// The two things the search trigger needs from whatever is rendering the
/// page: read the current text of an element and replace an element's
/// content.
pub trait UiSurface: Send + Sync {
    fn read_text(&self, element_id: &str) -> Result<String, SearchError>;

    fn write_content(&self, element_id: &str, content: String) -> Result<(), SearchError>;
}

/// Page state held in memory, keyed by element id.
#[derive(Debug, Default)]
pub struct MemoryPage {
    elements: DashMap<String, String>,
}

impl MemoryPage {
    pub fn new() -> MemoryPage {
        MemoryPage::default()
    }

    /// A page with an empty search box and an empty results container.
    pub fn with_search_elements() -> MemoryPage {
        MemoryPage::with_elements(DEFAULT_INPUT_ID, DEFAULT_RESULTS_ID)
    }

    pub fn with_elements(input_id: &str, output_id: &str) -> MemoryPage {
        let page = MemoryPage::new();
        page.insert_element(input_id, "");
        page.insert_element(output_id, "");
        page
    }

    pub fn insert_element(&self, element_id: &str, content: &str) {
        self.elements
            .insert(element_id.to_string(), content.to_string());
    }

    /// Types into an existing element. Unknown ids are an error, same as a
    /// lookup on a real page.
    pub fn set_text(&self, element_id: &str, text: &str) -> Result<(), SearchError> {
        let mut entry = self
            .elements
            .get_mut(element_id)
            .ok_or_else(|| missing(element_id))?;
        *entry = text.to_string();
        Ok(())
    }

    pub fn content(&self, element_id: &str) -> Option<String> {
        self.elements.get(element_id).map(|e| e.value().clone())
    }
}

impl UiSurface for MemoryPage {
    fn read_text(&self, element_id: &str) -> Result<String, SearchError> {
        self.content(element_id).ok_or_else(|| missing(element_id))
    }

    fn write_content(&self, element_id: &str, content: String) -> Result<(), SearchError> {
        let mut entry = self
            .elements
            .get_mut(element_id)
            .ok_or_else(|| missing(element_id))?;
        *entry = content;
        Ok(())
    }
}

fn missing(element_id: &str) -> SearchError {
    SearchError::MissingElement {
        id: element_id.to_string(),
    }
}
