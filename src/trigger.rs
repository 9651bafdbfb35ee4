use std::sync::Arc;

use futures::FutureExt;
use futures::future::{self, BoxFuture};

use crate::config::{DEFAULT_INPUT_ID, DEFAULT_RESULTS_ID};
use crate::encoding::search_path;
use crate::error::SearchError;
use crate::transport::Transport;
use crate::ui::UiSurface;

/// Wires the search box to the results container through the search
/// endpoint.
///
/// Triggers are independent: nothing is cancelled or sequenced, so when
/// several are in flight the response that resolves last is the one left on
/// the page.
pub struct SearchTrigger<T, P> {
    transport: Arc<T>,
    page: Arc<P>,
    input_id: String,
    output_id: String,
}

impl<T, P> SearchTrigger<T, P>
where
    T: Transport + 'static,
    P: UiSurface + 'static,
{
    pub fn new(transport: Arc<T>, page: Arc<P>) -> Self {
        SearchTrigger {
            transport,
            page,
            input_id: DEFAULT_INPUT_ID.to_string(),
            output_id: DEFAULT_RESULTS_ID.to_string(),
        }
    }

    pub fn with_elements(mut self, input_id: impl Into<String>, output_id: impl Into<String>) -> Self {
        self.input_id = input_id.into();
        self.output_id = output_id.into();
        self
    }

    pub fn page(&self) -> &Arc<P> {
        &self.page
    }

    /// Reads the query now, then returns the pending request. The output
    /// element is only touched once the full body has arrived; on any error
    /// it keeps its previous content.
    pub fn search_clients(&self) -> BoxFuture<'static, Result<(), SearchError>> {
        let query = match self.page.read_text(&self.input_id) {
            Ok(query) => query,
            Err(e) => return future::ready(Err(e)).boxed(),
        };
        let path = search_path(&query);

        let transport = self.transport.clone();
        let page = self.page.clone();
        let output_id = self.output_id.clone();
        async move {
            log::debug!("searching clients: {path}");
            let results = transport.fetch_text(path).await?;
            log::debug!("writing {} bytes of results to #{output_id}", results.len());
            page.write_content(&output_id, results)
        }
        .boxed()
    }
}

impl<T, P> Clone for SearchTrigger<T, P> {
    fn clone(&self) -> Self {
        SearchTrigger {
            transport: self.transport.clone(),
            page: self.page.clone(),
            input_id: self.input_id.clone(),
            output_id: self.output_id.clone(),
        }
    }
}
