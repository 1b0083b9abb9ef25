//! Search tool implementation
//!
//! Shared by the `search` CLI command and the HTTP handler: converts raw
//! parameters into a `Query`, runs it unbounded and cuts the page.

use crate::cli::SearchParams;
use crate::dataset::Dataset;
use crate::error::AppError;
use crate::pagination::{Page, Paging};
use crate::search::{Query, SearchEngine, SearchResult};
use tracing::debug;

impl SearchParams {
    /// Engine criteria; the limit is left unset so totals stay exact
    pub fn to_query(&self) -> Query {
        Query {
            product_name: self.product_name.clone(),
            status: self.status.clone(),
            application_number: self.application_number.clone(),
            publication_number: self.publication_number.clone(),
            registration_number: self.registration_number.clone(),
            international_reg_numbers: self.international_reg_numbers.clone(),
            priority_claim_num_list: self.priority_claim_num_list.clone(),
            asign_product_main_code_list: self.asign_product_main_code_list.clone(),
            vienna_code_list: self.vienna_code_list.clone(),
            limit: None,
            use_fuzzy_search: self.use_fuzzy_search,
        }
    }

    pub fn paging(&self) -> Result<Paging, AppError> {
        Paging::from_raw(self.limit, self.page)
    }
}

/// Execute one search request
pub fn execute_search<'a>(
    engine: &SearchEngine,
    dataset: &'a Dataset,
    params: &SearchParams,
) -> Result<Page<SearchResult<'a>>, AppError> {
    let paging = params.paging()?;
    let query = params.to_query();

    let matches = engine.search(dataset, &query);
    let page = Page::from_matches(matches, paging);

    debug!(
        "Returning page {} of {} ({} of {} matches)",
        page.page,
        page.total_pages,
        page.data.len(),
        page.total
    );

    Ok(page)
}
