mod http;

pub use http::HttpBackend;

use eyre::Result;

use crate::models::jobs::SearchResults;
use crate::models::resume::{CompanyInfo, CompanyInfoRequest, GenerateRequest, GeneratedResume};

pub const SEARCH_JOBS: &str = "/api/search_jobs/";
pub const COMPANY_INFO: &str = "/api/get_company_info/";
pub const GENERATE_RESUME: &str = "/api/generate_resume/";

/// The three endpoints the controller talks to.
///
/// Every failure (transport, non-success status, undecodable body) comes
/// back as an `eyre::Report` whose display string is what the page shows.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn search_jobs(&self, spec: &str) -> Result<SearchResults>;

    async fn company_info(&self, request: &CompanyInfoRequest<'_>) -> Result<CompanyInfo>;

    async fn generate_resume(&self, request: &GenerateRequest<'_>) -> Result<GeneratedResume>;
}
