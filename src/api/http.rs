use eyre::{Result, eyre};
use log::{debug, error};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{Backend, COMPANY_INFO, GENERATE_RESUME, SEARCH_JOBS};
use crate::models::jobs::{SearchRequest, SearchResults};
use crate::models::resume::{
    CompanyInfo, CompanyInfoRequest, GenerateRequest, GeneratedResume, ServerError,
};
use crate::utils::config::Config;

pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &Config) -> Self {
        HttpBackend {
            client: reqwest::Client::new(),
            base_url: config.server.base_url.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn post<B, R>(&self, path: &str, body: &B, failure: &str) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            match serde_json::from_str::<ServerError>(&text) {
                Ok(server) => error!("{} returned {}: {}", path, status, server.error),
                Err(_) => error!("{} returned {}", path, status),
            }
            debug!("error body: {}", text);
            return Err(eyre!("{}", failure));
        }

        let text = response.text().await?;
        debug!("{} responded with {} bytes", path, text.len());

        serde_json::from_str(&text).map_err(|e| eyre!("malformed response from {}: {}", path, e))
    }
}

impl Backend for HttpBackend {
    async fn search_jobs(&self, spec: &str) -> Result<SearchResults> {
        self.post(
            SEARCH_JOBS,
            &SearchRequest { spec },
            "network response was not ok",
        )
        .await
    }

    async fn company_info(&self, request: &CompanyInfoRequest<'_>) -> Result<CompanyInfo> {
        self.post(COMPANY_INFO, request, "failed to fetch company info")
            .await
    }

    async fn generate_resume(&self, request: &GenerateRequest<'_>) -> Result<GeneratedResume> {
        self.post(GENERATE_RESUME, request, "network response was not ok")
            .await
    }
}
