//! Scripted `Backend` for exercising flows without a server.

use std::cell::RefCell;
use std::collections::VecDeque;

use eyre::{Result, eyre};
use serde_json::{Value, json};
use tokio::sync::oneshot;

use crate::api::{Backend, COMPANY_INFO, GENERATE_RESUME, SEARCH_JOBS};
use crate::models::jobs::SearchResults;
use crate::models::resume::{CompanyInfo, CompanyInfoRequest, GenerateRequest, GeneratedResume};

pub enum Reply<T> {
    Ready(Result<T>),
    /// Resolves once the test sends on the paired sender.
    Gated(oneshot::Receiver<Result<T>>),
}

impl<T> Reply<T> {
    async fn resolve(self) -> Result<T> {
        match self {
            Reply::Ready(result) => result,
            Reply::Gated(rx) => rx.await.map_err(|_| eyre!("gated reply was dropped"))?,
        }
    }
}

#[derive(Default)]
pub struct ScriptedBackend {
    search: RefCell<VecDeque<Reply<SearchResults>>>,
    info: RefCell<VecDeque<Reply<CompanyInfo>>>,
    generate: RefCell<VecDeque<Reply<GeneratedResume>>>,
    calls: RefCell<Vec<(&'static str, Value)>>,
}

impl ScriptedBackend {
    pub fn push_search(&self, reply: Reply<SearchResults>) {
        self.search.borrow_mut().push_back(reply);
    }

    pub fn push_info(&self, reply: Reply<CompanyInfo>) {
        self.info.borrow_mut().push_back(reply);
    }

    pub fn push_generate(&self, reply: Reply<GeneratedResume>) {
        self.generate.borrow_mut().push_back(reply);
    }

    /// Endpoint and JSON body of every request, in call order.
    pub fn calls(&self) -> Vec<(&'static str, Value)> {
        self.calls.borrow().clone()
    }

    pub fn sent_search_specs(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|(endpoint, _)| *endpoint == SEARCH_JOBS)
            .filter_map(|(_, body)| body["spec"].as_str().map(str::to_string))
            .collect()
    }

    fn record(&self, endpoint: &'static str, body: Value) {
        self.calls.borrow_mut().push((endpoint, body));
    }
}

impl Backend for ScriptedBackend {
    async fn search_jobs(&self, spec: &str) -> Result<SearchResults> {
        self.record(SEARCH_JOBS, json!({ "spec": spec }));
        let reply = self.search.borrow_mut().pop_front();
        reply.ok_or_else(|| eyre!("no scripted search reply"))?.resolve().await
    }

    async fn company_info(&self, request: &CompanyInfoRequest<'_>) -> Result<CompanyInfo> {
        self.record(COMPANY_INFO, serde_json::to_value(request)?);
        let reply = self.info.borrow_mut().pop_front();
        reply.ok_or_else(|| eyre!("no scripted company info reply"))?.resolve().await
    }

    async fn generate_resume(&self, request: &GenerateRequest<'_>) -> Result<GeneratedResume> {
        self.record(GENERATE_RESUME, serde_json::to_value(request)?);
        let reply = self.generate.borrow_mut().pop_front();
        reply.ok_or_else(|| eyre!("no scripted generate reply"))?.resolve().await
    }
}

pub fn results(body: &str) -> SearchResults {
    serde_json::from_str(body).unwrap()
}

pub fn company_info(culture: Option<&str>, message: Option<&str>, questions: &[&str]) -> CompanyInfo {
    CompanyInfo {
        company_culture: culture.map(str::to_string),
        message: message.map(str::to_string),
        questions: questions.iter().map(|q| q.to_string()).collect(),
    }
}

pub fn generated(resume: Option<&str>, reflection: Option<&str>) -> GeneratedResume {
    GeneratedResume {
        final_resume: resume.map(str::to_string),
        reflection_content: reflection.map(str::to_string),
    }
}
