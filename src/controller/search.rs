use log::{debug, error, info};

use super::FlowOutcome;
use super::flight::Flight;
use crate::api::Backend;
use crate::models::jobs::SearchResults;
use crate::view::{Block, Container, TextField};

pub const SEARCHING: &str = "🔍 Searching for postings... please wait.";
pub const NO_RESULTS: &str = "- (no results)";
pub const UNTITLED: &str = "(untitled)";

/// Elements the job search flow touches.
#[derive(Debug, Clone)]
pub struct SearchView {
    pub spec: TextField,
    pub results: Container,
}

pub async fn run<B: Backend>(backend: &B, view: &SearchView, flight: &Flight) -> FlowOutcome {
    let ticket = flight.begin();
    let spec = view.spec.value();

    view.results
        .replace(vec![Block::Paragraph(SEARCHING.to_string())]);
    info!("searching job postings");
    debug!("search spec is {} bytes", spec.len());

    let result = backend.search_jobs(&spec).await;

    if !flight.is_current(ticket) {
        debug!("dropping search response, a newer search was started");
        return FlowOutcome::Superseded;
    }

    match result {
        Ok(results) => {
            info!(
                "found {} postings across {} roles",
                results.total_postings(),
                results.0.len()
            );
            view.results.replace(render_results(&results));
            FlowOutcome::Completed
        }
        Err(e) => {
            error!("job search failed: {:?}", e);
            view.results
                .replace(vec![Block::Error(format!("Error: {}", e))]);
            FlowOutcome::Failed
        }
    }
}

pub fn render_results(results: &SearchResults) -> Vec<Block> {
    let mut blocks = Vec::new();

    for role in results.iter() {
        blocks.push(Block::Heading(format!("▶ {}", role.role)));

        if role.postings.is_empty() {
            blocks.push(Block::Paragraph(NO_RESULTS.to_string()));
            continue;
        }

        blocks.extend(role.postings.iter().map(|posting| Block::Job {
            title: posting.display_title().unwrap_or(UNTITLED).to_string(),
            url: posting.url.clone(),
        }));
    }

    blocks
}
