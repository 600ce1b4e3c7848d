//! The view controller: section navigation, the generate gate, and the two
//! network flows wired to the page's elements.

pub mod flight;
pub mod generate;
pub mod navigation;
pub mod search;

#[cfg(test)]
pub mod testing;

use log::debug;

use crate::api::Backend;
use crate::view::Page;
use flight::Flight;
use generate::{FirstQuestion, GenerateView, QuestionPicker};
use search::SearchView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    Completed,
    /// The error was rendered into the flow's result area.
    Failed,
    /// A newer flow of the same kind owns the page; nothing was rendered.
    Superseded,
    /// Required fields were blank; an alert was raised.
    Rejected,
    /// The trigger button was disabled.
    Ignored,
}

pub struct ViewController<B, P = FirstQuestion> {
    backend: B,
    picker: P,
    page: Page,
    searches: Flight,
    generations: Flight,
}

impl<B: Backend> ViewController<B> {
    pub fn new(backend: B, page: Page) -> Self {
        Self::with_picker(backend, FirstQuestion, page)
    }
}

impl<B: Backend, P: QuestionPicker> ViewController<B, P> {
    pub fn with_picker(backend: B, picker: P, page: Page) -> Self {
        let controller = ViewController {
            backend,
            picker,
            page,
            searches: Flight::default(),
            generations: Flight::default(),
        };
        controller.on_input();
        controller
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn show_section(&self, id: &str) {
        navigation::show_section(&self.page.sections, &self.page.nav_buttons, id);
    }

    /// Call after any change to the company, job or spec fields.
    pub fn on_input(&self) -> bool {
        navigation::update_generate_gate(
            &self.page.company_name,
            &self.page.job_title,
            &self.page.my_spec,
            &self.page.generate_button,
        )
    }

    pub async fn search(&self) -> FlowOutcome {
        let view = SearchView {
            spec: self.page.search_spec.clone(),
            results: self.page.search_results.clone(),
        };
        search::run(&self.backend, &view, &self.searches).await
    }

    pub async fn generate(&self) -> FlowOutcome {
        if self.page.generate_button.is_disabled() {
            debug!("generate button is disabled, ignoring click");
            return FlowOutcome::Ignored;
        }

        let page = &self.page;
        let view = GenerateView {
            company: page.company_name.clone(),
            job: page.job_title.clone(),
            spec: page.my_spec.clone(),
            language: page.language.clone(),
            char_limit: page.char_limit.clone(),
            use_example: page.use_example.clone(),
            company_info: page.company_info.clone(),
            questions: page.question_select.clone(),
            selected_question: page.selected_question.clone(),
            loading: page.loading.clone(),
            resume_section: page.resume_section.clone(),
            feedback_section: page.feedback_section.clone(),
            resume_text: page.resume_text.clone(),
            feedback_text: page.feedback_text.clone(),
            alerts: page.alerts.clone(),
        };
        generate::run(&self.backend, &self.picker, &view, &self.generations).await
    }
}
