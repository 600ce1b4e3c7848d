use eyre::{Result, WrapErr};
use log::{debug, error, info, warn};

use super::FlowOutcome;
use super::flight::{Flight, Ticket};
use super::navigation::required_fields_filled;
use crate::api::Backend;
use crate::models::resume::{CompanyInfoRequest, GenerateRequest, GeneratedResume};
use crate::view::{Alerts, Block, Checkbox, Container, Select, SelectOption, TextField, Visibility};

pub const REQUIRED_FIELDS: &str = "Company, job title and your spec are required.";
pub const GENERATION_FAILED: &str = "generation failed";
pub const FEEDBACK_FAILED: &str = "feedback generation failed";

/// Chooses which of the freshly loaded questions is sent for generation.
pub trait QuestionPicker {
    /// `None` keeps the select's current (first) option.
    fn pick(&self, options: &[SelectOption]) -> Option<usize>;
}

/// Sends the first question without asking.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstQuestion;

impl QuestionPicker for FirstQuestion {
    fn pick(&self, _options: &[SelectOption]) -> Option<usize> {
        None
    }
}

/// Elements the resume generation flow touches.
#[derive(Debug, Clone)]
pub struct GenerateView {
    pub company: TextField,
    pub job: TextField,
    pub spec: TextField,
    pub language: TextField,
    pub char_limit: TextField,
    pub use_example: Checkbox,

    pub company_info: Container,
    pub questions: Select,
    pub selected_question: TextField,
    pub loading: Visibility,
    pub resume_section: Visibility,
    pub feedback_section: Visibility,
    pub resume_text: TextField,
    pub feedback_text: TextField,
    pub alerts: Alerts,
}

struct Form {
    company: String,
    job: String,
    spec: String,
    language: String,
    char_limit: String,
    use_example: bool,
}

pub async fn run<B, P>(backend: &B, picker: &P, view: &GenerateView, flight: &Flight) -> FlowOutcome
where
    B: Backend,
    P: QuestionPicker,
{
    let form = Form {
        company: view.company.trimmed(),
        job: view.job.trimmed(),
        spec: view.spec.trimmed(),
        language: view.language.value(),
        char_limit: view.char_limit.value(),
        use_example: view.use_example.checked(),
    };

    if !required_fields_filled(&form.company, &form.job, &form.spec) {
        warn!("generate requested with missing required fields");
        view.alerts.alert(REQUIRED_FIELDS);
        return FlowOutcome::Rejected;
    }

    let ticket = flight.begin();

    view.loading.show();
    view.resume_section.hide();
    view.feedback_section.hide();
    view.resume_text.clear();
    view.feedback_text.clear();

    info!("generating cover letter for {} / {}", form.company, form.job);

    let outcome = match exchange(backend, picker, view, flight, ticket, &form).await {
        Ok(Some(generated)) => {
            view.resume_text
                .set_value(generated.resume_text().unwrap_or(GENERATION_FAILED));
            view.feedback_text
                .set_value(generated.feedback_text().unwrap_or(FEEDBACK_FAILED));
            view.resume_section.show();
            view.feedback_section.show();
            info!("cover letter and feedback received");
            FlowOutcome::Completed
        }
        Ok(None) => FlowOutcome::Superseded,
        Err(_) if !flight.is_current(ticket) => FlowOutcome::Superseded,
        Err(e) => {
            error!("cover letter generation failed: {:?}", e);
            let message = format!("Error: {}", e);
            view.resume_text.set_value(message.clone());
            view.feedback_text.set_value(message);
            view.resume_section.show();
            view.feedback_section.show();
            FlowOutcome::Failed
        }
    };

    if outcome == FlowOutcome::Superseded {
        debug!("dropping generation results, a newer generation was started");
    } else {
        view.loading.hide();
    }

    outcome
}

/// Both requests of the flow. `Ok(None)` means a newer generation took over
/// while a request was in flight.
async fn exchange<B, P>(
    backend: &B,
    picker: &P,
    view: &GenerateView,
    flight: &Flight,
    ticket: Ticket,
    form: &Form,
) -> Result<Option<GeneratedResume>>
where
    B: Backend,
    P: QuestionPicker,
{
    let info = backend
        .company_info(&CompanyInfoRequest {
            company: &form.company,
            job: &form.job,
            language: &form.language,
            use_example: form.use_example,
        })
        .await;

    if !flight.is_current(ticket) {
        return Ok(None);
    }
    let info = info?;

    if let Some(text) = info.culture_text() {
        view.company_info
            .replace(vec![Block::Status(text.to_string())]);
    }

    view.questions.replace_options(question_options(&info.questions));
    debug!("loaded {} questions", info.questions.len());

    if let Some(index) = picker.pick(&view.questions.options())
        && !view.questions.select(index)
    {
        warn!("question #{} does not exist, keeping the first one", index + 1);
    }

    let question = view.questions.value();
    view.selected_question.set_value(question.clone());

    let char_limit = parse_char_limit(&form.char_limit)?;

    let generated = backend
        .generate_resume(&GenerateRequest {
            company: &form.company,
            job: &form.job,
            spec: &form.spec,
            language: &form.language,
            char_limit,
            use_example: form.use_example,
            question: &question,
        })
        .await;

    if !flight.is_current(ticket) {
        return Ok(None);
    }

    generated.map(Some)
}

pub fn question_options(questions: &[String]) -> Vec<SelectOption> {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| SelectOption {
            value: q.clone(),
            label: format!("{}. {}", i + 1, q),
        })
        .collect()
}

/// Blank means no limit.
fn parse_char_limit(raw: &str) -> Result<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse()
        .wrap_err_with(|| format!("invalid character limit '{}'", raw))
}

#[cfg(test)]
mod tests {
    use eyre::eyre;
    use serde_json::json;

    use super::*;
    use crate::controller::testing::{Reply, ScriptedBackend, company_info, generated};

    fn view() -> GenerateView {
        GenerateView {
            company: TextField::new(" Acme "),
            job: TextField::new("Backend engineer"),
            spec: TextField::new("Five years of Rust"),
            language: TextField::new("en"),
            char_limit: TextField::new("800"),
            use_example: Checkbox::default(),
            company_info: Container::default(),
            questions: Select::default(),
            selected_question: TextField::default(),
            loading: Visibility::hidden(),
            resume_section: Visibility::hidden(),
            feedback_section: Visibility::hidden(),
            resume_text: TextField::default(),
            feedback_text: TextField::default(),
            alerts: Alerts::default(),
        }
    }

    struct PickSecond;

    impl QuestionPicker for PickSecond {
        fn pick(&self, _options: &[SelectOption]) -> Option<usize> {
            Some(1)
        }
    }

    #[tokio::test]
    async fn success_fills_both_text_areas() {
        let backend = ScriptedBackend::default();
        backend.push_info(Reply::Ready(Ok(company_info(
            Some("Ownership, curiosity"),
            None,
            &["Why us?", "Biggest challenge?"],
        ))));
        backend.push_generate(Reply::Ready(Ok(generated(
            Some("Dear Acme,\n\nI build things."),
            Some("Be more concrete."),
        ))));

        let view = view();
        let outcome = run(&backend, &FirstQuestion, &view, &Flight::default()).await;

        assert_eq!(outcome, FlowOutcome::Completed);
        assert_eq!(view.resume_text.value(), "Dear Acme,\n\nI build things.");
        assert_eq!(view.feedback_text.value(), "Be more concrete.");
        assert!(!view.resume_section.is_hidden());
        assert!(!view.feedback_section.is_hidden());
        assert!(view.loading.is_hidden());

        assert_eq!(
            view.company_info.blocks(),
            vec![Block::Status("Ownership, curiosity".into())]
        );
        let labels: Vec<_> = view.questions.options().into_iter().map(|o| o.label).collect();
        assert_eq!(labels, ["1. Why us?", "2. Biggest challenge?"]);
        assert_eq!(view.selected_question.value(), "Why us?");

        let calls = backend.calls();
        assert_eq!(
            calls[0].1,
            json!({ "company": "Acme", "job": "Backend engineer", "language": "en", "use_example": false })
        );
        assert_eq!(
            calls[1].1,
            json!({
                "company": "Acme",
                "job": "Backend engineer",
                "spec": "Five years of Rust",
                "language": "en",
                "char_limit": 800,
                "use_example": false,
                "question": "Why us?"
            })
        );
    }

    #[tokio::test]
    async fn picker_choice_is_sent() {
        let backend = ScriptedBackend::default();
        backend.push_info(Reply::Ready(Ok(company_info(None, Some("no data"), &["a", "b"]))));
        backend.push_generate(Reply::Ready(Ok(generated(Some("x"), Some("y")))));

        let view = view();
        run(&backend, &PickSecond, &view, &Flight::default()).await;

        assert_eq!(view.selected_question.value(), "b");
        assert_eq!(backend.calls()[1].1["question"], "b");
        assert_eq!(view.company_info.blocks(), vec![Block::Status("no data".into())]);
    }

    #[tokio::test]
    async fn missing_fields_use_placeholders() {
        let backend = ScriptedBackend::default();
        backend.push_info(Reply::Ready(Ok(company_info(None, None, &[]))));
        backend.push_generate(Reply::Ready(Ok(generated(None, None))));

        let view = view();
        view.company_info.push(Block::Status("previous".into()));
        run(&backend, &FirstQuestion, &view, &Flight::default()).await;

        assert_eq!(view.resume_text.value(), GENERATION_FAILED);
        assert_eq!(view.feedback_text.value(), FEEDBACK_FAILED);
        assert_eq!(view.company_info.blocks(), vec![Block::Status("previous".into())]);
        assert_eq!(backend.calls()[1].1["question"], "");
    }

    #[tokio::test]
    async fn empty_generated_fields_use_placeholders() {
        let backend = ScriptedBackend::default();
        backend.push_info(Reply::Ready(Ok(company_info(None, None, &["q"]))));
        backend.push_generate(Reply::Ready(Ok(generated(Some("letter"), Some("")))));

        let view = view();
        let outcome = run(&backend, &FirstQuestion, &view, &Flight::default()).await;

        assert_eq!(outcome, FlowOutcome::Completed);
        assert_eq!(view.resume_text.value(), "letter");
        assert_eq!(view.feedback_text.value(), FEEDBACK_FAILED);

        let backend = ScriptedBackend::default();
        backend.push_info(Reply::Ready(Ok(company_info(None, None, &["q"]))));
        backend.push_generate(Reply::Ready(Ok(generated(Some(""), Some("notes")))));

        run(&backend, &FirstQuestion, &view, &Flight::default()).await;

        assert_eq!(view.resume_text.value(), GENERATION_FAILED);
        assert_eq!(view.feedback_text.value(), "notes");
    }

    #[tokio::test]
    async fn company_info_failure_skips_generation() {
        let backend = ScriptedBackend::default();
        backend.push_info(Reply::Ready(Err(eyre!("failed to fetch company info"))));

        let view = view();
        view.resume_text.set_value("stale draft");
        let outcome = run(&backend, &FirstQuestion, &view, &Flight::default()).await;

        assert_eq!(outcome, FlowOutcome::Failed);
        assert_eq!(view.resume_text.value(), "Error: failed to fetch company info");
        assert_eq!(view.feedback_text.value(), "Error: failed to fetch company info");
        assert!(!view.resume_section.is_hidden());
        assert!(!view.feedback_section.is_hidden());
        assert!(view.loading.is_hidden());
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn generate_failure_is_shown_inline() {
        let backend = ScriptedBackend::default();
        backend.push_info(Reply::Ready(Ok(company_info(None, None, &["q"]))));
        backend.push_generate(Reply::Ready(Err(eyre!("network response was not ok"))));

        let view = view();
        let outcome = run(&backend, &FirstQuestion, &view, &Flight::default()).await;

        assert_eq!(outcome, FlowOutcome::Failed);
        assert_eq!(view.feedback_text.value(), "Error: network response was not ok");
        assert!(view.loading.is_hidden());
    }

    #[tokio::test]
    async fn blank_fields_alert_without_requests() {
        let backend = ScriptedBackend::default();
        let view = view();
        view.spec.set_value("   ");
        view.resume_text.set_value("keep me");

        let outcome = run(&backend, &FirstQuestion, &view, &Flight::default()).await;

        assert_eq!(outcome, FlowOutcome::Rejected);
        assert_eq!(view.alerts.messages(), vec![REQUIRED_FIELDS.to_string()]);
        assert_eq!(view.resume_text.value(), "keep me");
        assert!(view.loading.is_hidden());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn bad_char_limit_fails_before_generation() {
        let backend = ScriptedBackend::default();
        backend.push_info(Reply::Ready(Ok(company_info(None, None, &["q"]))));

        let view = view();
        view.char_limit.set_value("lots");
        let outcome = run(&backend, &FirstQuestion, &view, &Flight::default()).await;

        assert_eq!(outcome, FlowOutcome::Failed);
        assert_eq!(view.resume_text.value(), "Error: invalid character limit 'lots'");
        assert_eq!(backend.calls().len(), 1);
    }

    #[test]
    fn char_limit_parsing() {
        assert_eq!(parse_char_limit("").unwrap(), 0);
        assert_eq!(parse_char_limit(" 1000 ").unwrap(), 1000);
        assert!(parse_char_limit("-5").is_err());
    }
}
