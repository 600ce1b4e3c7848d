use std::path::Path;

use eyre::{Result, WrapErr};
use log::info;

use super::elements::{
    Alerts, Button, Checkbox, Container, NavButton, Section, Select, TextField, Visibility,
};
use super::render::escape;

pub const JOB_SEARCH: &str = "job-search";
pub const COVER_LETTER: &str = "cover-letter-writer";

/// Every element the controller reads or writes.
#[derive(Debug, Clone)]
pub struct Page {
    pub sections: Vec<Section>,
    pub nav_buttons: Vec<NavButton>,

    pub search_spec: TextField,
    pub search_results: Container,

    pub company_name: TextField,
    pub job_title: TextField,
    pub my_spec: TextField,
    pub language: TextField,
    pub char_limit: TextField,
    pub use_example: Checkbox,
    pub generate_button: Button,

    pub company_info: Container,
    pub question_select: Select,
    pub selected_question: TextField,
    pub loading: Visibility,
    pub resume_section: Visibility,
    pub feedback_section: Visibility,
    pub resume_text: TextField,
    pub feedback_text: TextField,

    pub alerts: Alerts,
}

impl Page {
    pub fn new() -> Self {
        Page {
            sections: vec![Section::new(JOB_SEARCH), Section::new(COVER_LETTER)],
            nav_buttons: vec![
                NavButton::new("Job search", JOB_SEARCH),
                NavButton::new("Cover letter", COVER_LETTER),
            ],
            search_spec: TextField::default(),
            search_results: Container::default(),
            company_name: TextField::default(),
            job_title: TextField::default(),
            my_spec: TextField::default(),
            language: TextField::new("ko"),
            char_limit: TextField::new("0"),
            use_example: Checkbox::default(),
            generate_button: Button::default(),
            company_info: Container::default(),
            question_select: Select::default(),
            selected_question: TextField::default(),
            loading: Visibility::hidden(),
            resume_section: Visibility::hidden(),
            feedback_section: Visibility::hidden(),
            resume_text: TextField::default(),
            feedback_text: TextField::default(),
            alerts: Alerts::default(),
        }
    }

    pub fn active_section(&self) -> Option<&str> {
        self.sections.iter().find(|s| s.is_active()).map(Section::id)
    }

    /// Serializes the output regions of both sections as an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<nav>\n");
        for button in &self.nav_buttons {
            let class = if button.is_active() { "nav-button active" } else { "nav-button" };
            out.push_str(&format!(
                "<button class=\"{}\" data-target=\"{}\">{}</button>\n",
                class,
                button.target(),
                escape(button.label())
            ));
        }
        out.push_str("</nav>\n");

        let active = self.active_section();
        for section in &self.sections {
            let class = if active == Some(section.id()) { " class=\"active\"" } else { "" };
            out.push_str(&format!("<section id=\"{}\"{}>\n", section.id(), class));

            match section.id() {
                JOB_SEARCH => {
                    out.push_str("<div id=\"search-results\">\n");
                    out.push_str(&self.search_results.to_html());
                    out.push_str("</div>\n");
                }
                COVER_LETTER => {
                    out.push_str("<div id=\"company-info\">\n");
                    out.push_str(&self.company_info.to_html());
                    out.push_str("</div>\n");
                    out.push_str(&format!(
                        "<p id=\"selected-question\">{}</p>\n",
                        escape(&self.selected_question.value())
                    ));
                    out.push_str(&text_area(
                        "generated-resume-section",
                        "generated-resume",
                        &self.resume_section,
                        &self.resume_text,
                    ));
                    out.push_str(&text_area(
                        "feedback-section",
                        "feedback-text",
                        &self.feedback_section,
                        &self.feedback_text,
                    ));
                }
                _ => {}
            }

            out.push_str("</section>\n");
        }

        out
    }
}

impl Page {
    pub async fn write_html(&self, path: &Path) -> Result<()> {
        tokio::fs::write(path, self.to_html())
            .await
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        info!("wrote page to {}", path.display());
        Ok(())
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

fn text_area(section_id: &str, id: &str, visibility: &Visibility, text: &TextField) -> String {
    let class = if visibility.is_hidden() { " class=\"hidden\"" } else { "" };
    format!(
        "<div id=\"{}\"{}>\n<textarea id=\"{}\" readonly>{}</textarea>\n</div>\n",
        section_id,
        class,
        id,
        escape(&text.value())
    )
}
