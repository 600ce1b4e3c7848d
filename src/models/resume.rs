use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize)]
pub struct CompanyInfoRequest<'a> {
    pub company: &'a str,
    pub job: &'a str,
    pub language: &'a str,
    pub use_example: bool,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct CompanyInfo {
    #[serde(default)]
    pub company_culture: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub questions: Vec<String>,
}

impl CompanyInfo {
    /// The culture text if the server sent one, otherwise its plain message.
    pub fn culture_text(&self) -> Option<&str> {
        self.company_culture
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.message.as_deref().filter(|s| !s.is_empty()))
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub company: &'a str,
    pub job: &'a str,
    pub spec: &'a str,
    pub language: &'a str,
    pub char_limit: u32,
    pub use_example: bool,
    pub question: &'a str,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct GeneratedResume {
    #[serde(default)]
    pub final_resume: Option<String>,
    #[serde(default)]
    pub reflection_content: Option<String>,
}

impl GeneratedResume {
    /// The letter, `None` when the server sent nothing or an empty string.
    pub fn resume_text(&self) -> Option<&str> {
        self.final_resume.as_deref().filter(|s| !s.is_empty())
    }

    pub fn feedback_text(&self) -> Option<&str> {
        self.reflection_content.as_deref().filter(|s| !s.is_empty())
    }
}

/// Body the server sends alongside a failing status.
#[derive(Debug, Deserialize)]
pub struct ServerError {
    pub error: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
