use crate::view::{Button, NavButton, Section, TextField};

/// Activates the section with `id` and the navigation button targeting it;
/// everything else is deactivated.
pub fn show_section(sections: &[Section], nav_buttons: &[NavButton], id: &str) {
    for section in sections {
        section.set_active(section.id() == id);
    }
    for button in nav_buttons {
        button.set_active(button.target() == id);
    }
}

pub fn required_fields_filled(company: &str, job: &str, spec: &str) -> bool {
    [company, job, spec].iter().all(|v| !v.trim().is_empty())
}

/// Enables `button` iff company, job and spec are non-blank. Returns the new
/// enabled state.
pub fn update_generate_gate(
    company: &TextField,
    job: &TextField,
    spec: &TextField,
    button: &Button,
) -> bool {
    let enabled = required_fields_filled(&company.value(), &job.value(), &spec.value());
    button.set_disabled(!enabled);
    enabled
}
