use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::render::{self, Block};

/// Text input or text area.
#[derive(Debug, Clone, Default)]
pub struct TextField(Rc<RefCell<String>>);

impl TextField {
    pub fn new(value: impl Into<String>) -> Self {
        TextField(Rc::new(RefCell::new(value.into())))
    }

    pub fn value(&self) -> String {
        self.0.borrow().clone()
    }

    pub fn trimmed(&self) -> String {
        self.0.borrow().trim().to_string()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        *self.0.borrow_mut() = value.into();
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

#[derive(Debug, Clone, Default)]
pub struct Checkbox(Rc<Cell<bool>>);

impl Checkbox {
    pub fn checked(&self) -> bool {
        self.0.get()
    }

    pub fn set_checked(&self, checked: bool) {
        self.0.set(checked);
    }
}

#[derive(Debug, Clone, Default)]
pub struct Button {
    disabled: Rc<Cell<bool>>,
}

impl Button {
    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
    }
}

/// The `hidden` class on a region that is toggled as a unit.
#[derive(Debug, Clone)]
pub struct Visibility(Rc<Cell<bool>>);

impl Visibility {
    pub fn hidden() -> Self {
        Visibility(Rc::new(Cell::new(true)))
    }

    pub fn is_hidden(&self) -> bool {
        self.0.get()
    }

    pub fn show(&self) {
        self.0.set(false);
    }

    pub fn hide(&self) {
        self.0.set(true);
    }
}

/// A top-level page region addressed by id.
#[derive(Debug, Clone)]
pub struct Section {
    id: String,
    active: Rc<Cell<bool>>,
}

impl Section {
    pub fn new(id: impl Into<String>) -> Self {
        Section {
            id: id.into(),
            active: Rc::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn set_active(&self, active: bool) {
        self.active.set(active);
    }
}

#[derive(Debug, Clone)]
pub struct NavButton {
    label: String,
    target: String,
    active: Rc<Cell<bool>>,
}

impl NavButton {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        NavButton {
            label: label.into(),
            target: target.into(),
            active: Rc::default(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn set_active(&self, active: bool) {
        self.active.set(active);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Default)]
struct SelectState {
    options: Vec<SelectOption>,
    selected: Option<usize>,
}

/// A drop-down. Like its browser counterpart it selects the first option
/// whenever its options are replaced.
#[derive(Debug, Clone, Default)]
pub struct Select(Rc<RefCell<SelectState>>);

impl Select {
    pub fn replace_options(&self, options: Vec<SelectOption>) {
        let mut state = self.0.borrow_mut();
        state.selected = if options.is_empty() { None } else { Some(0) };
        state.options = options;
    }

    pub fn options(&self) -> Vec<SelectOption> {
        self.0.borrow().options.clone()
    }

    /// Returns `false` and leaves the selection alone if `index` is out of range.
    pub fn select(&self, index: usize) -> bool {
        let mut state = self.0.borrow_mut();
        if index < state.options.len() {
            state.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Value of the selected option, empty when there are no options.
    pub fn value(&self) -> String {
        let state = self.0.borrow();
        state
            .selected
            .and_then(|i| state.options.get(i))
            .map(|o| o.value.clone())
            .unwrap_or_default()
    }
}

/// A region whose content is replaced wholesale by a flow.
#[derive(Debug, Clone, Default)]
pub struct Container(Rc<RefCell<Vec<Block>>>);

impl Container {
    pub fn replace(&self, blocks: Vec<Block>) {
        *self.0.borrow_mut() = blocks;
    }

    #[cfg(test)]
    pub fn push(&self, block: Block) {
        self.0.borrow_mut().push(block);
    }

    #[cfg(test)]
    pub fn blocks(&self) -> Vec<Block> {
        self.0.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn to_html(&self) -> String {
        render::html(&self.0.borrow())
    }

    pub fn to_terminal(&self) -> String {
        render::terminal(&self.0.borrow())
    }
}

/// Collects `alert()` messages.
#[derive(Debug, Clone, Default)]
pub struct Alerts(Rc<RefCell<Vec<String>>>);

impl Alerts {
    pub fn alert(&self, message: impl Into<String>) {
        self.0.borrow_mut().push(message.into());
    }

    #[cfg(test)]
    pub fn messages(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}
