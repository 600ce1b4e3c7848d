//! Headless stand-in for the page the controller drives.
//!
//! Every element is a cheap `Rc` handle; cloning one yields another view of
//! the same element, so flows can be handed exactly the elements they touch.

pub mod elements;
pub mod page;
pub mod render;

pub use elements::{
    Alerts, Button, Checkbox, Container, NavButton, Section, Select, SelectOption, TextField,
    Visibility,
};
pub use page::Page;
pub use render::Block;
