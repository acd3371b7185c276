pub(crate) mod logout_button;
pub(crate) mod section_placeholder;
