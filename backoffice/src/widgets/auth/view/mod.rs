pub(crate) mod login_form;
