pub(crate) mod module_grid;
