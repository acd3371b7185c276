mod catalog;
mod errors;
mod storage;

pub(crate) use catalog::Catalog;
pub(crate) use errors::CatalogError;
pub(crate) use storage::{CatalogLoadStatus, load_catalog};
