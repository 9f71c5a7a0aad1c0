use super::{resolve::ResolveErrorKind, scan::ScanErrorKind};
use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug)]
pub enum InitErrorKind {
    #[error(transparent)]
    Scan(#[from] ScanErrorKind),
    #[error(transparent)]
    Resolve(#[from] ResolveErrorKind),
}

#[derive(thiserror::Error, Debug)]
pub enum GetErrorKind {
    #[error("No bean registered for `{type_info}`")]
    BeanNotFound { type_info: TypeInfo },
}
