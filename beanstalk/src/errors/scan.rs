use alloc::string::String;

#[derive(thiserror::Error, Debug)]
pub enum ScanErrorKind {
    #[error("Namespace is empty")]
    EmptyNamespace,
    #[error("Namespace `{namespace}` is not a valid module path")]
    InvalidNamespace { namespace: String },
}
