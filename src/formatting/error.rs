/// The reasons a value cannot be formatted. Every error aborts the whole `format` call.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid type")]
    InvalidType,

    #[error("arbitrary pointer types cannot be serialized reliably")]
    ArbitraryPointerType,

    #[error("functions cannot be serialized")]
    FunctionType,

    #[error("interfaces cannot be serialized")]
    InterfaceType,

    #[error("channels cannot be serialized")]
    ChanType,
}
