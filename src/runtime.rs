pub(crate) mod env;
pub(crate) mod eval;
pub(crate) mod value;
