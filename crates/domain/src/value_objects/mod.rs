//! Value objects - immutable values defined by their attributes

mod cnpj;

pub use cnpj::Cnpj;
