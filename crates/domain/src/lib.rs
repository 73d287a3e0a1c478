//! Environmental licenses domain.
//!
//! Pure business types shared by the engine:
//! - `entities` - Company and License records with their validation rules
//! - `value_objects` - the CNPJ tax id
//! - `errors` - the closed error taxonomy, each record tagged with a [`StatusError`]
//! - `either` - success/failure helpers over `Result`
//!
//! No I/O happens here. Persistence and third-party lookups live behind the
//! engine's ports.

pub mod common;
pub mod either;
pub mod entities;
pub mod errors;
pub mod ids;
pub mod value_objects;

pub use either::EitherExt;

pub use entities::{Company, CompanyAddress, License, SoftDeleted};

pub use errors::{
    CnpjAlreadyExistsError, CompanyNotFoundError, ErrorStatus, InvalidCnpjError,
    InvalidCnpjMotive, InvalidCompanyAddressError, InvalidCompanyAddressMotive,
    InvalidCorporateNameError, InvalidPrivateKeyError, InvalidRequestError,
    LicenseNotFoundError, LicenseNumberAlreadyExistsError, ProviderError, ProviderMethod,
    ProviderName, RepositoryError, RepositoryMethod, RepositoryName, StatusError, StoreError,
};

pub use ids::{CompanyId, LicenseId};

pub use value_objects::Cnpj;
