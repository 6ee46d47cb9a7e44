//! Typed CRUD gateways over the catalog tables. Handlers only ever talk to
//! these; entity models never leave this layer except to be converted into
//! wire structs.

mod director;
mod genre;
mod movie;

pub use director::DirectorRepository;
pub use genre::GenreRepository;
pub use movie::MovieRepository;
