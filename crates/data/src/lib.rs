//! Loading of locale tables, timing configuration and board files.

pub mod load;
pub mod locale;
pub mod schema;

pub use load::*;
pub use locale::*;
pub use schema::*;
