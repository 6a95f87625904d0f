//! Wire-format entities, one module per resource.

mod de;
pub mod delivery;
pub mod fees;
pub mod manifest;
pub mod quote;
pub mod stop;
pub mod verification;
