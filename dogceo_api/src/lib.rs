mod breed;
mod client;
mod errors;
pub mod transport;
pub mod types;
pub use self::breed::BreedName;
pub use self::client::{BreedFetcher, Client};
pub use self::errors::{LookupFailure, Result};
