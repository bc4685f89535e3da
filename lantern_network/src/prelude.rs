//! Collects commonly-used names for convenient import

pub use crate::{
    validated::*,
    id::*,
    network::*,
    network::errors::{
        LookupError,
        LookupResult,
        NetworkError,
        NetworkResult,
    },
    modes::*,
};
