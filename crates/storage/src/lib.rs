mod engine;
mod error;
mod store;

pub use self::{
    engine::{Engine, Memory},
    error::{Error, Result},
    store::Store,
};
