pub mod documents;
pub mod postgres;
