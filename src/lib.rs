pub mod error;
pub mod form;
pub mod highlight;
pub mod request;
pub mod submit;

pub use error::InjectError;

#[cfg(test)]
mod test;
