//! Rule-based field extractors.

pub mod amounts;
pub mod patterns;
pub mod policy;

pub use amounts::{parse_amount, AmountExtractor};
pub use policy::PolicyNumberExtractor;
