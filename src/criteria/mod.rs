//! Password evaluation criteria
//!
//! Each criterion inspects one aspect of the password and produces exactly
//! one outcome. Criteria are independent of each other and never fail.

mod classes;
mod dictionary;
mod length;
mod repeats;
mod sequential;

pub use classes::{digit_criterion, lowercase_criterion, special_criterion, uppercase_criterion};
pub use dictionary::dictionary_criterion;
pub use length::length_criterion;
pub use repeats::repeats_criterion;
pub use sequential::sequential_criterion;
