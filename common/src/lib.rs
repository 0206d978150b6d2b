//! Wire types shared by the employees backend and the form frontend.

pub mod model;
pub mod responses;
