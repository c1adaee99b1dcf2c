//! Library components for the World Cup archive analyzer CLI.

pub mod logging;
pub mod pipeline;
pub mod report;
