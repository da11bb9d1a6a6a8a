pub mod client;
pub mod queue;
pub mod selection;
pub mod worker;
