pub mod adapter;
pub mod pipeline;
pub mod scenario;
