pub mod normalize;
pub mod output;
pub mod sgpc;
pub mod types;
