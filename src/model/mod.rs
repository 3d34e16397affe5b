pub mod flow;
pub mod flow_group;
pub mod wire;

pub use flow::*;
pub use flow_group::*;
pub use wire::*;
