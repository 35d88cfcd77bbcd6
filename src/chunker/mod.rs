mod merge;
mod partition;
mod split;
mod title;


pub use partition::{Range, partition};
pub use title::describe_range;
