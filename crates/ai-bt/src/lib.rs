//! Behavior tree runtime built on `ai-core`.
//!
//! Composites are stateless: every tick re-evaluates from the first child, so
//! conditions in front of a running action act as guards that are re-checked
//! each frame.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bt;
pub mod builder;
pub mod nodes;
pub mod tree;

pub use bt::{BtNode, BtStatus};
pub use builder::{action, condition, in_range, selector, sequence};
pub use nodes::{ActionLeaf, Condition, InRange, Selector, Sequence};
pub use tree::BehaviorTree;
