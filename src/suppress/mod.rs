//! Candidate pruning for raw detector output.
//!
//! Greedy IoU-based non-maximum suppression over scored boxes.

pub(crate) mod nms;
