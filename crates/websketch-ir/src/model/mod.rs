pub mod capture;
pub mod node;
pub mod role;

pub use capture::{Capture, Viewport};
pub use node::{Node, Rect, TextSummary};
pub use role::Role;
