pub mod algorithms;
pub mod node;
pub mod tree;

// 重新导出主要类型
pub use algorithms::traversal::{Traversal, TraversalOrder};
pub use node::Node;
pub use tree::{BinarySearchTree, NodeVisualization, TreeVisualization};
