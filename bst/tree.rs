use std::fmt;

use serde::Serialize;

use super::node::{fold_postorder, link_height, Link, Node};

/// 可视化结构最多展开的深度（根为 0）
///
/// 更深的节点不再输出，序列化时的嵌套层数因此有上限。
pub const MAX_VISUALIZATION_DEPTH: usize = 64;

/// 用于JSON序列化的树结构
#[derive(Debug, Serialize)]
pub struct TreeVisualization<'a, T> {
    /// 根节点（如果存在）
    pub root: Option<NodeVisualization<'a, T>>,
    pub len: usize,
    pub height: usize,
    pub balanced: bool,
}

/// 用于JSON序列化的节点结构
#[derive(Debug, Serialize)]
pub struct NodeVisualization<'a, T> {
    pub value: &'a T,
    pub height: usize,
    pub balance_factor: isize,
    /// 子节点超出展开深度而被省略
    pub truncated: bool,
    pub left: Option<Box<NodeVisualization<'a, T>>>,
    pub right: Option<Box<NodeVisualization<'a, T>>>,
}

/// 二叉搜索树
///
/// 插入、查找、删除、遍历等算法分别实现在 `algorithms` 子模块中。
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinarySearchTree<T> {
    pub fn new() -> Self {
        BinarySearchTree { root: None, len: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// 节点数量
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// 树高：空树为 0，只有根节点为 1
    pub fn height(&self) -> usize {
        link_height(&self.root)
    }

    pub fn min(&self) -> Option<&T> {
        self.root().map(|node| &node.min_node().value)
    }

    pub fn max(&self) -> Option<&T> {
        self.root().map(|node| &node.max_node().value)
    }

    /// 清空树
    ///
    /// 先把子节点逐个摘下再释放，释放链状的树也不会递归。
    pub fn clear(&mut self) {
        let mut detached: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = detached.pop() {
            detached.extend(node.left.take());
            detached.extend(node.right.take());
        }
        self.len = 0;
    }

    /// 内部方法：获取根链接的可变引用
    pub(crate) fn root_mut(&mut self) -> &mut Link<T> {
        &mut self.root
    }

    pub(crate) fn root_ref(&self) -> &Link<T> {
        &self.root
    }

    pub(crate) fn increment_len(&mut self) {
        self.len += 1;
    }

    pub(crate) fn decrement_len(&mut self) {
        self.len -= 1;
    }
}

impl<T> BinarySearchTree<T> {
    /// 构建可序列化的树结构（每个节点附带高度与平衡因子）
    ///
    /// 深度超过 `MAX_VISUALIZATION_DEPTH` 的节点被省略，
    /// 省略处的父节点标记为 `truncated`。
    pub fn visualize(&self) -> TreeVisualization<'_, T> {
        let root = fold_postorder(self.root(), |node, depth, left, right| {
            let (left, left_height) = left.unwrap_or((None, 0));
            let (right, right_height) = right.unwrap_or((None, 0));
            let height = 1 + usize::max(left_height, right_height);
            let visualization = (depth <= MAX_VISUALIZATION_DEPTH).then(|| NodeVisualization {
                value: &node.value,
                height,
                balance_factor: left_height as isize - right_height as isize,
                truncated: depth == MAX_VISUALIZATION_DEPTH && !node.is_leaf(),
                left: left.map(Box::new),
                right: right.map(Box::new),
            });
            (visualization, height)
        });

        let (root, height) = root.unwrap_or((None, 0));
        TreeVisualization {
            root,
            len: self.len,
            height,
            balanced: self.is_balanced(),
        }
    }
}

impl<T: Serialize> BinarySearchTree<T> {
    /// 导出树结构为JSON格式
    ///
    /// 返回包含完整树结构的JSON字符串，用于前端可视化
    pub fn export_to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.visualize())
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        let root = fold_postorder(self.root(), |node, _, left, right| {
            Box::new(Node {
                value: node.value.clone(),
                left,
                right,
            })
        });
        BinarySearchTree {
            root,
            len: self.len,
        }
    }
}

/// 值互不相同的二叉搜索树由先序序列唯一确定
impl<T: PartialEq> PartialEq for BinarySearchTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.preorder().eq(other.preorder())
    }
}

impl<T: Eq> Eq for BinarySearchTree<T> {}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
