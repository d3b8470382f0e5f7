use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::super::node::{Link, Node};
use super::super::tree::BinarySearchTree;
use crate::error::AlgoError;
use crate::observer::{TreeAction, TreeObserver};

/// 遍历顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalOrder {
    /// 左、根、右：得到升序序列
    Inorder,
    /// 根、左、右
    Preorder,
    /// 左、右、根
    Postorder,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 3] = [
        TraversalOrder::Inorder,
        TraversalOrder::Preorder,
        TraversalOrder::Postorder,
    ];
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TraversalOrder::Inorder => "inorder",
            TraversalOrder::Preorder => "preorder",
            TraversalOrder::Postorder => "postorder",
        };
        f.write_str(name)
    }
}

impl FromStr for TraversalOrder {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "inorder" | "in" => Ok(TraversalOrder::Inorder),
            "preorder" | "pre" => Ok(TraversalOrder::Preorder),
            "postorder" | "post" => Ok(TraversalOrder::Postorder),
            other => Err(AlgoError::InvalidInput(format!(
                "unknown traversal order '{}'",
                other
            ))),
        }
    }
}

/// 遍历栈中的待处理项
enum Frame<'a, T> {
    /// 尚未展开的子树
    Expand(&'a Node<T>, usize),
    /// 等待输出的节点
    Emit(&'a Node<T>, usize),
}

impl<T> Clone for Frame<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Frame<'_, T> {}

/// 惰性遍历迭代器
///
/// 用显式栈代替递归，树再深也不会耗尽调用栈。
/// `restart` 可以从头重新遍历，不需要重新借用树。
pub struct Traversal<'a, T> {
    root: Option<&'a Node<T>>,
    order: TraversalOrder,
    stack: Vec<Frame<'a, T>>,
}

impl<'a, T> Traversal<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, order: TraversalOrder) -> Self {
        let mut traversal = Traversal {
            root: root.as_deref(),
            order,
            stack: Vec::new(),
        };
        traversal.restart();
        traversal
    }

    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    /// 重置到遍历起点
    pub fn restart(&mut self) {
        self.stack.clear();
        if let Some(root) = self.root {
            self.stack.push(Frame::Expand(root, 0));
        }
    }

    /// 与 `next` 相同，但同时返回节点深度（根为 0）
    pub fn next_with_depth(&mut self) -> Option<(&'a T, usize)> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Emit(node, depth) => return Some((&node.value, depth)),
                Frame::Expand(node, depth) => self.expand(node, depth),
            }
        }
        None
    }

    // 栈是后进先出，按期望输出顺序的逆序压栈
    fn expand(&mut self, node: &'a Node<T>, depth: usize) {
        let left = node.left.as_deref().map(|n| Frame::Expand(n, depth + 1));
        let right = node.right.as_deref().map(|n| Frame::Expand(n, depth + 1));
        let emit = Some(Frame::Emit(node, depth));

        let frames = match self.order {
            TraversalOrder::Preorder => [right, left, emit],
            TraversalOrder::Inorder => [right, emit, left],
            TraversalOrder::Postorder => [emit, right, left],
        };
        self.stack.extend(frames.into_iter().flatten());
    }
}

impl<T> Clone for Traversal<'_, T> {
    fn clone(&self) -> Self {
        Traversal {
            root: self.root,
            order: self.order,
            stack: self.stack.clone(),
        }
    }
}

impl<T> fmt::Debug for Traversal<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("order", &self.order)
            .field("pending", &self.stack.len())
            .finish()
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_with_depth().map(|(value, _)| value)
    }
}

/// 遍历操作相关算法
impl<T> BinarySearchTree<T> {
    /// 按指定顺序惰性遍历
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_, T> {
        Traversal::new(self.root_ref(), order)
    }

    /// 中序遍历：二叉搜索树中得到严格升序序列
    pub fn inorder(&self) -> Traversal<'_, T> {
        self.traverse(TraversalOrder::Inorder)
    }

    pub fn preorder(&self) -> Traversal<'_, T> {
        self.traverse(TraversalOrder::Preorder)
    }

    pub fn postorder(&self) -> Traversal<'_, T> {
        self.traverse(TraversalOrder::Postorder)
    }

    /// 遍历并收集结果（带观察者），每输出一个值产生一次 `Emit`
    pub fn traverse_observed<O: TreeObserver<T>>(
        &self,
        order: TraversalOrder,
        observer: &mut O,
    ) -> Vec<&T> {
        let mut traversal = self.traverse(order);
        let mut values = Vec::with_capacity(self.len());
        while let Some((value, depth)) = traversal.next_with_depth() {
            observer.on_step(TreeAction::Emit, value, depth);
            values.push(value);
        }
        values
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Traversal<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}
