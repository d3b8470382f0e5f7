use std::cmp::Ordering;

use super::super::node::Node;
use super::super::tree::BinarySearchTree;
use crate::observer::{NoopObserver, TreeAction, TreeObserver};

/// 插入操作相关算法
impl<T: Ord> BinarySearchTree<T> {
    /// 插入一个值
    ///
    /// 返回 true 表示插入了新节点；值已存在时不做任何修改，返回 false。
    pub fn insert(&mut self, value: T) -> bool {
        self.insert_observed(value, &mut NoopObserver)
    }

    /// 插入一个值（带观察者）
    ///
    /// 沿比较路径向下，每经过一个节点产生一次 `Visit`，
    /// 落位后以新节点深度产生 `Inserted`。
    pub fn insert_observed<O: TreeObserver<T>>(&mut self, value: T, observer: &mut O) -> bool {
        let mut link = self.root_mut();
        let mut depth = 0;

        while let Some(node) = link {
            observer.on_step(TreeAction::Visit, &node.value, depth);
            match value.cmp(&node.value) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => {
                    tracing::debug!(depth, "duplicate value ignored");
                    return false;
                }
            }
            depth += 1;
        }

        observer.on_step(TreeAction::Inserted, &value, depth);
        *link = Some(Box::new(Node::new(value)));
        self.increment_len();
        true
    }
}
