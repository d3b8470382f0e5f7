use std::cmp::Ordering;

use super::super::node::Link;
use super::super::tree::BinarySearchTree;
use crate::observer::{NoopObserver, TreeAction, TreeObserver};

/// 二叉搜索树删除算法实现
impl<T: Ord> BinarySearchTree<T> {
    /// 删除一个值
    ///
    /// 返回 true 表示删除了节点；值不存在时不做任何修改，返回 false。
    pub fn delete(&mut self, value: &T) -> bool {
        self.delete_observed(value, &mut NoopObserver)
    }

    /// 删除一个值（带观察者）
    ///
    /// - 没有子节点或只有一个子节点：用剩下的子节点（或空）替换
    /// - 有两个子节点：用右子树最小值（中序后继）替换节点值，再从右子树删除后继
    pub fn delete_observed<O: TreeObserver<T>>(&mut self, value: &T, observer: &mut O) -> bool {
        let deleted = unlink(self.root_mut(), value, observer);
        if deleted {
            self.decrement_len();
        } else {
            tracing::debug!("value not present, nothing deleted");
        }
        deleted
    }
}

/// 沿比较路径找到目标所在的链接并摘除
///
/// 先用共享借用决定方向，再可变地前进一步，循环结束时 `link` 正好指向目标。
fn unlink<T, O>(mut link: &mut Link<T>, value: &T, observer: &mut O) -> bool
where
    T: Ord,
    O: TreeObserver<T>,
{
    let mut depth = 0;
    loop {
        let direction = match link.as_deref() {
            Some(node) => {
                observer.on_step(TreeAction::Visit, &node.value, depth);
                value.cmp(&node.value)
            }
            None => return false,
        };
        if direction == Ordering::Equal {
            break;
        }
        let Some(node) = link else {
            return false;
        };
        link = match direction {
            Ordering::Less => &mut node.left,
            _ => &mut node.right,
        };
        depth += 1;
    }

    let Some(node) = link else {
        return false;
    };
    if node.left.is_some() && node.right.is_some() {
        if let Some(successor) = take_min(&mut node.right) {
            node.value = successor;
            observer.on_step(TreeAction::ReplacedWithSuccessor, &node.value, depth);
        }
        return true;
    }

    observer.on_step(TreeAction::Removed, &node.value, depth);
    let child = node.left.take().or_else(|| node.right.take());
    *link = child;
    true
}

/// 从子树中摘除最小值节点并返回它的值
///
/// 最小值节点没有左子节点，摘除后由它的右子树顶替。
fn take_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }
    let mut node = link.take()?;
    *link = node.right.take();
    Some(node.value)
}
