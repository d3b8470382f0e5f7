use std::cmp::Ordering;

use super::super::tree::BinarySearchTree;
use crate::observer::{NoopObserver, TreeAction, TreeObserver};

/// 查找操作相关算法
impl<T: Ord> BinarySearchTree<T> {
    /// 值是否存在于树中
    pub fn search(&self, value: &T) -> bool {
        self.search_observed(value, &mut NoopObserver)
    }

    /// `search` 的别名
    pub fn contains(&self, value: &T) -> bool {
        self.search(value)
    }

    /// 查找（带观察者）：按比较结果向左或向右，遇到空子树返回 false
    pub fn search_observed<O: TreeObserver<T>>(&self, value: &T, observer: &mut O) -> bool {
        let mut current = self.root_ref().as_deref();
        let mut depth = 0;

        while let Some(node) = current {
            observer.on_step(TreeAction::Visit, &node.value, depth);
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => {
                    observer.on_step(TreeAction::Found, &node.value, depth);
                    return true;
                }
            };
            depth += 1;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::StepStats;

    #[test]
    fn test_search() {
        let tree: BinarySearchTree<i32> = [50, 30, 20, 40, 70, 60, 80].into_iter().collect();
        for value in [50, 30, 20, 40, 70, 60, 80] {
            assert!(tree.search(&value));
        }
        assert!(!tree.search(&65));
        assert!(!tree.contains(&0));
    }

    #[test]
    fn test_search_empty() {
        let tree: BinarySearchTree<i32> = BinarySearchTree::new();
        assert!(!tree.search(&1));
    }

    #[test]
    fn test_search_visits_one_node_per_level() {
        let tree: BinarySearchTree<i32> = [50, 30, 20, 40, 70, 60, 80].into_iter().collect();
        let mut stats = StepStats::default();
        assert!(tree.search_observed(&60, &mut stats));
        assert_eq!(stats.visits, 3);

        let mut stats = StepStats::default();
        assert!(!tree.search_observed(&65, &mut stats));
        assert_eq!(stats.visits, 3);
    }
}
