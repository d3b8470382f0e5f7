use super::super::node::fold_postorder;
use super::super::tree::BinarySearchTree;

/// 平衡检查相关算法
impl<T> BinarySearchTree<T> {
    /// 根节点的平衡因子（左子树高度减右子树高度），空树为 0
    pub fn balance_factor(&self) -> isize {
        self.root().map_or(0, |node| node.balance_factor())
    }

    /// 是否每个节点的左右子树高度差都不超过 1
    ///
    /// 自底向上一次计算所有子树高度，失衡的子树向上传递 None。
    pub fn is_balanced(&self) -> bool {
        fold_postorder(self.root(), |_, _, left, right| balanced_height(left, right))
            .unwrap_or(Some(0))
            .is_some()
    }
}

/// 左右子树都平衡且高度差不超过 1 时返回合并后的高度
fn balanced_height(left: Option<Option<usize>>, right: Option<Option<usize>>) -> Option<usize> {
    let left = left.unwrap_or(Some(0))?;
    let right = right.unwrap_or(Some(0))?;
    if left.abs_diff(right) > 1 {
        return None;
    }
    Some(1 + left.max(right))
}
