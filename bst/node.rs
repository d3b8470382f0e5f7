use std::fmt;

/// 子树链接：空或者独占一个子节点
pub type Link<T> = Option<Box<Node<T>>>;

/// 二叉搜索树节点
///
/// 每个节点独占左右子树，没有父指针，因此不存在循环引用。
/// 不变式：左子树所有值 < 节点值 < 右子树所有值，不允许重复。
///
/// 按升序插入会得到深度为 n 的链，所以整棵子树的计算都用显式栈完成。
pub struct Node<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
            left: None,
            right: None,
        }
    }

    /// 是否没有子节点
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn child_count(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    /// 以该节点为根的子树高度（叶子为 1）
    pub fn height(&self) -> usize {
        subtree_height(Some(self))
    }

    /// 左子树高度减右子树高度
    pub fn balance_factor(&self) -> isize {
        link_height(&self.left) as isize - link_height(&self.right) as isize
    }

    /// 子树中的最小值节点
    pub fn min_node(&self) -> &Node<T> {
        let mut current = self;
        while let Some(left) = &current.left {
            current = left.as_ref();
        }
        current
    }

    /// 子树中的最大值节点
    pub fn max_node(&self) -> &Node<T> {
        let mut current = self;
        while let Some(right) = &current.right {
            current = right.as_ref();
        }
        current
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    // 只打印直接子节点的值，深链不会递归展开
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left.as_ref().map(|n| &n.value))
            .field("right", &self.right.as_ref().map(|n| &n.value))
            .finish()
    }
}

/// 空链接高度为 0
pub fn link_height<T>(link: &Link<T>) -> usize {
    subtree_height(link.as_deref())
}

fn subtree_height<T>(root: Option<&Node<T>>) -> usize {
    fold_postorder(root, |_, _, left: Option<usize>, right: Option<usize>| {
        1 + left.unwrap_or(0).max(right.unwrap_or(0))
    })
    .unwrap_or(0)
}

/// 后序收集子树中的节点及其深度（根为 0）
///
/// 先按 根、右、左 的顺序出栈，再整体反转得到 左、右、根。
pub(crate) fn postorder_nodes<T>(root: Option<&Node<T>>) -> Vec<(&Node<T>, usize)> {
    let mut pending: Vec<(&Node<T>, usize)> = root.map(|node| (node, 0)).into_iter().collect();
    let mut ordered = Vec::new();
    while let Some((node, depth)) = pending.pop() {
        ordered.push((node, depth));
        pending.extend(node.left.as_deref().map(|n| (n, depth + 1)));
        pending.extend(node.right.as_deref().map(|n| (n, depth + 1)));
    }
    ordered.reverse();
    ordered
}

/// 自底向上汇总子树
///
/// 对每个节点调用 `combine(node, depth, left, right)`，其中 `left`/`right`
/// 是对应子树的汇总结果（子树为空时为 None），返回根的汇总结果。
pub(crate) fn fold_postorder<'a, T, R, F>(root: Option<&'a Node<T>>, mut combine: F) -> Option<R>
where
    F: FnMut(&'a Node<T>, usize, Option<R>, Option<R>) -> R,
{
    // 后序中右子树的结果总在栈顶，左子树的结果紧挨在下面
    let mut results: Vec<R> = Vec::new();
    for (node, depth) in postorder_nodes(root) {
        let right = if node.right.is_some() {
            results.pop()
        } else {
            None
        };
        let left = if node.left.is_some() {
            results.pop()
        } else {
            None
        };
        results.push(combine(node, depth, left, right));
    }
    results.pop()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node<i32> {
        Node {
            value: 50,
            left: Some(Box::new(Node {
                value: 30,
                left: Some(Box::new(Node::new(20))),
                right: None,
            })),
            right: Some(Box::new(Node::new(70))),
        }
    }

    #[test]
    fn test_node_shape() {
        let root = sample();
        assert!(!root.is_leaf());
        assert_eq!(root.child_count(), 2);
        assert_eq!(root.height(), 3);
        assert_eq!(root.balance_factor(), 1);
        assert!(Node::new(1).is_leaf());
    }

    #[test]
    fn test_min_max_node() {
        let root = sample();
        assert_eq!(root.min_node().value, 20);
        assert_eq!(root.max_node().value, 70);
    }

    #[test]
    fn test_postorder_nodes() {
        let root = sample();
        let order: Vec<(i32, usize)> = postorder_nodes(Some(&root))
            .into_iter()
            .map(|(node, depth)| (node.value, depth))
            .collect();
        assert_eq!(order, vec![(20, 2), (30, 1), (70, 1), (50, 0)]);
    }

    #[test]
    fn test_fold_postorder_counts_nodes() {
        let root = sample();
        let count = fold_postorder(Some(&root), |_, _, left: Option<usize>, right| {
            1 + left.unwrap_or(0) + right.unwrap_or(0)
        });
        assert_eq!(count, Some(4));
        assert_eq!(
            fold_postorder(None::<&Node<i32>>, |_, _, _, _: Option<()>| ()),
            None
        );
    }

    #[test]
    fn test_debug_shows_children_values() {
        let root = sample();
        let text = format!("{:?}", root);
        assert_eq!(text, "Node { value: 50, left: Some(30), right: Some(70) }");
    }
}
