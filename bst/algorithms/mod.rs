// 二叉搜索树算法模块
//
// 按功能分解为不同的子模块：
// - insert: 插入（重复值忽略）
// - search: 查找
// - delete: 删除（两个子节点时用中序后继替换）
// - traversal: 中序/前序/后序的惰性遍历
// - balance: 高度、平衡因子与平衡检查

pub mod balance;
pub mod delete;
pub mod insert;
pub mod search;
pub mod traversal;
