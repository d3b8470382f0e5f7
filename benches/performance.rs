//! 算法性能基准测试
//!
//! 所有输入由固定种子生成，保证多次运行可比较。
//! O(n²) 的排序只在小规模上测试。

use algoviz::bst::BinarySearchTree;
use algoviz::graph::{self, Edge, Graph};
use algoviz::searching::{binary_search, linear_search};
use algoviz::sorting::{self, SortAlgorithm};
use algoviz::NoopObserver;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LARGE_SIZE: usize = 100_000;
const SMALL_SIZE: usize = 2_000;
const GRAPH_NODES: usize = 5_000;
const GRAPH_EDGES: usize = 50_000;
/// Floyd-Warshall 是 O(V³)，只测小图
const DENSE_NODES: usize = 150;

/// 性能测试配置
struct BenchConfig {
    max_value: i64,
    seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            max_value: 1_000_000,
            seed: 42,
        }
    }
}

/// 生成测试数据
fn generate_test_data(count: usize, config: &BenchConfig) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..count).map(|_| rng.gen_range(0..config.max_value)).collect()
}

/// 各排序算法在随机输入上的性能
fn bench_sort(c: &mut Criterion) {
    let config = BenchConfig::default();
    let mut group = c.benchmark_group("sort");

    for algorithm in SortAlgorithm::ALL {
        let size = match algorithm {
            SortAlgorithm::Bubble | SortAlgorithm::Selection | SortAlgorithm::Insertion => {
                SMALL_SIZE
            }
            _ => LARGE_SIZE,
        };
        let data = generate_test_data(size, &config);

        group.bench_with_input(BenchmarkId::new(algorithm.to_string(), size), &data, |b, data| {
            b.iter_batched(
                || data.clone(),
                |mut values| {
                    sorting::sort_integers(algorithm, &mut values, &mut NoopObserver)
                        .map(|_| values)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

/// 有序输入上二分搜索与线性搜索的对比
fn bench_search(c: &mut Criterion) {
    let config = BenchConfig::default();
    let mut data = generate_test_data(LARGE_SIZE, &config);
    data.sort_unstable();
    let targets = generate_test_data(1_000, &BenchConfig { seed: 7, ..config });

    c.bench_function("binary_search", |b| {
        b.iter(|| {
            targets
                .iter()
                .filter(|target| binary_search(&data, target).is_some())
                .count()
        });
    });

    c.bench_function("linear_search", |b| {
        b.iter(|| {
            targets
                .iter()
                .filter(|target| linear_search(&data, target).is_some())
                .count()
        });
    });
}

/// BST 插入、查找、删除性能测试
fn bench_bst(c: &mut Criterion) {
    let config = BenchConfig::default();
    let data = generate_test_data(LARGE_SIZE, &config);

    c.bench_function("bst_insert", |b| {
        b.iter(|| data.iter().copied().collect::<BinarySearchTree<i64>>());
    });

    let tree: BinarySearchTree<i64> = data.iter().copied().collect();
    c.bench_function("bst_search", |b| {
        b.iter(|| data.iter().filter(|value| tree.search(value)).count());
    });

    c.bench_function("bst_delete_half", |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| {
                for value in &data[..LARGE_SIZE / 2] {
                    tree.delete(value);
                }
                tree
            },
            BatchSize::LargeInput,
        );
    });

    c.bench_function("bst_inorder", |b| {
        b.iter(|| tree.inorder().count());
    });
}

/// 生成随机无向连通图：先连一条链，再补随机边
fn generate_graph(nodes: usize, edges: usize, config: &BenchConfig) -> Graph {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut all: Vec<Edge> = (1..nodes)
        .map(|i| Edge::new(i - 1, i, rng.gen_range(1..100)))
        .collect();
    for _ in nodes..edges {
        let (from, to) = (rng.gen_range(0..nodes), rng.gen_range(0..nodes));
        all.push(Edge::new(from, to, rng.gen_range(1..100)));
    }
    Graph::from_edges(nodes, false, all).expect("generated edges are in range")
}

/// 图遍历、最短路径与最小生成树
fn bench_graph(c: &mut Criterion) {
    let config = BenchConfig::default();
    let sparse = generate_graph(GRAPH_NODES, GRAPH_EDGES, &config);
    let dense = generate_graph(DENSE_NODES, DENSE_NODES * 10, &config);

    let mut group = c.benchmark_group("graph");
    group.bench_function("bfs", |b| b.iter(|| graph::bfs(&sparse, 0)));
    group.bench_function("dfs", |b| b.iter(|| graph::dfs(&sparse, 0)));
    group.bench_function("dijkstra", |b| b.iter(|| graph::dijkstra(&sparse, 0)));
    group.bench_function("kruskal", |b| b.iter(|| graph::kruskal(&sparse)));
    group.bench_function("prim", |b| b.iter(|| graph::prim(&sparse, 0)));
    group.bench_function("floyd_warshall", |b| {
        b.iter(|| graph::floyd_warshall(&dense));
    });
    group.finish();
}

criterion_group!(benches, bench_sort, bench_search, bench_bst, bench_graph);
criterion_main!(benches);
