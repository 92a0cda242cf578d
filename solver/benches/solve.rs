use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    BatchSize,
    BenchmarkId,
    Criterion,
};
use solver::{
    Literal,
    SolveOutcome,
    Solver,
    Variable,
};

criterion_group!(
    bench_solve,
    bench_chained_implications_sat,
    bench_pigeonhole_unsat,
);
criterion_main!(bench_solve);

fn pos(var: usize) -> Literal {
    Variable::from_index(var).pos_literal()
}

fn neg(var: usize) -> Literal {
    Variable::from_index(var).neg_literal()
}

/// Builds `(x0) & (-x0 v x1) & ... & (-x{n-2} v x{n-1})`: a satisfiable chain
/// of forced unit propagations with no backtracking.
fn chained_implications(n: usize) -> Solver {
    let mut solver = Solver::default();
    solver.add_clause(vec![pos(0)]).unwrap();
    for i in 0..n - 1 {
        solver.add_clause(vec![neg(i), pos(i + 1)]).unwrap();
    }
    solver
}

/// Builds an unsatisfiable instance over `n` pigeons and `n - 1` holes using
/// the standard at-least-one/at-most-one encoding, forcing the search to
/// exhaust every decision branch.
fn pigeonhole(pigeons: usize, holes: usize) -> Solver {
    let var = |p: usize, h: usize| p * holes + h;
    let mut solver = Solver::default();
    for p in 0..pigeons {
        let clause = (0..holes).map(|h| pos(var(p, h))).collect::<Vec<_>>();
        solver.add_clause(clause).unwrap();
    }
    for h in 0..holes {
        for p1 in 0..pigeons {
            for p2 in (p1 + 1)..pigeons {
                solver
                    .add_clause(vec![neg(var(p1, h)), neg(var(p2, h))])
                    .unwrap();
            }
        }
    }
    solver
}

fn bench_chained_implications_sat(c: &mut Criterion) {
    let mut g = c.benchmark_group("Solver::solve");
    for &n in &[50usize, 200, 1000] {
        let solver = chained_implications(n);
        g.bench_function(BenchmarkId::new("chained_implications_sat", n), |bencher| {
            bencher.iter_batched_ref(
                || solver.clone(),
                |solver| {
                    let result = black_box(solver.solve());
                    assert_eq!(result, Ok(SolveOutcome::Sat));
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench_pigeonhole_unsat(c: &mut Criterion) {
    let mut g = c.benchmark_group("Solver::solve");
    g.sample_size(10);
    for &pigeons in &[5usize, 6, 7] {
        let solver = pigeonhole(pigeons, pigeons - 1);
        g.bench_function(BenchmarkId::new("pigeonhole_unsat", pigeons), |bencher| {
            bencher.iter_batched_ref(
                || solver.clone(),
                |solver| {
                    let result = black_box(solver.solve());
                    assert_eq!(result, Ok(SolveOutcome::Unsat));
                },
                BatchSize::SmallInput,
            )
        });
    }
}
