//! Benchmarks for the board scans the session runs after every move.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hotseat_chess::core::{Board, Color, Coord};
use hotseat_chess::rules::{evaluate_terminal, has_any_legal_move, legal_destinations};

fn middlegame() -> Board {
    Board::from_rows([
        "r..qk..r",
        "ppp..ppp",
        "..np.n..",
        "..b.p.B.",
        "..B.P.b.",
        "..NP.N..",
        "PPP..PPP",
        "R..QK..R",
    ])
    .unwrap()
}

fn bench_scans(c: &mut Criterion) {
    let opening = Board::starting();
    let middle = middlegame();

    c.bench_function("has_any_legal_move/opening", |b| {
        b.iter(|| has_any_legal_move(black_box(&opening), Color::White))
    });

    c.bench_function("evaluate_terminal/middlegame", |b| {
        b.iter(|| evaluate_terminal(black_box(&middle), Color::Black))
    });

    c.bench_function("legal_destinations/all_squares", |b| {
        b.iter(|| {
            Coord::all()
                .map(|from| legal_destinations(black_box(&middle), from).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_scans);
criterion_main!(benches);
