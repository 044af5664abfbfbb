use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordgrid::{find_all_words, load_dictionary, Grid};

fn search_benchmark(c: &mut Criterion) {
    let dictionary = load_dictionary().expect("embedded dictionary loads");
    let grid = Grid::from_rows([
        ['S', 'T', 'A', 'R'],
        ['E', 'L', 'I', 'N'],
        ['D', 'O', 'M', 'E'],
        ['C', 'A', 'P', 'S'],
    ]);

    c.bench_function("find_all_words 4x4", |b| {
        b.iter(|| find_all_words(black_box(&grid), &dictionary))
    });
}

criterion_group!(benches, search_benchmark);
criterion_main!(benches);
