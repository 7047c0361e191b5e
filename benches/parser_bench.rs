use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sqldump_tuple_parser::{TupleExtractor, extract_tuples, parse_dump, parse_dump_par, parse_tuple_content};

fn build_dump(rows: usize) -> String {
    let mut sql = String::from("INSERT INTO `wp_posts` (`ID`, `post_content`, `post_title`) VALUES\n");
    for i in 0..rows {
        if i > 0 {
            sql.push_str(",\n");
        }
        sql.push_str(&format!(
            "({i},'<p>Contenido del post {i}, con \\'comillas\\' y ''dobles''</p>','Título {i}')"
        ));
    }
    sql.push_str(";\n");
    sql
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_tuples");
    for rows in [100usize, 10_000] {
        let sql = build_dump(rows);
        group.throughput(Throughput::Bytes(sql.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &sql, |b, sql| {
            b.iter(|| black_box(extract_tuples(black_box(sql), "wp_posts").len()))
        });
    }
    group.finish();
}

fn bench_fields(c: &mut Criterion) {
    let raw = r"42,'<p>Contenido, con \'comillas\' y ''dobles''</p>','Título',NULL,0";
    c.bench_function("parse_tuple_content", |b| {
        b.iter(|| black_box(parse_tuple_content(black_box(raw))))
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let sql = build_dump(10_000);
    let mut group = c.benchmark_group("parse_dump");
    group.throughput(Throughput::Bytes(sql.len() as u64));
    group.bench_function("sequential", |b| b.iter(|| black_box(parse_dump(&sql, "wp_posts").len())));
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(parse_dump_par(&sql, "wp_posts").len()))
    });
    group.bench_function("checked_extraction", |b| {
        let extractor = TupleExtractor::for_table("wp_posts");
        b.iter(|| black_box(extractor.extract(&sql).diagnostics.len()))
    });
    group.finish();
}

criterion_group!(benches, bench_extract, bench_fields, bench_pipeline);
criterion_main!(benches);
