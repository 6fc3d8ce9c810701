use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hexdeck_commands::{parse, CommandModel};

/// Generate a command file with the given number of sections and commands.
fn generate_command_file(sections: usize, commands_per_section: usize) -> String {
    let mut content = String::new();

    for s in 0..sections {
        let name = match s {
            0 => "SHORTCUT".to_string(),
            1 => "BATCHSEND".to_string(),
            n => format!("SECTION{n}"),
        };
        content.push_str(&format!("[{name}]\n"));

        for c in 0..commands_per_section {
            match name.as_str() {
                "SHORTCUT" => content.push_str(&format!(
                    "DEV-{} action {} = {:02X} {:02X}\n",
                    c % 8,
                    c,
                    c % 256,
                    (c / 256) % 256
                )),
                "BATCHSEND" => content.push_str(&format!(
                    "batch {c} | STEP {c} | {:02X} {:02X} {:02X}\n",
                    c % 256,
                    (c + 1) % 256,
                    (c + 2) % 256
                )),
                _ => content.push_str(&format!("CMD{c} = note {c} | {:02X} FF\n", c % 256)),
            }
        }
        content.push('\n');
    }

    content
}

/// Benchmark parsing files of different sizes
fn bench_parse(c: &mut Criterion) {
    let sizes = vec![16, 128, 1_024];

    let mut group = c.benchmark_group("parse");

    for &commands in &sizes {
        let content = generate_command_file(4, commands);

        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("commands_per_section", commands),
            &content,
            |b, content| b.iter(|| black_box(parse(black_box(content)).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark building the presentation model from a parsed set
fn bench_build_model(c: &mut Criterion) {
    let sizes = vec![16, 128, 1_024];

    let mut group = c.benchmark_group("build_model");

    for &commands in &sizes {
        let content = generate_command_file(4, commands);
        let set = parse(&content).unwrap();

        group.throughput(Throughput::Elements(set.command_count() as u64));
        group.bench_with_input(
            BenchmarkId::new("commands_per_section", commands),
            &set,
            |b, set| b.iter(|| black_box(CommandModel::build(black_box(set)))),
        );
    }

    group.finish();
}

criterion_group!(parser_benches, bench_parse, bench_build_model);

criterion_main!(parser_benches);
