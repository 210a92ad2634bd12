use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_yamlite::{dump, from_str, parse, to_string};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Clone)]
struct Service {
    name: String,
    image: String,
    ports: Vec<u16>,
    env: Vec<String>,
    script: String,
}

fn products(size: u32) -> Vec<Product> {
    (0..size)
        .map(|i| Product {
            sku: format!("SKU{}", i),
            name: format!("Product {}", i),
            price: 9.99 + f64::from(i),
            quantity: i,
        })
        .collect()
}

fn config_document(services: usize) -> String {
    let mut text = String::from("version: '3'\ndefaults: &defaults\n  restart: always\n  retries: 3\nservices:\n");
    for i in 0..services {
        text.push_str(&format!(
            "  svc{i}:\n    <<: *defaults\n    image: registry.local/app:{i} # pinned\n    ports: [80{i:02}, 443]\n    env:\n      - MODE=prod\n      - ID={i}\n    command: >\n      run --fast\n      --id {i}\n"
        ));
    }
    text
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_deserialize_simple(c: &mut Criterion) {
    let text = "id: 123\nname: Alice\nemail: alice@example.com\nactive: true\n";

    c.bench_function("deserialize_simple_struct", |b| {
        b.iter(|| from_str::<User>(black_box(text)))
    });
}

fn benchmark_serialize_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_array");

    for size in [10, 50, 100, 500].iter() {
        let products = products(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&products)))
        });
    }
    group.finish();
}

fn benchmark_deserialize_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("deserialize_array");

    for size in [10, 50, 100, 500].iter() {
        let text = to_string(&products(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str::<Vec<Product>>(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_multi_line_strings(c: &mut Criterion) {
    let service = Service {
        name: "worker".to_string(),
        image: "registry.local/worker:1.4".to_string(),
        ports: vec![8080, 8443],
        env: vec!["MODE=prod".to_string(), "LOG=info".to_string()],
        script: "set -e\n".repeat(40),
    };
    let text = to_string(&service).unwrap();

    c.bench_function("serialize_literal_block", |b| {
        b.iter(|| to_string(black_box(&service)))
    });
    c.bench_function("deserialize_literal_block", |b| {
        b.iter(|| from_str::<Service>(black_box(&text)))
    });
}

fn benchmark_parse_config(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_config");

    for services in [5, 50, 200].iter() {
        let text = config_document(*services);
        group.bench_with_input(BenchmarkId::from_parameter(services), &text, |b, text| {
            b.iter(|| parse(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_dump_thresholds(c: &mut Criterion) {
    let mut group = c.benchmark_group("dump_thresholds");
    let value = parse(&config_document(50)).unwrap();

    for inline in [0, 2, usize::MAX].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(inline), inline, |b, inline| {
            b.iter(|| dump(black_box(&value), *inline, 0))
        });
    }
    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    let mut group = c.benchmark_group("format_comparison");

    group.bench_function("yaml_serialize", |b| b.iter(|| to_string(black_box(&user))));
    group.bench_function("json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&user)))
    });

    let yaml_str = to_string(&user).unwrap();
    let json_str = serde_json::to_string(&user).unwrap();

    group.bench_function("yaml_deserialize", |b| {
        b.iter(|| from_str::<User>(black_box(&yaml_str)))
    });
    group.bench_function("json_deserialize", |b| {
        b.iter(|| serde_json::from_str::<User>(black_box(&json_str)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_deserialize_simple,
    benchmark_serialize_array,
    benchmark_deserialize_array,
    benchmark_multi_line_strings,
    benchmark_parse_config,
    benchmark_dump_thresholds,
    benchmark_comparison_with_json
);
criterion_main!(benches);
