//! Benchmarks for JSON Schema generation.
//!
//! Run with: cargo bench -p typeschema-json-schema

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use typeschema::{
    Discriminator, EnumSchema, InterfaceSchema, ListSchema, Schema, ShapeSchema, StringSchema,
};
use typeschema_json_schema::{GeneratorOptions, JsonSchemaGenerator, middleware};

// =============================================================================
// Test Data
// =============================================================================

fn name() -> Schema {
    StringSchema::new()
        .description("First name of a person")
        .min_length(3)
        .max_length(20)
        .into()
}

/// Shape with `width` properties of mixed kinds.
fn wide_shape(width: usize) -> Schema {
    (0..width)
        .fold(ShapeSchema::new().description("wide"), |shape, i| {
            match i % 4 {
                0 => shape.property(format!("name{i}"), name()),
                1 => shape.optional_property(format!("count{i}"), Schema::literal_integer()),
                2 => shape.property(
                    format!("title{i}"),
                    EnumSchema::unbacked(["MR", "MRS", "MISS", "MS", "OTHER"]),
                ),
                _ => shape
                    .property(format!("flag{i}"), Schema::literal_boolean())
                    .override_description(format!("flag{i}"), "Overridden"),
            }
        })
        .into()
}

/// Shapes nested `depth` levels through lists and interfaces.
fn deep_tree(depth: usize) -> Schema {
    (0..depth).fold(name(), |inner, level| {
        let list = ListSchema::new(inner.clone()).max_count(10);
        let interface = InterfaceSchema::new()
            .implementation(inner)
            .implementation(name())
            .discriminator(Discriminator::with_mapping("type", [("a", "A"), ("b", "B")]));
        ShapeSchema::new()
            .property(format!("items{level}"), list)
            .property(format!("either{level}"), interface)
            .into()
    })
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_shape");
    let generator = JsonSchemaGenerator::default();

    for width in [8, 64, 512] {
        let schema = wide_shape(width);
        group.bench_with_input(BenchmarkId::from_parameter(width), &schema, |b, schema| {
            b.iter(|| generator.from_schema(black_box(schema)).unwrap())
        });
    }

    group.finish();
}

fn bench_deep(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_tree");
    let schema = deep_tree(8);

    let plain = JsonSchemaGenerator::new(GeneratorOptions::new().with_include_discriminator(true));
    group.bench_function("no_middleware", |b| {
        b.iter(|| plain.from_schema(black_box(&schema)).unwrap())
    });

    let wrapped = JsonSchemaGenerator::new(
        GeneratorOptions::new()
            .with_include_discriminator(true)
            .with_middleware(middleware::from_fn(|schema, next| next.run(schema)))
            .with_middleware(middleware::from_fn(|schema, next| next.run(schema))),
    );
    group.bench_function("two_middlewares", |b| {
        b.iter(|| wrapped.from_schema(black_box(&schema)).unwrap())
    });

    group.bench_function("to_value", |b| {
        let generated = plain.from_schema(&schema).unwrap();
        b.iter(|| black_box(&generated).to_value().unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_wide, bench_deep);
criterion_main!(benches);
