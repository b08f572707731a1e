//! End-to-end indexing tests: unit loading, traversal, keys, and errors.

mod common;

use assert2::{check, let_assert};
use common::{int, module, sample_unit, unit_of, value, write_unit};
use std::path::Path;
use typedex::decl::{Unit, UnitContent};
use typedex::{
    Caches, IndexConfig, MemorySink, PackageId, PlainRenderer, TypeExpr, UnitError,
    index_unit, index_unit_file,
};

fn index_sample(base: &Path, locator: &str) -> (MemorySink, typedex::IndexStats) {
    typedex::tracing::init();
    let mut caches = Caches::new();
    let mut sink = MemorySink::new();
    let stats = index_unit_file(
        base,
        Path::new(locator),
        "Pkg",
        &IndexConfig::default(),
        &PlainRenderer,
        &mut caches,
        &mut sink,
    )
    .unwrap();
    (sink, stats)
}

#[test]
fn indexes_a_unit_file_under_its_package_identity() {
    let dir = tempfile::tempdir().unwrap();
    write_unit(dir.path(), "./pkg/1.0/Pkg.json", &sample_unit());

    let (sink, stats) = index_sample(dir.path(), "./pkg/1.0/Pkg.json");

    // compare, to_string, M.map are indexable; _cache, Stdlib, Dangling skip.
    check!(stats.indexed == 3);
    check!(stats.skipped == 3);
    check!(sink.entries().len() == stats.indexed);

    let compare = sink.lookup_name("pkg.compare");
    check!(compare.len() == 1);
    check!(compare[0].full_name == "Pkg.compare");
    check!(compare[0].package == PackageId::new("pkg", "1.0"));
    check!(compare[0].rendered_type.as_str() == "int -> int -> int");
    check!(compare[0].doc.is_none());

    let map = sink.lookup_name("pkg.m.map");
    check!(map.len() == 1);
    check!(map[0].doc.as_deref().map(String::as_str) == Some("Applies a function to every element."));
}

#[test]
fn name_keys_are_lowercase_qualified_paths() {
    let dir = tempfile::tempdir().unwrap();
    write_unit(dir.path(), "./pkg/1.0/Pkg.json", &sample_unit());
    let (sink, _) = index_sample(dir.path(), "./pkg/1.0/Pkg.json");

    check!(!sink.names_containing("to_string").is_empty());
    check!(sink.lookup_name("Pkg.to_string").len() == 1); // lookup lowercases
    check!(sink.lookup_name("pkg.stdlib.ignore_me").is_empty());
    check!(sink.lookup_name("pkg._cache").is_empty());
}

#[test]
fn compare_example_cost_reflects_missing_doc() {
    let dir = tempfile::tempdir().unwrap();
    let unit = unit_of(vec![module(
        "M",
        vec![value(
            "compare",
            TypeExpr::arrow(int(), TypeExpr::arrow(int(), int())),
            None,
        )],
    )]);
    write_unit(dir.path(), "./pkg/1.0/Pkg.json", &unit);
    let (sink, _) = index_sample(dir.path(), "./pkg/1.0/Pkg.json");

    let hits = sink.lookup_name("pkg.m.compare");
    check!(hits.len() == 1);
    // len("Pkg.M.compare") + len("int -> int -> int") + 5*2 + size 3 + 1000
    check!(hits[0].cost == 13 + 17 + 10 + 3 + 1000);
}

#[test]
fn stdlib_package_gets_the_flat_bonus() {
    let unit = unit_of(vec![value("length", int(), Some("Length."))]);
    let config = IndexConfig::default();

    let cost_under = |package: PackageId| {
        let mut caches = Caches::new();
        let mut sink = MemorySink::new();
        index_unit(
            &unit,
            "Pkg",
            package,
            &config,
            &PlainRenderer,
            &mut caches,
            &mut sink,
        )
        .unwrap();
        sink.lookup_name("pkg.length")[0].cost
    };

    let plain = cost_under(PackageId::new("pkg", "1.0"));
    let stdlib = cost_under(PackageId::new("stdlib", "4.14"));
    check!(plain - stdlib == 100);
}

#[test]
fn unmodeled_types_reach_name_search_only() {
    let unit = unit_of(vec![value(
        "methods",
        TypeExpr::Other {
            kind: "object".to_string(),
        },
        None,
    )]);
    let mut caches = Caches::new();
    let mut sink = MemorySink::new();
    index_unit(
        &unit,
        "Pkg",
        PackageId::new("pkg", "1.0"),
        &IndexConfig::default(),
        &PlainRenderer,
        &mut caches,
        &mut sink,
    )
    .unwrap();

    let hits = sink.lookup_name("pkg.methods");
    check!(hits.len() == 1);
    check!(hits[0].type_paths.is_empty());
    check!(sink.shape_key_count() == 0);
}

#[test]
fn page_units_are_fatal() {
    let unit = Unit {
        content: UnitContent::Page {
            title: "Manual".to_string(),
        },
    };
    let mut caches = Caches::new();
    let mut sink = MemorySink::new();
    let result = index_unit(
        &unit,
        "Manual",
        PackageId::new("pkg", "1.0"),
        &IndexConfig::default(),
        &PlainRenderer,
        &mut caches,
        &mut sink,
    );
    let_assert!(Err(err) = result);
    let_assert!(Some(UnitError::PageContent { unit: name }) = err.downcast_ref::<UnitError>());
    check!(name.as_str() == "Manual");
    check!(sink.is_empty());
}

#[test]
fn malformed_locators_are_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_unit(dir.path(), "pkg/1.0/Pkg.json", &sample_unit());

    let mut caches = Caches::new();
    let mut sink = MemorySink::new();
    let result = index_unit_file(
        dir.path(),
        Path::new("pkg/1.0/Pkg.json"),
        "Pkg",
        &IndexConfig::default(),
        &PlainRenderer,
        &mut caches,
        &mut sink,
    );
    let_assert!(Err(err) = result);
    check!(matches!(
        err.downcast_ref::<UnitError>(),
        Some(UnitError::BadLocator { .. })
    ));
}

#[test]
fn unreadable_unit_files_are_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut caches = Caches::new();
    let mut sink = MemorySink::new();
    let result = index_unit_file(
        dir.path(),
        Path::new("./pkg/1.0/Missing.json"),
        "Missing",
        &IndexConfig::default(),
        &PlainRenderer,
        &mut caches,
        &mut sink,
    );
    check!(result.is_err());
    check!(sink.is_empty());
}

#[test]
fn index_survives_persistence() {
    let dir = tempfile::tempdir().unwrap();
    write_unit(dir.path(), "./pkg/1.0/Pkg.json", &sample_unit());
    let (sink, _) = index_sample(dir.path(), "./pkg/1.0/Pkg.json");

    let index_path = dir.path().join("pkg.index");
    sink.save(&index_path).unwrap();
    let loaded = MemorySink::load(&index_path).unwrap();

    check!(loaded.entries().len() == sink.entries().len());
    let compare = loaded.lookup_name("pkg.compare");
    check!(compare.len() == 1);
    check!(!compare[0].type_paths.is_empty());
    check!(loaded.lookup_shape(&compare[0].type_paths[0]).len() == 1);
}

#[test]
fn caches_are_cleared_between_independent_runs() {
    let unit = unit_of(vec![value("f", int(), Some("Doc."))]);
    let mut caches = Caches::new();
    let mut sink = MemorySink::new();
    let config = IndexConfig::default();

    index_unit(
        &unit,
        "A",
        PackageId::new("a", "1.0"),
        &config,
        &PlainRenderer,
        &mut caches,
        &mut sink,
    )
    .unwrap();
    check!(!caches.path_tokens.is_empty());

    caches.clear();
    check!(caches.path_tokens.is_empty());

    index_unit(
        &unit,
        "B",
        PackageId::new("b", "1.0"),
        &config,
        &PlainRenderer,
        &mut caches,
        &mut sink,
    )
    .unwrap();
    check!(sink.lookup_name("a.f").len() == 1);
    check!(sink.lookup_name("b.f").len() == 1);
}
