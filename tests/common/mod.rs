//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::Path;

use typedex::decl::{Item, ModuleDecl, Signature, SignatureExpr, Unit, UnitContent};
use typedex::typeexpr::TypeExpr;

pub fn int() -> TypeExpr {
    TypeExpr::constr("int", vec![])
}

pub fn string() -> TypeExpr {
    TypeExpr::constr("string", vec![])
}

pub fn value(name: &str, ty: TypeExpr, doc: Option<&str>) -> Item {
    Item::Value {
        name: name.to_string(),
        ty,
        doc: doc.map(str::to_string),
    }
}

pub fn module(name: &str, items: Vec<Item>) -> Item {
    Item::Module {
        name: name.to_string(),
        decl: ModuleDecl::Definition(SignatureExpr::Signature(Signature { items })),
    }
}

pub fn unit_of(items: Vec<Item>) -> Unit {
    Unit {
        content: UnitContent::Module(SignatureExpr::Signature(Signature { items })),
    }
}

/// A small but representative compilation unit: documented and undocumented
/// values, a nested module, an internal value, a stdlib self-reference, and
/// an unresolved alias.
pub fn sample_unit() -> Unit {
    unit_of(vec![
        value(
            "compare",
            TypeExpr::arrow(int(), TypeExpr::arrow(int(), int())),
            None,
        ),
        value(
            "to_string",
            TypeExpr::arrow(int(), string()),
            Some("Renders an integer in decimal."),
        ),
        value("_cache", int(), None),
        module(
            "M",
            vec![value(
                "map",
                TypeExpr::arrow(
                    TypeExpr::arrow(TypeExpr::var("a"), TypeExpr::var("b")),
                    TypeExpr::arrow(
                        TypeExpr::constr("Stdlib.List.t", vec![TypeExpr::var("a")]),
                        TypeExpr::constr("Stdlib.List.t", vec![TypeExpr::var("b")]),
                    ),
                ),
                Some("Applies a function to every element."),
            )],
        ),
        module("Stdlib", vec![value("ignore_me", int(), None)]),
        Item::Module {
            name: "Dangling".to_string(),
            decl: ModuleDecl::Alias {
                target: "Gone".to_string(),
                expansion: None,
            },
        },
    ])
}

/// Writes a unit as JSON under `base_dir`, at the given relative locator.
pub fn write_unit(base_dir: &Path, locator: &str, unit: &Unit) {
    let path = base_dir.join(locator);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, serde_json::to_string(unit).unwrap()).unwrap();
}
