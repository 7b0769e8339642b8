use crate::ir::{Docs, Field, Import, MapType, StructType, Type};

#[test]
fn import_key_defaults_to_last_segment() {
    let imp = Import::new(None, "github.com/acme/loader");
    assert_eq!(imp.key(), "loader");
    assert_eq!(Import::new(None, "fmt").key(), "fmt");
}

#[test]
fn import_key_prefers_alias() {
    let imp = Import::new(Some("m".into()), "github.com/acme/mock");
    assert_eq!(imp.key(), "m");
    assert_eq!(imp.original_path(), "github.com/acme/mock");
    assert!(!imp.is_used());
}

#[test]
fn docs_trim_comments() {
    let docs = Docs::new(["  // one ", "// two"]);
    assert_eq!(docs.comments(), ["// one", "// two"]);
    assert_eq!(docs.text(), "// one\n// two");
}

#[test]
fn referenced_types_recurse_into_structs() {
    let ty = Type::Struct(StructType {
        name: "S".into(),
        docs: None,
        fields: vec![
            Field::new(Type::plain("A", "*bytes.Buffer")),
            Field::new(Type::Struct(StructType {
                name: "Inner".into(),
                docs: None,
                fields: vec![Field::new(Type::Map(MapType {
                    name: "M".into(),
                    docs: None,
                    key: "string".into(),
                    value: "time.Time".into(),
                }))],
            })),
        ],
    });
    assert_eq!(
        ty.referenced_types(),
        ["*bytes.Buffer", "string", "time.Time"]
    );
}

#[test]
fn set_docs_replaces_documentation() {
    let mut ty = Type::plain("A", "int").with_docs(Docs::line("first"));
    ty.set_docs(Some(Docs::line("second")));
    assert_eq!(ty.docs().unwrap().text(), "// second");
    assert_eq!(ty.kind(), "plain");
}
