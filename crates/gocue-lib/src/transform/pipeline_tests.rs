use crate::ir::{Field, Import, StructType, Type};
use crate::tags::Tags;

use super::{Outcome, Pipeline, Target, Transform};

fn structure(name: &str, fields: &[&str]) -> Type {
    Type::Struct(StructType {
        name: name.into(),
        docs: None,
        fields: fields
            .iter()
            .map(|f| Field::new(Type::plain(*f, "int")))
            .collect(),
    })
}

fn field_names(ty: &Type) -> Vec<&str> {
    ty.as_struct()
        .map(|st| st.fields.iter().map(Field::name).collect())
        .unwrap_or_default()
}

fn pipeline(transforms: impl IntoIterator<Item = Transform>) -> Pipeline {
    let mut pipeline = Pipeline::default();
    for t in transforms {
        pipeline.install(t);
    }
    pipeline
}

fn push(pipeline: &mut Pipeline, code: &mut Vec<Type>, ty: Type) -> Outcome {
    code.push(ty);
    pipeline.apply(code)
}

#[test]
fn exclude_type_drops_declaration() {
    let mut p = pipeline([Transform::exclude_type_named("Secret")]);
    let mut code = Vec::new();

    assert_eq!(push(&mut p, &mut code, Type::plain("Secret", "string")), Outcome::Excluded);
    assert_eq!(push(&mut p, &mut code, Type::plain("Public", "string")), Outcome::Keep);
    assert_eq!(code, [Type::plain("Public", "string")]);
}

#[test]
fn exclude_type_filters_struct_fields() {
    let mut p = pipeline([Transform::exclude_type(|t: Target<'_>| {
        matches!(t, Target::Field(_)) && t.name() == "B"
    })]);
    let mut code = Vec::new();

    push(&mut p, &mut code, structure("S", &["A", "B", "C"]));

    assert_eq!(field_names(&code[0]), ["A", "C"]);
}

#[test]
fn exclude_field_ignores_non_structs() {
    let mut p = pipeline([Transform::exclude_field(|_| true)]);
    let mut code = Vec::new();

    assert_eq!(push(&mut p, &mut code, Type::plain("P", "int")), Outcome::Keep);
    push(&mut p, &mut code, structure("S", &["A"]));

    assert_eq!(code.len(), 2);
    assert!(field_names(&code[1]).is_empty());
}

#[test]
fn modify_type_rewrites_fields_or_entry() {
    let mut p = pipeline([Transform::modify_type(|ty| match ty {
        Type::Plain(mut plain) => {
            plain.ty = plain.ty.replace("int", "int64");
            Type::Plain(plain)
        }
        other => other,
    })]);
    let mut code = Vec::new();

    push(&mut p, &mut code, Type::plain("Count", "int"));
    push(&mut p, &mut code, structure("S", &["A"]));

    assert_eq!(code[0], Type::plain("Count", "int64"));
    assert_eq!(
        code[1].as_struct().map(|st| &st.fields[0].ty),
        Some(&Type::plain("A", "int64"))
    );
}

#[test]
fn modify_field_rewrites_tags() {
    let mut p = pipeline([Transform::modify_field(|mut field| {
        let name = field.name().to_lowercase();
        field.tags.insert("json", vec![name]);
        field
    })]);
    let mut code = Vec::new();

    push(&mut p, &mut code, structure("S", &["Name"]));

    let tags = &code[0].as_struct().expect("struct").fields[0].tags;
    assert_eq!(tags.to_string(), r#"json:"name""#);
}

#[test]
fn harvest_then_splice_in_place() {
    let mut p = pipeline([Transform::copy_into_struct("S", "F", ["A", "B"])]);
    let mut code = Vec::new();

    assert_eq!(push(&mut p, &mut code, structure("A", &["A1", "A2"])), Outcome::Excluded);
    assert_eq!(push(&mut p, &mut code, structure("B", &["B1"])), Outcome::Excluded);
    push(&mut p, &mut code, structure("S", &["X", "F", "Y"]));
    p.splice(&mut code);

    assert_eq!(code.len(), 1);
    assert_eq!(field_names(&code[0]), ["X", "A1", "A2", "B1", "Y"]);
}

#[test]
fn missing_splice_target_aborts_remaining_splices() {
    let mut p = pipeline([
        Transform::copy_into_struct("Missing", "F", ["A"]),
        Transform::copy_into_struct("S", "F", ["B"]),
    ]);
    let mut code = Vec::new();

    push(&mut p, &mut code, structure("A", &["A1"]));
    push(&mut p, &mut code, structure("B", &["B1"]));
    push(&mut p, &mut code, structure("S", &["F"]));
    p.splice(&mut code);

    assert_eq!(field_names(&code[0]), ["F"]);
}

#[test]
fn generated_transform_applies_immediately_and_persists() {
    let mut p = pipeline([Transform::gen_field(|_st, field| {
        (field.tags.get("gocue").is_some_and(|v| v[0] == "skip"))
            .then(|| Transform::exclude_type_named(field.name().to_string()))
    })]);
    let mut code = Vec::new();

    let mut tags = Tags::new();
    tags.insert("gocue", vec!["skip".into()]);
    let s = Type::Struct(StructType {
        name: "S".into(),
        docs: None,
        fields: vec![
            Field::new(Type::plain("Keep", "int")),
            Field::new(Type::plain("Hidden", "int")).with_tags(tags),
        ],
    });

    push(&mut p, &mut code, s);
    assert_eq!(field_names(&code[0]), ["Keep"]);

    // The generated exclusion now applies to later declarations too.
    assert_eq!(
        push(&mut p, &mut code, Type::plain("Hidden", "string")),
        Outcome::Excluded
    );
    assert_eq!(code.len(), 1);
}

#[test]
fn generated_exclusion_of_entry_stops_processing() {
    let mut p = pipeline([
        Transform::gen_field(|st, _field| Some(Transform::exclude_type_named(st.name.clone()))),
        Transform::modify_type(|_| unreachable!("entry already excluded")),
    ]);
    let mut code = Vec::new();

    assert_eq!(push(&mut p, &mut code, structure("S", &["A"])), Outcome::Excluded);
    assert!(code.is_empty());
}

#[test]
fn promotion_is_first_match() {
    let p = pipeline([
        Transform::promote_to_enum("Color", ["RED"]),
        Transform::promote_to_enum("Color", ["BLUE"]),
    ]);
    let mut code = vec![Type::plain("Color", "int32"), Type::plain("Shade", "int32")];

    p.promote(&mut code);

    let Type::Enum(color) = &code[0] else {
        panic!("expected enum, got {:?}", code[0]);
    };
    assert_eq!(color.values, ["RED"]);
    assert_eq!(code[1], Type::plain("Shade", "int32"));
}

#[test]
fn import_rewrite_keeps_original_path() {
    let p = pipeline([
        Transform::exclude_import(|imp| imp.path == "unsafe"),
        Transform::modify_import(|mut imp| {
            imp.path = imp.path.replace("example.com", "mirror.example.com");
            imp
        }),
    ]);

    assert_eq!(p.import(Import::new(None, "unsafe")), None);
    let imp = p
        .import(Import::new(None, "example.com/mock"))
        .expect("kept");
    assert_eq!(imp.path, "mirror.example.com/mock");
    assert_eq!(imp.original_path(), "example.com/mock");
}
