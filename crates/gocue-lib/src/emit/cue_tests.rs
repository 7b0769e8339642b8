use indoc::indoc;

use crate::ast::{Expr, Spec, TypeSpec};
use crate::ir::Docs;
use crate::test_utils::{alias, decl, field, group, import, module, point, proto_enum_table, structure, untab};
use crate::transform::{EnumSynthesizer, ProtoEnumConvention};
use crate::FileBuilder;

#[test]
fn point_scenario() {
    let file = FileBuilder::new()
        .build(&module([decl("Point", point())]))
        .expect("valid module");

    assert_eq!(
        file.cue(),
        "package demo\n\n#Point: {\n\tx: int\n\ty?: int\n}\n"
    );
}

#[test]
fn byte_slice_is_bytes() {
    let file = FileBuilder::new()
        .build(&module([
            decl("Blob", Expr::slice(Expr::ident("byte"))),
            decl("Names", Expr::slice(Expr::ident("string"))),
            decl("Points", Expr::array(2, Expr::pointer(Expr::ident("Point")))),
        ]))
        .expect("valid module");

    insta::assert_snapshot!(file.cue(), @r"
    package demo

    #Blob: bytes

    #Names: [...string]

    #Points: [...#Point]
    ");
}

#[test]
fn enum_as_union_and_constants() {
    let file = FileBuilder::new()
        .transform(EnumSynthesizer::new(ProtoEnumConvention))
        .build(&module([
            proto_enum_table("Color", &["RED", "GREEN"]),
            decl("Color", Expr::ident("int32")),
        ]))
        .expect("valid module");

    assert_eq!(
        file.cue(),
        indoc! {r#"
            package demo

            #Color: "RED" | "GREEN"

            Color_RED: "RED"
            Color_GREEN: "GREEN"
        "#}
    );
}

#[test]
fn json_tag_drives_field_labels() {
    let file = FileBuilder::new()
        .build(&module([decl(
            "S",
            structure([
                field("A", Expr::ident("int"), r#"json:"a""#),
                field("B", Expr::ident("int"), ""),
                field("C", Expr::ident("int"), r#"json:"-""#),
                field("D", Expr::ident("string"), r#"json:",omitempty""#),
                field("E", Expr::ident("int"), r#"json:"e-x" yaml:"e""#),
                field("F", Expr::ident("int"), r#"yaml:"f""#),
            ]),
        )]))
        .expect("valid module");

    insta::assert_snapshot!(untab(&file.cue()), @r#"
    package demo

    #S: {
        a: int
        D?: string
        "e-x": int
    }
    "#);
}

#[test]
fn imports_keep_insertion_order() {
    let file = FileBuilder::new()
        .build(&module([
            group([import("time"), alias("m", "example.com/mock")]),
            decl(
                "Event",
                structure([
                    field("When", Expr::pointer(Expr::selector("time", "Time")), r#"json:"when""#),
                    field("Thing", Expr::selector("m", "Thing"), r#"json:"thing""#),
                ]),
            ),
        ]))
        .expect("valid module");

    insta::assert_snapshot!(untab(&file.cue()), @r#"
    package demo

    import (
        "time"
        m "example.com/mock"
    )

    #Event: {
        when: time.#Time
        thing: m.#Thing
    }
    "#);
}

#[test]
fn maps_and_nested_structs() {
    let file = FileBuilder::new()
        .build(&module([
            decl("Index", Expr::map(Expr::ident("string"), Expr::slice(Expr::ident("int")))),
            decl(
                "Outer",
                structure([
                    field("Meta", Expr::map(Expr::ident("string"), Expr::any()), r#"json:"meta""#),
                    field("Inner", point(), r#"json:"inner,omitempty""#),
                ]),
            ),
        ]))
        .expect("valid module");

    insta::assert_snapshot!(untab(&file.cue()), @r"
    package demo

    #Index: [string]: [...int]

    #Outer: {
        meta: [string]: _
        inner?: {
            x: int
            y?: int
        }
    }
    ");
}

#[test]
fn block_comments_become_line_comments() {
    let spec = TypeSpec::new("Count", Expr::ident("int"))
        .with_docs(Docs::new(["/* Count of things.\n   Never negative. */"]));
    let file = FileBuilder::new()
        .cue_package_name("schema")
        .build(&module([group([Spec::Type(spec)])]))
        .expect("valid module");

    assert_eq!(
        file.cue(),
        "package schema\n\n// Count of things.\n// Never negative.\n#Count: int\n"
    );
}
