use super::names::{cue_list, cue_type, is_builtin};

#[test]
fn builtins_pass_through() {
    for name in ["bool", "string", "int64", "float64", "rune"] {
        assert!(is_builtin(name));
        assert_eq!(cue_type(name), name);
    }
}

#[test]
fn local_and_qualified_references() {
    assert_eq!(cue_type("Point"), "#Point");
    assert_eq!(cue_type("#Point"), "#Point");
    assert_eq!(cue_type("time.Time"), "time.#Time");
}

#[test]
fn sentinels() {
    assert_eq!(cue_type("interface{}"), "_");
    assert_eq!(cue_type("any"), "_");
    assert_eq!(cue_type("error"), "_");
    assert_eq!(cue_type("func()"), "_");
    assert_eq!(cue_type("struct{}"), "{}");
}

#[test]
fn pointers_are_stripped() {
    assert_eq!(cue_type("*Point"), "#Point");
    assert_eq!(cue_type("**int"), "int");
    assert_eq!(cue_type("*time.Time"), "time.#Time");
}

#[test]
fn lists_and_maps() {
    assert_eq!(cue_type("[]string"), "[...string]");
    assert_eq!(cue_type("[3]*Point"), "[...#Point]");
    assert_eq!(cue_type("[]byte"), "bytes");
    assert_eq!(cue_type("[][]uint8"), "[...bytes]");
    assert_eq!(cue_type("map[string][]int"), "{[string]: [...int]}");
    assert_eq!(cue_list("byte"), "bytes");
}
