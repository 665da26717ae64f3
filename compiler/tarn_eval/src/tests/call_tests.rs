//! The call protocol: clone-at-call environments, cell sharing, arity and
//! evaluation order.

#![allow(clippy::unwrap_used, reason = "tests unwrap known-good runs")]

use pretty_assertions::assert_eq;

use super::tree::{begin, call, call_expr, def, function, num, program, run, set, text, var};
use crate::{EvalErrorKind, Value};

#[test]
fn assignment_through_shared_cell_is_visible_to_caller() {
    let root = program([
        def("x"),
        set("x", num(1.0)),
        function("bump", "", set("x", num(2.0))),
        call("bump", []),
        var("x"),
    ]);
    assert_eq!(run(&root).1, Ok(Value::Number(2.0)));
}

#[test]
fn shadowing_define_in_callee_is_not_visible_to_caller() {
    let root = program([
        def("x"),
        set("x", num(1.0)),
        function("shadow", "", begin([def("x"), set("x", num(99.0))])),
        call("shadow", []),
        var("x"),
    ]);
    assert_eq!(run(&root).1, Ok(Value::Number(1.0)));
}

#[test]
fn parameter_shadows_caller_binding_for_the_call_only() {
    let root = program([
        def("x"),
        set("x", num(1.0)),
        function("echo", "x", var("x")),
        def("seen"),
        set("seen", call("echo", [num(5.0)])),
        call("plus", [var("seen"), var("x")]),
    ]);
    assert_eq!(run(&root).1, Ok(Value::Number(6.0)));
}

#[test]
fn parameters_are_plain_bindings() {
    let root = program([
        function("reset", "a", set("a", num(0.0))),
        call("reset", [num(3.0)]),
    ]);
    let err = run(&root).1.unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::InvalidAssignment {
            name: "a".to_string()
        }
    );
}

#[test]
fn callee_definitions_do_not_leak() {
    let root = program([
        function("scratch", "", begin([def("tmp"), set("tmp", num(1.0))])),
        call("scratch", []),
        var("tmp"),
    ]);
    assert_eq!(
        run(&root).1.unwrap_err().kind,
        EvalErrorKind::UnboundVariable {
            name: "tmp".to_string()
        }
    );
}

#[test]
fn arity_is_enforced() {
    let add2 = || function("add2", "a,b", call("plus", [var("a"), var("b")]));
    let mismatch = |got| EvalErrorKind::ArityMismatch {
        name: "add2".to_string(),
        expected: 2,
        got,
    };

    let one = program([add2(), call("add2", [num(1.0)])]);
    assert_eq!(run(&one).1.unwrap_err().kind, mismatch(1));

    let three = program([add2(), call("add2", [num(1.0), num(2.0), num(3.0)])]);
    assert_eq!(run(&three).1.unwrap_err().kind, mismatch(3));

    let two = program([add2(), call("add2", [num(1.0), num(2.0)])]);
    assert_eq!(run(&two).1, Ok(Value::Number(3.0)));
}

#[test]
fn calling_a_non_function_fails() {
    let number = program([call_expr(num(5.0), [])]);
    assert_eq!(
        run(&number).1.unwrap_err().kind,
        EvalErrorKind::NotCallable {
            type_name: "number"
        }
    );

    let cell = program([def("f"), call_expr(var("f"), [num(1.0)])]);
    assert_eq!(
        run(&cell).1.unwrap_err().kind,
        EvalErrorKind::NotCallable { type_name: "none" }
    );
}

#[test]
fn callee_then_arguments_left_to_right() {
    let logged = |msg: &str, value| begin([call("print", [text(msg)]), value]);
    let root = program([call_expr(
        logged("callee", var("plus")),
        [logged("first", num(1.0)), logged("second", num(2.0))],
    )]);
    let (interpreter, result) = run(&root);
    assert_eq!(result, Ok(Value::Number(3.0)));
    assert_eq!(interpreter.get_print_output(), "callee\nfirst\nsecond\n");
}

#[test]
fn arguments_are_evaluated_in_the_caller_environment() {
    let root = program([
        def("x"),
        set("x", num(10.0)),
        function("first", "x,y", var("x")),
        call("first", [call("plus", [var("x"), num(1.0)]), num(0.0)]),
    ]);
    assert_eq!(run(&root).1, Ok(Value::Number(11.0)));
}

#[test]
fn nested_calls_share_the_outer_cell() {
    // inner writes through a cell it inherits two calls deep.
    let root = program([
        def("depth"),
        set("depth", num(0.0)),
        function("inner", "", set("depth", num(2.0))),
        function("outer", "", begin([set("depth", num(1.0)), call("inner", [])])),
        call("outer", []),
        var("depth"),
    ]);
    assert_eq!(run(&root).1, Ok(Value::Number(2.0)));
}
