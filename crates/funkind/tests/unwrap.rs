use funkind::{ArgumentError, FuncArena, FuncDecl, FuncKind, Trap, Value};

/// Tests for wrapper resolution (`bound_target`, `origin`) and interception
/// inspection (`proxy_config`). Traversal must follow internal target fields
/// only, so trap handlers can never influence the result.

#[test]
fn bound_target_of_unwrapped_is_none() {
    let mut arena = FuncArena::new();
    let f = Value::Ref(arena.declare(FuncDecl::new(FuncKind::Ordinary, "base")));
    assert_eq!(arena.bound_target(&f).unwrap(), None);
}

#[test]
fn origin_of_unwrapped_is_itself() {
    let mut arena = FuncArena::new();
    let id = arena.declare(FuncDecl::new(FuncKind::Ordinary, "base"));
    assert_eq!(arena.origin(&Value::Ref(id)).unwrap(), id);
}

#[test]
fn bound_target_peels_exactly_one_layer() {
    let mut arena = FuncArena::new();
    let c0 = arena.declare(FuncDecl::new(FuncKind::Ordinary, "base"));
    let c1 = arena.bind(&Value::Ref(c0), Value::Null, []).unwrap();
    let c2 = arena.bind(&Value::Ref(c1), Value::Null, []).unwrap();

    assert_eq!(arena.bound_target(&Value::Ref(c2)).unwrap(), Some(c1));
    assert_eq!(arena.bound_target(&Value::Ref(c1)).unwrap(), Some(c0));
    // the two single-step results are distinct entities
    assert_ne!(c1, c0);
}

#[test]
fn origin_walks_the_full_binding_chain() {
    let mut arena = FuncArena::new();
    let c0 = arena.declare(FuncDecl::new(FuncKind::Ordinary, "base"));
    let c1 = arena.bind(&Value::Ref(c0), Value::Null, [Value::Int(1)]).unwrap();
    let c2 = arena.bind(&Value::Ref(c1), Value::Null, [Value::Int(2)]).unwrap();

    assert_eq!(arena.origin(&Value::Ref(c1)).unwrap(), c0);
    assert_eq!(arena.origin(&Value::Ref(c2)).unwrap(), c0);
}

#[test]
fn origin_unwraps_bound_over_proxy() {
    let mut arena = FuncArena::new();
    let base = arena.declare(FuncDecl::new(FuncKind::Ordinary, "base"));
    let handler = arena.object();
    let proxy = arena.intercept(&Value::Ref(base), &Value::Ref(handler)).unwrap();
    let bound = arena.bind(&Value::Ref(proxy), Value::Null, []).unwrap();

    assert_eq!(arena.origin(&Value::Ref(proxy)).unwrap(), base);
    assert_eq!(arena.origin(&Value::Ref(bound)).unwrap(), base);
}

#[test]
fn origin_of_plain_object_is_itself() {
    let mut arena = FuncArena::new();
    let obj = arena.object();
    assert_eq!(arena.origin(&Value::Ref(obj)).unwrap(), obj);
}

#[test]
fn origin_unwraps_proxy_over_plain_object() {
    let mut arena = FuncArena::new();
    let target = arena.object();
    let handler = arena.handler([Trap::Get]);
    let proxy = arena.intercept(&Value::Ref(target), &Value::Ref(handler)).unwrap();
    assert_eq!(arena.origin(&Value::Ref(proxy)).unwrap(), target);
}

#[test]
fn origin_rejects_primitives() {
    let arena = FuncArena::new();
    assert_eq!(
        arena.origin(&Value::Bool(true)),
        Err(ArgumentError::NotAnEntity {
            type_name: "boolean".to_string()
        })
    );
}

#[test]
fn bound_target_requires_a_callable() {
    let mut arena = FuncArena::new();
    let obj = arena.object();
    assert!(arena.bound_target(&Value::Ref(obj)).is_err());
    assert!(arena.bound_target(&Value::Float(1.5)).is_err());
}

#[test]
fn proxy_config_returns_target_and_handler_for_proxy_function() {
    let mut arena = FuncArena::new();
    let base = arena.declare(FuncDecl::new(FuncKind::Ordinary, "base"));
    let handler = arena.handler([Trap::Apply]);
    let proxy = arena.intercept(&Value::Ref(base), &Value::Ref(handler)).unwrap();

    let config = arena.proxy_config(&Value::Ref(proxy)).unwrap().unwrap();
    assert_eq!(config.target, base);
    assert_eq!(config.handler, handler);
    assert!(arena.handler_defines(config.handler, Trap::Apply));
    assert!(!arena.handler_defines(config.handler, Trap::Construct));
}

#[test]
fn proxy_config_returns_target_and_handler_for_proxy_object() {
    let mut arena = FuncArena::new();
    let target = arena.object();
    let handler = arena.handler([Trap::Get, Trap::Set]);
    let proxy = arena.intercept(&Value::Ref(target), &Value::Ref(handler)).unwrap();

    let config = arena.proxy_config(&Value::Ref(proxy)).unwrap().unwrap();
    assert_eq!(config.target, target);
    assert_eq!(config.handler, handler);
}

#[test]
fn proxy_config_is_none_for_non_proxy() {
    let mut arena = FuncArena::new();
    let f = arena.declare(FuncDecl::new(FuncKind::Ordinary, "f"));
    let obj = arena.object();
    assert_eq!(arena.proxy_config(&Value::Ref(f)).unwrap(), None);
    assert_eq!(arena.proxy_config(&Value::Ref(obj)).unwrap(), None);
}

#[test]
fn proxy_config_checks_the_top_level_only() {
    let mut arena = FuncArena::new();
    let base = arena.declare(FuncDecl::new(FuncKind::Ordinary, "base"));
    let handler = arena.object();
    let proxy = arena.intercept(&Value::Ref(base), &Value::Ref(handler)).unwrap();
    let bound = arena.bind(&Value::Ref(proxy), Value::Null, []).unwrap();
    assert_eq!(arena.proxy_config(&Value::Ref(bound)).unwrap(), None);
}

#[test]
fn intercept_rejects_non_object_handlers() {
    let mut arena = FuncArena::new();
    let base = arena.declare(FuncDecl::new(FuncKind::Ordinary, "base"));
    let not_a_handler = arena.declare(FuncDecl::new(FuncKind::Ordinary, "h"));
    let err = arena
        .intercept(&Value::Ref(base), &Value::Ref(not_a_handler))
        .unwrap_err();
    assert_eq!(err.to_string(), "handler must be a plain object, got function");
}

#[test]
fn bind_rejects_non_callable_targets() {
    let mut arena = FuncArena::new();
    let obj = arena.object();
    assert_eq!(
        arena.bind(&Value::Ref(obj), Value::Null, []),
        Err(ArgumentError::NotCallable {
            type_name: "object".to_string()
        })
    );
}
