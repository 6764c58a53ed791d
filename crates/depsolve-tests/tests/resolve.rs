use indexmap::indexmap;

use depsolve_tests::{dep, resolve, Graph};

fn names(map: &indexmap::IndexMap<String, i64>) -> Vec<(&str, i64)> {
    map.iter().map(|(k, v)| (k.as_str(), *v)).collect()
}

#[test]
fn resolving_empty_dependency_list() {
    let reg = Graph::new().leaf("root", 0);
    let res = resolve(&reg, "root", 0, true).unwrap();
    assert_eq!(res, indexmap! {});
}

#[test]
fn resolving_one_dep() {
    let reg = Graph::new()
        .pkg("root", 0, vec![dep("foo", &[1])])
        .leaf("foo", 1);
    let res = resolve(&reg, "root", 0, true).unwrap();
    assert_eq!(res, indexmap! { "foo".to_string() => 1 });
}

#[test]
fn resolving_transitive_deps() {
    let reg = Graph::new()
        .pkg("root", 0, vec![dep("bar", &[1])])
        .pkg("bar", 1, vec![dep("foo", &[1])])
        .leaf("foo", 1);
    let res = resolve(&reg, "root", 0, true).unwrap();
    assert_eq!(
        res,
        indexmap! { "bar".to_string() => 1, "foo".to_string() => 1 }
    );
}

/// The worked example from the resolver's own spec: backtracking across
/// a dependency (`d`) shared between the root and a package (`b`) whose
/// own choice of candidate changes what it requires of `d`.
#[test]
fn backtracking_across_a_shared_dependency() {
    let reg = Graph::new()
        .pkg(
            "a",
            0,
            vec![dep("b", &[2, 1]), dep("d", &[1]), dep("e", &[2, 1])],
        )
        .pkg("b", 1, vec![dep("c", &[2, 1]), dep("d", &[1])])
        .pkg("b", 2, vec![dep("c", &[3, 2]), dep("d", &[2, 1])])
        .leaf("c", 1)
        .leaf("c", 2)
        .leaf("c", 3)
        .leaf("d", 1)
        .leaf("d", 2)
        .leaf("e", 1)
        .leaf("e", 2);

    let res = resolve(&reg, "a", 0, true).unwrap();

    assert_eq!(
        res,
        indexmap! {
            "b".to_string() => 2,
            "c".to_string() => 3,
            "d".to_string() => 1,
            "e".to_string() => 2,
        }
    );
}

#[test]
fn cycles_terminate() {
    let reg = Graph::new()
        .pkg("a", 0, vec![dep("b", &[1])])
        .pkg("b", 1, vec![dep("b", &[1])]);

    let res = resolve(&reg, "a", 0, true).unwrap();
    assert_eq!(res, indexmap! { "b".to_string() => 1 });
}

#[test]
fn self_loop_at_the_same_configuration_terminates() {
    // `a` depends on itself, so it ends up in the candidate table (and
    // the result) the same as any other reachable package would.
    let reg = Graph::new().pkg("a", 0, vec![dep("a", &[0])]);
    let res = resolve(&reg, "a", 0, true).unwrap();
    assert_eq!(res, indexmap! { "a".to_string() => 0 });
}

#[test]
fn unsatisfiable_root_edge_throws_with_first_diagnostic() {
    let reg = Graph::new()
        .pkg("a", 0, vec![dep("b", &[3])])
        .leaf("b", 1)
        .leaf("b", 2);

    let err = resolve(&reg, "a", 0, true).unwrap_err();
    let message = err.to_string();
    assert!(message.contains('b'), "message was: {message}");
    assert!(message.contains('3'), "message was: {message}");
}

#[test]
fn unsatisfiable_root_edge_returns_empty_when_not_throwing() {
    let reg = Graph::new()
        .pkg("a", 0, vec![dep("b", &[3])])
        .leaf("b", 1)
        .leaf("b", 2);

    let res = resolve(&reg, "a", 0, false).unwrap();
    assert!(res.is_empty());
}

#[test]
fn empty_candidate_list_referenced_by_root_always_fails() {
    let reg = Graph::new().pkg("a", 0, vec![dep("z", &[1])]);

    // Fatal even when failure is non-fatal elsewhere.
    let err = resolve(&reg, "a", 0, false).unwrap_err();
    let message = err.to_string();
    assert!(message.contains('a'), "message was: {message}");
    assert!(message.contains('z'), "message was: {message}");

    assert!(resolve(&reg, "a", 0, true).is_err());
}

#[test]
fn subpackage_sharing() {
    let reg = Graph::new()
        .pkg("a", 0, vec![dep("x:sub", &[1])])
        .leaf("x", 1)
        .leaf("x", 2);

    let res = resolve(&reg, "a", 0, true).unwrap();
    assert_eq!(res, indexmap! { "x".to_string() => 1 });
}

#[test]
fn subpackage_edge_constrains_the_shared_base() {
    // Two edges into the same base, one routed through a subpackage
    // name, must both be satisfied by the single selection for `x`.
    let reg = Graph::new()
        .pkg(
            "a",
            0,
            vec![dep("x:sub", &[1, 2]), dep("x", &[2])],
        )
        .leaf("x", 1)
        .leaf("x", 2);

    let res = resolve(&reg, "a", 0, true).unwrap();
    assert_eq!(res, indexmap! { "x".to_string() => 2 });
}

#[test]
fn specific_configuration_priority() {
    let reg = Graph::new()
        .pkg("a", 0, vec![dep("p", &[99, 1, 2])])
        .specific("p", &[99])
        .leaf("p", 1)
        .leaf("p", 2);

    let res = resolve(&reg, "a", 0, true).unwrap();
    assert_eq!(res, indexmap! { "p".to_string() => 99 });
    assert_eq!(names(&res), vec![("p", 99)]);
}

#[test]
fn specific_configurations_are_tried_before_all_configs() {
    // If the override doesn't satisfy the edge, the regular candidates
    // are still tried in order behind it.
    let reg = Graph::new()
        .pkg("a", 0, vec![dep("p", &[2])])
        .specific("p", &[99])
        .leaf("p", 1)
        .leaf("p", 2);

    let res = resolve(&reg, "a", 0, true).unwrap();
    assert_eq!(res, indexmap! { "p".to_string() => 2 });
}

#[test]
fn deterministic_across_runs() {
    let reg = Graph::new()
        .pkg(
            "a",
            0,
            vec![dep("b", &[2, 1]), dep("d", &[1]), dep("e", &[2, 1])],
        )
        .pkg("b", 1, vec![dep("c", &[2, 1]), dep("d", &[1])])
        .pkg("b", 2, vec![dep("c", &[3, 2]), dep("d", &[2, 1])])
        .leaf("c", 1)
        .leaf("c", 2)
        .leaf("c", 3)
        .leaf("d", 1)
        .leaf("d", 2)
        .leaf("e", 1)
        .leaf("e", 2);

    let first = resolve(&reg, "a", 0, true).unwrap();
    let second = resolve(&reg, "a", 0, true).unwrap();
    assert_eq!(first, second);
}
