use cpm_tool::TaskGraph;
use cpm_tool::calculations::forward_pass::{ForwardPass, horizon};
use cpm_tool::graph::GraphError;

fn diamond() -> TaskGraph {
    TaskGraph::build(
        vec![("T1", 5), ("T2", 3), ("T3", 2), ("T4", 4)],
        vec![
            ("T2", vec!["T1"]),
            ("T3", vec!["T1"]),
            ("T4", vec!["T2", "T3"]),
        ],
    )
    .unwrap()
}

#[test]
fn forward_pass_computes_early_times_across_dag() {
    let graph = diamond();
    let results = ForwardPass::new(&graph).execute().unwrap();

    let at = |id: &str| results[&graph.node_id(id).unwrap()];
    assert_eq!(at("T1"), (0, 5));
    assert_eq!(at("T2"), (5, 8));
    assert_eq!(at("T3"), (5, 7));
    assert_eq!(at("T4"), (8, 12));
    assert_eq!(horizon(&results), 12);
}

#[test]
fn early_start_defaults_to_zero_for_every_start_task() {
    let graph = TaskGraph::build(
        vec![("a", 6), ("b", 9)],
        Vec::<(&str, Vec<&str>)>::new(),
    )
    .unwrap();
    let results = ForwardPass::new(&graph).execute().unwrap();
    assert_eq!(results[&graph.node_id("a").unwrap()], (0, 6));
    assert_eq!(results[&graph.node_id("b").unwrap()], (0, 9));
    assert_eq!(horizon(&results), 9);
}

#[test]
fn sweep_on_an_unvalidated_cycle_fails_instead_of_looping() {
    let graph = TaskGraph::build(
        vec![("a", 1), ("b", 1)],
        vec![("a", vec!["b"]), ("b", vec!["a"])],
    )
    .unwrap();
    match ForwardPass::new(&graph).execute().unwrap_err() {
        GraphError::Cycle { task } => assert!(task == "a" || task == "b"),
        other => panic!("expected Cycle, got {other:?}"),
    }
}

#[test]
fn partial_cycle_behind_valid_tasks_is_detected() {
    let graph = TaskGraph::build(
        vec![("start", 2), ("b", 1), ("c", 1)],
        vec![("b", vec!["start", "c"]), ("c", vec!["b"])],
    )
    .unwrap();
    // "start" finalizes, then the sweep drains with b/c untouched.
    match ForwardPass::new(&graph).execute().unwrap_err() {
        GraphError::Cycle { task } => assert!(task == "b" || task == "c"),
        other => panic!("expected Cycle, got {other:?}"),
    }
}
