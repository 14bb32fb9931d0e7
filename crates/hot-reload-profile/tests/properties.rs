//! Behavioral properties of both traversal variants.
//!
//! Graph shapes are drawn next to each test; capabilities are shown in
//! brackets.

mod common;

use common::{graph, init_tracing, node};
use hot_reload_profile::{
    Classification, ClassifierConfig, Error, ProfileClassifier, Variant, classify,
};
use project_graph::ProjectId;
use rstest::rstest;

fn hosted(host: &str, wasm: &str) -> Classification {
    Classification::BlazorHosted {
        host: ProjectId::new(host),
        wasm: ProjectId::new(wasm),
    }
}

// ============================================================================
// Shared nodes
// ============================================================================

/// ```text
///     A
///    / \
///   B   C
///    \ /
///     D
/// ```
#[test]
fn diamond_is_processed_once_per_path_by_naive_and_once_by_memoized() {
    init_tracing();
    let g = graph(
        &["A"],
        vec![
            node("A", &[], &["B", "C"]),
            node("B", &[], &["D"]),
            node("C", &[], &["D"]),
            node("D", &[], &[]),
        ],
    );

    let naive = classify(&g, Variant::Naive).unwrap();
    let memo = classify(&g, Variant::Memoized).unwrap();

    assert_eq!(naive.classification, Classification::Unknown);
    assert_eq!(memo.classification, Classification::Unknown);
    // A, B, C, D, D
    assert_eq!(naive.diagnostics.nodes_processed, 5);
    // A, B, C, D
    assert_eq!(memo.diagnostics.nodes_processed, 4);
    assert_eq!(naive.diagnostics.peak_frontier_size, 2);
    assert_eq!(memo.diagnostics.peak_frontier_size, 2);
}

#[test]
fn tree_without_shared_nodes_costs_the_same() {
    init_tracing();
    let g = graph(
        &["A"],
        vec![
            node("A", &[], &["B", "C"]),
            node("B", &[], &["D", "E"]),
            node("C", &[], &[]),
            node("D", &[], &[]),
            node("E", &[], &[]),
        ],
    );

    let naive = classify(&g, Variant::Naive).unwrap();
    let memo = classify(&g, Variant::Memoized).unwrap();

    assert_eq!(naive, memo);
    assert_eq!(memo.diagnostics.nodes_processed, 5);
}

// ============================================================================
// Terminal classifications
// ============================================================================

#[rstest]
fn standalone_webassembly(#[values(Variant::Naive, Variant::Memoized)] variant: Variant) {
    init_tracing();
    let g = graph(&["A"], vec![node("A", &["WebAssembly"], &[])]);

    let report = classify(&g, variant).unwrap();

    assert_eq!(report.classification, Classification::BlazorWebAssembly);
    assert_eq!(report.diagnostics.nodes_processed, 1);
}

/// ```text
/// A [AspNetCore] → B [WebAssembly]
/// ```
#[rstest]
fn hosted_detection(#[values(Variant::Naive, Variant::Memoized)] variant: Variant) {
    init_tracing();
    let g = graph(
        &["A"],
        vec![
            node("A", &["AspNetCore"], &["B"]),
            node("B", &["WebAssembly"], &[]),
        ],
    );

    let report = classify(&g, variant).unwrap();

    assert_eq!(report.classification, hosted("A", "B"));
    assert_eq!(report.diagnostics.nodes_processed, 2);
}

#[rstest]
fn self_hosted_is_not_hosted(
    #[values(Variant::Naive, Variant::Memoized)] variant: Variant,
    #[values(["AspNetCore", "WebAssembly"], ["WebAssembly", "AspNetCore"])] tags: [&str; 2],
) {
    init_tracing();
    let g = graph(&["A"], vec![node("A", &tags, &[])]);

    let report = classify(&g, variant).unwrap();

    assert_eq!(report.classification, Classification::BlazorWebAssembly);
}

#[rstest]
fn host_without_webassembly_is_unknown(
    #[values(Variant::Naive, Variant::Memoized)] variant: Variant,
) {
    init_tracing();
    let g = graph(
        &["Server"],
        vec![
            node("Server", &["AspNetCore"], &["Lib"]),
            node("Lib", &[], &[]),
        ],
    );

    let report = classify(&g, variant).unwrap();

    assert_eq!(report.classification, Classification::Unknown);
    assert_eq!(report.diagnostics.nodes_processed, 2);
}

/// Only exact tag matches count.
#[rstest]
fn unrelated_tags_are_ignored(#[values(Variant::Naive, Variant::Memoized)] variant: Variant) {
    init_tracing();
    let g = graph(
        &["A"],
        vec![
            node("A", &["aspnetcore", "CSharp"], &["B"]),
            node("B", &["webassembly", "SupportsHotReload"], &[]),
        ],
    );

    let report = classify(&g, variant).unwrap();

    assert_eq!(report.classification, Classification::Unknown);
}

/// A WebAssembly project reached before any host is standalone even if a
/// host would be found later.
///
/// ```text
///        Root
///       /    \
///  Client     Server [AspNetCore]
///  [WebAssembly]
/// ```
#[rstest]
fn webassembly_seen_before_host_is_standalone(
    #[values(Variant::Naive, Variant::Memoized)] variant: Variant,
) {
    init_tracing();
    let g = graph(
        &["Root"],
        vec![
            node("Root", &[], &["Client", "Server"]),
            node("Client", &["WebAssembly"], &[]),
            node("Server", &["AspNetCore"], &[]),
        ],
    );

    let report = classify(&g, variant).unwrap();

    assert_eq!(report.classification, Classification::BlazorWebAssembly);
}

// ============================================================================
// Candidate host tie-break
// ============================================================================

/// When two hosts are processed before the WebAssembly project, the later
/// one is reported. This may be surprising; it is the defined behavior.
///
/// ```text
///          Root
///         /    \
///      Api      Gateway
///  [AspNetCore] [AspNetCore]
///                  |
///                Client [WebAssembly]
/// ```
#[rstest]
fn last_processed_host_wins(#[values(Variant::Naive, Variant::Memoized)] variant: Variant) {
    init_tracing();
    let g = graph(
        &["Root"],
        vec![
            node("Root", &[], &["Api", "Gateway"]),
            node("Api", &["AspNetCore"], &[]),
            node("Gateway", &["AspNetCore"], &["Client"]),
            node("Client", &["WebAssembly"], &[]),
        ],
    );

    let report = classify(&g, variant).unwrap();

    assert_eq!(report.classification, hosted("Gateway", "Client"));
}

/// Naive re-processes a host reached by a second path, which makes it the
/// candidate again. Both variants stop at the same WebAssembly project but
/// name different hosts.
///
/// ```text
///             A
///           /   \
///          B     C
///          |    / \
///         H1  H2   D
///          ^       |\
///          +-------+ W [WebAssembly]
/// ```
/// H1 and H2 are `[AspNetCore]`; D references H1 and W.
#[test]
fn naive_revisit_can_change_the_reported_host() {
    init_tracing();
    let g = graph(
        &["A"],
        vec![
            node("A", &[], &["B", "C"]),
            node("B", &[], &["H1"]),
            node("C", &[], &["H2", "D"]),
            node("H1", &["AspNetCore"], &[]),
            node("H2", &["AspNetCore"], &[]),
            node("D", &[], &["H1", "W"]),
            node("W", &["WebAssembly"], &[]),
        ],
    );

    let naive = classify(&g, Variant::Naive).unwrap();
    let memo = classify(&g, Variant::Memoized).unwrap();

    assert_eq!(memo.classification, hosted("H2", "W"));
    assert_eq!(naive.classification, hosted("H1", "W"));
    assert_eq!(naive.classification.kind(), memo.classification.kind());
    assert_eq!(naive.classification.wasm(), memo.classification.wasm());
}

// ============================================================================
// Cycles and budgets
// ============================================================================

/// ```text
/// A ⇄ B
/// ```
#[test]
fn memoized_terminates_on_a_cycle() {
    init_tracing();
    let g = graph(&["A"], vec![node("A", &[], &["B"]), node("B", &[], &["A"])]);

    let report = classify(&g, Variant::Memoized).unwrap();

    assert_eq!(report.classification, Classification::Unknown);
    assert_eq!(report.diagnostics.nodes_processed, 2);
}

#[test]
fn naive_runs_past_any_ceiling_on_a_cycle() {
    init_tracing();
    let g = graph(&["A"], vec![node("A", &[], &["B"]), node("B", &[], &["A"])]);
    let classifier = ProfileClassifier::new(
        ClassifierConfig::new(Variant::Naive).with_max_nodes_processed(10_000),
    )
    .unwrap();

    match classifier.run(&g) {
        Err(Error::StepBudgetExceeded { limit, diagnostics }) => {
            assert_eq!(limit, 10_000);
            assert_eq!(diagnostics.nodes_processed, 10_000);
            assert_eq!(diagnostics.peak_frontier_size, 1);
        }
        other => panic!("expected StepBudgetExceeded, got {other:?}"),
    }
}

#[test]
fn self_reference_terminates_when_memoized() {
    init_tracing();
    let g = graph(&["A"], vec![node("A", &[], &["A"])]);

    let report = classify(&g, Variant::Memoized).unwrap();

    assert_eq!(report.diagnostics.nodes_processed, 1);
}

#[test]
fn ceiling_does_not_affect_a_run_that_fits() {
    init_tracing();
    let g = graph(
        &["A"],
        vec![
            node("A", &["AspNetCore"], &["B"]),
            node("B", &["WebAssembly"], &[]),
        ],
    );
    let classifier = ProfileClassifier::new(
        ClassifierConfig::new(Variant::Naive).with_max_nodes_processed(2),
    )
    .unwrap();

    let report = classifier.run(&g).unwrap();

    assert_eq!(report.classification, hosted("A", "B"));
}

// ============================================================================
// Malformed graphs
// ============================================================================

#[rstest]
fn unknown_reference_is_an_error(#[values(Variant::Naive, Variant::Memoized)] variant: Variant) {
    init_tracing();
    let g = graph(&["A"], vec![node("A", &[], &["X"])]);

    let err = classify(&g, variant).unwrap_err();

    assert!(err.is_unknown_node(), "got: {err}");
    match err {
        Error::Graph(project_graph::Error::UnknownNode { id, referrer }) => {
            assert_eq!(id.as_str(), "X");
            assert_eq!(referrer, Some(ProjectId::new("A")));
        }
        other => panic!("expected UnknownNode, got {other:?}"),
    }
}

#[rstest]
fn unknown_entry_point_is_an_error(#[values(Variant::Naive, Variant::Memoized)] variant: Variant) {
    init_tracing();
    let g = graph(&["Ghost"], vec![]);

    let err = classify(&g, variant).unwrap_err();

    assert!(err.is_unknown_node(), "got: {err}");
}

#[test]
fn graph_shared_across_runs_is_unchanged() {
    init_tracing();
    let g = graph(
        &["A"],
        vec![
            node("A", &["AspNetCore"], &["B", "C"]),
            node("B", &[], &["C"]),
            node("C", &["WebAssembly"], &[]),
        ],
    );
    let before = g.to_snapshot();

    let first = classify(&g, Variant::Memoized).unwrap();
    let second = classify(&g, Variant::Memoized).unwrap();
    let naive = classify(&g, Variant::Naive).unwrap();

    assert_eq!(first, second);
    assert_eq!(naive.classification, first.classification);
    assert_eq!(g.to_snapshot(), before);
}
