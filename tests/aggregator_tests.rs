use perf_flamegraph::aggregator::{calculate_tree_stats, Node, StackAggregator};
use perf_flamegraph::parser::{CallchainEntry, SampleEvent};
use perf_flamegraph::utils::config::KERNEL_DSO;
use pretty_assertions::assert_eq;

fn chain(frames: &[(Option<&str>, Option<&str>)]) -> Vec<CallchainEntry> {
    frames
        .iter()
        .map(|(name, dso)| CallchainEntry::new(*name, *dso))
        .collect()
}

#[test]
fn test_same_comm_empty_callchain_accumulates() {
    let mut agg = StackAggregator::new();
    for _ in 0..5 {
        agg.process_event(&SampleEvent::new("worker").with_callchain(vec![]));
    }

    let root = agg.root();
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].name, "worker");
    assert_eq!(root.children[0].count, 5);
    assert!(root.children[0].children.is_empty());
}

#[test]
fn test_identical_paths_merge() {
    let mut agg = StackAggregator::new();
    // Non-kernel modules all collapse to the same empty tag
    agg.process_event(&SampleEvent::new("app").with_callchain(chain(&[
        (Some("work"), Some("/usr/lib/liba.so")),
        (Some("main"), Some("/usr/bin/app")),
    ])));
    agg.process_event(&SampleEvent::new("app").with_callchain(chain(&[
        (Some("work"), Some("/usr/lib/libb.so")),
        (Some("main"), None),
    ])));

    let main = agg.root().child("app", "").unwrap().child("main", "").unwrap();
    assert_eq!(main.children.len(), 1);
    assert_eq!(main.child("work", "").unwrap().count, 2);
    assert_eq!(calculate_tree_stats(agg.root()).node_count, 3);
}

#[test]
fn test_kernel_origin_splits_siblings() {
    let mut agg = StackAggregator::new();
    agg.process_event(&SampleEvent::new("app").with_callchain(chain(&[
        (Some("memcpy"), Some(KERNEL_DSO)),
        (Some("main"), None),
    ])));
    agg.process_event(&SampleEvent::new("app").with_callchain(chain(&[
        (Some("memcpy"), Some("/usr/lib/libc.so.6")),
        (Some("main"), None),
    ])));

    let main = agg.root().child("app", "").unwrap().child("main", "").unwrap();
    assert_eq!(main.children.len(), 2);
    assert_eq!(main.children[0].origin_tag, "kernel");
    assert_eq!(main.children[0].count, 1);
    assert_eq!(main.children[1].origin_tag, "");
    assert_eq!(main.children[1].count, 1);
}

#[test]
fn test_callchain_is_inserted_outermost_first() {
    let mut agg = StackAggregator::new();
    agg.process_event(
        &SampleEvent::new("A").with_callchain(chain(&[(Some("leaf"), None), (Some("mid"), None)])),
    );

    let mut leaf = Node::new("leaf");
    leaf.count = 1;
    let mut mid = Node::new("mid");
    mid.children.push(leaf);
    let mut a = Node::new("A");
    a.children.push(mid);
    let mut expected = Node::new("root");
    expected.children.push(a);

    assert_eq!(agg.root(), &expected);
}

#[test]
fn test_unresolved_frame_is_unknown() {
    let mut agg = StackAggregator::new();
    agg.process_event(
        &SampleEvent::new("A").with_callchain(chain(&[(None, Some("/usr/lib/libx.so")), (Some("main"), None)])),
    );
    agg.process_event(
        &SampleEvent::new("A").with_callchain(chain(&[(None, None), (Some("main"), None)])),
    );

    let main = agg.root().child("A", "").unwrap().child("main", "").unwrap();
    assert_eq!(main.children.len(), 1);
    assert_eq!(main.child("[unknown]", "").unwrap().count, 2);
}

#[test]
fn test_counts_only_at_final_node() {
    let mut agg = StackAggregator::new();
    agg.process_event(&SampleEvent::new("A").with_callchain(chain(&[(Some("f"), None)])));
    agg.process_event(&SampleEvent::new("A").with_callchain(vec![]));
    agg.process_event(&SampleEvent::new("A").with_symbol(Some("g"), None));

    let a = agg.root().child("A", "").unwrap();
    assert_eq!(a.count, 1);
    assert_eq!(a.child("f", "").unwrap().count, 1);
    assert_eq!(a.child("g", "").unwrap().count, 1);
    assert_eq!(agg.root().count, 0);
    assert_eq!(agg.root().total_count(), 3);
}
