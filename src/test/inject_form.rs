use super::fakes::{HighlightCall, RecordingHighlighter, node};
use crate::InjectError;
use crate::form::{FormField, InjectForm, InjectionType, NodeRef};
use crate::highlight::{HighlightSet, Highlighter};
use std::collections::BTreeSet;

fn highlighted(set: &HighlightSet) -> BTreeSet<String> {
    set.snapshot().into_iter().map(|n| n.to_string()).collect()
}

fn expected<const N: usize>(ids: [&str; N]) -> BTreeSet<String> {
    ids.into_iter().map(str::to_string).collect()
}

#[test]
fn new_form_uses_defaults_and_highlights_current_node() {
    let set = HighlightSet::default();
    let form = InjectForm::new(set.clone(), Some(&node("focused")));

    let state = form.state();
    assert_eq!(state.node1, Some(node("focused")));
    assert_eq!(state.node2, None);
    assert_eq!(state.count, 1);
    assert_eq!(state.kind, InjectionType::Icmp4);
    assert_eq!((state.id, state.interval, state.port1, state.port2), (0, 0, 0, 0));
    assert_eq!(state.payload_length, 0);
    assert_eq!(highlighted(&set), expected(["focused"]));
}

#[test]
fn new_form_without_context_highlights_nothing() {
    let form = InjectForm::new(RecordingHighlighter::default(), None);
    assert_eq!(form.state().node1, None);
    assert!(form.highlighter().take().is_empty());
}

#[test]
fn endpoint_edits_keep_highlights_equal_to_selection() {
    let set = HighlightSet::default();
    let mut form = InjectForm::new(&set, None);

    form.set_node1(Some(node("a")));
    form.set_node2(Some(node("b")));
    assert_eq!(highlighted(&set), expected(["a", "b"]));

    form.set_node1(Some(node("c")));
    assert_eq!(highlighted(&set), expected(["b", "c"]));

    form.set_node2(None);
    assert_eq!(highlighted(&set), expected(["c"]));

    // 两个端点选中同一节点
    form.set_node2(Some(node("c")));
    form.set_node1(Some(node("d")));
    assert_eq!(highlighted(&set), expected(["c", "d"]));

    form.set_node2(Some(node("d")));
    assert_eq!(highlighted(&set), expected(["d"]));

    form.set_node1(NodeRef::new(""));
    assert_eq!(highlighted(&set), expected(["d"]));
    form.set_node2(None);
    assert!(set.is_empty());
}

#[test]
fn setting_same_endpoint_twice_does_not_retrigger() {
    let mut form = InjectForm::new(RecordingHighlighter::default(), None);
    form.set_node1(Some(node("a")));
    form.set_node1(Some(node("a")));
    assert_eq!(form.highlighter().take(), vec![HighlightCall::On("a".into())]);
}

#[test]
fn reset_clears_endpoints_count_type_and_payload_only() {
    let set = HighlightSet::default();
    let mut form = InjectForm::new(&set, None);
    form.set_node1(Some(node("a")));
    form.set_node2(Some(node("b")));
    form.set_kind(InjectionType::Udp6);
    form.set_count(9);
    form.set_id(7);
    form.set_interval(250);
    form.set_port1(5000);
    form.set_port2(6000);
    form.set_payload_length(64);

    form.reset();

    let state = form.state();
    assert_eq!(state.node1, None);
    assert_eq!(state.node2, None);
    assert_eq!(state.count, 1);
    assert_eq!(state.kind, InjectionType::Icmp4);
    assert_eq!(state.payload_length, 0);
    assert_eq!(state.id, 7);
    assert_eq!(state.interval, 250);
    assert_eq!(state.port1, 5000);
    assert_eq!(state.port2, 6000);
    assert!(set.is_empty(), "reset must unhighlight both endpoints");
}

#[test]
fn teardown_unhighlights_both_endpoints() {
    let set = HighlightSet::default();
    let mut form = InjectForm::new(set.clone(), None);
    form.set_node1(Some(node("a")));
    form.set_node2(Some(node("b")));
    assert_eq!(set.len(), 2);

    form.teardown();
    assert!(set.is_empty());
}

#[test]
fn drop_releases_highlights_without_touching_foreign_entries() {
    let set = HighlightSet::default();
    set.highlight(&node("other-selector"));
    {
        let mut form = InjectForm::new(&set, Some(&node("a")));
        form.set_node2(Some(node("b")));
    }
    assert_eq!(highlighted(&set), expected(["other-selector"]));
}

#[test]
fn teardown_records_removals_only() {
    let recorder = RecordingHighlighter::default();
    let mut form = InjectForm::new(&recorder, None);
    form.set_node1(Some(node("a")));
    form.set_node2(Some(node("b")));
    recorder.take();

    form.teardown();
    assert_eq!(
        recorder.take(),
        vec![HighlightCall::Off("a".into()), HighlightCall::Off("b".into())]
    );
}

#[test]
fn visible_fields_follow_selected_type() {
    let mut form = InjectForm::new(RecordingHighlighter::default(), None);
    assert!(form.visible_fields().contains(&FormField::PayloadLength));
    assert!(!form.visible_fields().contains(&FormField::Port1));

    form.set_kind(InjectionType::Tcp6);
    assert!(form.visible_fields().contains(&FormField::Port1));
    assert!(!form.visible_fields().contains(&FormField::Id));
}

#[test]
fn request_requires_both_endpoints() {
    let mut form = InjectForm::new(RecordingHighlighter::default(), Some(&node("a")));
    assert!(matches!(form.request(), Err(InjectError::MissingEndpoint)));

    form.set_node2(Some(node("b")));
    let request = form.request().expect("valid form");
    assert_eq!(request.src, "G.V('a')");
    assert_eq!(request.dst, "G.V('b')");
}

#[derive(Debug, Clone, Copy)]
enum Endpoint {
    From,
    To,
}

/// 长度不超过 `max_len` 的全部编辑序列
fn edit_sequences(max_len: usize) -> Vec<Vec<(Endpoint, Option<&'static str>)>> {
    let edits = [Endpoint::From, Endpoint::To]
        .into_iter()
        .flat_map(|e| [None, Some("a"), Some("b")].map(|v| (e, v)))
        .collect::<Vec<_>>();
    let mut all = vec![Vec::new()];
    let mut frontier = vec![Vec::new()];
    for _ in 0..max_len {
        frontier = frontier
            .iter()
            .flat_map(|seq: &Vec<_>| {
                edits.iter().map(move |edit| {
                    let mut next = seq.clone();
                    next.push(*edit);
                    next
                })
            })
            .collect();
        all.extend(frontier.iter().cloned());
    }
    all
}

#[test]
fn every_short_edit_sequence_keeps_highlights_equal_to_selection() {
    let sequences = edit_sequences(4);
    assert_eq!(sequences.len(), 1 + 6 + 36 + 216 + 1296);

    for seq in sequences {
        let set = HighlightSet::default();
        let mut form = InjectForm::new(&set, None);
        for &(endpoint, value) in &seq {
            let value = value.and_then(NodeRef::new);
            match endpoint {
                Endpoint::From => form.set_node1(value),
                Endpoint::To => form.set_node2(value),
            }
            let selected = [&form.state().node1, &form.state().node2]
                .into_iter()
                .flatten()
                .map(|n| n.to_string())
                .collect::<BTreeSet<_>>();
            assert_eq!(highlighted(&set), selected, "sequence {seq:?}");
        }
        form.teardown();
        assert!(set.is_empty(), "teardown after {seq:?}");
    }
}
