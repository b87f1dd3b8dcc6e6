//! Property-based tests for the tick driver.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use tickstate::core::{Guard, Transition};
use tickstate::graph::StateGraph;
use tickstate::signal::SignalFlag;

prop_compose! {
    fn arbitrary_deltas()(deltas in prop::collection::vec(0.0f32..0.5, 1..60)) -> Vec<f32> {
        deltas
    }
}

proptest! {
    #[test]
    fn terminal_state_never_advances(deltas in arbitrary_deltas()) {
        let mut graph = StateGraph::new();
        let idle = graph.create_state("Idle").build();

        let mut previous_elapsed = 0.0f32;
        for (i, delta) in deltas.iter().enumerate() {
            let next = graph.perform_and_transition(idle, *delta).unwrap();
            prop_assert_eq!(next, idle);

            let state = graph.state(idle).unwrap();
            prop_assert!(state.elapsed() >= previous_elapsed);
            prop_assert_eq!(state.frame_count(), i as u64 + 1);
            previous_elapsed = state.elapsed();
        }
    }

    #[test]
    fn first_true_guard_selects_target(
        outcomes in prop::collection::vec(any::<bool>(), 1..8)
    ) {
        let mut graph = StateGraph::new();
        let source = graph.create_state("Source").build();
        let targets: Vec<_> = (0..outcomes.len())
            .map(|i| graph.create_state(format!("T{i}")).build())
            .collect();
        let transitions = outcomes.iter().zip(&targets).map(|(&outcome, &target)| {
            Transition::new(target, Guard::new(move |_| outcome))
        });
        graph.set_transitions(source, transitions).unwrap();

        let next = graph.perform_and_transition(source, 0.1).unwrap();

        let expected = outcomes
            .iter()
            .position(|&o| o)
            .map_or(source, |i| targets[i]);
        prop_assert_eq!(next, expected);
    }

    #[test]
    fn timed_guard_fires_on_first_tick_past_threshold(
        threshold in 0.0f32..5.0,
        delta in 0.01f32..1.0,
    ) {
        let mut graph = StateGraph::new();
        let a = graph.create_state("A").build();
        let b = graph.create_state("B").build();
        graph.add_transition(a, b).after(threshold).build().unwrap();

        let mut accumulated = 0.0f32;
        let mut current = a;
        while current == a {
            accumulated += delta;
            current = graph.perform_and_transition(a, delta).unwrap();
            if accumulated > threshold {
                prop_assert_eq!(current, b);
            } else {
                prop_assert_eq!(current, a);
            }
        }
    }

    #[test]
    fn source_counters_are_zero_after_any_transition(frames in 1u64..50, delta in 0.0f32..1.0) {
        let mut graph = StateGraph::new();
        let a = graph.create_state("A").build();
        let b = graph.create_state("B").build();
        graph
            .add_transition(a, b)
            .when(move |s| s.frame_count() == frames)
            .build()
            .unwrap();

        let mut current = a;
        for _ in 0..frames {
            current = graph.perform_and_transition(current, delta).unwrap();
        }

        prop_assert_eq!(current, b);
        let source = graph.state(a).unwrap();
        prop_assert_eq!(source.elapsed(), 0.0);
        prop_assert_eq!(source.frame_count(), 0);
    }

    #[test]
    fn signal_fires_once_however_often_it_is_raised(raises in 1usize..10) {
        let flag = SignalFlag::new();
        let mut graph = StateGraph::new();
        let a = graph.create_state("A").build();
        graph.add_transition(a, a).on_signal(flag.clone()).build().unwrap();

        for _ in 0..raises {
            flag.raise();
        }

        let first = graph.step(a, 0.1).unwrap();
        let second = graph.step(a, 0.1).unwrap();
        prop_assert!(first.transitioned());
        prop_assert!(!second.transitioned());
    }
}
