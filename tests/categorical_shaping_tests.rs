use std::sync::Arc;

use chart_adapters::core::{
    ColorScale, Fields, Observation, UniversalChartState, categorical_items,
};

mod support;

fn names_and_values(state: &UniversalChartState) -> Vec<(String, f64)> {
    categorical_items(state)
        .into_iter()
        .map(|item| (item.name, item.value))
        .collect()
}

#[test]
fn items_are_sorted_descending_by_value() {
    let state = support::categorical_state("pie", &[("A", 100.0), ("B", 200.0), ("C", 300.0)]);
    assert_eq!(
        names_and_values(&state),
        vec![
            ("C".to_owned(), 300.0),
            ("B".to_owned(), 200.0),
            ("A".to_owned(), 100.0),
        ]
    );
}

#[test]
fn zero_and_negative_values_are_dropped() {
    let state = support::categorical_state("pie", &[("A", 100.0), ("B", 0.0), ("C", -50.0)]);
    assert_eq!(names_and_values(&state), vec![("A".to_owned(), 100.0)]);
}

#[test]
fn items_carry_segment_colors() {
    let state = support::categorical_state("pie", &[("A", 1.0), ("B", 2.0)]);
    let items = categorical_items(&state);
    assert_eq!(items[0].color, state.colors.color("B"));
    assert_eq!(items[1].color, state.colors.color("A"));
    assert!(items.iter().all(|item| item.children.is_empty()));
}

#[test]
fn missing_accessors_degrade_to_empty_list() {
    let mut state = support::categorical_state("pie", &[("A", 1.0)]);
    state.fields.y = None;
    assert!(categorical_items(&state).is_empty());

    let mut state = support::categorical_state("pie", &[("A", 1.0)]);
    state.fields.segment = None;
    assert!(categorical_items(&state).is_empty());
}

#[test]
fn missing_and_malformed_values_count_as_zero() {
    let observations = vec![
        Observation::new().with("segment", "A").with("value", 5.0),
        Observation::new().with("segment", "B"),
        Observation::new().with("segment", "C").with("value", "n/a"),
        Observation::new().with("segment", "D").with("value", "7.5"),
    ];
    let state = UniversalChartState::new(
        "pie",
        observations,
        Fields::new().with_segment_key("segment").with_y_key("value"),
        support::color_scale(&["A", "B", "C", "D"]),
    );
    assert_eq!(
        names_and_values(&state),
        vec![("D".to_owned(), 7.5), ("A".to_owned(), 5.0)]
    );
}

#[test]
fn nan_from_custom_accessor_is_treated_as_missing() {
    let state = support::categorical_state("pie", &[("A", 1.0), ("B", 2.0)]);
    let fields = Fields::new()
        .with_segment_key("segment")
        .with_y(|d| match d.text("segment").as_deref() {
            Some("A") => Some(f64::NAN),
            _ => d.number("value"),
        });
    let state = UniversalChartState { fields, ..state };
    assert_eq!(names_and_values(&state), vec![("B".to_owned(), 2.0)]);
}

#[test]
fn label_accessor_overrides_item_name() {
    let observations = vec![
        Observation::new()
            .with("segment", "https://ld.admin.ch/canton/1")
            .with("label", "Zurich")
            .with("value", 10.0),
        Observation::new()
            .with("segment", "https://ld.admin.ch/canton/2")
            .with("value", 4.0),
    ];
    let state = UniversalChartState::new(
        "pie",
        observations,
        Fields::new()
            .with_segment_key("segment")
            .with_label_key("label")
            .with_y_key("value"),
        support::color_scale(&["https://ld.admin.ch/canton/1", "https://ld.admin.ch/canton/2"]),
    );
    assert_eq!(
        names_and_values(&state),
        vec![
            ("Zurich".to_owned(), 10.0),
            ("https://ld.admin.ch/canton/2".to_owned(), 4.0),
        ]
    );
}

#[test]
fn segments_outside_the_segment_set_are_skipped() {
    let state = support::categorical_state("pie", &[("A", 1.0), ("B", 2.0)]).with_segments(["A"]);
    assert_eq!(names_and_values(&state), vec![("A".to_owned(), 1.0)]);
}

#[test]
fn segments_are_derived_when_not_precomputed() {
    let mut state = support::categorical_state("pie", &[("A", 1.0), ("B", 2.0), ("A", 3.0)]);
    state.segments.clear();
    let derived: Vec<String> = state.effective_segments().into_iter().collect();
    assert_eq!(derived, vec!["A".to_owned(), "B".to_owned()]);
    assert_eq!(categorical_items(&state).len(), 3);
}

#[test]
fn equal_values_keep_observation_order() {
    let state = support::categorical_state("pie", &[("A", 5.0), ("B", 5.0), ("C", 9.0)]);
    let names: Vec<String> = categorical_items(&state)
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

#[test]
fn shaping_leaves_observations_untouched() {
    let state = support::categorical_state("pie", &[("A", 1.0), ("B", -1.0), ("C", 3.0)]);
    let before = state.observations.clone();
    let _ = categorical_items(&state);
    assert_eq!(state.observations, before);
}

#[test]
fn color_scale_is_only_queried_for_known_segments() {
    #[derive(Debug)]
    struct StrictScale {
        domain: Vec<String>,
    }

    impl ColorScale for StrictScale {
        fn color(&self, segment: &str) -> String {
            assert!(
                self.domain.iter().any(|known| known == segment),
                "unexpected segment {segment}"
            );
            "#000000".to_owned()
        }

        fn domain(&self) -> &[String] {
            &self.domain
        }
    }

    let mut state = support::categorical_state("pie", &[("A", 1.0), ("B", 2.0), ("C", 3.0)])
        .with_segments(["A", "C"]);
    state.colors = Arc::new(StrictScale {
        domain: vec!["A".to_owned(), "C".to_owned()],
    });
    assert_eq!(categorical_items(&state).len(), 2);
}
