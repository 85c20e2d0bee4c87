use approx::assert_relative_eq;
use chromat_rs::ChromatError;
use chromat_rs::core::{ChromatogramRecord, PlotData, ViewWindow, build_plot_data, plot};

fn record_with_channel_maxima(maxima: [f64; 4]) -> ChromatogramRecord {
    ChromatogramRecord {
        name: "read-1".to_owned(),
        id: "read-1".to_owned(),
        description: String::new(),
        bases: b"ACGTACGTAC".to_vec(),
        channels: *b"ACGT",
        traces: std::array::from_fn(|slot| {
            // Flat channel with one bump so each channel has a known maximum.
            (0..100)
                .map(|k| if k == 50 { maxima[slot] } else { 1.0 })
                .collect()
        }),
        peak_positions: (0..10).map(|i| 5.0 + 10.0 * i as f64).collect(),
        trace_x: None,
    }
}

#[test]
fn absent_record_yields_placeholder_bounds() {
    let data = build_plot_data(None, None).expect("placeholder");

    let PlotData::Empty { bounds } = data else {
        panic!("expected the empty sentinel");
    };
    assert_eq!(bounds.x_min, -2.0);
    assert_eq!(bounds.x_max, 102.0);
    assert_eq!(bounds.y_min, -0.15);
    assert_eq!(bounds.y_max, 1.05);
}

#[test]
fn all_channels_share_one_scale_factor() {
    let record = record_with_channel_maxima([50.0, 100.0, 25.0, 10.0]);
    let data = build_plot_data(Some(&record), None).expect("plot");

    let PlotData::Frame(frame) = data else {
        panic!("expected a frame");
    };
    assert_eq!(frame.curves.len(), 4);

    let curve_max = |slot: usize| -> f64 {
        frame.curves[slot]
            .ys
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    };
    assert_relative_eq!(curve_max(0), 0.5, epsilon = 1e-12);
    assert_relative_eq!(curve_max(1), 1.0, epsilon = 1e-12);
    assert_relative_eq!(curve_max(2), 0.25, epsilon = 1e-12);
    assert_relative_eq!(curve_max(3), 0.1, epsilon = 1e-12);
}

#[test]
fn labels_sit_at_peaks_with_base_colors() {
    let record = record_with_channel_maxima([1.0, 1.0, 1.0, 1.0]);
    let PlotData::Frame(frame) = build_plot_data(Some(&record), None).expect("plot") else {
        panic!("expected a frame");
    };

    assert_eq!(frame.labels.len(), record.base_count());
    for (label, (base, peak)) in frame
        .labels
        .iter()
        .zip(record.bases.iter().zip(&record.peak_positions))
    {
        assert_eq!(label.base, *base);
        assert_eq!(label.x, *peak);
        assert_eq!(label.y, plot::LABEL_Y);
        assert_eq!(label.color, chromat_rs::core::nucleotide::base_color(*base));
    }
}

#[test]
fn axis_bounds_pad_the_windowed_peak_span() {
    let record = record_with_channel_maxima([1.0, 1.0, 1.0, 1.0]);
    let PlotData::Frame(frame) = build_plot_data(Some(&record), None).expect("plot") else {
        panic!("expected a frame");
    };

    // Peak span 5..95 is 90 wide; 2% of that is under the 2-unit floor.
    assert_eq!(frame.bounds.x_min, 3.0);
    assert_eq!(frame.bounds.x_max, 97.0);
    assert_eq!(frame.bounds.y_min, plot::Y_MIN);
    assert_eq!(frame.bounds.y_max, plot::Y_MAX);
}

#[test]
fn wide_peak_span_uses_proportional_padding() {
    let mut record = record_with_channel_maxima([1.0, 1.0, 1.0, 1.0]);
    record.traces = std::array::from_fn(|_| vec![1.0; 300]);
    record.peak_positions = (0..10).map(|i| 10.0 + 25.0 * i as f64).collect();

    let PlotData::Frame(frame) = build_plot_data(Some(&record), None).expect("plot") else {
        panic!("expected a frame");
    };

    // Span 225 * 0.02 = 4.5 exceeds the floor.
    assert_relative_eq!(frame.bounds.x_min, 10.0 - 4.5, epsilon = 1e-12);
    assert_relative_eq!(frame.bounds.x_max, 235.0 + 4.5, epsilon = 1e-12);
}

#[test]
fn full_extent_window_is_a_no_op() {
    let record = record_with_channel_maxima([3.0, 8.0, 2.0, 5.0]);
    let unwindowed = build_plot_data(Some(&record), None).expect("plot");

    let window = ViewWindow::x_range(0.0, 99.0).expect("window");
    let windowed = build_plot_data(Some(&record), Some(window)).expect("plot");

    assert_eq!(unwindowed, windowed);
}

#[test]
fn all_zero_traces_plot_without_rescaling() {
    let mut record = record_with_channel_maxima([1.0, 1.0, 1.0, 1.0]);
    record.traces = std::array::from_fn(|_| vec![0.0; 100]);

    let PlotData::Frame(frame) = build_plot_data(Some(&record), None).expect("plot") else {
        panic!("expected a frame");
    };
    for curve in &frame.curves {
        assert!(curve.ys.iter().all(|y| *y == 0.0));
    }
}

#[test]
fn malformed_record_fails_without_partial_output() {
    let mut record = record_with_channel_maxima([1.0, 1.0, 1.0, 1.0]);
    record.traces[3].truncate(60);

    let err = build_plot_data(Some(&record), None).expect_err("malformed");
    assert!(matches!(err, ChromatError::MalformedRecord(_)));
}

#[test]
fn trace_x_is_used_directly_when_present() {
    let mut record = record_with_channel_maxima([1.0, 1.0, 1.0, 1.0]);
    record.trace_x = Some((0..100).map(|k| k as f64 * 0.5).collect());
    record.peak_positions = (0..10).map(|i| 2.5 + 5.0 * i as f64).collect();

    let PlotData::Frame(frame) = build_plot_data(Some(&record), None).expect("plot") else {
        panic!("expected a frame");
    };
    assert_eq!(frame.curves[0].xs[0], 0.0);
    assert_eq!(frame.curves[0].xs[99], 49.5);
    assert_eq!(frame.labels[0].x, 2.5);
}
