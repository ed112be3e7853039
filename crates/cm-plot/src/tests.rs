//! Unit tests for cm-plot.

#[cfg(test)]
mod colors {
    use crate::palette::{log_scaled, plasma, series_color, PASTEL};

    #[test]
    fn series_colors_cycle() {
        assert_eq!(series_color(0), PASTEL[0]);
        assert_eq!(series_color(PASTEL.len()), PASTEL[0]);
        assert_eq!(series_color(3), PASTEL[3]);
    }

    #[test]
    fn plasma_endpoints() {
        assert_eq!(plasma(0.0), plasma(-1.0));
        assert_eq!(plasma(1.0), plasma(2.0));
        assert_ne!(plasma(0.0), plasma(1.0));
    }

    #[test]
    fn log_scale_maps_bounds_to_unit_interval() {
        assert_eq!(log_scaled(1e-2, 1e-2, 0.35), 0.0);
        assert!((log_scaled(0.35, 1e-2, 0.35) - 1.0).abs() < 1e-12);
        let mid = log_scaled(0.1, 1e-2, 0.35);
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn log_scale_floors_empty_bins() {
        assert_eq!(log_scaled(0.0, 1e-2, 0.35), 0.0);
        assert_eq!(log_scaled(f64::NAN, 1e-2, 0.35), 0.0);
    }
}

#[cfg(test)]
mod line_charts {
    use crate::{LinePlot, PlotError, Series};

    #[test]
    fn renders_png_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accuracy.png");

        let series = vec![
            Series {
                label:  "N = 10".into(),
                points: vec![(0.1, 0.5), (0.2, 0.7), (0.3, 0.9)],
            },
            Series {
                label:  "N = 30".into(),
                points: vec![(0.1, 0.4), (0.2, 0.6), (0.3, 0.8)],
            },
        ];
        LinePlot {
            x_label: "proportion informed".into(),
            y_label: "accuracy".into(),
            ..LinePlot::default()
        }
        .render(&path, &series)
        .unwrap();

        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0);
    }

    #[test]
    fn nan_points_are_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("elongation.png");

        let series = vec![Series {
            label:  "N = 10".into(),
            points: vec![(0.1, 1.2), (0.2, f64::NAN), (0.3, 1.5)],
        }];
        LinePlot::default().render(&path, &series).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn all_nan_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");

        let series = vec![Series {
            label:  "N = 10".into(),
            points: vec![(f64::NAN, f64::NAN)],
        }];
        let err = LinePlot::default().render(&path, &series).unwrap_err();
        assert!(matches!(err, PlotError::Empty));
    }
}

#[cfg(test)]
mod heatmap_figures {
    use cm_heatmap::{predicted_heading_curve, ConditionalHistogram};

    use crate::{HeatmapFigure, Panel, PlotError};

    fn small_hist() -> ConditionalHistogram {
        let conflict = vec![0.0, 0.0, 60.0, 60.0, 120.0, 120.0, 180.0, 180.0];
        let heading = vec![1.0, -2.0, 28.0, 33.0, 55.0, 61.0, 95.0, -95.0];
        ConditionalHistogram::from_trials(&conflict, &heading).unwrap()
    }

    #[test]
    fn renders_panel_grid_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("heatmap.png");

        let hist = small_hist();
        let curve = predicted_heading_curve(5.0, 5.0);
        let panels = vec![
            Panel { hist: &hist, predicted: &curve, n1: 5, n2: 5 },
            Panel { hist: &hist, predicted: &curve, n1: 5, n2: 5 },
            Panel { hist: &hist, predicted: &curve, n1: 6, n2: 5 },
            Panel { hist: &hist, predicted: &curve, n1: 6, n2: 5 },
        ];
        HeatmapFigure {
            column_titles:  vec!["Without feedback".into(), "With feedback".into()],
            x_label:        "conflict angle (deg)".into(),
            y_label:        "group heading (deg)".into(),
            colorbar_label: "probability".into(),
            size:           (800, 500),
            ..HeatmapFigure::default()
        }
        .render(&path, &panels)
        .unwrap();

        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0);
    }

    #[test]
    fn no_panels_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("none.png");
        let err = HeatmapFigure::default().render(&path, &[]).unwrap_err();
        assert!(matches!(err, PlotError::Empty));
    }
}
