//! Unit tests for cm-stats.

#[cfg(test)]
mod per_trial_accuracy {
    use cm_core::Vec2;

    use crate::{couzin_accuracy, couzin_accuracy_rescaled};

    const EPS: f64 = 1e-12;

    #[test]
    fn parallel_is_one() {
        let a = couzin_accuracy(0.0, Vec2::new(1.0, 0.0)).unwrap();
        assert!((a - 1.0).abs() < EPS);
    }

    #[test]
    fn antiparallel_is_zero() {
        let a = couzin_accuracy(0.0, Vec2::new(-1.0, 0.0)).unwrap();
        assert!(a.abs() < EPS);
    }

    #[test]
    fn orthogonal_is_half() {
        let a = couzin_accuracy(0.0, Vec2::new(0.0, 1.0)).unwrap();
        assert!((a - 0.5).abs() < EPS);
    }

    #[test]
    fn heading_magnitude_is_irrelevant() {
        let short = couzin_accuracy(30.0, Vec2::new(0.001, 0.002)).unwrap();
        let long = couzin_accuracy(30.0, Vec2::new(1000.0, 2000.0)).unwrap();
        assert!((short - long).abs() < EPS);
    }

    #[test]
    fn clip_prevents_domain_error() {
        // A unit vector built from trig at an odd angle; the dot product
        // with itself can exceed 1 by a few ULPs.  Must never yield NaN.
        for deg in [0.0, 17.3, 45.0, 89.999, 123.456, 359.9] {
            let h = Vec2::unit_from_deg(deg);
            let a = couzin_accuracy(deg, h).unwrap();
            assert!(a.is_finite(), "NaN at {deg}°");
            assert!((a - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_length_heading_is_an_error() {
        assert!(couzin_accuracy(0.0, Vec2::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn rescaled_is_a_distinct_definition() {
        // (accuracy + 1) / 2: antiparallel maps to 0.5, not 0.
        let plain = couzin_accuracy(0.0, Vec2::new(-1.0, 0.0)).unwrap();
        let rescaled = couzin_accuracy_rescaled(0.0, Vec2::new(-1.0, 0.0)).unwrap();
        assert!(plain.abs() < 1e-12);
        assert!((rescaled - 0.5).abs() < 1e-12);

        let orthogonal = couzin_accuracy_rescaled(0.0, Vec2::new(0.0, 1.0)).unwrap();
        assert!((orthogonal - 0.75).abs() < 1e-12);
    }
}

#[cfg(test)]
mod resultant_length {
    use cm_core::Vec2;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use crate::{couzin_accuracy, mean_resultant_length};

    #[test]
    fn identical_headings_give_exactly_one() {
        let preferred = vec![40.0; 8];
        let headings = vec![Vec2::unit_from_deg(100.0); 8];
        let r = mean_resultant_length(&preferred, &headings).unwrap();
        assert!((r - 1.0).abs() < 1e-12, "got {r}");
    }

    #[test]
    fn wraparound_split_beats_naive_angle_averaging() {
        // A group split between 1° and 359° relative to a 0° preference:
        // circularly the headings nearly agree, so R must stay close to 1.
        let preferred = vec![0.0; 4];
        let headings = vec![
            Vec2::unit_from_deg(1.0),
            Vec2::unit_from_deg(359.0),
            Vec2::unit_from_deg(1.0),
            Vec2::unit_from_deg(359.0),
        ];
        let r = mean_resultant_length(&preferred, &headings).unwrap();
        assert!(r > 0.999, "wraparound split should stay aligned, got {r}");
        assert!((r - 1.0f64.to_radians().cos()).abs() < 1e-12);

        // Naively averaging the raw heading angles lands at 180° — the
        // opposite direction — which would score an accuracy of ~0.
        let naive_mean_deg = (1.0 + 359.0 + 1.0 + 359.0) / 4.0;
        let naive =
            couzin_accuracy(0.0, Vec2::unit_from_deg(naive_mean_deg)).unwrap();
        assert!(naive < 1e-9, "naive angle mean points backwards");
        assert!(r > naive + 0.99, "component averaging must not collapse at the seam");
    }

    #[test]
    fn end_to_end_two_trial_example() {
        // g = 0°, h₁ = (1,0), h₂ = (0,1):
        // per-trial accuracies {1.0, 0.5}; R = √((1/2)² + (1/2)²) = √0.5.
        let h1 = Vec2::new(1.0, 0.0);
        let h2 = Vec2::new(0.0, 1.0);
        assert!((couzin_accuracy(0.0, h1).unwrap() - 1.0).abs() < 1e-12);
        assert!((couzin_accuracy(0.0, h2).unwrap() - 0.5).abs() < 1e-12);

        let r = mean_resultant_length(&[0.0, 0.0], &[h1, h2]).unwrap();
        assert!((r - 0.5f64.sqrt()).abs() < 1e-12, "got {r}");
        assert!(r < 0.75, "R must undercut the arithmetic mean of accuracies");
    }

    #[test]
    fn rotation_invariant_for_coherent_groups() {
        // Any group whose headings all sit at one fixed offset from their
        // preference has R = 1, wherever that offset points.
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let preferred: Vec<f64> = (0..16).map(|_| rng.gen_range(0.0..360.0)).collect();
            let offset: f64 = rng.gen_range(-180.0..180.0);
            let headings: Vec<Vec2> = preferred
                .iter()
                .map(|&p| Vec2::unit_from_deg(p + offset))
                .collect();
            let r = mean_resultant_length(&preferred, &headings).unwrap();
            assert!((r - 1.0).abs() < 1e-9, "offset {offset}: got {r}");
        }
    }

    #[test]
    fn scattered_headings_reduce_r() {
        let mut rng = StdRng::seed_from_u64(11);
        let preferred = vec![0.0; 256];
        let headings: Vec<Vec2> = (0..256)
            .map(|_| Vec2::unit_from_deg(rng.gen_range(0.0..360.0)))
            .collect();
        let r = mean_resultant_length(&preferred, &headings).unwrap();
        assert!(r < 0.3, "uniform headings should nearly cancel, got {r}");
    }

    #[test]
    fn empty_group_is_an_error() {
        assert!(mean_resultant_length(&[], &[]).is_err());
    }
}

#[cfg(test)]
mod table_pipeline {
    use std::io::Cursor;

    use cm_table::Table;

    use crate::{
        accuracy_by_group, append_direction_columns, deviation_extremes, elongation_by_group,
        rescaled_accuracy_summary,
    };

    fn load(csv: &str) -> Table {
        let mut t = Table::from_reader(Cursor::new(csv)).unwrap();
        t.coerce_numeric();
        t
    }

    #[test]
    fn derived_columns_match_hand_computation() {
        let mut table = load(
            "N,n1,angle1_deg,dirX,dirY\n\
             100,10,0,2,0\n\
             100,10,0,0,3\n",
        );
        append_direction_columns(&mut table).unwrap();

        assert_eq!(table.numeric("g_x").unwrap(), &[1.0, 1.0]);
        assert_eq!(table.numeric("h_x").unwrap()[0], 1.0);
        assert_eq!(table.numeric("h_y").unwrap()[1], 1.0);
        assert_eq!(table.numeric("cos_theta").unwrap(), &[1.0, 0.0]);
        // sin θ carries the sign: h at +90° of a 0° preference gives −1.
        assert_eq!(table.numeric("sin_theta").unwrap(), &[0.0, -1.0]);
        assert_eq!(table.numeric("actual_p").unwrap(), &[0.1, 0.1]);
    }

    #[test]
    fn group_accuracy_from_component_means() {
        // Same two-trial example as the closed-form test, via the table path.
        let mut table = load(
            "N,n1,angle1_deg,dirX,dirY\n\
             100,10,0,1,0\n\
             100,10,0,0,1\n",
        );
        append_direction_columns(&mut table).unwrap();
        let points = accuracy_by_group(&table).unwrap();
        assert_eq!(points.len(), 1);
        assert!((points[0].accuracy - 0.5f64.sqrt()).abs() < 1e-12);
        assert_eq!(points[0].group_size, 100.0);
        assert_eq!(points[0].informed_fraction, 0.1);
    }

    #[test]
    fn accuracy_groups_ordered_by_configuration() {
        let mut table = load(
            "N,n1,angle1_deg,dirX,dirY\n\
             200,20,0,1,0\n\
             100,10,0,1,0\n\
             100,50,0,1,0\n",
        );
        append_direction_columns(&mut table).unwrap();
        let points = accuracy_by_group(&table).unwrap();
        let keys: Vec<(f64, f64)> = points
            .iter()
            .map(|p| (p.group_size, p.informed_fraction))
            .collect();
        assert_eq!(keys, vec![(100.0, 0.1), (100.0, 0.5), (200.0, 0.1)]);
    }

    #[test]
    fn elongation_ratio_of_means() {
        let mut table = load(
            "N,n1,angle1_deg,dirX,dirY,bbox_X,bbox_Y\n\
             100,10,0,1,0,4,2\n\
             100,10,0,1,0,6,3\n",
        );
        append_direction_columns(&mut table).unwrap();
        let points = elongation_by_group(&table).unwrap();
        // mean(4,6) / mean(2,3) = 5 / 2.5
        assert_eq!(points[0].elongation, 2.0);
    }

    #[test]
    fn zero_height_elongation_is_nan_not_a_fault() {
        let mut table = load(
            "N,n1,angle1_deg,dirX,dirY,bbox_X,bbox_Y\n\
             100,10,0,1,0,4,0\n\
             100,10,0,1,0,6,0\n",
        );
        append_direction_columns(&mut table).unwrap();
        let points = elongation_by_group(&table).unwrap();
        assert!(points[0].elongation.is_nan());
    }

    #[test]
    fn rescaled_summary_statistics() {
        // Two (N, p) groups; accuracies hand-computed under the rescaled
        // definition: parallel → 1.0, orthogonal → 0.75.
        let mut table = load(
            "N,p,n1,angle1_deg,dirX,dirY\n\
             100,0.1,10,0,1,0\n\
             100,0.1,10,0,0,1\n\
             200,0.2,40,0,1,0\n",
        );
        let summary = rescaled_accuracy_summary(&mut table).unwrap();
        assert_eq!(summary.len(), 2);

        let g = &summary[0];
        assert_eq!((g.group_size, g.informed_fraction), (100.0, 0.1));
        assert!((g.mean - 0.875).abs() < 1e-12);
        // sample std of {1.0, 0.75}
        let expected_std = ((0.125f64.powi(2) * 2.0) / 1.0).sqrt();
        assert!((g.std - expected_std).abs() < 1e-12);
        assert_eq!(g.count, 2);

        // Singleton group: mean defined, std is NaN (not zero, not a fault).
        assert_eq!(summary[1].count, 1);
        assert!(summary[1].std.is_nan());

        // The per-trial column was appended in place.
        assert!(table.numeric("accuracy").is_ok());
    }

    #[test]
    fn deviation_extremes_locate_worst_trial() {
        let table = load(
            "N,p,angle1_deg,dirX,dirY\n\
             100,0.1,0,1,0\n\
             100,0.4,0,-1,0\n\
             100,0.2,0,0,1\n",
        );
        let ext = deviation_extremes(&table).unwrap();
        assert!(ext.min_rad.abs() < 1e-12);
        assert!((ext.max_rad - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(ext.p_at_max, 0.4);
    }

    #[test]
    fn missing_required_column_fails_loudly() {
        let mut table = load("N,n1,dirX,dirY\n100,10,1,0\n");
        assert!(append_direction_columns(&mut table).is_err());
    }
}

#[cfg(test)]
mod export {
    use tempfile::TempDir;

    use crate::aggregate::{AccuracyPoint, AccuracySummary, ElongationPoint};
    use crate::export::{write_accuracy_csv, write_elongation_csv, write_summary_csv};

    #[test]
    fn accuracy_csv_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("accuracy.csv");
        write_accuracy_csv(
            &path,
            &[AccuracyPoint { group_size: 100.0, informed_fraction: 0.1, accuracy: 0.9 }],
        )
        .unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["N", "actual_p", "accuracy"]);
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][2], "0.9");
    }

    #[test]
    fn nan_elongation_written_as_empty_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("elongation.csv");
        write_elongation_csv(
            &path,
            &[ElongationPoint {
                group_size:        50.0,
                informed_fraction: 0.2,
                elongation:        f64::NAN,
            }],
        )
        .unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][2], "");
    }

    #[test]
    fn summary_csv_columns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("summary.csv");
        write_summary_csv(
            &path,
            &[AccuracySummary {
                group_size:        100.0,
                informed_fraction: 0.1,
                mean:              0.875,
                std:               0.05,
                count:             12,
            }],
        )
        .unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["N", "p", "mean_accuracy", "std_accuracy", "count"]);
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][4], "12");
    }
}
