use super::*;
use crate::data::series::SeriesGenerator;

fn iv(low: f64, high: f64) -> Interval {
    Interval { low, high }
}

#[test]
fn two_by_two_example() {
    let out = stack(&[vec![3.0, 5.0], vec![2.0, 1.0]]).unwrap();
    assert_eq!(
        out.series,
        vec![
            vec![iv(0.0, 3.0), iv(0.0, 5.0)],
            vec![iv(3.0, 5.0), iv(5.0, 6.0)],
        ]
    );
    assert_eq!(out.single_max, 5.0);
    assert_eq!(out.cumulative_max, 6.0);
    assert_eq!(out.series_count(), 2);
    assert_eq!(out.points(), 2);
    assert_eq!(out.interval(1, 0).value(), 2.0);
}

#[test]
fn intervals_are_ordered_and_top_equals_column_sum() {
    let data = SeriesGenerator::new(8).generate_many(4, 58).unwrap();
    let out = stack(&data).unwrap();
    let n = data.len();
    for i in 0..58 {
        let mut sum = 0.0;
        for k in 0..n {
            let it = out.interval(k, i);
            assert!(it.low <= it.high);
            sum += data[k][i];
        }
        assert_eq!(out.interval(n - 1, i).high, sum);
    }
}

#[test]
fn stacking_is_pure() {
    let data = SeriesGenerator::new(1).generate_many(3, 20).unwrap();
    assert_eq!(stack(&data).unwrap(), stack(&data).unwrap());
}

#[test]
fn single_series_domains_coincide() {
    let out = stack(&[vec![1.0, 4.0, 2.0]]).unwrap();
    assert_eq!(out.single_max, 4.0);
    assert_eq!(out.cumulative_max, 4.0);
    assert!(out.series[0].iter().all(|it| it.low == 0.0));
}

#[test]
fn invalid_datasets_fail_fast() {
    let empty: [Vec<f64>; 0] = [];
    for err in [
        stack(&empty).unwrap_err(),
        stack(&[Vec::<f64>::new()]).unwrap_err(),
        stack(&[vec![1.0, 2.0], vec![1.0]]).unwrap_err(),
        stack(&[vec![1.0, -0.5]]).unwrap_err(),
        stack(&[vec![f64::NAN]]).unwrap_err(),
    ] {
        assert!(matches!(err, BarmorphError::Configuration(_)), "{err}");
    }
}
