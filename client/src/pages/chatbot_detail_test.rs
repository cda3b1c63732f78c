use super::*;

#[test]
fn bar_heights_scale_to_series_maximum() {
    let series = [10, 20, 40];
    assert_eq!(bar_height_percent(40, &series), 100);
    assert_eq!(bar_height_percent(20, &series), 50);
    assert_eq!(bar_height_percent(10, &series), 25);
}

#[test]
fn empty_or_zero_series_yields_zero_height() {
    assert_eq!(bar_height_percent(5, &[]), 0);
    assert_eq!(bar_height_percent(0, &[0, 0]), 0);
}

#[test]
fn fixture_series_peaks_at_full_height() {
    let series = mock::ANALYTICS.queries_over_time;
    let max = series.iter().copied().max().unwrap();
    assert_eq!(bar_height_percent(max, series), 100);
}
