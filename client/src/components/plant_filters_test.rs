use super::*;

#[test]
fn bloom_period_is_bounded_by_months() {
    assert_eq!(instrument_max(Instrument::BloomPeriod, 300, 200), MONTH_MAX);
}

#[test]
fn size_instruments_use_page_bounds() {
    assert_eq!(instrument_max(Instrument::PlantHeight, 300, 200), 300);
    assert_eq!(instrument_max(Instrument::PlantWidth, 300, 200), 200);
}
