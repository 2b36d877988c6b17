use chrono::{Duration, NaiveDate};
use chronomap::*;
use proptest::prelude::*;

// 0001-01-01 .. 9999-12-31 in milliseconds since the epoch.
const MIN_MS: i64 = -62_135_596_800_000;
const MAX_MS: i64 = 253_402_300_799_999;

fn date(days: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + Duration::days(days)
}

fn ymd(d: NaiveDate) -> String { d.format(time::DATE_FORMAT).to_string() }

proptest! {
    #[test]
    fn epoch_ms_round_trip(ms in MIN_MS..=MAX_MS) {
        let t = parse_timestamp(&ms.to_string()).unwrap();
        prop_assert_eq!(t.timestamp_millis(), ms);
    }

    #[test]
    fn iso8601_agrees_with_epoch(ms in 0i64..=MAX_MS) {
        let t = parse_timestamp(&ms.to_string()).unwrap();
        let iso = t.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string();
        prop_assert_eq!(parse_timestamp(&iso).unwrap(), t);
    }

    #[test]
    fn unbounded_contains_everything(days in -700_000i64..2_900_000) {
        prop_assert!(date_in_range(&ymd(date(days)), &DateRange::UNBOUNDED)
                     .unwrap());
    }

    #[test]
    fn inclusion_is_date_order(d in -50_000i64..50_000,
                               lo in -50_000i64..50_000,
                               hi in -50_000i64..50_000) {
        let (d, lo, hi) = (ymd(date(d)), ymd(date(lo)), ymd(date(hi)));
        let range = DateRange::parse(Some(&lo), Some(&hi)).unwrap();
        // yyyy-mm-dd strings of 4-digit years sort like dates.
        let expected = lo <= d && d <= hi;
        prop_assert_eq!(date_in_range(&d, &range).unwrap(), expected);
    }

    #[test]
    fn timestamp_and_date_predicates_agree(ms in 0i64..=MAX_MS,
                                           lo in 0i64..2_900_000,
                                           len in 0i64..1000) {
        let range = DateRange::new(Some(date(lo)), Some(date(lo + len)));
        let day = parse_timestamp(&ms.to_string()).unwrap().date_naive();
        prop_assert_eq!(timestamp_in_range(&ms.to_string(), &range).unwrap(),
                        date_in_range(&ymd(day), &range).unwrap());
    }

    #[test]
    fn gradients_are_evenly_spaced(n in 2usize..300) {
        let g = colormap_gradient("Spectral_11", n).unwrap();
        prop_assert_eq!(g.len(), n);
        let step = 1. / (n - 1) as f64;
        for (i, x) in g.positions().enumerate() {
            prop_assert!((x - i as f64 * step).abs() < 1e-12);
        }
        for c in g.colors() {
            prop_assert!(c.len() == 7 && c.starts_with('#'), "{}", c);
            prop_assert!(c[1..].bytes().all(|b| b.is_ascii_hexdigit()
                                                && !b.is_ascii_uppercase()),
                         "{}", c);
        }
    }

    #[test]
    fn class_tables_end_on_their_last_class(n in 3usize..=9) {
        let g = colormap_gradient(&format!("Blues_{n:02}"), n).unwrap();
        prop_assert_eq!(g.len(), n);
        prop_assert_eq!(g.colors().last(),
                        Some(["#3182bd", "#2171b5", "#08519c", "#08519c",
                              "#084594", "#084594", "#08306b"][n - 3]));
    }
}

#[test]
fn unknown_library_is_an_error() {
    for name in ["bogus.foo", "seaborn.rocket", ".viridis"] {
        assert!(matches!(colormap_gradient(name, 5),
                         Err(Error::UnknownLibrary(_))), "{name}");
    }
}

#[test]
fn text_based_browsers() {
    assert!(is_text_based(&Browser::new(BrowserKind::Generic, "lynx")));
    assert!(is_text_based(&Browser::new(BrowserKind::Elinks, "elinks")));
    assert!(!is_text_based(&Browser::new(BrowserKind::Background, "lynx")));
    assert!(!is_text_based(&Browser::from_command("google-chrome")));
}
