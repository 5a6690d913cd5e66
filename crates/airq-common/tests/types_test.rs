//! Tests for the shared measurement types and utilities.

use airq_common::{format_hour_label, normalize_pollutant_label, AirQualityError, DayType, MeasurementRecord};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod day_type_tests {
    use super::*;

    #[test]
    fn test_day_type_classification() {
        // 2024-03-08 is a Friday
        assert_eq!(DayType::of(date(2024, 3, 8)), DayType::WorkingDay);
        assert_eq!(DayType::of(date(2024, 3, 9)), DayType::Weekend);
        assert_eq!(DayType::of(date(2024, 3, 10)), DayType::Weekend);
        assert_eq!(DayType::of(date(2024, 3, 11)), DayType::WorkingDay);
    }

    #[test]
    fn test_day_type_serialization() {
        let json = serde_json::to_string(&DayType::WorkingDay).unwrap();
        assert_eq!(json, "\"working_day\"");
        let parsed: DayType = serde_json::from_str("\"weekend\"").unwrap();
        assert_eq!(parsed, DayType::Weekend);
    }
}

mod record_tests {
    use super::*;

    #[test]
    fn test_parse_table_row() {
        let record = MeasurementRecord::parse("2024-03-09", 7, 12.5, DayType::Weekend).unwrap();
        assert_eq!(record.date(), date(2024, 3, 9));
        assert_eq!(record.hour(), 7);
        assert_eq!(record.value(), 12.5);
    }

    #[test]
    fn test_parse_rejects_bad_rows() {
        assert!(matches!(
            MeasurementRecord::parse("09/03/2024", 7, 1.0, DayType::Weekend),
            Err(AirQualityError::DateParse(_))
        ));
        assert!(MeasurementRecord::parse("2024-03-09", -1, 1.0, DayType::Weekend).is_err());
        assert!(MeasurementRecord::parse("2024-03-09", 24, 1.0, DayType::Weekend).is_err());
        assert!(MeasurementRecord::parse("2024-03-09", 3, f64::NAN, DayType::Weekend).is_err());
    }

    #[test]
    fn test_record_serialization() {
        let record = MeasurementRecord::new(date(2024, 1, 15), 23, 0.0, DayType::WorkingDay).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: MeasurementRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert!(json.contains("\"2024-01-15\""));
    }
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn valid_hours_and_values_are_accepted(hour in 0u8..24, value in 0.0f64..1.0e6) {
            let record = MeasurementRecord::new(date(2024, 6, 1), hour, value, DayType::WorkingDay);
            prop_assert!(record.is_ok());
        }

        #[test]
        fn out_of_range_hours_are_rejected(hour in 24u8..=u8::MAX) {
            let record = MeasurementRecord::new(date(2024, 6, 1), hour, 1.0, DayType::Weekend);
            let is_invalid_measurement = matches!(record, Err(AirQualityError::InvalidMeasurement { .. }));
            prop_assert!(is_invalid_measurement);
        }

        #[test]
        fn negative_values_are_rejected(value in -1.0e6f64..-1.0e-9) {
            prop_assert!(MeasurementRecord::new(date(2024, 6, 1), 0, value, DayType::Weekend).is_err());
        }

        #[test]
        fn pollutant_label_keeps_first_token(key in "[A-Z][A-Z0-9.]{1,4}", suffix in "[a-z ]{0,20}") {
            let label = format!("{key} ({suffix})");
            prop_assert_eq!(normalize_pollutant_label(&label), key.as_str());
        }

        #[test]
        fn hour_labels_follow_pattern(hour in 0usize..24) {
            prop_assert_eq!(format_hour_label(hour), format!("{}h00", hour));
        }
    }
}
