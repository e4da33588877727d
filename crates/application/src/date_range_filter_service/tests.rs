use chrono::NaiveDate;
use essentials_domain::{DateRange, DateRangeFormat, DateRangeParseError};

use crate::{FlashKind, FlashMessage};

use super::{
    DATE_RANGE_FORMAT_ERROR, DateRangeFilterConfig, DateRangeFilterService, DateRangeOutcome,
    FilterParams, RedirectTarget, RequestParams,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 13).unwrap_or_else(|| panic!("valid test date"))
}

fn params(date_range: Option<&str>) -> RequestParams {
    RequestParams {
        filters: FilterParams {
            date_range: date_range.map(ToOwned::to_owned),
            date_range_label: Some("since 2025-01-12".to_owned()),
        },
        controller: "distributions".to_owned(),
        action: "index".to_owned(),
    }
}

#[test]
fn malformed_range_flashes_error() {
    let service = DateRangeFilterService::new(DateRangeFilterConfig::default());
    let mut params = params(Some("nov 08 to feb 08"));

    let outcome = service.setup_date_range_picker(&mut params, today());

    let DateRangeOutcome::Rejected { flash, .. } = outcome else {
        panic!("malformed range should be rejected");
    };
    assert_eq!(flash.kind, FlashKind::Error);
    assert_eq!(flash.message, "Date range not properly formatted.");
}

#[test]
fn malformed_range_resets_filter_to_default_date() {
    let service = DateRangeFilterService::new(DateRangeFilterConfig::default());
    let mut params = params(Some("nov 08 to feb 08"));

    let outcome = service.setup_date_range_picker(&mut params, today());

    assert_eq!(
        params.filters.date_range.as_deref(),
        Some(service.default_date(today()).as_str())
    );
    assert_eq!(outcome.range(), service.default_range(today()));
    assert_eq!(
        params.filters.date_range_label.as_deref(),
        Some("since 2025-01-12")
    );
}

#[test]
fn malformed_range_redirects_to_originating_action() {
    let service = DateRangeFilterService::new(DateRangeFilterConfig::default());
    let mut params = params(Some("nov 08 to feb 08"));

    let outcome = service.setup_date_range_picker(&mut params, today());

    let expected = DateRangeOutcome::Rejected {
        range: service.default_range(today()),
        flash: FlashMessage::error(DATE_RANGE_FORMAT_ERROR),
        redirect: RedirectTarget {
            controller: "distributions".to_owned(),
            action: "index".to_owned(),
        },
        error: DateRangeParseError::MissingSeparator(" - ".to_owned()),
    };
    assert_eq!(outcome, expected);
    if let DateRangeOutcome::Rejected { redirect, .. } = outcome {
        assert_eq!(redirect.path(), "/distributions/index");
    }
}

#[test]
fn well_formed_range_is_applied_without_flash() {
    let service = DateRangeFilterService::new(DateRangeFilterConfig::default());
    let mut params = params(Some("January 12, 2025 - January 13, 2025"));

    let outcome = service.setup_date_range_picker(&mut params, today());

    let expected = DateRange::new(
        NaiveDate::from_ymd_opt(2025, 1, 12).unwrap_or_else(|| panic!("valid test date")),
        today(),
    );
    assert_eq!(Ok(outcome), expected.map(DateRangeOutcome::Applied));
    assert_eq!(
        params.filters.date_range.as_deref(),
        Some("January 12, 2025 - January 13, 2025")
    );
}

#[test]
fn blank_range_falls_back_silently() {
    let service = DateRangeFilterService::new(DateRangeFilterConfig::default());
    let mut params = params(Some("   "));

    let outcome = service.setup_date_range_picker(&mut params, today());

    assert_eq!(
        outcome,
        DateRangeOutcome::Applied(service.default_range(today()))
    );
    assert_eq!(
        params.filters.date_range,
        Some(service.default_date(today()))
    );
}

#[test]
fn default_date_covers_configured_lookback() {
    let format = DateRangeFormat::new(vec!["%Y-%m-%d".to_owned()], " - ");
    assert!(format.is_ok());
    let Ok(format) = format else { return };
    let service = DateRangeFilterService::new(DateRangeFilterConfig {
        format,
        default_lookback_days: 12,
    });

    assert_eq!(service.default_date(today()), "2025-01-01 - 2025-01-13");
}

#[test]
fn request_params_deserialize_from_nested_shape() {
    let value = serde_json::json!({
        "filters": {"date_range": "nov 08 to feb 08", "date_range_label": "since 2025-01-12"},
        "controller": "distributions",
        "action": "index",
    });

    let parsed = serde_json::from_value::<RequestParams>(value);

    assert_eq!(parsed.ok(), Some(params(Some("nov 08 to feb 08"))));
}

#[test]
fn rejection_carries_the_parse_error() {
    let service = DateRangeFilterService::new(DateRangeFilterConfig::default());
    let mut params = params(Some("nov 08 - feb 08"));

    let outcome = service.setup_date_range_picker(&mut params, today());

    let DateRangeOutcome::Rejected { error, .. } = outcome else {
        panic!("unparseable dates should be rejected");
    };
    assert_eq!(error, DateRangeParseError::InvalidDate("nov 08".to_owned()));
}
