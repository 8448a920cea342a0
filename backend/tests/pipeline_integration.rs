//! Pipelines wired through the lookup factory with the built-in ephemeris.

use chrono::NaiveTime;

use janma_rust::lookup::{FixedSunrise, LookupFactory, StaticGeocoder};
use janma_rust::models::BirthDetails;
use janma_rust::services::{classify, Calculator};
use janma_rust::CalcError;

fn calculator(tz: chrono_tz::Tz) -> Calculator {
    let geocoder = StaticGeocoder::new()
        .with_place("Ujjain", 23.1765, 75.7885)
        .with_place("Kathmandu", 27.7172, 85.3240);
    let sunrise = FixedSunrise::at(NaiveTime::from_hms_opt(0, 50, 0).unwrap());
    Calculator::new(LookupFactory::create_local(geocoder, sunrise, None), tz)
}

fn birth(dob: &str, time: &str, place: &str) -> BirthDetails {
    BirthDetails::parse(Some("Ravi"), Some(dob), Some(time), Some(place)).unwrap()
}

#[tokio::test]
async fn test_nakshatra_agrees_with_direct_classification() {
    let calc = calculator(chrono_tz::Asia::Kolkata);
    let report = calc
        .nakshatra(&birth("2010-08-21", "14:10", "Ujjain"))
        .await
        .unwrap();
    let direct = classify(report.position.longitude()).unwrap();
    assert_eq!(report.position, direct);
}

#[tokio::test]
async fn test_same_instant_in_two_zones() {
    // 11:45 NPT and 11:30 IST are the same instant
    let ist = calculator(chrono_tz::Asia::Kolkata)
        .nakshatra(&birth("2015-04-25", "11:30", "Kathmandu"))
        .await
        .unwrap();
    let npt = calculator(chrono_tz::Asia::Kathmandu)
        .nakshatra(&birth("2015-04-25", "11:45", "Kathmandu"))
        .await
        .unwrap();
    assert!((ist.julian_day.value() - npt.julian_day.value()).abs() < 1e-9);
    assert_eq!(ist.position, npt.position);
}

#[tokio::test]
async fn test_both_pipelines_reject_unknown_place() {
    let calc = calculator(chrono_tz::Asia::Kolkata);
    let details = birth("2015-04-25", "11:30", "Lanka");
    assert!(matches!(
        calc.isthkaal(&details).await,
        Err(CalcError::Resolution(_))
    ));
    assert!(matches!(
        calc.nakshatra(&details).await,
        Err(CalcError::Resolution(_))
    ));
}

#[tokio::test]
async fn test_isthkaal_in_kathmandu_zone() {
    // 00:50 UTC is 06:35 NPT; birth 07:35 is 2 ghati 30 pal later
    let report = calculator(chrono_tz::Asia::Kathmandu)
        .isthkaal(&birth("2015-04-25", "07:35", "Kathmandu"))
        .await
        .unwrap();
    assert_eq!(report.sunrise_local.to_string(), "06:35:00");
    assert_eq!(report.isthkaal.label(), "2 घटी 30 पल");
}
