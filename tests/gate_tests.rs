use geoclock::core::gate::{GateDecision, evaluate};
use geoclock::location::LocationError;
use geoclock::models::perimeter::Perimeter;
use geoclock::models::position::Position;

fn sf_perimeter() -> Perimeter {
    Perimeter::new(Position::new(37.7749, -122.4194), 2.0).unwrap()
}

#[test]
fn test_default_decision_is_closed() {
    let d = GateDecision::default();
    assert!(!d.within_perimeter);
    assert!(d.reason.is_some());
}

#[test]
fn test_sampling_error_fails_closed() {
    let sample = Err(LocationError::NoFix);
    let d = evaluate(&sample, &sf_perimeter());

    assert!(!d.within_perimeter);
    assert_eq!(d.reason.as_deref(), Some("no position fix available"));
    assert!(d.distance_km.is_none());
}

#[test]
fn test_permission_denied_reason_is_propagated() {
    let sample = Err(LocationError::PermissionDenied);
    let d = evaluate(&sample, &sf_perimeter());

    assert!(!d.within_perimeter);
    assert_eq!(d.reason.as_deref(), Some("location permission denied"));
}

#[test]
fn test_sample_inside_opens_the_gate() {
    let sample = Ok(Position::new(37.7750, -122.4195));
    let d = evaluate(&sample, &sf_perimeter());

    assert!(d.within_perimeter);
    assert!(d.reason.is_none());
    let dist = d.distance_km.unwrap();
    assert!(dist > 0.01 && dist < 0.02);
}

#[test]
fn test_sample_outside_reports_distance() {
    let sample = Ok(Position::new(37.8000, -122.4194));
    let d = evaluate(&sample, &sf_perimeter());

    assert!(!d.within_perimeter);
    let reason = d.reason.unwrap();
    assert!(reason.contains("km from the zone center"), "{}", reason);
    let dist = d.distance_km.unwrap();
    assert!(dist > 2.7 && dist < 2.9);
}

#[test]
fn test_unreadable_position_fails_closed() {
    let sample = Ok(Position::new(f64::NAN, f64::NAN));
    let d = evaluate(&sample, &sf_perimeter());

    assert!(!d.within_perimeter);
    assert!(d.distance_km.is_none());
    assert_eq!(d.reason.as_deref(), Some("position could not be measured"));
}

#[test]
fn test_evaluation_is_stateless() {
    // Same inputs, same decision, regardless of call order.
    let perimeter = sf_perimeter();
    let inside = Ok(Position::new(37.7750, -122.4195));
    let failing: Result<Position, LocationError> = Err(LocationError::Timeout);

    let first = evaluate(&inside, &perimeter);
    let _ = evaluate(&failing, &perimeter);
    let again = evaluate(&inside, &perimeter);

    assert_eq!(first.within_perimeter, again.within_perimeter);
    assert_eq!(first.distance_km, again.distance_km);
}
