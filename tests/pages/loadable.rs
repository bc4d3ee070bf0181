use esg_dashboard::EsgError;
use esg_dashboard::pages::{LoadState, Loadable};

#[test]
fn latest_ticket_wins() {
    let mut slot: Loadable<u32> = Loadable::new();
    assert_eq!(slot.state(), &LoadState::Idle);

    let first = slot.begin("Acme Corp");
    let second = slot.begin("Globex");
    assert!(slot.is_loading());
    assert_eq!(slot.key(), Some("Globex"));

    assert!(slot.finish(second, Ok(2)));
    // The superseded load finishes late and is ignored.
    assert!(!slot.finish(first, Ok(1)));
    assert_eq!(slot.value(), Some(&2));
}

#[test]
fn failure_keeps_the_message() {
    let mut slot: Loadable<u32> = Loadable::new();
    let ticket = slot.begin("Acme Corp");
    assert_eq!(ticket.key(), "Acme Corp");

    assert!(slot.finish(ticket, Err(EsgError::Data("bad rows".into()))));
    assert_eq!(slot.value(), None);
    assert_eq!(
        slot.error(),
        Some("Data format unexpected or missing field: bad rows")
    );
}

#[test]
fn cancel_drops_the_in_flight_result() {
    let mut slot: Loadable<u32> = Loadable::new();
    let ticket = slot.begin("Acme Corp");
    slot.cancel();

    assert_eq!(slot.state(), &LoadState::Idle);
    assert!(!slot.finish(ticket, Ok(7)));
    assert_eq!(slot.state(), &LoadState::Idle);
}
