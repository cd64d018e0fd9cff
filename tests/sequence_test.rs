use webitof_crm_backend::util::sequence::{CLIENT_ID_FORMAT, QUOTATION_ID_FORMAT};

#[test]
fn client_ids_count_up_from_the_latest() {
    assert_eq!(CLIENT_ID_FORMAT.next(None), "CUST-001");
    assert_eq!(CLIENT_ID_FORMAT.next(Some("CUST-001")), "CUST-002");
    assert_eq!(CLIENT_ID_FORMAT.next(Some("CUST-002")), "CUST-003");
}

#[test]
fn quotation_ids_use_their_own_prefix_and_width() {
    assert_eq!(QUOTATION_ID_FORMAT.next(None), "Q_00001");
    assert_eq!(QUOTATION_ID_FORMAT.next(Some("Q_00009")), "Q_00010");
    assert_eq!(QUOTATION_ID_FORMAT.next(Some("Q_99999")), "Q_100000");
}

#[test]
fn chained_generation_is_strictly_increasing() {
    let mut latest: Option<String> = None;
    for expected in ["CUST-001", "CUST-002", "CUST-003", "CUST-004"] {
        let next = CLIENT_ID_FORMAT.next(latest.as_deref());
        assert_eq!(next, expected);
        latest = Some(next);
    }
}
