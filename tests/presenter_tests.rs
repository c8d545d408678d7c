use eventquery::core::presenter::{NO_RESULTS, present};
use eventquery::models::EventRecord;

fn jazz() -> EventRecord {
    EventRecord {
        title: Some("Jazz Night".into()),
        address: Some("Blue Note".into()),
        date_time: Some("01/06/2025,20:30".into()),
        link: Some("https://example.org/jazz".into()),
        rating: Some("4.5".into()),
        about: Some("Live quartet".into()),
    }
}

#[test]
fn test_empty_result() {
    assert_eq!(present(&[]), "No matching events found.");
    assert_eq!(present(&[]), NO_RESULTS);
}

#[test]
fn test_single_block_layout() {
    let expected = "📅 *Event 1*\n\
                    • *Title:* Jazz Night\n\
                    • *Date & Time:* 01/06/2025,20:30\n\
                    • *Location:* Blue Note\n\
                    • *Link:* https://example.org/jazz\n\
                    • *Rating:* 4.5/5\n\
                    • *About:* Live quartet\n";
    assert_eq!(present(&[jazz()]), expected);
}

#[test]
fn test_missing_fields_use_placeholder() {
    let sparse = EventRecord {
        title: Some("Pop-up".into()),
        ..Default::default()
    };
    let text = present(&[sparse]);

    assert!(text.contains("• *Title:* Pop-up\n"));
    assert!(text.contains("• *Location:* N/A\n"));
    assert!(text.contains("• *Rating:* N/A/5\n"));
    assert!(text.contains("• *About:* N/A\n"));
}

#[test]
fn test_blocks_numbered_in_order() {
    let mut second = jazz();
    second.title = Some("Late Show".into());
    let text = present(&[jazz(), second]);

    let first_at = text.find("*Event 1*").expect("first block");
    let second_at = text.find("*Event 2*").expect("second block");
    assert!(first_at < second_at);
    assert!(text.contains("Live quartet\n\n\n📅 *Event 2*"));
    assert!(text[second_at..].contains("Late Show"));
}
