use museo_types::{ArtworkId, ArtworkPage, MuseoError, PageRequest};

const SAMPLE_ENVELOPE: &str = r#"{
  "pagination": {
    "total": 126335,
    "limit": 2,
    "offset": 0,
    "total_pages": 63168,
    "current_page": 1
  },
  "data": [
    {
      "id": 27992,
      "title": "A Sunday on La Grande Jatte",
      "place_of_origin": "Paris",
      "artist_display": "Georges Seurat\nFrench, 1859-1891",
      "inscriptions": null,
      "date_start": 1884,
      "date_end": 1886,
      "image_id": "1adf2696-8489-499b-cad2-821d7fde4b33"
    },
    {
      "id": 28560,
      "title": null,
      "date_start": 0
    }
  ]
}"#;

#[test]
fn envelope_decodes_with_missing_and_null_fields() {
    let page: ArtworkPage = serde_json::from_str(SAMPLE_ENVELOPE).unwrap();

    assert_eq!(page.meta.total, 126_335);
    assert_eq!(page.meta.limit, 2);
    assert_eq!(page.meta.current_page, 1);
    assert_eq!(page.records.len(), 2);

    let first = &page.records[0];
    assert_eq!(first.id, ArtworkId::new(27992));
    assert_eq!(first.title.as_deref(), Some("A Sunday on La Grande Jatte"));
    assert_eq!(first.inscriptions, None);
    assert_eq!(first.date_start, Some(1884));

    // Absent fields deserialize to None; explicit nulls do too.
    let second = &page.records[1];
    assert_eq!(second.title, None);
    assert_eq!(second.place_of_origin, None);
    assert_eq!(second.date_start, Some(0));
    assert_eq!(second.date_end, None);
}

#[test]
fn short_page_signals_exhaustion() {
    let page: ArtworkPage = serde_json::from_str(SAMPLE_ENVELOPE).unwrap();
    assert!(!page.is_short());

    let mut short = page;
    short.records.truncate(1);
    assert!(short.is_short());
}

#[test]
fn page_request_rejects_zero_arguments() {
    assert!(matches!(
        PageRequest::new(0, 10),
        Err(MuseoError::InvalidArg(_))
    ));
    assert!(matches!(
        PageRequest::new(1, 0),
        Err(MuseoError::InvalidArg(_))
    ));
}

#[test]
fn page_request_from_offset_uses_floor_division() {
    let req = PageRequest::from_offset(0, 10).unwrap();
    assert_eq!(req.page(), 1);

    let req = PageRequest::from_offset(20, 10).unwrap();
    assert_eq!(req.page(), 3);

    // Offsets inside a page round down to that page.
    let req = PageRequest::from_offset(29, 10).unwrap();
    assert_eq!(req.page(), 3);

    assert!(matches!(
        PageRequest::from_offset(5, 0),
        Err(MuseoError::InvalidArg(_))
    ));
}

#[test]
fn error_actionability_classification() {
    assert!(MuseoError::transport("connection refused").is_actionable());
    assert!(MuseoError::Parse("missing field `data`".into()).is_actionable());
    assert!(!MuseoError::unsupported("catalog/page").is_actionable());
    assert!(!MuseoError::cancelled("bulk row accumulation").is_actionable());
}
