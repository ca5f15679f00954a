use super::*;

const SAMPLE: &str = "\
 Workshop Name ,Pincode,Channel,Body Shop,State,Latitude,Longitude
Indiranagar Motors,560038,Dealer,Yes,Karnataka,12.9719,77.6412
Guindy Auto Care,600032,Independent,No,Tamil Nadu,13.0067,80.2206
Koramangala Works,560034,Dealer,No,Karnataka,12.9352,77.6245
Nowhere Garage,560099,Independent,Yes,Karnataka,,77.6000
";

fn sample() -> Dataset {
    read_dataset(SAMPLE.as_bytes()).expect("sample dataset should parse")
}

#[test]
fn headers_are_trimmed_and_lowercased() {
    let ds = sample();
    assert_eq!(
        ds.headers(),
        &[
            "workshop name",
            "pincode",
            "channel",
            "body shop",
            "state",
            "latitude",
            "longitude"
        ]
    );
}

#[test]
fn rows_keep_file_order_and_position() {
    let ds = sample();
    assert_eq!(ds.len(), 4);
    let rows: Vec<usize> = ds.workshops().iter().map(|w| w.row).collect();
    assert_eq!(rows, vec![0, 1, 2, 3]);
    assert_eq!(ds.workshops()[1].state.as_deref(), Some("Tamil Nadu"));
}

#[test]
fn unknown_columns_land_in_extra() {
    let ds = sample();
    assert_eq!(
        ds.workshops()[0].extra.get("workshop name").map(String::as_str),
        Some("Indiranagar Motors")
    );
    assert!(!ds.workshops()[0].extra.contains_key("channel"));
}

#[test]
fn missing_latitude_leaves_location_empty() {
    let ds = sample();
    assert!(ds.workshops()[3].location.is_none());
    assert!(ds.workshops()[0].location.is_some());
}

#[test]
fn out_of_range_and_garbage_coordinates_are_excluded() {
    let csv = "channel,body shop,state,latitude,longitude\n\
               Dealer,Yes,KA,95.0,77.0\n\
               Dealer,Yes,KA,north,77.0\n\
               Dealer,Yes,KA,12.0,77.0\n";
    let ds = read_dataset(csv.as_bytes()).unwrap();
    let located: Vec<bool> = ds.workshops().iter().map(|w| w.location.is_some()).collect();
    assert_eq!(located, vec![false, false, true]);
}

#[test]
fn missing_columns_are_enumerated() {
    let csv = "Pincode,Channel,Latitude\n560038,Dealer,12.9\n";
    let err = read_dataset(csv.as_bytes()).unwrap_err();
    match err {
        DatasetError::MissingColumns(cols) => {
            assert_eq!(cols, vec!["body shop", "state", "longitude"]);
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn missing_columns_message_lists_names() {
    let err = DatasetError::MissingColumns(vec!["state".to_string(), "longitude".to_string()]);
    assert_eq!(
        err.to_string(),
        "missing columns in the dataset: state, longitude"
    );
}

#[test]
fn pincode_column_is_optional() {
    let csv = "channel,body shop,state,latitude,longitude\nDealer,Yes,KA,12.0,77.0\n";
    let ds = read_dataset(csv.as_bytes()).unwrap();
    assert!(ds.workshops()[0].pincode.is_none());
    assert!(ds.locate_pincode("560038").is_none());
}

#[test]
fn locate_pincode_uses_exact_trimmed_match() {
    let ds = sample();
    let loc = ds.locate_pincode(" 600032 ").expect("pincode should resolve");
    assert!((loc.lat - 13.0067).abs() < 1e-9);
    assert!(ds.locate_pincode("60003").is_none());
}

#[test]
fn locate_pincode_skips_rows_without_coordinates() {
    let ds = sample();
    assert!(ds.locate_pincode("560099").is_none());
}

#[test]
fn facets_follow_dashboard_ordering() {
    let facets = sample().facets();
    assert_eq!(facets.channels, vec!["Dealer", "Independent"]);
    assert_eq!(facets.body_shops, vec!["No", "Yes"]);
    assert_eq!(facets.states, vec!["Karnataka", "Tamil Nadu"]);
}

#[test]
fn empty_cells_are_null_not_empty_strings() {
    let csv = "channel,body shop,state,latitude,longitude\n,Yes,,12.0,77.0\n";
    let ds = read_dataset(csv.as_bytes()).unwrap();
    assert!(ds.workshops()[0].channel.is_none());
    assert!(ds.workshops()[0].state.is_none());
    assert!(ds.facets().channels.is_empty());
}

#[test]
fn ragged_rows_are_a_csv_error() {
    let csv = "channel,body shop,state,latitude,longitude\nDealer,Yes\n";
    assert!(matches!(
        read_dataset(csv.as_bytes()),
        Err(DatasetError::Csv(_))
    ));
}

#[test]
fn load_dataset_reports_missing_file() {
    let err = load_dataset(Path::new("/definitely/not/here.csv")).unwrap_err();
    assert!(matches!(err, DatasetError::Io { ref path, .. } if path == "/definitely/not/here.csv"));
}

#[test]
fn sheet_columns_serialize_apart_from_record_fields() {
    let csv = "name,location,channel,body shop,state,latitude,longitude\n\
               Indiranagar Motors,MG Road,Dealer,Yes,Karnataka,12.9719,77.6412\n";
    let ds = read_dataset(csv.as_bytes()).unwrap();
    let text = serde_json::to_string(&ds.workshops()[0]).unwrap();
    assert_eq!(text.matches("\"location\"").count(), 2);

    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(json["location"]["lat"].is_number());
    assert_eq!(json["columns"]["location"], "MG Road");
    assert_eq!(json["columns"]["name"], "Indiranagar Motors");
    assert!(json.get("name").is_none());
}
