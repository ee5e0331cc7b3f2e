use zeto::tabular::map_payload;
use zeto::zeto_errors::ZetoError;

const CANONICAL_HEADER: &str = "orbper,trandep,trandur,rade,insol,eqt,teff,logg,rad";
const DATA_ROW: &str = "365.25,100,3.5,1.2,1.0,288,5778,4.5,1.0";

#[test]
fn test_canonical_header_row_maps_completely() {
    let payload = format!("{CANONICAL_HEADER}\n{DATA_ROW}");
    let set = map_payload(&payload).unwrap();

    assert_eq!(set.len(), 9);
    assert_eq!(set.get("orbper"), Some(365.25));
    assert_eq!(set.get("trandep"), Some(100.0));
    assert_eq!(set.get("trandur"), Some(3.5));
    assert_eq!(set.get("rade"), Some(1.2));
    assert_eq!(set.get("insol"), Some(1.0));
    assert_eq!(set.get("eqt"), Some(288.0));
    assert_eq!(set.get("teff"), Some(5778.0));
    assert_eq!(set.get("logg"), Some(4.5));
    assert_eq!(set.get("rad"), Some(1.0));
    assert!(set.is_complete());
}

#[test]
fn test_long_form_headers_resolve_through_synonyms() {
    let payload = "orbital_period,transit_depth,transit_duration,planet_radius,insolation_flux,\
                   equilibrium_temp,stellar_temp,stellar_logg,stellar_radius\n\
                   365.25,100,3.5,1.2,1.0,288,5778,4.5,1.0";
    let set = map_payload(payload).unwrap();

    assert!(set.is_complete());
    assert_eq!(set.get("orbper"), Some(365.25));
    assert_eq!(set.get("rad"), Some(1.0));
}

#[test]
fn test_headers_are_case_insensitive() {
    let payload = format!("{}\n{DATA_ROW}", CANONICAL_HEADER.to_uppercase());
    let set = map_payload(&payload).unwrap();
    assert!(set.is_complete());
}

#[test]
fn test_tokens_are_trimmed() {
    let payload = " orbper , trandep ,trandur,rade,insol,eqt, TEFF ,logg,rad\n\
                   365.25 , 100 ,3.5,1.2,1.0,288, 5778 ,4.5,1.0";
    let set = map_payload(payload).unwrap();
    assert!(set.is_complete());
    assert_eq!(set.get("teff"), Some(5778.0));
}

#[test]
fn test_missing_column_reports_incomplete_mapping() {
    let payload = "orbper,trandep,trandur,rade,insol,eqt,logg,rad\n\
                   365.25,100,3.5,1.2,1.0,288,4.5,1.0";
    assert_eq!(
        map_payload(payload),
        Err(ZetoError::IncompleteMapping(vec!["teff"]))
    );
}

#[test]
fn test_empty_value_leaves_key_missing() {
    let payload = format!("{CANONICAL_HEADER}\n365.25,100,3.5,1.2,1.0,,5778,4.5,1.0");
    assert_eq!(
        map_payload(&payload),
        Err(ZetoError::IncompleteMapping(vec!["eqt"]))
    );
}

#[test]
fn test_header_only_payload_is_malformed() {
    assert_eq!(
        map_payload(CANONICAL_HEADER),
        Err(ZetoError::MalformedPayload)
    );
    assert_eq!(
        map_payload(&format!("{CANONICAL_HEADER}\n   \n")),
        Err(ZetoError::MalformedPayload)
    );
}

#[test]
fn test_empty_payload_is_malformed() {
    assert_eq!(map_payload(""), Err(ZetoError::MalformedPayload));
    assert_eq!(map_payload("\n\n"), Err(ZetoError::MalformedPayload));
}

#[test]
fn test_only_first_data_row_is_consumed() {
    let payload = format!("{CANONICAL_HEADER}\n{DATA_ROW}\n1,2,3,4,5,6,7,8,9");
    let set = map_payload(&payload).unwrap();
    assert_eq!(set.get("orbper"), Some(365.25));
    assert_eq!(set.get("rad"), Some(1.0));
}

#[test]
fn test_unknown_headers_are_ignored() {
    let payload = format!("koi_score,{CANONICAL_HEADER}\n0.98,{DATA_ROW}");
    let set = map_payload(&payload).unwrap();
    assert!(set.is_complete());
    assert_eq!(set.get("orbper"), Some(365.25));
}

#[test]
fn test_mapping_does_not_enforce_ranges() {
    // 999999 days is far outside the orbital-period bounds, yet the importer
    // accepts it: range checks are an explicit, separate step.
    let payload = format!("{CANONICAL_HEADER}\n999999,100,3.5,1.2,1.0,288,5778,4.5,1.0");
    let set = map_payload(&payload).unwrap();
    assert_eq!(set.get("orbper"), Some(999999.0));

    assert!(matches!(
        set.validate_ranges(),
        Err(ZetoError::OutOfRange { key: "orbper", .. })
    ));
}
