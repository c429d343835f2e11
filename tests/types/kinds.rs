use outcome_rail::{ErrorKind, PropertyKind, SuccessKind};

#[test]
fn error_kind_display_matches_member_name() {
    assert_eq!(ErrorKind::NotFound.to_string(), "NotFound");
    assert_eq!(ErrorKind::GatewayTimeout.to_string(), "GatewayTimeout");
    assert_eq!(ErrorKind::Domain.as_str(), "Domain");
}

#[test]
fn error_kind_parse_round_trips_every_member() {
    for &kind in ErrorKind::ALL {
        assert_eq!(kind.as_str().parse::<ErrorKind>(), Ok(kind));
    }
}

#[test]
fn error_kind_parse_rejects_unknown_name() {
    let err = "Teapot".parse::<ErrorKind>().unwrap_err();
    assert_eq!(err.name(), "Teapot");
    assert_eq!(err.to_string(), "unknown error kind `Teapot`");
}

#[test]
fn error_kind_catalog_is_complete_and_ordered() {
    let catalog: &'static [ErrorKind] = ErrorKind::ALL;
    let names: Vec<&str> = catalog.iter().map(ErrorKind::as_str).collect();
    assert_eq!(
        names,
        [
            "NotFound",
            "WrongArguments",
            "NotValid",
            "NoAuthentication",
            "NotAuthorized",
            "Unknown",
            "ConfigurationError",
            "NetworkError",
            "Timeout",
            "BadGateway",
            "GatewayTimeout",
            "Domain",
        ]
    );
}

#[test]
fn success_kind_defaults_to_ok() {
    assert_eq!(SuccessKind::default(), SuccessKind::Ok);
    assert_eq!(SuccessKind::Created.to_string(), "Created");
}

#[test]
fn property_kind_custom_compares_by_name() {
    assert_eq!(PropertyKind::custom("tenant"), PropertyKind::Custom("tenant".into()));
    assert_ne!(PropertyKind::custom("tenant"), PropertyKind::custom("region"));
    assert_eq!(PropertyKind::custom("tenant").to_string(), "tenant");
    assert_eq!(PropertyKind::CorrelationId.to_string(), "CorrelationId");
}

#[cfg(feature = "serde")]
#[test]
fn kinds_serialize_as_member_names() {
    let json = serde_json::to_string(&ErrorKind::BadGateway).unwrap();
    assert_eq!(json, "\"BadGateway\"");

    let parsed: SuccessKind = serde_json::from_str("\"Accepted\"").unwrap();
    assert_eq!(parsed, SuccessKind::Accepted);

    let custom = serde_json::to_string(&PropertyKind::custom("tenant")).unwrap();
    let back: PropertyKind = serde_json::from_str(&custom).unwrap();
    assert_eq!(back, PropertyKind::custom("tenant"));
}
