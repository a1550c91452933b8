use syndicate_core::{
    AttributeResolver, BaseDefaults, ConfigError, Hooks, MAX_COUNT, OutputMode, Scheme, Surface,
};

mod common;

#[test]
fn test_empty_attributes_use_defaults() {
    let config = common::dining_config(&[]);

    assert_eq!(config.host(), "www.uams.edu");
    assert_eq!(config.path(), "/");
    assert_eq!(config.scheme(), Scheme::Http);
    assert_eq!(config.location_id(), "1");
    assert_eq!(config.output(), OutputMode::List);
    assert_eq!(config.category(), None);
    assert_eq!(config.count(), None);
    assert_eq!(config.offset(), 0);
    assert_eq!(config.date_format(), "F j, Y");
    assert!(!config.show_category_title());
}

#[test]
fn test_count_is_clamped() {
    let config = common::dining_config(&[("count", "500")]);
    assert_eq!(config.count(), Some(MAX_COUNT));

    let config = common::dining_config(&[("count", "25")]);
    assert_eq!(config.count(), Some(25));
}

#[test]
fn test_negative_offset_becomes_positive() {
    let config = common::dining_config(&[("offset", "-3")]);
    assert_eq!(config.offset(), 3);
}

#[test]
fn test_site_overrides_host() {
    let config = common::dining_config(&[
        ("host", "ignored.example.org"),
        ("site", "https://menus.example.org/campus"),
    ]);

    assert_eq!(config.host(), "menus.example.org");
    assert_eq!(config.path(), "/campus/");
    assert_eq!(config.scheme(), Scheme::Https);
}

#[test]
fn test_empty_host_is_config_error() {
    let result = AttributeResolver::default()
        .resolve([("host", ""), ("site", "")], &Surface::dining());

    match result {
        Err(err) => {
            assert_eq!(err, ConfigError::EmptyHost);
            assert!(err.is_host_error());
        }
        Ok(config) => panic!("Expected EmptyHost, got {config:?}"),
    }
}

#[test]
fn test_unknown_keys_are_dropped() {
    let config = common::dining_config(&[("bogus", "1"), ("type", "full")]);

    assert_eq!(config.extra("bogus"), None);
    // `type` is an extended key on the dining surface
    assert_eq!(config.extra("type"), Some("full"));
    assert_eq!(config.output(), OutputMode::Full);
}

#[test]
fn test_caller_keys_are_case_insensitive() {
    let config = common::dining_config(&[("LOC", "7"), ("Output", "cards")]);

    assert_eq!(config.location_id(), "7");
    assert_eq!(config.output(), OutputMode::Cards);
}

#[test]
fn test_cat_wins_over_category() {
    let config = common::dining_config(&[("category", "2"), ("cat", "5")]);
    assert_eq!(config.category(), Some("5"));
}

#[test]
fn test_unknown_output_falls_back_to_surface_default() {
    let config = common::dining_config(&[("output", "carousel")]);
    assert_eq!(config.output(), OutputMode::List);

    let feed = AttributeResolver::default()
        .resolve([("output", "carousel")], &Surface::dining_feed())
        .unwrap();
    assert_eq!(feed.output(), OutputMode::Json);
}

#[test]
fn test_local_scheme_is_kept() {
    let config = common::dining_config(&[("scheme", "local")]);
    assert!(config.scheme().is_local());
}

#[test]
fn test_fingerprint_changes_with_attributes() {
    let a = common::dining_config(&[("loc", "1")]);
    let b = common::dining_config(&[("loc", "2")]);
    let c = common::dining_config(&[("loc", "1")]);

    assert_ne!(a.fingerprint(), b.fingerprint());
    assert_eq!(a.fingerprint(), c.fingerprint());
}

#[test]
fn test_defaults_hook_changes_base() {
    let hooks = Hooks::new().on_defaults(|defaults: &mut syndicate_core::AttributeSet| {
        defaults.insert("host", "dining.example.edu");
    });
    let resolver = AttributeResolver::new(BaseDefaults::standard(), hooks);

    let config = resolver
        .resolve(std::iter::empty::<(&str, &str)>(), &Surface::dining())
        .unwrap();
    assert_eq!(config.host(), "dining.example.edu");
}

#[test]
fn test_local_aliases_for_extended_keys() {
    let defaults = AttributeResolver::default().defaults_for(&Surface::dining());

    assert!(defaults.contains_key("type"));
    assert!(defaults.contains_key("local_type"));
    assert!(!defaults.contains_key("local_host"));
}

#[test]
fn test_resolve_is_idempotent() {
    let resolver = AttributeResolver::default();
    let attrs = [("loc", "4"), ("cat", "B"), ("output", "full"), ("count", "20")];

    let first = resolver.resolve(attrs, &Surface::dining()).unwrap();
    let second = resolver.resolve(attrs, &Surface::dining()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.fingerprint(), second.fingerprint());
}
