mod common;

use collection_json::{
    Collection, Data, ErrorObject, Item, Link, Query, Resource, ResourceError, Template,
    ValidationError, CONTENT_TYPE,
};
use common::{friend, setup_tracing};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn to_value(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).expect("marshal output is JSON")
}

#[test]
fn test_new_resource_validates() {
    setup_tracing();
    let resource = Resource::new("/api/");
    assert!(resource.validate().is_ok());
    assert_eq!(CONTENT_TYPE, "application/vnd.collection+json");
}

#[test]
fn test_link_is_marshalled_without_unset_fields() {
    setup_tracing();
    let resource = Resource::new("/api/");
    resource.add_link(Link::new("home", "/api/")).expect("valid link");

    let body = to_value(&resource.marshal().expect("valid resource"));
    assert_eq!(
        body,
        json!({
            "collection": {
                "version": "1.0",
                "href": "/api/",
                "links": [{"rel": "home", "href": "/api/"}]
            }
        })
    );
}

#[test]
fn test_item_without_href_is_rejected() {
    setup_tracing();
    let resource = Resource::new("/api/");
    let item = Item::new("").with_data(vec![Data::new("full-name", "J. Doe")]);

    let err = resource.add_item(item).expect_err("missing href");
    assert_eq!(err.validation(), Some(&ValidationError::EmptyHref));
    assert_eq!(resource.items_len(), 0);
    assert!(resource.snapshot().items.is_none());
}

#[test]
fn test_template_keeps_blank_values() {
    setup_tracing();
    let resource = Resource::new("/api/");
    resource
        .set_template(Template::new(vec![
            Data::new("email", "").with_prompt("Email")
        ]))
        .expect("templates are always valid");

    let body = to_value(&resource.marshal().expect("valid resource"));
    assert_eq!(
        body["collection"]["template"],
        json!({"data": [{"name": "email", "value": "", "prompt": "Email"}]})
    );
}

#[test]
fn test_wrong_version_blocks_marshal() {
    setup_tracing();
    let resource = Resource::new("/api/");
    resource.modify(|c| c.version = "2.0".to_string());

    let expected = ValidationError::WrongVersion {
        found: "2.0".to_string(),
    };
    assert_eq!(resource.validate(), Err(expected.clone()));

    match resource.marshal() {
        Err(ResourceError::Invalid(err)) => assert_eq!(err, expected),
        other => panic!("expected a wrapped validation error, got {other:?}"),
    }
}

#[test]
fn test_rejected_links_never_change_the_count() {
    setup_tracing();
    let resource = Resource::new("/api/");
    let bad = [
        Link::new("", "/api/a"),
        Link::new("home", ""),
        Link::default(),
    ];
    for link in bad {
        assert!(resource.add_link(link).is_err());
        assert_eq!(resource.links_len(), 0);
    }

    resource.add_link(Link::new("home", "/api/")).expect("valid link");
    assert!(resource.add_link(Link::new("", "/api/b")).is_err());
    assert_eq!(resource.links_len(), 1);
}

#[test]
fn test_items_keep_call_order() {
    setup_tracing();
    let resource = Resource::new("http://example.org/friends/");
    let names = ["jdoe", "msmith", "rwilliams"];
    for slug in names {
        resource.add_item(friend(slug, slug)).expect("valid item");
    }
    // Interleaved failure does not disturb order.
    assert!(resource.add_item(Item::new("")).is_err());

    let hrefs: Vec<String> = resource
        .snapshot()
        .items
        .unwrap_or_default()
        .into_iter()
        .map(|item| item.href)
        .collect();
    assert_eq!(
        hrefs,
        names.map(|slug| format!("http://example.org/friends/{slug}"))
    );
}

#[test]
fn test_item_with_bad_link_reports_position() {
    setup_tracing();
    let resource = Resource::new("/api/");
    let item = Item::new("/api/bob").with_links(vec![
        Link::new("user", "/api/user/bob"),
        Link::new("", "/api/user/bob/avatar"),
    ]);

    let err = resource.add_item(item).expect_err("second link has no rel");
    assert_eq!(
        err.to_string(),
        "failed to validate item: link 1: 'rel' attr is empty"
    );
    assert_eq!(
        err.validation().map(ValidationError::root_cause),
        Some(&ValidationError::EmptyRel)
    );
}

#[test]
fn test_validate_is_idempotent() {
    setup_tracing();
    let resource = Resource::new("/api/");
    resource.add_item(friend("jdoe", "J. Doe")).expect("valid item");
    let before = resource.snapshot();

    for _ in 0..3 {
        assert!(resource.validate().is_ok());
    }
    assert_eq!(resource.snapshot(), before);
}

#[test]
fn test_full_document_round_trip() {
    setup_tracing();
    let resource = Resource::new("http://example.org/friends/");
    resource
        .add_link(Link::new("feed", "http://example.org/friends/rss"))
        .expect("valid link");
    resource.add_item(friend("jdoe", "J. Doe")).expect("valid item");
    resource.add_item(friend("msmith", "M. Smith")).expect("valid item");
    resource
        .add_query(
            Query::new("search", "http://example.org/friends/search")
                .with_prompt("Search")
                .with_data(vec![Data::new("search", "")]),
        )
        .expect("valid query");
    resource
        .set_template(Template::new(vec![
            Data::new("full-name", "").with_prompt("Full Name"),
            Data::new("email", "").with_prompt("Email"),
        ]))
        .expect("valid template");
    resource
        .set_error(ErrorObject::new("E42", "partial results").with_title("Degraded"))
        .expect("valid error");

    let bytes = resource.marshal().expect("valid resource");
    let decoded = Resource::from_slice(&bytes).expect("decodes");
    assert_eq!(decoded.into_collection(), resource.snapshot());

    // Pretty output carries the same document.
    let pretty = resource.marshal_pretty().expect("valid resource");
    assert_eq!(to_value(&pretty), to_value(&bytes));
}

#[test]
fn test_decoding_accepts_the_format_guide_example() {
    setup_tracing();
    let body = br#"{ "collection" :
      {
        "version" : "1.0",
        "href" : "http://example.org/friends/",
        "links" : [
          {"rel" : "feed", "href" : "http://example.org/friends/rss"}
        ],
        "items" : [
          {
            "href" : "http://example.org/friends/jdoe",
            "data" : [
              {"name" : "full-name", "value" : "J. Doe", "prompt" : "Full Name"},
              {"name" : "email", "value" : "jdoe@example.org", "prompt" : "Email"}
            ],
            "links" : [
              {"rel" : "blog", "href" : "http://examples.org/blogs/jdoe", "prompt" : "Blog"},
              {"rel" : "avatar", "href" : "http://examples.org/images/jdoe", "prompt" : "Avatar", "render" : "image"}
            ]
          }
        ],
        "template" : {
          "data" : [
            {"name" : "full-name", "value" : "", "prompt" : "Full Name"}
          ]
        }
      }
    }"#;

    let resource = Resource::from_slice(body).expect("valid document");
    let Collection {
        version,
        href,
        links,
        items,
        queries,
        template,
        error,
    } = resource.snapshot();
    assert_eq!(version, "1.0");
    assert_eq!(href, "http://example.org/friends/");
    assert_eq!(links.map(|l| l.len()), Some(1));
    assert_eq!(items, Some(vec![friend("jdoe", "J. Doe")]));
    assert!(queries.is_none());
    assert_eq!(template.map(|t| t.data.len()), Some(1));
    assert!(error.is_none());
}
