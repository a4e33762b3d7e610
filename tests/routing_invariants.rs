//! Route table invariants
//!
//! - At most one binding per method and pattern shape
//! - Literal segments beat placeholders, leftmost difference decides
//! - Dispatch never depends on registration order

use axum::http::Method;

use product_api::http_server::service_routes;
use product_api::routing::{RouteError, RouteTable};

fn table(bindings: &[(Method, &'static str)]) -> RouteTable<&'static str> {
    let mut table = RouteTable::new();
    for (method, pattern) in bindings {
        table.register(method.clone(), pattern, *pattern).unwrap();
    }
    table
}

fn winner(table: &RouteTable<&'static str>, method: Method, path: &str) -> &'static str {
    *table.dispatch(&method, path).unwrap().handler()
}

#[test]
fn test_duplicate_shape_rejected_regardless_of_names() {
    let mut table = RouteTable::new();
    table.register(Method::GET, "/api/products/{id}", 1).unwrap();

    let err = table
        .register(Method::GET, "/api/products/{productId}", 2)
        .unwrap_err();
    assert!(matches!(err, RouteError::DuplicateRoute { .. }));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_same_pattern_different_method_allowed() {
    let table = table(&[
        (Method::GET, "/api/products/{id}"),
        (Method::PUT, "/api/products/{id}"),
        (Method::DELETE, "/api/products/{id}"),
    ]);
    assert_eq!(table.len(), 3);
}

#[test]
fn test_literal_beats_placeholder_in_either_order() {
    let forward = table(&[
        (Method::GET, "/api/products/{id}"),
        (Method::GET, "/api/products/featured"),
    ]);
    let reverse = table(&[
        (Method::GET, "/api/products/featured"),
        (Method::GET, "/api/products/{id}"),
    ]);

    for t in [&forward, &reverse] {
        assert_eq!(winner(t, Method::GET, "/api/products/featured"), "/api/products/featured");
        assert_eq!(winner(t, Method::GET, "/api/products/12"), "/api/products/{id}");
    }
}

#[test]
fn test_leftmost_literal_decides() {
    let forward = table(&[
        (Method::GET, "/{kind}/latest"),
        (Method::GET, "/products/{id}"),
    ]);
    let reverse = table(&[
        (Method::GET, "/products/{id}"),
        (Method::GET, "/{kind}/latest"),
    ]);

    for t in [&forward, &reverse] {
        assert_eq!(winner(t, Method::GET, "/products/latest"), "/products/{id}");
        assert_eq!(winner(t, Method::GET, "/orders/latest"), "/{kind}/latest");
    }
}

#[test]
fn test_placeholder_value_extracted() {
    let table = table(&[(Method::GET, "/api/products/{id}")]);
    let matched = table.dispatch(&Method::GET, "/api/products/2").unwrap();

    assert_eq!(matched.params.get("id"), Some("2"));
    assert_eq!(matched.params.len(), 1);
}

#[test]
fn test_segment_count_must_match() {
    let table = table(&[(Method::GET, "/api/products/{id}")]);

    for path in ["/api/products", "/api/products/1/extra", "/"] {
        assert!(matches!(
            table.dispatch(&Method::GET, path),
            Err(RouteError::NoRoute { .. })
        ));
    }
}

#[test]
fn test_service_routes_are_unambiguous() {
    let routes = service_routes().unwrap();

    let show = routes.dispatch(&Method::GET, "/api/products/2").unwrap();
    assert_eq!(show.route.pattern().as_str(), "/api/products/{id}");

    let list = routes.dispatch(&Method::GET, "/api/products").unwrap();
    assert!(list.params.is_empty());

    let root = routes.dispatch(&Method::GET, "/").unwrap();
    assert_eq!(root.route.pattern().as_str(), "/");
}

#[test]
fn test_malformed_patterns_rejected() {
    let mut table: RouteTable<()> = RouteTable::new();
    for pattern in [
        "api/products",
        "/api//products",
        "/api/products/{}",
        "/api/products/{id",
        "/api/{id}/{id}",
        "/api/pre{id}",
    ] {
        assert!(
            matches!(
                table.register(Method::GET, pattern, ()),
                Err(RouteError::InvalidPattern { .. })
            ),
            "{}",
            pattern
        );
    }
    assert!(table.is_empty());
}
