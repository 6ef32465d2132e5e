use axum::http::Uri;

use pagelinks::pagination::request::{path_token, query_token};
use pagelinks::pagination::{
    INERT_HREF, Link, LinkPlan, NavigationPosition, Pagination, PaginationConfig, Propagation,
    StaticRequest,
};

fn plan(config: PaginationConfig, url: &str, records: u64, page: Option<i64>) -> LinkPlan {
    let request = StaticRequest::from_url(url);
    let mut p = Pagination::new(config, &request)
        .unwrap()
        .with_records(records)
        .with_records_per_page(10)
        .unwrap();
    if let Some(page) = page {
        p.set_page(page);
    }
    p.plan().unwrap()
}

/// 95 records fit in ten pages, all shown.
#[test]
fn ninety_five_records_show_every_page() {
    let plan = plan(PaginationConfig::default(), "/list", 95, None);
    assert_eq!(plan.total_pages, 10);
    assert_eq!(plan.pages().collect::<Vec<_>>(), (1..=10).collect::<Vec<_>>());
    assert!(!plan.links.contains(&Link::Ellipsis));
}

/// A thousand records at page 50 show both endpoints, two ellipses and a
/// window around page 50.
#[test]
fn thousand_records_page_fifty() {
    let plan = plan(PaginationConfig::default(), "/list", 1000, Some(50));
    let numbers: Vec<String> = plan
        .links
        .iter()
        .filter_map(|l| match l {
            Link::Page { number, active, .. } if *active => Some(format!("[{number}]")),
            Link::Page { number, .. } => Some(number.to_string()),
            Link::Ellipsis => Some("…".to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(
        numbers.join(" "),
        "1 … 46 47 48 49 [50] 51 52 53 54 … 100"
    );
}

#[test]
fn zero_records_plan() {
    let shown = plan(PaginationConfig::default(), "/list", 0, None);
    assert_eq!(shown.pages().count(), 0);
    assert_eq!(
        shown.links,
        vec![
            Link::Previous {
                label: pagelinks::pagination::NavLabel::Previous,
                disabled: true,
                url: INERT_HREF.to_string(),
            },
            Link::Next {
                label: pagelinks::pagination::NavLabel::Next,
                disabled: true,
                url: INERT_HREF.to_string(),
            },
        ]
    );

    let hidden = plan(
        PaginationConfig {
            always_show_navigation: false,
            ..PaginationConfig::default()
        },
        "/list",
        0,
        None,
    );
    assert!(hidden.is_empty());
}

#[test]
fn canonical_page_query_parameter() {
    let plan = plan(PaginationConfig::default(), "/list", 100, Some(5));
    let url_of = |n: u64| {
        plan.links
            .iter()
            .find(|l| matches!(l, Link::Page { number, .. } if *number == n))
            .and_then(Link::url)
            .unwrap()
            .to_string()
    };
    assert_eq!(url_of(1), "/list");
    assert_eq!(url_of(2), "/list?page=2");
}

#[test]
fn reverse_first_read_is_last_page() {
    let config = PaginationConfig {
        reverse: true,
        ..PaginationConfig::default()
    };
    let request = StaticRequest::from_url("/list");
    let mut p = Pagination::new(config, &request)
        .unwrap()
        .with_records(50)
        .with_records_per_page(10)
        .unwrap();
    assert_eq!(p.current_page().unwrap(), 5);
}

/// A record count given in the configuration is enough for reverse order.
#[test]
fn reverse_config_with_records_needs_no_setters() {
    let config = PaginationConfig {
        reverse: true,
        records: Some(50),
        ..PaginationConfig::default()
    };
    let request = StaticRequest::from_url("/list");
    let mut p = Pagination::new(config, &request).unwrap();
    let plan = p.plan().unwrap();
    assert_eq!(plan.current_page, 5);
    assert_eq!(plan.pages().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
}

#[test]
fn oversized_and_fractional_request_pages() {
    let request = StaticRequest::from_url("/list?page=99999999999999999999");
    let mut p = Pagination::new(PaginationConfig::default(), &request)
        .unwrap()
        .with_records(100);
    assert_eq!(p.current_page().unwrap(), 10);

    let request = StaticRequest::from_url("/list?page=3.7");
    let mut p = Pagination::new(PaginationConfig::default(), &request)
        .unwrap()
        .with_records(100);
    assert_eq!(p.current_page().unwrap(), 3);
}

#[test]
fn uri_as_request_context() {
    let uri: Uri = "/list/page7?sort=asc".parse().unwrap();
    let mut config = PaginationConfig::default();
    config.url.method = Propagation::Path;
    let mut p = Pagination::new(config, &uri).unwrap().with_records(200);
    let plan = p.plan().unwrap();
    assert_eq!(plan.active(), Some(7));
    assert!(matches!(
        plan.links.first(),
        Some(Link::Previous { url, .. }) if url == "/list/page6/?sort=asc"
    ));
}

/// Every page's URL carries its own number back, except the canonical page
/// which carries none, in both propagation modes and both orders.
#[test]
fn urls_round_trip_to_their_page() {
    for method in [Propagation::Query, Propagation::Path] {
        for reverse in [false, true] {
            let mut config = PaginationConfig {
                reverse,
                selectable_pages: 101,
                ..PaginationConfig::default()
            };
            config.url.method = method;
            let plan = plan(config, "/books/fiction", 1000, Some(40));
            let canonical = if reverse { 100 } else { 1 };
            for link in &plan.links {
                let Link::Page { number, url, .. } = link else {
                    continue;
                };
                let (path, query) = url.split_once('?').unwrap_or((url.as_str(), ""));
                let token = match method {
                    Propagation::Path => path_token(path, "page"),
                    Propagation::Query => query_token(query, "page").and_then(|v| v.parse().ok()),
                };
                if *number == canonical {
                    assert_eq!(token, None, "{url}");
                } else {
                    assert_eq!(token, Some(*number), "{url}");
                }
            }
        }
    }
}

/// Counts and the single active page hold for every page of a long list,
/// whatever the navigation placement.
#[test]
fn window_invariants_over_long_list() {
    for position in [
        NavigationPosition::Left,
        NavigationPosition::Right,
        NavigationPosition::Outside,
    ] {
        for page in 1..=37 {
            let config = PaginationConfig {
                selectable_pages: 7,
                navigation_position: position,
                ..PaginationConfig::default()
            };
            let plan = plan(config, "/list", 365, Some(page));
            assert_eq!(plan.total_pages, 37);
            assert!(plan.pages().count() <= 7);
            assert_eq!(plan.active(), Some(page as u64));
            assert_eq!(
                plan.links
                    .iter()
                    .filter(|l| matches!(l, Link::Previous { .. } | Link::Next { .. }))
                    .count(),
                2
            );
        }
    }
}
