use serde_json::json;
use shelfscan_core::Rating;

use super::*;

fn listing(blocks: Value) -> Value {
    json!({ "children_text": blocks, "href": "/dp/B000TEST" })
}

// -----------------------------------------------------------------------
// purify_block_map
// -----------------------------------------------------------------------

#[test]
fn block_map_fills_every_field() {
    let item = listing(json!({
        "h2": "Price, product page\nLogitech M185 Wireless Mouse",
        "div": "4.5 out of 5 stars\n12,345\n$14.99\nList: $19.99\nFREE delivery Tue, Oct 21\nAdd to cart"
    }));
    let record = purify_item(&item, 1).unwrap();

    assert_eq!(record.title.as_deref(), Some("Logitech M185 Wireless Mouse"));
    assert_eq!(record.rating, Some(Rating::Value(4.5)));
    assert_eq!(record.reviews.as_deref(), Some("12,345"));
    assert_eq!(record.price.as_deref(), Some("$14.99"));
    assert_eq!(record.delivery.as_deref(), Some("FREE delivery Tue, Oct 21"));
    assert_eq!(record.badges, vec!["List: $19.99", "Add to cart"]);
    assert_eq!(record.id, 1);
}

#[test]
fn block_map_spanish_listing() {
    let item = listing(json!({
        "span": "Ratón inalámbrico",
        "div": "4,2 de 5 estrellas\n1.024\n$1",
        "p": ".\n49\nEntrega GRATIS el viernes\nAgregar al carrito"
    }));
    let record = purify_item(&item, 7).unwrap();

    assert_eq!(record.title.as_deref(), Some("Ratón inalámbrico"));
    assert_eq!(record.rating, Some(Rating::Value(4.2)));
    assert_eq!(record.reviews.as_deref(), Some("1.024"));
    assert_eq!(record.price.as_deref(), Some("$1.49"));
    assert_eq!(record.delivery.as_deref(), Some("Entrega GRATIS el viernes"));
    assert_eq!(record.badges, vec!["Agregar al carrito"]);
}

#[test]
fn empty_block_map_yields_blank_record() {
    let item = listing(json!({}));
    let record = purify_item(&item, 4).unwrap();
    assert!(record.title.is_none());
    assert!(record.rating.is_none());
    assert!(record.reviews.is_none());
    assert!(record.price.is_none());
    assert!(record.delivery.is_none());
    assert!(record.badges.is_empty());
    assert_eq!(record.id, 4);
}

// -----------------------------------------------------------------------
// purify_item skip reasons
// -----------------------------------------------------------------------

#[test]
fn skip_non_object_item() {
    assert_eq!(purify_item(&json!("text"), 1), Err(SkipReason::NotAnObject));
    assert_eq!(purify_item(&json!(null), 1), Err(SkipReason::NotAnObject));
}

#[test]
fn skip_missing_children_text() {
    assert_eq!(
        purify_item(&json!({ "href": "/dp/X" }), 1),
        Err(SkipReason::MissingChildrenText)
    );
}

#[test]
fn skip_children_text_not_object() {
    assert_eq!(
        purify_item(&json!({ "children_text": "flat string" }), 1),
        Err(SkipReason::ChildrenTextNotAnObject)
    );
}

// -----------------------------------------------------------------------
// batch
// -----------------------------------------------------------------------

#[test]
fn report_keeps_input_positions_and_reasons() {
    let items = vec![
        json!({ "href": "/dp/A" }),
        listing(json!({ "div": "Mouse" })),
        json!(42),
        listing(json!({ "div": "Keyboard" })),
    ];
    let report = purify_with_report(&items);

    assert_eq!(report.raw_items, 4);
    assert_eq!(report.structured_items(), 2);
    let ids: Vec<usize> = report.records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 4]);
    assert_eq!(
        report.skipped,
        vec![
            SkippedItem {
                id: 1,
                reason: SkipReason::MissingChildrenText
            },
            SkippedItem {
                id: 3,
                reason: SkipReason::NotAnObject
            },
        ]
    );
}

#[test]
fn purify_items_matches_report_records() {
    let items = vec![listing(json!({ "div": "Mouse\n$5.00" })), json!([])];
    assert_eq!(purify_items(&items), purify_with_report(&items).records);
}

// -----------------------------------------------------------------------
// parse_items
// -----------------------------------------------------------------------

#[test]
fn parse_items_accepts_array() {
    let items = parse_items(r#"[{"children_text": {"div": "x"}}, 3]"#).unwrap();
    assert_eq!(items.len(), 2);
}

#[test]
fn parse_items_rejects_object_top_level() {
    let err = parse_items(r#"{"items": []}"#).unwrap_err();
    assert!(matches!(err, PurifyError::NotAnArray { found } if found == "an object"));
}

#[test]
fn parse_items_rejects_malformed_json() {
    let err = parse_items("[{").unwrap_err();
    assert!(
        matches!(err, PurifyError::Deserialize { ref context, .. } if context == "scraped items")
    );
}

#[test]
fn skip_reason_serializes_snake_case() {
    let json = serde_json::to_string(&SkipReason::ChildrenTextNotAnObject).unwrap();
    assert_eq!(json, "\"children_text_not_an_object\"");
}
