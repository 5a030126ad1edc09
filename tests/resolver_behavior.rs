//! Behavior-driven tests for free-text identifier resolution.

use krxtrend_tests::*;

fn table() -> ListingTable {
    ListingTable::from_csv(&listing_csv()).expect("listing should parse")
}

#[tokio::test]
async fn listing_loads_once_through_the_transport() {
    // Given: the listing feed behind the fixture transport
    let locations = test_locations();
    let client = FixtureHttpClient::new().with_document(locations.listing(), listing_csv());

    // When
    let table = fetch_listing(&client, &locations)
        .await
        .expect("listing should load");

    // Then: one fetch, four listings
    assert_eq!(table.len(), 4);
    assert_eq!(client.requests().len(), 1);
}

#[test]
fn valid_code_substring_wins_regardless_of_other_text() {
    for input in ["005930", "005930 매수각", "오늘 005930 어때", "카카오 005930"] {
        let listing = resolve(input, &table()).expect("should resolve");
        assert_eq!(listing.name, "삼성전자", "input: {input}");
    }
}

#[test]
fn single_name_substring_resolves_to_its_code() {
    let listing = resolve("카카오 실적 발표", &table()).expect("should resolve");
    assert_eq!(listing.code.as_str(), "035720");
}

#[test]
fn longest_matching_name_wins_the_tie_break() {
    // 삼성전자 is a prefix of 삼성전자우; the longer listed name must win.
    let listing = resolve("삼성전자우 매수", &table()).expect("should resolve");
    assert_eq!(listing.name, "삼성전자우");
    assert_eq!(listing.code.as_str(), "005935");

    // The shorter name still resolves when it is the only match.
    let listing = resolve("삼성전자 매수", &table()).expect("should resolve");
    assert_eq!(listing.name, "삼성전자");
}

#[test]
fn unmatched_input_is_not_found_without_erroring() {
    assert!(resolve("전혀 다른 텍스트", &table()).is_none());
    assert!(resolve("", &table()).is_none());
}

#[test]
fn code_absent_from_table_falls_back_to_name_match() {
    let listing = resolve("123456 카카오", &table()).expect("should resolve");
    assert_eq!(listing.name, "카카오");
}
