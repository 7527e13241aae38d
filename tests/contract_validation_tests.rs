use tradeup_ev::{validate_contract, Item};

fn restricted(i: usize) -> Item {
    Item::new(
        format!("Restricted skin {}", i),
        "The Dust 2 Collection",
        "Restricted",
        0.1 + i as f64 * 0.01,
        250,
    )
    .expect("valid item")
}

fn ten_restricted() -> Vec<Item> {
    (0..10).map(restricted).collect()
}

#[test]
fn ten_plain_items_of_one_rarity_are_valid() {
    assert!(validate_contract(&ten_restricted()).is_empty());
}

#[test]
fn nine_items_report_only_the_count() {
    let items: Vec<Item> = (0..9).map(restricted).collect();
    let violations = validate_contract(&items);
    assert_eq!(violations.len(), 1);
    assert!(violations[0].contains("got 9"), "{}", violations[0]);
}

#[test]
fn partial_stattrak_is_reported() {
    let items: Vec<Item> = ten_restricted()
        .into_iter()
        .enumerate()
        .map(|(i, item)| item.with_stattrak(i < 3))
        .collect();
    let violations = validate_contract(&items);
    assert_eq!(violations.len(), 1);
    assert!(violations[0].contains("inconsistent stattrak"));
}

#[test]
fn half_stattrak_half_souvenir_reports_all_three_problems() {
    let items: Vec<Item> = ten_restricted()
        .into_iter()
        .enumerate()
        .map(|(i, item)| item.with_stattrak(i < 5).with_souvenir(i >= 5))
        .collect();
    let violations = validate_contract(&items);
    assert_eq!(violations.len(), 3);
    assert!(violations.iter().any(|v| v.contains("inconsistent stattrak")));
    assert!(violations.iter().any(|v| v.contains("inconsistent souvenir")));
    assert!(violations
        .iter()
        .any(|v| v.contains("cannot mix stattrak and souvenir")));
}

#[test]
fn all_stattrak_with_wrong_count_reports_both() {
    for n in [9, 11] {
        let items: Vec<Item> = (0..n).map(|i| restricted(i).with_stattrak(true)).collect();
        let violations = validate_contract(&items);
        assert_eq!(violations.len(), 2, "{:?}", violations);
        assert!(violations[0].contains(&format!("got {}", n)));
        assert!(violations[1].contains("inconsistent stattrak"));
    }
}

#[test]
fn all_stattrak_is_valid() {
    let items: Vec<Item> = ten_restricted()
        .into_iter()
        .map(|item| item.with_stattrak(true))
        .collect();
    assert!(validate_contract(&items).is_empty());
}

#[test]
fn mixed_rarity_names_every_rarity() {
    let mut items = ten_restricted();
    items[9] = Item::new("Odd one", "The Dust 2 Collection", "Classified", 0.2, 900).unwrap();
    let violations = validate_contract(&items);
    assert_eq!(violations.len(), 1);
    assert!(violations[0].contains("Classified"));
    assert!(violations[0].contains("Restricted"));
}
