mod common;

use bookkeeper::{AccountingSystem, TransactionKind};
use common::{at, books_with_clock};
use regex::Regex;
use rust_decimal_macros::dec;

#[test]
fn ledger_report_renders_transactions_then_balances() {
    let mut books = books_with_clock([at(9, 30, 0), at(9, 0, 0), at(9, 0, 0)]);
    books.create_account("Cash").unwrap();
    books.create_account("Bank").unwrap();
    books
        .record_transaction("Cash", dec!(25.5), TransactionKind::Debit)
        .unwrap();
    books
        .record_transaction("Cash", dec!(100), TransactionKind::Credit)
        .unwrap();
    books
        .record_transaction("Bank", dec!(0.125), TransactionKind::Credit)
        .unwrap();

    insta::assert_snapshot!(books.generate_report().to_string(), @r###"
    2024-06-01 09:00:00 - credit for Cash: credit $100.00
    2024-06-01 09:00:00 - credit for Bank: credit $0.13
    2024-06-01 09:30:00 - debit for Cash: debit $25.50
    Account: Cash, Balance: $74.50
    Account: Bank, Balance: $0.13
    "###);
}

#[test]
fn report_without_transactions_still_lists_accounts() {
    let mut books = AccountingSystem::new();
    books.create_account("Cash").unwrap();

    let lines: Vec<String> = books.generate_report().lines().collect();

    assert_eq!(
        lines,
        vec![
            "There are no transaction records".to_string(),
            "Account: Cash, Balance: $0.00".to_string(),
        ]
    );
}

#[test]
fn wall_clock_timestamps_use_second_precision() {
    let mut books = AccountingSystem::new();
    books.create_account("Cash").unwrap();
    books
        .record_transaction("Cash", dec!(1), TransactionKind::Credit)
        .unwrap();
    books
        .record_transaction("Cash", dec!(2), TransactionKind::Debit)
        .unwrap();

    let pattern = Regex::new(
        r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} - (credit|debit) for Cash: (credit|debit) \$\d+\.\d{2}$",
    )
    .unwrap();
    let report = books.generate_report();
    let transaction_lines: Vec<String> = report.lines().take(2).collect();

    assert_eq!(transaction_lines.len(), 2);
    for line in &transaction_lines {
        assert!(pattern.is_match(line), "unexpected line: {line}");
    }
}

#[test]
fn inventory_report_lists_items_in_insertion_order_with_total() {
    let mut books = AccountingSystem::new();
    books.add_inventory_item("Widget", 5, dec!(2)).unwrap();
    books.add_inventory_item("Gear", 1, dec!(12.345)).unwrap();
    books.add_inventory_item("Widget", 3, dec!(7)).unwrap();

    let lines: Vec<String> = books.inventory_report().lines().collect();

    assert_eq!(
        lines,
        vec![
            "Item: Widget, Quantity: 8, Unit Price: $2.00, Total Value: $16.00".to_string(),
            "Item: Gear, Quantity: 1, Unit Price: $12.35, Total Value: $12.35".to_string(),
            "Total Inventory Value: $28.35".to_string(),
        ]
    );
}

#[test]
fn balance_sheet_lists_accounts_in_registration_order() {
    let mut books = AccountingSystem::new();
    for name in ["Zeta", "Alpha", "Mid"] {
        books.create_account(name).unwrap();
    }
    books
        .record_transaction("Alpha", dec!(3), TransactionKind::Debit)
        .unwrap();

    assert_eq!(
        books.list_account_balances().to_string(),
        "Account: Zeta, Balance: $0.00\nAccount: Alpha, Balance: $-3.00\nAccount: Mid, Balance: $0.00"
    );
}
