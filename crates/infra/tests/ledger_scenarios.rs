//! End-to-end ledger scenarios against a workbook file on disk.

use std::collections::HashSet;
use std::fs;

use chrono::NaiveDate;
use tempfile::TempDir;

use stockledger_core::{LedgerError, RecordId, ValidationError};
use stockledger_infra::store::{RecordStore, WorkbookFileStore};
use stockledger_infra::{EngineError, FixedClock, LedgerEngine, ReportRenderer, TextReportRenderer};
use stockledger_inventory::{
    MAX_QUANTITY, MovementInput, MovementKind, StockStatus, Threshold, classify,
};

fn day(d: u32, m: u32, y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn widget(qty: &str, party: &str) -> MovementInput {
    MovementInput::new("A1", "Widget", qty, party, "")
}

fn fresh(dir: &TempDir, today: NaiveDate) -> LedgerEngine<WorkbookFileStore, FixedClock> {
    let store = WorkbookFileStore::create(dir.path().join("estoque.json")).unwrap();
    LedgerEngine::with_clock(store, FixedClock(today))
}

fn reopen(dir: &TempDir, today: NaiveDate) -> LedgerEngine<WorkbookFileStore, FixedClock> {
    let store = WorkbookFileStore::open(dir.path().join("estoque.json")).unwrap();
    LedgerEngine::with_clock(store, FixedClock(today))
}

fn seed(engine: &mut LedgerEngine<WorkbookFileStore, FixedClock>) {
    engine.record_entry(&widget("50", "Acme")).unwrap();
    engine.record_entry(&widget("20", "Acme")).unwrap();
    engine.record_exit(&widget("15", "SiteX")).unwrap();
}

#[test]
fn receive_issue_and_summarize() {
    let dir = TempDir::new().unwrap();
    let mut engine = fresh(&dir, day(10, 1, 2024));
    seed(&mut engine);

    let summary = reopen(&dir, day(10, 1, 2024)).summary().unwrap();
    let a1 = summary.get("A1").unwrap();
    assert_eq!((a1.total_in, a1.total_out, a1.balance), (70, 15, 55));
    assert_eq!(classify(a1, Threshold(10)), StockStatus::Ok);
}

#[test]
fn oversized_exit_leaves_the_file_untouched() {
    let dir = TempDir::new().unwrap();
    let mut engine = fresh(&dir, day(10, 1, 2024));
    seed(&mut engine);
    let before = fs::read(dir.path().join("estoque.json")).unwrap();

    let err = engine.record_exit(&widget("100", "SiteX")).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Ledger(LedgerError::InsufficientStock { available: 55, requested: 100 })
    ));

    assert_eq!(fs::read(dir.path().join("estoque.json")).unwrap(), before);
    let ledger = reopen(&dir, day(10, 1, 2024)).ledger().unwrap();
    assert_eq!(ledger.row_count(), 3);
}

#[test]
fn malformed_quantity_is_rejected_for_both_logs() {
    let dir = TempDir::new().unwrap();
    let mut engine = fresh(&dir, day(10, 1, 2024));
    seed(&mut engine);

    for result in [
        engine.record_entry(&widget("abc", "Acme")),
        engine.record_exit(&widget("abc", "SiteX")),
    ] {
        assert!(matches!(
            result.unwrap_err(),
            EngineError::Ledger(LedgerError::Validation(ValidationError::InvalidQuantity { .. }))
        ));
    }
    assert_eq!(engine.ledger().unwrap().row_count(), 3);
}

#[test]
fn delete_removes_one_row_and_renumbers_nothing() {
    let dir = TempDir::new().unwrap();
    let mut engine = fresh(&dir, day(10, 1, 2024));
    for qty in ["1", "2", "3"] {
        engine.record_entry(&widget(qty, "Acme")).unwrap();
    }
    let before = engine.ledger().unwrap().entries;

    let removed = engine
        .delete_records(MovementKind::Entry, &HashSet::from([RecordId::new(2).unwrap()]))
        .unwrap();
    assert_eq!(removed, 1);

    let after = reopen(&dir, day(10, 1, 2024)).ledger().unwrap().entries;
    assert_eq!(after, vec![before[0].clone(), before[2].clone()]);

    // The max id is still 3, so the next one is 4.
    let next = engine.record_entry(&widget("4", "Acme")).unwrap();
    assert_eq!(next.id.get(), 4);
}

#[test]
fn period_report_over_several_days() {
    let dir = TempDir::new().unwrap();
    fresh(&dir, day(15, 12, 2023)).record_entry(&widget("100", "Acme")).unwrap();
    reopen(&dir, day(1, 1, 2024)).record_entry(&widget("30", "Acme")).unwrap();
    reopen(&dir, day(31, 1, 2024)).record_exit(&widget("40", "SiteX")).unwrap();
    reopen(&dir, day(1, 2, 2024)).record_exit(&widget("5", "SiteX")).unwrap();

    let mut engine = reopen(&dir, day(2, 2, 2024));
    let report = engine.period_report("01/01/2024", "31/01/2024").unwrap();

    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.exits.len(), 1);
    assert_eq!((report.total_entries, report.total_exits), (30, 40));
    assert_eq!(report.closing.balance_of("A1"), 90);

    let doc = TextReportRenderer::new(20).render_period("Relatório de Estoque", &report);
    let out = dir.path().join("janeiro.txt");
    doc.write_to(&out).unwrap();
    assert!(fs::read_to_string(&out).unwrap().contains("Total de saídas: 40"));
}

#[test]
fn hand_edited_rows_are_tolerated_and_preserved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("estoque.json");
    fs::write(
        &path,
        r#"{"sheets": {
            "Entradas": [
                ["ID", "Código", "Produto", "Quantidade",
                 "Data Entrada", "Fornecedor", "Observação"],
                [1, "A1", "Widget", 40, "05/01/2024", "Acme", ""],
                [2, "A1", "Widget", "muitos", "06/01/2024", "Acme", "conferir"],
                [3, "A1", "Widget", 5, "ontem", "Acme", ""]
            ]
        }}"#,
    )
    .unwrap();

    let store = WorkbookFileStore::open(&path).unwrap();
    let mut engine = LedgerEngine::with_clock(store, FixedClock(day(10, 1, 2024)));
    assert_eq!(engine.balance_of("A1").unwrap(), 45);
    assert_eq!(engine.summary_as_of(day(31, 1, 2024)).unwrap().balance_of("A1"), 40);

    engine.record_exit(&widget("45", "SiteX")).unwrap();
    engine.record_entry(&widget("1", "Acme")).unwrap();

    let mut store = WorkbookFileStore::open(&path).unwrap();
    let entries = store.read_log(MovementKind::Entry).unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[1].quantity_text(), "muitos");
    assert_eq!(entries[2].date_text(), "ontem");
    assert_eq!(entries[3].id().map(RecordId::get), Some(4));
    assert_eq!(store.read_log(MovementKind::Exit).unwrap().len(), 1);
}

#[test]
fn record_refused_by_a_failed_save_never_reaches_the_file() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    let path = sub.join("estoque.json");
    let store = WorkbookFileStore::create(&path).unwrap();
    let mut engine = LedgerEngine::with_clock(store, FixedClock(day(10, 1, 2024)));

    fs::remove_dir_all(&sub).unwrap();
    let err = engine.record_entry(&widget("5", "Acme")).unwrap_err();
    assert!(matches!(err, EngineError::Store(_)));

    fs::create_dir(&sub).unwrap();
    assert!(engine.ledger().unwrap().entries.is_empty());

    let bolt = MovementInput::new("B2", "Bolt", "3", "Acme", "");
    engine.record_entry(&bolt).unwrap();

    let mut reopened = WorkbookFileStore::open(&path).unwrap();
    let codes: Vec<_> = reopened
        .read_log(MovementKind::Entry)
        .unwrap()
        .into_iter()
        .map(|r| r.item_code)
        .collect();
    assert_eq!(codes, ["B2"]);
}

#[test]
fn log_holding_the_largest_id_refuses_new_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("estoque.json");
    fs::write(
        &path,
        r#"{"sheets": {
            "Entradas": [
                ["ID", "Código", "Produto", "Quantidade",
                 "Data Entrada", "Fornecedor", "Observação"],
                [9223372036854775807, "A1", "Widget", 40, "05/01/2024", "Acme", ""]
            ]
        }}"#,
    )
    .unwrap();
    let before = fs::read(&path).unwrap();

    let store = WorkbookFileStore::open(&path).unwrap();
    let mut engine = LedgerEngine::with_clock(store, FixedClock(day(10, 1, 2024)));
    let err = engine.record_entry(&widget("1", "Acme")).unwrap_err();
    assert!(matches!(err, EngineError::Ledger(LedgerError::IdsExhausted { .. })));
    assert_eq!(fs::read(&path).unwrap(), before);

    let removed = engine
        .delete_records(MovementKind::Entry, &HashSet::from([RecordId::MAX]))
        .unwrap();
    assert_eq!(removed, 1);
    assert_eq!(engine.record_entry(&widget("1", "Acme")).unwrap().id, RecordId::FIRST);
}

#[test]
fn oversized_quantities_are_refused_and_totals_never_wrap() {
    let dir = TempDir::new().unwrap();
    let mut engine = fresh(&dir, day(10, 1, 2024));

    let err = engine.record_entry(&widget(&i64::MAX.to_string(), "Acme")).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Ledger(LedgerError::Validation(ValidationError::InvalidQuantity { .. }))
    ));

    engine.record_entry(&widget(&MAX_QUANTITY.to_string(), "Acme")).unwrap();
    engine.record_entry(&widget("1", "Acme")).unwrap();
    assert_eq!(engine.summary().unwrap().balance_of("A1"), MAX_QUANTITY + 1);
}
