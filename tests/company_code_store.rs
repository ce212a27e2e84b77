//! Integration tests for the company code store lifecycle.
//!
//! Covers create, lookup, filtering, update and delete against a store seeded
//! from the bundled fixture set (US01, US02, DE01, GB01, JP01).

use testresult::TestResult;

use abwarehouse::prelude::*;

fn seeded() -> Result<CompanyCodeStore, FixtureError> {
    CompanyCodesFixture::bundled()?.into_store()
}

fn new_company(code: &str) -> NewCompanyCode {
    NewCompanyCode {
        company_code: Some(code.to_string()),
        company_name: Some("ABWarehouse France SAS".to_string()),
        city: Some("Paris".to_string()),
        country: Some("FR".to_string()),
        currency: Some("EUR".to_string()),
        language: Some("FR".to_string()),
        ..NewCompanyCode::default()
    }
}

#[test]
fn created_record_is_found_by_id_and_code() -> TestResult {
    let mut store = seeded()?;

    let created = store.create(new_company("FR01"))?;

    assert_eq!(created.company_code, "FR01");
    assert_eq!(store.find_by_id(created.id).as_ref(), Some(&created));
    assert_eq!(store.find_by_company_code("FR01"), Some(created));
    assert_eq!(store.len(), 6);

    Ok(())
}

#[test]
fn duplicate_create_leaves_count_unchanged() -> TestResult {
    let mut store = seeded()?;

    let result = store.create(new_company("US01"));

    assert!(matches!(result, Err(StoreError::DuplicateKey(_))));
    assert_eq!(store.len(), 5);

    Ok(())
}

#[test]
fn country_filter_returns_only_that_country() -> TestResult {
    let store = seeded()?;

    let us = store.find_all(&CompanyCodeFilters {
        country: Some("US".to_string()),
        ..CompanyCodeFilters::default()
    });

    assert_eq!(us.len(), 2);
    assert!(us.iter().all(|record| record.country == "US"));

    Ok(())
}

#[test]
fn update_of_unknown_id_changes_nothing() -> TestResult {
    let mut store = seeded()?;
    let before = store.find_all(&CompanyCodeFilters::default());

    let result = store.update(
        CompanyCodeUuid::new(),
        CompanyCodeUpdate {
            city: Some("Nowhere".to_string()),
            ..CompanyCodeUpdate::default()
        },
    )?;

    assert_eq!(result, None);
    assert_eq!(store.find_all(&CompanyCodeFilters::default()), before);

    Ok(())
}

#[test]
fn deleted_record_is_gone() -> TestResult {
    let mut store = seeded()?;
    let de01 = store.find_by_company_code("DE01").ok_or("DE01 missing")?;

    assert!(store.delete(de01.id));
    assert_eq!(store.find_by_id(de01.id), None);
    assert_eq!(store.stats().total_companies, 4);

    Ok(())
}

#[test]
fn stats_reflect_seeded_data() -> TestResult {
    let stats = seeded()?.stats();

    assert_eq!(stats.total_companies, 5);
    assert_eq!(
        stats.by_country.iter().find(|c| c.country == "US").map(|c| c.count),
        Some(2)
    );
    assert_eq!(
        stats.by_currency.iter().find(|c| c.currency == "EUR").map(|c| c.count),
        Some(1)
    );

    Ok(())
}
