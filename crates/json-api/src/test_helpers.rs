//! Test helpers.

use std::sync::Arc;

use abwarehouse::company_codes::{CompanyCode, CompanyCodeUuid};
use abwarehouse_app::{
    context::AppContext,
    domain::{company_codes::MockCompanyCodesService, queries::MockQueryService},
};
use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use crate::state::State;

pub(crate) fn make_company_code(code: &str) -> CompanyCode {
    CompanyCode {
        id: CompanyCodeUuid::new(),
        company_code: code.to_string(),
        company_name: format!("ABWarehouse {code}"),
        city: "New York".to_string(),
        country: "US".to_string(),
        currency: "USD".to_string(),
        language: "EN".to_string(),
        vat_registration_number: None,
        input_tax_code: None,
        output_tax_code: None,
        house_number: Some(123),
        address_line1: None,
        address_line2: None,
        address_line3: None,
        region: None,
        district: None,
        county: None,
        state: None,
        post_code: Some("10001".to_string()),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_company_codes_mock() -> MockCompanyCodesService {
    let mut company_codes = MockCompanyCodesService::new();

    company_codes.expect_list_company_codes().never();
    company_codes.expect_get_company_code().never();
    company_codes.expect_find_by_company_code().never();
    company_codes.expect_create_company_code().never();
    company_codes.expect_update_company_code().never();
    company_codes.expect_delete_company_code().never();
    company_codes.expect_stats().never();

    company_codes
}

fn strict_queries_mock() -> MockQueryService {
    let mut queries = MockQueryService::new();

    queries.expect_execute_query().never();
    queries.expect_schema().never();

    queries
}

fn state(company_codes: MockCompanyCodesService, queries: MockQueryService) -> Arc<State> {
    State::from_app_context(AppContext {
        company_codes: Arc::new(company_codes),
        queries: Arc::new(queries),
    })
}

pub(crate) fn company_codes_service(company_codes: MockCompanyCodesService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(company_codes, strict_queries_mock())))
            .push(route),
    )
}

pub(crate) fn queries_service(queries: MockQueryService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(strict_company_codes_mock(), queries)))
            .push(route),
    )
}
