//! Tests for the rent-vs-buy projection series
//!
//! These tests verify:
//! - Cumulative rent monotonicity (strict with growth, linear without)
//! - Year-1 accounting (down payment in, appreciation netted out)
//! - Horizon length and assumption validation

use crate::affordability::calculate;
use crate::error::InputError;
use crate::model::{AffordabilityInput, ProjectionAssumptions};
use crate::projection::{ProjectionParams, project};

fn example_params(assumptions: ProjectionAssumptions) -> ProjectionParams {
    let input = AffordabilityInput::default();
    let result = calculate(&input).unwrap();
    ProjectionParams::from_affordability(&input, &result, assumptions)
}

#[test]
fn test_default_horizon_is_ten_years() {
    let series = project(&example_params(ProjectionAssumptions::default())).unwrap();

    assert_eq!(series.points.len(), 10);
    assert_eq!(series.points.first().unwrap().year, 1);
    assert_eq!(series.points.last().unwrap().year, 10);
}

#[test]
fn test_cumulative_rent_strictly_increasing_with_growth() {
    let series = project(&example_params(ProjectionAssumptions::default())).unwrap();

    let mut prev = 0.0;
    for point in &series.points {
        assert!(
            point.cumulative_rent_cost > prev,
            "rent series not strictly increasing at year {}",
            point.year
        );
        prev = point.cumulative_rent_cost;
    }
}

#[test]
fn test_zero_growth_rent_is_linear() {
    let assumptions = ProjectionAssumptions {
        rent_growth: 0.0,
        ..ProjectionAssumptions::default()
    };
    let params = example_params(assumptions);
    let series = project(&params).unwrap();

    for point in &series.points {
        let expected = params.affordable_yearly_rent * f64::from(point.year);
        assert!(
            (point.cumulative_rent_cost - expected).abs() < 1e-6,
            "year {} expected {expected} got {}",
            point.year,
            point.cumulative_rent_cost
        );
    }
}

#[test]
fn test_year_one_accounting() {
    let params = example_params(ProjectionAssumptions::default());
    let series = project(&params).unwrap();
    let first = &series.points[0];

    // Year 1: no appreciation yet, so net buy cost is one year of payments
    // plus the down payment
    let expected_buy = series.monthly_mortgage_payment * 12.0 + params.down_payment;
    assert!((first.cumulative_buy_cost - expected_buy).abs() < 1e-6);
    assert!((first.cumulative_rent_cost - params.affordable_yearly_rent).abs() < 1e-6);
}

#[test]
fn test_appreciation_reduces_net_buy_cost() {
    let flat = ProjectionAssumptions {
        appreciation: 0.0,
        ..ProjectionAssumptions::default()
    };
    let appreciating = ProjectionAssumptions::default();

    let flat_series = project(&example_params(flat)).unwrap();
    let appr_series = project(&example_params(appreciating)).unwrap();

    for (a, b) in flat_series.points.iter().zip(&appr_series.points).skip(1) {
        assert!(
            b.cumulative_buy_cost < a.cumulative_buy_cost,
            "appreciation did not reduce net cost at year {}",
            a.year
        );
    }
}

#[test]
fn test_zero_rate_mortgage_payment() {
    let input = AffordabilityInput {
        mortgage_annual_rate: 0.0,
        ..AffordabilityInput::default()
    };
    let result = calculate(&input).unwrap();
    let params =
        ProjectionParams::from_affordability(&input, &result, ProjectionAssumptions::default());
    let series = project(&params).unwrap();

    // principal / n with no interest
    let expected = result.max_mortgage / f64::from(params.term_months);
    assert!((series.monthly_mortgage_payment - expected).abs() < 1e-9);
}

#[test]
fn test_degenerate_affordability_projects_zero_mortgage() {
    let input = AffordabilityInput {
        monthly_debt: 10_000.0,
        ..AffordabilityInput::default()
    };
    let result = calculate(&input).unwrap();
    assert!(result.is_degenerate());

    let params =
        ProjectionParams::from_affordability(&input, &result, ProjectionAssumptions::default());
    let series = project(&params).unwrap();

    assert_eq!(series.monthly_mortgage_payment, 0.0);
}

#[test]
fn test_breakeven_detection() {
    // Strong appreciation drives the net buy cost below cumulative rent
    let assumptions = ProjectionAssumptions {
        rent_growth: 0.05,
        appreciation: 0.10,
        horizon_years: 10,
    };
    let series = project(&example_params(assumptions)).unwrap();

    if let Some(year) = series.breakeven_year() {
        let point = &series.points[usize::from(year) - 1];
        assert!(point.cumulative_buy_cost < point.cumulative_rent_cost);
        // No earlier year qualifies
        for earlier in &series.points[..usize::from(year) - 1] {
            assert!(earlier.cumulative_buy_cost >= earlier.cumulative_rent_cost);
        }
    }
}

#[test]
fn test_rejects_invalid_assumptions() {
    let zero_horizon = ProjectionAssumptions {
        horizon_years: 0,
        ..ProjectionAssumptions::default()
    };
    assert!(matches!(
        project(&example_params(zero_horizon)),
        Err(InputError::ZeroHorizon)
    ));

    let collapsing = ProjectionAssumptions {
        rent_growth: -1.0,
        ..ProjectionAssumptions::default()
    };
    assert!(matches!(
        project(&example_params(collapsing)),
        Err(InputError::RateBelowFloor { .. })
    ));

    let mut params = example_params(ProjectionAssumptions::default());
    params.term_months = 0;
    assert!(matches!(
        project(&params),
        Err(InputError::NonPositiveTerm(0))
    ));
}
