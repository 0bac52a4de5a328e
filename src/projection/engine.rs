//! Core projection engine for yearly retirement income schedules

use chrono::Datelike;
use log::debug;

use super::rollforward::{daily_growth_factor, roll_forward, DateOrderError};
use super::rows::{ProjectionResult, ProjectionRow, ResolvedInput};
use super::state::ProjectionState;
use crate::input::ProjectionInput;

/// Main projection engine
///
/// A pure function from validated input to result: rolls the balance forward
/// to the withdrawal start date, then iterates the yearly recurrence for
/// exactly `years` iterations. There is no early termination on depletion;
/// negative balances keep compounding in later years.
pub struct ProjectionEngine;

impl ProjectionEngine {
    /// Run a full projection for a validated input
    ///
    /// Fails only when the withdrawal start date precedes the valuation date,
    /// which the validator already rejects for inputs built through it.
    pub fn project(input: &ProjectionInput) -> Result<ProjectionResult, DateOrderError> {
        let future = roll_forward(
            input.current_portfolio,
            input.annual_return_rate,
            input.as_of_date,
            input.withdrawal_date,
        )?;
        let start_year = input.withdrawal_date.year();

        debug!(
            "rolled {:.2} forward {} days to {:.2}; projecting {} years from {}",
            input.current_portfolio, future.days, future.value, input.years, start_year
        );

        let mut result = ProjectionResult::new(ResolvedInput {
            input: input.clone(),
            future_value: future.value,
            rollforward_days: future.days,
            start_year,
        });

        let mut state = ProjectionState::new(start_year, future.value);
        for _ in 0..input.years {
            let row = Self::project_year(input, &state);
            let end_balance = row.end_balance;
            result.add_row(row);
            state.advance_year(end_balance);
        }

        Ok(result)
    }

    /// Compute a single projection year from the current state
    fn project_year(input: &ProjectionInput, state: &ProjectionState) -> ProjectionRow {
        // COLA compounds geometrically from the base; year 0 is unescalated
        let ss_income =
            input.ss_annual_income * (1.0 + input.ss_cola).powi(state.year_index as i32);

        // Fixed dollar amount in year 0, rate on the prior end balance afterwards
        let withdrawal = if state.year_index == 0 {
            input.first_year_withdrawal
        } else {
            state.start_balance * input.withdrawal_rate
        };

        // Not clamped at zero; a shortfall carries into later years
        let after_withdrawal_balance = state.start_balance - withdrawal;

        // Each projection year compounds over a fixed 365 days
        let end_balance =
            after_withdrawal_balance * daily_growth_factor(input.annual_return_rate, 365);

        ProjectionRow {
            year: state.year,
            start_balance: state.start_balance,
            withdrawal,
            after_withdrawal_balance,
            end_balance,
            ss_income,
            total_income: withdrawal + ss_income,
        }
    }
}
