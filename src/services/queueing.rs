//! M/M/c queueing model and staffing cross-check

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::Direction,
        queue::{CrossCheckReport, CrossCheckRow, QueueMetrics},
        requirement::DailyRequirementReport,
    },
};

/// Default ceiling of the minimum-server search.
///
/// A policy bound, not a mathematical one; override it through
/// `engine.max_servers`.
pub const DEFAULT_MAX_SERVERS: u32 = 100;

/// Steady-state figures of an M/M/c queue.
///
/// `lambda` is the arrival rate and `mu` the per-server service rate, both
/// per hour; `servers` is the crew size. Waiting times are returned in
/// minutes. A saturated system (`rho >= 1`) is reported as unstable with
/// infinite queue figures rather than as an error.
pub fn metrics(lambda: f64, mu: f64, servers: u32) -> AppResult<QueueMetrics> {
    if servers == 0 {
        return Err(AppError::InvalidParameter(
            "server count must be at least 1".to_string(),
        ));
    }
    if !(mu > 0.0) || !mu.is_finite() {
        return Err(AppError::InvalidParameter(format!(
            "service rate must be positive, got {}",
            mu
        )));
    }
    if !(lambda >= 0.0) || !lambda.is_finite() {
        return Err(AppError::InvalidParameter(format!(
            "arrival rate must be a non-negative number, got {}",
            lambda
        )));
    }

    let c = servers as f64;
    let rho = lambda / (c * mu);
    if rho >= 1.0 {
        return Ok(QueueMetrics::unstable(rho));
    }

    // Offered traffic
    let a = lambda / mu;
    let waiting_probability = erlang_c(a, servers, rho);

    let lq = waiting_probability * rho / (1.0 - rho);
    let wq = if lambda > 0.0 { lq / lambda } else { 0.0 };
    let l = lq + a;
    let w = wq + 1.0 / mu;

    Ok(QueueMetrics {
        rho,
        stable: true,
        waiting_probability,
        lq,
        wq: wq * 60.0,
        l,
        w: w * 60.0,
    })
}

/// Erlang C waiting probability for offered traffic `a` on `servers` servers.
///
/// Built from the Erlang B recursion `B(n) = a·B(n-1) / (n + a·B(n-1))`,
/// which scales each term by `a/n` instead of forming `a^n` and `n!`, so it
/// stays finite for large crews and loads. Equivalent to
/// `P0 · a^c / (c! · (1 - rho))`.
fn erlang_c(a: f64, servers: u32, rho: f64) -> f64 {
    let blocking = (1..=servers).fold(1.0_f64, |b, n| {
        let ab = a * b;
        ab / (n as f64 + ab)
    });

    blocking / (1.0 - rho * (1.0 - blocking))
}

/// Smallest crew whose mean queue wait is within `target_wq_minutes`.
///
/// Returns 0 for no load. The search starts at the smallest crew that can be
/// stable and stops at `max_servers`, which is returned as a best-effort
/// answer when the target is never met.
pub fn minimum_servers(
    lambda: f64,
    mu: f64,
    target_wq_minutes: f64,
    max_servers: u32,
) -> AppResult<u32> {
    if !(lambda > 0.0) {
        return Ok(0);
    }
    if !(mu > 0.0) || !mu.is_finite() {
        return Err(AppError::InvalidParameter(format!(
            "service rate must be positive, got {}",
            mu
        )));
    }

    let start = (lambda / mu).ceil().max(1.0);
    if start >= max_servers as f64 {
        tracing::warn!(
            lambda,
            mu,
            max_servers,
            "Load needs more servers than the search ceiling"
        );
        return Ok(max_servers);
    }

    let mut servers = start as u32;
    while servers < max_servers {
        let m = metrics(lambda, mu, servers)?;
        if m.stable && m.wq <= target_wq_minutes {
            return Ok(servers);
        }
        servers += 1;
    }

    tracing::warn!(
        lambda,
        mu,
        target_wq_minutes,
        max_servers,
        "Target wait not reached below the search ceiling"
    );
    Ok(max_servers)
}

/// Evaluates the queue model against the crews of a computed report.
///
/// The daily report never calls this; it is an explicit second opinion.
#[derive(Debug, Clone, Copy)]
pub struct QueueService {
    max_servers: u32,
}

impl QueueService {
    pub fn new(max_servers: u32) -> Self {
        Self { max_servers }
    }

    pub fn max_servers(&self) -> u32 {
        self.max_servers
    }

    pub fn metrics(&self, lambda: f64, mu: f64, servers: u32) -> AppResult<QueueMetrics> {
        metrics(lambda, mu, servers)
    }

    pub fn minimum_servers(&self, lambda: f64, mu: f64, target_wq_minutes: f64) -> AppResult<u32> {
        minimum_servers(lambda, mu, target_wq_minutes, self.max_servers)
    }

    /// Compare each loaded zone-hour's heuristic crew with the queue model.
    ///
    /// The arrival rate is the zone's load left after automated gates and the
    /// service rate is the blended rate the report recorded.
    pub fn cross_check(
        &self,
        report: &DailyRequirementReport,
        target_wq_minutes: f64,
    ) -> AppResult<CrossCheckReport> {
        let manual_share = 1.0 - report.parameters.auto_gate_ratio;
        let mut rows = Vec::new();

        for hour in &report.hourly_requirement {
            for direction in Direction::ALL {
                for (zone, requirement) in hour.zones(direction) {
                    if requirement.required_staff == 0 {
                        continue;
                    }

                    let lambda = requirement.passengers as f64 * manual_share;
                    let mu = requirement.effective_service_rate;
                    let heuristic_metrics = self.metrics(lambda, mu, requirement.required_staff)?;
                    let queue_model_staff = self.minimum_servers(lambda, mu, target_wq_minutes)?;
                    let meets_target =
                        heuristic_metrics.stable && heuristic_metrics.wq <= target_wq_minutes;

                    rows.push(CrossCheckRow {
                        hour_label: hour.hour_label.clone(),
                        direction,
                        zone: *zone,
                        manual_passengers: lambda,
                        effective_service_rate: mu,
                        heuristic_staff: requirement.required_staff,
                        queue_model_staff,
                        heuristic_metrics,
                        meets_target,
                    });
                }
            }
        }

        let shortfalls = rows.iter().filter(|r| !r.meets_target).count();
        tracing::debug!(
            report_id = %report.id,
            rows = rows.len(),
            shortfalls,
            "Cross-checked staffing against queue model"
        );

        Ok(CrossCheckReport {
            target_wait_minutes: target_wq_minutes,
            rows,
            shortfalls,
        })
    }
}
