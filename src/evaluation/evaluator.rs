//! Route evaluator that computes travel time, demand, cost, and feasibility.

use crate::distance::TravelMatrix;
use crate::error::{Result, RouteGenError};
use crate::models::{Route, RouteSet, Vehicle, Violation, ViolationType};

/// Metrics of one priced route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEvaluation {
    /// Driving time: `Σ(edges ⊙ travel) / 2`.
    pub travel_time: f64,
    /// Total demand of the non-hub nodes on the route.
    pub demand: f64,
    /// Travel time plus unloading time.
    pub duration: f64,
    /// Shift cost of `duration`.
    pub cost: f64,
    /// Non-hub nodes served, ascending.
    pub coverage: Vec<usize>,
}

/// Prices candidate routes for the downstream covering optimizer.
///
/// Halving the weighted edge sum averages the two travel directions of a
/// cycle; a direct route's doubled edge makes the same formula yield its
/// round-trip time.
///
/// # Examples
///
/// ```
/// use u_routegen::distance::TravelMatrix;
/// use u_routegen::evaluation::RouteEvaluator;
/// use u_routegen::models::{Route, Vehicle};
///
/// let tm = TravelMatrix::from_data(2, vec![0.0, 600.0, 600.0, 0.0]).unwrap();
/// let demands = [0.0, 4.0];
/// let vehicle = Vehicle::default();
/// let eval = RouteEvaluator::new(&tm, &demands, &vehicle, 0).unwrap();
///
/// let (metrics, violations) = eval.evaluate(&Route::direct("r0", 2, 0, 1, 2)).unwrap();
/// assert_eq!(metrics.travel_time, 1200.0);
/// assert_eq!(metrics.duration, 1200.0 + 4.0 * 450.0);
/// assert!(violations.is_empty());
/// ```
pub struct RouteEvaluator<'a> {
    travel: &'a TravelMatrix,
    demands: &'a [f64],
    vehicle: &'a Vehicle,
    hub: usize,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator; `demands` has one entry per node.
    pub fn new(
        travel: &'a TravelMatrix,
        demands: &'a [f64],
        vehicle: &'a Vehicle,
        hub: usize,
    ) -> Result<Self> {
        if demands.len() != travel.size() {
            return Err(RouteGenError::DimensionMismatch {
                expected: travel.size(),
                found: demands.len(),
            });
        }
        if hub >= travel.size() {
            return Err(RouteGenError::InvalidParameter(format!(
                "hub index {hub} is out of range for {} nodes",
                travel.size()
            )));
        }
        Ok(Self {
            travel,
            demands,
            vehicle,
            hub,
        })
    }

    /// Prices one route. Violations carry route index 0.
    ///
    /// Fails with `DimensionMismatch` if the route was built for a different
    /// number of nodes.
    pub fn evaluate(&self, route: &Route) -> Result<(RouteEvaluation, Vec<Violation>)> {
        let edges = route.edges();
        let n = self.travel.size();
        if edges.size() != n {
            return Err(RouteGenError::DimensionMismatch {
                expected: n,
                found: edges.size(),
            });
        }

        let mut weighted = 0.0;
        for i in 0..n {
            for j in 0..n {
                let w = edges.get(i, j);
                if w != 0 {
                    weighted += f64::from(w) * self.travel.get(i, j);
                }
            }
        }
        let travel_time = weighted / 2.0;

        let coverage: Vec<usize> = route
            .stops()
            .into_iter()
            .filter(|&i| i != self.hub)
            .collect();
        let demand: f64 = coverage.iter().map(|&i| self.demands[i]).sum();
        let duration = travel_time + demand * self.vehicle.unload_time_per_unit();
        let cost = self.vehicle.cost_for(duration);

        let mut violations = Vec::new();
        if demand > self.vehicle.capacity() {
            violations.push(Violation::new(ViolationType::CapacityExceeded {
                route_index: 0,
                demand,
                capacity: self.vehicle.capacity(),
            }));
        }
        if let Some(max_t) = self.vehicle.max_duration() {
            if duration > max_t {
                violations.push(Violation::new(ViolationType::MaxDurationExceeded {
                    route_index: 0,
                    duration,
                    max_duration: max_t,
                }));
            }
        }

        Ok((
            RouteEvaluation {
                travel_time,
                demand,
                duration,
                cost,
                coverage,
            },
            violations,
        ))
    }

    /// Prices every route in a set, tagging violations with route indices.
    pub fn evaluate_all(
        &self,
        routes: &RouteSet,
    ) -> Result<(Vec<RouteEvaluation>, Vec<Violation>)> {
        if routes.size() != self.travel.size() {
            return Err(RouteGenError::DimensionMismatch {
                expected: self.travel.size(),
                found: routes.size(),
            });
        }
        let mut metrics = Vec::with_capacity(routes.len());
        let mut all_violations = Vec::new();
        for (idx, route) in routes.iter().enumerate() {
            let (m, violations) = self.evaluate(route)?;
            metrics.push(m);
            all_violations.extend(violations.into_iter().map(|v| v.at_route(idx)));
        }
        Ok((metrics, all_violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeMatrix;

    fn setup() -> (TravelMatrix, Vec<f64>) {
        let tm = TravelMatrix::from_rows(&[
            vec![0.0, 600.0, 900.0],
            vec![700.0, 0.0, 300.0],
            vec![900.0, 300.0, 0.0],
        ])
        .expect("valid");
        (tm, vec![0.0, 5.0, 8.0])
    }

    fn triangle() -> Route {
        let mut edges = EdgeMatrix::new(3);
        edges.set_edge(0, 1, 1);
        edges.set_edge(1, 2, 1);
        edges.set_edge(0, 2, 1);
        Route::combined("t", vec![0], edges)
    }

    #[test]
    fn test_triangle_averages_directions() {
        let (tm, demands) = setup();
        let vehicle = Vehicle::default();
        let eval = RouteEvaluator::new(&tm, &demands, &vehicle, 0).expect("valid");
        let (m, violations) = eval.evaluate(&triangle()).expect("sized");
        // (600 + 700 + 900 + 900 + 300 + 300) / 2
        assert!((m.travel_time - 1850.0).abs() < 1e-10);
        assert_eq!(m.demand, 13.0);
        assert_eq!(m.coverage, vec![1, 2]);
        assert!((m.duration - (1850.0 + 13.0 * 450.0)).abs() < 1e-10);
        assert!((m.cost - m.duration / 3600.0 * 225.0).abs() < 1e-10);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_direct_round_trip() {
        let (tm, demands) = setup();
        let vehicle = Vehicle::default();
        let eval = RouteEvaluator::new(&tm, &demands, &vehicle, 0).expect("valid");
        let (m, _) = eval.evaluate(&Route::direct("d", 3, 0, 1, 2)).expect("sized");
        assert!((m.travel_time - 1300.0).abs() < 1e-10);
        assert_eq!(m.coverage, vec![1]);
    }

    #[test]
    fn test_capacity_violated() {
        let (tm, demands) = setup();
        let vehicle = Vehicle::default().with_capacity(10.0);
        let eval = RouteEvaluator::new(&tm, &demands, &vehicle, 0).expect("valid");
        let (_, violations) = eval.evaluate(&triangle()).expect("sized");
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0].kind,
            ViolationType::CapacityExceeded { capacity, .. } if capacity == 10.0
        ));
    }

    #[test]
    fn test_duration_violated() {
        let (tm, demands) = setup();
        let vehicle = Vehicle::default().with_max_duration(Some(3600.0));
        let eval = RouteEvaluator::new(&tm, &demands, &vehicle, 0).expect("valid");
        let (_, violations) = eval.evaluate(&triangle()).expect("sized");
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0].kind,
            ViolationType::MaxDurationExceeded { .. }
        ));
    }

    #[test]
    fn test_evaluate_all_indexes() {
        let (tm, demands) = setup();
        let vehicle = Vehicle::default().with_capacity(6.0);
        let eval = RouteEvaluator::new(&tm, &demands, &vehicle, 0).expect("valid");
        let mut set = RouteSet::new(3, 0);
        set.push(Route::direct("d1", 3, 0, 1, 2));
        set.push(Route::direct("d2", 3, 0, 2, 2));
        let (metrics, violations) = eval.evaluate_all(&set).expect("sized");
        assert_eq!(metrics.len(), 2);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].route_index(), 1);
    }

    #[test]
    fn test_route_from_other_region() {
        let (tm, demands) = setup();
        let vehicle = Vehicle::default();
        let eval = RouteEvaluator::new(&tm, &demands, &vehicle, 0).expect("valid");
        assert!(matches!(
            eval.evaluate(&Route::direct("r", 4, 0, 1, 2)),
            Err(RouteGenError::DimensionMismatch { expected: 3, found: 4 })
        ));
        let mut set = RouteSet::new(4, 0);
        set.push(Route::direct("r", 4, 0, 1, 2));
        assert!(matches!(
            eval.evaluate_all(&set),
            Err(RouteGenError::DimensionMismatch { expected: 3, found: 4 })
        ));
    }

    #[test]
    fn test_bad_inputs() {
        let (tm, _) = setup();
        let vehicle = Vehicle::default();
        assert!(matches!(
            RouteEvaluator::new(&tm, &[1.0], &vehicle, 0),
            Err(RouteGenError::DimensionMismatch { expected: 3, found: 1 })
        ));
        assert!(RouteEvaluator::new(&tm, &[0.0; 3], &vehicle, 3).is_err());
    }
}
